//! A module containing [`Slots`], a heap buffer which is sized once at runtime.

mod slots;

pub use slots::*;
