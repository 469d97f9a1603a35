//! A module containing [`Stack`].

mod stack;
mod tests;

pub use stack::*;
