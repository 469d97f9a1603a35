#![warn(missing_docs)]

pub mod alloc;
pub mod error;
#[cfg(test)]
pub mod hash;
pub mod option;
pub mod panic;
pub mod result;
