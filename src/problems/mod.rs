//! Small algorithms built only from the public container API.
//!
//! The string problems in [`stack`] each drive a [`Stack`](crate::collections::adapters::Stack),
//! while [`list`] works on the linked lists directly.

pub mod list;
pub mod stack;
mod tests;

#[doc(inline)]
pub use list::{dedup_sorted, dedup_sorted_cursor, is_palindrome, kth_from_end, sum_lists};
#[doc(inline)]
pub use stack::{is_balanced, remove_k_digits, remove_k_duplicates, zuma};
