//! Recursion Core Library
//!
//! Two standalone recursive computations:
//! - Factorial of a non-negative integer
//! - Palindrome check on a string
//!
//! Both are pure and hold no state, so they can be called from any number
//! of threads at once. Neither bounds its input: factorial recursion depth
//! equals `n`, palindrome depth is half the character count.

pub mod error;
pub mod factorial;
pub mod palindrome;

pub use error::{RecursionError, Result};
pub use factorial::compute as compute_factorial;
pub use palindrome::is_palindrome;
