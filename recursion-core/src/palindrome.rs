//! Recursive palindrome check

use tracing::trace;

/// Check whether `input` reads the same forwards and backwards.
///
/// Characters are compared exactly: case-sensitive, no normalization.
/// Every string is valid input, including the empty string.
pub fn is_palindrome(input: &str) -> bool {
    trace!(len = input.len(), "checking palindrome");
    is_palindrome_recursive(input)
}

fn is_palindrome_recursive(input: &str) -> bool {
    let mut chars = input.chars();
    match (chars.next(), chars.next_back()) {
        // `chars` now holds the input with both ends stripped
        (Some(first), Some(last)) => first == last && is_palindrome_recursive(chars.as_str()),
        // zero or one character
        _ => true,
    }
}
