//! Token estimation
//!
//! Approximates token counts from raw text length.

/// Approximate the token count of a text as ceil(len / 4).
///
/// Four bytes per token is the usual rough heuristic for prompt-sized
/// English text. The counts only feed order-of-magnitude cost
/// estimates, so exact tokenization is not worth the dependency.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.len() as u64).div_ceil(4)
}
