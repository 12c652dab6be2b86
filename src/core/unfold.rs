//! vCard line unfolding
//!
//! RFC 6350 folds a long property line across physical lines by inserting a
//! newline followed by a space or tab before the continuation. Unfolding
//! reverses that so the rest of the pipeline can work on logical lines.

/// Unfold folded vCard lines.
///
/// Normalizes `\r\n` and lone `\r` to `\n`, then removes the folding
/// markers: a newline followed by a space is deleted entirely (the
/// continuation is joined with no separator), while a newline followed by a
/// tab keeps the line break and drops only the tab. The space/tab asymmetry
/// is part of the contract and must not be changed.
pub fn unfold(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("\n ", "")
        .replace("\n\t", "\n")
}
