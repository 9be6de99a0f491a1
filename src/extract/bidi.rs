//! Normalization for direction-ambiguous Arabic text.
//!
//! Upstream extraction yields Arabic strings with uncontrolled direction and
//! shaping: a cell may arrive in logical order, fully mirrored, or encoded in
//! presentation-form codepoints. This module is the single place that deals
//! with it: NFKC compatibility normalization collapses presentation forms to
//! canonical letters, tatweel stripping removes elongation noise, and dual
//! forward/reversed matching recovers content regardless of storage order.
//! Every caller goes through these helpers instead of re-rolling the checks.

use unicode_normalization::UnicodeNormalization;

/// Arabic elongation character (tatweel); pure layout noise for matching.
const TATWEEL: char = '\u{0640}';

/// NFKC-normalize and strip tatweel.
pub fn normalize(text: &str) -> String {
    text.nfkc().filter(|&c| c != TATWEEL).collect()
}

/// Full character reversal, the counterpart of a mirrored extraction.
pub fn reversed(text: &str) -> String {
    text.chars().rev().collect()
}

/// Both readings of an already-normalized string: as stored, and mirrored.
pub fn readings(normalized: &str) -> [String; 2] {
    [normalized.to_string(), reversed(normalized)]
}
