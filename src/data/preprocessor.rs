// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Two cleaning jobs:
//
//   clean_text   — question stems copied out of documents carry
//                  tabs, non-breaking spaces and doubled spaces;
//                  collapse them to single plain spaces
//
//   clean_choice — choice texts often arrive pre-labelled, and
//                  sometimes labelled twice by a later edit:
//                    "A. 12 drops"    → "12 drops"
//                    "B: B. 7"        → "7"
//                    "C 15 potions"   → "15 potions"
//                  Stripping the label lets the assembler assign
//                  fresh A–D labels and compare answers fairly
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;

// A label letter must be followed by ':' / '.' or whitespace, so
// answers such as "Bottles: 5" keep their first letter.
static CHOICE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-D](?:[:.]\s*|\s+)(?:[A-D](?:[:.]\s*|\s+))?")
        .expect("choice label pattern is valid")
});

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Normalise whitespace in a stem or explanation.
    pub fn clean_text(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Strip a leading "A." / "B:" / "C " label (possibly doubled).
    pub fn clean_choice(&self, choice: &str) -> String {
        CHOICE_LABEL.replace(choice.trim(), "").trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
