#![deny(unsafe_code)]

/// One annotated token extracted from the corpus: a raw Louw-Nida code
/// as written, the word it classifies, and the text reference it came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    pub raw_code: String,
    pub word: String,
    pub reference: String,
}

impl Annotation {
    /// Build an annotation from untrimmed source fields.
    ///
    /// Returns `None` when any field is empty after trimming; such
    /// tokens carry no usable evidence and are dropped at extraction.
    pub fn from_fields(raw_code: &str, word: &str, reference: &str) -> Option<Self> {
        let raw_code = raw_code.trim();
        let word = word.trim();
        let reference = reference.trim();
        if raw_code.is_empty() || word.is_empty() || reference.is_empty() {
            return None;
        }
        Some(Self {
            raw_code: raw_code.to_string(),
            word: word.to_string(),
            reference: reference.to_string(),
        })
    }
}
