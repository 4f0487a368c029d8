//! Annotated-corpus extractor.
//!
//! Streams the corpus XML event-by-event and yields one [`Annotation`]
//! per code token on every annotated element, wherever it sits in the
//! tree. The schema is deliberately not modeled: any element carrying
//! the code and reference attributes with non-empty text content is a
//! token element.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use semdom_model::Annotation;

use crate::error::IngestError;

/// Attribute holding the space-separated Louw-Nida code tokens.
pub const CODE_ATTR: &[u8] = b"ln";
/// Attribute holding the text reference.
pub const REF_ATTR: &[u8] = b"ref";

struct PendingToken {
    codes: String,
    reference: String,
    word: String,
}

impl PendingToken {
    fn finish(self, annotations: &mut Vec<Annotation>) {
        for token in self.codes.split_whitespace() {
            if let Some(annotation) = Annotation::from_fields(token, &self.word, &self.reference) {
                annotations.push(annotation);
            }
        }
    }
}

/// Extract all annotations from a corpus document.
///
/// A document that is not well-formed XML fails the whole run; no
/// partial extraction is attempted. Extraction order follows document
/// order and is deterministic for a fixed input.
pub fn extract_annotations(path: &Path) -> Result<Vec<Annotation>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;

    let mut reader = Reader::from_str(&content);
    reader.config_mut().trim_text(true);

    let mut annotations = Vec::new();
    // One slot per open element; Some when that element is a token
    // element still collecting its text. Text attaches to the
    // innermost annotated element only.
    let mut open: Vec<Option<PendingToken>> = Vec::new();

    loop {
        match reader.read_event() {
            Err(e) => return Err(IngestError::document_parse(path, e)),
            Ok(Event::Eof) => break,
            Ok(Event::Start(element)) => {
                open.push(pending_token(&element, path)?);
            }
            Ok(Event::End(_)) => {
                if let Some(Some(pending)) = open.pop() {
                    pending.finish(&mut annotations);
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(Some(pending)) = open.last_mut() {
                    let fragment = text
                        .unescape()
                        .map_err(|e| IngestError::document_parse(path, e))?;
                    pending.word.push_str(&fragment);
                }
            }
            // Self-closing elements have no text content and can never
            // yield an annotation; other events carry no token data.
            Ok(_) => {}
        }
    }

    debug!(
        annotations = annotations.len(),
        path = %path.display(),
        "extracted corpus annotations"
    );
    Ok(annotations)
}

fn pending_token(
    element: &BytesStart<'_>,
    path: &Path,
) -> Result<Option<PendingToken>, IngestError> {
    let mut codes = None;
    let mut reference = None;
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| IngestError::document_parse(path, e))?;
        let value = attribute
            .unescape_value()
            .map_err(|e| IngestError::document_parse(path, e))?;
        match attribute.key.as_ref() {
            k if k == CODE_ATTR => codes = Some(value.into_owned()),
            k if k == REF_ATTR => reference = Some(value.into_owned()),
            _ => {}
        }
    }
    Ok(match (codes, reference) {
        (Some(codes), Some(reference)) => Some(PendingToken {
            codes,
            reference,
            word: String::new(),
        }),
        _ => None,
    })
}
