//! FLEx semantic-domain list reader.
//!
//! Parses the lexicon's semantic-domain XML export into a typed tree
//! of [`SemanticDomain`] nodes and flattens it into the per-code index
//! the mapping CSV is generated from. Only English abbreviation and
//! name fields are read.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::IngestError;

/// One node of the semantic-domain hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticDomain {
    /// English abbreviation (the domain's own short code, e.g. `"1.14"`).
    pub abbreviation: String,
    /// English name (e.g. `"Weather"`).
    pub name: String,
    /// Louw-Nida codes listed for this domain, split on `;`.
    pub louw_nida_codes: Vec<String>,
    /// Nested sub-domains.
    pub children: Vec<SemanticDomain>,
}

/// Abbreviations and names collected for one Louw-Nida code across the
/// whole hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeIndexEntry {
    pub abbreviations: BTreeSet<String>,
    pub names: BTreeSet<String>,
}

/// Which text field of the current domain a text event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Domain,
    Abbreviation,
    Name,
    Codes,
    AbbreviationText,
    NameText,
    CodesText,
    Other,
}

#[derive(Default)]
struct DomainBuilder {
    abbreviation: String,
    name: String,
    codes_text: String,
    children: Vec<SemanticDomain>,
}

impl DomainBuilder {
    fn finish(self) -> SemanticDomain {
        let louw_nida_codes = self
            .codes_text
            .split(';')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        SemanticDomain {
            abbreviation: self.abbreviation,
            name: self.name,
            louw_nida_codes,
            children: self.children,
        }
    }
}

/// Parse the semantic-domain hierarchy from a FLEx XML export.
pub fn load_semantic_domains(path: &Path) -> Result<Vec<SemanticDomain>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;

    let mut reader = Reader::from_str(&content);
    reader.config_mut().trim_text(true);

    let mut roots = Vec::new();
    let mut domains: Vec<DomainBuilder> = Vec::new();
    let mut path_stack: Vec<Node> = Vec::new();

    loop {
        match reader.read_event() {
            Err(e) => return Err(IngestError::document_parse(path, e)),
            Ok(Event::Eof) => break,
            Ok(Event::Start(element)) => {
                let node = classify(&element, path_stack.last(), path)?;
                if node == Node::Domain {
                    domains.push(DomainBuilder::default());
                }
                path_stack.push(node);
            }
            Ok(Event::End(_)) => {
                if path_stack.pop() == Some(Node::Domain)
                    && let Some(builder) = domains.pop()
                {
                    let domain = builder.finish();
                    match domains.last_mut() {
                        Some(parent) => parent.children.push(domain),
                        None => roots.push(domain),
                    }
                }
            }
            Ok(Event::Text(text)) => {
                let Some(builder) = domains.last_mut() else {
                    continue;
                };
                let field = match path_stack.last() {
                    Some(Node::AbbreviationText) => Some(&mut builder.abbreviation),
                    Some(Node::NameText) => Some(&mut builder.name),
                    Some(Node::CodesText) => Some(&mut builder.codes_text),
                    _ => None,
                };
                if let Some(field) = field {
                    let fragment = text
                        .unescape()
                        .map_err(|e| IngestError::document_parse(path, e))?;
                    field.push_str(&fragment);
                }
            }
            Ok(_) => {}
        }
    }

    debug!(
        top_level = roots.len(),
        path = %path.display(),
        "parsed semantic-domain hierarchy"
    );
    Ok(roots)
}

fn classify(
    element: &BytesStart<'_>,
    parent: Option<&Node>,
    path: &Path,
) -> Result<Node, IngestError> {
    Ok(match element.local_name().as_ref() {
        b"ownseq" if has_attr(element, b"class", "CmSemanticDomain", path)? => Node::Domain,
        b"Abbreviation" => Node::Abbreviation,
        b"Name" => Node::Name,
        b"LouwNidaCodes" => Node::Codes,
        b"AUni" if has_attr(element, b"ws", "en", path)? => match parent {
            Some(Node::Abbreviation) => Node::AbbreviationText,
            Some(Node::Name) => Node::NameText,
            _ => Node::Other,
        },
        b"Uni" if parent == Some(&Node::Codes) => Node::CodesText,
        _ => Node::Other,
    })
}

fn has_attr(
    element: &BytesStart<'_>,
    key: &[u8],
    expected: &str,
    path: &Path,
) -> Result<bool, IngestError> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| IngestError::document_parse(path, e))?;
        if attribute.key.as_ref() == key {
            let value = attribute
                .unescape_value()
                .map_err(|e| IngestError::document_parse(path, e))?;
            return Ok(value == expected);
        }
    }
    Ok(false)
}

/// Flatten the hierarchy into a per-code index: each Louw-Nida code
/// with every abbreviation and name it appears under.
pub fn collect_code_index(domains: &[SemanticDomain]) -> BTreeMap<String, CodeIndexEntry> {
    let mut index = BTreeMap::new();
    for domain in domains {
        visit(domain, &mut index);
    }
    index
}

fn visit(domain: &SemanticDomain, index: &mut BTreeMap<String, CodeIndexEntry>) {
    for code in &domain.louw_nida_codes {
        let entry: &mut CodeIndexEntry = index.entry(code.clone()).or_default();
        if !domain.abbreviation.is_empty() {
            entry.abbreviations.insert(domain.abbreviation.clone());
        }
        if !domain.name.is_empty() {
            entry.names.insert(domain.name.clone());
        }
    }
    for child in &domain.children {
        visit(child, index);
    }
}
