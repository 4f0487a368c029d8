//! Integration tests for the corpus extractor.

use std::io::Write;

use semdom_ingest::{IngestError, extract_annotations};

fn write_xml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp xml");
    file.write_all(content.as_bytes()).expect("write temp xml");
    file
}

#[test]
fn extracts_annotated_tokens_anywhere_in_the_tree() {
    let file = write_xml(
        r#"<book>
             <chapter>
               <verse>
                 <w ln="89.32" ref="John 3:16">love</w>
               </verse>
             </chapter>
             <w ln="14.2" ref="Matt 5:45">rain</w>
           </book>"#,
    );
    let annotations = extract_annotations(file.path()).expect("extract");

    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].raw_code, "89.32");
    assert_eq!(annotations[0].word, "love");
    assert_eq!(annotations[0].reference, "John 3:16");
    assert_eq!(annotations[1].raw_code, "14.2");
    assert_eq!(annotations[1].word, "rain");
}

#[test]
fn multi_code_attribute_yields_one_annotation_per_token() {
    let file = write_xml(r#"<t><w ln="89.32 92.1" ref="John 3:16">love</w></t>"#);
    let annotations = extract_annotations(file.path()).expect("extract");

    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].raw_code, "89.32");
    assert_eq!(annotations[1].raw_code, "92.1");
    for annotation in &annotations {
        assert_eq!(annotation.word, "love");
        assert_eq!(annotation.reference, "John 3:16");
    }
}

#[test]
fn elements_missing_any_field_are_skipped() {
    let file = write_xml(
        r#"<t>
             <w ln="89.32">no reference</w>
             <w ref="John 3:16">no code</w>
             <w ln="89.32" ref="John 3:16">  </w>
             <w ln="89.32" ref="John 3:16"/>
             <w ln="92.1" ref="Mark 1:1">he</w>
           </t>"#,
    );
    let annotations = extract_annotations(file.path()).expect("extract");

    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].raw_code, "92.1");
    assert_eq!(annotations[0].word, "he");
}

#[test]
fn malformed_document_is_fatal() {
    let file = write_xml(r#"<t><w ln="89.32" ref="John 3:16">love</t>"#);
    let error = extract_annotations(file.path()).expect_err("malformed");
    assert!(matches!(error, IngestError::DocumentParse { .. }));
}

#[test]
fn missing_file_is_source_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let error = extract_annotations(&dir.path().join("nope.xml")).expect_err("missing file");
    assert!(matches!(error, IngestError::SourceNotFound { .. }));
}

#[test]
fn extraction_is_deterministic() {
    let file = write_xml(
        r#"<t>
             <w ln="89.32" ref="John 3:16">love</w>
             <w ln="14.2" ref="Matt 5:45">rain</w>
           </t>"#,
    );
    let first = extract_annotations(file.path()).expect("first pass");
    let second = extract_annotations(file.path()).expect("second pass");
    assert_eq!(first, second);
}
