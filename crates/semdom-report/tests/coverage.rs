//! End-to-end rendering tests over the full pipeline.

use std::io::Write;

use semdom_core::aggregate;
use semdom_ingest::{extract_annotations, load_mapping};
use semdom_report::{render_coverage_csv, render_unmatched, write_coverage_csv};

fn write_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn weather_scenario_end_to_end() {
    let mapping_file = write_file(
        "LouwNida_Code,SemDom,SemDom_Name\n\
         \"14A Weather\",\"1.14\",\"Weather\"\n",
    );
    let corpus_file = write_file(r#"<t><w ln="14.2" ref="Matt 5:45">rain</w></t>"#);

    let mapping = load_mapping(mapping_file.path()).expect("load mapping");
    let annotations = extract_annotations(corpus_file.path()).expect("extract corpus");
    let outcome = aggregate(&mapping, &annotations);

    let csv = render_coverage_csv(&outcome).expect("render coverage");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "SemDom,SemDom_Name,Total_Raw_Codes,Total_Unique_Words,\
             Total_Unique_References,Raw_Codes,Concordance"
        )
    );
    assert_eq!(
        lines.next(),
        Some("1.14,Weather,1,1,1,14.2,rain (Matt 5:45)")
    );
    assert_eq!(lines.next(), None);
    assert!(outcome.unmatched.is_empty());
}

#[test]
fn unmatched_code_is_listed_with_canonical_form() {
    let mapping_file = write_file(
        "LouwNida_Code,SemDom,SemDom_Name\n\
         \"14A Weather\",\"1.14\",\"Weather\"\n",
    );
    let corpus_file = write_file(r#"<t><w ln="999" ref="Rev 1:1">mystery</w></t>"#);

    let mapping = load_mapping(mapping_file.path()).expect("load mapping");
    let annotations = extract_annotations(corpus_file.path()).expect("extract corpus");
    let outcome = aggregate(&mapping, &annotations);

    assert!(outcome.domains.is_empty());
    let listing = render_unmatched(&outcome);
    assert!(listing.contains("999 -> 999"));
}

#[test]
fn rerun_produces_byte_identical_output() {
    let mapping_file = write_file(
        "LouwNida_Code,SemDom,SemDom_Name\n\
         \"89 Relations\",\"3.1;3.2\",\"Relations;Cause\"\n\
         \"92A Pronouns\",\"9.2\",\"Pronouns\"\n",
    );
    let corpus_file = write_file(
        r#"<t>
             <w ln="89.32 92.1" ref="John 3:16">love</w>
             <w ln="92a" ref="Mark 1:1">he</w>
             <w ln="89.7" ref="Rom 5:8">because</w>
           </t>"#,
    );

    let dir = tempfile::tempdir().expect("create temp dir");
    let mut renders = Vec::new();
    for run in 0..2 {
        let mapping = load_mapping(mapping_file.path()).expect("load mapping");
        let annotations = extract_annotations(corpus_file.path()).expect("extract corpus");
        let outcome = aggregate(&mapping, &annotations);
        let path = dir.path().join(format!("coverage_{run}.csv"));
        write_coverage_csv(&path, &outcome).expect("write coverage");
        renders.push(std::fs::read(&path).expect("read coverage"));
    }
    assert_eq!(renders[0], renders[1]);
}

#[test]
fn coverage_snapshot() {
    let mapping_file = write_file(
        "LouwNida_Code,SemDom,SemDom_Name\n\
         \"89 Relations\",\"3.1;3.2\",\"Relations;Cause\"\n\
         \"92A Pronouns\",\"9.2\",\"Pronouns\"\n",
    );
    let corpus_file = write_file(
        r#"<t>
             <w ln="89.32 92.1" ref="John 3:16">love</w>
             <w ln="92a" ref="Mark 1:1">he</w>
             <w ln="999" ref="Rev 1:1">mystery</w>
           </t>"#,
    );

    let mapping = load_mapping(mapping_file.path()).expect("load mapping");
    let annotations = extract_annotations(corpus_file.path()).expect("extract corpus");
    let outcome = aggregate(&mapping, &annotations);

    let rendered = format!(
        "{}\n{}",
        render_coverage_csv(&outcome).expect("render coverage"),
        render_unmatched(&outcome)
    );
    insta::assert_snapshot!(rendered);
}
