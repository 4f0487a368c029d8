//! Integration tests for the semantic-domain XML reader.

use std::io::Write;

use semdom_ingest::{collect_code_index, load_semantic_domains};

const SAMPLE: &str = r#"<LangProject>
  <SemanticDomainList>
    <Possibilities>
      <ownseq class="CmSemanticDomain">
        <Abbreviation><AUni ws="en">1</AUni><AUni ws="fr">un</AUni></Abbreviation>
        <Name><AUni ws="en">Universe, creation</AUni></Name>
        <LouwNidaCodes><Uni>1A Universe;1B Regions Above the Earth</Uni></LouwNidaCodes>
        <SubPossibilities>
          <ownseq class="CmSemanticDomain">
            <Abbreviation><AUni ws="en">1.14</AUni></Abbreviation>
            <Name><AUni ws="en">Weather</AUni></Name>
            <LouwNidaCodes><Uni>14A Weather</Uni></LouwNidaCodes>
          </ownseq>
        </SubPossibilities>
      </ownseq>
    </Possibilities>
  </SemanticDomainList>
</LangProject>"#;

#[test]
fn parses_nested_domains_with_english_fields() {
    let file = write_xml(SAMPLE);
    let domains = load_semantic_domains(file.path()).expect("parse lexicon");

    assert_eq!(domains.len(), 1);
    let root = &domains[0];
    assert_eq!(root.abbreviation, "1");
    assert_eq!(root.name, "Universe, creation");
    assert_eq!(
        root.louw_nida_codes,
        vec!["1A Universe", "1B Regions Above the Earth"]
    );

    assert_eq!(root.children.len(), 1);
    let child = &root.children[0];
    assert_eq!(child.abbreviation, "1.14");
    assert_eq!(child.name, "Weather");
    assert_eq!(child.louw_nida_codes, vec!["14A Weather"]);
}

#[test]
fn code_index_collects_abbreviations_and_names_per_code() {
    let file = write_xml(SAMPLE);
    let domains = load_semantic_domains(file.path()).expect("parse lexicon");
    let index = collect_code_index(&domains);

    assert_eq!(index.len(), 3);
    let weather = &index["14A Weather"];
    assert!(weather.abbreviations.contains("1.14"));
    assert!(weather.names.contains("Weather"));
    let universe = &index["1A Universe"];
    assert!(universe.abbreviations.contains("1"));
    assert!(universe.names.contains("Universe, creation"));
}

#[test]
fn non_english_fields_are_ignored() {
    let file = write_xml(SAMPLE);
    let domains = load_semantic_domains(file.path()).expect("parse lexicon");
    assert_eq!(domains[0].abbreviation, "1");
}

#[test]
fn code_shared_by_two_domains_collects_both() {
    let file = write_xml(
        r#"<Possibilities>
             <ownseq class="CmSemanticDomain">
               <Abbreviation><AUni ws="en">3.1</AUni></Abbreviation>
               <Name><AUni ws="en">Relations</AUni></Name>
               <LouwNidaCodes><Uni>89 Relations</Uni></LouwNidaCodes>
             </ownseq>
             <ownseq class="CmSemanticDomain">
               <Abbreviation><AUni ws="en">3.2</AUni></Abbreviation>
               <Name><AUni ws="en">Cause</AUni></Name>
               <LouwNidaCodes><Uni>89 Relations</Uni></LouwNidaCodes>
             </ownseq>
           </Possibilities>"#,
    );
    let domains = load_semantic_domains(file.path()).expect("parse lexicon");
    let index = collect_code_index(&domains);

    let entry = &index["89 Relations"];
    assert_eq!(entry.abbreviations.len(), 2);
    assert_eq!(entry.names.len(), 2);
}

fn write_xml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp xml");
    file.write_all(content.as_bytes()).expect("write temp xml");
    file
}
