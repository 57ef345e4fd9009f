use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use findref_core::location::schema;
use findref_core::{
    LegacyLocationsReader, LocationReader, LocationsParseError, LocationsReader, SourceRange,
    TestableInput,
};

const REPORT_TABLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Locations>
    <Loc locRef="L1" projId="engine" resProjPath="src/pipeline.c"
         projPath="/work/engine" projName="engine" symbols="parse;emit"/>
    <Loc locRef="L2" scPath="scm/server/handler.c"/>
    <Loc locRef="L3" uri="http://host/api/resource" projId="remote" projName="remoteProj"/>
    <Loc locRef="L4" loc="workspace/module/src/file.c"/>
</Locations>"#;

#[test]
fn current_table_resolves_every_documented_shape() -> Result<()> {
    let reader = LocationsReader::from_document(REPORT_TABLE)?;
    assert_eq!(reader.len(), 4);

    let root_file = reader.resolve_input("L1", false)?.unwrap();
    let expected = Path::new("engine")
        .join("src/pipeline.c")
        .to_string_lossy()
        .into_owned();
    assert_eq!(root_file.name(), expected);
    assert_eq!(root_file.project_name(), Some("engine"));
    assert_eq!(root_file.attribute(schema::ATTR_SYMBOLS), Some("parse;emit"));

    let source_control = reader.resolve_input("L2", false)?.unwrap();
    assert_eq!(source_control.name(), "scm/server/handler.c");
    assert_eq!(source_control.project_name(), None);

    let remote = reader.resolve_input("L3", false)?.unwrap();
    assert_eq!(remote.kind(), "remote_resource");
    assert_eq!(remote.project_relative_path(), Some("http://host/api/resource"));

    let decomposed = reader.resolve_input("L4", false)?.unwrap();
    assert_eq!(decomposed.project_name(), Some("module"));
    assert_eq!(decomposed.project_path(), Some("workspace/module"));
    assert_eq!(decomposed.project_relative_path(), Some("src/file.c"));

    Ok(())
}

#[test]
fn resolved_locations_carry_their_ranges_and_serialize() -> Result<()> {
    let reader = LocationsReader::from_document(REPORT_TABLE)?;
    let range = SourceRange::new(12, 5, 12, 37);
    let resolved = reader.resolve_location("L2", range, false)?.unwrap();
    assert_eq!(resolved.range, range);

    let value = serde_json::to_value(&resolved)?;
    assert_eq!(value["input"]["type"], "file_in_root");
    assert_eq!(value["range"]["start_line"], 12);
    Ok(())
}

#[test]
fn repository_remapping_applies_before_storage() -> Result<()> {
    let table = r#"<Locations>
        <Loc locRef="L1" repRef="upstream" scPath="scm/a.c"/>
    </Locations>"#;
    let mappings: BTreeMap<String, String> =
        [("upstream".to_string(), "mirrored-upstream".to_string())]
            .into_iter()
            .collect();

    let reader = LocationsReader::from_document_with_repositories(table, &mappings)?;
    let stored = reader.stored("L1").unwrap();
    assert_eq!(stored.repository_reference(), Some("mirrored-upstream"));
    Ok(())
}

#[test]
fn unmapped_repository_aborts_the_whole_document() {
    let table = r#"<Locations>
        <Loc locRef="L1" scPath="scm/a.c"/>
        <Loc locRef="L2" repRef="unknown" scPath="scm/b.c"/>
    </Locations>"#;
    let mappings: BTreeMap<String, String> =
        [("upstream".to_string(), "u".to_string())].into_iter().collect();

    let error = LocationsReader::from_document_with_repositories(table, &mappings).unwrap_err();
    assert!(matches!(
        error,
        LocationsParseError::UnmappedRepository { .. }
    ));
}

#[test]
fn malformed_document_aborts_instead_of_skipping_entries() {
    let table = r#"<Locations>
        <Loc locRef="L1" scPath="scm/a.c"/>
        <Unexpected/>
    </Locations>"#;
    let error = LocationsReader::from_document(table).unwrap_err();
    match error {
        LocationsParseError::MalformedDocument { tag } => assert_eq!(tag, "Unexpected"),
        other => panic!("expected malformed document error, got {other:?}"),
    }
}

#[test]
fn legacy_reader_answers_every_reference() -> Result<()> {
    let table = r#"<Locations>
        <Loc loc="engine/src/pipeline.c" projId="engine" resProjPath="src/pipeline.c"/>
    </Locations>"#;
    let reader = LegacyLocationsReader::from_document(table)?;

    let known = reader.resolve_input("engine/src/pipeline.c", false)?.unwrap();
    assert_eq!(known.kind(), "file_in_root");

    let unknown = reader.resolve_input("somewhere/else.c", false)?.unwrap();
    assert_eq!(
        unknown,
        TestableInput::RawPath {
            path: "somewhere/else.c".to_string()
        }
    );
    Ok(())
}

#[test]
fn readers_answer_identically_across_repeated_queries() -> Result<()> {
    let reader = LocationsReader::from_document(REPORT_TABLE)?;
    for reference in ["L1", "L2", "L3", "L4"] {
        let first = reader.resolve_input(reference, false)?;
        let second = reader.resolve_input(reference, true)?;
        assert_eq!(first, second);
    }
    Ok(())
}
