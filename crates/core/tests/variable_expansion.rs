use anyhow::Result;
use findref_core::location::decompose_path;
use findref_core::{
    perform_substitution, validate_variables, SubstitutionError, VariablesResolver,
};

#[test]
fn expanded_setting_feeds_path_decomposition() -> Result<()> {
    let resolver: VariablesResolver = [
        ("WORKSPACE", "workspace"),
        ("MODULE", "module"),
    ]
    .into_iter()
    .collect();

    let path = resolver.resolve("${WORKSPACE}/${MODULE}/src/file.c")?;
    assert_eq!(path, "workspace/module/src/file.c");

    let input = decompose_path(&path);
    assert_eq!(input.project_name(), Some("module"));
    assert_eq!(input.project_relative_path(), Some("src/file.c"));
    Ok(())
}

#[test]
fn values_containing_references_converge_over_passes() -> Result<()> {
    let resolver: VariablesResolver = [
        ("ROOT", "${DRIVE}/work"),
        ("DRIVE", "C:"),
        ("OUT", "${ROOT}/reports"),
    ]
    .into_iter()
    .collect();

    assert_eq!(resolver.resolve("${OUT}/latest.xml")?, "C:/work/reports/latest.xml");
    Ok(())
}

#[test]
fn unbound_references_round_trip_through_resolution() -> Result<()> {
    let resolver = VariablesResolver::new();
    let expanded = resolver.resolve("${UNBOUND}/suffix")?;
    assert_eq!(expanded, "${UNBOUND}/suffix");
    Ok(())
}

#[test]
fn cyclic_bindings_are_reported_with_all_participants() {
    let resolver: VariablesResolver = [("A", "${B}"), ("B", "${A}")].into_iter().collect();
    let error = resolver.resolve("${A}").unwrap_err();
    match error {
        SubstitutionError::CircularReference { variables } => {
            assert_eq!(variables, vec!["A".to_string(), "B".to_string()]);
        }
        other => panic!("expected circular reference error, got {other:?}"),
    }
}

#[test]
fn strict_validation_rejects_what_lenient_resolution_tolerates() {
    let bindings: std::collections::BTreeMap<String, String> = std::collections::BTreeMap::new();

    let lenient = perform_substitution("${MISSING}", false, true, &bindings).unwrap();
    assert_eq!(lenient, "${MISSING}");

    let strict = validate_variables("${MISSING}", &bindings).unwrap_err();
    assert!(matches!(strict, SubstitutionError::UndefinedReference { .. }));
}
