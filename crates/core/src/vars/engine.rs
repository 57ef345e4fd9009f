//! Multi-pass substitution over a single expression string.
//!
//! One pass scans the expression left to right, maintaining a stack of open
//! reference frames so nested references resolve innermost-first. Because a
//! resolved value may itself contain new references, whole-expression passes
//! repeat while the previous pass substituted anything; the set of names
//! resolved by each pass is recorded, and a pass resolving a name-set already
//! seen marks an unproductive cycle.

use std::collections::BTreeSet;

use super::error::SubstitutionError;
use super::source::VariableSource;
use super::stack::{VariableReference, VariableStack};
use super::{VARIABLE_END, VARIABLE_START};

/// Outcome of a single substitution pass.
struct SubstitutionPass {
    text: String,
    substituted: bool,
    resolved: BTreeSet<String>,
}

/// Expands every `${...}` reference in `expression`.
///
/// With `report_undefined`, a reference whose name has no binding fails;
/// otherwise it survives verbatim. With `resolve_values` false the call
/// validates only: defined references are left untouched and no further
/// passes run. Fails with [`SubstitutionError::CircularReference`] when
/// repeated passes keep resolving the same set of names without converging.
pub fn perform_substitution<S>(
    expression: &str,
    report_undefined: bool,
    resolve_values: bool,
    variables: &S,
) -> Result<String, SubstitutionError>
where
    S: VariableSource + ?Sized,
{
    let mut pass = substitute(expression, report_undefined, resolve_values, variables)?;
    let mut resolved_sets: Vec<BTreeSet<String>> = Vec::new();

    while pass.substituted {
        let next = substitute(&pass.text, report_undefined, true, variables)?;

        if resolved_sets.iter().any(|previous| *previous == next.resolved) {
            let conflicting: BTreeSet<String> = resolved_sets.into_iter().flatten().collect();
            return Err(SubstitutionError::CircularReference {
                variables: conflicting.into_iter().collect(),
            });
        }

        resolved_sets.push(next.resolved.clone());
        pass = next;
    }

    Ok(pass.text)
}

/// Checks that every defined reference in `expression` is well-formed and
/// every referenced name is bound, without substituting anything.
pub fn validate_variables<S>(expression: &str, variables: &S) -> Result<(), SubstitutionError>
where
    S: VariableSource + ?Sized,
{
    perform_substitution(expression, true, false, variables).map(|_| ())
}

/// Runs one left-to-right scan over `expression`.
///
/// Literal text is copied to the innermost open frame, or to the result
/// buffer when no frame is open. A start marker pushes a frame; an end
/// marker pops and resolves the top frame, appending the resolved text one
/// level up. Frames still open at the end of input are re-emitted verbatim
/// with their start marker restored.
fn substitute<S>(
    expression: &str,
    report_undefined: bool,
    resolve_values: bool,
    variables: &S,
) -> Result<SubstitutionPass, SubstitutionError>
where
    S: VariableSource + ?Sized,
{
    let mut result = String::with_capacity(expression.len());
    let mut stack = VariableStack::new();
    let mut substituted = false;
    let mut resolved = BTreeSet::new();
    let mut pos = 0;

    while pos < expression.len() {
        let remaining = &expression[pos..];
        match stack.pop() {
            None => match remaining.find(VARIABLE_START) {
                Some(start) => {
                    result.push_str(&remaining[..start]);
                    pos += start + VARIABLE_START.len();
                    stack.push(VariableReference::new());
                }
                None => {
                    result.push_str(remaining);
                    pos = expression.len();
                }
            },
            Some(mut reference) => {
                let start = remaining.find(VARIABLE_START);
                match remaining.find(VARIABLE_END) {
                    None => {
                        // Unterminated reference; restored after the scan.
                        reference.append(remaining);
                        stack.push(reference);
                        pos = expression.len();
                    }
                    Some(end) => match start.filter(|start| *start < end) {
                        Some(start) => {
                            // A nested reference opens before this one closes.
                            reference.append(&remaining[..start]);
                            stack.push(reference);
                            stack.push(VariableReference::new());
                            pos += start + VARIABLE_START.len();
                        }
                        None => {
                            reference.append(&remaining[..end]);
                            pos += end + VARIABLE_END.len_utf8();
                            let value = resolve_reference(
                                &reference,
                                report_undefined,
                                resolve_values,
                                variables,
                                &mut substituted,
                                &mut resolved,
                            )?;
                            match stack.top_mut() {
                                Some(parent) => parent.append(&value),
                                None => result.push_str(&value),
                            }
                        }
                    },
                }
            }
        }
    }

    while let Some(reference) = stack.pop() {
        match stack.top_mut() {
            Some(parent) => {
                parent.append(VARIABLE_START);
                parent.append(reference.text());
            }
            None => {
                result.push_str(VARIABLE_START);
                result.push_str(reference.text());
            }
        }
    }

    Ok(SubstitutionPass {
        text: result,
        substituted,
        resolved,
    })
}

/// Resolves one popped frame against the variable source.
fn resolve_reference<S>(
    reference: &VariableReference,
    report_undefined: bool,
    resolve_values: bool,
    variables: &S,
    substituted: &mut bool,
    resolved: &mut BTreeSet<String>,
) -> Result<String, SubstitutionError>
where
    S: VariableSource + ?Sized,
{
    let (name, argument) = reference.name_and_argument();

    let Some(value) = variables.value_of(name) else {
        if report_undefined {
            return Err(SubstitutionError::UndefinedReference {
                name: name.to_string(),
            });
        }
        return Ok(reference.original_text());
    };

    if argument.is_some() {
        return Err(SubstitutionError::ArgumentOnFixedValue {
            name: name.to_string(),
        });
    }

    if resolve_values {
        *substituted = true;
        resolved.insert(name.to_string());
        Ok(value.to_string())
    } else {
        Ok(reference.original_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn expression_without_references_is_identity() {
        let variables = bindings(&[]);
        let expanded = perform_substitution("plain text, no markers", false, true, &variables);
        assert_eq!(expanded.unwrap(), "plain text, no markers");
    }

    #[test]
    fn empty_expression_is_identity() {
        let variables = bindings(&[]);
        assert_eq!(perform_substitution("", false, true, &variables).unwrap(), "");
    }

    #[test]
    fn expands_chained_path_references() {
        let variables = bindings(&[
            ("A", "C:"),
            ("B", "Program Files/Java"),
            ("C", "jdk1.8.0_301/bin"),
        ]);
        let expanded = perform_substitution("${A}/${B}/${C}", false, true, &variables).unwrap();
        assert_eq!(expanded, "C:/Program Files/Java/jdk1.8.0_301/bin");
    }

    #[test]
    fn unbound_reference_survives_verbatim() {
        let variables = bindings(&[]);
        let expanded = perform_substitution("${UNBOUND}", false, true, &variables).unwrap();
        assert_eq!(expanded, "${UNBOUND}");
    }

    #[test]
    fn unbound_reference_fails_when_reported() {
        let variables = bindings(&[]);
        let err = perform_substitution("${UNBOUND}", true, true, &variables).unwrap_err();
        assert_eq!(
            err,
            SubstitutionError::UndefinedReference {
                name: "UNBOUND".to_string()
            }
        );
    }

    #[test]
    fn nested_references_resolve_innermost_first() {
        let variables = bindings(&[("B", "X"), ("AX", "Y")]);
        let expanded = perform_substitution("${A${B}}", false, true, &variables).unwrap();
        assert_eq!(expanded, "Y");
    }

    #[test]
    fn nested_reference_with_unbound_outer_survives() {
        let variables = bindings(&[("B", "X")]);
        let expanded = perform_substitution("${A${B}}", false, true, &variables).unwrap();
        assert_eq!(expanded, "${AX}");
    }

    #[test]
    fn value_containing_reference_is_expanded_on_a_later_pass() {
        let variables = bindings(&[("A", "${B}"), ("B", "final")]);
        let expanded = perform_substitution("${A}", false, true, &variables).unwrap();
        assert_eq!(expanded, "final");
    }

    #[test]
    fn validate_only_leaves_defined_references_untouched() {
        let variables = bindings(&[("A", "value")]);
        let expanded = perform_substitution("${A}", false, false, &variables).unwrap();
        assert_eq!(expanded, "${A}");
    }

    #[test]
    fn validate_variables_accepts_bound_names() {
        let variables = bindings(&[("A", "value")]);
        assert!(validate_variables("prefix ${A} suffix", &variables).is_ok());
    }

    #[test]
    fn validate_variables_rejects_unbound_names() {
        let variables = bindings(&[]);
        let err = validate_variables("${MISSING}", &variables).unwrap_err();
        assert!(matches!(
            err,
            SubstitutionError::UndefinedReference { .. }
        ));
    }

    #[test]
    fn argument_on_fixed_value_fails() {
        let variables = bindings(&[("A", "value")]);
        let err = perform_substitution("${A:arg}", false, true, &variables).unwrap_err();
        assert_eq!(
            err,
            SubstitutionError::ArgumentOnFixedValue {
                name: "A".to_string()
            }
        );
    }

    #[test]
    fn empty_argument_still_counts_as_argument() {
        let variables = bindings(&[("A", "value")]);
        let err = perform_substitution("${A:}", false, true, &variables).unwrap_err();
        assert!(matches!(
            err,
            SubstitutionError::ArgumentOnFixedValue { .. }
        ));
    }

    #[test]
    fn argument_on_unbound_name_survives_verbatim() {
        let variables = bindings(&[]);
        let expanded = perform_substitution("${A:arg}", false, true, &variables).unwrap();
        assert_eq!(expanded, "${A:arg}");
    }

    #[test]
    fn unterminated_reference_is_restored() {
        let variables = bindings(&[("A", "value")]);
        let expanded = perform_substitution("${A", false, true, &variables).unwrap();
        assert_eq!(expanded, "${A");
    }

    #[test]
    fn unterminated_tail_after_complete_reference() {
        let variables = bindings(&[("A", "one")]);
        let expanded = perform_substitution("${A} and ${B", false, true, &variables).unwrap();
        assert_eq!(expanded, "one and ${B");
    }

    #[test]
    fn unterminated_outer_keeps_resolved_inner() {
        let variables = bindings(&[("b", "X")]);
        let expanded = perform_substitution("${a${b}", false, true, &variables).unwrap();
        assert_eq!(expanded, "${aX");
    }

    #[test]
    fn unterminated_nested_round_trips() {
        let variables = bindings(&[]);
        let expanded = perform_substitution("a${b${c", false, true, &variables).unwrap();
        assert_eq!(expanded, "a${b${c");
    }

    #[test]
    fn two_way_cycle_is_detected() {
        let variables = bindings(&[("A", "${B}"), ("B", "${A}")]);
        let err = perform_substitution("${A}", false, true, &variables).unwrap_err();
        match err {
            SubstitutionError::CircularReference { variables } => {
                assert_eq!(variables, vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("expected circular reference error, got {other:?}"),
        }
    }

    #[test]
    fn self_cycle_is_detected() {
        let variables = bindings(&[("A", "${A}")]);
        let err = perform_substitution("${A}", false, true, &variables).unwrap_err();
        assert!(matches!(
            err,
            SubstitutionError::CircularReference { .. }
        ));
    }

    #[test]
    fn longer_cycle_reports_every_participant() {
        let variables = bindings(&[("A", "${B} ${C}"), ("B", "x"), ("C", "${A}")]);
        let err = perform_substitution("${A}", false, true, &variables).unwrap_err();
        match err {
            SubstitutionError::CircularReference { variables } => {
                assert_eq!(
                    variables,
                    vec!["A".to_string(), "B".to_string(), "C".to_string()]
                );
            }
            other => panic!("expected circular reference error, got {other:?}"),
        }
    }

    #[test]
    fn literal_text_around_references_is_preserved() {
        let variables = bindings(&[("NAME", "report")]);
        let expanded =
            perform_substitution("out/${NAME}-v2.xml", false, true, &variables).unwrap();
        assert_eq!(expanded, "out/report-v2.xml");
    }

    #[test]
    fn lone_end_marker_is_literal() {
        let variables = bindings(&[]);
        let expanded = perform_substitution("a}b", false, true, &variables).unwrap();
        assert_eq!(expanded, "a}b");
    }

    #[test]
    fn preserves_multibyte_text_around_references() {
        let variables = bindings(&[("A", "wert")]);
        let expanded = perform_substitution("größe ${A}", false, true, &variables).unwrap();
        assert_eq!(expanded, "größe wert");
    }
}
