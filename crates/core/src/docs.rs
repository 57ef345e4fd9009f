// Seam for rule-documentation lookup. HTTP, archive browsing and locale
// handling live behind implementations outside this crate.

/// Maps an analyzer id and rule id to a documentation URL, when one exists.
pub trait RuleDocumentationProvider {
    fn documentation_url(&self, analyzer_id: &str, rule_id: &str) -> Option<String>;
}

/// Provider with no documentation source configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDocumentation;

impl RuleDocumentationProvider for NoDocumentation {
    fn documentation_url(&self, _analyzer_id: &str, _rule_id: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_documentation_always_answers_none() {
        assert_eq!(NoDocumentation.documentation_url("analyzer", "RULE.ID"), None);
    }
}
