pub mod docs;
pub mod location;
pub mod vars;

pub use docs::{NoDocumentation, RuleDocumentationProvider};
pub use location::{
    DefaultLocationMatcher, LegacyLocationsReader, LocationMatcher, LocationReader,
    LocationResolutionError, LocationsParseError, LocationsReader, ProjectAttributes,
    ResolvedLocation, SourceRange, StoredLocation, TestableInput,
};
pub use vars::{
    perform_substitution, validate_variables, SubstitutionError, VariableSource, VariablesResolver,
};
