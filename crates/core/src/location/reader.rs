// Location readers: one parse builds the reference table, queries stay
// read-only afterwards and are safe to share across threads.

use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::debug;

use crate::location::error::{LocationResolutionError, LocationsParseError};
use crate::location::input::TestableInput;
use crate::location::matcher::{DefaultLocationMatcher, LocationMatcher};
use crate::location::parser::{parse_legacy_locations, parse_locations};
use crate::location::resolved::{ResolvedLocation, SourceRange};
use crate::location::stored::StoredLocation;

/// Answers "resolve this location reference into a concrete input".
///
/// A missing stored entry is not an error: current-schema readers answer
/// `None`, the legacy reader degrades to a raw path. Errors surface only
/// when a stored bag cannot be classified.
pub trait LocationReader {
    fn resolve_input(
        &self,
        reference: &str,
        accept_modified: bool,
    ) -> Result<Option<TestableInput>, LocationResolutionError>;

    fn resolve_location(
        &self,
        reference: &str,
        range: SourceRange,
        accept_modified: bool,
    ) -> Result<Option<ResolvedLocation>, LocationResolutionError> {
        Ok(self
            .resolve_input(reference, accept_modified)?
            .map(|input| ResolvedLocation::new(input, range)))
    }
}

/// Reader over a current-schema table, keyed by reference id.
#[derive(Debug)]
pub struct LocationsReader<M = DefaultLocationMatcher> {
    entries: BTreeMap<String, StoredLocation>,
    matcher: M,
}

impl LocationsReader {
    pub fn from_document(document: &str) -> Result<Self, LocationsParseError> {
        Self::with_matcher(document.as_bytes(), None, DefaultLocationMatcher)
    }

    pub fn from_reader<R: BufRead>(input: R) -> Result<Self, LocationsParseError> {
        Self::with_matcher(input, None, DefaultLocationMatcher)
    }

    pub fn from_document_with_repositories(
        document: &str,
        repositories: &BTreeMap<String, String>,
    ) -> Result<Self, LocationsParseError> {
        Self::with_matcher(document.as_bytes(), Some(repositories), DefaultLocationMatcher)
    }

    pub fn from_reader_with_repositories<R: BufRead>(
        input: R,
        repositories: &BTreeMap<String, String>,
    ) -> Result<Self, LocationsParseError> {
        Self::with_matcher(input, Some(repositories), DefaultLocationMatcher)
    }
}

impl<M: LocationMatcher> LocationsReader<M> {
    pub fn with_matcher<R: BufRead>(
        input: R,
        repositories: Option<&BTreeMap<String, String>>,
        matcher: M,
    ) -> Result<Self, LocationsParseError> {
        let entries = parse_locations(input, repositories)?;
        Ok(Self { entries, matcher })
    }

    pub fn stored(&self, reference: &str) -> Option<&StoredLocation> {
        self.entries.get(reference)
    }

    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: LocationMatcher> LocationReader for LocationsReader<M> {
    fn resolve_input(
        &self,
        reference: &str,
        accept_modified: bool,
    ) -> Result<Option<TestableInput>, LocationResolutionError> {
        match self.entries.get(reference) {
            Some(stored) => self
                .matcher
                .find_matching_input(stored, accept_modified)
                .map(Some),
            None => Ok(None),
        }
    }
}

/// Reader over a legacy-schema table, keyed by the raw location string.
#[derive(Debug)]
pub struct LegacyLocationsReader<M = DefaultLocationMatcher> {
    entries: BTreeMap<String, StoredLocation>,
    matcher: M,
}

impl LegacyLocationsReader {
    pub fn from_document(document: &str) -> Result<Self, LocationsParseError> {
        Self::with_matcher(document.as_bytes(), DefaultLocationMatcher)
    }

    pub fn from_reader<R: BufRead>(input: R) -> Result<Self, LocationsParseError> {
        Self::with_matcher(input, DefaultLocationMatcher)
    }
}

impl<M: LocationMatcher> LegacyLocationsReader<M> {
    pub fn with_matcher<R: BufRead>(input: R, matcher: M) -> Result<Self, LocationsParseError> {
        let entries = parse_legacy_locations(input)?;
        Ok(Self { entries, matcher })
    }

    pub fn stored(&self, reference: &str) -> Option<&StoredLocation> {
        self.entries.get(reference)
    }

    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: LocationMatcher> LocationReader for LegacyLocationsReader<M> {
    fn resolve_input(
        &self,
        reference: &str,
        accept_modified: bool,
    ) -> Result<Option<TestableInput>, LocationResolutionError> {
        match self.entries.get(reference) {
            Some(stored) => self
                .matcher
                .find_matching_input(stored, accept_modified)
                .map(Some),
            None => {
                // Legacy keys are the location strings themselves, so an
                // unknown reference still names a usable path.
                debug!(reference, "unknown legacy reference, degrading to raw path");
                Ok(Some(TestableInput::RawPath {
                    path: reference.to_string(),
                }))
            }
        }
    }
}
