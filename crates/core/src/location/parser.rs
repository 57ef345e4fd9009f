// Streaming parsers for the two location-table schema generations.
// Each builds the reference keyed map of stored bags in a single pass and
// aborts on the first error.

use std::collections::BTreeMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::location::error::LocationsParseError;
use crate::location::schema;
use crate::location::stored::StoredLocation;

/// Parses a legacy-schema document. Entries are keyed by their raw location
/// attribute.
pub fn parse_legacy_locations<R: BufRead>(
    input: R,
) -> Result<BTreeMap<String, StoredLocation>, LocationsParseError> {
    parse_document(input, schema::ATTR_LOCATION, None)
}

/// Parses a current-schema document. Entries are keyed by their mandatory
/// reference id. When a remapping table is supplied, every repository
/// reference must map through it and the mapped value replaces the stored
/// one; without a table repository references are stored verbatim.
pub fn parse_locations<R: BufRead>(
    input: R,
    repositories: Option<&BTreeMap<String, String>>,
) -> Result<BTreeMap<String, StoredLocation>, LocationsParseError> {
    parse_document(input, schema::ATTR_LOCATION_REF, repositories)
}

fn parse_document<R: BufRead>(
    input: R,
    key_attribute: &'static str,
    repositories: Option<&BTreeMap<String, String>>,
) -> Result<BTreeMap<String, StoredLocation>, LocationsParseError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut entries = BTreeMap::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| LocationsParseError::Document { source })?;
        match event {
            Event::Start(element) | Event::Empty(element) => {
                let tag = element.name();
                if tag.as_ref() == schema::ELEMENT_LOCATIONS.as_bytes() {
                    // Container element, no entry data of its own.
                } else if tag.as_ref() == schema::ELEMENT_LOCATION.as_bytes() {
                    let stored = read_entry(&element, repositories)?;
                    let reference = match stored.get(key_attribute) {
                        Some(reference) => reference.to_string(),
                        None => {
                            return Err(LocationsParseError::MissingReferenceAttribute {
                                attribute: key_attribute,
                            })
                        }
                    };
                    // Duplicate references are last-write-wins.
                    entries.insert(reference, stored);
                } else {
                    return Err(LocationsParseError::MalformedDocument {
                        tag: String::from_utf8_lossy(tag.as_ref()).into_owned(),
                    });
                }
            }
            Event::Eof => break,
            // End tags, text, comments, declarations and processing
            // instructions carry nothing the table needs.
            _ => {}
        }
        buf.clear();
    }

    debug!(entries = entries.len(), "parsed locations table");
    Ok(entries)
}

fn read_entry(
    element: &BytesStart<'_>,
    repositories: Option<&BTreeMap<String, String>>,
) -> Result<StoredLocation, LocationsParseError> {
    let mut stored = StoredLocation::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|source| LocationsParseError::Attribute { source })?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|source| LocationsParseError::Document { source })?
            .into_owned();
        stored.insert(key, value);
    }

    if let Some(repositories) = repositories {
        if let Some(reference) = stored.repository_reference().map(str::to_owned) {
            let mapped = repositories.get(&reference).cloned().ok_or_else(|| {
                LocationsParseError::UnmappedRepository {
                    reference: reference.clone(),
                    known: repositories.keys().cloned().collect(),
                }
            })?;
            stored.insert(schema::ATTR_REPOSITORY_REF, mapped);
        }
    }

    Ok(stored)
}
