use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use findref_core::{
    LegacyLocationsReader, LocationReader, LocationResolutionError, LocationsReader,
    TestableInput,
};
use serde::Serialize;

use crate::config::load_mapping_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
}

enum TableReader {
    Current(LocationsReader),
    Legacy(LegacyLocationsReader),
}

impl TableReader {
    fn references(&self) -> Vec<String> {
        match self {
            TableReader::Current(reader) => reader.references().map(str::to_owned).collect(),
            TableReader::Legacy(reader) => reader.references().map(str::to_owned).collect(),
        }
    }

    fn resolve(
        &self,
        reference: &str,
        accept_modified: bool,
    ) -> Result<Option<TestableInput>, LocationResolutionError> {
        match self {
            TableReader::Current(reader) => reader.resolve_input(reference, accept_modified),
            TableReader::Legacy(reader) => reader.resolve_input(reference, accept_modified),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResolutionReport {
    reference: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<TestableInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Resolve location references from a location table
#[derive(Debug, Parser)]
pub struct LocationsCommand {
    /// Path to the location-table XML document
    #[arg(long, value_name = "FILE")]
    pub table: PathBuf,

    /// Parse with the legacy schema (entries keyed by raw location)
    #[arg(long)]
    pub legacy: bool,

    /// YAML file mapping repository references (current schema only)
    #[arg(long, value_name = "FILE")]
    pub repositories: Option<PathBuf>,

    /// Accept inputs reflecting local modifications
    #[arg(long)]
    pub accept_modified: bool,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,

    /// References to resolve (defaults to every stored reference)
    #[arg(value_name = "REF")]
    pub references: Vec<String>,
}

impl LocationsCommand {
    pub fn execute(&self) -> Result<i32> {
        let output_format = self.output_format()?;
        if self.legacy && self.repositories.is_some() {
            bail!("Repository mappings apply to the current schema only.");
        }

        let document = std::fs::read_to_string(&self.table)
            .with_context(|| format!("Failed to read location table: {}", self.table.display()))?;

        let reader = match self.build_reader(&document) {
            Ok(reader) => reader,
            Err(error) => {
                eprintln!("Failed to parse location table: {error:#}");
                return Ok(2);
            }
        };

        let references = if self.references.is_empty() {
            reader.references()
        } else {
            self.references.clone()
        };

        let mut reports = Vec::with_capacity(references.len());
        for reference in references {
            let report = match reader.resolve(&reference, self.accept_modified) {
                Ok(Some(input)) => ResolutionReport {
                    reference,
                    status: "resolved",
                    input: Some(input),
                    message: None,
                },
                Ok(None) => ResolutionReport {
                    reference,
                    status: "not_found",
                    input: None,
                    message: None,
                },
                Err(error) => ResolutionReport {
                    reference,
                    status: "error",
                    input: None,
                    message: Some(error.to_string()),
                },
            };
            reports.push(report);
        }

        match output_format {
            OutputFormat::Human => report_human(&reports),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        }

        let unresolved = reports
            .iter()
            .filter(|report| report.status != "resolved")
            .count();
        Ok(if unresolved > 0 { 1 } else { 0 })
    }

    fn build_reader(&self, document: &str) -> Result<TableReader> {
        if self.legacy {
            return Ok(TableReader::Legacy(LegacyLocationsReader::from_document(
                document,
            )?));
        }

        let reader = match &self.repositories {
            Some(path) => {
                let mappings = load_mapping_file(path)?;
                LocationsReader::from_document_with_repositories(document, &mappings)?
            }
            None => LocationsReader::from_document(document)?,
        };
        Ok(TableReader::Current(reader))
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unsupported output format: {other}. Use human or json."),
        }
    }
}

fn report_human(reports: &[ResolutionReport]) {
    for report in reports {
        match (&report.input, &report.message) {
            (Some(input), _) => println!("{}: {}", report.reference, describe(input)),
            (None, Some(message)) => println!("{}: error: {message}", report.reference),
            (None, None) => println!("{}: not found", report.reference),
        }
    }
}

fn describe(input: &TestableInput) -> String {
    match input.project_name() {
        Some(project) => format!("{} {} (project: {project})", input.kind(), input.name()),
        None => format!("{} {}", input.kind(), input.name()),
    }
}
