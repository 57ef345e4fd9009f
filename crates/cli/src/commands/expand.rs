use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use findref_core::{perform_substitution, validate_variables};

use crate::config::load_mapping_file;

/// Expand ${...} references in an expression
#[derive(Debug, Parser)]
pub struct ExpandCommand {
    /// YAML file with variable bindings (name: value)
    #[arg(long, value_name = "FILE")]
    pub vars: Option<PathBuf>,

    /// Extra NAME=VALUE binding, overrides entries from --vars (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub var: Vec<String>,

    /// Validate only: report undefined references without substituting
    #[arg(long)]
    pub check: bool,

    /// Expression to expand
    #[arg(value_name = "EXPRESSION")]
    pub expression: String,
}

impl ExpandCommand {
    pub fn execute(&self) -> Result<i32> {
        let variables = self.bindings()?;

        if self.check {
            return Ok(match validate_variables(&self.expression, &variables) {
                Ok(()) => {
                    println!("ok");
                    0
                }
                Err(error) => {
                    eprintln!("{error}");
                    1
                }
            });
        }

        Ok(match perform_substitution(&self.expression, false, true, &variables) {
            Ok(expanded) => {
                println!("{expanded}");
                0
            }
            Err(error) => {
                eprintln!("{error}");
                1
            }
        })
    }

    fn bindings(&self) -> Result<BTreeMap<String, String>> {
        let mut variables = match &self.vars {
            Some(path) => load_mapping_file(path)?,
            None => BTreeMap::new(),
        };

        for pair in &self.var {
            let (name, value) = parse_binding(pair)?;
            variables.insert(name.to_string(), value.to_string());
        }

        Ok(variables)
    }
}

fn parse_binding(pair: &str) -> Result<(&str, &str)> {
    let Some((name, value)) = pair.split_once('=') else {
        bail!("Invalid binding '{pair}'. Use NAME=VALUE.");
    };
    if name.is_empty() {
        bail!("Invalid binding '{pair}'. The name must not be empty.");
    }
    Ok((name, value))
}
