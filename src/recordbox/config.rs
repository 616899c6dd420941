//! # Invocation Configuration
//!
//! Command-line values arrive as loose optional strings. They are validated
//! here, once, into an [`Invocation`]; nothing past this point looks at raw
//! flags again.

use crate::error::{RecordError, Result};
use crate::item::{parse_item, strip_braces, ItemFormat};
use crate::model::Record;
use std::fmt;
use std::path::PathBuf;

/// Flag values as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct RawArgs {
    pub operation: Option<String>,
    pub item: Option<String>,
    pub file_name: Option<String>,
    pub id: Option<String>,
    pub item_format: ItemFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List,
    FindById { id: String },
    Add { item: Record },
    Remove { id: String },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::FindById { .. } => "findById",
            Operation::Add { .. } => "add",
            Operation::Remove { .. } => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully validated request: which file, which operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub file: PathBuf,
    pub operation: Operation,
}

impl Invocation {
    pub fn from_raw(raw: RawArgs) -> Result<Self> {
        let file = non_empty(raw.file_name)
            .ok_or_else(|| RecordError::usage("fileName must be specified"))?;
        let name = non_empty(raw.operation)
            .ok_or_else(|| RecordError::usage("operation must be specified"))?;

        let operation = match name.as_str() {
            "list" => Operation::List,
            "findById" => Operation::FindById {
                id: require_id(raw.id)?,
            },
            "add" => {
                let literal = raw
                    .item
                    .as_deref()
                    .map(strip_braces)
                    .filter(|body| !body.is_empty())
                    .ok_or_else(|| RecordError::usage("item must be specified"))?;
                Operation::Add {
                    item: parse_item(literal, raw.item_format)?,
                }
            }
            "remove" => Operation::Remove {
                id: require_id(raw.id)?,
            },
            other => {
                return Err(RecordError::usage(format!(
                    "Operation {} not allowed",
                    other
                )))
            }
        };

        Ok(Self {
            file: PathBuf::from(file),
            operation,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn require_id(id: Option<String>) -> Result<String> {
    non_empty(id).ok_or_else(|| RecordError::usage("id must be specified"))
}
