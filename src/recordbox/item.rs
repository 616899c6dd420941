//! # Item Literals
//!
//! The `add` operation takes its record as a compact literal such as
//!
//! ```text
//! {"id":"1","email":"a@b.com","age":30}
//! ```
//!
//! Two readings of that text are supported:
//!
//! - [`ItemFormat::Positional`] (default): the three comma separated
//!   `key:value` pairs are taken as id, contact and age *in that order*, and
//!   the key names are ignored. Malformed pieces become `""` or `0`; this
//!   reading never fails. It is what existing scripts rely on.
//! - [`ItemFormat::Json`]: the literal is decoded as a JSON object and keys
//!   are honoured (`id`, `email` or `contact`, `age`).

use crate::error::{RecordError, Result};
use crate::model::Record;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ItemFormat {
    #[default]
    Positional,
    Json,
}

/// Removes surrounding whitespace and at most one `{` / `}` pair edge.
pub fn strip_braces(literal: &str) -> &str {
    let trimmed = literal.trim();
    let trimmed = trimmed.strip_prefix('{').unwrap_or(trimmed);
    trimmed.strip_suffix('}').unwrap_or(trimmed)
}

/// Parses an item literal, with or without its braces.
pub fn parse_item(literal: &str, format: ItemFormat) -> Result<Record> {
    let body = strip_braces(literal);
    match format {
        ItemFormat::Positional => Ok(parse_positional(body)),
        ItemFormat::Json => parse_json(body),
    }
}

pub fn parse_positional(body: &str) -> Record {
    let mut segments = body.split(',');

    let id = segments.next().map(text_value).unwrap_or_default();
    let contact = segments.next().map(text_value).unwrap_or_default();
    let age = segments
        .next()
        .and_then(segment_value)
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(0);

    Record { id, contact, age }
}

fn parse_json(body: &str) -> Result<Record> {
    let object = format!("{{{}}}", body);
    serde_json::from_str(&object).map_err(|e| RecordError::InvalidItem(e.to_string()))
}

fn segment_value(segment: &str) -> Option<&str> {
    segment.split_once(':').map(|(_, value)| value.trim())
}

fn text_value(segment: &str) -> String {
    segment_value(segment).map(unquote).unwrap_or_default()
}

fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        // JSON escapes (\" \n é) are honoured when they parse.
        serde_json::from_str::<String>(value)
            .unwrap_or_else(|_| value[1..value.len() - 1].to_string())
    } else {
        value.to_string()
    }
}
