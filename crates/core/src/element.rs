use crate::error::{InspectorError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Labels the indentation pass matches on
pub mod labels {
    pub const EVENT: &str = "$event";

    // `$event` kinds
    pub const BEGIN: &str = "begin";
    pub const END: &str = "end";
}

/// Discriminant taken from the `type` field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Vertex,
    Edge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub character: Option<u32>,
}

/// One decoded line of an LSIF dump.
///
/// Only `type`, `id`, `outV`, `inV` and `inVs` drive indexing. `label` and
/// the event `kind` drive indentation. The remaining fields are carried for
/// display and are decoded leniently: a value of an unexpected JSON type is
/// dropped instead of failing the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "outV", skip_serializing_if = "Option::is_none")]
    pub out_v: Option<i64>,
    #[serde(default, rename = "inV", skip_serializing_if = "Option::is_none")]
    pub in_v: Option<i64>,
    #[serde(
        default,
        rename = "inVs",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub in_vs: Vec<i64>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, deserialize_with = "lenient_position", skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    #[serde(default, deserialize_with = "lenient_position", skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "kind",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_kind: Option<String>,
    /// Ordinal of the source line; the join key between text and graph.
    #[serde(default, rename = "lineNumber", skip_deserializing)]
    pub line_number: usize,
}

impl GraphElement {
    /// Decodes `text` and stamps it with `line_number`.
    pub fn decode(text: &str, line_number: usize) -> Result<Self> {
        let mut element: Self = serde_json::from_str(text)
            .map_err(|source| InspectorError::MalformedLine { line: line_number, source })?;
        element.line_number = line_number;
        Ok(element)
    }

    pub fn is_vertex(&self) -> bool {
        self.kind == ElementKind::Vertex
    }

    pub fn is_edge(&self) -> bool {
        self.kind == ElementKind::Edge
    }

    /// Target ids of an edge: `inV` when present, otherwise `inVs`.
    pub fn targets(&self) -> &[i64] {
        match &self.in_v {
            Some(in_v) => std::slice::from_ref(in_v),
            None => &self.in_vs,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<i64>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_position<'de, D>(deserializer: D) -> std::result::Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
