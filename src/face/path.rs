//! Dotted-path addressing over nested JSON trees.
//!
//! A path like `body.color` resolves to `root["body"]["color"]`. Numeric segments also index into
//! arrays, so `teamColors.1` addresses the second team color. Resolution fails closed: a missing
//! intermediate segment yields `None` (reads) or leaves the tree untouched (writes).

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::foundation::error::{EditorError, EditorResult};

/// A parsed `.`-separated key path.
///
/// Serializes as its dotted string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DottedPath {
    segments: Vec<String>,
}

impl DottedPath {
    /// Parse `input` into segments. Empty paths and empty segments are rejected.
    pub fn parse(input: &str) -> EditorResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(EditorError::path("empty path"));
        }
        let mut segments = Vec::new();
        for part in input.split('.') {
            if part.is_empty() {
                return Err(EditorError::path(format!(
                    "empty segment in path '{input}'"
                )));
            }
            segments.push(part.to_string());
        }
        Ok(Self { segments })
    }

    /// Path segments in lookup order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment (the face category for catalog keys).
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    /// Resolve this path against `root`.
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |node, seg| child(node, seg))
    }

    /// Resolve this path mutably against `root`.
    pub fn get_mut<'a>(&self, root: &'a mut Value) -> Option<&'a mut Value> {
        self.segments
            .iter()
            .try_fold(root, |node, seg| child_mut(node, seg))
    }

    /// Write `value` at this path.
    ///
    /// Every segment but the last must already resolve. The last segment is inserted into an
    /// object parent or replaces an in-bounds array element. Returns `false` when nothing was
    /// written.
    pub fn set(&self, root: &mut Value, value: Value) -> bool {
        let Some((last, parents)) = self.segments.split_last() else {
            return false;
        };
        let mut node = root;
        for seg in parents {
            match child_mut(node, seg) {
                Some(next) => node = next,
                None => return false,
            }
        }
        match node {
            Value::Object(map) => {
                map.insert(last.clone(), value);
                true
            }
            Value::Array(items) => match last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl TryFrom<String> for DottedPath {
    type Error = EditorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DottedPath> for String {
    fn from(p: DottedPath) -> Self {
        p.to_string()
    }
}

impl FromStr for DottedPath {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn child<'a>(node: &'a Value, seg: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(seg),
        Value::Array(items) => seg.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, seg: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(seg),
        Value::Array(items) => seg.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

/// Read the value at dotted `path`; `None` if the path is malformed or does not resolve.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    DottedPath::parse(path).ok()?.get(root)
}

/// Write `value` at dotted `path`; returns `false` (and leaves `root` untouched) on failure.
pub fn set_path(root: &mut Value, path: &str, value: Value) -> bool {
    match DottedPath::parse(path) {
        Ok(p) => p.set(root, value),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/path.rs"]
mod tests;
