use std::path::Path;

use serde_json::{Map, Value};

use crate::face::path::DottedPath;
use crate::foundation::error::{EditorError, EditorResult};

/// Category that legacy encodings may lack and that is backfilled on load.
pub const TATTOO_CATEGORY: &str = "tattoo";
/// Tattoo variant used when backfilling.
pub const TATTOO_NONE: &str = "none";

/// Nested description of one avatar: category name -> attribute record.
///
/// The root is always a JSON object. Attribute values are scalars (string, number, boolean) or,
/// for top-level entries like `teamColors`, arrays of color strings. Values are addressed with
/// [`DottedPath`]s.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct FaceConfig(Value);

impl FaceConfig {
    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> EditorResult<Self> {
        if !value.is_object() {
            return Err(EditorError::validation(
                "face config root must be a JSON object",
            ));
        }
        Ok(Self(value))
    }

    /// Build from a map of top-level entries.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> EditorResult<Self> {
        let value: Value = serde_json::from_str(s).map_err(|e| EditorError::serde(e.to_string()))?;
        Self::from_value(value)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            EditorError::Other(anyhow::Error::new(e).context(format!(
                "read face config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Compact JSON text (the form embedded in URL fragments).
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    /// Borrow the underlying tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying tree.
    pub fn into_value(self) -> Value {
        self.0
    }

    fn map(&self) -> &Map<String, Value> {
        match &self.0 {
            Value::Object(map) => map,
            _ => unreachable!("face config root is validated as an object"),
        }
    }

    fn map_mut(&mut self) -> &mut Map<String, Value> {
        match &mut self.0 {
            Value::Object(map) => map,
            _ => unreachable!("face config root is validated as an object"),
        }
    }

    /// Top-level category names in key order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.map().keys().map(String::as_str)
    }

    /// Whether a top-level entry named `category` exists.
    pub fn has_category(&self, category: &str) -> bool {
        self.map().contains_key(category)
    }

    /// Value at `path`, if it resolves.
    pub fn get(&self, path: &DottedPath) -> Option<&Value> {
        path.get(&self.0)
    }

    /// Value at a dotted string path, if it parses and resolves.
    pub fn get_dotted(&self, path: &str) -> Option<&Value> {
        crate::face::path::get_path(&self.0, path)
    }

    /// Write `value` at `path`. See [`DottedPath::set`] for failure rules.
    pub fn set(&mut self, path: &DottedPath, value: Value) -> bool {
        path.set(&mut self.0, value)
    }

    /// Insert or replace a whole top-level entry.
    pub fn insert_category(&mut self, category: impl Into<String>, value: Value) {
        self.map_mut().insert(category.into(), value);
    }

    /// Add `tattoo = {id: "none"}` when the category is absent.
    ///
    /// Idempotent: an existing tattoo entry is never touched. Returns `true` if a backfill
    /// happened.
    pub fn ensure_tattoo(&mut self) -> bool {
        if self.has_category(TATTOO_CATEGORY) {
            return false;
        }
        self.insert_category(TATTOO_CATEGORY, serde_json::json!({ "id": TATTOO_NONE }));
        true
    }
}

impl TryFrom<Value> for FaceConfig {
    type Error = EditorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<FaceConfig> for Value {
    fn from(face: FaceConfig) -> Self {
        face.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/config.rs"]
mod tests;
