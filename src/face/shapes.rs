use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::error::{EditorError, EditorResult};

/// Mapping from face category to its ordered shape-variant identifiers.
///
/// The editor treats this as an external collaborator: it only lists which SVG variants exist per
/// category (e.g. `tattoo -> ["none", "stars", ...]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ShapeCatalog {
    categories: BTreeMap<String, Vec<String>>,
}

impl ShapeCatalog {
    /// Build from an explicit category table.
    pub fn new(categories: BTreeMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    /// The variant table bundled with the editor.
    pub fn builtin() -> Self {
        let mut categories = BTreeMap::new();
        for (category, variants) in BUILTIN {
            categories.insert(
                (*category).to_string(),
                variants.iter().map(|v| (*v).to_string()).collect(),
            );
        }
        Self { categories }
    }

    /// Parse a JSON object of `category -> [variant, ...]`.
    pub fn from_json_str(s: &str) -> EditorResult<Self> {
        let catalog: Self =
            serde_json::from_str(s).map_err(|e| EditorError::serde(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            EditorError::Other(anyhow::Error::new(e).context(format!(
                "read shape catalog '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Every category must list at least one variant.
    pub fn validate(&self) -> EditorResult<()> {
        for (category, variants) in &self.categories {
            if variants.is_empty() {
                return Err(EditorError::validation(format!(
                    "shape category '{category}' has no variants"
                )));
            }
        }
        Ok(())
    }

    /// Variants for `category`; empty when the category is unknown.
    pub fn variants(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("accessories", &["none", "headband", "headband-high"]),
    ("body", &["body", "body2", "body3", "body4", "body5"]),
    ("ear", &["ear1", "ear2", "ear3"]),
    (
        "eye",
        &[
            "eye1", "eye2", "eye3", "eye4", "eye5", "eye6", "eye7", "eye8", "eye9", "eye10",
            "eye11", "eye12", "eye13", "eye14", "eye15", "eye16", "eye17", "eye18", "eye19",
        ],
    ),
    ("eyeLine", &["none", "line1", "line2", "line3", "line4", "line5"]),
    (
        "eyebrow",
        &[
            "eyebrow1", "eyebrow2", "eyebrow3", "eyebrow4", "eyebrow5", "eyebrow6", "eyebrow7",
            "eyebrow8", "eyebrow9", "eyebrow10", "eyebrow11", "eyebrow12", "eyebrow13",
        ],
    ),
    (
        "facialHair",
        &[
            "none", "beard1", "beard2", "beard3", "beard4", "beard5", "goatee1", "goatee2",
            "mustache1", "fullgoatee",
        ],
    ),
    (
        "glasses",
        &["none", "glasses1-primary", "glasses1-secondary", "glasses2-black", "facemask"],
    ),
    (
        "hair",
        &[
            "afro", "afro2", "bald", "blowoutFade", "cornrows", "crop", "curly", "dreads",
            "emo", "faux-hawk", "fauxhawk-fade", "high", "juice", "messy", "parted", "short",
            "short2", "short3", "spike", "tall-fade",
        ],
    ),
    ("hairBg", &["none", "longHair", "shoulders", "bob"]),
    (
        "head",
        &[
            "head1", "head2", "head3", "head4", "head5", "head6", "head7", "head8", "head9",
            "head10", "head11", "head12", "head13", "head14", "head15", "head16", "head17",
            "head18",
        ],
    ),
    ("jersey", &["jersey", "jersey2", "jersey3", "jersey4", "jersey5"]),
    ("miscLine", &["none", "chin1", "chin2", "forehead1", "forehead2", "freckles1"]),
    (
        "mouth",
        &[
            "angry", "closed", "mouth", "mouth2", "mouth3", "mouth4", "mouth5", "mouth6",
            "mouth7", "mouth8", "smile", "smile2", "smile3", "straight",
        ],
    ),
    ("nose", &["honker", "nose1", "nose2", "nose3", "nose4", "nose5", "pinocchio"]),
    ("smileLine", &["none", "line1", "line2", "line3", "line4"]),
    ("tattoo", &["none", "stars", "tribal", "sleeve", "dragon"]),
];

#[cfg(test)]
#[path = "../../tests/unit/face/shapes.rs"]
mod tests;
