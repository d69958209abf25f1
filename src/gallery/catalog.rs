//! Static catalog of editable face controls, in display order.

use std::collections::HashSet;

use crate::face::path::DottedPath;
use crate::foundation::error::{EditorError, EditorResult};
use crate::gallery::palette::{
    HAIR_COLORS, JERSEY_COLORS, SHAVE_COLORS, SKIN_COLORS, owned,
};
use crate::gallery::range::RangeConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of picker a control renders as.
pub enum SelectionType {
    /// Single color from a palette.
    Color,
    /// Fixed-length tuple of colors.
    Colors,
    /// Numeric slider / stepped buttons.
    Range,
    /// Shape variant picker.
    Svgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Textual format of color values.
pub enum ColorFormat {
    /// `#rrggbb`.
    Hex,
    /// `rgba(r,g,b,a)`.
    Rgba,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "selectionType", rename_all = "lowercase")]
/// Type-specific render parameters of a control.
pub enum ControlKind {
    /// Single color picker.
    Color {
        /// Color notation.
        #[serde(rename = "colorFormat")]
        color_format: ColorFormat,
        /// Offered colors.
        palette: Vec<String>,
    },
    /// Multi-color picker.
    Colors {
        /// Color notation.
        #[serde(rename = "colorFormat")]
        color_format: ColorFormat,
        /// Number of colors in each value.
        #[serde(rename = "colorCount")]
        color_count: usize,
        /// Offered color tuples, each `color_count` long.
        palette: Vec<Vec<String>>,
    },
    /// Numeric range.
    Range {
        /// Bounds.
        range: RangeConfig,
    },
    /// Shape picker.
    Svgs {
        /// Optional boolean path mirroring the shape.
        #[serde(rename = "flipKey", default, skip_serializing_if = "Option::is_none")]
        flip_key: Option<DottedPath>,
        /// Explicit variants; when absent the shape catalog supplies them.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variants: Option<Vec<String>>,
    },
}

impl ControlKind {
    /// Discriminant of this kind.
    pub fn selection_type(&self) -> SelectionType {
        match self {
            ControlKind::Color { .. } => SelectionType::Color,
            ControlKind::Colors { .. } => SelectionType::Colors,
            ControlKind::Range { .. } => SelectionType::Range,
            ControlKind::Svgs { .. } => SelectionType::Svgs,
        }
    }

    /// Color notation for color/colors kinds.
    pub fn color_format(&self) -> Option<ColorFormat> {
        match self {
            ControlKind::Color { color_format, .. } | ControlKind::Colors { color_format, .. } => {
                Some(*color_format)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One immutable catalog entry.
pub struct ControlDeclaration {
    /// Dotted path into the face config.
    pub key: DottedPath,
    /// Label shown in the gallery.
    #[serde(rename = "displayText")]
    pub display_text: String,
    /// Whether the gallery opens with this section expanded.
    #[serde(rename = "isSelected", default)]
    pub initially_selected: bool,
    /// Render parameters.
    #[serde(flatten)]
    pub kind: ControlKind,
}

impl ControlDeclaration {
    fn new(key: &str, display_text: &str, kind: ControlKind) -> EditorResult<Self> {
        Ok(Self {
            key: DottedPath::parse(key)?,
            display_text: display_text.to_string(),
            initially_selected: false,
            kind,
        })
    }

    fn selected(mut self) -> Self {
        self.initially_selected = true;
        self
    }
}

/// Ordered list of control declarations; order is the display order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    controls: Vec<ControlDeclaration>,
}

impl Catalog {
    /// Wrap explicit declarations after validating them.
    pub fn new(controls: Vec<ControlDeclaration>) -> EditorResult<Self> {
        let catalog = Self { controls };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The editor's bundled control set.
    pub fn builtin() -> EditorResult<Self> {
        let hex = ColorFormat::Hex;
        let svgs = || ControlKind::Svgs {
            flip_key: None,
            variants: None,
        };
        let svgs_flip = |key: &str| -> EditorResult<ControlKind> {
            Ok(ControlKind::Svgs {
                flip_key: Some(DottedPath::parse(key)?),
                variants: None,
            })
        };
        let range = |min, max| -> EditorResult<ControlKind> {
            Ok(ControlKind::Range {
                range: RangeConfig::new(min, max)?,
            })
        };

        let controls = vec![
            ControlDeclaration::new(
                "body.color",
                "Skin Color",
                ControlKind::Color {
                    color_format: hex,
                    palette: owned(SKIN_COLORS),
                },
            )?
            .selected(),
            ControlDeclaration::new("body.size", "Body Size", range(0.8, 1.2)?)?,
            ControlDeclaration::new("tattoo.id", "Tattoo", svgs())?,
            ControlDeclaration::new("body.id", "Body Shape", svgs())?,
            ControlDeclaration::new("head.id", "Head Shape", svgs())?,
            ControlDeclaration::new("fatness", "Face Size", range(0.0, 1.0)?)?,
            ControlDeclaration::new("mouth.id", "Mouth Shape", svgs_flip("mouth.flip")?)?,
            ControlDeclaration::new("eye.id", "Eye Shape", svgs())?,
            ControlDeclaration::new("eye.angle", "Eye Angle", range(-10.0, 15.0)?)?,
            ControlDeclaration::new("ear.id", "Ear Shape", svgs())?,
            ControlDeclaration::new("ear.size", "Ear Size", range(0.5, 1.5)?)?,
            ControlDeclaration::new("hair.id", "Hair Style", svgs_flip("hair.flip")?)?,
            ControlDeclaration::new(
                "hair.color",
                "Hair Color",
                ControlKind::Color {
                    color_format: hex,
                    palette: owned(HAIR_COLORS),
                },
            )?,
            ControlDeclaration::new("hairBg.id", "Hair Background", svgs())?,
            ControlDeclaration::new("facialHair.id", "Facial Hair Style", svgs())?,
            ControlDeclaration::new(
                "head.shave",
                "Shave Style",
                ControlKind::Color {
                    color_format: ColorFormat::Rgba,
                    palette: owned(SHAVE_COLORS),
                },
            )?,
            ControlDeclaration::new("eyebrow.id", "Eyebrow Style", svgs())?,
            ControlDeclaration::new("eyebrow.angle", "Eyebrow Angle", range(-15.0, 20.0)?)?,
            ControlDeclaration::new("nose.id", "Nose Shape", svgs_flip("nose.flip")?)?,
            ControlDeclaration::new("nose.size", "Nose Size", range(0.5, 1.25)?)?,
            ControlDeclaration::new("eyeLine.id", "Eye Line Style", svgs())?,
            ControlDeclaration::new("smileLine.id", "Smile Line Style", svgs())?,
            ControlDeclaration::new("smileLine.size", "Smile Line Size", range(0.25, 2.25)?)?,
            ControlDeclaration::new("miscLine.id", "Misc Line Style", svgs())?,
            ControlDeclaration::new("glasses.id", "Glasses Style", svgs())?,
            ControlDeclaration::new("accessories.id", "Accessories Style", svgs())?,
            ControlDeclaration::new("jersey.id", "Jersey Style", svgs())?,
            ControlDeclaration::new(
                "teamColors",
                "Team Colors",
                ControlKind::Colors {
                    color_format: hex,
                    color_count: 3,
                    palette: JERSEY_COLORS.iter().map(|t| owned(t)).collect(),
                },
            )?,
        ];
        Self::new(controls)
    }

    /// Check key uniqueness and per-kind parameters.
    pub fn validate(&self) -> EditorResult<()> {
        let mut seen = HashSet::new();
        for c in &self.controls {
            if !seen.insert(c.key.to_string()) {
                return Err(EditorError::validation(format!(
                    "duplicate control key '{}'",
                    c.key
                )));
            }
            match &c.kind {
                ControlKind::Color { palette, .. } if palette.is_empty() => {
                    return Err(EditorError::validation(format!(
                        "control '{}' has an empty palette",
                        c.key
                    )));
                }
                ControlKind::Colors {
                    color_count,
                    palette,
                    ..
                } => {
                    if *color_count == 0 {
                        return Err(EditorError::validation(format!(
                            "control '{}' must have colorCount > 0",
                            c.key
                        )));
                    }
                    if let Some(bad) = palette.iter().position(|t| t.len() != *color_count) {
                        return Err(EditorError::validation(format!(
                            "control '{}' palette entry {bad} does not have {color_count} colors",
                            c.key
                        )));
                    }
                }
                ControlKind::Range { range } => range.validate()?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Declarations in display order.
    pub fn controls(&self) -> &[ControlDeclaration] {
        &self.controls
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the catalog has no declarations.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/catalog.rs"]
mod tests;
