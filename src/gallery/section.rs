use serde_json::Value;

use crate::face::path::DottedPath;
use crate::face::shapes::ShapeCatalog;
use crate::gallery::catalog::{Catalog, ColorFormat, ControlDeclaration, ControlKind, SelectionType};
use crate::gallery::palette::PLACEHOLDER_COLOR;
use crate::gallery::range::RangeSteps;

/// Placeholder selected value meaning "not yet projected from a face config".
pub const UNKNOWN_VALUE: &str = "???";

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Flip toggle paired with a shape picker.
pub struct FlipState {
    /// Boolean path in the face config.
    pub key: DottedPath,
    /// Current projected flip value. Only a JSON boolean at `key` reads as `true`; a missing or
    /// non-boolean value (`1`, `"true"`, `null`) projects as `false`.
    #[serde(rename = "selectedValue")]
    pub selected_value: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "selectionType", rename_all = "lowercase")]
/// Computed, render-ready parameters of a section.
pub enum SectionKind {
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
        /// Number of colors per value.
        #[serde(rename = "colorCount")]
        color_count: usize,
        /// Offered color tuples.
        palette: Vec<Vec<String>>,
    },
    /// Numeric range with derived steps.
    Range {
        /// Bounds and step sizes.
        steps: RangeSteps,
        /// Coarse values from min to max inclusive.
        #[serde(rename = "valuesToRender")]
        values: Vec<f64>,
    },
    /// Shape picker.
    Svgs {
        /// Variant identifiers to render.
        #[serde(rename = "valuesToRender")]
        variants: Vec<String>,
        /// Optional paired flip toggle.
        #[serde(skip_serializing_if = "Option::is_none")]
        flip: Option<FlipState>,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One gallery row: a catalog control plus its computed and current state.
pub struct SectionDescriptor {
    /// Dotted path into the face config.
    pub key: DottedPath,
    /// Label shown in the gallery.
    #[serde(rename = "displayText")]
    pub display_text: String,
    /// Whether the gallery opens with this section expanded.
    #[serde(rename = "isSelected")]
    pub initially_selected: bool,
    /// Whether "randomize all" may change this section.
    #[serde(rename = "randomizeEnabled")]
    pub randomize_enabled: bool,
    /// Current projected value (or a placeholder before the first projection).
    #[serde(rename = "selectedValue")]
    pub selected_value: Value,
    /// Type-specific parameters.
    #[serde(flatten)]
    pub kind: SectionKind,
}

impl SectionDescriptor {
    /// Expand one declaration. `shapes` supplies variants for shape pickers without explicit ones.
    pub fn from_declaration(decl: &ControlDeclaration, shapes: &ShapeCatalog) -> Self {
        let (kind, selected_value) = match &decl.kind {
            ControlKind::Range { range } => {
                let steps = range.quantize();
                let values = steps.values().collect();
                (SectionKind::Range { steps, values }, Value::from(range.min))
            }
            ControlKind::Color {
                color_format,
                palette,
            } => (
                SectionKind::Color {
                    color_format: *color_format,
                    palette: palette.clone(),
                },
                Value::from(UNKNOWN_VALUE),
            ),
            ControlKind::Colors {
                color_format,
                color_count,
                palette,
            } => (
                SectionKind::Colors {
                    color_format: *color_format,
                    color_count: *color_count,
                    palette: palette.clone(),
                },
                Value::Array(vec![Value::from(PLACEHOLDER_COLOR); *color_count]),
            ),
            ControlKind::Svgs { flip_key, variants } => {
                let variants = variants
                    .clone()
                    .unwrap_or_else(|| shapes.variants(decl.key.head()).to_vec());
                let flip = flip_key.as_ref().map(|key| FlipState {
                    key: key.clone(),
                    selected_value: false,
                });
                (
                    SectionKind::Svgs { variants, flip },
                    Value::from(UNKNOWN_VALUE),
                )
            }
        };

        Self {
            key: decl.key.clone(),
            display_text: decl.display_text.clone(),
            initially_selected: decl.initially_selected,
            randomize_enabled: true,
            selected_value,
            kind,
        }
    }

    /// Discriminant of this section's kind.
    pub fn selection_type(&self) -> SelectionType {
        match self.kind {
            SectionKind::Color { .. } => SelectionType::Color,
            SectionKind::Colors { .. } => SelectionType::Colors,
            SectionKind::Range { .. } => SelectionType::Range,
            SectionKind::Svgs { .. } => SelectionType::Svgs,
        }
    }

    /// Paired flip toggle, for shape pickers that have one.
    pub fn flip(&self) -> Option<&FlipState> {
        match &self.kind {
            SectionKind::Svgs { flip, .. } => flip.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn flip_mut(&mut self) -> Option<&mut FlipState> {
        match &mut self.kind {
            SectionKind::Svgs { flip, .. } => flip.as_mut(),
            _ => None,
        }
    }

    /// Whether the selected value is still the unprojected placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.selected_value.as_str() == Some(UNKNOWN_VALUE)
    }
}

/// Expand every catalog declaration, preserving order.
pub fn build_sections(catalog: &Catalog, shapes: &ShapeCatalog) -> Vec<SectionDescriptor> {
    catalog
        .controls()
        .iter()
        .map(|decl| SectionDescriptor::from_declaration(decl, shapes))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/section.rs"]
mod tests;
