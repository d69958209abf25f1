//! Random face generation seam.
//!
//! The editor asks a [`FaceGenerator`] for a fresh face whenever no session can be restored and
//! for "randomize all". [`CatalogGenerator`] is a self-contained implementation that samples each
//! catalog control from its offered values.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};

use crate::face::config::{FaceConfig, TATTOO_CATEGORY, TATTOO_NONE};
use crate::face::path::DottedPath;
use crate::face::shapes::ShapeCatalog;
use crate::gallery::catalog::{Catalog, ControlKind};
use crate::gallery::palette::SKIN_COLORS;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Gender variants the generator may sample.
pub enum Gender {
    /// Male faces.
    Male,
    /// Female faces.
    Female,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Skin-tone groups the generator may sample.
pub enum Race {
    /// Light tones.
    White,
    /// Medium tones.
    Brown,
    /// Dark tones.
    Black,
    /// Light to medium tones.
    Asian,
}

impl Race {
    fn skin_palette(self) -> &'static [&'static str] {
        match self {
            Race::White => &SKIN_COLORS[..3],
            Race::Asian => &SKIN_COLORS[..4],
            Race::Brown => &SKIN_COLORS[3..7],
            Race::Black => &SKIN_COLORS[6..],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Which demographic variants "shuffle" samples from.
pub struct ShuffleOptions {
    /// Allowed genders; empty means all.
    pub gender: Vec<Gender>,
    /// Allowed skin-tone groups; empty means all.
    pub race: Vec<Race>,
    /// Free-form extra switches passed through to the generator.
    pub other: Vec<String>,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self {
            gender: vec![Gender::Male],
            race: vec![Race::White, Race::Brown, Race::Black, Race::Asian],
            other: Vec::new(),
        }
    }
}

/// Produces complete random face configs.
pub trait FaceGenerator {
    /// Generate one face. The result must resolve every path the catalog references.
    fn generate(&self, options: &ShuffleOptions) -> FaceConfig;
}

impl<F> FaceGenerator for F
where
    F: Fn(&ShuffleOptions) -> FaceConfig,
{
    fn generate(&self, options: &ShuffleOptions) -> FaceConfig {
        self(options)
    }
}

/// Deterministic generator driven by the control catalog and shape catalog.
///
/// Each call advances an internal draw counter, so consecutive faces differ while the whole
/// sequence stays reproducible for a given seed.
pub struct CatalogGenerator {
    catalog: Catalog,
    shapes: ShapeCatalog,
    seed: u64,
    draws: AtomicU64,
}

const ALL_GENDERS: &[Gender] = &[Gender::Male, Gender::Female];
const ALL_RACES: &[Race] = &[Race::White, Race::Brown, Race::Black, Race::Asian];

impl CatalogGenerator {
    /// Build a generator over `catalog` and `shapes`.
    pub fn new(catalog: Catalog, shapes: ShapeCatalog, seed: u64) -> Self {
        Self {
            catalog,
            shapes,
            seed,
            draws: AtomicU64::new(0),
        }
    }

    fn generate_with(&self, options: &ShuffleOptions, rng: &mut StdRng) -> FaceConfig {
        let genders = if options.gender.is_empty() {
            ALL_GENDERS
        } else {
            &options.gender[..]
        };
        let races = if options.race.is_empty() {
            ALL_RACES
        } else {
            &options.race[..]
        };
        let gender = genders.choose(rng).copied().unwrap_or(Gender::Male);
        let race = races.choose(rng).copied().unwrap_or(Race::White);

        let mut face = FaceConfig::from_map(serde_json::Map::new());
        for decl in self.catalog.controls() {
            let value = match &decl.kind {
                ControlKind::Color { palette, .. } => palette.choose(rng).map(|c| json!(c)),
                ControlKind::Colors { palette, .. } => palette.choose(rng).map(|t| json!(t)),
                ControlKind::Range { range } => {
                    let values: Vec<f64> = range.quantize().values().collect();
                    values.choose(rng).map(|v| json!(v))
                }
                ControlKind::Svgs { variants, flip_key } => {
                    if let Some(flip) = flip_key {
                        put(&mut face, flip, Value::Bool(rng.random_bool(0.5)));
                    }
                    let variants = variants
                        .as_deref()
                        .unwrap_or_else(|| self.shapes.variants(decl.key.head()));
                    variants.choose(rng).map(|v| json!(v))
                }
            };
            if let Some(value) = value {
                put(&mut face, &decl.key, value);
            }
        }

        if let Ok(skin) = DottedPath::parse("body.color") {
            if let Some(c) = race.skin_palette().choose(rng) {
                put(&mut face, &skin, json!(c));
            }
        }
        if gender == Gender::Female {
            if let Ok(facial) = DottedPath::parse("facialHair.id") {
                put(&mut face, &facial, json!("none"));
            }
        }
        if !rng.random_ratio(1, 4) {
            face.insert_category(TATTOO_CATEGORY, json!({ "id": TATTOO_NONE }));
        }
        face.ensure_tattoo();
        face
    }
}

impl FaceGenerator for CatalogGenerator {
    #[tracing::instrument(skip(self))]
    fn generate(&self, options: &ShuffleOptions) -> FaceConfig {
        let draw = self.draws.fetch_add(1, Ordering::Relaxed);
        let mut rng = StdRng::seed_from_u64(self.seed ^ draw.rotate_left(32));
        self.generate_with(options, &mut rng)
    }
}

/// Write `value` at `key`, creating the top-level category object when missing.
fn put(face: &mut FaceConfig, key: &DottedPath, value: Value) {
    if key.segments().len() > 1 && !face.has_category(key.head()) {
        face.insert_category(key.head(), json!({}));
    }
    face.set(key, value);
}

#[cfg(test)]
#[path = "../../tests/unit/face/generate.rs"]
mod tests;
