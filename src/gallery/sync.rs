//! Keeps gallery sections and the face config mutually consistent.
//!
//! Reads go config -> sections ([`project`]). Writes go through [`commit_value`] /
//! [`commit_flip`], which edit a copy of the config; the caller then replaces its config and
//! projects again so no section ever shows a value older than the config.

use serde_json::Value;

use crate::face::config::FaceConfig;
use crate::face::path::DottedPath;
use crate::gallery::section::SectionDescriptor;

/// Overwrite every section's selected value (and flip value) from `face`.
///
/// Paths that do not resolve project as `null`. Flip toggles are boolean-typed, so a flip whose
/// value is missing or not a JSON boolean projects as `false`; the config itself is left as is.
/// Idempotent.
pub fn project(sections: &mut [SectionDescriptor], face: &FaceConfig) {
    for section in sections.iter_mut() {
        section.selected_value = face.get(&section.key).cloned().unwrap_or(Value::Null);
        if let Some(flip) = section.flip_mut() {
            flip.selected_value = face
                .get(&flip.key)
                .and_then(Value::as_bool)
                .unwrap_or(false);
        }
    }
}

/// Copy of `face` with `value` written at `key`; `None` if the path does not resolve.
pub fn commit_value(face: &FaceConfig, key: &DottedPath, value: Value) -> Option<FaceConfig> {
    let mut next = face.clone();
    next.set(key, value).then_some(next)
}

/// Copy of `face` with the section's flip toggled to `flipped`; `None` if the section has no flip
/// or the path does not resolve.
pub fn commit_flip(
    face: &FaceConfig,
    section: &SectionDescriptor,
    flipped: bool,
) -> Option<FaceConfig> {
    let flip = section.flip()?;
    commit_value(face, &flip.key, Value::Bool(flipped))
}

/// Copy the values of `keep` sections from `from` into `into`.
///
/// Used by "randomize all" to hold the sections whose randomization is disabled.
pub fn carry_over<'a>(
    into: &mut FaceConfig,
    from: &FaceConfig,
    keep: impl IntoIterator<Item = &'a SectionDescriptor>,
) {
    for section in keep {
        if let Some(v) = from.get(&section.key) {
            into.set(&section.key, v.clone());
        }
        if let Some(flip) = section.flip() {
            if let Some(v) = from.get(&flip.key) {
                into.set(&flip.key, v.clone());
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/sync.rs"]
mod tests;
