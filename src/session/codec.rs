//! URL-fragment persistence of an editing session.
//!
//! Layout: `#` + optional `"<parentKey>,"` + base64(JSON(face config)). The parent-key prefix is
//! only honored when the page also has an opener window.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::face::config::FaceConfig;
use crate::face::generate::{FaceGenerator, ShuffleOptions};
use crate::foundation::error::{EditorError, EditorResult};
use crate::session::host::OpenerHandle;

/// Parent/child window relationship established at load time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SessionLinkage {
    /// Key the parent uses to route updates from this child.
    #[serde(rename = "parentKey")]
    pub parent_key: i64,
    /// The opener window.
    pub opener: OpenerHandle,
}

/// Result of reading a session from a fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedSession {
    /// Face config to edit, tattoo category guaranteed.
    pub face: FaceConfig,
    /// Linkage, when the fragment carried a parent key and an opener exists.
    pub linkage: Option<SessionLinkage>,
    /// Whether the face was decoded (`true`) or freshly generated (`false`).
    pub restored: bool,
}

/// Drop one leading `#`, if present.
pub fn strip_fragment_delimiter(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// base64(JSON(face)).
pub fn encode_face(face: &FaceConfig) -> String {
    STANDARD.encode(face.to_json_string())
}

/// Full fragment text (without `#`), prefixed with the parent key when `linkage` is given.
pub fn encode_fragment(face: &FaceConfig, linkage: Option<&SessionLinkage>) -> String {
    match linkage {
        Some(l) => format!("{},{}", l.parent_key, encode_face(face)),
        None => encode_face(face),
    }
}

/// Inverse of [`encode_face`].
pub fn decode_face(payload: &str) -> EditorResult<FaceConfig> {
    let bytes = STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| EditorError::decode(format!("invalid base64: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| EditorError::decode(format!("payload is not UTF-8: {e}")))?;
    FaceConfig::from_json_str(&text).map_err(|e| EditorError::decode(e.to_string()))
}

/// Decode a fragment (without `#`).
///
/// Returns `Ok(None)` for an empty fragment. A two-part `"<key>,<payload>"` fragment establishes
/// linkage only when `opener` is present; otherwise the whole text is decoded as one payload.
/// A key without a leading integer keeps the decoded face but leaves the session unlinked.
pub fn decode_fragment(
    fragment: &str,
    opener: Option<OpenerHandle>,
) -> EditorResult<Option<(FaceConfig, Option<SessionLinkage>)>> {
    if fragment.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = fragment.split(',').collect();
    if let (Some(opener), [key, payload]) = (opener, parts.as_slice()) {
        let face = decode_face(payload)?;
        let linkage = match parse_parent_key(key) {
            Some(parent_key) => Some(SessionLinkage { parent_key, opener }),
            None => {
                tracing::warn!(%key, "parent key is not an integer; session left unlinked");
                None
            }
        };
        return Ok(Some((face, linkage)));
    }

    Ok(Some((decode_face(fragment)?, None)))
}

/// Leading integer of `key` (optional sign, then digits), ignoring surrounding whitespace and any
/// trailing text.
fn parse_parent_key(key: &str) -> Option<i64> {
    let key = key.trim();
    let unsigned = key.strip_prefix(['-', '+']).unwrap_or(key);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let end = key.len() - unsigned.len() + digits;
    key[..end].parse().ok()
}

/// Restore the session from `fragment`, falling back to `generator` when there is nothing to
/// restore or the fragment is malformed. Decode failures are logged, never returned.
pub fn load_session(
    fragment: &str,
    opener: Option<OpenerHandle>,
    generator: &dyn FaceGenerator,
    shuffle: &ShuffleOptions,
) -> LoadedSession {
    let fragment = strip_fragment_delimiter(fragment);
    let (mut face, linkage, restored) = match decode_fragment(fragment, opener) {
        Ok(Some((face, linkage))) => (face, linkage, true),
        Ok(None) => (generator.generate(shuffle), None, false),
        Err(e) => {
            tracing::warn!(error = %e, "could not restore face from URL fragment; generating a new one");
            (generator.generate(shuffle), None, false)
        }
    };
    if face.ensure_tattoo() {
        tracing::debug!("backfilled missing tattoo category");
    }
    LoadedSession {
        face,
        linkage,
        restored,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/codec.rs"]
mod tests;
