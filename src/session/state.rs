use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::face::config::FaceConfig;
use crate::face::generate::{FaceGenerator, Gender, Race, ShuffleOptions};
use crate::face::shapes::ShapeCatalog;
use crate::foundation::error::{EditorError, EditorResult};
use crate::gallery::catalog::Catalog;
use crate::gallery::section::{SectionDescriptor, build_sections};
use crate::gallery::sync::{carry_over, commit_flip, commit_value, project};
use crate::session::codec::{SessionLinkage, encode_fragment, load_session};
use crate::session::host::Host;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Gallery density preset.
pub enum GallerySize {
    /// Small thumbnails.
    Sm,
    /// Medium thumbnails.
    #[default]
    Md,
    /// Large thumbnails.
    Lg,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// When the `"<parentKey>,"` prefix is written into the URL fragment.
pub enum LinkagePrefixPolicy {
    /// Only on the write performed at load; edits drop the prefix.
    #[default]
    FirstLoadOnly,
    /// On every write while linkage exists.
    EveryWrite,
}

/// Options controlling [`EditorSession`] behavior.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    /// Linkage prefix policy for fragment write-back.
    pub linkage_prefix: LinkagePrefixPolicy,
    /// Initial gallery density.
    pub gallery_size: GallerySize,
    /// Initial shuffle inclusion sets.
    pub shuffle: ShuffleOptions,
}

impl SessionOpts {
    /// Parse options from a JSON object; missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> EditorResult<Self> {
        let value: Value = serde_json::from_str(s).map_err(|e| EditorError::serde(e.to_string()))?;
        if !value.is_object() {
            return Err(EditorError::validation(
                "session options must be a JSON object",
            ));
        }
        serde_json::from_value(value).map_err(|e| EditorError::serde(e.to_string()))
    }

    /// Read options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            EditorError::Other(anyhow::Error::new(e).context(format!(
                "read session options '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }
}

/// Immutable view of the session after a mutation.
///
/// Fields a mutation did not touch share their `Arc` with the previous snapshot.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SessionSnapshot {
    /// Current face config.
    #[serde(rename = "faceConfig")]
    pub face_config: Arc<FaceConfig>,
    /// Gallery sections projected from `face_config`.
    pub sections: Arc<Vec<SectionDescriptor>>,
    /// Gallery density.
    #[serde(rename = "gallerySize")]
    pub gallery_size: GallerySize,
    /// Section the user last clicked.
    #[serde(rename = "lastClickedSectionIndex")]
    pub last_clicked_section_index: Option<usize>,
    /// Face the user last picked from the gallery.
    #[serde(rename = "lastSelectedFaceIndex")]
    pub last_selected_face_index: Option<usize>,
    /// Shuffle inclusion sets.
    pub shuffle: Arc<ShuffleOptions>,
    /// Parent-window linkage, fixed at load.
    pub linkage: Option<Arc<SessionLinkage>>,
}

/// Handle returned by [`EditorSession::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionSnapshot)>;

/// Owner of the live editing session.
///
/// Every mutation runs to completion, writes the URL fragment through the [`Host`] when the face
/// changes, stores a fresh [`SessionSnapshot`], notifies subscribers and returns the snapshot.
pub struct EditorSession<H: Host> {
    host: H,
    opts: SessionOpts,
    snapshot: Arc<SessionSnapshot>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<H: Host> EditorSession<H> {
    /// Load a session with the bundled control catalog and shape variants.
    pub fn new(host: H, generator: &dyn FaceGenerator, opts: SessionOpts) -> EditorResult<Self> {
        let catalog = Catalog::builtin()?;
        Self::with_catalog(host, generator, &catalog, &ShapeCatalog::builtin(), opts)
    }

    /// Load a session: restore (or generate) the face, build and project the sections, and write
    /// the fragment back (with the parent-key prefix when linked).
    #[tracing::instrument(skip_all)]
    pub fn with_catalog(
        mut host: H,
        generator: &dyn FaceGenerator,
        catalog: &Catalog,
        shapes: &ShapeCatalog,
        opts: SessionOpts,
    ) -> EditorResult<Self> {
        catalog.validate()?;
        let loaded = load_session(&host.fragment(), host.opener(), generator, &opts.shuffle);
        tracing::debug!(
            restored = loaded.restored,
            linked = loaded.linkage.is_some(),
            "session loaded"
        );

        let mut sections = build_sections(catalog, shapes);
        project(&mut sections, &loaded.face);
        host.replace_fragment(&encode_fragment(&loaded.face, loaded.linkage.as_ref()));

        let snapshot = SessionSnapshot {
            face_config: Arc::new(loaded.face),
            sections: Arc::new(sections),
            gallery_size: opts.gallery_size,
            last_clicked_section_index: None,
            last_selected_face_index: None,
            shuffle: Arc::new(opts.shuffle.clone()),
            linkage: loaded.linkage.map(Arc::new),
        };
        Ok(Self {
            host,
            opts,
            snapshot: Arc::new(snapshot),
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> Arc<SessionSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Current face config.
    pub fn face_config(&self) -> &FaceConfig {
        &self.snapshot.face_config
    }

    /// Current sections.
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.snapshot.sections
    }

    /// Linkage established at load.
    pub fn linkage(&self) -> Option<&SessionLinkage> {
        self.snapshot.linkage.as_deref()
    }

    /// The page environment.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Register a listener called after every mutation.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SessionSnapshot) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn publish(&mut self, next: SessionSnapshot) -> Arc<SessionSnapshot> {
        let next = Arc::new(next);
        self.snapshot = Arc::clone(&next);
        for (_, listener) in &mut self.listeners {
            listener(&*next);
        }
        next
    }

    fn derive(&self) -> SessionSnapshot {
        (*self.snapshot).clone()
    }

    /// Replace the whole face config: write the fragment, re-project sections, publish.
    #[tracing::instrument(skip_all)]
    pub fn replace_face_config(&mut self, face: FaceConfig) -> Arc<SessionSnapshot> {
        let prefix = match self.opts.linkage_prefix {
            LinkagePrefixPolicy::EveryWrite => self.snapshot.linkage.as_deref(),
            LinkagePrefixPolicy::FirstLoadOnly => None,
        };
        let fragment = encode_fragment(&face, prefix);
        self.host.replace_fragment(&fragment);

        let mut sections = (*self.snapshot.sections).clone();
        project(&mut sections, &face);

        let mut next = self.derive();
        next.face_config = Arc::new(face);
        next.sections = Arc::new(sections);
        tracing::debug!("face config replaced");
        self.publish(next)
    }

    /// Edit one section's value. No-op when the index is out of range or its path does not
    /// resolve.
    #[tracing::instrument(skip(self))]
    pub fn set_section_value(&mut self, index: usize, value: Value) -> Arc<SessionSnapshot> {
        let Some(key) = self.snapshot.sections.get(index).map(|s| s.key.clone()) else {
            tracing::debug!(index, "ignoring edit for unknown section");
            return self.snapshot();
        };
        match commit_value(&self.snapshot.face_config, &key, value) {
            Some(face) => self.replace_face_config(face),
            None => {
                tracing::debug!(%key, "section path does not resolve; edit ignored");
                self.snapshot()
            }
        }
    }

    /// Set one section's flip toggle. No-op when the index is out of range or it has no flip.
    #[tracing::instrument(skip(self))]
    pub fn set_section_flip(&mut self, index: usize, flipped: bool) -> Arc<SessionSnapshot> {
        let next = self
            .snapshot
            .sections
            .get(index)
            .and_then(|s| commit_flip(&self.snapshot.face_config, s, flipped));
        match next {
            Some(face) => self.replace_face_config(face),
            None => {
                tracing::debug!(index, "ignoring flip for section without flip");
                self.snapshot()
            }
        }
    }

    /// Generate a new face, keeping the current values of sections with randomize disabled.
    #[tracing::instrument(skip_all)]
    pub fn randomize(&mut self, generator: &dyn FaceGenerator) -> Arc<SessionSnapshot> {
        let mut face = generator.generate(&self.snapshot.shuffle);
        face.ensure_tattoo();
        carry_over(
            &mut face,
            &self.snapshot.face_config,
            self.snapshot.sections.iter().filter(|s| !s.randomize_enabled),
        );
        self.replace_face_config(face)
    }

    /// Set gallery density.
    pub fn set_gallery_size(&mut self, size: GallerySize) -> Arc<SessionSnapshot> {
        let mut next = self.derive();
        next.gallery_size = size;
        self.publish(next)
    }

    /// Record the last clicked section (`None` clears it).
    pub fn set_last_clicked_section_index(
        &mut self,
        index: Option<usize>,
    ) -> Arc<SessionSnapshot> {
        let mut next = self.derive();
        next.last_clicked_section_index = index;
        self.publish(next)
    }

    /// Record the last selected gallery face (`None` clears it).
    pub fn set_last_selected_face_index(
        &mut self,
        index: Option<usize>,
    ) -> Arc<SessionSnapshot> {
        let mut next = self.derive();
        next.last_selected_face_index = index;
        self.publish(next)
    }

    /// Toggle whether a section takes part in "randomize all".
    ///
    /// Out-of-range indices leave the session untouched and return the current snapshot.
    pub fn set_randomize_enabled(&mut self, index: usize, enabled: bool) -> Arc<SessionSnapshot> {
        if index >= self.snapshot.sections.len() {
            tracing::debug!(index, "ignoring randomize toggle for unknown section");
            return self.snapshot();
        }
        let mut sections = (*self.snapshot.sections).clone();
        sections[index].randomize_enabled = enabled;
        let mut next = self.derive();
        next.sections = Arc::new(sections);
        self.publish(next)
    }

    /// Replace the gender inclusion set.
    pub fn set_shuffle_gender_options(&mut self, gender: Vec<Gender>) -> Arc<SessionSnapshot> {
        self.update_shuffle(|s| s.gender = gender)
    }

    /// Replace the skin-tone inclusion set.
    pub fn set_shuffle_race_options(&mut self, race: Vec<Race>) -> Arc<SessionSnapshot> {
        self.update_shuffle(|s| s.race = race)
    }

    /// Replace the free-form shuffle switches.
    pub fn set_shuffle_other_options(&mut self, other: Vec<String>) -> Arc<SessionSnapshot> {
        self.update_shuffle(|s| s.other = other)
    }

    fn update_shuffle(&mut self, f: impl FnOnce(&mut ShuffleOptions)) -> Arc<SessionSnapshot> {
        let mut shuffle = (*self.snapshot.shuffle).clone();
        f(&mut shuffle);
        let mut next = self.derive();
        next.shuffle = Arc::new(shuffle);
        self.publish(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
