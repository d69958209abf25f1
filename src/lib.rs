//! Session core for an interactive avatar editor.
//!
//! A user edits discrete controls (color pickers, range sliders, shape pickers) that map onto a
//! nested [`FaceConfig`]. This crate keeps the flat list of gallery sections and the nested config
//! consistent, and persists the whole session in the page's URL fragment.
//!
//! # Flow
//!
//! 1. **Load**: the URL fragment is decoded into a face config (or a fresh one is generated), with
//!    optional parent-window linkage ([`load_session`]).
//! 2. **Build**: the static [`Catalog`] is expanded into [`SectionDescriptor`]s once
//!    ([`build_sections`]).
//! 3. **Project**: section values are read from the config through dotted paths ([`project`]).
//! 4. **Edit**: every mutation on [`EditorSession`] writes a copy of the config, re-projects,
//!    rewrites the fragment (history-replace, never push) and publishes a new
//!    [`SessionSnapshot`].
//!
//! Rendering, palettes beyond the bundled defaults, and server persistence are out of scope.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod face;
mod foundation;
mod gallery;
mod session;

pub use face::config::{FaceConfig, TATTOO_CATEGORY, TATTOO_NONE};
pub use face::generate::{CatalogGenerator, FaceGenerator, Gender, Race, ShuffleOptions};
pub use face::path::{DottedPath, get_path, set_path};
pub use face::shapes::ShapeCatalog;
pub use foundation::error::{EditorError, EditorResult};
pub use gallery::catalog::{Catalog, ColorFormat, ControlDeclaration, ControlKind, SelectionType};
pub use gallery::palette::{
    HAIR_COLORS, JERSEY_COLORS, PLACEHOLDER_COLOR, SHAVE_COLORS, SKIN_COLORS,
};
pub use gallery::range::{RangeConfig, RangeSteps, SteppedValues, round2};
pub use gallery::section::{
    FlipState, SectionDescriptor, SectionKind, UNKNOWN_VALUE, build_sections,
};
pub use gallery::sync::{carry_over, commit_flip, commit_value, project};
pub use session::codec::{
    LoadedSession, SessionLinkage, decode_face, decode_fragment, encode_face, encode_fragment,
    load_session, strip_fragment_delimiter,
};
pub use session::host::{Host, MemoryHost, OpenerHandle};
pub use session::state::{
    EditorSession, GallerySize, LinkagePrefixPolicy, SessionOpts, SessionSnapshot,
    SubscriptionId,
};
