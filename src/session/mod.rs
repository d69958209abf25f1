//! Session lifecycle: URL-fragment persistence and the state container.

pub(crate) mod codec;
pub(crate) mod host;
pub(crate) mod state;
