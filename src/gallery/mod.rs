//! Gallery sections: catalog expansion and synchronization with the face config.

pub(crate) mod catalog;
pub(crate) mod palette;
pub(crate) mod range;
pub(crate) mod section;
pub(crate) mod sync;
