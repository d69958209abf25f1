//! Face configuration model and its collaborators.

pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod path;
pub(crate) mod shapes;
