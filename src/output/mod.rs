//! Collaborators that consume a rendered card: preview fitting and PNG persistence.

pub mod file;
pub mod preview;
