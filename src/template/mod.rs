//! Template descriptors and the read-only registry built from them.

pub mod model;
pub mod registry;
