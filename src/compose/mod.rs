//! Per-mode layering of background, poster and logo.

pub mod compositor;
pub mod plan;
