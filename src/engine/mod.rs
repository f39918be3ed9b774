//! Leaf transforms: cover crops, logo placement and rounded masks.

pub mod crop;
pub mod logo;
pub mod mask;
