//! Cardsmith composes printable collectible cards from a poster, a logo and a template.
//!
//! The engine is a set of pure functions over RGBA bitmaps:
//!
//! - Build a [`TemplateRegistry`] once from a [`TemplateCatalog`]
//! - Describe each card with a [`RenderRequest`]
//! - Render it with a [`Compositor`] and hand the bitmap to the [`output`] helpers
//!
//! Acquisition, previews and persistence live outside the engine and never feed state back in.
#![forbid(unsafe_code)]

mod foundation;

/// Source bitmaps, template backgrounds and icon pack lookup.
pub mod assets;
/// Template rendering pipelines.
pub mod compose;
/// Persisted user settings.
pub mod config;
/// Crop, logo and mask transforms.
pub mod engine;
/// Previews and PNG output.
pub mod output;
/// Stale-result suppression for concurrent searches.
pub mod session;
/// Template descriptors and the prepared registry.
pub mod template;

pub use crate::foundation::core::{CropPolicy, CropRequest, Orientation, PixelRect, Size};
pub use crate::foundation::error::{CardError, CardResult};

pub use crate::assets::source::SourceImage;
pub use crate::compose::compositor::{Compositor, RenderRequest, render, render_required};
pub use crate::config::AppConfig;
pub use crate::session::generation::{Generation, SearchGeneration};
pub use crate::template::model::{Layout, LayoutMode, TemplateCatalog, TemplateDescriptor};
pub use crate::template::registry::{Template, TemplateRegistry};
