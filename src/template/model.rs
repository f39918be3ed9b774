use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::assets::store::normalize_rel_path;
use crate::engine::logo::{FooterBand, HeaderLogo, TopCenterLogo};
use crate::foundation::core::{PixelRect, Size};
use crate::foundation::error::{CardError, CardResult};

/// Pipeline selector for a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    Framed,
    Layered,
    FramedTopLogo,
    FullPosterRounded,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Framed => "framed",
            Self::Layered => "layered",
            Self::FramedTopLogo => "framed-top-logo",
            Self::FullPosterRounded => "full-poster-rounded",
        })
    }
}

/// Poster in a fixed center rectangle, logo in a footer band under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FramedGeometry {
    pub center: PixelRect,
    pub footer: FooterBand,
}

/// Poster behind a frame artwork with a transparent window, logo in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayeredGeometry {
    /// Top of the visible poster band; the band runs to the bottom of the background.
    pub poster_y: u32,
    #[serde(default = "default_layered_poster_width")]
    pub poster_width: u32,
    /// Extra height forced onto cropped posters so the band never shows a gap.
    #[serde(default = "default_overflow_pad")]
    pub overflow_pad: u32,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: u32,
    #[serde(default = "default_mask_inset")]
    pub mask_inset: u32,
    pub header_logo: HeaderLogo,
}

/// Fixed-size poster slot, horizontally centered at `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PosterSlot {
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    pub y: u32,
}

impl PosterSlot {
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for PosterSlot {
    fn default() -> Self {
        Self {
            width: 619,
            height: 834,
            y: 80,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TopLogoGeometry {
    #[serde(default)]
    pub poster: PosterSlot,
    pub header_logo: TopCenterLogo,
}

/// Poster-only card with rounded corners; no background and no logo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundedGeometry {
    pub output: Size,
    pub corner_radius: u32,
}

/// Mode tag plus the geometry block belonging to that mode, and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Layout {
    Framed(FramedGeometry),
    Layered(LayeredGeometry),
    FramedTopLogo(TopLogoGeometry),
    FullPosterRounded(RoundedGeometry),
}

impl Layout {
    pub fn mode(&self) -> LayoutMode {
        match self {
            Self::Framed(_) => LayoutMode::Framed,
            Self::Layered(_) => LayoutMode::Layered,
            Self::FramedTopLogo(_) => LayoutMode::FramedTopLogo,
            Self::FullPosterRounded(_) => LayoutMode::FullPosterRounded,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TemplateDescriptor {
    /// Stable identifier, also used as display name.
    pub id: String,
    /// Background bitmap path relative to the assets root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(flatten)]
    pub layout: Layout,
}

impl TemplateDescriptor {
    pub fn mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    pub fn requires_background(&self) -> bool {
        self.mode() != LayoutMode::FullPosterRounded
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.id.trim().is_empty() {
            return Err(CardError::validation("template id must be non-empty"));
        }

        match (&self.background, self.requires_background()) {
            (Some(bg), true) => {
                normalize_rel_path(bg).map_err(|e| {
                    CardError::validation(format!("template '{}' background: {e}", self.id))
                })?;
            }
            (None, true) => {
                return Err(CardError::validation(format!(
                    "template '{}' ({}) requires a background",
                    self.id,
                    self.mode()
                )));
            }
            (Some(_), false) => {
                return Err(CardError::validation(format!(
                    "template '{}' ({}) must not declare a background",
                    self.id,
                    self.mode()
                )));
            }
            (None, false) => {}
        }

        self.validate_geometry()
            .map_err(|e| CardError::validation(format!("template '{}': {e}", self.id)))
    }

    fn validate_geometry(&self) -> CardResult<()> {
        match &self.layout {
            Layout::Framed(g) => {
                g.center.size().validate("center rect")?;
                positive(g.footer.height, "footer height")?;
                positive(g.footer.logo_height, "footer logo_height")?;
                if let Some(w) = g.footer.max_width {
                    positive(w, "footer max_width")?;
                }
            }
            Layout::Layered(g) => {
                positive(g.poster_width, "poster_width")?;
                positive(g.header_logo.height, "header_logo height")?;
                positive(g.header_logo.max_width, "header_logo max_width")?;
            }
            Layout::FramedTopLogo(g) => {
                g.poster.size().validate("poster rect")?;
                positive(g.header_logo.max_height, "header_logo max_height")?;
                if let Some(w) = g.header_logo.max_width {
                    positive(w, "header_logo max_width")?;
                }
            }
            Layout::FullPosterRounded(g) => {
                g.output.validate("output size")?;
                if g.corner_radius.saturating_mul(2) > g.output.width.min(g.output.height) {
                    return Err(CardError::invalid_geometry(
                        "corner_radius exceeds half the output size",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Ordered template list, usually deserialized from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TemplateCatalog {
    pub templates: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Parse a catalogue from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CardError::serde(format!("parse template catalogue JSON: {e}")))
    }

    /// Parse a catalogue from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardError::io(format!("open template catalogue '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> CardResult<()> {
        let mut seen = BTreeSet::new();
        for t in &self.templates {
            t.validate()?;
            if !seen.insert(t.id.as_str()) {
                return Err(CardError::validation(format!(
                    "duplicate template id '{}'",
                    t.id
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// The stock card templates, backgrounds under `templates/`.
    pub fn builtin() -> Self {
        let footer = FooterBand {
            height: 90,
            logo_height: 46,
            max_width: None,
            logo_margin: 25,
        };
        let top_logo = TopCenterLogo {
            max_height: 62,
            max_width: None,
            top_margin: 10,
        };

        let framed = |n: u32, center: PixelRect| TemplateDescriptor {
            id: format!("Template {n}"),
            background: Some(format!("templates/template_{n}.png")),
            layout: Layout::Framed(FramedGeometry { center, footer }),
        };
        let top = |n: u32| TemplateDescriptor {
            id: format!("Template {n}"),
            background: Some(format!("templates/template_{n}.png")),
            layout: Layout::FramedTopLogo(TopLogoGeometry {
                poster: PosterSlot::default(),
                header_logo: top_logo,
            }),
        };

        Self {
            templates: vec![
                framed(1, PixelRect::new(10, 59, 597, 855)),
                framed(2, PixelRect::new(14, 63, 591, 849)),
                TemplateDescriptor {
                    id: "Template 3".to_string(),
                    background: Some("templates/template_3.png".to_string()),
                    layout: Layout::Layered(LayeredGeometry {
                        poster_y: 120,
                        poster_width: default_layered_poster_width(),
                        overflow_pad: default_overflow_pad(),
                        corner_radius: default_corner_radius(),
                        mask_inset: default_mask_inset(),
                        header_logo: HeaderLogo {
                            height: 63,
                            max_width: 250,
                            top_margin: 62,
                            left_margin: 24,
                        },
                    }),
                },
                top(4),
                top(5),
                TemplateDescriptor {
                    id: "Template 6".to_string(),
                    background: None,
                    layout: Layout::FullPosterRounded(RoundedGeometry {
                        output: Size::new(619, 994),
                        corner_radius: 22,
                    }),
                },
            ],
        }
    }
}

fn positive(v: u32, what: &str) -> CardResult<()> {
    if v == 0 {
        return Err(CardError::invalid_geometry(format!("{what} must be > 0")));
    }
    Ok(())
}

fn default_layered_poster_width() -> u32 {
    609
}

fn default_overflow_pad() -> u32 {
    120
}

fn default_corner_radius() -> u32 {
    22
}

fn default_mask_inset() -> u32 {
    2
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
