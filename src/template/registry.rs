use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;

use crate::assets::store::{BackgroundSlot, BackgroundStore};
use crate::foundation::core::Size;
use crate::foundation::error::{CardError, CardResult};
use crate::template::model::{Layout, TemplateCatalog, TemplateDescriptor};

/// A descriptor together with its prepared background.
#[derive(Clone, Debug)]
pub struct Template {
    descriptor: TemplateDescriptor,
    background: Option<BackgroundSlot>,
}

impl Template {
    pub fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    /// The decoded background, or `AssetUnavailable` when it could not be loaded.
    pub fn background(&self) -> CardResult<&RgbaImage> {
        match &self.background {
            Some(BackgroundSlot::Ready(img)) => Ok(img.as_ref()),
            Some(BackgroundSlot::Unavailable(reason)) => Err(CardError::asset_unavailable(
                &self.descriptor.id,
                reason.clone(),
            )),
            None => Err(CardError::asset_unavailable(
                &self.descriptor.id,
                format!("{} templates have no background", self.descriptor.mode()),
            )),
        }
    }

    /// Resolution of every bitmap this template produces.
    pub fn output_size(&self) -> CardResult<Size> {
        if let Layout::FullPosterRounded(g) = &self.descriptor.layout {
            return Ok(g.output);
        }
        let bg = self.background()?;
        Ok(Size::new(bg.width(), bg.height()))
    }
}

/// Read-only template lookup built once at startup.
///
/// Shared freely across threads; nothing mutates it after construction.
#[derive(Clone, Debug)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// Validate `catalog` and decode every background from `assets_root`.
    ///
    /// Backgrounds that fail to load do not fail preparation; rendering those templates reports
    /// `AssetUnavailable` instead.
    pub fn prepare(catalog: TemplateCatalog, assets_root: impl AsRef<Path>) -> CardResult<Self> {
        Self::prepare_with_store(catalog, BackgroundStore::new(assets_root.as_ref()))
    }

    /// Like [`TemplateRegistry::prepare`], but backgrounds already in `store` are used as-is.
    pub fn prepare_with_store(
        catalog: TemplateCatalog,
        mut store: BackgroundStore,
    ) -> CardResult<Self> {
        let registry = Self::assemble(catalog, |rel| Ok(store.load(rel)?.clone()))?;
        tracing::debug!(
            templates = registry.len(),
            root = %store.root().display(),
            "template registry prepared"
        );
        Ok(registry)
    }

    /// Build from in-memory backgrounds keyed by the descriptors' background paths.
    ///
    /// Paths without an entry are reported as unavailable; nothing is read from disk.
    pub fn with_backgrounds(
        catalog: TemplateCatalog,
        backgrounds: impl IntoIterator<Item = (String, RgbaImage)>,
    ) -> CardResult<Self> {
        let mut store = BackgroundStore::default();
        for (rel, img) in backgrounds {
            store.insert(&rel, img)?;
        }
        Self::assemble(catalog, |rel| {
            Ok(store.get(rel).cloned().unwrap_or_else(|| {
                BackgroundSlot::Unavailable(format!("no in-memory background for '{rel}'"))
            }))
        })
    }

    fn assemble(
        catalog: TemplateCatalog,
        mut resolve: impl FnMut(&str) -> CardResult<BackgroundSlot>,
    ) -> CardResult<Self> {
        catalog.validate()?;

        let mut templates = Vec::with_capacity(catalog.templates.len());
        let mut index = HashMap::with_capacity(catalog.templates.len());
        for descriptor in catalog.templates {
            let background = match &descriptor.background {
                Some(rel) => Some(resolve(rel)?),
                None => None,
            };
            index.insert(descriptor.id.clone(), templates.len());
            templates.push(Template {
                descriptor,
                background,
            });
        }
        Ok(Self { templates, index })
    }

    pub fn get(&self, id: &str) -> CardResult<&Template> {
        self.index
            .get(id)
            .map(|&i| &self.templates[i])
            .ok_or_else(|| CardError::unknown_template(id))
    }

    /// Templates in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(Template::id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/registry.rs"]
mod tests;
