//! Named texture storage
//!
//! Screens load their textures by name when they are entered and look them
//! up by name when drawing. A texture that failed to load is simply absent;
//! callers skip it and draw a degraded frame.

use crate::error::HudError;
use log::{trace, warn};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct TextureManager<'a> {
    creator: &'a TextureCreator<WindowContext>,
    root: PathBuf,
    textures: HashMap<String, Texture<'a>>,
}

impl<'a> TextureManager<'a> {
    /// Creates an empty manager resolving paths against `root`
    pub fn new(creator: &'a TextureCreator<WindowContext>, root: impl AsRef<Path>) -> Self {
        TextureManager {
            creator,
            root: root.as_ref().to_path_buf(),
            textures: HashMap::new(),
        }
    }

    /// Loads `relative_path` (under the asset root) and stores it as `name`
    ///
    /// Replaces any texture previously stored under the same name.
    pub fn load(&mut self, name: &str, relative_path: &str) -> Result<&Texture<'a>, HudError> {
        let path = resolve_asset(&self.root, relative_path);
        trace!("[TextureManager] Loading '{}' from {}", name, path.display());

        let texture = self
            .creator
            .load_texture(&path)
            .map_err(|reason| HudError::TextureLoad {
                name: name.to_string(),
                path: path.clone(),
                reason,
            })?;

        self.textures.insert(name.to_string(), texture);
        self.get(name)
    }

    /// Loads every `(name, path)` entry, returning the failures
    ///
    /// A failed entry does not stop the others from loading.
    pub fn load_all(&mut self, entries: &[(&str, &str)]) -> Vec<HudError> {
        let mut failures = Vec::new();

        for (name, path) in entries {
            if let Err(e) = self.load(name, path) {
                warn!("[TextureManager] {}", e);
                failures.push(e);
            }
        }

        failures
    }

    pub fn get(&self, name: &str) -> Result<&Texture<'a>, HudError> {
        self.textures
            .get(name)
            .ok_or_else(|| HudError::MissingTexture(name.to_string()))
    }

    /// Size of a loaded texture in pixels
    pub fn size(&self, name: &str) -> Option<(u32, u32)> {
        self.textures.get(name).map(|texture| {
            let query = texture.query();
            (query.width, query.height)
        })
    }

    /// Sets the alpha modulation of a loaded texture (0 = invisible)
    pub fn set_alpha(&mut self, name: &str, alpha: u8) -> Result<(), HudError> {
        let texture = self
            .textures
            .get_mut(name)
            .ok_or_else(|| HudError::MissingTexture(name.to_string()))?;
        texture.set_alpha_mod(alpha);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Drops every loaded texture
    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

/// Joins an asset path onto the asset root
///
/// Absolute paths are returned unchanged.
pub fn resolve_asset(root: &Path, relative_path: &str) -> PathBuf {
    root.join(relative_path)
}
