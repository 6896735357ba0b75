use std::collections::HashMap;
use std::path::{Path, PathBuf};

use raylib::prelude::*;
use tracing::{info, warn};

use crate::texture_loader::load_oriented_texture;

/// Read-only texture store keyed by the image names the deck uses. Loaded
/// once at startup; an image that fails to load is skipped, and renderers
/// draw a placeholder card for it.
pub struct AssetStore {
    textures: HashMap<String, Texture2D>,
}

impl AssetStore {
    pub fn empty() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        root: &Path,
        refs: &[String],
    ) -> Self {
        let mut textures = HashMap::new();
        for name in refs {
            let path: PathBuf = root.join(name);
            match load_oriented_texture(rl, thread, &path) {
                Ok(texture) => {
                    textures.insert(name.clone(), texture);
                }
                Err(e) => {
                    warn!(image = %name, error = %e, "skipping image");
                }
            }
        }
        info!(loaded = textures.len(), referenced = refs.len(), "assets ready");
        Self { textures }
    }

    pub fn texture(&self, name: &str) -> Option<&Texture2D> {
        self.textures.get(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
