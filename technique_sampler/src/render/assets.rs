/// Asset handles and loading.
///
/// Meshes and textures live on the device side of the backend. The scene
/// only holds opaque slotmap keys, looked up by name once at startup and
/// again after every device loss.

use rustc_hash::FxHashMap;
use slotmap::new_key_type;
use crate::error::Result;
use crate::sampler_debug;

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Handle to a mesh loaded by an `AssetProvider`.
    ///
    /// Becomes invalid when the device that owns it is recreated.
    pub struct MeshKey;
}

new_key_type! {
    /// Handle to a texture loaded by an `AssetProvider`.
    pub struct TextureKey;
}

// ===== PROVIDER TRAIT =====

/// Loads device resources by name
pub trait AssetProvider {
    /// Load a named mesh
    fn load_mesh(&mut self, name: &str) -> Result<MeshKey>;

    /// Load a texture from a path
    fn load_texture(&mut self, path: &str) -> Result<TextureKey>;

    /// Release every resource this provider handed out
    fn release_all(&mut self);
}

// ===== MANIFEST =====

/// Names of every asset a scene needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    pub meshes: Vec<String>,
    pub textures: Vec<String>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh name, ignoring duplicates
    pub fn mesh(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.meshes.contains(&name) {
            self.meshes.push(name);
        }
        self
    }

    /// Add a texture path, ignoring duplicates
    pub fn texture(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !self.textures.contains(&path) {
            self.textures.push(path);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty() && self.textures.is_empty()
    }
}

// ===== LOADED ASSETS =====

/// Keys for every asset of a manifest, by name
#[derive(Debug, Clone, Default)]
pub struct SceneAssets {
    meshes: FxHashMap<String, MeshKey>,
    textures: FxHashMap<String, TextureKey>,
}

impl SceneAssets {
    /// Load every asset of `manifest`. Stops at the first failure; nothing
    /// loaded so far is kept.
    pub fn load(provider: &mut dyn AssetProvider, manifest: &AssetManifest) -> Result<Self> {
        let mut assets = Self::default();

        for name in &manifest.meshes {
            let key = provider.load_mesh(name)?;
            assets.meshes.insert(name.clone(), key);
        }
        for path in &manifest.textures {
            let key = provider.load_texture(path)?;
            assets.textures.insert(path.clone(), key);
        }

        sampler_debug!("sampler::Assets", "Loaded {} meshes, {} textures",
            assets.meshes.len(), assets.textures.len());
        Ok(assets)
    }

    pub fn mesh(&self, name: &str) -> Option<MeshKey> {
        self.meshes.get(name).copied()
    }

    pub fn texture(&self, path: &str) -> Option<TextureKey> {
        self.textures.get(path).copied()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty() && self.textures.is_empty()
    }
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
