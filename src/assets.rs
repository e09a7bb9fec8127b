use rust_embed::Embed;
use thiserror::Error;

/// Site-root path images are served from. cargo-leptos copies `public/`
/// into the site root, so `public/images/x.png` is served as `/images/x.png`.
pub const IMAGE_ROOT: &str = "/images";

#[derive(Embed)]
#[folder = "public/images"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Images;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Image asset not found: {0}")]
    Missing(&'static str),
}

/// Handle to an image bundled with the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset(&'static str);

impl Asset {
    pub const fn new(file_name: &'static str) -> Self {
        Self(file_name)
    }

    pub fn file_name(&self) -> &'static str {
        self.0
    }

    pub fn href(&self) -> String {
        format!("{}/{}", IMAGE_ROOT, self.0)
    }

    /// Returns the href if the file is part of the embedded image folder.
    pub fn resolve(&self) -> Result<String, AssetError> {
        Images::get(self.0)
            .map(|_| self.href())
            .ok_or(AssetError::Missing(self.0))
    }
}
