//! Static-asset loading and the per-build configuration record.

use std::path::{Path, PathBuf};

use crate::types::{QuoteError, Result};

/// Where one build finds its static assets and writes its output. Threaded
/// explicitly through the build instead of relying on the working
/// directory.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub asset_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Raw bytes of the required static assets. A missing file is fatal.
#[derive(Debug)]
pub struct RawAssets {
    pub body_font: Vec<u8>,
    pub cover_logo: Vec<u8>,
    pub cover_background: Vec<u8>,
    pub footer_logo: Vec<u8>,
}

impl RawAssets {
    pub fn load(asset_dir: &Path) -> Result<Self> {
        Ok(Self {
            body_font: read_asset(asset_dir, "body.ttf")?,
            cover_logo: read_asset(asset_dir, "cover_logo.jpg")?,
            cover_background: read_asset(asset_dir, "cover_background.jpg")?,
            footer_logo: read_asset(asset_dir, "footer_logo.jpg")?,
        })
    }
}

fn read_asset(dir: &Path, name: &str) -> Result<Vec<u8>> {
    let path = dir.join(name);
    std::fs::read(&path).map_err(|_| QuoteError::AssetMissing(path))
}

/// Read the gallery image files. Every listed file must exist; the image
/// collaborator owns that contract, so a read failure aborts the build.
pub fn read_gallery(paths: &[&PathBuf]) -> Result<Vec<Vec<u8>>> {
    paths
        .iter()
        .map(|path| std::fs::read(path).map_err(QuoteError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = RawAssets::load(dir.path()).unwrap_err();
        match err {
            QuoteError::AssetMissing(path) => {
                assert!(path.ends_with("body.ttf"));
            }
            other => panic!("expected AssetMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_assets_load_when_all_present() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "body.ttf",
            "cover_logo.jpg",
            "cover_background.jpg",
            "footer_logo.jpg",
        ] {
            std::fs::write(dir.path().join(name), b"stub").unwrap();
        }
        let assets = RawAssets::load(dir.path()).unwrap();
        assert_eq!(assets.body_font, b"stub");
    }

    #[test]
    fn test_missing_gallery_file_is_an_io_error() {
        let missing = PathBuf::from("/nonexistent/img-0.jpg");
        let err = read_gallery(&[&missing]).unwrap_err();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
