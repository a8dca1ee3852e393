//! Frame sequence naming.

use crate::assets::AssetPaths;
use crate::config::CubeConfig;
use crate::error::Result;

/// Encodings a frame can be requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Compact format, tried first.
    Webp,
    /// Uncompressed fallback.
    Png,
}

impl ImageFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Png => "png",
        }
    }

    /// Next format to try after this one failed.
    pub fn fallback(self) -> Option<ImageFormat> {
        match self {
            ImageFormat::Webp => Some(ImageFormat::Png),
            ImageFormat::Png => None,
        }
    }
}

/// Layout of the cube frames on the asset server.
#[derive(Debug, Clone)]
pub struct FrameSet {
    assets: AssetPaths,
    dir: String,
    prefix: String,
    digits: usize,
    total: usize,
}

impl FrameSet {
    /// Frame set described by `config`, resolved under `assets`.
    pub fn new(assets: AssetPaths, config: &CubeConfig) -> Self {
        Self {
            assets,
            dir: config.frame_dir.trim_matches('/').to_string(),
            prefix: config.frame_prefix.clone(),
            digits: config.index_digits,
            total: config.total_frames,
        }
    }

    /// Number of frames.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Index fetched first after activation: the middle of the sequence.
    pub fn seed_index(&self) -> usize {
        self.total / 2
    }

    /// Clamp any index into the sequence.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.total.saturating_sub(1))
    }

    /// Resolved URL of frame `index` in `format`.
    pub fn path(&self, index: usize, format: ImageFormat) -> Result<String> {
        let file = format!(
            "{}{:0width$}.{}",
            self.prefix,
            self.clamp(index),
            format.extension(),
            width = self.digits
        );
        if self.dir.is_empty() {
            self.assets.resolve(&file)
        } else {
            self.assets.resolve(&format!("{}/{}", self.dir, file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_are_zero_padded_and_prefixed() {
        let frames = FrameSet::new(AssetPaths::new("/fest/"), &CubeConfig::default());
        assert_eq!(
            frames.path(7, ImageFormat::Webp).unwrap(),
            "/fest/images/cube/frame_007.webp"
        );
        assert_eq!(
            frames.path(141, ImageFormat::Png).unwrap(),
            "/fest/images/cube/frame_141.png"
        );
    }

    #[test]
    fn indices_are_clamped() {
        let frames = FrameSet::new(AssetPaths::default(), &CubeConfig::default());
        assert_eq!(frames.seed_index(), 71);
        assert_eq!(frames.clamp(500), 141);
        assert!(frames.path(999, ImageFormat::Webp).unwrap().ends_with("frame_141.webp"));
    }

    #[test]
    fn png_has_no_further_fallback() {
        assert_eq!(ImageFormat::Webp.fallback(), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::Png.fallback(), None);
    }
}
