//! Static asset path resolution.
//!
//! Content refers to images by site-relative paths such as
//! `/images/speakers/wafa-razak.webp`. The site can be deployed under a
//! sub-path, so every path is prefixed with the configured base URL.

use crate::error::{FestError, Result};

/// Resolves site-relative asset paths under a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    base_url: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AssetPaths {
    /// Create a resolver; a trailing `/` is added to the base when missing.
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// The normalised base, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Prefix `path` with the base URL.
    ///
    /// ```rust
    /// use fest_core::assets::AssetPaths;
    ///
    /// let assets = AssetPaths::new("/ufuq");
    /// assert_eq!(assets.resolve("/icons/ufuq-logo.webp")?, "/ufuq/icons/ufuq-logo.webp");
    /// assert_eq!(assets.resolve("images/a.webp")?, "/ufuq/images/a.webp");
    /// # Ok::<(), fest_core::FestError>(())
    /// ```
    pub fn resolve(&self, path: &str) -> Result<String> {
        let clean = path.trim().trim_start_matches('/');
        if clean.is_empty() || clean.split('/').any(|segment| segment == "..") {
            return Err(FestError::InvalidAssetPath(path.to_string()));
        }
        Ok(format!("{}{}", self.base_url, clean))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_base_keeps_single_slash() {
        let assets = AssetPaths::default();
        assert_eq!(
            assets.resolve("/images/events/jamia-summer-school.webp").unwrap(),
            "/images/events/jamia-summer-school.webp"
        );
    }

    #[test]
    fn absolute_bases_are_supported() {
        let assets = AssetPaths::new("https://cdn.example.org/fest/");
        assert_eq!(
            assets.resolve("icons/ufuq-logo.webp").unwrap(),
            "https://cdn.example.org/fest/icons/ufuq-logo.webp"
        );
    }

    #[test]
    fn rejects_empty_and_traversal() {
        let assets = AssetPaths::default();
        assert_eq!(
            assets.resolve("/"),
            Err(FestError::InvalidAssetPath("/".into()))
        );
        assert!(assets.resolve("").is_err());
        assert!(assets.resolve("/images/../secrets").is_err());
        assert!(assets.resolve("/images/..hidden.webp").is_ok());
    }
}
