use std::path::Path;

/// Raster formats the tools know how to pick out of a directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    PNG,
    JPEG,
    GIF,
    BMP,
}

impl ImageFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::PNG => &["png"],
            Self::JPEG => &["jpg", "jpeg"],
            Self::GIF => &["gif"],
            Self::BMP => &["bmp"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Whether files of this format can store an alpha channel
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, Self::JPEG)
    }

    /// Format implied by the extension of `path`, if any
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        [Self::PNG, Self::JPEG, Self::GIF, Self::BMP]
            .into_iter()
            .find(|f| f.matches_extension(ext))
    }
}

/// Whether `path` carries an extension belonging to one of `formats`.
pub fn has_extension_in(path: &Path, formats: &[ImageFormat]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => formats.iter().any(|f| f.matches_extension(ext)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        assert!(has_extension_in(Path::new("a/Icon.PNG"), &[ImageFormat::PNG]));
        assert!(has_extension_in(Path::new("photo.JpEg"), &[ImageFormat::JPEG]));
        assert!(!has_extension_in(Path::new("notes.txt"), &[ImageFormat::PNG]));
        assert!(!has_extension_in(Path::new("png"), &[ImageFormat::PNG]));
    }

    #[test]
    fn only_jpeg_lacks_alpha() {
        assert_eq!(ImageFormat::from_path(Path::new("x/photo.JPG")), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_path(Path::new("notes.txt")), None);
        assert!(!ImageFormat::JPEG.supports_alpha());
        assert!(ImageFormat::PNG.supports_alpha());
        assert!(ImageFormat::GIF.supports_alpha());
        assert!(ImageFormat::BMP.supports_alpha());
    }
}
