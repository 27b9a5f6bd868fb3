//! Thumbnail generation

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::intake::is_image_path;

/// Default thumbnail bounds
const DEFAULT_MAX_WIDTH: u32 = 200;
const DEFAULT_MAX_HEIGHT: u32 = 150;

/// Fit `(width, height)` within `(max_width, max_height)` preserving the
/// aspect ratio. Images already inside the bounds are left unscaled.
pub fn scaled_dimensions(size: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (width, height) = size;
    let (max_width, max_height) = bounds;
    if width <= max_width && height <= max_height {
        return size;
    }

    let aspect = width as f64 / height as f64;
    if aspect > max_width as f64 / max_height as f64 {
        let new_width = max_width;
        let new_height = ((new_width as f64 / aspect).round() as u32).max(1);
        (new_width, new_height)
    } else {
        let new_height = max_height;
        let new_width = ((new_height as f64 * aspect).round() as u32).max(1);
        (new_width, new_height)
    }
}

/// Result of a thumbnail batch
#[derive(Debug, Clone, Default)]
pub struct ThumbnailResult {
    /// Thumbnails written
    pub generated: Vec<PathBuf>,
    /// Inputs skipped (not an image by extension, or missing on disk)
    pub skipped: usize,
    /// Per-file decode/encode failures (source path, message)
    pub errors: Vec<(PathBuf, String)>,
}

/// Generator of bounded thumbnails for image files
pub struct Thumbnailer {
    output_dir: PathBuf,
    max_width: u32,
    max_height: u32,
}

impl Thumbnailer {
    /// Create a thumbnailer writing into `output_dir`
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }

    /// Set the thumbnail bounds
    pub fn with_max_dimensions(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    /// Generate a `<stem>_thumb.png` per input image.
    ///
    /// Non-image and missing paths are counted as skipped; a failing decode
    /// or encode is recorded per file and does not abort the batch.
    pub fn generate(&self, paths: &[PathBuf]) -> Result<ThumbnailResult> {
        fs::create_dir_all(&self.output_dir)?;

        let mut result = ThumbnailResult::default();
        for path in paths {
            let name = path.to_string_lossy();
            if !is_image_path(&name) || !path.exists() {
                tracing::debug!("skipping {}", path.display());
                result.skipped += 1;
                continue;
            }

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            let dest = self.output_dir.join(format!("{}_thumb.png", stem));

            match self.generate_one(path, &dest) {
                Ok(()) => result.generated.push(dest),
                Err(e) => {
                    tracing::warn!("failed to thumbnail {}: {}", path.display(), e);
                    result.errors.push((path.clone(), e.to_string()));
                }
            }
        }
        Ok(result)
    }

    fn generate_one(&self, source: &Path, dest: &Path) -> Result<()> {
        let img = image::open(source)?;
        let (width, height) = scaled_dimensions(
            (img.width(), img.height()),
            (self.max_width, self.max_height),
        );
        let thumb = img.thumbnail_exact(width, height);
        thumb.save(dest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_inside_bounds_are_unscaled() {
        assert_eq!(scaled_dimensions((100, 80), (200, 150)), (100, 80));
    }

    #[test]
    fn wide_images_clamp_to_max_width() {
        assert_eq!(scaled_dimensions((800, 400), (200, 150)), (200, 100));
    }

    #[test]
    fn tall_images_clamp_to_max_height() {
        assert_eq!(scaled_dimensions((400, 800), (200, 150)), (75, 150));
    }

    #[test]
    fn degenerate_sizes_never_reach_zero() {
        assert_eq!(scaled_dimensions((10000, 1), (200, 150)), (200, 1));
    }

    #[test]
    fn batch_skips_non_images_and_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let thumbnailer = Thumbnailer::new(dir.path().join("thumbs"));

        let inputs = vec![
            PathBuf::from("notes.txt"),
            dir.path().join("missing.png"),
        ];
        let result = thumbnailer.generate(&inputs).expect("run batch");
        assert_eq!(result.skipped, 2);
        assert!(result.generated.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn batch_generates_thumbnails_for_real_images() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("big.png");
        // 400x300 solid image, well above the 200x150 default bounds
        let img = image::RgbImage::from_pixel(400, 300, image::Rgb([10, 120, 200]));
        img.save(&source).expect("write source image");

        let out = dir.path().join("thumbs");
        let result = Thumbnailer::new(&out)
            .generate(&[source])
            .expect("run batch");

        assert_eq!(result.generated, vec![out.join("big_thumb.png")]);
        assert_eq!(result.skipped, 0);

        let thumb = image::open(&result.generated[0]).expect("open thumbnail");
        assert!(thumb.width() <= 200 && thumb.height() <= 150);
    }

    #[test]
    fn corrupt_image_is_recorded_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"not a png").expect("write corrupt file");

        let result = Thumbnailer::new(dir.path().join("thumbs"))
            .generate(&[source.clone()])
            .expect("run batch");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, source);
        assert!(result.generated.is_empty());
    }
}
