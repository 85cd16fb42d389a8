//! Profile photo processing.
//!
//! The single image operation in the pipeline: the profile photo is
//! center-cropped square and resized (Lanczos3) to each configured
//! display size, encoded as JPEG. Pure Rust via the `image` crate — no
//! system dependencies.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// One generated profile photo size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileVariant {
    /// Square edge in pixels.
    pub size: u32,
    /// Output filename, relative to the output root.
    pub filename: String,
}

/// Center crop box producing the largest square inside `(width, height)`.
///
/// Returns `(x, y, side)`: the top-left offset and the square edge.
pub fn crop_square_box(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Select which variant sizes to generate for a given square edge.
///
/// Sizes larger than the source square are dropped rather than upscaled.
/// If every requested size exceeds the source, the source edge itself is
/// the only variant.
pub fn select_sizes(side: u32, requested: &[u32]) -> Vec<u32> {
    let mut sizes: Vec<u32> = requested.iter().copied().filter(|&s| s <= side).collect();
    if sizes.is_empty() {
        sizes.push(side);
    }
    sizes
}

/// Generate square profile photo variants next to the site output.
///
/// `source` is the original photo; variants land in `out_dir` as
/// `<stem>-<size>.jpg`. Returns the generated variants smallest first,
/// matching `srcset` order.
pub fn profile_variants(
    source: &Path,
    out_dir: &Path,
    sizes: &[u32],
    quality: u32,
) -> Result<Vec<ProfileVariant>, ImagingError> {
    let img = image::open(source)?;
    let (x, y, side) = crop_square_box(img.width(), img.height());
    let square = img.crop_imm(x, y, side, side);

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "profile".to_string());

    let mut selected = select_sizes(side, sizes);
    selected.sort_unstable();

    let mut variants = Vec::with_capacity(selected.len());
    for size in selected {
        let resized = square.resize_exact(size, size, FilterType::Lanczos3);
        let filename = format!("{stem}-{size}.jpg");
        let file = File::create(out_dir.join(&filename))?;
        let mut writer = BufWriter::new(file);
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality.min(100) as u8);
        encoder.encode_image(&resized.to_rgb8())?;
        variants.push(ProfileVariant { size, filename });
    }
    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_test_photo;
    use tempfile::TempDir;

    // =========================================================================
    // Crop box
    // =========================================================================

    #[test]
    fn crop_box_landscape() {
        assert_eq!(crop_square_box(64, 48), (8, 0, 48));
    }

    #[test]
    fn crop_box_portrait() {
        assert_eq!(crop_square_box(48, 64), (0, 8, 48));
    }

    #[test]
    fn crop_box_square_is_identity() {
        assert_eq!(crop_square_box(100, 100), (0, 0, 100));
    }

    // =========================================================================
    // Size selection
    // =========================================================================

    #[test]
    fn select_sizes_drops_oversized() {
        assert_eq!(select_sizes(300, &[256, 512]), vec![256]);
    }

    #[test]
    fn select_sizes_falls_back_to_source_edge() {
        assert_eq!(select_sizes(100, &[256, 512]), vec![100]);
    }

    #[test]
    fn select_sizes_keeps_all_when_they_fit() {
        assert_eq!(select_sizes(1000, &[256, 512]), vec![256, 512]);
    }

    // =========================================================================
    // Variant generation
    // =========================================================================

    #[test]
    fn generates_square_variants() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("profile.jpg");
        write_test_photo(&src, 600, 400);

        let out = tmp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let variants = profile_variants(&src, &out, &[128, 256], 90).unwrap();

        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].filename, "profile-128.jpg");
        assert_eq!(variants[1].filename, "profile-256.jpg");

        for variant in &variants {
            let generated = image::open(out.join(&variant.filename)).unwrap();
            assert_eq!(generated.width(), variant.size);
            assert_eq!(generated.height(), variant.size);
        }
    }

    #[test]
    fn variants_sorted_smallest_first() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("profile.jpg");
        write_test_photo(&src, 600, 600);

        let out = tmp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let variants = profile_variants(&src, &out, &[512, 128], 90).unwrap();
        let sizes: Vec<u32> = variants.iter().map(|v| v.size).collect();
        assert_eq!(sizes, vec![128, 512]);
    }

    #[test]
    fn small_source_produces_single_native_variant() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("profile.jpg");
        write_test_photo(&src, 80, 60);

        let out = tmp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let variants = profile_variants(&src, &out, &[256, 512], 90).unwrap();

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].size, 60);
    }

    #[test]
    fn missing_source_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = profile_variants(&tmp.path().join("nope.jpg"), tmp.path(), &[128], 90);
        assert!(result.is_err());
    }
}
