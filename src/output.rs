use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{FixedOffset, Utc};
use image::codecs::jpeg::JpegEncoder;

use crate::{
    canvas::Canvas,
    error::{CovergenError, CovergenResult},
};

/// Platform upload ceiling for a single cover image.
pub const MAX_OUTPUT_BYTES: u64 = 5 * 1024 * 1024;

const JPEG_QUALITY: u8 = 90;

/// `workspace/<timestamp>/cover.png`, stamped on a UTC+8 wall clock.
pub fn default_output_path() -> PathBuf {
    let tz = FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid offset");
    let stamp = Utc::now().with_timezone(&tz).format("%Y%m%d_%H%M%S");
    PathBuf::from("workspace")
        .join(stamp.to_string())
        .join("cover.png")
}

pub fn ensure_parent_dir(path: &Path) -> CovergenResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode `canvas` to `path` as PNG. If the encoded file exceeds
/// [`MAX_OUTPUT_BYTES`], re-encode as JPEG quality 90 beside it, remove the
/// PNG, and return the JPEG path instead.
pub fn save_with_size_limit(canvas: &Canvas, path: &Path) -> CovergenResult<PathBuf> {
    ensure_parent_dir(path)?;
    canvas
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| CovergenError::encode(format!("write png '{}': {e}", path.display())))?;

    let bytes = std::fs::metadata(path)
        .with_context(|| format!("stat '{}'", path.display()))?
        .len();
    if bytes <= MAX_OUTPUT_BYTES {
        return Ok(path.to_path_buf());
    }

    let jpeg_path = path.with_extension("jpg");
    tracing::warn!(
        bytes,
        limit = MAX_OUTPUT_BYTES,
        jpeg = %jpeg_path.display(),
        "png exceeds the size ceiling, re-encoding as jpeg"
    );

    let file = File::create(&jpeg_path)
        .with_context(|| format!("create '{}'", jpeg_path.display()))?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
    encoder
        .encode_image(canvas)
        .map_err(|e| CovergenError::encode(format!("write jpeg '{}': {e}", jpeg_path.display())))?;

    std::fs::remove_file(path)
        .with_context(|| format!("remove oversized png '{}'", path.display()))?;

    Ok(jpeg_path)
}
