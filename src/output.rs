//! PNG output and file path generation

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image encoding error
    Image(image::ImageError),
    /// Zip archive error
    Archive(zip::result::ZipError),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
            OutputError::Archive(e) => write!(f, "Archive error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
            OutputError::Archive(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<zip::result::ZipError> for OutputError {
    fn from(e: zip::result::ZipError) -> Self {
        OutputError::Archive(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Save an RGBA image to a PNG file.
///
/// Parent directories are created when missing.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, encode_png(image)?)?;
    Ok(())
}

/// Generate the output path for a totem.
///
/// | Scenario | Output |
/// |----------|--------|
/// | Input `steve.png`, no `-o` | `steve_totem.png` |
/// | Player `Notch`, no `-o` | `Notch_totem.png` |
/// | With `-o out.png` | `out.png` |
/// | With `-o dir/` | `dir/{stem}_totem.png` |
pub fn generate_output_path(stem: &str, input_dir: Option<&Path>, output_arg: Option<&Path>) -> PathBuf {
    let file_name = format!("{}_totem.png", stem);
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(file_name)
            } else {
                output.to_path_buf()
            }
        }
        None => match input_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
            _ => PathBuf::from(file_name),
        },
    }
}

/// Path for an enlarged export next to `path`: `totem.png` becomes `totem_x8.png`.
pub fn scaled_output_path(path: &Path, factor: u32) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("totem");
    path.with_file_name(format!("{}_x{}.png", stem, factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_generate_output_path_default() {
        let path = generate_output_path("steve", Some(Path::new("")), None);
        assert_eq!(path, PathBuf::from("steve_totem.png"));
    }

    #[test]
    fn test_generate_output_path_next_to_input() {
        let path = generate_output_path("steve", Some(Path::new("skins")), None);
        assert_eq!(path, PathBuf::from("skins/steve_totem.png"));
    }

    #[test]
    fn test_generate_output_path_player_name() {
        let path = generate_output_path("Notch", None, None);
        assert_eq!(path, PathBuf::from("Notch_totem.png"));
    }

    #[test]
    fn test_generate_output_path_explicit_file() {
        let path = generate_output_path("steve", None, Some(Path::new("build/out.png")));
        assert_eq!(path, PathBuf::from("build/out.png"));
    }

    #[test]
    fn test_generate_output_path_directory() {
        let path = generate_output_path("steve", None, Some(Path::new("outdir/")));
        assert_eq!(path, PathBuf::from("outdir/steve_totem.png"));
    }

    #[test]
    fn test_scaled_output_path() {
        assert_eq!(
            scaled_output_path(Path::new("build/steve_totem.png"), 8),
            PathBuf::from("build/steve_totem_x8.png")
        );
    }

    #[test]
    fn test_encode_png_roundtrip() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([0, 0, 0, 0]));

        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dirs/test.png");

        let image = RgbaImage::new(1, 1);
        let result = save_png(&image, &path);

        assert!(result.is_ok());
        assert!(path.exists());
    }
}
