//! Decoding, resampling and encoding of icon images.
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    imageops::{self, FilterType},
    ColorType, DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbaImage,
};
use std::{
    io::{BufWriter, Write},
    path::Path,
};

/// Resampling filter used for every resize.
pub const FILTER: FilterType = FilterType::Lanczos3;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not open image")]
    Open(#[source] std::io::Error),
    #[error("could not decode image")]
    Decode(#[source] image::ImageError),
}

/// A source image converted to 8-bit RGBA.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub image: RgbaImage,
    /// colour type of the decoded file
    pub original_color: ColorType,
}

impl SourceImage {
    pub fn load(path: &Path) -> Result<SourceImage, LoadError> {
        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(LoadError::Open)?
            .decode()
            .map_err(LoadError::Decode)?;
        Ok(SourceImage::from_dynamic(decoded))
    }

    pub fn from_dynamic(decoded: DynamicImage) -> SourceImage {
        let original_color = decoded.color();
        SourceImage {
            image: decoded.into_rgba8(),
            original_color,
        }
    }

    /// Whether the source had to be converted to obtain an alpha channel.
    pub fn was_converted(&self) -> bool {
        self.original_color != ColorType::Rgba8
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn resized(&self, size: u32) -> RgbaImage {
        square(&self.image, size)
    }
}

/// Scales `image` to `size`×`size`, ignoring the aspect ratio.
pub fn square(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        image.clone()
    } else {
        imageops::resize(image, size, size, FILTER)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Compression {
    Default,
    Best,
}

impl From<Compression> for CompressionType {
    fn from(compression: Compression) -> Self {
        match compression {
            Compression::Default => CompressionType::Default,
            Compression::Best => CompressionType::Best,
        }
    }
}

/// Writes `image` as an RGBA PNG, replacing `path` atomically.
pub fn write_png(image: &RgbaImage, path: &Path, compression: Compression) -> eyre::Result<()> {
    write_atomically(path, |writer| {
        let encoder =
            PngEncoder::new_with_quality(writer, compression.into(), PngFilterType::Adaptive);
        encoder.write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(())
    })
}

/// Writes an ICO container with one PNG-compressed frame per size. Every
/// frame is resampled from `base`.
pub fn write_ico(base: &RgbaImage, sizes: &[u32], path: &Path) -> eyre::Result<()> {
    let frames = sizes
        .iter()
        .map(|&size| {
            let frame = square(base, size);
            tracing::debug!(size, "encoding ico frame");
            IcoFrame::as_png(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
        })
        .collect::<Result<Vec<_>, _>>()?;
    write_atomically(path, |writer| {
        IcoEncoder::new(writer).encode_images(&frames)?;
        Ok(())
    })
}

/// Colour type of an image file on disk, decoded from scratch.
pub fn color_on_disk(path: &Path) -> eyre::Result<ColorType> {
    Ok(ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .color())
}

fn write_atomically(
    path: &Path,
    encode: impl FnOnce(&mut BufWriter<&mut std::fs::File>) -> eyre::Result<()>,
) -> eyre::Result<()> {
    let dir = path.parent().ok_or_else(|| {
        eyre::eyre!(
            "could not determine parent directory for {}",
            path.display()
        )
    })?;
    let mut tmp = temp_file_builder().tempfile_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        encode(&mut writer)?;
        writer.flush()?;
    }
    tmp.persist(path)?;
    Ok(())
}

// 0o666 before the umask, same as std::fs::write
#[cfg(unix)]
fn temp_file_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}
