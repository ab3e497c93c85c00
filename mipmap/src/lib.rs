use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::path::Path;

pub mod android;

/// Centered square region of an image, in pixel coordinates.
///
/// `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    /// Computes the largest square centered on a `width` x `height` image.
    ///
    /// Odd margins are floored, so the extra pixel is kept on the right or
    /// bottom edge and the side is always `min(width, height)`.
    pub fn centered_square(width: u32, height: u32) -> Self {
        let side = width.min(height);
        let left = (width - side) / 2;
        let top = (height - side) / 2;
        Self {
            left,
            top,
            right: left + side,
            bottom: top + side,
        }
    }

    pub fn side(self) -> u32 {
        self.right - self.left
    }

    pub fn is_full(self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl std::fmt::Display for CropBox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// A square source image that can be written out at any icon size.
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open icon {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("failed to read icon {}", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode icon {}", path.display()))?;
        tracing::debug!(
            "decoded {} {}x{} {:?}",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );
        Self::from_image(img)
    }

    pub fn from_image(img: DynamicImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        anyhow::ensure!(width > 0 && height > 0, "icon has no pixels");
        let crop = CropBox::centered_square(width, height);
        if crop.is_full(width, height) {
            return Ok(Self { img });
        }
        tracing::debug!("cropping {}x{} to {}", width, height, crop);
        let img = img.crop_imm(crop.left, crop.top, crop.side(), crop.side());
        Ok(Self { img })
    }

    pub fn side(&self) -> u32 {
        self.img.width()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.img
    }

    pub fn resize(&self, size: u32) -> DynamicImage {
        self.img.resize_exact(size, size, FilterType::Lanczos3)
    }

    pub fn write<P: AsRef<Path>>(&self, path: P, size: u32) -> Result<()> {
        save_png(&self.resize(size), path.as_ref())
    }
}

pub(crate) fn save_png(img: &DynamicImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}
