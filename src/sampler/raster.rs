//! Sampler backed by an in-memory RGBA image.

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{Result, TessError};
use crate::geometry::Point;
use crate::types::{Colour, Palette};

use super::Sampler;

/// Samples colours from an RGBA image, optionally carrying a palette.
///
/// Coordinates outside the image clamp to the nearest edge pixel. Alpha is
/// ignored; sampled colours are always opaque.
#[derive(Debug, Clone)]
pub struct ImageSampler {
    image: RgbaImage,
    palette: Option<Palette>,
}

impl ImageSampler {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            palette: None,
        }
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self::new(image.to_rgba8())
    }

    /// Load an image file; decoding is handled by the `image` crate.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|e| TessError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?;
        Ok(Self::from_dynamic(image))
    }

    /// Attach a palette; an empty palette is treated as no palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = (!palette.is_empty()).then_some(palette);
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn pixel(&self, x: i64, y: i64) -> Colour {
        let px = x.clamp(0, self.image.width() as i64 - 1) as u32;
        let py = y.clamp(0, self.image.height() as i64 - 1) as u32;
        let [r, g, b, _] = self.image.get_pixel(px, py).0;
        Colour::rgb(r, g, b)
    }
}

impl Sampler for ImageSampler {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn colour_at(&self, point: Point) -> Colour {
        if !self.is_ready() {
            return Colour::BLACK;
        }
        self.pixel(point.x.floor() as i64, point.y.floor() as i64)
    }

    fn average_colour_circle(&self, center: Point, radius: u32) -> Colour {
        if !self.is_ready() {
            return Colour::BLACK;
        }

        let cx = center.x.floor() as i64;
        let cy = center.y.floor() as i64;
        let r = radius as i64;
        let r2 = r.saturating_mul(r);
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);

        let mut sum = [0u64; 3];
        let mut count = 0u64;

        for y in cy.saturating_sub(r).max(0)..=cy.saturating_add(r).min(h - 1) {
            for x in cx.saturating_sub(r).max(0)..=cx.saturating_add(r).min(w - 1) {
                let (dx, dy) = (x.saturating_sub(cx), y.saturating_sub(cy));
                if dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) > r2 {
                    continue;
                }
                let [pr, pg, pb, _] = self.image.get_pixel(x as u32, y as u32).0;
                sum[0] += pr as u64;
                sum[1] += pg as u64;
                sum[2] += pb as u64;
                count += 1;
            }
        }

        // Circle entirely off the image
        if count == 0 {
            return self.pixel(cx, cy);
        }

        let avg = |s: u64| ((s + count / 2) / count) as u8;
        Colour::rgb(avg(sum[0]), avg(sum[1]), avg(sum[2]))
    }

    fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }
}
