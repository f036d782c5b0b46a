//! Colour sources the pipeline samples from.

mod raster;

pub use raster::ImageSampler;

use crate::geometry::Point;
use crate::types::{Colour, Palette};

/// A read-only colour source over continuous 2D coordinates.
pub trait Sampler {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Colour of the pixel under `point`.
    fn colour_at(&self, point: Point) -> Colour;

    /// Mean colour of the pixels within `radius` of `center`.
    fn average_colour_circle(&self, center: Point, radius: u32) -> Colour;

    /// Optional palette sampled colours are snapped to.
    fn palette(&self) -> Option<&Palette> {
        None
    }

    /// Whether the sampler has anything to sample.
    fn is_ready(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn colour_at(&self, point: Point) -> Colour {
        (**self).colour_at(point)
    }

    fn average_colour_circle(&self, center: Point, radius: u32) -> Colour {
        (**self).average_colour_circle(center, radius)
    }

    fn palette(&self) -> Option<&Palette> {
        (**self).palette()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}
