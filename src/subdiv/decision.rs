//! Depth decision functions: how deep each polygon may recurse.

use serde::{Deserialize, Serialize};

use crate::geometry::Polygon;
use crate::sampler::Sampler;

/// Maps a polygon to a recursion intensity in [0, 1].
///
/// The engine splits a polygon at depth `d` while `d < intensity * max_depth`,
/// so 0 keeps it whole and 1 refines it to the maximum depth.
pub trait DepthDecision {
    fn intensity(&self, polygon: &Polygon) -> f64;
}

impl<F> DepthDecision for F
where
    F: Fn(&Polygon) -> f64,
{
    fn intensity(&self, polygon: &Polygon) -> f64 {
        self(polygon)
    }
}

/// The same intensity for every polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDecision(pub f64);

impl DepthDecision for ConstantDecision {
    fn intensity(&self, _polygon: &Polygon) -> f64 {
        self.0
    }
}

/// Intensity driven by the image brightness under the polygon's centroid.
///
/// Bright regions refine more unless `invert` is set.
#[derive(Debug, Clone, Copy)]
pub struct LuminosityDecision<S> {
    sampler: S,
    invert: bool,
}

impl<S: Sampler> LuminosityDecision<S> {
    pub fn new(sampler: S, invert: bool) -> Self {
        Self { sampler, invert }
    }
}

impl<S: Sampler> DepthDecision for LuminosityDecision<S> {
    fn intensity(&self, polygon: &Polygon) -> f64 {
        let colour = self.sampler.colour_at(polygon.centroid());
        luminosity_response(colour.luminosity(), self.invert)
    }
}

/// Response curve `log10(lum * 9 + 1)`, or its complement when inverted.
///
/// Maps [0, 1] onto [0, 1] with more sensitivity near the dark end.
pub fn luminosity_response(luminosity: f64, invert: bool) -> f64 {
    let value = (luminosity.clamp(0.0, 1.0) * 9.0 + 1.0).log10().clamp(0.0, 1.0);
    if invert {
        1.0 - value
    } else {
        value
    }
}

/// Decision strategy named in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionKind {
    #[default]
    Luminosity,
    Constant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::sampler::ImageSampler;
    use image::{ImageBuffer, Rgba};

    fn tri() -> Polygon {
        Polygon::triangle(Point::new(1.0, 1.0), Point::new(5.0, 1.0), Point::new(1.0, 5.0))
    }

    #[test]
    fn test_response_endpoints() {
        assert_eq!(luminosity_response(0.0, false), 0.0);
        assert!((luminosity_response(1.0, false) - 1.0).abs() < 1e-12);
        assert!((luminosity_response(0.0, true) - 1.0).abs() < 1e-12);
        assert!(luminosity_response(1.0, true).abs() < 1e-12);
    }

    #[test]
    fn test_response_monotonic() {
        let mut last_plain = f64::MIN;
        let mut last_inverted = f64::MAX;
        for i in 0..=100 {
            let lum = i as f64 / 100.0;
            let plain = luminosity_response(lum, false);
            let inverted = luminosity_response(lum, true);

            assert!(plain >= last_plain);
            assert!(inverted <= last_inverted);
            assert!((0.0..=1.0).contains(&plain));
            assert!((0.0..=1.0).contains(&inverted));

            last_plain = plain;
            last_inverted = inverted;
        }
    }

    #[test]
    fn test_response_favours_dark_end() {
        // The curve is concave: a step near black moves it further than near white
        let dark_step = luminosity_response(0.1, false) - luminosity_response(0.0, false);
        let bright_step = luminosity_response(1.0, false) - luminosity_response(0.9, false);
        assert!(dark_step > bright_step);
    }

    #[test]
    fn test_luminosity_decision_samples_centroid() {
        let white = ImageSampler::new(ImageBuffer::from_pixel(8, 8, Rgba([255, 255, 255, 255])));
        let black = ImageSampler::new(ImageBuffer::from_pixel(8, 8, Rgba([0, 0, 0, 255])));

        assert!((LuminosityDecision::new(&white, false).intensity(&tri()) - 1.0).abs() < 1e-6);
        assert_eq!(LuminosityDecision::new(&black, false).intensity(&tri()), 0.0);
        assert!((LuminosityDecision::new(&black, true).intensity(&tri()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_and_closure() {
        assert_eq!(ConstantDecision(0.5).intensity(&tri()), 0.5);
        let by_area = |p: &Polygon| (p.area() / 100.0).min(1.0);
        assert_eq!(by_area.intensity(&tri()), 0.08);
    }
}
