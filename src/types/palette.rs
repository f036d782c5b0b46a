//! Ordered palettes used to quantize sampled colours.

use std::collections::HashMap;

use image::RgbaImage;

use crate::error::Result;

use super::Colour;

/// A named, ordered collection of representative colours.
///
/// Order is significant: when two entries are equally close to a colour,
/// the earlier one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette name
    pub name: String,

    colours: Vec<Colour>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colours: Vec::new(),
        }
    }

    /// Create a palette from an ordered list of colours.
    pub fn from_colours(name: impl Into<String>, colours: Vec<Colour>) -> Self {
        Self {
            name: name.into(),
            colours,
        }
    }

    /// Parse a palette from hex strings, keeping their order.
    pub fn from_hex_list<S: AsRef<str>>(name: impl Into<String>, values: &[S]) -> Result<Self> {
        let colours = values
            .iter()
            .map(|v| Colour::from_hex(v.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_colours(name, colours))
    }

    /// Build a palette from the most frequent opaque colours of an image.
    ///
    /// Colours are ordered by descending frequency; ties are ordered by
    /// channel value so the result is stable across runs.
    pub fn extract(name: impl Into<String>, image: &RgbaImage, max: Option<usize>) -> Self {
        let mut counts: HashMap<[u8; 4], usize> = HashMap::new();
        for pixel in image.pixels() {
            let rgba = pixel.0;
            if rgba[3] == 0 {
                continue;
            }
            *counts.entry([rgba[0], rgba[1], rgba[2], 255]).or_insert(0) += 1;
        }

        let mut ranked: Vec<([u8; 4], usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        if let Some(max) = max {
            ranked.truncate(max);
        }

        let colours = ranked
            .into_iter()
            .map(|(rgba, _)| Colour::rgb(rgba[0], rgba[1], rgba[2]))
            .collect();
        Self::from_colours(name, colours)
    }

    /// Get a colour by position.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// All colours in palette order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Find the entry closest to `colour` by squared RGB distance.
    ///
    /// Returns `None` for an empty palette. On an exact tie the entry that
    /// appears first is returned.
    pub fn nearest(&self, colour: Colour) -> Option<Colour> {
        let mut best: Option<(Colour, u32)> = None;

        for &candidate in &self.colours {
            let dist = colour.distance_squared(candidate);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((candidate, dist)),
            }
        }

        best.map(|(c, _)| c)
    }
}
