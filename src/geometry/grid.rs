//! Base grids the subdivision engine starts from.

use crate::error::{Result, TessError};

use super::{Point, Polygon};

/// Build a grid of near-equilateral triangles covering `width` x `height`.
///
/// `density` is the number of triangle columns across the width. Rows
/// alternate a half-cell offset so neighbouring rows share vertices. The
/// grid overflows the extent by up to one cell on each side so the whole
/// area is covered.
pub fn triangle_grid(width: f64, height: f64, density: u32) -> Result<Vec<Polygon>> {
    if density == 0 {
        return Err(TessError::Config {
            message: "Grid density must be at least 1".to_string(),
            help: Some("Set grid_density to a positive integer".to_string()),
        });
    }
    if !(width > 0.0 && height > 0.0) {
        return Err(TessError::Config {
            message: format!("Grid extent must be positive, got {}x{}", width, height),
            help: None,
        });
    }

    let cell = width / density as f64;
    let row_height = cell * 3f64.sqrt() / 2.0;
    let rows = (height / row_height).ceil() as u32;

    let mut polys = Vec::with_capacity((rows as usize) * (density as usize + 2) * 2);

    for row in 0..rows {
        let y0 = row as f64 * row_height;
        let y1 = y0 + row_height;
        let offset = if row % 2 == 0 { 0.0 } else { -cell / 2.0 };

        for col in -1..=density as i64 {
            let x = offset + col as f64 * cell;

            // Apex up
            polys.push(Polygon::triangle(
                Point::new(x, y1),
                Point::new(x + cell / 2.0, y0),
                Point::new(x + cell, y1),
            ));

            // Apex down
            polys.push(Polygon::triangle(
                Point::new(x + cell / 2.0, y0),
                Point::new(x + cell * 1.5, y0),
                Point::new(x + cell, y1),
            ));
        }
    }

    Ok(polys)
}
