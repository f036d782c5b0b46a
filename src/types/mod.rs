//! Core colour types for tessera.
//!
//! - `Colour` - RGBA colour values with hex encoding and luminosity
//! - `Palette` - Ordered colour collections used for quantization

mod colour;
mod palette;

pub use colour::Colour;
pub use self::palette::Palette;
