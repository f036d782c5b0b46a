//! Deterministic 3D noise used for spatially coherent pattern selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A scalar noise field over 3D space.
///
/// Implementations must return values in [-1, 1] and be pure functions of
/// their inputs for the lifetime of the field.
pub trait NoiseField {
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<N: NoiseField + ?Sized> NoiseField for &N {
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).noise3(x, y, z)
    }
}

/// Seeded gradient (Perlin) noise.
///
/// The permutation table and a domain offset are drawn once from the seed,
/// so two fields with the same seed agree everywhere. Inputs are scaled by
/// [`GradientNoise::FREQUENCY`] on the x and y axes and the raw value is
/// amplified by [`GradientNoise::GAIN`], so a window of half a unit already
/// spans several lattice cells and reaches both ends of [-1, 1].
#[derive(Debug, Clone)]
pub struct GradientNoise {
    perm: [u8; 512],
    offset: [f64; 3],
}

impl GradientNoise {
    /// Lattice cells per input unit on the x and y axes.
    pub const FREQUENCY: f64 = 12.0;

    /// Amplification applied before clamping to [-1, 1].
    pub const GAIN: f64 = 2.0;

    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        table.shuffle(&mut rng);
        let perm = std::array::from_fn(|i| table[i & 255]);

        // Keeps integer depths and the origin off lattice points
        let offset = std::array::from_fn(|_| rng.gen_range(0.0..256.0));

        Self { perm, offset }
    }

    fn hash(&self, x: usize, y: usize, z: usize) -> u8 {
        let a = self.perm[x] as usize + y;
        let b = self.perm[a] as usize + z;
        self.perm[b]
    }

    /// Unscaled improved Perlin noise; zero on every lattice point.
    fn perlin(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;
        let zi = (zf as i64 & 255) as usize;
        let (x, y, z) = (x - xf, y - yf, z - zf);
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let corner = |dx: usize, dy: usize, dz: usize| {
            let h = self.hash(xi + dx, yi + dy, zi + dz);
            grad(h, x - dx as f64, y - dy as f64, z - dz as f64)
        };

        lerp(
            w,
            lerp(
                v,
                lerp(u, corner(0, 0, 0), corner(1, 0, 0)),
                lerp(u, corner(0, 1, 0), corner(1, 1, 0)),
            ),
            lerp(
                v,
                lerp(u, corner(0, 0, 1), corner(1, 0, 1)),
                lerp(u, corner(0, 1, 1), corner(1, 1, 1)),
            ),
        )
    }
}

impl Default for GradientNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseField for GradientNoise {
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let [ox, oy, oz] = self.offset;
        let raw = self.perlin(
            x * Self::FREQUENCY + ox,
            y * Self::FREQUENCY + oy,
            z + oz,
        );
        (raw * Self::GAIN).clamp(-1.0, 1.0)
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of the 12 cube-edge gradients.
fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
