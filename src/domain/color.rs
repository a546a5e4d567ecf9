//! Per-cell neon colors.
//!
//! A [`ColorMap`] is drawn once when a grid is seeded and never changes
//! afterwards. Liveness only decides whether a cell's color is shown.

use rand::Rng;

/// Saturation used for every assigned color
pub const NEON_SATURATION: f32 = 1.0;
/// Lightness used for every assigned color
pub const NEON_LIGHTNESS: f32 = 0.6;

/// Hue in degrees [0, 360), saturation and lightness in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsl {
    /// Fully saturated color at the neon lightness
    pub const fn neon(h: f32) -> Self {
        Self {
            h,
            s: NEON_SATURATION,
            l: NEON_LIGHTNESS,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = self.l - c / 2.0;

        let (r, g, b) = match h as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

/// One stable color per grid coordinate
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMap {
    size: usize,
    colors: Vec<Hsl>,
}

impl ColorMap {
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Color at (row, col), or `None` outside the map
    pub fn get(&self, row: usize, col: usize) -> Option<Hsl> {
        (row < self.size && col < self.size).then(|| self.colors[row * self.size + col])
    }
}

/// Draw a uniformly random hue for each of the N×N coordinates.
/// Sizes below 1 are raised to 1, matching `GridBuffer::new`.
pub fn assign_colors<R: Rng + ?Sized>(size: usize, rng: &mut R) -> ColorMap {
    let size = size.max(1);
    let colors = (0..size * size)
        .map(|_| Hsl::neon(rng.random_range(0.0..360.0)))
        .collect();
    ColorMap { size, colors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn test_primary_hues() {
        let pure = |h| Hsl { h, s: 1.0, l: 0.5 }.to_rgb();
        assert_eq!(pure(0.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(pure(120.0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(pure(240.0), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_neon_red_is_lightened() {
        assert_eq!(Hsl::neon(0.0).to_rgb(), Rgb { r: 255, g: 51, b: 51 });
    }

    #[test]
    fn test_assign_covers_grid_with_neon_colors() {
        let map = assign_colors(30, &mut SmallRng::seed_from_u64(3));
        assert_eq!(map.size(), 30);
        for row in 0..30 {
            for col in 0..30 {
                let color = map.get(row, col).unwrap();
                assert!((0.0..360.0).contains(&color.h));
                assert_eq!(color.s, NEON_SATURATION);
                assert_eq!(color.l, NEON_LIGHTNESS);
            }
        }
        assert_eq!(map.get(30, 0), None);
    }

    #[test]
    fn test_seeded_assignment_is_reproducible() {
        let a = assign_colors(10, &mut SmallRng::seed_from_u64(9));
        let b = assign_colors(10, &mut SmallRng::seed_from_u64(9));
        let c = assign_colors(10, &mut SmallRng::seed_from_u64(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
