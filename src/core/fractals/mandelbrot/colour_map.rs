use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::algorithm::{EscapeTime, escape_time};

/// Per-iteration channel step.
pub const COLOUR_CONTRAST: u8 = 20;

const RED_BASE: u8 = 60;
const GREEN_BASE: u8 = 180;

/// Colour for points that never escaped.
pub const INSIDE_COLOUR: Colour = Colour::TRANSPARENT_BLACK;

/// Banded escape-time palette: `R = 60 - 20n`, `G = 180 - 20n`, `B = 20n`.
///
/// All channel arithmetic wraps in 8 bits on `n mod 256`. Each channel is
/// monotonic in `n` only until it first wraps (red at n = 4, green at n = 10,
/// blue at n = 13); past that the palette cycles, which shows up as the
/// repeating colour bands near the set boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EscapeBandColourMap;

impl EscapeBandColourMap {
    #[must_use]
    pub fn colour_for_iteration(iteration: u32) -> Colour {
        let n = (iteration % 256) as u8;
        let step = COLOUR_CONTRAST.wrapping_mul(n);

        Colour::opaque(
            RED_BASE.wrapping_sub(step),
            GREEN_BASE.wrapping_sub(step),
            step,
        )
    }
}

impl ColourMap<EscapeTime> for EscapeBandColourMap {
    fn map(&self, value: EscapeTime) -> Colour {
        match value {
            EscapeTime::Escaped(iteration) => Self::colour_for_iteration(iteration),
            EscapeTime::Bounded => INSIDE_COLOUR,
        }
    }
}

/// The whole per-point pipeline: iterate `c`, then colour the outcome.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: u32) -> Colour {
    EscapeBandColourMap.map(escape_time(c, max_iterations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_iterations_match_formula() {
        assert_eq!(
            EscapeBandColourMap::colour_for_iteration(0),
            Colour::opaque(60, 180, 0)
        );
        assert_eq!(
            EscapeBandColourMap::colour_for_iteration(1),
            Colour::opaque(40, 160, 20)
        );
        assert_eq!(
            EscapeBandColourMap::colour_for_iteration(3),
            Colour::opaque(0, 120, 60)
        );
    }

    #[test]
    fn channels_are_monotonic_until_they_wrap() {
        let colours: Vec<Colour> = (0..=13)
            .map(EscapeBandColourMap::colour_for_iteration)
            .collect();

        for n in 1..=3 {
            assert!(colours[n].r < colours[n - 1].r, "red should fall at n={n}");
        }
        for n in 1..=9 {
            assert!(colours[n].g < colours[n - 1].g, "green should fall at n={n}");
        }
        for n in 1..=12 {
            assert!(colours[n].b > colours[n - 1].b, "blue should rise at n={n}");
        }
    }

    #[test]
    fn channels_wrap_at_documented_iterations() {
        // 60 - 80 wraps to 236
        assert_eq!(EscapeBandColourMap::colour_for_iteration(4).r, 236);
        // 180 - 200 wraps to 236
        assert_eq!(EscapeBandColourMap::colour_for_iteration(10).g, 236);
        // 20 * 13 = 260 wraps to 4
        assert_eq!(EscapeBandColourMap::colour_for_iteration(13).b, 4);
    }

    #[test]
    fn iteration_counts_repeat_every_256() {
        assert_eq!(
            EscapeBandColourMap::colour_for_iteration(300),
            EscapeBandColourMap::colour_for_iteration(44)
        );
    }

    #[test]
    fn escaped_colours_are_opaque() {
        for n in [0, 7, 128, 255, 1_000] {
            assert_eq!(EscapeBandColourMap::colour_for_iteration(n).a, 255);
        }
    }

    #[test]
    fn bounded_points_use_inside_colour() {
        assert_eq!(EscapeBandColourMap.map(EscapeTime::Bounded), INSIDE_COLOUR);
    }

    #[test]
    fn evaluate_origin_is_inside_for_any_budget() {
        for budget in [1, 10, 200, 5_000] {
            assert_eq!(evaluate(Complex::ZERO, budget), INSIDE_COLOUR);
        }
    }

    #[test]
    fn evaluate_far_point_uses_first_band() {
        assert_eq!(evaluate(Complex::new(20.0, 0.0), 200), Colour::opaque(60, 180, 0));
    }
}
