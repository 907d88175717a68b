//! Five-star rating glyphs for a 0 to 10 score.

use std::fmt;

/// Number of glyphs in every rating.
pub const STAR_COUNT: usize = 5;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// A rating converted to stars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    rating: f64,
    filled: usize,
}

impl StarRating {
    /// Converts a 0 to 10 score into filled stars.
    ///
    /// Filled stars are `round(rating / 2)` with halves rounding up, clamped
    /// to `0..=5` so out-of-range input still yields five glyphs.
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        #[expect(
            clippy::float_arithmetic,
            reason = "halving a fractional score is the whole conversion"
        )]
        let halved = rating / 2.0;
        let rounded = halved.round().clamp(0.0, 5.0);
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is rounded and clamped to 0..=5; NaN casts to 0"
        )]
        let filled = rounded as usize;
        Self { rating, filled }
    }

    /// Number of filled glyphs.
    #[must_use]
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// The glyph row, filled stars first.
    #[must_use]
    pub fn glyphs(&self) -> String {
        (0..STAR_COUNT)
            .map(|index| {
                if index < self.filled {
                    FILLED_STAR
                } else {
                    EMPTY_STAR
                }
            })
            .collect()
    }

    /// Numeric label, e.g. `7.0/10`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.1}/10", self.rating)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.glyphs(), self.label())
    }
}

/// Renders a rating as glyphs followed by its label.
///
/// # Examples
///
/// ```
/// use popcorn::tui::components::render_stars;
///
/// assert_eq!(render_stars(7.0), "★★★★☆ (7.0/10)");
/// ```
#[must_use]
pub fn render_stars(rating: f64) -> String {
    StarRating::from_rating(rating).to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{STAR_COUNT, StarRating, render_stars};

    #[rstest]
    #[case::zero(0.0, 0)]
    #[case::just_below_half_star(0.9, 0)]
    #[case::half_rounds_up(5.0, 3)]
    #[case::typical(7.3, 4)]
    #[case::high(8.9, 4)]
    #[case::rounds_to_five(9.0, 5)]
    #[case::perfect(10.0, 5)]
    #[case::above_range_is_clamped(14.0, 5)]
    #[case::negative_is_clamped(-3.0, 0)]
    fn filled_star_count(#[case] rating: f64, #[case] expected: usize) {
        assert_eq!(StarRating::from_rating(rating).filled(), expected);
    }

    #[rstest]
    #[case::integer(7.0, "7.0/10")]
    #[case::one_decimal(8.4, "8.4/10")]
    #[case::rounded(6.66, "6.7/10")]
    #[case::zero(0.0, "0.0/10")]
    fn label_has_one_decimal(#[case] rating: f64, #[case] expected: &str) {
        assert_eq!(StarRating::from_rating(rating).label(), expected);
    }

    #[test]
    fn always_five_glyphs() {
        for rating in [0.0, 2.5, 5.0, 10.0, 42.0, f64::NAN] {
            assert_eq!(
                StarRating::from_rating(rating).glyphs().chars().count(),
                STAR_COUNT
            );
        }
    }

    #[test]
    fn render_includes_glyphs_and_label() {
        assert_eq!(render_stars(5.0), "★★★☆☆ (5.0/10)");
        assert_eq!(render_stars(0.0), "☆☆☆☆☆ (0.0/10)");
    }
}
