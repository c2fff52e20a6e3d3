//! Category color definitions

use plotters::style::RGBColor;

pub const HOME: RGBColor = RGBColor(0x1f, 0x78, 0xb4); // Blue
pub const WORK: RGBColor = RGBColor(0x33, 0xa0, 0x2c); // Green
pub const RECREATION: RGBColor = RGBColor(0xe3, 0x1a, 0x1c); // Red

/// Fallback for categories not in the table
pub const FALLBACK: RGBColor = RGBColor(0x66, 0x66, 0x66); // Gray

/// Known category colors
pub const CATEGORY_COLORS: [(&str, RGBColor); 3] =
    [("Home", HOME), ("Work", WORK), ("Recreation", RECREATION)];

/// Color for a category, gray when unknown.
pub fn category_color(category: &str) -> RGBColor {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map_to_their_colors() {
        assert_eq!(category_color("Home"), RGBColor(0x1f, 0x78, 0xb4));
        assert_eq!(category_color("Work"), RGBColor(0x33, 0xa0, 0x2c));
        assert_eq!(category_color("Recreation"), RGBColor(0xe3, 0x1a, 0x1c));
    }

    #[test]
    fn unknown_category_is_gray() {
        assert_eq!(category_color("Transport"), RGBColor(0x66, 0x66, 0x66));
        // Lookup is case sensitive
        assert_eq!(category_color("home"), FALLBACK);
        assert_eq!(category_color(""), FALLBACK);
    }
}
