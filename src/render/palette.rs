//! Categorical color palette for dataset series
//!
//! Colors repeat after exhausting the list, so any number of datasets gets a
//! stable color by index. The list matches the matplotlib default cycle the
//! benchmark charts have historically used.

use plotters::style::RGBColor;

/// Default categorical palette (matplotlib "tab10" order)
const CATEGORICAL: &[&str] = &[
    "#1F77B4", // blue
    "#FF7F0E", // orange
    "#2CA02C", // green
    "#D62728", // red
    "#9467BD", // purple
    "#8C564B", // brown
];

/// Gray fallback for unparseable palette entries
const FALLBACK: [u8; 3] = [128, 128, 128];

/// Get a categorical color by index (wraps around)
pub fn categorical_color(index: usize) -> RGBColor {
    let hex = CATEGORICAL[index % CATEGORICAL.len()];
    let [r, g, b] = parse_hex_color(hex).unwrap_or(FALLBACK);
    RGBColor(r, g, b)
}

/// Parse a "#RRGGBB" (or "RRGGBB") hex color into RGB bytes
///
/// An 8-digit value is accepted with the trailing alpha ignored.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        // 6-digit hex
        assert_eq!(parse_hex_color("#FF0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("#1F77B4"), Some([31, 119, 180]));

        // Without #
        assert_eq!(parse_hex_color("FF0000"), Some([255, 0, 0]));

        // 8-digit hex (with alpha, ignored)
        assert_eq!(parse_hex_color("#440154FF"), Some([68, 1, 84]));

        // Invalid
        assert_eq!(parse_hex_color("#FFF"), None); // Too short
        assert_eq!(parse_hex_color("GGGGGG"), None); // Invalid hex
    }

    #[test]
    fn test_categorical_color_order() {
        assert_eq!(categorical_color(0), RGBColor(31, 119, 180)); // #1F77B4
        assert_eq!(categorical_color(1), RGBColor(255, 127, 14)); // #FF7F0E
        assert_eq!(categorical_color(2), RGBColor(44, 160, 44)); // #2CA02C
    }

    #[test]
    fn test_categorical_color_wraps() {
        assert_eq!(categorical_color(0), categorical_color(CATEGORICAL.len()));
    }
}
