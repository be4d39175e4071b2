//! Parsing functions mapping command-line strings to core mode enums.

use vectra_core::models::{ColorMode, CurveMode, HierarchyMode};

/// Parse a color mode: "color" or "binary"
pub fn parse_color_mode(mode_str: &str) -> Result<ColorMode, String> {
    match mode_str.to_lowercase().as_str() {
        "color" => Ok(ColorMode::Color),
        "binary" => Ok(ColorMode::Binary),
        _ => Err(format!(
            "Unknown color mode: {} (expected 'color' or 'binary')",
            mode_str
        )),
    }
}

/// Parse a hierarchy mode: "stacked" or "cutout"
pub fn parse_hierarchy_mode(mode_str: &str) -> Result<HierarchyMode, String> {
    match mode_str.to_lowercase().as_str() {
        "stacked" => Ok(HierarchyMode::Stacked),
        "cutout" => Ok(HierarchyMode::Cutout),
        _ => Err(format!(
            "Unknown hierarchy mode: {} (expected 'stacked' or 'cutout')",
            mode_str
        )),
    }
}

/// Parse a curve fitting mode: "spline", "polygon", or "pixel"
pub fn parse_curve_mode(mode_str: &str) -> Result<CurveMode, String> {
    match mode_str.to_lowercase().as_str() {
        "spline" => Ok(CurveMode::Spline),
        "polygon" => Ok(CurveMode::Polygon),
        "pixel" => Ok(CurveMode::Pixel),
        _ => Err(format!(
            "Unknown curve mode: {} (expected 'spline', 'polygon', or 'pixel')",
            mode_str
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_mode() {
        assert_eq!(parse_color_mode("color").unwrap(), ColorMode::Color);
        assert_eq!(parse_color_mode("Binary").unwrap(), ColorMode::Binary);
        assert!(parse_color_mode("grayscale").is_err());
    }

    #[test]
    fn test_parse_hierarchy_mode() {
        assert_eq!(
            parse_hierarchy_mode("stacked").unwrap(),
            HierarchyMode::Stacked
        );
        assert_eq!(
            parse_hierarchy_mode("cutout").unwrap(),
            HierarchyMode::Cutout
        );
        assert!(parse_hierarchy_mode("flat").is_err());
    }

    #[test]
    fn test_parse_curve_mode() {
        assert_eq!(parse_curve_mode("spline").unwrap(), CurveMode::Spline);
        assert_eq!(parse_curve_mode("polygon").unwrap(), CurveMode::Polygon);
        assert_eq!(parse_curve_mode("PIXEL").unwrap(), CurveMode::Pixel);
        assert!(parse_curve_mode("bezier").is_err());
    }
}
