//! Small helpers shared by the part writers

/// XML declaration every part starts with
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Points to twips (1/20 pt), the unit of most OOXML lengths
pub fn twips(points: f32) -> i64 {
    (f64::from(points) * 20.0).round() as i64
}

/// Points to half-points, the unit of font sizes
pub fn half_points(points: f32) -> i64 {
    (f64::from(points) * 2.0).round() as i64
}

/// Points to eighths of a point, the unit of border widths
pub fn eighth_points(points: f32) -> i64 {
    (f64::from(points) * 8.0).round() as i64
}

/// Strip a leading `#` from a hex color
pub fn hex_color(color: &str) -> &str {
    color.trim_start_matches('#')
}
