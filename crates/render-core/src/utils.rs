use stockreport_types::MM_TO_PT;

/// Convert a layout length in millimetres to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_points() {
        assert!((mm_to_pt(210.0) - 595.2756).abs() < 1e-3);
        assert!((mm_to_pt(297.0) - 841.8898).abs() < 1e-3);
        assert_eq!(flip_y(10.0, 100.0), 90.0);
    }
}
