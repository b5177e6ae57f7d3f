//! GPA normalization onto the canonical 0-5 scale.
//!
//! Roster GPA cells are free-form strings tagged with the grading scale they
//! were awarded on ("4.43/5", "3.2 /4", "88/100"). Normalization detects the
//! scale tag, strips it, and rescales the numeric part so every applicant can
//! be compared on one axis.

/// Recognized scale tags with their conversion factor onto the 0-5 scale,
/// in detection order. "/5" is checked before "/4" so a cell can never match
/// a later tag once an earlier one is present somewhere in the string.
const SCALE_TAGS: [(&str, f64); 3] = [("/5", 1.0), ("/4", 5.0 / 4.0), ("/100", 5.0 / 100.0)];

/// Normalize a raw GPA cell to the 0-5 scale, rounded to two decimals.
///
/// Returns `None` for blank cells, cells without a recognized scale tag,
/// non-numeric remainders, and values that leave the 0-5 range after
/// conversion. Missing is the only failure mode; callers decide what a
/// missing GPA means for scoring.
pub fn normalize_gpa(raw: &str) -> Option<f64> {
    let cell = raw.trim();
    let (tag, factor) = SCALE_TAGS
        .iter()
        .find(|(tag, _)| cell.contains(tag))
        .copied()?;

    let value: f64 = cell.replace(tag, "").trim().parse().ok()?;
    let scaled = round_to_2(value * factor);

    (0.0..=5.0).contains(&scaled).then_some(scaled)
}

/// Round to two decimals, half away from zero.
pub(crate) fn round_to_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_scale_passes_through() {
        assert_eq!(normalize_gpa("4.5/5"), Some(4.5));
        assert_eq!(normalize_gpa("4.43/5"), Some(4.43));
        assert_eq!(normalize_gpa("5/5"), Some(5.0));
        assert_eq!(normalize_gpa("0/5"), Some(0.0));
    }

    #[test]
    fn four_scale_is_rescaled() {
        assert_eq!(normalize_gpa("3.2/4"), Some(4.0));
        assert_eq!(normalize_gpa("3.6/4"), Some(4.5));
        assert_eq!(normalize_gpa("4/4"), Some(5.0));
    }

    #[test]
    fn hundred_scale_is_rescaled() {
        assert_eq!(normalize_gpa("85/100"), Some(4.25));
        assert_eq!(normalize_gpa("88/100"), Some(4.4));
        assert_eq!(normalize_gpa("90/100"), Some(4.5));
        assert_eq!(normalize_gpa("100/100"), Some(5.0));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(normalize_gpa("  4.43/5  "), Some(4.43));
        assert_eq!(normalize_gpa("3.2 /4"), Some(4.0));
        assert_eq!(normalize_gpa(" 88 /100"), Some(4.4));
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        assert_eq!(normalize_gpa("3.333/4"), Some(4.17));
        assert_eq!(normalize_gpa("87.77/100"), Some(4.39));
    }

    #[test]
    fn untagged_cells_are_missing() {
        assert_eq!(normalize_gpa("4.5"), None);
        assert_eq!(normalize_gpa("excellent"), None);
        assert_eq!(normalize_gpa(""), None);
        assert_eq!(normalize_gpa("   "), None);
    }

    #[test]
    fn non_numeric_remainders_are_missing() {
        assert_eq!(normalize_gpa("abc/5"), None);
        assert_eq!(normalize_gpa("/5"), None);
        assert_eq!(normalize_gpa("4..3/5"), None);
    }

    #[test]
    fn out_of_range_results_are_missing() {
        assert_eq!(normalize_gpa("6/5"), None);
        assert_eq!(normalize_gpa("5.5/5"), None);
        assert_eq!(normalize_gpa("-1/5"), None);
        assert_eq!(normalize_gpa("101/100"), None);
        assert_eq!(normalize_gpa("4.2/4"), None);
    }

    #[test]
    fn tag_detection_order_prefers_five_scale() {
        // Contains both "/5" and "/100"; "/5" wins, the remainder is not a
        // clean number, so the cell is missing rather than misread.
        assert_eq!(normalize_gpa("4/5 of 100/100"), None);
    }

    #[test]
    fn every_tag_occurrence_is_stripped() {
        // String replacement removes all occurrences, matching the original
        // roster tooling: "20/40" under the "/4" tag becomes "20" + "0".
        assert_eq!(normalize_gpa("20/40"), None);
    }

    #[test]
    fn boundary_values_stay_inside_range() {
        assert_eq!(normalize_gpa("0.001/5"), Some(0.0));
        assert_eq!(normalize_gpa("4.999/5"), Some(5.0));
    }
}
