//! Line-clear scoring.

use blockfall_types::POINTS_PER_LINE;

/// Points for clearing `rows` rows in one lock: linear, no multi-line bonus.
pub fn line_clear_score(rows: usize) -> u32 {
    POINTS_PER_LINE * rows as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_linear_in_rows() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);
    }
}
