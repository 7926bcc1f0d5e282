//! Tests for the production season classifier
//!
//! Verifies that the three season tags partition the calendar with no
//! overlap.

use proptest::prelude::*;
use shared::{classify_season, Season};

// =============================================================================
// Fixed-case classification
// =============================================================================

mod season_classification {
    use super::*;

    #[test]
    fn maha_covers_december_through_march() {
        for month in [12, 1, 2, 3] {
            assert_eq!(classify_season(month), Season::Maha, "month {}", month);
        }
    }

    #[test]
    fn yala_covers_april_through_july() {
        for month in 4..=7 {
            assert_eq!(classify_season(month), Season::Yala, "month {}", month);
        }
    }

    #[test]
    fn other_covers_august_through_november() {
        for month in 8..=11 {
            assert_eq!(classify_season(month), Season::Other, "month {}", month);
        }
    }

    #[test]
    fn season_sizes_are_four_four_four() {
        let mut maha = 0;
        let mut yala = 0;
        let mut other = 0;
        for month in 1..=12 {
            match classify_season(month) {
                Season::Maha => maha += 1,
                Season::Yala => yala += 1,
                Season::Other => other += 1,
            }
        }
        assert_eq!((maha, yala, other), (4, 4, 4));
    }
}

// =============================================================================
// Partition property
// =============================================================================
// Every month in 1..=12 maps to exactly one of the three tags; the tag sets
// are disjoint and together cover the whole year.

proptest! {
    #[test]
    fn every_month_gets_exactly_one_season(month in 1u32..=12) {
        let season = classify_season(month);
        let maha = season == Season::Maha;
        let yala = season == Season::Yala;
        let other = season == Season::Other;
        // Exactly one tag applies
        prop_assert_eq!([maha, yala, other].iter().filter(|&&b| b).count(), 1);
    }

    #[test]
    fn classification_is_stable(month in 1u32..=12) {
        prop_assert_eq!(classify_season(month), classify_season(month));
    }
}
