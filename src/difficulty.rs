//! Bidirectional mapping between named difficulty levels and correct-rate ranges.
//!
//! The six buckets partition 0..=100 into contiguous, non-overlapping
//! whole-percent ranges. A harder level means a lower correct rate, so the
//! table is ordered hardest-first.

use crate::domain::Difficulty;

/// Fixed bucket table: (level, min correct rate, max correct rate), inclusive.
pub const DIFFICULTY_RANGES: [(Difficulty, u8, u8); 6] = [
  (Difficulty::Choesang, 0, 29),
  (Difficulty::Sang, 30, 49),
  (Difficulty::Jungsang, 50, 59),
  (Difficulty::Jung, 60, 79),
  (Difficulty::Ha, 80, 89),
  (Difficulty::Choeha, 90, 100),
];

/// Correct-rate range of a single level.
pub fn range_for_level(level: Difficulty) -> (u8, u8) {
  // The table is total over the enum, so the lookup always hits.
  DIFFICULTY_RANGES
    .iter()
    .find(|(l, _, _)| *l == level)
    .map(|(_, lo, hi)| (*lo, *hi))
    .unwrap_or((0, 100))
}

/// Minimal enclosing correct-rate range of the selected levels.
///
/// min-of-mins / max-of-maxes: selecting non-adjacent buckets yields a range
/// that also spans the unselected middle buckets. Empty selection = `None`.
pub fn range_for_levels(levels: &[Difficulty]) -> Option<(u8, u8)> {
  let mut enclosing: Option<(u8, u8)> = None;
  for level in levels {
    let (lo, hi) = range_for_level(*level);
    enclosing = match enclosing {
      None => Some((lo, hi)),
      Some((min, max)) => Some((min.min(lo), max.max(hi))),
    };
  }
  enclosing
}

/// Every level whose bucket overlaps the given range (overlap, not containment),
/// in table order.
pub fn levels_for_range(min: u8, max: u8) -> Vec<Difficulty> {
  DIFFICULTY_RANGES
    .iter()
    .filter(|(_, lo, hi)| *lo <= max && min <= *hi)
    .map(|(level, _, _)| *level)
    .collect()
}

/// Does the selection derive exactly this range? Exact endpoint equality,
/// used to keep the level checkboxes and the rate slider in sync.
#[allow(dead_code)]
pub fn selection_matches_range(levels: &[Difficulty], min: u8, max: u8) -> bool {
  range_for_levels(levels) == Some((min, max))
}

/// Does the range derive exactly this selection (as a set)?
#[allow(dead_code)]
pub fn range_matches_selection(min: u8, max: u8, levels: &[Difficulty]) -> bool {
  let derived = levels_for_range(min, max);
  derived.len() == levels.len() && levels.iter().all(|l| derived.contains(l))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn buckets_partition_the_whole_interval() {
    let mut next = 0u16;
    for (_, lo, hi) in DIFFICULTY_RANGES {
      assert_eq!(lo as u16, next, "gap or overlap before {lo}");
      assert!(lo <= hi);
      next = hi as u16 + 1;
    }
    assert_eq!(next, 101, "table must end at 100");
  }

  #[test]
  fn adjacent_selection_round_trips() {
    let levels = [Difficulty::Jungsang, Difficulty::Jung];
    let (min, max) = range_for_levels(&levels).expect("range");
    assert_eq!((min, max), (50, 79));
    let back = levels_for_range(min, max);
    assert_eq!(back, vec![Difficulty::Jungsang, Difficulty::Jung]);
  }

  #[test]
  fn non_adjacent_selection_spans_middle_buckets() {
    // Enclosing min/max deliberately pulls in everything in between.
    let levels = [Difficulty::Choesang, Difficulty::Choeha];
    let (min, max) = range_for_levels(&levels).expect("range");
    assert_eq!((min, max), (0, 100));
    assert_eq!(levels_for_range(min, max).len(), 6);
  }

  #[test]
  fn empty_selection_has_no_range() {
    assert_eq!(range_for_levels(&[]), None);
  }

  #[test]
  fn overlap_beats_containment() {
    // 55..=65 only partially covers both buckets but still selects them.
    let levels = levels_for_range(55, 65);
    assert_eq!(levels, vec![Difficulty::Jungsang, Difficulty::Jung]);
  }

  #[test]
  fn equality_helpers_use_exact_endpoints() {
    let levels = [Difficulty::Jungsang, Difficulty::Jung];
    assert!(selection_matches_range(&levels, 50, 79));
    assert!(!selection_matches_range(&levels, 50, 80));
    assert!(range_matches_selection(50, 79, &levels));
    assert!(!range_matches_selection(50, 79, &[Difficulty::Jung]));
  }
}
