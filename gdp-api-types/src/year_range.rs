use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Oldest and newest year present in the data store, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod test {
    use super::YearRange;

    #[test]
    fn years_are_inclusive() {
        let range = YearRange {
            min: 1960,
            max: 1963,
        };
        assert_eq!(range.years().collect::<Vec<_>>(), [1960, 1961, 1962, 1963]);
        assert!(range.contains(1963));
        assert!(!range.contains(1964));
    }
}
