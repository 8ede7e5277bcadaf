//! PropertyScore - the ordered-tuple ranking score.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use smallvec::SmallVec;

/// Fixed-point scale: one level unit is a thousandth of a property point.
///
/// Property totals are fractional in the catalogs but scores need a total
/// order, so levels are stored as milli-unit integers.
const SCALE: f64 = 1000.0;

/// The authoritative ranking score of one candidate loadout.
///
/// Holds one level per target property, in the user's priority order, and
/// compares lexicographically: the first property dominates, the second
/// breaks ties, and so on. This ordered-tuple comparison is the rule used
/// for top-N selection and for branch-and-bound pruning; any scalar shown
/// next to it is informational only.
///
/// # Examples
///
/// ```
/// use gearforge_core::PropertyScore;
///
/// let a = PropertyScore::from_values(&[8.0, 0.0, 0.0]);
/// let b = PropertyScore::from_values(&[5.0, 100.0, 100.0]);
///
/// // The first property dominates regardless of the rest.
/// assert!(a > b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyScore {
    levels: SmallVec<[i64; 8]>,
}

impl PropertyScore {
    /// Creates a score from per-property values in priority order.
    pub fn from_values(values: &[f64]) -> PropertyScore {
        PropertyScore {
            levels: values.iter().map(|&v| (v * SCALE).round() as i64).collect(),
        }
    }

    /// A zero score with the given number of levels.
    pub fn zero(levels: usize) -> PropertyScore {
        PropertyScore {
            levels: SmallVec::from_elem(0, levels),
        }
    }

    /// Number of levels (target properties) in this score.
    #[inline]
    pub fn levels_count(&self) -> usize {
        self.levels.len()
    }

    /// The value at a level, converted back to property points.
    ///
    /// # Panics
    /// Panics if the level is out of bounds.
    pub fn value(&self, level: usize) -> f64 {
        self.levels[level] as f64 / SCALE
    }

    /// Returns true if every level is zero.
    pub fn is_zero(&self) -> bool {
        self.levels.iter().all(|&level| level == 0)
    }

    fn ensure_compatible(&self, other: &Self) {
        debug_assert_eq!(
            self.levels.len(),
            other.levels.len(),
            "Incompatible score levels: {} vs {}",
            self.levels.len(),
            other.levels.len()
        );
    }
}

impl PartialOrd for PropertyScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PropertyScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ensure_compatible(other);
        for (a, b) in self.levels.iter().zip(other.levels.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl Add for PropertyScore {
    type Output = PropertyScore;

    fn add(self, other: PropertyScore) -> PropertyScore {
        self.ensure_compatible(&other);
        PropertyScore {
            levels: self
                .levels
                .iter()
                .zip(other.levels.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl fmt::Display for PropertyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", *level as f64 / SCALE)?;
        }
        Ok(())
    }
}
