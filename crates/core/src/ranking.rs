//! Top-N extraction over scored points and hotspots
//!
//! Ranking is descending by key and stable: items with equal keys keep their
//! input order. The input slice is never reordered; results borrow from it.
//! NaN keys rank below every number.

use crate::danger::DangerScore;
use crate::grid::GridPoint;
use crate::spread::{AssessedHotspot, SpreadPrediction};
use std::cmp::Ordering;

/// Something with a single "how bad is it" number
pub trait RiskKeyed {
    /// Ranking key, higher is worse
    fn risk_key(&self) -> f32;
}

impl RiskKeyed for DangerScore {
    fn risk_key(&self) -> f32 {
        self.value
    }
}

impl RiskKeyed for GridPoint {
    fn risk_key(&self) -> f32 {
        self.score.value
    }
}

impl RiskKeyed for SpreadPrediction {
    fn risk_key(&self) -> f32 {
        self.radius_km()
    }
}

impl RiskKeyed for AssessedHotspot {
    fn risk_key(&self) -> f32 {
        self.prediction.radius_km()
    }
}

impl<T: RiskKeyed + ?Sized> RiskKeyed for &T {
    fn risk_key(&self) -> f32 {
        (**self).risk_key()
    }
}

/// The `n` highest-keyed items, best first.
///
/// Returns `min(n, items.len())` items; `n == 0` yields nothing.
pub fn top_n<T, F>(items: &[T], n: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f32,
{
    if n == 0 {
        return Vec::new();
    }

    let mut keyed: Vec<(f32, &T)> = items.iter().map(|item| (key(item), item)).collect();
    // slice::sort_by is stable, so equal keys keep input order
    keyed.sort_by(|a, b| descending(a.0, b.0));
    keyed.truncate(n);
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// [`top_n`] keyed by [`RiskKeyed::risk_key`]
pub fn top_n_by_risk<T: RiskKeyed>(items: &[T], n: usize) -> Vec<&T> {
    top_n(items, n, T::risk_key)
}

/// Descending order with NaN after everything, `-inf` included; -0 and +0 tie
fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_and_truncated() {
        let values = [12.0_f32, 55.0, 3.0, 90.0, 41.0];
        let top = top_n(&values, 3, |v| *v);
        assert_eq!(top, vec![&90.0_f32, &55.0, &41.0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = [("a", 5.0_f32), ("b", 7.0), ("c", 5.0), ("d", 7.0)];
        let top = top_n(&items, 4, |item| item.1);
        let names: Vec<&str> = top.iter().map(|item| item.0).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_zero_and_oversized_n() {
        let values = [1.0_f32, 2.0];
        assert!(top_n(&values, 0, |v| *v).is_empty());
        assert_eq!(top_n(&values, 10, |v| *v), vec![&2.0_f32, &1.0]);
        let empty: [f32; 0] = [];
        assert!(top_n(&empty, 3, |v| *v).is_empty());
    }

    #[test]
    fn test_nan_ranks_last() {
        let values = [f32::NAN, -4.0, 8.0];
        let top = top_n(&values, 3, |v| *v);
        assert_eq!(*top[0], 8.0);
        assert_eq!(*top[1], -4.0);
        assert!(top[2].is_nan());
    }

    #[test]
    fn test_nan_ranks_below_negative_infinity() {
        let values = [f32::NAN, f32::NEG_INFINITY, 1.0, f32::NAN];
        let top = top_n(&values, 4, |v| *v);
        assert_eq!(*top[0], 1.0);
        assert_eq!(*top[1], f32::NEG_INFINITY);
        assert!(top[2].is_nan());
        assert!(top[3].is_nan());

        let first = top_n(&values, 2, |v| *v);
        assert_eq!(*first[1], f32::NEG_INFINITY);
    }

    #[test]
    fn test_signed_zeros_tie() {
        let items = [("neg", -0.0_f32), ("pos", 0.0)];
        let names: Vec<&str> = top_n(&items, 2, |item| item.1).iter().map(|item| item.0).collect();
        assert_eq!(names, vec!["neg", "pos"]);
    }

    #[test]
    fn test_input_untouched() {
        let values = vec![3.0_f32, 1.0, 2.0];
        let _ = top_n(&values, 2, |v| *v);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }
}
