//! In-place ascending heap sort for `f64` slices.
//!
//! Model
//! - Build a binary max-heap over the whole slice (`parent(i) = (i-1)/2`,
//!   children `2i+1`, `2i+2`) by sifting down every internal node.
//! - Repeatedly swap the maximum at slot 0 with the last active slot, shrink
//!   the active prefix by one and restore the heap from the root.
//!
//! Properties
//! - O(n log n) comparisons in the worst case, O(1) extra space.
//! - Unstable. Only strict `>` moves an element, so equal values settle.
//! - NaN is not supported: its position in the output is unspecified.

/// Sort `values` ascending, in place.
///
/// ```
/// let mut v = [2.0, 5.5, 5.5, -3.0, 2.0];
/// hullsort::sort_ascending(&mut v);
/// assert_eq!(v, [-3.0, 2.0, 2.0, 5.5, 5.5]);
/// ```
pub fn sort_ascending(values: &mut [f64]) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(values, root, n);
    }
    for end in (1..n).rev() {
        values.swap(0, end);
        sift_down(values, 0, end);
    }
}

/// Move `values[root]` down until both children within `values[..len]` are
/// not greater.
fn sift_down(values: &mut [f64], mut root: usize, len: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let right = left + 1;
        let child = if right < len && values[right] > values[left] {
            right
        } else {
            left
        };
        if values[child] > values[root] {
            values.swap(root, child);
            root = child;
        } else {
            return;
        }
    }
}

/// Whether `values[i] <= values[i + 1]` for every adjacent pair.
pub fn is_sorted_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        sort_ascending(&mut v);
        v
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(sorted(vec![]), Vec::<f64>::new());
        assert_eq!(sorted(vec![8.0]), vec![8.0]);
    }

    #[test]
    fn two_elements() {
        assert_eq!(sorted(vec![8.0, -16.0]), vec![-16.0, 8.0]);
        assert_eq!(sorted(vec![-16.0, 8.0]), vec![-16.0, 8.0]);
    }

    #[test]
    fn duplicates() {
        assert_eq!(
            sorted(vec![2.0, 5.5, 5.5, -3.0, 2.0]),
            vec![-3.0, 2.0, 2.0, 5.5, 5.5]
        );
        assert_eq!(sorted(vec![1.5; 7]), vec![1.5; 7]);
    }

    #[test]
    fn negative_values() {
        assert_eq!(
            sorted(vec![-1.2, -0.6, -2.5, -3.3, -6.1]),
            vec![-6.1, -3.3, -2.5, -1.2, -0.6]
        );
    }

    #[test]
    fn positive_values() {
        assert_eq!(
            sorted(vec![1.2, 0.6, 2.5, 3.3, 6.1]),
            vec![0.6, 1.2, 2.5, 3.3, 6.1]
        );
    }

    #[test]
    fn bounds() {
        let v = sorted(vec![
            f64::MAX,
            -f64::MAX,
            -f64::MIN_POSITIVE,
            f64::MIN_POSITIVE,
        ]);
        assert_eq!(
            v,
            vec![-f64::MAX, -f64::MIN_POSITIVE, f64::MIN_POSITIVE, f64::MAX]
        );
    }

    #[test]
    fn already_sorted() {
        let v = vec![-5.0, -2.3, 0.0, 5.0, 36.0];
        assert_eq!(sorted(v.clone()), v);
    }

    #[test]
    fn reversed_countdown() {
        // n - i, the seeded initial array used by the demo driver
        let n = 1000;
        let v: Vec<f64> = (0..n).map(|i| (n - i) as f64).collect();
        let out = sorted(v);
        assert!(is_sorted_ascending(&out));
        assert_eq!(out[0], 1.0);
        assert_eq!(out[n - 1], n as f64);
    }

    #[test]
    fn sorted_check() {
        assert!(is_sorted_ascending(&[]));
        assert!(is_sorted_ascending(&[1.0, 1.0, 2.0]));
        assert!(!is_sorted_ascending(&[2.0, 1.0]));
    }

    fn values() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1e12f64..1e12, 0..200)
    }

    proptest! {
        #[test]
        fn output_is_ascending(v in values()) {
            prop_assert!(is_sorted_ascending(&sorted(v)));
        }

        #[test]
        fn preserves_multiset(v in values()) {
            let mut expected = v.clone();
            expected.sort_by(f64::total_cmp);
            prop_assert_eq!(sorted(v), expected);
        }

        #[test]
        fn idempotent(v in values()) {
            let once = sorted(v);
            prop_assert_eq!(sorted(once.clone()), once);
        }
    }
}
