use core::mem::swap;

use log::trace;

use crate::intersect::intersect_into;

/// Distinct values common to every slice in `sets`.
///
/// Inputs are visited smallest first and the running result is intersected
/// with each in turn, so the candidate set only shrinks. An empty list of
/// sets intersects to nothing.
pub fn intersect_all<T: Ord + Clone>(sets: &[&[T]]) -> Vec<T> {
    let mut by_len = sets.to_vec();
    by_len.sort_by_key(|set| set.len());
    let Some((smallest, rest)) = by_len.split_first() else {
        return vec![];
    };
    debug_assert!(smallest.is_sorted());

    let mut current = smallest.to_vec();
    current.dedup();
    let mut scratch = Vec::with_capacity(current.len());
    for (pass, set) in rest.iter().enumerate() {
        if current.is_empty() {
            break;
        }
        scratch.clear();
        intersect_into(&current, set, &mut scratch);
        swap(&mut current, &mut scratch);
        trace!(
            "intersect_all pass {}: {} candidates left against {} values",
            pass,
            current.len(),
            set.len()
        );
    }
    current
}
