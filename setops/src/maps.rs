use core::cmp::Ordering;
use std::collections::btree_map;
use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};

use crate::intersect::Intersection;

/// Keys present in both maps, with the value each map holds for that key.
pub fn intersect_btree_maps<'a, K: Ord, V1, V2>(
    a: &'a BTreeMap<K, V1>,
    b: &'a BTreeMap<K, V2>,
) -> impl Iterator<Item = (&'a K, &'a V1, &'a V2)> + 'a {
    KeyIntersection {
        a_iter: a.iter(),
        b_iter: b.iter(),
    }
}

pub fn intersect_btree_sets<'a, T: Ord>(
    a: &'a BTreeSet<T>,
    b: &'a BTreeSet<T>,
) -> Intersection<btree_set::Iter<'a, T>, btree_set::Iter<'a, T>> {
    Intersection::new(a.iter(), b.iter())
}

struct KeyIntersection<'a, K, V1, V2> {
    a_iter: btree_map::Iter<'a, K, V1>,
    b_iter: btree_map::Iter<'a, K, V2>,
}

impl<'a, K: Ord, V1, V2> Iterator for KeyIntersection<'a, K, V1, V2> {
    type Item = (&'a K, &'a V1, &'a V2);

    fn next(&mut self) -> Option<Self::Item> {
        let mut a_entry = self.a_iter.next()?;
        let mut b_entry = self.b_iter.next()?;
        loop {
            match a_entry.0.cmp(b_entry.0) {
                Ordering::Less => a_entry = self.a_iter.next()?,
                Ordering::Greater => b_entry = self.b_iter.next()?,
                Ordering::Equal => return Some((a_entry.0, a_entry.1, b_entry.1)),
            }
        }
    }
}
