use core::cmp::Ordering;
use core::iter::Peekable;

/// Distinct values common to two sorted slices, in ascending order.
///
/// Both inputs must be sorted in non-decreasing order. Duplicates in either
/// input are fine, each common value is emitted once.
pub fn intersect<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = vec![];
    intersect_into(a, b, &mut out);
    out
}

/// Appends the distinct common values of `a` and `b` to `out`, returning how
/// many were appended. Values already in `out` are left alone.
pub fn intersect_into<T: Ord + Clone>(a: &[T], b: &[T], out: &mut Vec<T>) -> usize {
    debug_assert!(a.is_sorted());
    debug_assert!(b.is_sorted());
    let start = out.len();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                // Output is sorted, so equal values can only be adjacent.
                if out[start..].last() != Some(&a[i]) {
                    out.push(a[i].clone());
                }
                i += 1;
                j += 1;
            }
        }
    }
    out.len() - start
}

pub fn intersect_iter<A, B>(a: A, b: B) -> Intersection<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    Intersection::new(a.into_iter(), b.into_iter())
}

pub struct Intersection<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    a: Peekable<A>,
    b: Peekable<B>,
}

impl<A, B> Intersection<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    A::Item: Ord,
{
    pub fn new(a: A, b: B) -> Self {
        Self {
            a: a.peekable(),
            b: b.peekable(),
        }
    }
}

impl<A, B> Iterator for Intersection<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    A::Item: Ord,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ordering = self.a.peek()?.cmp(self.b.peek()?);
            match ordering {
                Ordering::Less => {
                    self.a.next();
                }
                Ordering::Greater => {
                    self.b.next();
                }
                Ordering::Equal => {
                    let item = self.a.next()?;
                    self.b.next();
                    while self.a.next_if(|next| *next == item).is_some() {}
                    while self.b.next_if(|next| *next == item).is_some() {}
                    return Some(item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = match (self.a.size_hint().1, self.b.size_hint().1) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
        (0, upper)
    }
}
