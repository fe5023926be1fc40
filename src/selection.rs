//! Comparator driven selection sort.
//!
//! Every entry point funnels into one fallible core that takes an `is_less` predicate, mirroring
//! how the standard library sorts turn `Ord` and `Ordering` based comparisons into `is_less`.

use core::cmp::Ordering;
use core::convert::Infallible;

sort_impl!("rust_selection_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n*^2) in every case. It performs exactly *n* \* (*n* - 1) / 2 comparisons and at most
/// *n* - 1 swaps.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by_is_less(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// `a` is moved in front of `b` only if `compare(a, b)` returns [`Ordering::Less`]. The comparator
/// should define a total order, otherwise the resulting order is unspecified. The slice still
/// holds exactly its original elements in that case.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_is_less(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
///
/// The key function is called twice per comparison.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    sort_by_is_less(v, |a, b| f(a).lt(&f(b)));
}

/// Sorts the slice with a strict order predicate.
///
/// `is_less(a, b)` answers whether `a` must be placed strictly before `b`. It should be a strict
/// weak ordering. After the call no element is `is_less` than its predecessor.
///
/// If `is_less` panics the panic propagates unchanged and the slice is left partially sorted,
/// without losing or duplicating any element.
#[inline]
pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut infallible_is_less =
        |a: &T, b: &T| -> Result<bool, Infallible> { Ok(is_less(a, b)) };

    match selection_sort(v, &mut infallible_is_less) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Sorts the slice with a fallible strict order predicate.
///
/// The first `Err` returned by `is_less` stops the sort and is handed back unchanged. The slice
/// keeps whatever order it had reached at that point, no rollback is performed.
pub fn try_sort_by_is_less<T, E, F>(v: &mut [T], mut is_less: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    selection_sort(v, &mut is_less)
}

/// By-value variant of [`sort_by_is_less`], sorts the owned vector in place and returns it.
#[must_use]
pub fn sorted_by_is_less<T, F>(mut v: Vec<T>, is_less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort_by_is_less(&mut v, is_less);
    v
}

// --- Private ---

fn selection_sort<T, E, F>(v: &mut [T], is_less: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();

    for i in 0..len {
        let min_idx = find_min_index(v, i, is_less)?;

        if min_idx != i {
            v.swap(i, min_idx);
        }
    }

    Ok(())
}

/// Index of the leftmost minimum in `v[start..]`. An element only replaces the current minimum if
/// it is strictly less, so among equivalent elements the first one scanned wins.
#[inline]
fn find_min_index<T, E, F>(v: &[T], start: usize, is_less: &mut F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let mut min_idx = start;

    for (offset, elem) in v[start + 1..].iter().enumerate() {
        if is_less(elem, &v[min_idx])? {
            min_idx = start + 1 + offset;
        }
    }

    Ok(min_idx)
}
