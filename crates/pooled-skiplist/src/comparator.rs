use std::cmp::Ordering;


/// Interface for ordering the values of a [`SkipList`].
///
/// The ordering must be a strict weak order, and must not change while values are in a list.
/// Values which compare as [`Ordering::Equal`] are considered equivalent by [`SkipList::find`]
/// and [`SkipList::remove`], even if they differ in other ways.
///
/// Closures of the form `Fn(&T, &T) -> Ordering` are comparators.
///
/// [`SkipList`]: crate::SkipList
/// [`SkipList::find`]: crate::SkipList::find
/// [`SkipList::remove`]: crate::SkipList::remove
pub trait Comparator<T: ?Sized> {
    #[must_use]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// A [`Comparator`] which uses the [`Ord`] implementation of `T`; the smallest value comes first.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ascending;

impl<T: ?Sized + Ord> Comparator<T> for Ascending {
    /// Equivalent to `Ord::cmp(lhs, rhs)`.
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        Ord::cmp(lhs, rhs)
    }
}

/// A [`Comparator`] which reverses the [`Ord`] implementation of `T`; the greatest value comes
/// first.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Descending;

impl<T: ?Sized + Ord> Comparator<T> for Descending {
    /// Equivalent to `Ord::cmp(rhs, lhs)`.
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        Ord::cmp(rhs, lhs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn builtin_comparators() {
        assert_eq!(Comparator::<i32>::cmp(&Ascending, &1, &2), Ordering::Less);
        assert_eq!(Comparator::<i32>::cmp(&Descending, &1, &2), Ordering::Greater);
        assert_eq!(Comparator::<str>::cmp(&Descending, "wilds", "fefo"), Ordering::Less);
        assert_eq!(Comparator::<str>::cmp(&Ascending, "same", "same"), Ordering::Equal);
    }

    #[test]
    fn closure_comparator() {
        let by_len = |lhs: &&str, rhs: &&str| lhs.len().cmp(&rhs.len());

        assert_eq!(by_len.cmp(&"ab", &"abc"), Ordering::Less);
        assert_eq!(by_len.cmp(&"ab", &"xy"), Ordering::Equal);
    }
}
