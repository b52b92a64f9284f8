//! Growable double-ended sequence with ECMAScript `Array` semantics.
//!
//! Provides [`Sequence`], a contiguous container over a slack buffer that
//! reproduces the JavaScript `Array` contract: writes past the end extend
//! the sequence with default values, `slice` understands negative indices,
//! and the usual combinators (`for_each`, `map`, `filter`, `every`, `some`,
//! `reduce`) operate in index order.  Because it `Deref`s to `[T]`, all
//! standard slice methods are available without conversion.
//!
//! # Auto-extension
//! By default an indexed *write* at `i >= len` grows the sequence to
//! `i + 1`, filling the gap with `T::default()`:
//!
//! ```rust
//! use js_sequence::Sequence;
//!
//! let mut seq: Sequence<i32> = Sequence::new();
//! seq.set(99, 1).unwrap();
//! assert_eq!(seq.len(), 100);
//! ```
//!
//! Reads never extend.  The behaviour can be switched off per instance with
//! [`with_auto_extend`](Sequence::with_auto_extend), in which case an
//! out-of-range write fails with
//! [`SequenceError::IndexOutOfBounds`](crate::SequenceError).

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;

use crate::buffer::SlackBuffer;
use crate::error::{Result, SequenceError};

/// A growable double-ended sequence.
///
/// The buffer keeps slack at both ends, so [`push`](Sequence::push) and
/// [`unshift`](Sequence::unshift) are both amortized O(1), and
/// [`shift`](Sequence::shift) removes from the front by advancing the head
/// offset rather than moving elements.
///
/// A `Sequence` exclusively owns its buffer.  `clone`, `slice`, `filter`,
/// and `map` produce new, independently owned sequences; returning a
/// `Sequence` by value moves the buffer without copying.
pub struct Sequence<T> {
    buf: SlackBuffer<T>,
    auto_extend: bool,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with auto-extension enabled.
    pub fn new() -> Self {
        Self {
            buf: SlackBuffer::new(),
            auto_extend: true,
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: SlackBuffer::with_capacity(capacity),
            auto_extend: true,
        }
    }

    /// Sets the auto-extension mode, consuming and returning the sequence.
    pub fn with_auto_extend(mut self, enabled: bool) -> Self {
        self.auto_extend = enabled;
        self
    }

    /// Sets the auto-extension mode in place.
    pub fn set_auto_extend(&mut self, enabled: bool) {
        self.auto_extend = enabled;
    }

    /// Returns `true` if out-of-range writes extend the sequence.
    pub fn auto_extend(&self) -> bool {
        self.auto_extend
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Returns the current buffer capacity.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Unused capacity before the first element.
    #[inline(always)]
    pub fn head_slack(&self) -> usize {
        self.buf.head_slack()
    }

    /// Unused capacity after the last element.
    #[inline(always)]
    pub fn tail_slack(&self) -> usize {
        self.buf.tail_slack()
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// range.  Reads never auto-extend.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable counterpart of [`get`](Sequence::get).  Does not auto-extend.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Checked read: returns the element at `index` or
    /// [`SequenceError::IndexOutOfBounds`].
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.get(index)
            .ok_or(SequenceError::IndexOutOfBounds { index, len })
    }

    /// Appends `value` at the tail.  Amortized O(1).
    #[inline(always)]
    pub fn push(&mut self, value: T) {
        self.buf.push_back(value);
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// [`SequenceError::EmptyContainer`] if the sequence is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.buf
            .pop_back()
            .ok_or(SequenceError::EmptyContainer { op: "pop" })
    }

    /// Inserts `value` at the head.  Amortized O(1) via head slack.
    #[inline(always)]
    pub fn unshift(&mut self, value: T) {
        self.buf.push_front(value);
    }

    /// Removes and returns the first element by advancing the head offset;
    /// no elements are moved.
    ///
    /// # Errors
    /// [`SequenceError::EmptyContainer`] if the sequence is empty.
    pub fn shift(&mut self) -> Result<T> {
        self.buf
            .pop_front()
            .ok_or(SequenceError::EmptyContainer { op: "shift" })
    }

    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }

    /// Returns the index of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|x| x == item)
    }

    /// Reverses the sequence in place.  No allocation.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Sorts the sequence in place by `<`.  Not stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }

    /// Sorts the sequence in place by `cmp`.  Not stable.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(cmp);
    }

    /// Copies `[begin, end)` into a new sequence, JS style: a negative
    /// index `k` counts from the end as `len + k`.
    ///
    /// A `begin` or `end` outside `[-len, len)` yields an empty sequence,
    /// as does `end <= begin` after normalization; neither is an error.
    /// The source is never mutated.
    pub fn slice(&self, begin: isize, end: isize) -> Self
    where
        T: Clone,
    {
        let len = self.len() as isize;
        if end < -len || end >= len {
            return self.empty_like();
        }
        let end = if end < 0 { end + len } else { end };
        self.slice_normalized(begin, end)
    }

    /// [`slice`](Sequence::slice) with the default end bound: copies from
    /// `begin` through the last element.
    pub fn slice_from(&self, begin: isize) -> Self
    where
        T: Clone,
    {
        self.slice_normalized(begin, self.len() as isize)
    }

    fn slice_normalized(&self, begin: isize, end: isize) -> Self
    where
        T: Clone,
    {
        let len = self.len() as isize;
        if begin < -len || begin >= len {
            return self.empty_like();
        }
        let begin = if begin < 0 { begin + len } else { begin };
        if end <= begin {
            return self.empty_like();
        }
        let mut out = Self {
            buf: SlackBuffer::with_capacity((end - begin) as usize),
            auto_extend: self.auto_extend,
        };
        for item in &self.as_slice()[begin as usize..end as usize] {
            out.buf.push_back(item.clone());
        }
        out
    }

    /// Empty sequence carrying this one's configuration.
    fn empty_like(&self) -> Self {
        Self {
            buf: SlackBuffer::new(),
            auto_extend: self.auto_extend,
        }
    }

    /// Invokes `callback` once per element in index order, passing a
    /// mutable reference; mutations are visible in the sequence.
    pub fn for_each<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut T),
    {
        for item in self.as_mut_slice() {
            callback(item);
        }
    }

    /// Applies `callback` to each element in index order, producing a new
    /// sequence of the same length.  The element type may change.
    pub fn map<R, F>(&self, mut callback: F) -> Sequence<R>
    where
        F: FnMut(&T) -> R,
    {
        let mut out = Sequence {
            buf: SlackBuffer::with_capacity(self.len()),
            auto_extend: self.auto_extend,
        };
        for item in self.as_slice() {
            out.buf.push_back(callback(item));
        }
        out
    }

    /// Copies the elements for which `test` holds into a new sequence,
    /// preserving relative order.  The source is not mutated.
    pub fn filter<F>(&self, mut test: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut out = self.empty_like();
        for item in self.as_slice() {
            if test(item) {
                out.buf.push_back(item.clone());
            }
        }
        out
    }

    /// Returns `true` iff `condition` holds for every element.
    /// Short-circuits on the first failure, in index order.
    pub fn every<F>(&self, mut condition: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|x| condition(x))
    }

    /// Returns `true` iff `condition` holds for at least one element.
    /// Short-circuits on the first success, in index order.
    pub fn some<F>(&self, mut condition: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|x| condition(x))
    }

    /// Folds left-to-right, seeding with a clone of the first element and
    /// starting from index 1.
    ///
    /// # Errors
    /// [`SequenceError::EmptyContainer`] if the sequence is empty.
    pub fn reduce<F>(&self, mut callback: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let seed = self
            .get(0)
            .cloned()
            .ok_or(SequenceError::EmptyContainer { op: "reduce" })?;
        Ok(self.as_slice()[1..]
            .iter()
            .fold(seed, |acc, x| callback(acc, x)))
    }

    /// Folds left-to-right from `start_from` with an explicit seed.
    /// A `start_from` past the end folds nothing and returns `initial`.
    pub fn reduce_with<F>(&self, mut callback: F, initial: T, start_from: usize) -> T
    where
        F: FnMut(T, &T) -> T,
    {
        let start = start_from.min(self.len());
        self.as_slice()[start..]
            .iter()
            .fold(initial, |acc, x| callback(acc, x))
    }

    /// View of the live elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Mutable view of the live elements.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }
}

impl<T: Default> Sequence<T> {
    /// Creates a sequence of `len` default-initialized elements.
    pub fn with_len(len: usize) -> Self {
        let mut seq = Self::with_capacity(len);
        for _ in 0..len {
            seq.buf.push_back(T::default());
        }
        seq
    }

    /// Write/reference form of indexing: returns a mutable reference to the
    /// element at `index`, extending the sequence with defaults through
    /// `index` when it lies past the end and auto-extension is enabled.
    ///
    /// # Errors
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len` and
    /// auto-extension is disabled.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len() {
            if !self.auto_extend {
                return Err(SequenceError::IndexOutOfBounds {
                    index,
                    len: self.len(),
                });
            }
            let missing = index + 1 - self.len();
            self.buf.reserve_back(missing);
            for _ in 0..missing {
                self.buf.push_back(T::default());
            }
        }
        let len = self.len();
        self.buf
            .as_mut_slice()
            .get_mut(index)
            .ok_or(SequenceError::IndexOutOfBounds { index, len })
    }

    /// Stores `value` at `index`, auto-extending like
    /// [`at_mut`](Sequence::at_mut).
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    /// Deep copy: a fresh buffer with every element cloned.
    fn clone(&self) -> Self {
        let mut buf = SlackBuffer::with_capacity(self.len());
        for item in self.as_slice() {
            buf.push_back(item.clone());
        }
        Self {
            buf,
            auto_extend: self.auto_extend,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.buf.reserve_back(lower);
        for item in iter {
            self.buf.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> core::borrow::Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> core::borrow::BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("index out of bounds")
    }
}

/// Owning iterator over a [`Sequence`].
///
/// Takes over the buffer without copying; any elements not consumed are
/// dropped with the iterator.
pub struct IntoIter<T> {
    storage: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (storage, head, len) = self.buf.into_raw_parts();
        IntoIter {
            storage,
            front: head,
            back: head + len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            None
        } else {
            let val = unsafe { ptr::read(self.storage[self.front].as_ptr()) };
            self.front += 1;
            Some(val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            None
        } else {
            self.back -= 1;
            Some(unsafe { ptr::read(self.storage[self.back].as_ptr()) })
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            unsafe {
                ptr::drop_in_place(self.storage[i].as_mut_ptr());
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Sequence<i32> {
        let mut seq: Sequence<i32> = Sequence::with_len(10);
        let mut count = 0;
        seq.for_each(|item| {
            *item = count;
            count += 1;
        });
        seq
    }

    #[test]
    fn test_construct_with_len_defaults() {
        let seq: Sequence<i32> = Sequence::with_len(7);
        assert_eq!(seq.len(), 7);
        assert!(seq.iter().all(|&x| x == 0));
        let empty: Sequence<i32> = Sequence::with_len(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_construct_from_source_order() {
        let seq: Sequence<i32> = (0..4).collect();
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3]);
        let from_vec = Sequence::from(vec![5, 6]);
        assert_eq!(from_vec.as_slice(), &[5, 6]);
        let from_slice = Sequence::from(&[7, 8][..]);
        assert_eq!(from_slice.as_slice(), &[7, 8]);
    }

    #[test]
    fn test_push_pop_roundtrip() {
        let mut seq = fixture();
        assert_eq!(seq.pop().unwrap(), 9);
        assert_eq!(seq.len(), 9);
        seq.push(10);
        assert_eq!(seq.len(), 10);
        assert_eq!(seq[seq.len() - 1], 10);
    }

    #[test]
    fn test_unshift_shift_roundtrip() {
        let mut seq = fixture();
        assert_eq!(seq.shift().unwrap(), 0);
        assert_eq!(seq.len(), 9);
        seq.unshift(10);
        assert_eq!(seq.len(), 10);
        assert_eq!(seq[0], 10);
    }

    #[test]
    fn test_mixed_end_growth_preserves_order() {
        let mut seq: Sequence<i32> = Sequence::new();
        for i in 0..64 {
            if i % 2 == 0 {
                seq.push(i);
            } else {
                seq.unshift(i);
            }
        }
        assert_eq!(seq.len(), 64);
        assert_eq!(
            seq.head_slack() + seq.len() + seq.tail_slack(),
            seq.capacity()
        );
        // odd values descend toward the front, even values ascend at the back
        assert_eq!(seq[0], 63);
        assert_eq!(seq[31], 1);
        assert_eq!(seq[32], 0);
        assert_eq!(seq[63], 62);
    }

    #[test]
    fn test_empty_sequence_errors() {
        let mut seq: Sequence<i32> = Sequence::new();
        assert!(matches!(
            seq.pop(),
            Err(SequenceError::EmptyContainer { .. })
        ));
        assert!(matches!(
            seq.shift(),
            Err(SequenceError::EmptyContainer { .. })
        ));
        assert!(matches!(
            seq.reduce(|acc, x| acc + x),
            Err(SequenceError::EmptyContainer { .. })
        ));
    }

    #[test]
    fn test_auto_extend_write() {
        let mut seq: Sequence<i32> = Sequence::new();
        seq.set(99, 1).unwrap();
        assert_eq!(seq.len(), 100);
        assert_eq!(seq[99], 1);
        assert_eq!(seq[50], 0); // gap is default-filled
        *seq.at_mut(120).unwrap() = 7;
        assert_eq!(seq.len(), 121);
        assert_eq!(seq[120], 7);
    }

    #[test]
    fn test_auto_extend_disabled() {
        let mut seq: Sequence<i32> = Sequence::with_len(3).with_auto_extend(false);
        assert!(matches!(
            seq.set(3, 1),
            Err(SequenceError::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert_eq!(seq.len(), 3);
        seq.set(2, 9).unwrap();
        assert_eq!(seq[2], 9);
    }

    #[test]
    fn test_reads_never_extend() {
        let mut seq: Sequence<i32> = Sequence::with_len(3);
        assert_eq!(seq.get(5), None);
        assert!(matches!(
            seq.at(5),
            Err(SequenceError::IndexOutOfBounds { index: 5, len: 3 })
        ));
        assert_eq!(seq.get_mut(5), None);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_index_of_and_last_index_of() {
        let seq: Sequence<i32> = Sequence::from(&[3, 1, 4, 1, 5][..]);
        assert_eq!(seq.index_of(&1), Some(1));
        assert_eq!(seq.last_index_of(&1), Some(3));
        assert_eq!(seq.index_of(&9), None);
    }

    #[test]
    fn test_reverse_is_involution() {
        let mut seq = fixture();
        let original = seq.clone();
        seq.reverse();
        assert_eq!(seq[0], 9);
        assert_eq!(seq[9], 0);
        seq.reverse();
        assert_eq!(seq, original);
    }

    #[test]
    fn test_sort_default_and_comparator() {
        let mut seq: Sequence<i32> = Sequence::from(&[3, 1, 4, 1, 5, 9, 2, 6][..]);
        seq.sort();
        assert_eq!(seq.as_slice(), &[1, 1, 2, 3, 4, 5, 6, 9]);
        seq.sort_by(|a, b| b.cmp(a));
        assert_eq!(seq.as_slice(), &[9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_slice_scenarios() {
        let seq = fixture();

        assert_eq!(seq.slice_from(5).as_slice(), &[5, 6, 7, 8, 9]);
        assert_eq!(seq.slice_from(-3).as_slice(), &[7, 8, 9]);
        assert_eq!(seq.slice(1, -1).as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(seq.slice(-7, 7).as_slice(), &[3, 4, 5, 6]);
        assert!(seq.slice(6, 5).is_empty());
        assert!(seq.slice(-1, 1).is_empty());

        // out-of-range indices yield empty rather than failing
        assert!(seq.slice_from(10).is_empty());
        assert!(seq.slice_from(-11).is_empty());
        assert!(seq.slice(0, 10).is_empty());
        assert!(seq.slice(0, -11).is_empty());

        // the source is untouched
        assert_eq!(seq, fixture());
    }

    #[test]
    fn test_slice_of_empty_is_empty() {
        let seq: Sequence<i32> = Sequence::new();
        assert!(seq.slice_from(0).is_empty());
        assert!(seq.slice(-1, 1).is_empty());
    }

    #[test]
    fn test_for_each_mutates_in_place() {
        let mut seq: Sequence<i32> = Sequence::with_len(4);
        seq.for_each(|item| *item += 2);
        assert_eq!(seq.as_slice(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_map_elementwise() {
        let seq = fixture();
        let doubled = seq.map(|x| x * 2);
        assert_eq!(doubled.len(), seq.len());
        for i in 0..seq.len() {
            assert_eq!(doubled[i], seq[i] * 2);
        }
        // element type may change
        let labels = seq.map(|x| format!("#{x}"));
        assert_eq!(labels[0], "#0");
        assert_eq!(labels[9], "#9");
    }

    #[test]
    fn test_filter_preserves_order() {
        let seq = fixture();
        let big = seq.filter(|&x| x > 5);
        assert_eq!(big.as_slice(), &[6, 7, 8, 9]);
        assert!(big.len() <= seq.len());
        assert_eq!(seq.len(), 10);
    }

    #[test]
    fn test_every_and_some() {
        let seq = fixture();
        assert!(seq.every(|&x| x >= 0));
        assert!(!seq.every(|&x| x != 5));
        assert!(seq.some(|&x| x == 8));
        assert!(!seq.some(|&x| x == 11));
    }

    #[test]
    fn test_reduce_forms() {
        let seq = fixture();
        assert_eq!(seq.reduce(|acc, x| acc + x).unwrap(), 45);
        assert_eq!(seq.reduce_with(|acc, x| acc + x, 0, 0), 45);
        assert_eq!(seq.reduce_with(|acc, x| acc + x, 100, 5), 100 + 5 + 6 + 7 + 8 + 9);
        // start index past the end folds nothing
        assert_eq!(seq.reduce_with(|acc, x| acc + x, 1, 50), 1);
        let single: Sequence<i32> = Sequence::from(&[42][..]);
        assert_eq!(single.reduce(|acc, x| acc + x).unwrap(), 42);
    }

    #[test]
    fn test_clone_is_deep_copy() {
        let mut seq = fixture();
        let copy = seq.clone();
        seq.for_each(|item| *item = -1);
        assert_eq!(copy, fixture());
        assert!(seq.every(|&x| x == -1));
    }

    #[test]
    fn test_derived_sequences_keep_config() {
        let seq = fixture().with_auto_extend(false);
        assert!(!seq.slice(0, 3).auto_extend());
        assert!(!seq.filter(|&x| x > 5).auto_extend());
        assert!(!seq.map(|x| x + 1).auto_extend());
    }

    #[test]
    fn test_into_iter_double_ended() {
        let seq: Sequence<i32> = (0..5).collect();
        let mut iter = seq.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        let rest: Vec<i32> = iter.collect();
        assert_eq!(rest, vec![1, 2, 3]);
    }

    #[test]
    fn test_extend_and_comparisons() {
        let mut seq: Sequence<i32> = Sequence::new();
        seq.extend([1, 2, 3]);
        let other: Sequence<i32> = (1..=3).collect();
        assert_eq!(seq, other);
        assert!(seq < (2..4).collect::<Sequence<i32>>());
    }

    #[test]
    fn test_drop_releases_each_element_once() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Dropper(Rc<RefCell<i32>>);
        impl Drop for Dropper {
            fn drop(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }

        let counter = Rc::new(RefCell::new(0));
        {
            let mut seq: Sequence<Dropper> = Sequence::new();
            for _ in 0..5 {
                seq.push(Dropper(counter.clone()));
            }
            seq.shift().unwrap(); // moved out, dropped immediately
            assert_eq!(*counter.borrow(), 1);
        }
        assert_eq!(*counter.borrow(), 5);

        *counter.borrow_mut() = 0;
        {
            let mut seq: Sequence<Dropper> = Sequence::new();
            for _ in 0..4 {
                seq.unshift(Dropper(counter.clone()));
            }
            let mut iter = seq.into_iter();
            drop(iter.next());
            assert_eq!(*counter.borrow(), 1);
        } // unconsumed elements drop with the iterator
        assert_eq!(*counter.borrow(), 4);
    }
}
