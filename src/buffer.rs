//! Owned storage block with slack at both ends.
//!
//! [`SlackBuffer`] keeps its live elements contiguous in the middle of a
//! `Box<[MaybeUninit<T>]>`: the unused capacity before the first live
//! element absorbs front insertions and the capacity after the last absorbs
//! back insertions, so growth at either end is amortized O(1).  When the
//! slack at the touched end runs out, the buffer reallocates to at least
//! double the previous capacity and re-centers the live range, handing
//! fresh slack to both ends.  A plain append-only growth policy would make
//! front insertion O(n) on every call.

use core::mem::{ManuallyDrop, MaybeUninit};
use core::ptr;

/// Contiguous storage with head and tail slack.
///
/// Live elements occupy `[head, head + len)`.  Slots outside that range are
/// uninitialized, or stale after a pop, and must never be read.
pub(crate) struct SlackBuffer<T> {
    storage: Box<[MaybeUninit<T>]>,
    head: usize,
    len: usize,
}

impl<T> SlackBuffer<T> {
    const MIN_CAPACITY: usize = 4;

    pub(crate) fn new() -> Self {
        Self {
            storage: Box::new_uninit_slice(0),
            head: 0,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Box::new_uninit_slice(capacity),
            head: 0,
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Unused slots before the first live element.
    #[inline(always)]
    pub(crate) fn head_slack(&self) -> usize {
        self.head
    }

    /// Unused slots after the last live element.
    #[inline(always)]
    pub(crate) fn tail_slack(&self) -> usize {
        self.capacity() - self.head - self.len
    }

    #[inline(always)]
    fn ptr(&self) -> *const T {
        self.storage.as_ptr() as *const T
    }

    #[inline(always)]
    fn mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr() as *mut T
    }

    /// View of the live range `[head, head + len)`.
    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.ptr().add(self.head), self.len) }
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        let head = self.head;
        let len = self.len;
        unsafe { core::slice::from_raw_parts_mut(self.mut_ptr().add(head), len) }
    }

    #[inline(always)]
    pub(crate) fn push_back(&mut self, item: T) {
        if self.tail_slack() == 0 {
            self.grow(1);
        }
        let idx = self.head + self.len;
        unsafe {
            ptr::write(self.mut_ptr().add(idx), item);
        }
        self.len += 1;
    }

    #[inline(always)]
    pub(crate) fn push_front(&mut self, item: T) {
        if self.head == 0 {
            self.grow(1);
        }
        self.head -= 1;
        let head = self.head;
        unsafe {
            ptr::write(self.mut_ptr().add(head), item);
        }
        self.len += 1;
    }

    #[inline(always)]
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // Moves the element out; the vacated slot becomes tail slack.
            unsafe { Some(ptr::read(self.ptr().add(self.head + self.len))) }
        }
    }

    #[inline(always)]
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            let val = unsafe { ptr::read(self.ptr().add(self.head)) };
            self.head += 1;
            self.len -= 1;
            Some(val)
        }
    }

    /// Ensures room for at least `additional` more elements at the tail.
    pub(crate) fn reserve_back(&mut self, additional: usize) {
        if self.tail_slack() < additional {
            self.grow(additional);
        }
    }

    /// Cold path: reallocates to at least double the previous capacity and
    /// re-centers the live range so both ends come out with fresh slack.
    #[inline(never)]
    fn grow(&mut self, extra: usize) {
        let new_cap = (self.capacity() * 2)
            .max((self.len + extra) * 2)
            .max(Self::MIN_CAPACITY);
        let mut fresh: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(new_cap);
        let new_head = (new_cap - self.len) / 2;
        unsafe {
            ptr::copy_nonoverlapping(
                self.ptr().add(self.head),
                fresh.as_mut_ptr().add(new_head) as *mut T,
                self.len,
            );
        }
        // The old elements were moved out bitwise; replacing the box frees
        // raw memory only.
        self.storage = fresh;
        self.head = new_head;
    }

    /// Releases the storage to the caller without dropping live elements.
    ///
    /// Returns `(storage, head, len)`.  The caller takes over ownership of
    /// the live range.
    pub(crate) fn into_raw_parts(self) -> (Box<[MaybeUninit<T>]>, usize, usize) {
        let this = ManuallyDrop::new(self);
        let storage = unsafe { ptr::read(&this.storage) };
        (storage, this.head, this.len)
    }
}

impl<T> Drop for SlackBuffer<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
        }
    }
}
