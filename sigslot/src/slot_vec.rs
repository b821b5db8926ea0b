//! Inline, fixed-capacity and order-preserving storage.
//!
//! [`SlotVec`] never allocates. Elements `0..len` are always initialised and contiguous: every removal shifts
//! the following elements towards the front before returning.

use core::{
	fmt::{self, Debug, Formatter},
	mem::{self, MaybeUninit},
	ops::Deref,
	ptr, slice,
};

/// A vector with capacity `N`, stored in place.
pub struct SlotVec<T, const N: usize> {
	items: [MaybeUninit<T>; N],
	len: usize,
}

impl<T, const N: usize> SlotVec<T, N> {
	/// The fixed capacity.
	pub const CAPACITY: usize = N;

	/// Creates an empty instance. Usable in `const` contexts.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			items: [const { MaybeUninit::uninit() }; N],
			len: 0,
		}
	}

	/// Number of stored elements.
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Whether there are no elements.
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Whether another push would have to evict (or be rejected).
	#[must_use]
	pub const fn is_full(&self) -> bool {
		self.len == N
	}

	/// Same as [`SlotVec::CAPACITY`].
	#[must_use]
	pub const fn capacity(&self) -> usize {
		N
	}

	/// The stored elements, oldest first.
	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		// SAFETY: `0..len` is initialised.
		unsafe { slice::from_raw_parts(self.items.as_ptr().cast::<T>(), self.len) }
	}

	fn as_mut_ptr(&mut self) -> *mut T {
		self.items.as_mut_ptr().cast::<T>()
	}

	/// Appends `value`, or hands it back if the storage is full.
	///
	/// # Errors
	///
	/// Iff [`.is_full()`](`SlotVec::is_full`).
	pub fn try_push(&mut self, value: T) -> Result<(), T> {
		if self.is_full() {
			return Err(value);
		}
		self.items[self.len].write(value);
		self.len += 1;
		Ok(())
	}

	/// Appends `value`, first moving out the oldest element if the storage is full.
	///
	/// Returns the displaced element. With `N == 0` there is nothing to displace, so `value` itself is returned.
	pub fn push_evicting(&mut self, value: T) -> Option<T> {
		if N == 0 {
			return Some(value);
		}

		let evicted = if self.is_full() {
			let base = self.as_mut_ptr();
			// SAFETY: `len == N > 0`, so index 0 is initialised. After the read it is logically uninitialised
			// and overwritten by the shift, which moves `1..N` to `0..N - 1`.
			let front = unsafe {
				let front = ptr::read(base);
				ptr::copy(base.add(1), base, N - 1);
				front
			};
			self.len -= 1;
			Some(front)
		} else {
			None
		};

		self.items[self.len].write(value);
		self.len += 1;
		evicted
	}

	/// Moves out the element at `index`, shifting everything after it one position towards the front.
	///
	/// Returns [`None`] iff `index` is out of bounds.
	pub fn remove(&mut self, index: usize) -> Option<T> {
		if index >= self.len {
			return None;
		}

		let tail = self.len - index - 1;
		let base = self.as_mut_ptr();
		// SAFETY: `index < len`. The shifted range `index + 1..len` is initialised.
		let removed = unsafe {
			let removed = ptr::read(base.add(index));
			ptr::copy(base.add(index + 1), base.add(index), tail);
			removed
		};
		self.len -= 1;
		Some(removed)
	}

	/// Visits elements from the most recently pushed to the oldest and drops each one for which `keep` returns `false`.
	///
	/// Returns how many elements were dropped.
	pub fn retain_from_back(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
		let mut removed = 0;
		for index in (0..self.len).rev() {
			if !keep(&self.as_slice()[index]) {
				drop(self.remove(index));
				removed += 1;
			}
		}
		removed
	}

	/// Drops all elements.
	pub fn clear(&mut self) {
		// Length first, so a panicking destructor leaks instead of double-dropping.
		let len = mem::replace(&mut self.len, 0);
		// SAFETY: `0..len` was initialised and is now outside the tracked range.
		unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len)) }
	}
}

impl<T, const N: usize> Drop for SlotVec<T, N> {
	fn drop(&mut self) {
		self.clear();
	}
}

impl<T, const N: usize> Default for SlotVec<T, N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, const N: usize> Deref for SlotVec<T, N> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T: Clone, const N: usize> Clone for SlotVec<T, N> {
	fn clone(&self) -> Self {
		let mut clone = Self::new();
		for item in self.iter() {
			// `clone.len < self.len <= N`
			clone.items[clone.len].write(item.clone());
			clone.len += 1;
		}
		clone
	}
}

impl<T: Debug, const N: usize> Debug for SlotVec<T, N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}
