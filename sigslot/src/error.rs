use core::fmt::Debug;

use thiserror::Error;

/// Returned by [`Signal::try_attach`](`crate::Signal::try_attach`) when the signal is full.
///
/// The signal is left unchanged. The rejected slot can be recovered with [`.into_inner()`](`CapacityError::into_inner`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("signal is full (capacity {capacity})")]
pub struct CapacityError<T: Debug> {
	rejected: T,
	capacity: usize,
}

impl<T: Debug> CapacityError<T> {
	pub(crate) fn new(rejected: T, capacity: usize) -> Self {
		Self { rejected, capacity }
	}

	/// The capacity of the signal that refused the attachment.
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// The value that was not attached.
	#[must_use]
	pub fn rejected(&self) -> &T {
		&self.rejected
	}

	/// Takes back the value that was not attached.
	#[must_use]
	pub fn into_inner(self) -> T {
		self.rejected
	}
}
