//! [`Slot`] is the uniform handle a [`Signal`](`crate::Signal`) stores per listener.
//!
//! Slots are compared by *identity*: same variant, same function address and (for methods) same object address.
//! Behaviourally equivalent callables at different addresses are distinct slots.

use core::{
	fmt::{self, Debug, Formatter},
	marker::PhantomData,
	mem,
	ptr::NonNull,
};

/// Discriminant of a [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
	/// See [`Slot::Function`].
	Function,
	/// See [`Slot::Method`].
	Method,
}

/// A type-erased listener for argument type `A`.
///
/// `'a` bounds any object the slot borrows, so a [`Signal`](`crate::Signal`) holding this slot can't outlive that object.
pub enum Slot<'a, A> {
	/// A plain function pointer.
	Function(fn(A)),
	/// An object reference plus a method on that object's type.
	Method(MethodSlot<'a, A>),
}

impl<'a, A> Slot<'a, A> {
	/// Wraps a plain function.
	#[must_use]
	pub fn function(function: fn(A)) -> Self {
		Self::Function(function)
	}

	/// Binds `method` to `object`.
	///
	/// The slot borrows `object` but does not own it.
	#[must_use]
	pub fn method<T>(object: &'a T, method: fn(&T, A)) -> Self {
		Self::Method(MethodSlot::new(object, method))
	}

	/// Which variant this is.
	#[must_use]
	pub fn kind(&self) -> SlotKind {
		match self {
			Self::Function(_) => SlotKind::Function,
			Self::Method(_) => SlotKind::Method,
		}
	}

	/// Calls the wrapped function or method with `args`.
	pub fn invoke(&self, args: A) {
		match self {
			Self::Function(function) => function(args),
			Self::Method(method) => method.invoke(args),
		}
	}
}

impl<A> From<fn(A)> for Slot<'_, A> {
	fn from(function: fn(A)) -> Self {
		Self::Function(function)
	}
}

impl<'a, A> From<MethodSlot<'a, A>> for Slot<'a, A> {
	fn from(method: MethodSlot<'a, A>) -> Self {
		Self::Method(method)
	}
}

impl<A> Clone for Slot<'_, A> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<A> Copy for Slot<'_, A> {}

impl<A> PartialEq for Slot<'_, A> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Function(a), Self::Function(b)) => *a as *const () == *b as *const (),
			(Self::Method(a), Self::Method(b)) => a == b,
			_ => false,
		}
	}
}
impl<A> Eq for Slot<'_, A> {}

impl<A> Debug for Slot<'_, A> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Function(function) => f
				.debug_tuple("Function")
				.field(&(*function as *const ()))
				.finish(),
			Self::Method(method) => f.debug_tuple("Method").field(method).finish(),
		}
	}
}

/// An object address, a method address and a trampoline that restores the object's type.
///
/// Laid out like a one-entry callback table: the trampoline is only ever called with the data pointers it was created alongside.
pub struct MethodSlot<'a, A> {
	object: NonNull<()>,
	method: *const (),
	trampoline: unsafe fn(NonNull<()>, *const (), A),
	_object: PhantomData<&'a ()>,
}

impl<'a, A> MethodSlot<'a, A> {
	/// Binds `method` to `object`.
	#[must_use]
	pub fn new<T>(object: &'a T, method: fn(&T, A)) -> Self {
		Self {
			object: NonNull::from(object).cast(),
			method: method as *const (),
			trampoline: trampoline::<T, A>,
			_object: PhantomData,
		}
	}

	/// Address of the bound object.
	#[must_use]
	pub fn object_address(&self) -> *const () {
		self.object.as_ptr()
	}

	/// Address of the bound method.
	#[must_use]
	pub fn method_address(&self) -> *const () {
		self.method
	}

	/// Calls the method on the bound object.
	pub fn invoke(&self, args: A) {
		// SAFETY: `trampoline` was instantiated for the same `T` that `object` and `method` were erased from,
		// and `'a` keeps `object` alive.
		unsafe { (self.trampoline)(self.object, self.method, args) }
	}
}

/// # Safety
///
/// `object` **must** point to a live `T` and `method` **must** have been erased from a `fn(&T, A)`.
unsafe fn trampoline<T, A>(object: NonNull<()>, method: *const (), args: A) {
	unsafe {
		let method = mem::transmute::<*const (), fn(&T, A)>(method);
		method(object.cast::<T>().as_ref(), args);
	}
}

impl<A> Clone for MethodSlot<'_, A> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<A> Copy for MethodSlot<'_, A> {}

impl<A> PartialEq for MethodSlot<'_, A> {
	fn eq(&self, other: &Self) -> bool {
		self.object == other.object && self.method == other.method
	}
}
impl<A> Eq for MethodSlot<'_, A> {}

impl<A> Debug for MethodSlot<'_, A> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("MethodSlot")
			.field("object", &self.object)
			.field("method", &self.method)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use core::cell::Cell;

	use super::{Slot, SlotKind};

	struct Counter(Cell<u32>);

	impl Counter {
		fn add(&self, amount: u32) {
			self.0.set(self.0.get() + amount);
		}

		fn subtract(&self, amount: u32) {
			self.0.set(self.0.get() - amount);
		}
	}

	fn ignore(_: u32) {}

	#[test]
	fn kinds() {
		let counter = Counter(Cell::new(0));
		assert_eq!(Slot::function(ignore).kind(), SlotKind::Function);
		assert_eq!(Slot::method(&counter, Counter::add).kind(), SlotKind::Method);
	}

	#[test]
	fn method_invocation_reaches_object() {
		let counter = Counter(Cell::new(10));
		Slot::method(&counter, Counter::add).invoke(5);
		Slot::method(&counter, Counter::subtract).invoke(3);
		assert_eq!(counter.0.get(), 12);
	}

	#[test]
	fn method_identity() {
		let a = Counter(Cell::new(0));
		let b = Counter(Cell::new(0));

		assert_eq!(
			Slot::method(&a, Counter::add),
			Slot::method(&a, Counter::add)
		);
		assert_ne!(
			Slot::method(&a, Counter::add),
			Slot::method(&b, Counter::add)
		);
		assert_ne!(
			Slot::method(&a, Counter::add),
			Slot::method(&a, Counter::subtract)
		);
	}

	#[test]
	fn copies_are_equal() {
		let counter = Counter(Cell::new(0));
		let slot = Slot::method(&counter, Counter::add);
		let copy = slot;
		assert_eq!(slot, copy);
		assert_eq!(Slot::function(ignore), Slot::from(ignore as fn(u32)));
	}
}
