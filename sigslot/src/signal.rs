use core::{
	fmt::{self, Debug, Formatter},
	ops::{AddAssign, SubAssign},
};

use crate::{slot::Slot, slot_vec::SlotVec, CapacityError};

/// A fixed-capacity list of [`Slot`]s for argument type `A`, fired in attachment order.
///
/// Signatures with several parameters use a tuple as `A`.
///
/// # Capacity
///
/// At most `N` slots are attached at any time. **[`.attach(…)`](`Signal::attach`) on a full signal evicts the oldest slot**,
/// so a full signal keeps the `N` most recent attachments. Use [`.try_attach(…)`](`Signal::try_attach`) to be refused instead.
/// With `N == 0`, attachments are discarded.
///
/// # Re-entrancy
///
/// [`.fire(…)`](`Signal::fire`) borrows the signal shared while attaching and detaching borrow it exclusively,
/// so slots can't change the list they are called from. A signal behind a [`RefCell`](`core::cell::RefCell`)
/// refuses [`try_borrow_mut`](`core::cell::RefCell::try_borrow_mut`) for the duration of a fan-out.
///
/// # Lifetimes
///
/// Objects bound through [`Slot::method`] must outlive the signal:
///
/// ```compile_fail
/// use sigslot::Signal;
///
/// struct Listener;
/// impl Listener {
/// 	fn on_value(&self, _: u8) {}
/// }
///
/// let mut signal = Signal::<u8, 1>::new();
/// {
/// 	let listener = Listener;
/// 	signal.attach_method(&listener, Listener::on_value);
/// }
/// signal.fire(1);
/// ```
pub struct Signal<'a, A, const N: usize = 1> {
	slots: SlotVec<Slot<'a, A>, N>,
}

impl<'a, A, const N: usize> Signal<'a, A, N> {
	/// The maximum number of attached slots.
	pub const CAPACITY: usize = N;

	/// Creates a signal without slots. Usable in `const` contexts.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			slots: SlotVec::new(),
		}
	}

	/// Attaches `function` (see [`.attach_slot(…)`](`Signal::attach_slot`)).
	pub fn attach(&mut self, function: fn(A)) -> &mut Self {
		self.attach_slot(Slot::Function(function))
	}

	/// Binds `method` to `object` and attaches it (see [`.attach_slot(…)`](`Signal::attach_slot`)).
	pub fn attach_method<T>(&mut self, object: &'a T, method: fn(&T, A)) -> &mut Self {
		self.attach_slot(Slot::method(object, method))
	}

	/// Appends `slot`, evicting the oldest attached slot first if the signal is full.
	///
	/// Attaching an equal slot again stores a second copy, which is then also called twice.
	pub fn attach_slot(&mut self, slot: Slot<'a, A>) -> &mut Self {
		#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
		let evicted = self.slots.push_evicting(slot);
		#[cfg(feature = "tracing")]
		log_eviction(N, evicted.as_ref());
		self
	}

	/// Appends `slot` only if there is room.
	///
	/// # Errors
	///
	/// Iff the signal is full. The signal is left unchanged and the error carries `slot`.
	pub fn try_attach(
		&mut self,
		slot: Slot<'a, A>,
	) -> Result<&mut Self, CapacityError<Slot<'a, A>>> {
		match self.slots.try_push(slot) {
			Ok(()) => Ok(self),
			Err(slot) => {
				#[cfg(feature = "tracing")]
				tracing::debug!(capacity = N, ?slot, "signal full, rejected slot");
				Err(CapacityError::new(slot, N))
			}
		}
	}

	/// Detaches every copy of `function` (see [`.detach_slot(…)`](`Signal::detach_slot`)).
	pub fn detach(&mut self, function: fn(A)) -> &mut Self {
		self.detach_slot(Slot::Function(function))
	}

	/// Detaches every copy of `method` bound to `object` (see [`.detach_slot(…)`](`Signal::detach_slot`)).
	pub fn detach_method<T>(&mut self, object: &'a T, method: fn(&T, A)) -> &mut Self {
		self.detach_slot(Slot::method(object, method))
	}

	/// Removes all attached slots equal to `slot`, scanning from the most recent one.
	///
	/// The remaining slots keep their order. Detaching a slot that isn't attached does nothing.
	pub fn detach_slot(&mut self, slot: Slot<'a, A>) -> &mut Self {
		#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
		let removed = self.slots.retain_from_back(|attached| *attached != slot);
		#[cfg(feature = "tracing")]
		tracing::trace!(removed, ?slot, "detached slot");
		self
	}

	/// Detaches all slots.
	pub fn clear(&mut self) -> &mut Self {
		self.slots.clear();
		self
	}

	/// Calls every attached slot with `args`, oldest first.
	///
	/// Each slot receives a clone, except for the last one which receives `args` itself.
	pub fn fire(&self, args: A)
	where
		A: Clone,
	{
		if let Some((last, rest)) = self.slots.split_last() {
			for slot in rest {
				slot.invoke(args.clone());
			}
			last.invoke(args);
		}
	}

	/// Alias of [`.fire(…)`](`Signal::fire`).
	pub fn call(&self, args: A)
	where
		A: Clone,
	{
		self.fire(args);
	}

	/// Whether a slot equal to `slot` is attached.
	#[must_use]
	pub fn contains(&self, slot: &Slot<'a, A>) -> bool {
		self.slots.contains(slot)
	}

	/// The attached slots in firing order.
	#[must_use]
	pub fn slots(&self) -> &[Slot<'a, A>] {
		self.slots.as_slice()
	}

	/// Number of attached slots.
	#[must_use]
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Whether no slots are attached.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Whether the next [`.attach(…)`](`Signal::attach`) evicts.
	#[must_use]
	pub fn is_full(&self) -> bool {
		self.slots.is_full()
	}

	/// Same as [`Signal::CAPACITY`].
	#[must_use]
	pub fn capacity(&self) -> usize {
		N
	}
}

#[cfg(feature = "tracing")]
fn log_eviction<A>(capacity: usize, evicted: Option<&Slot<'_, A>>) {
	if let Some(evicted) = evicted {
		tracing::debug!(capacity, ?evicted, "signal full, evicted oldest slot");
	}
}

impl<A, const N: usize> Default for Signal<'_, A, N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A, const N: usize> Clone for Signal<'_, A, N> {
	fn clone(&self) -> Self {
		Self {
			slots: self.slots.clone(),
		}
	}
}

impl<A, const N: usize> Debug for Signal<'_, A, N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("capacity", &N)
			.field("slots", &self.slots)
			.finish()
	}
}

impl<'a, A, const N: usize> AddAssign<Slot<'a, A>> for Signal<'a, A, N> {
	fn add_assign(&mut self, slot: Slot<'a, A>) {
		self.attach_slot(slot);
	}
}

impl<A, const N: usize> AddAssign<fn(A)> for Signal<'_, A, N> {
	fn add_assign(&mut self, function: fn(A)) {
		self.attach(function);
	}
}

impl<'a, A, const N: usize> SubAssign<Slot<'a, A>> for Signal<'a, A, N> {
	fn sub_assign(&mut self, slot: Slot<'a, A>) {
		self.detach_slot(slot);
	}
}

impl<A, const N: usize> SubAssign<fn(A)> for Signal<'_, A, N> {
	fn sub_assign(&mut self, function: fn(A)) {
		self.detach(function);
	}
}

/// Attaches in iteration order, evicting as [`.attach_slot(…)`](`Signal::attach_slot`) does.
impl<'a, A, const N: usize> Extend<Slot<'a, A>> for Signal<'a, A, N> {
	fn extend<I: IntoIterator<Item = Slot<'a, A>>>(&mut self, iter: I) {
		for slot in iter {
			self.attach_slot(slot);
		}
	}
}

impl<'a, A, const N: usize> FromIterator<Slot<'a, A>> for Signal<'a, A, N> {
	fn from_iter<I: IntoIterator<Item = Slot<'a, A>>>(iter: I) -> Self {
		let mut signal = Self::new();
		signal.extend(iter);
		signal
	}
}
