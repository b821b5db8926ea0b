use std::cell::Cell;

use sigslot::{Signal, Slot, SlotKind};

use _validator::{Listener, Validator};

#[test]
fn detach_by_object_identity() {
	let v = &Validator::new();
	let obj1 = Listener { name: "obj1", log: v };
	let obj2 = Listener { name: "obj2", log: v };

	let mut signal = Signal::<i32, 2>::new();
	signal
		.attach_method(&obj1, Listener::on_value)
		.attach_method(&obj2, Listener::on_value);

	signal.detach_method(&obj1, Listener::on_value);
	assert_eq!(signal.len(), 1);

	signal.fire(1);
	v.expect([("obj2", 1)]);
}

#[test]
fn detach_by_method_identity() {
	let v = &Validator::new();
	let obj = Listener { name: "obj", log: v };

	let mut signal = Signal::<i32, 2>::new();
	signal
		.attach_method(&obj, Listener::on_value)
		.attach_method(&obj, Listener::on_value_doubled);

	signal.detach_method(&obj, Listener::on_value);
	signal.fire(3);
	v.expect([("obj", 6)]);
}

#[test]
fn detach_removes_all_duplicates() {
	static V: Validator<i32> = Validator::new();
	fn on_value(value: i32) {
		V.push(value);
	}

	let mut signal = Signal::<i32, 2>::new();
	signal.attach(on_value).attach(on_value);

	signal.detach(on_value);
	assert!(signal.is_empty());

	signal.fire(9);
	V.expect_nothing();
}

#[test]
fn detach_compacts_and_keeps_order() {
	static V: Validator<&str> = Validator::new();
	fn a(_: ()) {
		V.push("a");
	}
	fn b(_: ()) {
		V.push("b");
	}
	fn c(_: ()) {
		V.push("c");
	}

	let mut signal = Signal::<(), 5>::new();
	signal.attach(a).attach(b).attach(a).attach(c).attach(a);

	signal.detach(a);
	assert_eq!(signal.slots(), [Slot::function(b), Slot::function(c)]);

	// Freed slots are reusable at the end.
	signal.attach(a);
	signal.fire(());
	V.expect(["b", "c", "a"]);
}

#[test]
fn detaching_absent_slot_is_a_no_op() {
	fn attached(_: u8) {}
	fn never_attached(_: u8) {
		unreachable!();
	}

	let mut signal = Signal::<u8, 2>::new();
	signal.attach(attached);

	signal.detach(never_attached);
	assert_eq!(signal.slots(), [Slot::function(attached)]);

	let empty = &mut Signal::<u8, 2>::new();
	empty.detach(attached);
	assert!(empty.is_empty());
}

static CALLS: Validator<(&str, u32)> = Validator::new();

fn record(value: u32) {
	CALLS.push(("function", value));
}

struct Recorder;

impl Recorder {
	fn record(&self, value: u32) {
		CALLS.push(("method", value));
	}
}

#[test]
fn functions_never_equal_methods() {
	let recorder = Recorder;
	let function = Slot::function(record);
	let method = Slot::method(&recorder, Recorder::record);

	assert_eq!(function.kind(), SlotKind::Function);
	assert_eq!(method.kind(), SlotKind::Method);
	assert_ne!(function, method);

	let mut signal = Signal::<u32, 2>::new();
	signal.attach_slot(function).attach_slot(method);

	signal.detach(record);
	assert_eq!(signal.slots(), [method]);
	signal.fire(1);

	signal.attach(record);
	signal.detach_method(&recorder, Recorder::record);
	assert_eq!(signal.slots(), [function]);
	signal.fire(2);

	CALLS.expect([("method", 1), ("function", 2)]);
}

#[test]
fn shared_state_objects_are_told_apart() {
	struct Total(Cell<i32>);
	impl Total {
		fn add(&self, value: i32) {
			self.0.set(self.0.get() + value);
		}
	}

	let first = Total(Cell::new(0));
	let second = Total(Cell::new(0));

	let mut signal = Signal::<i32, 3>::new();
	signal
		.attach_method(&first, Total::add)
		.attach_method(&second, Total::add)
		.attach_method(&first, Total::add);

	signal.detach_method(&first, Total::add);
	signal.fire(5);
	assert_eq!(first.0.get(), 0);
	assert_eq!(second.0.get(), 5);
}
