use std::rc::Rc;

use crate::runtime::{interp::Interp, value::Value, vector::Vector};

// Operand extraction for native operations. Dispatch has already
// matched operand types before a native runs, so a missing or mistyped
// operand here is a defect in the runtime, not a language-level error;
// these helpers abort instead of reporting.

pub(super) fn pop_operand(interp: &mut Interp, op: &str) -> Value {
    match interp.stack.pop() {
        Some(value) => value,
        None => panic!("{}: stack underflow", op),
    }
}

pub(super) fn pop_vect(interp: &mut Interp, op: &str) -> Rc<Vector> {
    match pop_operand(interp, op) {
        Value::Vect(v) => v,
        other => panic!("{}: expected Vect, got {}", op, other.type_name()),
    }
}

pub(super) fn pop_int(interp: &mut Interp, op: &str) -> i64 {
    match pop_operand(interp, op) {
        Value::Int(n) => n,
        other => panic!("{}: expected Int, got {}", op, other.type_name()),
    }
}
