use crate::runtime::{NativeFn, interp::Interp, value::Value};

use super::int_ops::{int_add, int_mul, int_sub};

fn run(op: NativeFn, x: i64, y: i64) -> Value {
    let mut interp = Interp::new();
    interp.stack.push(Value::Int(x));
    interp.stack.push(Value::Int(y));
    op(&mut interp).unwrap();
    let result = interp.stack.pop().expect("result");
    assert!(interp.stack.is_empty());
    result
}

#[test]
fn arithmetic_consumes_both_operands() {
    assert_eq!(run(int_add, 2, 3), Value::Int(5));
    assert_eq!(run(int_sub, 2, 3), Value::Int(-1));
    assert_eq!(run(int_mul, 4, 3), Value::Int(12));
}

#[test]
fn operand_order_is_left_deepest() {
    assert_eq!(run(int_sub, 10, 4), Value::Int(6));
}
