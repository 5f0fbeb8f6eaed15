use crate::runtime::{
    func::Arg,
    interp::{Interp, RuntimeError},
    types::TypeId,
    value::Value,
};

use super::helpers::pop_int;

pub(super) fn int_add(interp: &mut Interp) -> Result<(), RuntimeError> {
    let y = pop_int(interp, "+");
    let x = pop_int(interp, "+");
    interp.stack.push(Value::Int(x + y));
    Ok(())
}

pub(super) fn int_sub(interp: &mut Interp) -> Result<(), RuntimeError> {
    let y = pop_int(interp, "-");
    let x = pop_int(interp, "-");
    interp.stack.push(Value::Int(x - y));
    Ok(())
}

pub(super) fn int_mul(interp: &mut Interp) -> Result<(), RuntimeError> {
    let y = pop_int(interp, "*");
    let x = pop_int(interp, "*");
    interp.stack.push(Value::Int(x * y));
    Ok(())
}

pub(super) fn install(interp: &mut Interp) {
    let int_pair = || vec![Arg::Type(TypeId::Int), Arg::Type(TypeId::Int)];
    interp.add_native("+", int_pair(), int_add);
    interp.add_native("-", int_pair(), int_sub);
    interp.add_native("*", int_pair(), int_mul);
}
