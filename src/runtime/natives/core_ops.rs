use crate::runtime::{
    func::Arg,
    interp::{Interp, RuntimeError},
    types::TypeId,
    value::Value,
};

use super::helpers::pop_operand;

pub(super) fn core_dup(interp: &mut Interp) -> Result<(), RuntimeError> {
    let top = match interp.stack.peek(0) {
        Some(value) => value.share(),
        None => panic!("dup: stack underflow"),
    };
    interp.stack.push(top);
    Ok(())
}

pub(super) fn core_zap(interp: &mut Interp) -> Result<(), RuntimeError> {
    pop_operand(interp, "zap");
    Ok(())
}

pub(super) fn core_swap(interp: &mut Interp) -> Result<(), RuntimeError> {
    let y = pop_operand(interp, "swap");
    let x = pop_operand(interp, "swap");
    interp.stack.push(y);
    interp.stack.push(x);
    Ok(())
}

/// clone(value) - Pop a value, push an independent deep copy
pub(super) fn core_clone(interp: &mut Interp) -> Result<(), RuntimeError> {
    let value = pop_operand(interp, "clone");
    interp.stack.push(value.deep_clone());
    Ok(())
}

pub(super) fn core_print(interp: &mut Interp) -> Result<(), RuntimeError> {
    let value = pop_operand(interp, "print");
    match &value {
        Value::Str(s) => println!("{}", s), // Raw string
        other => println!("{}", other),
    }
    Ok(())
}

pub(super) fn core_call(interp: &mut Interp) -> Result<(), RuntimeError> {
    let callee = pop_operand(interp, "call");
    interp.call(&callee)
}

pub(super) fn core_eqval(interp: &mut Interp) -> Result<(), RuntimeError> {
    let y = pop_operand(interp, "=");
    let x = pop_operand(interp, "=");
    interp.stack.push(Value::Bool(x.eq_value(&y)));
    Ok(())
}

pub(super) fn core_equid(interp: &mut Interp) -> Result<(), RuntimeError> {
    let y = pop_operand(interp, "==");
    let x = pop_operand(interp, "==");
    interp.stack.push(Value::Bool(x.eq_identity(&y)));
    Ok(())
}

pub(super) fn core_ok(interp: &mut Interp) -> Result<(), RuntimeError> {
    let value = pop_operand(interp, "ok?");
    interp.stack.push(Value::Bool(value.is_truthy()));
    Ok(())
}

pub(super) fn install(interp: &mut Interp) {
    let any = || Arg::Type(TypeId::Any);
    interp.add_native("dup", vec![any()], core_dup);
    interp.add_native("zap", vec![any()], core_zap);
    interp.add_native("swap", vec![any(), any()], core_swap);
    interp.add_native("clone", vec![any()], core_clone);
    interp.add_native("print", vec![any()], core_print);
    interp.add_native("call", vec![any()], core_call);
    interp.add_native("=", vec![any(), any()], core_eqval);
    interp.add_native("==", vec![any(), any()], core_equid);
    interp.add_native("ok?", vec![any()], core_ok);
}
