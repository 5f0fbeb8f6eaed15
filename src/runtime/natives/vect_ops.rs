use crate::runtime::{
    func::Arg,
    interp::{Interp, RuntimeError},
    types::TypeId,
    value::Value,
    vector::Vector,
};

use super::helpers::{pop_operand, pop_vect};

pub(super) fn vect_new(interp: &mut Interp) -> Result<(), RuntimeError> {
    interp.stack.push(Value::Vect(Vector::new()));
    Ok(())
}

pub(super) fn vect_len(interp: &mut Interp) -> Result<(), RuntimeError> {
    let vect = pop_vect(interp, "len");
    interp.stack.push(Value::Int(vect.len() as i64));
    Ok(())
}

pub(super) fn vect_push(interp: &mut Interp) -> Result<(), RuntimeError> {
    let value = pop_operand(interp, "push");
    let vect = pop_vect(interp, "push");
    vect.push(value);
    Ok(())
}

pub(super) fn vect_pop(interp: &mut Interp) -> Result<(), RuntimeError> {
    let vect = pop_vect(interp, "pop");
    let value = vect.pop();
    interp.stack.push(value);
    Ok(())
}

/// for(vect, action) - Invoke the action once per element
///
/// Each element is pushed as a share before the action runs, in
/// left-to-right order. A failing action stops iteration and propagates;
/// elements consumed by earlier iterations are not rolled back.
pub(super) fn vect_for(interp: &mut Interp) -> Result<(), RuntimeError> {
    let act = pop_operand(interp, "for");
    let vect = pop_vect(interp, "for");

    let count = vect.len();
    for i in 0..count {
        interp.stack.push(vect.get(i));
        interp.call(&act)?;
    }
    Ok(())
}

/// map(vect, action) - Replace each element with the action's result
///
/// Elements are replaced in place, in left-to-right order; the old
/// element is released before its slot is overwritten. The action must
/// leave exactly one result on the stack. On success the same vector is
/// pushed back, identity and reference count intact; on failure it is
/// not pushed, and elements already replaced stay replaced.
pub(super) fn vect_map(interp: &mut Interp) -> Result<(), RuntimeError> {
    let act = pop_operand(interp, "map");
    let vect = pop_vect(interp, "map");

    let count = vect.len();
    for i in 0..count {
        interp.stack.push(vect.get(i));
        interp.call(&act)?;
        let Some(out) = interp.stack.pop() else {
            return Err(interp.error("Missing result"));
        };
        vect.replace(i, out);
    }
    interp.stack.push(Value::Vect(vect));
    Ok(())
}

pub(super) fn install(interp: &mut Interp) {
    interp.add_native("vect", vec![], vect_new);
    interp.add_native("len", vec![Arg::Type(TypeId::Vect)], vect_len);
    interp.add_native(
        "push",
        vec![Arg::Type(TypeId::Vect), Arg::Type(TypeId::Any)],
        vect_push,
    );
    interp.add_native("pop", vec![Arg::Type(TypeId::Vect)], vect_pop);
    interp.add_native(
        "for",
        vec![Arg::Type(TypeId::Vect), Arg::Type(TypeId::Any)],
        vect_for,
    );
    interp.add_native(
        "map",
        vec![Arg::Type(TypeId::Vect), Arg::Type(TypeId::Any)],
        vect_map,
    );
}
