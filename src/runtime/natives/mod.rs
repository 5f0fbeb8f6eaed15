use crate::runtime::interp::Interp;

mod core_ops;
mod helpers;
mod int_ops;
mod vect_ops;

/// Installs every native operation into a fresh interpreter.
pub fn install(interp: &mut Interp) {
    core_ops::install(interp);
    int_ops::install(interp);
    vect_ops::install(interp);
}

#[cfg(test)]
mod int_ops_test;
