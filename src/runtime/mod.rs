//! Runtime core: values, the shared vector, and multiple dispatch.
//!
//! # No-Cycle Invariant
//! Runtime values are `Rc`-backed and must form acyclic graphs.
//! Reference counting cannot collect cycles, so no language or runtime
//! feature may create a back-edge into an already-reachable value. The
//! vector is mutable and shared, which makes this a discipline rather
//! than a structural guarantee: nothing in this crate builds a cycle,
//! and programs that do are outside the supported model.
use crate::runtime::interp::{Interp, RuntimeError};

pub mod func;
pub mod interp;
pub mod leak_detector;
pub mod natives;
pub mod types;
pub mod value;
pub mod vector;

/// A native operation: consumes its operands from the shared evaluation
/// stack and pushes its results back onto it. May re-enter the
/// interpreter to invoke callback values.
pub type NativeFn = fn(&mut Interp) -> Result<(), RuntimeError>;
