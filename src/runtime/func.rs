use std::{collections::HashMap, fmt, rc::Rc};

use crate::runtime::{NativeFn, interp::Stack, types::TypeId, value::Value};

/// One argument spec of an implementation signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    /// The argument must be of this type (or a subtype).
    Type(TypeId),
    /// Back-reference: the required type is the runtime type of the
    /// value at this 0-based absolute stack index, resolved at match
    /// time. Lets one argument's required type be "whatever type
    /// argument n turned out to be".
    Ref(usize),
}

/// Body of an implementation: a native action, or a quotation evaluated
/// by the interpreter.
#[derive(Clone)]
pub enum ImpBody {
    Native(NativeFn),
    Quot(Rc<Vec<Value>>),
}

impl fmt::Debug for ImpBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpBody::Native(_) => write!(f, "ImpBody::Native"),
            ImpBody::Quot(items) => write!(f, "ImpBody::Quot({} items)", items.len()),
        }
    }
}

/// One concrete implementation (overload) of a function.
///
/// Identity is the canonical signature id; two spec lists rendering to
/// the same id are the same overload.
#[derive(Debug)]
pub struct Imp {
    id: String,
    args: Vec<Arg>,
    body: ImpBody,
}

impl Imp {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn body(&self) -> &ImpBody {
        &self.body
    }
}

/// A named operation holding a set of implementations keyed by
/// signature id, resolved at call time against the live stack.
pub struct Func {
    name: Rc<str>,
    arity: usize,
    imps: HashMap<String, Rc<Imp>>,
}

impl Func {
    pub fn new(name: impl Into<Rc<str>>, arity: usize) -> Self {
        Func {
            name: name.into(),
            arity,
            imps: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of trailing stack values considered during dispatch.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn imp_count(&self) -> usize {
        self.imps.len()
    }

    /// Computes the canonical signature id for an ordered spec list:
    /// the type name for a fixed-type spec, the decimal index for a
    /// back-reference, joined with single spaces. This string is the
    /// lookup key and the sole determinant of overload identity.
    pub fn signature_id(args: &[Arg]) -> String {
        let mut id = String::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                id.push(' ');
            }
            match arg {
                Arg::Type(t) => id.push_str(t.name()),
                Arg::Ref(n) => id.push_str(&n.to_string()),
            }
        }
        id
    }

    /// Registers an implementation, replacing any existing one with the
    /// same signature id. Last definition wins; never fails.
    pub fn add_imp(&mut self, args: Vec<Arg>, body: ImpBody) -> Rc<Imp> {
        debug_assert_eq!(
            args.len(),
            self.arity,
            "imp arity does not match func {}",
            self.name
        );
        let id = Self::signature_id(&args);
        let imp = Rc::new(Imp {
            id: id.clone(),
            args,
            body,
        });
        // insert drops the previous Rc<Imp> under this id, if any
        self.imps.insert(id, Rc::clone(&imp));
        imp
    }

    /// Resolves the implementation matching the live argument types on
    /// `stack`, or `None` if nothing matches.
    ///
    /// Candidates are tried in map order, which is unspecified: with
    /// overlapping signatures the winner is indeterminate. A candidate
    /// matches iff every argument position, walked from the last down to
    /// the first in lockstep with the stack from the top down, satisfies
    /// `is_a(actual, required)`; back-references resolve against the
    /// runtime type of the value at their absolute stack index.
    pub fn get_imp(&self, stack: &Stack) -> Option<Rc<Imp>> {
        self.imps
            .values()
            .find(|imp| self.imp_matches(imp, stack))
            .map(Rc::clone)
    }

    fn imp_matches(&self, imp: &Imp, stack: &Stack) -> bool {
        for (arg, actual) in imp.args.iter().rev().zip(stack.iter().rev()) {
            let required = match arg {
                Arg::Type(t) => *t,
                Arg::Ref(n) => stack.get(*n).type_id(),
            };
            if !actual.type_id().is_a(required) {
                return false;
            }
        }
        true
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func({}/{})", self.name, self.arity)
    }
}
