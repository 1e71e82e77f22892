// ABOUTME: Environment chain mapping symbol names to bound values

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// An empty environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Sets the parent link. Used only transiently by the call protocol
    /// (SPEC_FULL.md §4.2, §5): it is set to the caller's environment for
    /// the duration of one full-application call.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Insert or replace a binding in this layer only.
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Alias for `define`, matching spec.md's `put(env, name, value)`.
    pub fn put(&self, name: String, value: Value) {
        self.define(name, value);
    }

    /// Walk to the root environment and bind there.
    pub fn put_global(self: &Rc<Self>, name: String, value: Value) {
        let mut cur = self.clone();
        loop {
            let next = cur.parent.borrow().clone();
            match next {
                Some(p) => cur = p,
                None => break,
            }
        }
        cur.define(name, value);
    }

    /// Search this layer, then parents. Root miss returns an Error value
    /// per spec.md §4.2, not an `Option`.
    pub fn get(&self, name: &str) -> Value {
        if let Some(v) = self.bindings.borrow().get(name) {
            return v.clone();
        }
        if let Some(parent) = self.parent.borrow().as_ref() {
            return parent.get(name);
        }
        Value::error(format!("Unbound symbol '{name}'!"))
    }

    /// Deep copy of this layer's bindings; the parent link is shared
    /// (shallow), not deep-copied (spec.md §4.2).
    pub fn deep_copy(self: &Rc<Self>) -> Rc<Environment> {
        let bindings = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: RefCell::new(self.parent.borrow().clone()),
        })
    }
}
