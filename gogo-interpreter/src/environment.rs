use crate::object::Value;
use gc::{Finalize, Gc, GcCell, Trace};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Trace, Finalize)]
pub struct EnvironmentCore {
    store: HashMap<Rc<str>, Value>,
    outer: Option<Environment>,
}

/// A scope. Cloning yields another handle to the same scope, which is how
/// closures capture their defining environment by reference.
#[derive(Clone, Trace, Finalize)]
pub struct Environment {
    environment: Gc<GcCell<EnvironmentCore>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            environment: Gc::new(GcCell::new(EnvironmentCore {
                store: HashMap::new(),
                outer: None,
            })),
        }
    }

    pub fn new_enclosed(outer: &Environment) -> Environment {
        Environment {
            environment: Gc::new(GcCell::new(EnvironmentCore {
                store: HashMap::new(),
                outer: Some(outer.clone()),
            })),
        }
    }

    /// Looks `key` up in this scope, then in each enclosing scope in turn.
    pub fn get(&self, key: &str) -> Option<Value> {
        let env = self.environment.borrow();
        env.store
            .get(key)
            .cloned()
            .or_else(|| env.outer.as_ref().and_then(|outer| outer.get(key)))
    }

    /// Binds `key` in this scope only, shadowing any outer binding.
    pub fn set(&self, key: Rc<str>, value: Value) {
        self.environment.borrow_mut().store.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.environment.borrow().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Gc::ptr_eq(&self.environment, &other.environment)
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let env = self.environment.borrow();
        let mut names = env.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("enclosed", &env.outer.is_some())
            .finish()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
