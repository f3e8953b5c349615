//! Side table attaching style bindings to elements.
//!
//! Elements are foreign types, so bindings can't live in a field on them.
//! [`StyleTable`] keeps them instead, keyed by element identity and an
//! [`AttachmentKey`] that separates independent style slots on one element.
//!
//! # Ownership
//!
//! The table is the only strong owner of its bindings. Bindings refer to their
//! element weakly, so there is no element → binding → element cycle. A binding
//! whose element has been dropped unsubscribes itself on the next size change;
//! its slot stays in the table until [`StyleTable::prune`] removes it.
//!
//! Accessors touch only the slot they are asked about. That slot always
//! belongs to a live element: the caller holds it, and a binding's [`Weak`]
//! keeps the element's allocation, so its address can't be reused by another
//! element while the slot exists.
//!
//! [`Weak`]: std::rc::Weak
//!
//! # Assignment
//!
//! [`StyleTable::set`] follows three rules:
//!
//! 1. A style equal to the current one, for the same attribute path, is a
//!    no-op. Styles with a `Custom` size are never equal, so they always
//!    rebind.
//! 2. A new style creates a new binding. If creation fails, the previous
//!    binding stays in place.
//! 3. The replaced or cleared binding is disposed exactly once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::binding::{FontTarget, StyleBinding};
use crate::environment::Environment;
use crate::error::StyleError;
use crate::style::FontStyle;

/// Names an independent style slot on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentKey(&'static str);

impl AttachmentKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SlotKey {
    element: usize,
    key: AttachmentKey,
}

impl SlotKey {
    fn of<T>(element: &Rc<T>, key: AttachmentKey) -> Self {
        Self {
            element: Rc::as_ptr(element) as *const () as usize,
            key,
        }
    }
}

/// Identity-keyed map from `(element, key)` to the element's style binding.
pub struct StyleTable {
    environment: Environment,
    slots: RefCell<HashMap<SlotKey, StyleBinding>>,
}

impl StyleTable {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            slots: RefCell::new(HashMap::new()),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The style currently bound to `element` under `key`.
    pub fn get<T: FontTarget>(&self, element: &Rc<T>, key: AttachmentKey) -> Option<FontStyle> {
        self.slots
            .borrow()
            .get(&SlotKey::of(element, key))
            .map(|binding| binding.style().clone())
    }

    /// The attribute path the binding for `element` under `key` writes to.
    pub fn target_property<T: FontTarget>(
        &self,
        element: &Rc<T>,
        key: AttachmentKey,
    ) -> Option<String> {
        self.slots
            .borrow()
            .get(&SlotKey::of(element, key))
            .map(|binding| binding.target_property().to_string())
    }

    /// Binds, rebinds or unbinds a style. See the [module docs](self).
    pub fn set<T: FontTarget>(
        &self,
        element: &Rc<T>,
        key: AttachmentKey,
        style: Option<FontStyle>,
        target_property: &str,
    ) -> Result<(), StyleError> {
        let slot = SlotKey::of(element, key);

        {
            let slots = self.slots.borrow();
            match slots.get(&slot) {
                Some(existing)
                    if Some(existing.style()) == style.as_ref()
                        && existing.target_property() == target_property =>
                {
                    tracing::trace!(key = key.name(), "style unchanged, keeping binding");
                    return Ok(());
                }
                None if style.is_none() => return Ok(()),
                _ => {}
            }
        }

        // The binding is built before the table is borrowed again: creating it
        // runs element code, which may read the table.
        let previous = match style {
            Some(style) => {
                let binding =
                    StyleBinding::create(element, style, target_property, &self.environment)?;
                self.slots.borrow_mut().insert(slot, binding)
            }
            None => self.slots.borrow_mut().remove(&slot),
        };

        if let Some(previous) = previous {
            tracing::debug!(
                key = key.name(),
                role = previous.style().role(),
                "replacing style binding"
            );
            previous.dispose();
        }
        Ok(())
    }

    /// Disposes and removes bindings whose element is gone.
    ///
    /// This scans every slot. Returns the number of bindings removed.
    pub fn prune(&self) -> usize {
        let dead: Vec<StyleBinding> = {
            let mut slots = self.slots.borrow_mut();
            let keys: Vec<SlotKey> = slots
                .iter()
                .filter(|(_, binding)| !binding.is_target_alive())
                .map(|(key, _)| *key)
                .collect();
            keys.iter().filter_map(|key| slots.remove(key)).collect()
        };

        for binding in &dead {
            tracing::debug!(role = binding.style().role(), "pruning binding of dropped element");
            binding.dispose();
        }
        dead.len()
    }

    /// Disposes and removes every binding.
    pub fn clear(&self) {
        let bindings: Vec<StyleBinding> =
            self.slots.borrow_mut().drain().map(|(_, b)| b).collect();
        for binding in &bindings {
            binding.dispose();
        }
    }

    /// Number of bindings, including any whose element is gone but which
    /// haven't been pruned yet.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for StyleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleTable")
            .field("environment", &self.environment)
            .field("bindings", &self.len())
            .finish()
    }
}
