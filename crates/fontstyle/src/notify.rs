//! A single-threaded publish/subscribe channel for named notifications.
//!
//! [`NotificationCenter`] is a cheap-to-clone handle; all clones share the same
//! subscriber registry. Handlers run synchronously inside [`post`], on the
//! thread that posts.
//!
//! # Delivery rules
//!
//! - Each [`post`] delivers to the subscribers registered when it started.
//! - A subscriber removed while a post is in progress is skipped if it hasn't
//!   been reached yet. Once [`unsubscribe`] returns, the handler never runs
//!   again.
//! - Handlers may subscribe, unsubscribe and post re-entrantly.
//! - Delivery order between subscribers is not part of the contract.
//!
//! [`post`]: NotificationCenter::post
//! [`unsubscribe`]: NotificationCenter::unsubscribe

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Posted when the user's preferred text size changes.
pub const CONTENT_SIZE_CATEGORY_DID_CHANGE: &str = "ContentSizeCategoryDidChange";

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn()>;

struct Observer {
    name: String,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: BTreeMap<SubscriptionId, Observer>,
}

/// Fan-out notification channel.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    registry: Rc<RefCell<Registry>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for notifications named `name`.
    pub fn subscribe(&self, name: &str, handler: impl Fn() + 'static) -> SubscriptionId {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.observers.insert(
            id,
            Observer {
                name: name.to_string(),
                handler: Rc::new(handler),
            },
        );
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        // The observer is dropped after the borrow ends, so a handler whose
        // captures run code on drop can't observe a borrowed registry.
        let removed = self.registry.borrow_mut().observers.remove(&id);
        removed.is_some()
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.registry.borrow().observers.contains_key(&id)
    }

    /// Delivers a notification to every current subscriber of `name`.
    ///
    /// Returns the number of handlers that ran.
    pub fn post(&self, name: &str) -> usize {
        let pending: Vec<(SubscriptionId, Handler)> = self
            .registry
            .borrow()
            .observers
            .iter()
            .filter(|(_, observer)| observer.name == name)
            .map(|(id, observer)| (*id, Rc::clone(&observer.handler)))
            .collect();

        tracing::trace!(notification = name, subscribers = pending.len(), "posting");

        let mut delivered = 0;
        for (id, handler) in pending {
            if !self.is_subscribed(id) {
                continue;
            }
            handler();
            delivered += 1;
        }
        delivered
    }

    /// Number of live subscriptions for `name`.
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.registry
            .borrow()
            .observers
            .values()
            .filter(|observer| observer.name == name)
            .count()
    }

    /// Number of live subscriptions across all names.
    pub fn len(&self) -> usize {
        self.registry.borrow().observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if both handles share one registry.
    pub fn same_channel(&self, other: &NotificationCenter) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("subscriptions", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_post_reaches_matching_subscribers_only() {
        let center = NotificationCenter::new();
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        center.subscribe("a", move || h.set(h.get() + 1));
        let h = Rc::clone(&hits);
        center.subscribe("b", move || h.set(h.get() + 10));

        assert_eq!(center.post("a"), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(center.post("missing"), 0);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let center = NotificationCenter::new();
        let id = center.subscribe("a", || {});
        assert_eq!(center.subscriber_count("a"), 1);
        assert!(center.unsubscribe(id));
        assert!(!center.unsubscribe(id));
        assert!(center.is_empty());
    }

    #[test]
    fn test_unsubscribe_during_post_skips_pending_handler() {
        let center = NotificationCenter::new();
        let second_ran = Rc::new(Cell::new(false));
        let victim: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let c = center.clone();
        let v = Rc::clone(&victim);
        // Registered first, so it runs before the victim.
        center.subscribe("tick", move || {
            if let Some(id) = v.get() {
                c.unsubscribe(id);
            }
        });
        let ran = Rc::clone(&second_ran);
        victim.set(Some(center.subscribe("tick", move || ran.set(true))));

        assert_eq!(center.post("tick"), 1);
        assert!(!second_ran.get());
        assert_eq!(center.subscriber_count("tick"), 1);
    }

    #[test]
    fn test_subscribe_during_post_waits_for_next_post() {
        let center = NotificationCenter::new();
        let late_hits = Rc::new(Cell::new(0));

        let c = center.clone();
        let hits = Rc::clone(&late_hits);
        center.subscribe("tick", move || {
            let hits = Rc::clone(&hits);
            c.subscribe("tick", move || hits.set(hits.get() + 1));
        });

        center.post("tick");
        assert_eq!(late_hits.get(), 0);
        center.post("tick");
        assert_eq!(late_hits.get(), 1);
    }

    #[test]
    fn test_clones_share_registry() {
        let center = NotificationCenter::new();
        let other = center.clone();
        other.subscribe("a", || {});
        assert_eq!(center.subscriber_count("a"), 1);
        assert!(center.same_channel(&other));
        assert!(!center.same_channel(&NotificationCenter::new()));
    }
}
