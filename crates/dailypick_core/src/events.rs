//! Vault creation event fan-out.
//!
//! # Responsibility
//! - Let the host register and drop handlers for artifact creation.
//! - Deliver each created path to every live handler, in registration
//!   order.
//!
//! # Invariants
//! - A handler runs only between its registration and its unsubscription.
//! - Handler identity is a [`SubscriptionId`]; the hub never compares
//!   closures.
//!
//! # See also docs/architecture/host-contract.md

use uuid::Uuid;

/// Identifier handed out on registration and used to unsubscribe.
pub type SubscriptionId = Uuid;

type CreateHandler<'h> = Box<dyn FnMut(&str) + 'h>;

struct Subscription<'h> {
    id: SubscriptionId,
    handler: CreateHandler<'h>,
}

/// Dispatches artifact creation events to registered handlers.
///
/// The lifetime lets handlers borrow from their surroundings, so a handler
/// can drive a service that itself borrows the vault.
pub struct VaultEventHub<'h> {
    subscriptions: Vec<Subscription<'h>>,
}

impl<'h> VaultEventHub<'h> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Registers a handler for artifact creation and returns its id.
    pub fn on_create<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&str) + 'h,
    {
        let id = Uuid::new_v4();
        self.subscriptions.push(Subscription {
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Drops the handler behind `id`; returns false when it was not
    /// registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() < before
    }

    /// Delivers a created-artifact path to every handler in registration
    /// order.
    pub fn emit_created(&mut self, path: &str) {
        for sub in &mut self.subscriptions {
            (sub.handler)(path);
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Default for VaultEventHub<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::VaultEventHub;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handlers_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hub = VaultEventHub::new();

        let first = Rc::clone(&seen);
        hub.on_create(move |path| first.borrow_mut().push(format!("a:{path}")));
        let second = Rc::clone(&seen);
        hub.on_create(move |path| second.borrow_mut().push(format!("b:{path}")));

        hub.emit_created("2024-01-15.md");

        assert_eq!(
            *seen.borrow(),
            vec!["a:2024-01-15.md".to_string(), "b:2024-01-15.md".to_string()]
        );
    }

    #[test]
    fn unsubscribed_handler_no_longer_runs() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hub = VaultEventHub::new();

        let sink = Rc::clone(&seen);
        let id = hub.on_create(move |path| sink.borrow_mut().push(path.to_string()));

        hub.emit_created("one.md");
        assert!(hub.unsubscribe(id));
        hub.emit_created("two.md");

        assert_eq!(*seen.borrow(), vec!["one.md".to_string()]);
        assert_eq!(hub.subscription_count(), 0);
    }

    #[test]
    fn unsubscribing_twice_reports_absence() {
        let mut hub = VaultEventHub::new();
        let id = hub.on_create(|_| {});

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
    }

    #[test]
    fn handler_may_mutate_borrowed_state() {
        let mut count = 0usize;
        {
            let mut hub = VaultEventHub::new();
            hub.on_create(|_| count += 1);
            hub.emit_created("a.md");
            hub.emit_created("b.md");
        }
        assert_eq!(count, 2);
    }
}
