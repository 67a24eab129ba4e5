//! Typed hub for the two auth lifecycle notifications.
//!
//! Both sign-in and sign-out flow through the same [`AuthChange`] value and
//! the same subscriptions. Each subscription pairs a handler producing the
//! per-tab visibility flags with the sink that applies them, so the hub owns
//! the wiring from handler output to UI element.

use contracts::system::tabs::AuthChange;
use leptos::prelude::use_context;
use std::sync::{Arc, Mutex};

type Handler = Box<dyn Fn(&AuthChange) -> Vec<bool> + Send + Sync>;
type Sink = Box<dyn Fn(Vec<bool>) + Send + Sync>;

struct Subscription {
    handler: Handler,
    apply: Sink,
}

#[derive(Clone, Default)]
pub struct AuthEvents {
    subscriptions: Arc<Mutex<Vec<Subscription>>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler and the sink its output is delivered to. The same
    /// subscription fires for sign-in and sign-out.
    pub fn subscribe(
        &self,
        handler: impl Fn(&AuthChange) -> Vec<bool> + Send + Sync + 'static,
        apply: impl Fn(Vec<bool>) + Send + Sync + 'static,
    ) {
        self.subscriptions.lock().unwrap().push(Subscription {
            handler: Box::new(handler),
            apply: Box::new(apply),
        });
    }

    /// Run every handler synchronously, in subscription order, delivering
    /// each output to its paired sink.
    pub fn emit(&self, change: &AuthChange) {
        for subscription in self.subscriptions.lock().unwrap().iter() {
            (subscription.apply)((subscription.handler)(change));
        }
    }
}

/// Hook to access the hub provided at the application root
pub fn use_auth_events() -> AuthEvents {
    use_context::<AuthEvents>().expect("AuthEvents not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn handler_output_reaches_its_sink() {
        let events = AuthEvents::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = received.clone();
        events.subscribe(
            |change| vec![change.user_id.is_none(), change.user_id.is_some()],
            move |flags| sink.lock().unwrap().push(flags),
        );

        events.emit(&AuthChange::signed_in(Uuid::from_u128(7)));
        events.emit(&AuthChange::signed_out());

        let received = received.lock().unwrap();
        assert_eq!(*received, vec![vec![false, true], vec![true, false]]);
    }

    #[test]
    fn subscriptions_fire_in_order() {
        let events = AuthEvents::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in [1, 2, 3] {
            let order = order.clone();
            events.subscribe(
                move |_| vec![],
                move |_| order.lock().unwrap().push(tag),
            );
        }

        events.emit(&AuthChange::signed_out());
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn emit_without_subscriptions_is_a_no_op() {
        AuthEvents::new().emit(&AuthChange::signed_out());
    }
}
