//! # Single-slot store for the signed-in user
//!
//! [`UserStore`] holds zero or one [`UserProfile`]. [`UserStore::set`] is the only
//! way to change it and replaces the slot wholesale; `None` means signed out.
//! Readers either poll [`UserStore::current`] or register a listener with
//! [`UserStore::subscribe`], which is called with the new value after every set.
//!
//! The UI runs on a single thread, so the store uses `RefCell` rather than a
//! lock. The process-wide instance lives in a thread local and is reached
//! through [`with_global`], [`current_user`] and [`set_user`].
//!
//! Nothing is persisted. After a reload the profile has to be fetched again
//! (the `ui` crate's `UserProvider` does that on startup).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::UserProfile;

type Listener = Rc<dyn Fn(Option<&UserProfile>)>;

/// Handle returned by [`UserStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
pub struct UserStore {
    slot: RefCell<Option<UserProfile>>,
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_id: Cell<u64>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current profile, if anyone is signed in.
    pub fn current(&self) -> Option<UserProfile> {
        self.slot.borrow().clone()
    }

    /// Replace the stored profile and notify every listener.
    pub fn set(&self, user: Option<UserProfile>) {
        tracing::debug!(signed_in = user.is_some(), "user store updated");
        *self.slot.borrow_mut() = user;

        // Listeners may call back into the store, so neither cell stays borrowed.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        let snapshot = self.current();
        for listener in listeners {
            listener(snapshot.as_ref());
        }
    }

    /// Register a listener for future updates.
    pub fn subscribe(&self, listener: impl Fn(Option<&UserProfile>) + 'static) -> Subscription {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Unknown handles are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .borrow_mut()
            .retain(|(id, _)| *id != subscription);
    }
}

thread_local! {
    static GLOBAL: UserStore = UserStore::new();
}

/// Run `f` against the process-wide store.
pub fn with_global<R>(f: impl FnOnce(&UserStore) -> R) -> R {
    GLOBAL.with(f)
}

/// The signed-in user of the process-wide store.
pub fn current_user() -> Option<UserProfile> {
    with_global(UserStore::current)
}

/// Replace the signed-in user of the process-wide store.
pub fn set_user(user: Option<UserProfile>) {
    with_global(|store| store.set(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn jane() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            organization_id: "org-1".to_string(),
            role: Some(Role::Supervisor),
        }
    }

    #[test]
    fn test_set_and_clear() {
        let store = UserStore::new();
        assert!(store.current().is_none());

        store.set(Some(jane()));
        assert_eq!(store.current(), Some(jane()));

        let mut other = jane();
        other.id = "u-2".to_string();
        store.set(Some(other.clone()));
        assert_eq!(store.current(), Some(other));

        store.set(None);
        assert!(store.current().is_none());
    }

    #[test]
    fn test_listeners_see_every_update() {
        let store = UserStore::new();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();

        let sink = seen.clone();
        let sub = store.subscribe(move |user| {
            sink.borrow_mut().push(user.map(|u| u.id.clone()));
        });

        store.set(Some(jane()));
        store.set(None);
        assert_eq!(*seen.borrow(), vec![Some("u-1".to_string()), None]);

        store.unsubscribe(sub);
        store.set(Some(jane()));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_listener_can_write_back() {
        let store = Rc::new(UserStore::new());

        let inner = store.clone();
        store.subscribe(move |user| {
            // Sign-ins without an organisation are rejected.
            if user.is_some_and(|u| u.organization_id.is_empty()) {
                inner.set(None);
            }
        });

        let mut orphan = jane();
        orphan.organization_id.clear();
        store.set(Some(orphan));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_global_store() {
        assert!(current_user().is_none());
        set_user(Some(jane()));
        assert_eq!(current_user().map(|u| u.name), Some("Jane".to_string()));
        set_user(None);
        assert!(current_user().is_none());
    }
}
