//! Theme resolver: the single owner of theme state for a page.
//!
//! DESIGN
//! ======
//! The resolver is generic over its three browser seams (preference store,
//! OS color-scheme source, appearance target) so it runs unchanged in unit
//! tests. It holds the OS listener only while the preference is `System`;
//! the listener callback keeps a `Weak` reference so dropping the resolver
//! always tears everything down.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged at `warn` and treated as "nothing persisted".
//! The page keeps working with the default theme.

#[cfg(test)]
#[path = "theme_resolver_test.rs"]
mod theme_resolver_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::state::theme::{ThemePreference, ThemeState, resolve};
use crate::util::color_scheme::{AppearanceTarget, ColorSchemeSource};
use crate::util::theme_storage::PreferenceStore;

/// Handle returned by [`ThemeResolver::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(ThemeState)>;

struct Inner<S, O: ColorSchemeSource, A> {
    store: S,
    os: O,
    target: A,
    state: Cell<ThemeState>,
    listener: RefCell<Option<O::Listener>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

/// Owns theme state, persistence, and the OS listener.
pub struct ThemeResolver<S, O, A>
where
    S: PreferenceStore + 'static,
    O: ColorSchemeSource + 'static,
    A: AppearanceTarget + 'static,
{
    inner: Rc<Inner<S, O, A>>,
}

impl<S, O, A> ThemeResolver<S, O, A>
where
    S: PreferenceStore + 'static,
    O: ColorSchemeSource + 'static,
    A: AppearanceTarget + 'static,
{
    /// Load the persisted preference, apply it, and start listening to the
    /// OS if it is `System`.
    ///
    /// A missing or unrecognized value is replaced by the default, which is
    /// written back to the store.
    pub fn new(store: S, os: O, target: A) -> Self {
        let stored = match store.load() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: could not read stored preference: {err}");
                None
            }
        };

        let preference = match stored.as_deref().map(str::parse::<ThemePreference>) {
            Some(Ok(preference)) => preference,
            Some(Err(err)) => {
                log::warn!("theme: {err}; using default");
                persist(&store, ThemePreference::default());
                ThemePreference::default()
            }
            None => {
                persist(&store, ThemePreference::default());
                ThemePreference::default()
            }
        };

        let state = ThemeState::new(preference, os_signal(&os, preference));
        target.apply(state.resolved);

        let resolver = Self {
            inner: Rc::new(Inner {
                store,
                os,
                target,
                state: Cell::new(state),
                listener: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        };
        sync_listener(&resolver.inner);
        resolver
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.inner.state.get().preference
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.inner.state.get()
    }

    /// Persist, resolve, and apply `preference`, then notify subscribers.
    ///
    /// The document root is updated before this returns.
    pub fn set_preference(&self, preference: ThemePreference) {
        persist(&self.inner.store, preference);
        let state = ThemeState::new(preference, os_signal(&self.inner.os, preference));
        self.inner.state.set(state);
        self.inner.target.apply(state.resolved);
        sync_listener(&self.inner);
        notify(&self.inner, state);
    }

    /// Register `callback` for every future state change.
    pub fn subscribe(&self, callback: impl Fn(ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    #[cfg(test)]
    pub(crate) fn is_listening(&self) -> bool {
        self.inner.listener.borrow().is_some()
    }

    /// Drop the OS listener and all subscribers.
    pub fn teardown(&self) {
        let listener = self.inner.listener.borrow_mut().take();
        drop(listener);
        self.inner.subscribers.borrow_mut().clear();
    }
}

impl<S, O, A> Drop for ThemeResolver<S, O, A>
where
    S: PreferenceStore + 'static,
    O: ColorSchemeSource + 'static,
    A: AppearanceTarget + 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

fn persist<S: PreferenceStore>(store: &S, preference: ThemePreference) {
    if let Err(err) = store.save(preference.as_str()) {
        log::warn!("theme: could not persist {preference}: {err}");
    }
}

fn os_signal<O: ColorSchemeSource>(os: &O, preference: ThemePreference) -> Option<bool> {
    if preference == ThemePreference::System { os.prefers_dark() } else { None }
}

fn sync_listener<S, O, A>(inner: &Rc<Inner<S, O, A>>)
where
    S: PreferenceStore + 'static,
    O: ColorSchemeSource + 'static,
    A: AppearanceTarget + 'static,
{
    let wants = inner.state.get().preference == ThemePreference::System;
    let has = inner.listener.borrow().is_some();

    if wants && !has {
        let weak: Weak<Inner<S, O, A>> = Rc::downgrade(inner);
        let listener = inner.os.listen(Box::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                on_os_change(&inner, prefers_dark);
            }
        }));
        *inner.listener.borrow_mut() = listener;
    } else if !wants && has {
        let listener = inner.listener.borrow_mut().take();
        drop(listener);
    }
}

fn on_os_change<S, O: ColorSchemeSource, A: AppearanceTarget>(inner: &Inner<S, O, A>, prefers_dark: bool) {
    let current = inner.state.get();
    if current.preference != ThemePreference::System {
        return;
    }
    let next = ThemeState { preference: current.preference, resolved: resolve(current.preference, Some(prefers_dark)) };
    if next == current {
        return;
    }
    inner.state.set(next);
    inner.target.apply(next.resolved);
    notify(inner, next);
}

fn notify<S, O: ColorSchemeSource, A>(inner: &Inner<S, O, A>, state: ThemeState) {
    let subscribers: Vec<Subscriber> = inner.subscribers.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect();
    for callback in subscribers {
        callback(state);
    }
}
