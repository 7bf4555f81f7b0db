//! Single-threaded publish/subscribe with scoped release.
//!
//! Every listener the page controller hands out, and every platform handle the
//! browser bindings acquire, is wrapped in a [`Subscription`]. Dropping the
//! guard releases it, so tearing down a page is dropping its handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Slots<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
    /// Ids detached while their callback was checked out by `publish`.
    detached_in_flight: Vec<u64>,
    publishing: bool,
}

/// A list of callbacks notified with `&T` on every publish.
pub struct Listeners<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T: 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.slots.borrow().entries.len())
            .finish()
    }
}

impl<T: 'static> Listeners<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                entries: Vec::new(),
                detached_in_flight: Vec::new(),
                publishing: false,
            })),
        }
    }

    /// Registers `callback`. It stays registered until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, Box::new(callback)));
            id
        };

        let weak: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            let Some(slots) = weak.upgrade() else {
                return;
            };
            let removed = {
                let mut slots = slots.borrow_mut();
                match slots.entries.iter().position(|(entry_id, _)| *entry_id == id) {
                    Some(pos) => Some(slots.entries.remove(pos)),
                    None => {
                        if slots.publishing {
                            slots.detached_in_flight.push(id);
                        }
                        None
                    }
                }
            };
            // Callback state is dropped outside the borrow.
            drop(removed);
        })
    }

    /// Calls every registered callback with `value`.
    ///
    /// Callbacks may subscribe or detach while running. Callbacks added during
    /// a publish first fire on the next one. A publish issued from inside a
    /// callback is dropped rather than delivered re-entrantly.
    pub fn publish(&self, value: &T) {
        let mut active = {
            let mut slots = self.slots.borrow_mut();
            if slots.publishing {
                tracing::debug!("nested publish dropped");
                return;
            }
            slots.publishing = true;
            std::mem::take(&mut slots.entries)
        };

        for (_, callback) in active.iter_mut() {
            callback(value);
        }

        let mut slots = self.slots.borrow_mut();
        let detached = std::mem::take(&mut slots.detached_in_flight);
        active.append(&mut slots.entries);
        let (kept, gone): (Vec<_>, Vec<_>) =
            active.into_iter().partition(|(id, _)| !detached.contains(id));
        slots.entries = kept;
        slots.publishing = false;
        drop(slots);
        // Released callbacks may own guards on this same list.
        drop(gone);
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard owning a teardown action, run exactly once on drop or `detach`.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases now rather than at end of scope.
    pub fn detach(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}
