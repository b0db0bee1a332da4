//! Subscriber registry for the observable store.

use super::view::StoreView;
use log::trace;
use std::fmt;

/// Callback invoked with the full document and history state.
pub type Subscriber = Box<dyn FnMut(&StoreView<'_>)>;

/// Handle returned by [`DrawingStore::subscribe`](super::DrawingStore::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

impl Subscribers {
    /// Register `subscriber` and hand it the current state right away.
    pub(crate) fn subscribe(
        &mut self,
        mut subscriber: Subscriber,
        current: StoreView<'_>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        subscriber(&current);
        self.entries.push((id, subscriber));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every subscriber in registration order.
    pub(crate) fn notify(&mut self, view: StoreView<'_>) {
        trace!("notifying {} subscriber(s)", self.entries.len());
        for (_, subscriber) in &mut self.entries {
            subscriber(&view);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
