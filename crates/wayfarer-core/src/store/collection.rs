// ── Order-preserving reactive entity collection ──
//
// Records keep their last-fetch order; local mutations append, replace,
// or remove in place without re-sorting. Every mutation publishes a new
// snapshot through a `watch` channel.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::Record;

/// A reactive, order-preserving collection for a single entity type.
///
/// The `watch` channel holds the snapshot itself, so reads are a cheap
/// `Arc` clone and subscribers see every published snapshot. Mutations
/// rebuild the vector; collections are small (site content), so the
/// copy is not a concern.
pub(crate) struct EntityCollection<T: Record> {
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Record> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self { snapshot }
    }

    /// Replace the whole collection, keeping the given order.
    pub(crate) fn replace_all(&self, items: Vec<T>) {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        self.snapshot.send_modify(|snap| *snap = Arc::new(items));
    }

    /// Append a record at the end.
    pub(crate) fn push(&self, item: T) {
        self.snapshot.send_modify(|snap| {
            let mut items = snap.as_ref().clone();
            items.push(Arc::new(item));
            *snap = Arc::new(items);
        });
    }

    /// Replace the record with the same id, preserving its position.
    /// Returns `false` (and publishes nothing) if no record matches.
    pub(crate) fn replace(&self, item: T) -> bool {
        let mut replaced = false;
        self.snapshot.send_if_modified(|snap| {
            let Some(pos) = snap.iter().position(|r| r.id() == item.id()) else {
                return false;
            };
            let mut items = snap.as_ref().clone();
            items[pos] = Arc::new(item);
            *snap = Arc::new(items);
            replaced = true;
            true
        });
        replaced
    }

    /// Apply a partial patch to the record with the given id, in place.
    /// Returns `false` (and publishes nothing) if no record matches.
    pub(crate) fn patch(&self, id: &str, apply: impl FnOnce(&mut T)) -> bool {
        let mut patched = false;
        self.snapshot.send_if_modified(|snap| {
            let Some(pos) = snap.iter().position(|r| r.id() == id) else {
                return false;
            };
            let mut items = snap.as_ref().clone();
            let mut record = items[pos].as_ref().clone();
            apply(&mut record);
            items[pos] = Arc::new(record);
            *snap = Arc::new(items);
            patched = true;
            true
        });
        patched
    }

    /// Remove the record with the given id. Returns `false` (and
    /// publishes nothing) if no record matches.
    pub(crate) fn remove(&self, id: &str) -> bool {
        let mut removed = false;
        self.snapshot.send_if_modified(|snap| {
            let Some(pos) = snap.iter().position(|r| r.id() == id) else {
                return false;
            };
            let mut items = snap.as_ref().clone();
            items.remove(pos);
            *snap = Arc::new(items);
            removed = true;
            true
        });
        removed
    }

    /// Look up a record by id.
    pub(crate) fn get(&self, id: &str) -> Option<Arc<T>> {
        self.snapshot
            .borrow()
            .iter()
            .find(|r| r.id() == id)
            .map(Arc::clone)
    }

    /// Current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.snapshot.borrow().is_empty()
    }
}
