// ── Reactive data store ──
//
// Order-preserving entity storage with push-based change notification.

mod collection;
mod data_store;
mod refresh;

pub(crate) use collection::EntityCollection;
pub use data_store::DataStore;
pub use refresh::{AdminPayload, SitePayload};
