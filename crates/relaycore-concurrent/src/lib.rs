//! Lock-free single-writer/many-reader collections for transport
//! registries.
//!
//! The live registries of a messaging transport — active peers, channels,
//! subscriptions — are read on every duty cycle but mutated rarely, and a
//! reader must never block. [`SnapshotArray`] serves exactly that shape:
//! one writer publishes immutable array snapshots through an atomic
//! reference, and any number of readers query, iterate, or fold over the
//! snapshot they captured.

pub mod error;
pub mod snapshot_array;

pub use error::Unsupported;
pub use snapshot_array::{Iter, Snapshot, SnapshotArray};
