//! Stable arena indices replacing a pointer/`Rc` client graph.
//!
//! `mons`/`clients` live in flat `Vec`s owned by [`crate::World`] and
//! every cross-reference (including the cyclic client-monitor reference)
//! is one of these small `Copy` index types instead of a pointer or
//! reference-counted handle.

use std::fmt;

/// Index into [`crate::World::clients`]. Never reused across a client's
/// lifetime in one process run; the backing `Vec` slot is tombstoned
/// (`None`) on `unmanage`, not swept, so old ids fail lookups cleanly
/// rather than aliasing a new client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub(crate) u32);

/// Index into [`crate::World::mons`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonitorId(pub(crate) u32);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client#{}", self.0)
    }
}

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monitor#{}", self.0)
    }
}

impl ClientId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(i: usize) -> Self {
        Self(i as u32)
    }
}

impl MonitorId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(i: usize) -> Self {
        Self(i as u32)
    }
}
