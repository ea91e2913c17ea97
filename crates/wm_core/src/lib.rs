//! Core state machine for a dwm-lineage tiling window manager: the
//! arena-backed world model, layout engine, focus/tag/fullscreen policy,
//! terminal swallowing, EWMH surface, and the event dispatcher that ties
//! them together. No X transport code lives above [`x::backend`]; every
//! other module is pure `World` mutation driven through the [`x::XConn`]
//! capability trait.
//!
//! One core crate with no UI dependency, consumed by a thin binary and
//! a sibling UI crate.

pub mod bindings;
pub mod config;
pub mod error;
pub mod event;
pub mod ewmh;
pub mod focus;
pub mod fullscreen;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod multimon;
pub mod resources;
pub mod rules;
pub mod spawn;
pub mod swallow;
#[cfg(test)]
mod testutil;
pub mod x;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Client, ClientId, Monitor, MonitorId, World};
pub use x::{XConn, Xid};
