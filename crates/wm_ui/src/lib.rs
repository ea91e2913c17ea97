//! The UI crate: drawable surface, bar composer and systray host built on
//! top of `wm_core`'s `World`/`XConn`.
//!
//! Follows a crate split where a UI crate depends on the
//! core crate, never the reverse, so the core stays free of rendering
//! concerns (`wm_core::model::world`'s doc comment explains the one place
//! this matters: `World` itself does not own a drawable).

pub mod bar;
pub mod color;
pub mod draw;
pub mod error;
pub mod fontset;
pub mod systray;

pub use bar::{Alignment, BarModule, BarModuleKind, StatusBar};
pub use draw::{Context, Draw};
pub use error::{Error, Result};
pub use systray::Systray;
