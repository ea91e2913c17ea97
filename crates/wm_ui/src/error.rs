//! Errors surfaced by the drawable surface, bar composer and systray host.
//!
//! Modeled on a `draw::Error` shape (a handful of named
//! variants plus transparent wraps), adapted away from Cairo/XCB onto
//! this crate's raw Xlib/Xft backend.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid hex color code: {0:?}")]
    InvalidHexColor(String),

    #[error("no usable font could be loaded from {0:?}")]
    NoUsableFont(Vec<String>),

    #[error("XOpenDisplay returned null; is $DISPLAY set?")]
    CannotOpenDisplay,

    #[error(transparent)]
    Core(#[from] wm_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
