//! The typed error hierarchy for the window manager.
//!
//! Modeled on `x11rb::X11rbError` (transparent `#[from]` wrapping of the
//! underlying X11 error families) and its `actor::Error<E>` generic
//! variant shape; `Benign` is this project's own addition for a
//! recoverable-X-error policy.

use crate::model::ids::ClientId;

pub type Result<T> = std::result::Result<T, Error>;

/// A benign X protocol error: the operation is a no-op, not a failure.
///
/// Matches `BadWindow` on a destroyed client, `BadMatch` on `SetInputFocus`,
/// `BadDrawable` on drawing to a gone window, and `BadAccess` on an
/// already-grabbed key/button. Constructing this variant must never
/// propagate past the event handler boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenignKind {
    BadWindow,
    BadMatch,
    BadDrawable,
    BadAccess,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying X11 connection returned a protocol error. Benign
    /// kinds are policy-swallowed by `XConn` implementations before they
    /// ever reach a handler; this variant is reserved for ones that are not.
    #[error("X11 protocol error: {0:?}")]
    X11Protocol(x11rb::x11_utils::X11Error),

    /// The connection to the X server was lost or a request could not be
    /// sent. Fatal: the event loop cannot continue.
    #[error(transparent)]
    Connection(#[from] x11rb::errors::ConnectionError),

    /// A request could not be completed.
    #[error(transparent)]
    Reply(#[from] x11rb::errors::ReplyError),

    #[error(transparent)]
    ReplyOrId(#[from] x11rb::errors::ReplyOrIdError),

    /// Another window manager already owns `SubstructureRedirect` on the root.
    #[error("another window manager is already running")]
    AnotherWmRunning,

    /// None of the configured fonts could be loaded.
    #[error("no usable font could be loaded from the configured font list")]
    NoUsableFont,

    /// A property was requested on a client that does not carry it.
    #[error("property {name} is not set on client {client:?}")]
    MissingProperty { name: &'static str, client: ClientId },

    /// The floating-position DSL string could not be parsed. This is a
    /// silent no-op at the call site, not a user-visible error; callers
    /// match on this variant explicitly to implement that policy.
    #[error("malformed float-position spec: {0:?}")]
    MalformedFloatPos(String),

    /// `Client`/`Monitor` arena allocation failed, a fatal condition
    /// (`die`).
    #[error("allocation failure: {0}")]
    Allocation(String),

    #[error("no running status bar producer process")]
    NoStatusProducer,

    #[error(transparent)]
    Nix(#[from] nix::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify a raw X11 error code, used by `XConn` implementations to
    /// decide whether to swallow or propagate it.
    pub fn benign_kind_for_code(error_code: u8) -> Option<BenignKind> {
        use x11rb::protocol::xproto::*;
        match error_code {
            c if c == WINDOW_ERROR => Some(BenignKind::BadWindow),
            c if c == MATCH_ERROR => Some(BenignKind::BadMatch),
            c if c == DRAWABLE_ERROR => Some(BenignKind::BadDrawable),
            c if c == ACCESS_ERROR => Some(BenignKind::BadAccess),
            _ => None,
        }
    }
}
