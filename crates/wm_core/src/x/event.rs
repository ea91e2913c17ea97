//! `XEvent`: the dispatcher's input type.
//!
//! Modeled on an `XEvent` enum shape, trimmed to exactly the event set
//! the dispatcher handles (no slot for `RandrNotify`/`ScreenChange`-style
//! events; monitor hotplug is instead folded into `ConfigureNotify` on
//! the root).

use crate::geometry::{Point, Rect};
use crate::x::Xid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerChange {
    pub window: Xid,
    pub root_pos: Point,
    pub event_pos: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigureEvent {
    pub window: Xid,
    pub rect: Rect,
    pub border_width: u32,
    pub above: Option<Xid>,
    pub override_redirect: bool,
    /// `true` for a ConfigureRequest (not yet applied), `false` for a
    /// ConfigureNotify (already applied by the server).
    pub is_request: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExposeEvent {
    pub window: Xid,
    pub count: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyEvent {
    pub window: Xid,
    pub atom: Xid,
    pub deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientMessage {
    pub window: Xid,
    pub type_atom: Xid,
    pub data: [u32; 5],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub mods: u16,
    pub keycode: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonPress {
    pub window: Xid,
    pub subwindow: Option<Xid>,
    pub button: u8,
    pub mods: u16,
    pub root_pos: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionNotify {
    pub root_pos: Point,
    pub time_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XEvent {
    ButtonPress(ButtonPress),
    ButtonRelease(Xid),
    ClientMessage(ClientMessage),
    ConfigureRequest(ConfigureEvent),
    ConfigureNotify(ConfigureEvent),
    DestroyNotify(Xid),
    EnterNotify(PointerChange),
    Expose(ExposeEvent),
    FocusIn(Xid),
    KeyPress(KeyPress),
    MappingNotify,
    MapRequest(Xid),
    MotionNotify(MotionNotify),
    PropertyNotify(PropertyEvent),
    ResizeRequest(Xid),
    UnmapNotify(Xid),
}

impl XEvent {
    /// Dispatch-table discriminant. Values are this
    /// project's own dense enumeration, not literal core X protocol op
    /// codes.
    pub fn dispatch_index(&self) -> usize {
        match self {
            XEvent::ButtonPress(_) => 0,
            XEvent::ClientMessage(_) => 1,
            XEvent::ConfigureRequest(_) => 2,
            XEvent::ConfigureNotify(_) => 3,
            XEvent::DestroyNotify(_) => 4,
            XEvent::EnterNotify(_) => 5,
            XEvent::Expose(_) => 6,
            XEvent::FocusIn(_) => 7,
            XEvent::KeyPress(_) => 8,
            XEvent::MappingNotify => 9,
            XEvent::MapRequest(_) => 10,
            XEvent::MotionNotify(_) => 11,
            XEvent::PropertyNotify(_) => 12,
            XEvent::ResizeRequest(_) => 13,
            XEvent::UnmapNotify(_) => 14,
            XEvent::ButtonRelease(_) => 15,
        }
    }

    /// One slot beyond the 14 ordinary X event kinds: `ButtonRelease`
    /// terminates the re-entrant move/resize loop
    /// and has no ordinary dispatch-table handler of its own.
    pub const DISPATCH_TABLE_SIZE: usize = 16;
}
