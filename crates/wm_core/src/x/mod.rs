//! The Display Capability: the facade of ambient X
//! operations the core consumes, treated as a capability the core consumes
//! rather than a transport it owns — this module defines the trait
//! boundary only; [`backend::X11rbConn`] is the one production
//! implementation, built on `x11rb`.

pub mod atom;
pub mod backend;
pub mod event;
pub mod property;

pub use atom::Atom;
pub use event::XEvent;
pub use property::{Prop, WindowAttributes, WmHints, WmState};

use crate::error::Result;
use crate::geometry::{Point, Rect};

/// An opaque X resource id (window, pixmap, atom value, ...).
pub type Xid = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WinType {
    /// A hidden utility window (EWMH supporting-wm-check, systray host).
    CheckWin,
    InputOnly,
    InputOutput(Atom),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientConfig {
    BorderPx(u32),
    Position(Rect),
    StackAbove(Xid),
    StackBelow(Xid),
    StackTop,
    StackBottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientAttr {
    BorderColor(u32),
    ClientEventMask,
    ClientUnmapMask,
    RootEventMask,
    OverrideRedirect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCombo {
    pub mods: u16,
    pub keycode: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonCombo {
    pub mods: u16,
    pub button: u8,
}

/// The ambient X operations the core needs, with no assumption about the
/// underlying transport beyond "X idioms".
pub trait XConn {
    fn root(&self) -> Xid;
    fn screen_rects(&self) -> Result<Vec<Rect>>;
    fn cursor_position(&self) -> Result<Point>;

    fn grab_keys(&self, combos: &[KeyCombo]) -> Result<()>;
    /// Translate an X keysym numeric value (from [`crate::bindings::resolve_keysym`])
    /// into the keycode the current keyboard mapping assigns it, if any.
    fn keysym_to_keycode(&self, keysym: u32) -> Result<Option<u8>>;
    fn grab_buttons(&self, win: Xid, combos: &[ButtonCombo], focused_only: bool) -> Result<()>;
    fn grab_pointer_for_drag(&self) -> Result<()>;
    fn ungrab_pointer(&self) -> Result<()>;

    fn next_event(&self) -> Result<XEvent>;
    /// Poll without blocking, used inside mouse-drag re-entrant loops
    /// to keep ConfigureRequest/Expose/MapRequest
    /// flowing while the pointer is grabbed.
    fn poll_event(&self) -> Result<Option<XEvent>>;
    fn flush(&self);
    fn sync(&self);

    fn intern_atom(&self, name: &str) -> Result<Xid>;
    fn atom_name(&self, xid: Xid) -> Result<String>;

    fn get_prop(&self, win: Xid, name: &str) -> Result<Option<Prop>>;
    fn set_prop(&self, win: Xid, name: &str, val: Prop) -> Result<()>;
    fn delete_prop(&self, win: Xid, name: &str) -> Result<()>;
    fn get_wm_state(&self, win: Xid) -> Result<Option<WmState>>;
    fn set_wm_state(&self, win: Xid, state: WmState) -> Result<()>;
    fn get_window_attributes(&self, win: Xid) -> Result<WindowAttributes>;
    /// Query `win`'s current geometry relative to its parent. Used where a
    /// client's own reported size must be read rather than assumed, e.g.
    /// sizing a docked systray icon to its embedded window.
    fn get_geometry(&self, win: Xid) -> Result<Rect>;
    fn get_text_property(&self, win: Xid, prop: &str) -> Result<Option<String>>;

    fn create_window(&self, kind: WinType, rect: Rect, managed: bool) -> Result<Xid>;
    /// Reparent `win` under `parent` at the given offset — the one
    /// operation real XEmbed docking needs that no other managed-
    /// client path requires, since ordinary clients are never reparented.
    fn reparent(&self, win: Xid, parent: Xid, x: i16, y: i16) -> Result<()>;
    fn existing_clients(&self) -> Result<Vec<Xid>>;
    fn map(&self, win: Xid) -> Result<()>;
    fn unmap(&self, win: Xid) -> Result<()>;
    fn destroy(&self, win: Xid) -> Result<()>;
    fn kill(&self, win: Xid) -> Result<()>;
    fn set_client_config(&self, win: Xid, data: &[ClientConfig]) -> Result<()>;
    fn set_client_attributes(&self, win: Xid, attrs: &[ClientAttr]) -> Result<()>;
    fn set_input_focus(&self, win: Xid) -> Result<()>;
    fn send_protocol_message(&self, win: Xid, protocol_atom: &str) -> Result<bool>;
    fn send_client_message(&self, win: Xid, type_atom: &str, data: [u32; 5]) -> Result<()>;

    fn warp_pointer(&self, win: Xid, x: i16, y: i16) -> Result<()>;

    /// Install a dummy error handler bracket for multi-call sequences
    /// that must not race a client-side disappearance.
    fn grab_server(&self) -> Result<()>;
    fn ungrab_server(&self) -> Result<()>;

    /// Attempt to take ownership of a selection (`_NET_SYSTEM_TRAY_S0`).
    /// Returns `Ok(true)` if ownership was acquired.
    fn acquire_selection(&self, selection_atom: &str, owner: Xid) -> Result<bool>;

    /// Read and decode the `RESOURCE_MANAGER` string property on the root.
    fn resource_manager_string(&self) -> Result<Option<String>>;
}
