//! The `Client` record: one managed top-level X window.
//!
//! Modeled on `Window`/stack-set client bookkeeping, adapted to this
//! crate's data model. Clients are threaded through intrusive parent/sibling
//! links in some designs; here every link is an id into
//! [`crate::World::clients`] (Design Notes: arenas with stable indices),
//! and attach/focus order are kept as singly linked chains of
//! `Option<ClientId>` mirroring the
//! original's `next`/`snext` pointers.

use crate::geometry::Rect;
use crate::model::flags::ClientFlags;
use crate::model::ids::{ClientId, MonitorId};

pub type Window = u32;

/// WM_NORMAL_HINTS / WM_HINTS derived sizing constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHints {
    pub base_w: i32,
    pub base_h: i32,
    pub inc_w: i32,
    pub inc_h: i32,
    pub max_w: i32,
    pub max_h: i32,
    pub min_w: i32,
    pub min_h: i32,
    pub min_aspect: f64,
    pub max_aspect: f64,
}

impl Default for SizeHints {
    fn default() -> Self {
        Self {
            base_w: 0,
            base_h: 0,
            inc_w: 0,
            inc_h: 0,
            max_w: 0,
            max_h: 0,
            min_w: 0,
            min_h: 0,
            min_aspect: 0.0,
            max_aspect: 0.0,
        }
    }
}

/// A snapshot of a client's on-screen geometry, used both as "current" and
/// as the "old" geometry saved before a transient change (fullscreen,
/// move/resize drag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub rect: Rect,
    pub border_width: u32,
}

/// A hidden child client that has been swallowed by a terminal.
/// Carries exactly what's needed to restore it as an independent client
/// when the swallowing parent is destroyed or the child's window is gone.
#[derive(Debug, Clone)]
pub struct Swallowed {
    pub win: Window,
    pub pid: u32,
    pub title: String,
    pub geom: Geometry,
    pub tags: u32,
    pub flags: ClientFlags,
}

#[derive(Debug, Clone)]
pub struct Client {
    pub win: Window,
    pub pid: u32,
    pub title: String,

    pub geom: Geometry,
    pub old_geom: Geometry,

    pub hints: SizeHints,
    pub ignore_size_hints_for_layout: bool,

    pub flags: ClientFlags,
    /// Saved `isfloating` value from just before `setfullscreen(true)`,
    /// restored by `setfullscreen(false)`.
    pub oldstate: bool,

    pub tags: u32,
    pub mon: MonitorId,

    /// Next client in this monitor's attach-order list (most recently
    /// attached first). `None` at the tail.
    pub next_in_clients: Option<ClientId>,
    /// Next client in this monitor's focus stack (MRU first).
    pub next_in_stack: Option<ClientId>,

    /// Present when this client is a terminal currently hiding a swallowed
    /// child window.
    pub swallowing: Option<Box<Swallowed>>,
}

impl Client {
    pub fn new(win: Window, mon: MonitorId, tags: u32) -> Self {
        Self {
            win,
            pid: 0,
            title: String::new(),
            geom: Geometry::default(),
            old_geom: Geometry::default(),
            hints: SizeHints::default(),
            ignore_size_hints_for_layout: false,
            flags: ClientFlags::default(),
            oldstate: false,
            tags,
            mon,
            next_in_clients: None,
            next_in_stack: None,
            swallowing: None,
        }
    }

    pub fn is_floating(&self) -> bool {
        self.flags.contains(ClientFlags::FLOATING)
    }

    pub fn is_urgent(&self) -> bool {
        self.flags.contains(ClientFlags::URGENT)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.flags.contains(ClientFlags::FULLSCREEN)
    }

    pub fn is_fixed(&self) -> bool {
        self.flags.contains(ClientFlags::FIXED)
    }

    pub fn is_terminal(&self) -> bool {
        self.flags.contains(ClientFlags::TERMINAL)
    }

    pub fn no_swallow(&self) -> bool {
        self.flags.contains(ClientFlags::NO_SWALLOW)
    }

    pub fn never_focus(&self) -> bool {
        self.flags.contains(ClientFlags::NEVER_FOCUS)
    }

    pub fn is_being_moved(&self) -> bool {
        self.flags.contains(ClientFlags::BEING_MOVED)
    }

    /// Is this client visible on `mon_tags`, the tagset currently shown on
    /// its monitor? The `255` sentinel (systray placeholders and a few
    /// occupation queries) is always visible.
    pub fn is_visible_on(&self, mon_tags: u32) -> bool {
        self.tags == crate::model::tags::OMNIPRESENT || (self.tags & mon_tags) != 0
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.geom.rect.w as f64 / self.geom.rect.h.max(1) as f64
    }
}
