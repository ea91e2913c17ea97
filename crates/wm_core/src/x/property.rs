//! Decoded X property values.
//!
//! Modeled on a `{Prop, WindowAttributes,
//! WmState}` shapes.

use crate::geometry::Rect;
use crate::model::client::SizeHints;

#[derive(Debug, Clone, PartialEq)]
pub enum Prop {
    UTF8String(Vec<String>),
    Cardinal(Vec<u32>),
    Atom(Vec<String>),
    Window(Vec<u32>),
    String(Vec<String>),
}

impl Prop {
    pub fn first_string(&self) -> Option<&str> {
        match self {
            Prop::UTF8String(v) | Prop::Atom(v) | Prop::String(v) => v.first().map(String::as_str),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmState {
    Withdrawn,
    Normal,
    Iconic,
}

impl WmState {
    pub fn as_u32(self) -> u32 {
        match self {
            WmState::Withdrawn => 0,
            WmState::Normal => 1,
            WmState::Iconic => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowAttributes {
    pub override_redirect: bool,
    pub mapped: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WmHints {
    pub urgent: bool,
    pub input: bool,
    pub accepts_input: bool,
}

/// Decoded `WM_CLASS`: (instance, class).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassHint {
    pub instance: String,
    pub class: String,
}

/// Raw `WM_NORMAL_HINTS` before being folded into [`SizeHints`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalHints {
    pub position: Option<(i32, i32)>,
    pub size: Option<(i32, i32)>,
    pub size_hints: SizeHints,
}

/// `_MOTIF_WM_HINTS` decoration bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifHints {
    pub decorations: bool,
}

pub fn clamp_to_screen(rect: Rect, screen: Rect) -> Rect {
    let x = rect.x.clamp(screen.x, screen.x + screen.w as i32 - rect.w.min(screen.w) as i32);
    let y = rect.y.clamp(screen.y, screen.y + screen.h as i32 - rect.h.min(screen.h) as i32);
    Rect::new(x, y, rect.w, rect.h)
}
