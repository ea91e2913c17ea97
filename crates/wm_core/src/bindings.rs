//! Input Binder.
//!
//! Modeled on a `{KeyCode, KeyBindings}`-style
//! shape, adapted per the Design Notes' "tagged variants over virtual
//! dispatch" preference: actions are a data-only `Action` enum matched
//! by the dispatcher, not `Box<dyn FnMut>` closures — the compiled-in
//! binding table stays introspectable (`iter()` over it can be printed,
//! diffed, or re-grabbed without downcasting a trait object).

use std::str::FromStr;

use crate::layout::LayoutKind;
use crate::x::{ButtonCombo, KeyCombo};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Spawn(Vec<String>),
    FocusStack(i32),
    PushStack(i32),
    View(u32),
    ToggleView(u32),
    Tag(u32),
    ToggleTag(u32),
    FocusOrView(u32),
    SetLayout(LayoutKind),
    ToggleFloating,
    SetFloatPos(String),
    IncNMaster(i32),
    SetMfact(f32),
    KillClient,
    ToggleFullscreen,
    ToggleScratchpad(u32),
    ToggleBar,
    Quit,
    Restart,
    Xrdb,
}

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub combo: KeyCombo,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

#[derive(Debug, Clone)]
pub struct ButtonBinding {
    pub combo: ButtonCombo,
    pub on_client: bool,
    pub action: ButtonAction,
}

#[derive(Debug, Clone)]
pub enum ButtonAction {
    Drag(DragKind),
    FocusClient,
    RunAction(Action),
}

pub fn grab_combos(bindings: &[KeyBinding]) -> Vec<KeyCombo> {
    bindings.iter().map(|b| b.combo).collect()
}

/// Resolve a compiled-in key name (e.g. `"Return"`, `"F1"`) to its X
/// keysym numeric value via the vendored `wm_keysyms` table. The table's
/// `as_utf8_string` round-trips the keysym value through a one-codepoint
/// `String`; decoding that single `char` back to `u32` recovers it
/// without duplicating the generated match.
pub fn resolve_keysym(name: &str) -> Option<u32> {
    let sym = wm_keysyms::XKeySym::from_str(name).ok()?;
    sym.as_utf8_string().ok()?.chars().next().map(|c| c as u32)
}
