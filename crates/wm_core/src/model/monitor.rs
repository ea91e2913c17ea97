//! The `Monitor` record: one logical X output and the per-monitor client
//! chains it owns.
//!
//! Modeled on a `Screen`/stack-set split, flattened so each monitor
//! keeps its own attach-order and focus-stack list heads (as
//! `Option<ClientId>` chains through `Client::next_in_clients` /
//! `next_in_stack`) rather than one globally shared list, maintaining
//! the invariant that `client ∈ clients[m] ⇔ client ∈ stack[m] ⇔ client.mon = m`.

use crate::geometry::Rect;
use crate::layout::LayoutKind;
use crate::model::ids::{ClientId, MonitorId};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gaps {
    pub inner_h: u32,
    pub inner_v: u32,
    pub outer_h: u32,
    pub outer_v: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPosition {
    Top,
    Bottom,
}

/// A single bar window owned by a monitor. Drawing/module composition is
/// `wm_ui`'s concern; this is only the geometry and handle the core needs
/// to reserve work-area space and route click events.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    pub win: u32,
    pub rect: Rect,
    pub position: BarPosition,
    pub visible: bool,
}

pub struct Monitor {
    pub id: MonitorId,
    pub screen: Rect,
    pub work_area: Rect,
    pub gaps: Gaps,

    pub mfact: f32,
    pub nmaster: u32,
    pub show_bar: bool,

    /// Current/previous tagset, selected by `seltags`.
    pub tagset: [u32; 2],
    pub seltags: usize,

    /// Current/previous layout, selected by `sellt`.
    pub layouts: [LayoutKind; 2],
    pub sellt: usize,
    pub lt_symbol: String,

    pub sel: Option<ClientId>,
    pub clients_head: Option<ClientId>,
    pub stack_head: Option<ClientId>,

    pub bars: Vec<Bar>,
}

impl Monitor {
    pub fn new(id: MonitorId, screen: Rect, default_tags: u32, default_layout: LayoutKind) -> Self {
        Self {
            id,
            screen,
            work_area: screen,
            gaps: Gaps::default(),
            mfact: 0.55,
            nmaster: 1,
            show_bar: true,
            tagset: [default_tags, default_tags],
            seltags: 0,
            layouts: [default_layout, LayoutKind::Floating],
            sellt: 0,
            lt_symbol: default_layout.symbol().to_string(),
            sel: None,
            clients_head: None,
            stack_head: None,
            bars: Vec::new(),
        }
    }

    pub fn seltags_mask(&self) -> u32 {
        self.tagset[self.seltags]
    }

    pub fn cur_layout(&self) -> LayoutKind {
        self.layouts[self.sellt]
    }

    pub fn set_mfact(&mut self, f: f32) {
        if (0.05..=0.95).contains(&f) {
            self.mfact = f;
        }
        // out-of-range is a silent no-op
    }

    pub fn inc_nmaster(&mut self, delta: i32) {
        let next = self.nmaster as i32 + delta;
        self.nmaster = next.max(0) as u32; // never below 0
    }

    pub fn client_rect(&self) -> Rect {
        self.work_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Monitor {
        Monitor::new(MonitorId::from_index(0), Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile)
    }

    #[test]
    fn mfact_clamps_to_range() {
        let mut m = fresh();
        m.set_mfact(0.7);
        assert_eq!(m.mfact, 0.7);
        m.set_mfact(0.96);
        assert_eq!(m.mfact, 0.7, "out of range is a no-op");
        m.set_mfact(0.04);
        assert_eq!(m.mfact, 0.7, "out of range is a no-op");
        m.set_mfact(0.05);
        assert_eq!(m.mfact, 0.05, "boundary value is accepted");
    }

    #[test]
    fn nmaster_never_goes_negative() {
        let mut m = fresh();
        assert_eq!(m.nmaster, 1);
        m.inc_nmaster(-5);
        assert_eq!(m.nmaster, 0);
        m.inc_nmaster(-1);
        assert_eq!(m.nmaster, 0, "already at floor, stays at floor");
        m.inc_nmaster(3);
        assert_eq!(m.nmaster, 3);
    }
}
