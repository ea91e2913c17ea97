//! The layout engine: pure functions from (monitor work area, ordered
//! tileable clients) to per-client rectangles.
//!
//! Modeled on a `Layout` trait + built-in layout module, replaced here
//! per the Design Notes' preference for data over polymorphism:
//! `LayoutKind` is a data-less enum dispatching to free functions in
//! [`algorithms`], not a `Box<dyn Layout>`.

pub mod algorithms;
pub mod floatpos;

use crate::geometry::Rect;
use crate::model::monitor::Gaps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum LayoutKind {
    Tile,
    Floating,
    Monocle,
    Deck,
    Bstack,
    BstackHoriz,
    Grid,
    NRowGrid,
    HorizGrid,
    GaplessGrid,
    CenteredMaster,
    CenteredFloatingMaster,
    Spiral,
    Dwindle,
}

impl LayoutKind {
    /// Static layout symbol shown in the bar's `ltsymbol` module. `Monocle`
    /// and `Deck` override this with a client count at arrange time
    ///.
    pub fn symbol(&self) -> &'static str {
        match self {
            LayoutKind::Tile => "[]=",
            LayoutKind::Floating => "><>",
            LayoutKind::Monocle => "[M]",
            LayoutKind::Deck => "D[]",
            LayoutKind::Bstack => "TTT",
            LayoutKind::BstackHoriz => "===",
            LayoutKind::Grid => "HHH",
            LayoutKind::NRowGrid => "###",
            LayoutKind::HorizGrid => "---",
            LayoutKind::GaplessGrid => ":::",
            LayoutKind::CenteredMaster => "|M|",
            LayoutKind::CenteredFloatingMaster => ">M>",
            LayoutKind::Spiral => "(@)",
            LayoutKind::Dwindle => "[\\]",
        }
    }

    pub fn dynamic_symbol(&self, n_visible: usize) -> Option<String> {
        match self {
            LayoutKind::Monocle => Some(format!("[{n_visible}]")),
            LayoutKind::Deck => Some(format!("D[{n_visible}]")),
            _ => None,
        }
    }

    /// Does this layout honor size hints unconditionally (the
    /// "monitor has no layout (floating mode)" case)?
    pub fn is_floating_mode(&self) -> bool {
        matches!(self, LayoutKind::Floating)
    }
}

/// Shrink `gaps` per the smartgaps rule: when exactly one
/// tileable client is visible, outer gaps are multiplied by `smartgaps`
/// (default 3) instead of applied once.
pub fn effective_gaps(gaps: Gaps, n: usize, smartgaps: u32) -> Gaps {
    if n == 1 {
        Gaps {
            inner_h: gaps.inner_h,
            inner_v: gaps.inner_v,
            outer_h: gaps.outer_h.saturating_mul(smartgaps),
            outer_v: gaps.outer_v.saturating_mul(smartgaps),
        }
    } else {
        gaps
    }
}

/// Arrange `n` tileable clients (already filtered to non-floating,
/// visible, in attach-order) within `area`. Returns one rect per input
/// client, same order. `area` is the monitor's work area; gaps are
/// applied internally per layout.
pub fn arrange(kind: LayoutKind, area: Rect, gaps: Gaps, mfact: f32, nmaster: u32, n: usize, smartgaps: u32) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let gaps = effective_gaps(gaps, n, smartgaps);
    let area = area.inset(gaps.outer_h, gaps.outer_v, gaps.outer_h, gaps.outer_v);
    match kind {
        LayoutKind::Tile | LayoutKind::Floating => algorithms::tile(area, gaps, mfact, nmaster, n),
        LayoutKind::Monocle => algorithms::monocle(area, n),
        LayoutKind::Deck => algorithms::deck(area, gaps, mfact, nmaster, n),
        LayoutKind::Bstack => algorithms::bstack(area, gaps, mfact, nmaster, n),
        LayoutKind::BstackHoriz => algorithms::bstackhoriz(area, gaps, mfact, nmaster, n),
        LayoutKind::Grid => algorithms::grid(area, gaps, n),
        LayoutKind::NRowGrid => algorithms::nrowgrid(area, gaps, nmaster, n),
        LayoutKind::HorizGrid => algorithms::horizgrid(area, gaps, n),
        LayoutKind::GaplessGrid => algorithms::gaplessgrid(area, n),
        LayoutKind::CenteredMaster => algorithms::centeredmaster(area, gaps, mfact, nmaster, n),
        LayoutKind::CenteredFloatingMaster => algorithms::centeredfloatingmaster(area, mfact, nmaster, n),
        LayoutKind::Spiral => algorithms::fibonacci(area, n, true),
        LayoutKind::Dwindle => algorithms::fibonacci(area, n, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAPLESS: Gaps = Gaps { inner_h: 0, inner_v: 0, outer_h: 0, outer_v: 0 };

    #[test]
    fn monocle_fills_the_whole_work_area() {
        let area = Rect::new(0, 0, 1920, 1040);
        let rects = arrange(LayoutKind::Monocle, area, GAPLESS, 0.55, 1, 3, 3);
        for r in rects {
            assert_eq!(r, area);
        }
    }

    #[test]
    fn single_client_gets_smartgaps_outer_multiplier() {
        let gaps = Gaps { inner_h: 4, inner_v: 4, outer_h: 4, outer_v: 4 };
        let widened = effective_gaps(gaps, 1, 3);
        assert_eq!(widened.outer_h, 12);
        assert_eq!(widened.outer_v, 12);
        assert_eq!(widened.inner_h, 4);

        let unaffected = effective_gaps(gaps, 2, 3);
        assert_eq!(unaffected.outer_h, 4);
    }

    #[test]
    fn tile_master_and_stack_geometry() {
        let area = Rect::new(0, 0, 1920, 1080);
        let rects = arrange(LayoutKind::Tile, area, GAPLESS, 0.55, 1, 2, 3);
        assert_eq!(rects[0], Rect::new(0, 0, 1056, 1080));
        assert_eq!(rects[1], Rect::new(1056, 0, 864, 1080));
    }
}
