//! The status bar composer.
//!
//! Modeled on a `DrawContext`-driven widget loop, adapted per
//! the Design Notes' enum-over-trait-object preference: bar modules are a
//! tagged [`BarModuleKind`] the composer matches on, not `Box<dyn Widget>`.
//! Layout follows dwm's bar: tags + layout symbol packed from the left,
//! the status text packed from the right, the window title filling
//! whatever space is left in the middle (elided, never overlapped).

pub mod status2d;

use wm_core::config::Config;
use wm_core::model::monitor::Monitor;
use wm_core::model::world::World;

use crate::color::ColorRole;
use crate::draw::{Context, Draw};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarModuleKind {
    /// One clickable segment per configured tag, shaded by occupied/
    /// active/urgent state.
    Tags,
    /// The current layout's one/two-character symbol (`cur_layout().symbol()`).
    LtSymbol,
    /// The focused client's title, eliding to fit whatever space is left
    /// once every other module has been packed.
    WinTitle,
    /// The parsed root-window status text.
    Status2D,
}

/// `Tags` and `WinTitle` are meant to live on [`Alignment::Left`] — they
/// grow with content the composer can't pre-measure without drawing them,
/// which only [`StatusBar::redraw`]'s left-pass does. The compiled-in
/// default config never places them on the right; nothing stops a custom
/// config from doing so, but the result will overlap whatever else is
/// packed on that side.
#[derive(Debug, Clone, Copy)]
pub struct BarModule {
    pub kind: BarModuleKind,
    pub align: Alignment,
}

/// One rendered module's pixel span, kept around so button-press routing
/// can recover which module a click landed on
/// without re-measuring text.
pub struct LaidOutModule {
    pub kind: BarModuleKind,
    pub x: i32,
    pub w: u32,
}

pub struct StatusBar {
    pub modules: Vec<BarModule>,
    /// Raw text last read from the root window's name property.
    pub status_text: String,
    last_layout: Vec<LaidOutModule>,
}

impl StatusBar {
    pub fn new(modules: Vec<BarModule>) -> Self {
        Self { modules, status_text: String::new(), last_layout: Vec::new() }
    }

    /// Which module (if any) a click at `x` pixels into the bar landed on,
    /// from the layout computed by the most recent [`Self::redraw`].
    pub fn module_at(&self, x: i32) -> Option<&LaidOutModule> {
        self.last_layout.iter().find(|m| x >= m.x && (x as u32) < m.x as u32 + m.w)
    }

    /// Which tag index (if any) a click at `x` landed on, given the tag
    /// module's laid-out span and the configured tag count — used by
    /// `on_button_press` to translate a bar click into a `View`/`Tag`
    /// action without the composer exposing per-tag spans directly.
    pub fn tag_at(&self, x: i32, cfg: &Config) -> Option<u32> {
        let m = self.last_layout.iter().find(|m| m.kind == BarModuleKind::Tags)?;
        if x < m.x || (x as u32) >= m.x as u32 + m.w {
            return None;
        }
        let frac = (x - m.x) as f32 / m.w.max(1) as f32;
        let idx = (frac * cfg.tag_names.len() as f32) as usize;
        Some(1u32 << idx.min(cfg.tag_names.len().saturating_sub(1)))
    }

    /// Compose and draw one monitor's bar.
    pub fn redraw(&mut self, draw: &mut Draw, cfg: &Config, world: &World, mon: &Monitor, win: u32) {
        let width = mon.bars.first().map(|b| b.rect.w).unwrap_or(mon.screen.w);
        let height = draw.bar_height();
        let Ok(mut ctx) = draw.context_for(win, width, height) else { return };
        ctx.clear();

        let title = mon.sel.and_then(|id| world.client(id)).map(|c| c.title.as_str()).unwrap_or("");

        let mut layout = Vec::new();
        let mut left_x = 0i32;
        let mut right_x = width as i32;
        let mut title_slot: Option<usize> = None;

        for (i, module) in self.modules.iter().enumerate() {
            match (module.align, module.kind) {
                (Alignment::Left, BarModuleKind::WinTitle) => {
                    title_slot = Some(layout.len());
                    layout.push(LaidOutModule { kind: module.kind, x: left_x, w: 0 });
                }
                (Alignment::Left, kind) => {
                    ctx.set_x_offset(left_x);
                    let w = draw_module(&mut ctx, kind, cfg, world, mon, &self.status_text);
                    layout.push(LaidOutModule { kind, x: left_x, w });
                    left_x += w as i32;
                }
                (Alignment::Right, kind) => {
                    let w = measure_module(&mut ctx, kind, &self.status_text);
                    right_x -= w as i32;
                    ctx.set_x_offset(right_x);
                    draw_module(&mut ctx, kind, cfg, world, mon, &self.status_text);
                    layout.push(LaidOutModule { kind, x: right_x, w });
                }
            }
        }

        if let Some(i) = title_slot {
            let budget = (right_x - left_x).max(0) as u32;
            ctx.set_x_offset(left_x);
            let elided = elide(title, &mut ctx, budget.saturating_sub(8));
            let w = ctx.text(8, &elided, ColorRole::Fg);
            layout[i].x = left_x;
            layout[i].w = w.min(budget);
        }

        self.last_layout = layout;
        ctx.present();
    }
}

fn draw_module(ctx: &mut Context<'_>, kind: BarModuleKind, cfg: &Config, world: &World, mon: &Monitor, status: &str) -> u32 {
    match kind {
        BarModuleKind::Tags => draw_tags(ctx, cfg, world, mon),
        BarModuleKind::LtSymbol => ctx.text(8, &mon.lt_symbol, ColorRole::Fg),
        BarModuleKind::WinTitle => 0,
        BarModuleKind::Status2D => draw_status(ctx, status),
    }
}

fn measure_module(ctx: &mut Context<'_>, kind: BarModuleKind, status: &str) -> u32 {
    match kind {
        BarModuleKind::Status2D => {
            let plain: String = status2d::parse(status)
                .into_iter()
                .filter_map(|s| match s {
                    status2d::Segment::Text { content, .. } => Some(content),
                    status2d::Segment::BlockBoundary => None,
                })
                .collect();
            ctx.text_extent(&plain).0 + 16
        }
        BarModuleKind::LtSymbol => ctx.text_extent("").0,
        _ => 0,
    }
}

fn draw_tags(ctx: &mut Context<'_>, cfg: &Config, world: &World, mon: &Monitor) -> u32 {
    let occupied = tag_mask(world, mon, |_| true);
    let urgent = tag_mask(world, mon, |c| c.is_urgent());
    let start_x = ctx.x_offset();
    let mut drawn = 0u32;
    for (i, name) in cfg.tag_names.iter().enumerate() {
        let bit = 1u32 << i;
        let active = mon.seltags_mask() & bit != 0;
        let role = if urgent & bit != 0 {
            ColorRole::Border
        } else if active {
            ColorRole::Accent
        } else {
            ColorRole::Fg
        };
        let w_drawn = ctx.text(8, name, role);
        if occupied & bit != 0 {
            ctx.rectangle(start_x + drawn as i32 + 2, 2, 3, 3, ColorRole::Accent);
        }
        ctx.set_x_offset(start_x + drawn as i32 + w_drawn as i32);
        drawn += w_drawn;
    }
    drawn
}

fn tag_mask(world: &World, mon: &Monitor, pred: impl Fn(&wm_core::Client) -> bool) -> u32 {
    let mut mask = 0;
    for id in world.clients_of(mon.id) {
        if let Some(c) = world.client(id) {
            if pred(c) {
                mask |= c.tags;
            }
        }
    }
    mask
}

fn draw_status(ctx: &mut Context<'_>, status: &str) -> u32 {
    let segments = status2d::parse(status);
    let start_x = ctx.x_offset();
    ctx.set_x_offset(start_x + 8);
    let mut drawn = 8u32;
    for seg in segments {
        if let status2d::Segment::Text { content, fg, .. } = seg {
            let role = match fg {
                Some(rgb) => ctx.alloc_ad_hoc(rgb),
                None => ColorRole::Fg,
            };
            let w_drawn = ctx.text(0, &content, role);
            ctx.set_x_offset(start_x + drawn as i32 + w_drawn as i32);
            drawn += w_drawn;
        }
    }
    drawn
}

fn elide(text: &str, ctx: &mut Context<'_>, budget: u32) -> String {
    if ctx.text_extent(text).0 <= budget {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        let candidate = format!("{out}{c}\u{2026}");
        if ctx.text_extent(&candidate).0 > budget {
            break;
        }
        out.push(c);
    }
    format!("{out}\u{2026}")
}
