//! System tray host: an `_NET_SYSTEM_TRAY_S0`
//! selection owner that docks XEmbed client windows into a strip on the
//! bar.
//!
//! Modeled on selection-ownership + `ClientMessage`
//! handling pattern (`x::event` translation, `XConn::acquire_selection`),
//! generalized from "one hook reacting to a message" into the full XEmbed
//! handshake: claim the selection, announce it via `MANAGER` on the root,
//! reparent each docked icon under the tray window, and keep `World`'s
//! bookkeeping (`systray_icons`) in sync as icons map/unmap.

use wm_core::geometry::Rect;
use wm_core::model::{ClientId, World};
use wm_core::x::{ClientAttr, Prop, WinType, XConn, Xid};
use wm_core::Client;

const XEMBED_MAPPED: u32 = 1 << 0;
const SYSTEM_TRAY_REQUEST_DOCK: u32 = 0;
const ICON_PAD: u32 = 2;

pub struct Systray {
    pub win: Xid,
    /// The bar's font height: every docked icon is normalized to this
    /// height, aspect ratio preserved, width clamped to 2x this value.
    pub icon_size: u32,
}

/// Height-normalize `geom` to `font_height`, preserving aspect ratio, and
/// clamp the resulting width to `2 * font_height` for icons reporting an
/// unreasonably wide geometry.
fn normalized_icon_size(geom: Rect, font_height: u32) -> (u32, u32) {
    let h = font_height.max(1);
    if geom.h == 0 {
        return (h, h);
    }
    let w = (geom.w as u64 * h as u64 / geom.h as u64).max(1) as u32;
    (w.min(2 * h), h)
}

/// Claim `_NET_SYSTEM_TRAY_S0`, create the host window and announce
/// ownership via a `MANAGER` message on the root (dwm's `systray`/"fake
/// signal" startup sequence, generalized to go through `XConn` instead of
/// raw Xlib calls). Returns `None` if another tray host already owns the
/// selection — only one tray runs at a time.
pub fn init<X: XConn>(x: &X, icon_size: u32) -> wm_core::Result<Option<Systray>> {
    let win = x.create_window(WinType::CheckWin, Rect::new(-1, -1, 1, 1), false)?;
    x.set_client_attributes(win, &[ClientAttr::OverrideRedirect])?;
    let acquired = x.acquire_selection("_NET_SYSTEM_TRAY_S0", win)?;
    if !acquired {
        x.destroy(win)?;
        return Ok(None);
    }
    x.set_prop(win, "_NET_SYSTEM_TRAY_ORIENTATION", Prop::Cardinal(vec![0]))?;
    let manager_atom = x.intern_atom("_NET_SYSTEM_TRAY_S0")?;
    x.send_client_message(x.root(), "MANAGER", [x11rb_current_time(), manager_atom, win, 0, 0])?;
    x.map(win)?;
    Ok(Some(Systray { win, icon_size }))
}

/// `x11rb::CURRENT_TIME` isn't reachable from this crate (no x11rb
/// dependency); `0` means "current time" to every X server per the
/// protocol spec, same as `CURRENT_TIME`'s defined value.
fn x11rb_current_time() -> u32 {
    0
}

impl Systray {
    /// Dispatch one `_NET_SYSTEM_TRAY_OPCODE` client message. Returns
    /// `true` if it was a dock request this host handled.
    pub fn handle_opcode<X: XConn>(&self, x: &X, w: &mut World, type_atom: Xid, data: [u32; 5]) -> wm_core::Result<bool> {
        let opcode_atom = x.intern_atom("_NET_SYSTEM_TRAY_OPCODE")?;
        if type_atom != opcode_atom || data[1] != SYSTEM_TRAY_REQUEST_DOCK {
            return Ok(false);
        }
        let icon_win = data[2];
        self.dock(x, w, icon_win)?;
        Ok(true)
    }

    /// Reparent `icon_win` under the tray host and record it in
    /// `World.systray_icons` as a placeholder `Client` — never linked into
    /// any monitor's attach/stack chains (the attach/stack invariant deliberately excludes
    /// systray icons, per `wm_core::model::world`).
    fn dock<X: XConn>(&self, x: &X, w: &mut World, icon_win: Xid) -> wm_core::Result<()> {
        if w.systray_icons.iter().any(|&id| w.client(id).map_or(false, |c| c.win == icon_win)) {
            return Ok(());
        }
        x.reparent(icon_win, self.win, 0, 0)?;
        x.set_client_attributes(icon_win, &[ClientAttr::ClientEventMask])?;
        send_xembed_notify(x, icon_win, self.win)?;
        x.map(icon_win)?;

        let reported = x.get_geometry(icon_win).unwrap_or(Rect::new(0, 0, self.icon_size, self.icon_size));
        let (iw, ih) = normalized_icon_size(reported, self.icon_size);

        let mut c = Client::new(icon_win, w.selmon, wm_core::model::tags::OMNIPRESENT);
        c.geom.rect = Rect::new(0, 0, iw, ih);
        let id = w.alloc_client(c);
        w.systray_icons.push(id);
        Ok(())
    }

    /// Drop a tray icon when its window disappears (`UnmapNotify`/
    /// `DestroyNotify` routed here by the dispatcher before the ordinary
    /// `unmanage` path, since systray icons never entered it).
    pub fn undock(&self, w: &mut World, win: Xid) -> Option<ClientId> {
        let id = w.systray_icons.iter().position(|&id| w.client(id).map_or(false, |c| c.win == win))?;
        let client_id = w.systray_icons.remove(id);
        w.free_client(client_id);
        Some(client_id)
    }

    /// Lay out every docked icon left to right inside a `width`-wide strip
    /// anchored at the right edge of the bar, returning the total strip
    /// width the bar composer should reserve.
    pub fn reposition<X: XConn>(&self, x: &X, w: &World, bar_rect: Rect) -> wm_core::Result<u32> {
        if w.systray_icons.is_empty() {
            x.unmap(self.win)?;
            return Ok(0);
        }
        let widths: Vec<u32> = w.systray_icons.iter().map(|&id| w.client(id).map_or(self.icon_size, |c| c.geom.rect.w)).collect();
        let strip_w: u32 = widths.iter().sum::<u32>() + ICON_PAD * (widths.len() as u32 + 1);
        let host_rect = Rect::new(bar_rect.x + bar_rect.w as i32 - strip_w as i32, bar_rect.y, strip_w, bar_rect.h);
        x.set_client_config(self.win, &[wm_core::x::ClientConfig::Position(host_rect)])?;
        x.map(self.win)?;

        let mut cursor_x = ICON_PAD as i32;
        for (&id, &iw) in w.systray_icons.iter().zip(widths.iter()) {
            let Some(c) = w.client(id) else { continue };
            let ih = c.geom.rect.h;
            let rect = Rect::new(cursor_x, (bar_rect.h.saturating_sub(ih) / 2) as i32, iw, ih);
            x.set_client_config(c.win, &[wm_core::x::ClientConfig::Position(rect)])?;
            cursor_x += iw as i32 + ICON_PAD as i32;
        }
        Ok(strip_w)
    }
}

/// XEmbed handshake: tell the newly docked window it's embedded (opcode 0,
/// `XEMBED_EMBEDDED_NOTIFY`) so XEmbed-aware clients (most tray icons)
/// start accepting input/paint into the reparented window instead of
/// treating it as still top-level.
fn send_xembed_notify<X: XConn>(x: &X, icon_win: Xid, host: Xid) -> wm_core::Result<()> {
    const XEMBED_EMBEDDED_NOTIFY: u32 = 0;
    x.send_client_message(icon_win, "_XEMBED", [0, XEMBED_EMBEDDED_NOTIFY, 0, host, XEMBED_MAPPED])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wm_core::layout::LayoutKind;

    fn world_with_one_mon() -> World {
        let mut w = World::new(wm_core::model::tags::TagConfig::new(9, 1));
        let mon = w.alloc_monitor(Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile);
        w.selmon = mon;
        w
    }

    #[test]
    fn undock_removes_the_client_record() {
        let mut w = world_with_one_mon();
        let mut c = Client::new(77, w.selmon, wm_core::model::tags::OMNIPRESENT);
        c.geom.rect = Rect::new(0, 0, 16, 16);
        let id = w.alloc_client(c);
        w.systray_icons.push(id);

        let tray = Systray { win: 1, icon_size: 16 };
        let removed = tray.undock(&mut w, 77);
        assert_eq!(removed, Some(id));
        assert!(w.systray_icons.is_empty());
        assert!(w.client(id).is_none());
    }

    #[test]
    fn normalized_icon_size_preserves_aspect_ratio() {
        // a 32x16 icon normalized to a 20px font height keeps its 2:1 ratio.
        assert_eq!(normalized_icon_size(Rect::new(0, 0, 32, 16), 20), (40, 20));
    }

    #[test]
    fn normalized_icon_size_clamps_overly_wide_icons() {
        // a 400x16 icon would normalize to a 500px width at a 20px font
        // height; clamp to 2x font height instead of letting one wide
        // icon dominate the tray strip.
        assert_eq!(normalized_icon_size(Rect::new(0, 0, 400, 16), 20), (40, 20));
    }

    #[test]
    fn normalized_icon_size_falls_back_to_square_on_zero_height() {
        assert_eq!(normalized_icon_size(Rect::new(0, 0, 16, 0), 20), (20, 20));
    }
}
