//! The central event dispatcher: one `handle_event` entry point
//! the main loop calls per pulled `XEvent`, plus the `Action` interpreter
//! that both key and button bindings run through.
//!
//! Modeled on a `core::manager`-style top-level `handle_event`
//! match plus its interactive move/resize loop (`handle_button` spinning
//! its own `next_event` pump while the pointer is grabbed).

use tracing::{debug, trace, warn};

use crate::bindings::{Action, ButtonAction, DragKind};
use crate::config::Config;
use crate::error::Result;
use crate::ewmh;
use crate::focus;
use crate::fullscreen;
use crate::geometry::Point;
use crate::layout;
use crate::layout::floatpos::{setfloatpos, FloatPosContext};
use crate::model::flags::ClientFlags;
use crate::model::ids::{ClientId, MonitorId};
use crate::model::world::World;
use crate::multimon;
use crate::resources;
use crate::rules;
use crate::spawn;
use crate::x::event::*;
use crate::x::{ButtonCombo, ClientAttr, ClientConfig, KeyCombo, Prop, XConn, Xid};

/// Recompute and apply tiled-client geometry for `mon`'s current layout,
/// and refresh its `lt_symbol`.
pub fn arrange_monitor<X: XConn>(x: &X, w: &mut World, mon: MonitorId, cfg: &Config) -> Result<()> {
    let kind = w.mon(mon).cur_layout();
    let tileable = w.tileable_visible(mon);
    let area = w.mon(mon).client_rect();

    let rects = if kind.is_floating_mode() {
        Vec::new()
    } else {
        layout::arrange(kind, area, w.mon(mon).gaps, w.mon(mon).mfact, w.mon(mon).nmaster, tileable.len(), w.smartgaps)
    };

    for (&id, &rect) in tileable.iter().zip(rects.iter()) {
        if let Some(c) = w.client_mut(id) {
            c.geom.rect = rect;
        }
        let client = w.client(id).unwrap();
        x.set_client_config(client.win, &[ClientConfig::BorderPx(cfg.border_px), ClientConfig::Position(rect)])?;
    }

    let n_visible = w.visible_clients(mon).len();
    let sym = kind.dynamic_symbol(n_visible).unwrap_or_else(|| kind.symbol().to_string());
    w.mon_mut(mon).lt_symbol = sym;
    restack(x, w, mon)
}

/// Raise the selected client above its siblings.
pub fn restack<X: XConn>(x: &X, w: &World, mon: MonitorId) -> Result<()> {
    if let Some(sel) = w.mon(mon).sel {
        if let Some(c) = w.client(sel) {
            x.set_client_config(c.win, &[ClientConfig::StackTop])?;
        }
    }
    Ok(())
}

fn after_tagset_change<X: XConn>(x: &X, w: &mut World, cfg: &Config, mon: MonitorId) -> Result<()> {
    fullscreen::resolve_tag_switch_fullscreen(x, w, mon)?;
    arrange_monitor(x, w, mon, cfg)?;
    ewmh::publish_desktop_info(x, w, &cfg.tag_names)?;
    focus::focus(x, w, mon, None)?;
    Ok(())
}

/// Interpret one bound [`Action`].
pub fn apply_action<X: XConn>(x: &X, w: &mut World, cfg: &mut Config, action: &Action) -> Result<()> {
    let mon = w.selmon;
    match action {
        Action::Spawn(argv) => {
            // x11rb sets CLOEXEC on its socket by default, so skipping an
            // explicit fd close here (no raw fd is exposed through XConn)
            // does not leak the connection into the child.
            if let Err(e) = spawn::spawn(argv, -1) {
                warn!(error = %e, program = ?argv.first(), "spawn failed");
            }
            return Ok(());
        }
        Action::FocusStack(dir) => focus::focusstack(x, w, mon, *dir)?,
        Action::PushStack(dir) => focus::pushstack(w, mon, *dir),
        Action::View(mask) => {
            multimon::view(w, mon, *mask);
            after_tagset_change(x, w, cfg, mon)?;
        }
        Action::ToggleView(mask) => {
            multimon::toggleview(w, mon, *mask);
            after_tagset_change(x, w, cfg, mon)?;
        }
        Action::Tag(mask) => {
            multimon::tag(w, mon, *mask);
            arrange_monitor(x, w, mon, cfg)?;
            ewmh::publish_client_lists(x, w)?;
        }
        Action::ToggleTag(mask) => {
            multimon::toggletag(w, mon, *mask);
            arrange_monitor(x, w, mon, cfg)?;
        }
        Action::FocusOrView(mask) => {
            let target = multimon::focusorview(w, mon, *mask);
            w.selmon = target;
            after_tagset_change(x, w, cfg, target)?;
        }
        Action::SetLayout(kind) => {
            let m = w.mon_mut(mon);
            let new_idx = 1 - m.sellt;
            m.layouts[new_idx] = *kind;
            m.sellt = new_idx;
            arrange_monitor(x, w, mon, cfg)?;
        }
        Action::ToggleFloating => {
            if let Some(sel) = w.mon(mon).sel {
                if let Some(c) = w.client_mut(sel) {
                    if !c.is_fullscreen() {
                        let now_floating = !c.is_floating();
                        c.flags.set_flag(ClientFlags::FLOATING, now_floating);
                    }
                }
                arrange_monitor(x, w, mon, cfg)?;
            }
        }
        Action::SetFloatPos(spec) => {
            if let Some(sel) = w.mon(mon).sel {
                let work_area = w.mon(mon).work_area;
                let client_rect = w.client(sel).unwrap().geom.rect;
                let pointer = x.cursor_position().map(|p| (p.x, p.y)).unwrap_or((0, 0));
                let ctx = FloatPosContext { client_rect, work_area, pointer, grid_cells: 4 };
                if let Some(resolved) = setfloatpos(spec, &ctx) {
                    let c = w.client_mut(sel).unwrap();
                    c.geom.rect = resolved.rect;
                    c.ignore_size_hints_for_layout = resolved.ignore_size_hints;
                    c.flags.set_flag(ClientFlags::FLOATING, true);
                    arrange_monitor(x, w, mon, cfg)?;
                } else {
                    debug!(spec, "malformed float-position spec ignored");
                }
            }
        }
        Action::IncNMaster(delta) => {
            w.mon_mut(mon).inc_nmaster(*delta);
            arrange_monitor(x, w, mon, cfg)?;
        }
        Action::SetMfact(f) => {
            w.mon_mut(mon).set_mfact(*f);
            arrange_monitor(x, w, mon, cfg)?;
        }
        Action::KillClient => {
            if let Some(sel) = w.mon(mon).sel {
                let win = w.client(sel).unwrap().win;
                x.kill(win)?;
            }
        }
        Action::ToggleFullscreen => {
            if let Some(sel) = w.mon(mon).sel {
                let now = w.client(sel).map_or(false, |c| c.is_fullscreen());
                fullscreen::set_fullscreen(x, w, sel, !now)?;
                arrange_monitor(x, w, mon, cfg)?;
            }
        }
        Action::ToggleScratchpad(index) => {
            if let Some(sel) = w.mon(mon).sel {
                let bit = w.tag_config.scratchpad_bit(*index);
                if let Some(c) = w.client_mut(sel) {
                    c.tags ^= bit;
                }
                arrange_monitor(x, w, mon, cfg)?;
            }
        }
        Action::ToggleBar => {
            let m = w.mon_mut(mon);
            m.show_bar = !m.show_bar;
        }
        Action::Quit => w.running = false,
        Action::Restart => {
            w.running = false;
            w.restart_requested = true;
        }
        Action::Xrdb => {
            if let Some(text) = x.resource_manager_string()? {
                resources::apply_resource_overrides(&text, &mut cfg.colors);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutKind;
    use crate::model::client::Client;
    use crate::model::tags::TagConfig;
    use crate::testutil::NoopXConn;
    use quickcheck_macros::quickcheck;

    fn two_monitor_world() -> World {
        let mut w = World::new(TagConfig::new(9, 1));
        let m0 = w.alloc_monitor(crate::geometry::Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile);
        let m1 = w.alloc_monitor(crate::geometry::Rect::new(1920, 0, 1920, 1080), 2, LayoutKind::Tile);
        w.selmon = m0;
        let c0 = w.alloc_client(Client::new(1, m0, 1));
        w.attach(m0, c0);
        w.attach_stack(m0, c0);
        w.mon_mut(m0).sel = Some(c0);
        let c1 = w.alloc_client(Client::new(2, m1, 2));
        w.attach(m1, c1);
        w.attach_stack(m1, c1);
        w.mon_mut(m1).sel = Some(c1);
        w
    }

    #[test]
    fn view_restores_attach_and_disjointness_invariants() {
        let mut w = two_monitor_world();
        let mut cfg = Config::default();
        let x = NoopXConn;

        apply_action(&x, &mut w, &mut cfg, &Action::View(4)).unwrap();

        assert!(w.check_t1());
        // Every ordinary tag bit set as a visible tagset belongs to
        // at most one monitor.
        let masks: Vec<u32> = w.mons.iter().map(|m| m.seltags_mask() & w.tag_config.ordinary_mask()).collect();
        for i in 0..masks.len() {
            for j in (i + 1)..masks.len() {
                assert_eq!(masks[i] & masks[j], 0, "monitor tagsets must stay disjoint after View");
            }
        }
    }

    #[test]
    fn tag_restores_attach_invariant_after_retag() {
        let mut w = two_monitor_world();
        let mut cfg = Config::default();
        let x = NoopXConn;
        let sel = w.mon(w.selmon).sel.unwrap();

        apply_action(&x, &mut w, &mut cfg, &Action::Tag(2)).unwrap();

        assert!(w.check_t1());
        // Tag(2) retags the selected client and relocates it to the
        // monitor that owns tag 2, per `multimon::tag`.
        assert_eq!(w.client(sel).unwrap().tags, 2);
        assert_ne!(w.client(sel).unwrap().mon, w.selmon);
    }

    #[test]
    fn togglefloating_is_its_own_inverse() {
        let mut w = two_monitor_world();
        let mut cfg = Config::default();
        let x = NoopXConn;
        let sel = w.mon(w.selmon).sel.unwrap();
        let starting = w.client(sel).unwrap().is_floating();

        apply_action(&x, &mut w, &mut cfg, &Action::ToggleFloating).unwrap();
        assert_eq!(w.client(sel).unwrap().is_floating(), !starting);

        apply_action(&x, &mut w, &mut cfg, &Action::ToggleFloating).unwrap();
        assert_eq!(w.client(sel).unwrap().is_floating(), starting);
    }

    #[test]
    fn togglefloating_is_a_no_op_on_a_fullscreen_client() {
        let mut w = two_monitor_world();
        let mut cfg = Config::default();
        let x = NoopXConn;
        let sel = w.mon(w.selmon).sel.unwrap();
        w.client_mut(sel).unwrap().flags.set_flag(ClientFlags::FULLSCREEN, true);
        let starting = w.client(sel).unwrap().is_floating();

        apply_action(&x, &mut w, &mut cfg, &Action::ToggleFloating).unwrap();

        assert_eq!(w.client(sel).unwrap().is_floating(), starting, "fullscreen clients can't be toggled floating");
    }

    #[quickcheck]
    fn togglefloating_twice_is_identity_unless_fullscreen(start_floating: bool, fullscreen: bool) -> bool {
        let mut w = two_monitor_world();
        let mut cfg = Config::default();
        let x = NoopXConn;
        let sel = w.mon(w.selmon).sel.unwrap();
        w.client_mut(sel).unwrap().flags.set_flag(ClientFlags::FLOATING, start_floating);
        w.client_mut(sel).unwrap().flags.set_flag(ClientFlags::FULLSCREEN, fullscreen);
        let starting = w.client(sel).unwrap().is_floating();

        apply_action(&x, &mut w, &mut cfg, &Action::ToggleFloating).unwrap();
        apply_action(&x, &mut w, &mut cfg, &Action::ToggleFloating).unwrap();

        w.client(sel).unwrap().is_floating() == starting
    }
}

fn on_key_press<X: XConn>(x: &X, w: &mut World, cfg: &mut Config, e: KeyPress) -> Result<()> {
    let combo = KeyCombo { mods: e.mods, keycode: e.keycode };
    if let Some(binding) = cfg.keys.iter().find(|k| k.combo == combo).cloned() {
        apply_action(x, w, cfg, &binding.action)?;
    }
    Ok(())
}

fn on_button_press<X: XConn>(x: &X, w: &mut World, cfg: &mut Config, e: ButtonPress) -> Result<()> {
    let mon = w.selmon;
    let owner = rules::find_managed(w, e.window);
    if let Some(id) = owner {
        if w.mon(mon).sel != Some(id) {
            focus::focus(x, w, mon, Some(id))?;
        }
    }
    let combo = ButtonCombo { mods: e.mods, button: e.button };
    let on_client = owner.is_some();
    let action = cfg.buttons.iter().find(|b| b.combo == combo && b.on_client == on_client).map(|b| b.action.clone());
    match action {
        Some(ButtonAction::FocusClient) => {}
        Some(ButtonAction::RunAction(a)) => apply_action(x, w, cfg, &a)?,
        Some(ButtonAction::Drag(kind)) => {
            if let Some(id) = owner {
                run_drag_loop(x, w, kind, id, e.root_pos)?;
                arrange_monitor(x, w, mon, cfg)?;
            }
        }
        None => {}
    }
    Ok(())
}

/// The re-entrant move/resize loop: block on raw
/// events until `ButtonRelease`, applying each `MotionNotify` as a delta
/// against the client's geometry when the grab started.
fn run_drag_loop<X: XConn>(x: &X, w: &mut World, kind: DragKind, id: ClientId, start: Point) -> Result<()> {
    if w.client(id).map_or(true, |c| c.is_fullscreen()) {
        return Ok(());
    }
    x.grab_pointer_for_drag()?;
    let origin = w.client(id).unwrap().geom.rect;

    let result = (|| -> Result<()> {
        loop {
            match x.next_event()? {
                XEvent::MotionNotify(m) => {
                    let dx = m.root_pos.x - start.x;
                    let dy = m.root_pos.y - start.y;
                    let mut rect = origin;
                    match kind {
                        DragKind::Move => {
                            rect.x = origin.x + dx;
                            rect.y = origin.y + dy;
                        }
                        DragKind::Resize => {
                            rect.w = (origin.w as i32 + dx).max(1) as u32;
                            rect.h = (origin.h as i32 + dy).max(1) as u32;
                        }
                    }
                    if let Some(c) = w.client_mut(id) {
                        c.flags.set_flag(ClientFlags::FLOATING, true);
                        c.geom.rect = rect;
                    }
                    let win = w.client(id).unwrap().win;
                    x.set_client_config(win, &[ClientConfig::Position(rect)])?;
                }
                XEvent::ButtonRelease(_) => break,
                _ => {}
            }
        }
        Ok(())
    })();

    x.ungrab_pointer()?;
    result
}

fn on_configure_request<X: XConn>(x: &X, w: &mut World, e: ConfigureEvent) -> Result<()> {
    match rules::find_managed(w, e.window) {
        Some(id) => {
            let (is_floating, geom) = {
                let c = w.client(id).unwrap();
                (c.is_floating() || c.is_fullscreen(), c.geom)
            };
            if is_floating {
                if let Some(c) = w.client_mut(id) {
                    c.geom.rect = e.rect;
                    c.geom.border_width = e.border_width;
                }
                x.set_client_config(e.window, &[ClientConfig::Position(e.rect), ClientConfig::BorderPx(e.border_width)])?;
            } else {
                // tiled clients don't get to resize themselves; echo back
                // their actual geometry so the client's own idea of its
                // size stays consistent (dwm's "fake" configure ack).
                x.set_client_config(e.window, &[ClientConfig::Position(geom.rect), ClientConfig::BorderPx(geom.border_width)])?;
            }
        }
        None => {
            x.set_client_config(e.window, &[ClientConfig::Position(e.rect), ClientConfig::BorderPx(e.border_width)])?;
        }
    }
    Ok(())
}

fn on_destroy_or_unmap<X: XConn>(x: &X, w: &mut World, cfg: &Config, win: Xid) -> Result<()> {
    if let Some(id) = rules::find_managed(w, win) {
        if w.client(id).map_or(false, |c| c.swallowing.is_some()) {
            rules::unswallow(x, w, cfg, id)?;
        } else {
            rules::unmanage(x, w, cfg, id)?;
        }
        return Ok(());
    }
    if let Some(id) = rules::find_swallowing_parent_by_original_win(w, win) {
        rules::drop_swallowed_child_on_parent_death(w, id);
    }
    Ok(())
}

fn on_map_request<X: XConn>(x: &X, w: &mut World, cfg: &Config, win: Xid) -> Result<()> {
    let mon = w.selmon;
    rules::manage(x, w, cfg, win, mon)?;
    let actual_mon = rules::find_managed(w, win).map_or(mon, |id| w.client(id).unwrap().mon);
    arrange_monitor(x, w, actual_mon, cfg)
}

fn on_enter_notify<X: XConn>(x: &X, w: &mut World, e: PointerChange) -> Result<()> {
    if let Some(id) = rules::find_managed(w, e.window) {
        let mon = w.client(id).unwrap().mon;
        if w.mon(mon).sel != Some(id) {
            w.selmon = mon;
            focus::focus(x, w, mon, Some(id))?;
        }
    }
    Ok(())
}

fn on_focus_in<X: XConn>(x: &X, w: &World, win: Xid) -> Result<()> {
    // ICCCM: some clients steal focus behind our back via raw SetInputFocus;
    // if it wasn't the selection we intended, hand focus back.
    if let Some(sel) = w.selmon().sel {
        let sel_win = w.client(sel).unwrap().win;
        if sel_win != win {
            x.set_input_focus(sel_win)?;
        }
    }
    Ok(())
}

fn on_property_notify<X: XConn>(x: &X, w: &mut World, e: PropertyEvent) -> Result<()> {
    let Some(id) = rules::find_managed(w, e.window) else { return Ok(()) };
    let name = x.atom_name(e.atom)?;
    match name.as_str() {
        "WM_NAME" | "_NET_WM_NAME" => {
            if let Some(title) = x.get_text_property(e.window, "_NET_WM_NAME")?.or(x.get_text_property(e.window, "WM_NAME")?) {
                if let Some(c) = w.client_mut(id) {
                    c.title = title;
                }
            }
        }
        "WM_HINTS" => {
            if let Some(Prop::Cardinal(v)) = x.get_prop(e.window, "WM_HINTS")? {
                let urgent = v.first().map_or(false, |flags| flags & 0x100 != 0);
                if let Some(c) = w.client_mut(id) {
                    c.flags.set_flag(ClientFlags::URGENT, urgent);
                }
            }
        }
        _ => trace!(property = %name, "unhandled property change"),
    }
    Ok(())
}

fn on_client_message<X: XConn>(x: &X, w: &mut World, cfg: &Config, e: ClientMessage) -> Result<()> {
    let name = x.atom_name(e.type_atom)?;
    if name == "_NET_WM_STATE" {
        let Some(id) = rules::find_managed(w, e.window) else { return Ok(()) };
        let action = e.data[0]; // 0 = remove, 1 = add, 2 = toggle (EWMH)
        let target = x.atom_name(e.data[1]).unwrap_or_default();
        if target == "_NET_WM_STATE_FULLSCREEN" {
            let now = w.client(id).map_or(false, |c| c.is_fullscreen());
            let want = match action {
                0 => false,
                1 => true,
                _ => !now,
            };
            fullscreen::set_fullscreen(x, w, id, want)?;
            let mon = w.client(id).unwrap().mon;
            arrange_monitor(x, w, mon, cfg)?;
        }
    } else if name == "_NET_ACTIVE_WINDOW" {
        if let Some(id) = rules::find_managed(w, e.window) {
            let mon = w.client(id).unwrap().mon;
            w.selmon = mon;
            focus::focus(x, w, mon, Some(id))?;
        }
    }
    Ok(())
}

/// The single dispatch entry point the main loop calls for every pulled
/// event.
pub fn handle_event<X: XConn>(x: &X, w: &mut World, cfg: &mut Config, ev: XEvent) -> Result<()> {
    match ev {
        XEvent::ButtonPress(e) => on_button_press(x, w, cfg, e),
        XEvent::ButtonRelease(_) => Ok(()), // only meaningful inside run_drag_loop
        XEvent::ClientMessage(e) => on_client_message(x, w, cfg, e),
        XEvent::ConfigureRequest(e) => on_configure_request(x, w, e),
        XEvent::ConfigureNotify(e) => {
            if e.window == x.root() {
                debug!("root geometry changed; monitor layout refresh deferred to next arrange");
            }
            Ok(())
        }
        XEvent::DestroyNotify(win) => on_destroy_or_unmap(x, w, cfg, win),
        XEvent::EnterNotify(e) => on_enter_notify(x, w, e),
        XEvent::Expose(_) => Ok(()), // bar redraw is wm_ui's concern, driven from main.rs
        XEvent::FocusIn(win) => on_focus_in(x, w, win),
        XEvent::KeyPress(e) => on_key_press(x, w, cfg, e),
        XEvent::MappingNotify => x.grab_keys(&crate::bindings::grab_combos(&cfg.keys)),
        XEvent::MapRequest(win) => on_map_request(x, w, cfg, win),
        XEvent::MotionNotify(_) => Ok(()), // only meaningful inside run_drag_loop
        XEvent::PropertyNotify(e) => on_property_notify(x, w, e),
        XEvent::ResizeRequest(_win) => Ok(()),
        XEvent::UnmapNotify(win) => on_destroy_or_unmap(x, w, cfg, win),
    }
}
