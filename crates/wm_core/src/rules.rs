//! Client adoption pipeline: turns a bare `MapRequest` window into
//! a fully initialized, attached, possibly-swallowed, possibly-floated
//! [`Client`](crate::model::client::Client).
//!
//! Modeled on a `manage`-style adoption sequencing (read
//! properties, consult policy, attach, map, focus) but driven by this
//! project's own [`crate::model::rule::apply_rules`] data-first rule
//! table rather than a hook-list dispatch.

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::event::arrange_monitor;
use crate::ewmh;
use crate::layout::floatpos::{setfloatpos, FloatPosContext};
use crate::model::client::{Client, Geometry};
use crate::model::flags::ClientFlags;
use crate::model::ids::{ClientId, MonitorId};
use crate::model::rule::apply_rules;
use crate::model::world::World;
use crate::swallow;
use crate::x::atom::AUTO_FLOAT_WINDOW_TYPES;
use crate::x::property::clamp_to_screen;
use crate::x::{ClientAttr, ClientConfig, Prop, XConn, Xid};

struct AdoptionInput {
    class: String,
    instance: String,
    title: String,
    window_type: Option<String>,
    transient_for: Option<Xid>,
    pid: u32,
}

fn read_adoption_input<X: XConn>(x: &X, win: Xid) -> Result<AdoptionInput> {
    let (instance, class) = match x.get_prop(win, "WM_CLASS")? {
        Some(Prop::String(v)) if v.len() >= 2 => (v[0].clone(), v[1].clone()),
        Some(Prop::String(v)) if v.len() == 1 => (v[0].clone(), String::new()),
        _ => (String::new(), String::new()),
    };
    let title = x.get_text_property(win, "_NET_WM_NAME")?.or(x.get_text_property(win, "WM_NAME")?).unwrap_or_default();
    let window_type = x.get_prop(win, "_NET_WM_WINDOW_TYPE")?.and_then(|p| p.first_string().map(str::to_owned));
    let transient_for = match x.get_prop(win, "WM_TRANSIENT_FOR")? {
        Some(Prop::Window(v)) if !v.is_empty() && v[0] != 0 => Some(v[0]),
        _ => None,
    };
    let pid = match x.get_prop(win, "_NET_WM_PID")? {
        Some(Prop::Cardinal(v)) => v.first().copied().unwrap_or(0),
        _ => 0,
    };
    Ok(AdoptionInput { class, instance, title, window_type, transient_for, pid })
}

/// Find the managed client record for an X window, if any.
pub(crate) fn find_managed(w: &World, win: Xid) -> Option<ClientId> {
    w.clients.iter().enumerate().find_map(|(i, slot)| {
        let c = slot.as_ref()?;
        (c.win == win).then(|| ClientId::from_index(i))
    })
}

/// `manage(win)`: the full adoption sequence for a freshly mapped
/// top-level window. `target_mon` is the monitor the pointer (or, for a
/// transient, the parent) currently sits on.
pub fn manage<X: XConn>(x: &X, w: &mut World, cfg: &Config, win: Xid, target_mon: MonitorId) -> Result<()> {
    if find_managed(w, win).is_some() {
        return Ok(());
    }

    let input = read_adoption_input(x, win)?;
    let attrs = x.get_window_attributes(win)?;
    if attrs.override_redirect {
        return Ok(());
    }

    let parent = input.transient_for.and_then(|pwin| find_managed(w, pwin));

    let (mut tags, mut mon) = if let Some(parent_id) = parent {
        let p = w.client(parent_id).expect("parent vanished between lookup and use");
        (p.tags, p.mon)
    } else {
        (0, target_mon)
    };

    let adopted = apply_rules(&cfg.rules, &input.class, &input.instance, &input.title, input.window_type.as_deref());

    if let Some(rule_tags) = adopted.tags {
        tags = rule_tags;
    } else if tags == 0 {
        tags = w.mon(mon).seltags_mask();
    }
    tags &= w.tag_config.tagmask();
    if tags == 0 {
        tags = w.mon(mon).seltags_mask();
    }

    if let Some(req_mon) = adopted.monitor {
        if let Some(rule_tags) = adopted.tags {
            if let Some(m) = w.mons.iter().find(|m| m.seltags_mask() & rule_tags != 0) {
                mon = m.id;
            } else if let Some(m) = w.mons.iter().find(|m| m.id.index() as i32 == req_mon) {
                mon = m.id;
            }
        } else if let Some(m) = w.mons.iter().find(|m| m.id.index() as i32 == req_mon) {
            mon = m.id;
        }
    }

    let is_auto_float = input
        .window_type
        .as_deref()
        .map_or(false, |t| AUTO_FLOAT_WINDOW_TYPES.iter().any(|a| a.as_ref() == t));
    let is_floating = adopted.is_floating || is_auto_float || parent.is_some();

    let mut client = Client::new(win, mon, tags);
    client.title = input.title;
    client.pid = input.pid;
    client.flags.set_flag(ClientFlags::FLOATING, is_floating);
    if adopted.is_terminal {
        swallow::mark_terminal(&mut client, true);
    }
    client.flags.set_flag(ClientFlags::NO_SWALLOW, adopted.no_swallow);

    let screen = w.mon(mon).screen;
    let work_area = w.mon(mon).work_area;
    let default_rect = crate::geometry::Rect::new(screen.x + 50, screen.y + 50, 640, 480);
    client.geom = Geometry { rect: clamp_to_screen(default_rect, work_area), border_width: cfg.border_px };

    if let Some(ref spec) = adopted.float_pos {
        let ctx = FloatPosContext { client_rect: client.geom.rect, work_area, pointer: x.cursor_position().map(|p| (p.x, p.y)).unwrap_or((0, 0)), grid_cells: 4 };
        if let Some(resolved) = setfloatpos(spec, &ctx) {
            client.geom.rect = clamp_to_screen(resolved.rect, work_area);
            client.ignore_size_hints_for_layout = resolved.ignore_size_hints;
            client.flags.set_flag(ClientFlags::FLOATING, true);
        } else {
            debug!(spec, "malformed float-position spec ignored");
        }
    }

    if let Some(parent_id) = swallow::try_swallow(w, mon, &client) {
        let parent = w.client(parent_id).unwrap();
        let original_win = parent.swallowing.as_ref().unwrap().win;
        let slot_rect = parent.geom.rect;
        x.unmap(original_win)?;
        x.set_client_config(win, &[ClientConfig::BorderPx(cfg.border_px), ClientConfig::Position(slot_rect)])?;
        x.set_client_attributes(win, &[ClientAttr::BorderColor(cfg.colors.border), ClientAttr::ClientEventMask])?;
        x.map(win)?;
        x.set_wm_state(win, crate::x::WmState::Normal)?;
        arrange_monitor(x, w, mon, cfg)?;
        return Ok(());
    }

    let id = w.alloc_client(client);
    w.attach(mon, id);
    w.attach_stack(mon, id);

    x.set_client_config(win, &[ClientConfig::BorderPx(cfg.border_px), ClientConfig::Position(w.client(id).unwrap().geom.rect)])?;
    x.set_client_attributes(win, &[ClientAttr::BorderColor(cfg.colors.border), ClientAttr::ClientEventMask])?;
    x.grab_buttons(win, &[], false)?;
    x.map(win)?;
    x.set_wm_state(win, crate::x::WmState::Normal)?;

    ewmh::publish_client_lists(x, w)?;

    if w.mon(mon).seltags_mask() & tags != 0 {
        crate::focus::focus(x, w, mon, Some(id))?;
    }
    debug!(?id, win, "managed new client");
    Ok(())
}

/// `unmanage(win)`: detach and tombstone a client whose window has
/// unmapped or been destroyed, then re-arrange the monitor it vacated.
/// Callers must route a client that is currently swallowing a child to
/// [`unswallow`] instead — tearing this client down would wrongly
/// discard the still-live child window it represents.
pub fn unmanage<X: XConn>(x: &X, w: &mut World, cfg: &Config, id: ClientId) -> Result<()> {
    let Some(client) = w.client(id) else { return Ok(()) };
    let mon = client.mon;

    w.detach(mon, id);
    w.detach_stack(mon, id);
    w.free_client(id);

    ewmh::publish_client_lists(x, w)?;
    if w.mon(mon).sel.is_none() {
        crate::focus::focus(x, w, mon, None)?;
    }
    arrange_monitor(x, w, mon, cfg)
}

/// The client at `id` is swallowing a child and that child's window has
/// just unmapped or been destroyed: restore the terminal's original
/// window in place — `id` keeps representing the same slot — and
/// re-arrange.
pub fn unswallow<X: XConn>(x: &X, w: &mut World, cfg: &Config, id: ClientId) -> Result<()> {
    let mon = w.client(id).unwrap().mon;
    let Some(restored_win) = swallow::restore_swallowed(w, id) else { return Ok(()) };
    let rect = w.client(id).unwrap().geom.rect;
    x.set_client_config(restored_win, &[ClientConfig::BorderPx(cfg.border_px), ClientConfig::Position(rect)])?;
    x.set_client_attributes(restored_win, &[ClientAttr::BorderColor(cfg.colors.border), ClientAttr::ClientEventMask])?;
    x.map(restored_win)?;
    x.set_wm_state(restored_win, crate::x::WmState::Normal)?;
    ewmh::publish_client_lists(x, w)?;
    arrange_monitor(x, w, mon, cfg)
}

/// Find the client whose `swallowing` record's stashed window is `win`:
/// the hidden terminal owning that window has just died while the
/// child's window it was swallowed into outlives it.
pub(crate) fn find_swallowing_parent_by_original_win(w: &World, win: Xid) -> Option<ClientId> {
    w.mons.iter().flat_map(|m| w.clients_of(m.id)).find(|&id| w.client(id).and_then(|c| c.swallowing.as_ref()).map_or(false, |s| s.win == win))
}

/// The swallowing parent's original terminal window has died while its
/// child's window is still alive: stop tracking the dead terminal and
/// leave `id` standing on its own as the independent client it already
/// represents — no window state changes, since the child's window was
/// already live and correctly placed.
pub(crate) fn drop_swallowed_child_on_parent_death(w: &mut World, id: ClientId) {
    if let Some(client) = w.client_mut(id) {
        client.swallowing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutKind;
    use crate::model::rule::{Rule, RuleEffects, RulePredicate};
    use crate::model::tags::TagConfig;
    use crate::testutil::NoopXConn;

    fn one_monitor_world() -> (World, MonitorId) {
        let mut w = World::new(TagConfig::new(9, 1));
        let mon = w.alloc_monitor(crate::geometry::Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile);
        w.selmon = mon;
        (w, mon)
    }

    fn scratchpad_cfg() -> Config {
        Config {
            rules: vec![Rule {
                predicate: RulePredicate { class: Some("kitty-sp".into()), ..Default::default() },
                effects: RuleEffects { tags: Some(1 << 9), is_floating: Some(true), float_pos: Some("50% 50% 90% 80%".into()), ..Default::default() },
            }],
            ..Config::default()
        }
    }

    #[test]
    fn scratchpad_rule_floats_centered_and_hidden() {
        let (mut w, mon) = one_monitor_world();
        w.mon_mut(mon).work_area = crate::geometry::Rect::new(0, 0, 1920, 1080);
        let cfg = scratchpad_cfg();
        // `read_adoption_input` would read WM_CLASS through the XConn; NoopXConn
        // always returns `None`, so this test drives the adoption pipeline with
        // rules pre-seeded to match every window class (empty string predicate
        // would not be realistic) — exercised directly via `apply_rules` instead
        // to isolate the float/geometry computation rules.rs performs.
        let adopted = crate::model::rule::apply_rules(&cfg.rules, "kitty-sp", "", "", None);
        assert_eq!(adopted.tags, Some(1 << 9));
        assert_eq!(adopted.is_floating, true);
        // Geometry resolution itself is covered by floatpos's own tests;
        // here we only need the rule to have produced a spec at all.
        assert!(adopted.float_pos.is_some());

        let id = w.alloc_client(Client::new(99, mon, adopted.tags.unwrap()));
        w.client_mut(id).unwrap().flags.set_flag(ClientFlags::FLOATING, true);

        w.attach(mon, id);
        w.attach_stack(mon, id);
        // Not visible until togglescratch: the client's tag bit is the
        // scratchpad bit, disjoint from the monitor's default tagset (tag 1).
        assert!(!w.client(id).unwrap().is_visible_on(w.mon(mon).seltags_mask()));
    }

    #[test]
    fn out_of_range_monitor_rule_retargets_to_selected_monitor() {
        let (mut w, mon) = one_monitor_world();
        let x = NoopXConn;
        let cfg = Config {
            rules: vec![Rule {
                predicate: RulePredicate::default(),
                effects: RuleEffects { monitor: Some(7), ..Default::default() },
            }],
            ..Config::default()
        };
        // Only one monitor (index 0) exists; a rule naming monitor 7 in
        // `adopted.monitor` has no matching `w.mons` entry, so `manage`'s
        // `mon` stays at `target_mon` (the selected monitor).
        manage(&x, &mut w, &cfg, 42, mon).unwrap();
        let id = find_managed(&w, 42).unwrap();
        assert_eq!(w.client(id).unwrap().mon, mon);
    }

    #[test]
    fn monitor_rule_retargets_to_whichever_monitor_shows_the_rules_tags() {
        let mut w = World::new(TagConfig::new(9, 1));
        let mon0 = w.alloc_monitor(crate::geometry::Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile);
        let mon1 = w.alloc_monitor(crate::geometry::Rect::new(1920, 0, 1920, 1080), 4, LayoutKind::Tile);
        w.selmon = mon0;
        let x = NoopXConn;
        // The rule names monitor 0 explicitly, but also assigns tag 4, which
        // is currently shown on monitor 1, not monitor 0 — the tag-owner
        // takes priority over the literal (and in this case stale) index.
        let cfg = Config {
            rules: vec![Rule {
                predicate: RulePredicate::default(),
                effects: RuleEffects { monitor: Some(0), tags: Some(4), ..Default::default() },
            }],
            ..Config::default()
        };
        manage(&x, &mut w, &cfg, 42, mon0).unwrap();
        let id = find_managed(&w, 42).unwrap();
        assert_eq!(w.client(id).unwrap().mon, mon1);
        assert_eq!(w.client(id).unwrap().tags, 4);
    }
}
