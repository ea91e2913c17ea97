//! Fullscreen policy.
//!
//! Modeled on a `toggle_fullscreen`-style
//! save/restore pattern (stash the pre-change geometry on the client,
//! restore it bit for bit on the reverse transition).

use crate::error::Result;
use crate::geometry::Rect;
use crate::model::flags::ClientFlags;
use crate::model::ids::{ClientId, MonitorId};
use crate::model::world::World;
use crate::x::{ClientConfig, XConn};

pub fn set_fullscreen<X: XConn>(x: &X, w: &mut World, c: ClientId, fullscreen: bool) -> Result<()> {
    let already = w.client(c).map_or(false, |c| c.is_fullscreen());
    if fullscreen == already {
        return Ok(());
    }

    if fullscreen {
        let client = w.client_mut(c).unwrap();
        client.oldstate = client.is_floating();
        client.old_geom = client.geom;
        client.flags.set_flag(ClientFlags::FULLSCREEN, true);
        client.flags.set_flag(ClientFlags::FLOATING, true);
        let mon = client.mon;
        let screen = w.mon(mon).screen;
        let win = w.client(c).unwrap().win;
        let client = w.client_mut(c).unwrap();
        client.geom.rect = screen;
        client.geom.border_width = 0;

        x.set_client_config(win, &[ClientConfig::BorderPx(0), ClientConfig::Position(screen), ClientConfig::StackTop])?;
        publish_fullscreen_state(x, win, true)?;
    } else {
        let client = w.client_mut(c).unwrap();
        client.flags.set_flag(ClientFlags::FULLSCREEN, false);
        client.flags.set_flag(ClientFlags::FLOATING, client.oldstate);
        let restored: Rect = client.old_geom.rect;
        let bw = client.old_geom.border_width;
        client.geom = client.old_geom;
        let win = w.client(c).unwrap().win;

        x.set_client_config(win, &[ClientConfig::BorderPx(bw), ClientConfig::Position(restored)])?;
        publish_fullscreen_state(x, win, false)?;
    }
    Ok(())
}

fn publish_fullscreen_state<X: XConn>(x: &X, win: crate::x::Xid, set: bool) -> Result<()> {
    use crate::x::Prop;
    if set {
        x.set_prop(win, "_NET_WM_STATE", Prop::Atom(vec!["_NET_WM_STATE_FULLSCREEN".into()]))
    } else {
        x.delete_prop(win, "_NET_WM_STATE")
    }
}

/// Tag-switch fullscreen arbitration: if more than one client
/// visible after a tag switch is fullscreen, clear all of them.
pub fn resolve_tag_switch_fullscreen<X: XConn>(x: &X, w: &mut World, mon: MonitorId) -> Result<()> {
    let fullscreen_visible: Vec<ClientId> = w
        .visible_clients(mon)
        .into_iter()
        .filter(|&id| w.client(id).map_or(false, |c| c.is_fullscreen()))
        .collect();

    if fullscreen_visible.len() <= 1 {
        return Ok(());
    }
    for id in fullscreen_visible {
        set_fullscreen(x, w, id, false)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::LayoutKind;
    use crate::model::client::Client;
    use crate::model::tags::TagConfig;
    use crate::testutil::NoopXConn;
    use quickcheck_macros::quickcheck;

    fn one_client_world() -> (World, MonitorId, ClientId) {
        let mut w = World::new(TagConfig::new(9, 1));
        let mon = w.alloc_monitor(Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile);
        w.selmon = mon;
        let mut c = Client::new(1, mon, 1);
        c.geom.rect = Rect::new(100, 100, 640, 480);
        c.geom.border_width = 2;
        let id = w.alloc_client(c);
        w.attach(mon, id);
        w.attach_stack(mon, id);
        w.mon_mut(mon).sel = Some(id);
        (w, mon, id)
    }

    #[test]
    fn fullscreen_round_trip_restores_geometry_bit_for_bit() {
        let (mut w, _mon, id) = one_client_world();
        let x = NoopXConn;
        let before = w.client(id).unwrap().geom;
        let was_floating = w.client(id).unwrap().is_floating();

        set_fullscreen(&x, &mut w, id, true).unwrap();
        assert!(w.client(id).unwrap().is_fullscreen());
        assert_eq!(w.client(id).unwrap().geom.rect, w.mon(_mon).screen);

        set_fullscreen(&x, &mut w, id, false).unwrap();
        let c = w.client(id).unwrap();
        assert!(!c.is_fullscreen());
        assert_eq!(c.geom, before);
        assert_eq!(c.is_floating(), was_floating);
    }

    #[quickcheck]
    fn fullscreen_round_trip_is_identity_on_geometry(x: i32, y: i32, w: u32, h: u32, bw: u32, floating: bool) -> bool {
        let w_ = (w % 3840).max(1);
        let h_ = (h % 2160).max(1);
        let bw_ = bw % 16;
        let mut world = World::new(TagConfig::new(9, 1));
        let mon = world.alloc_monitor(Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile);
        world.selmon = mon;
        let mut c = Client::new(1, mon, 1);
        c.geom.rect = Rect::new(x, y, w_, h_);
        c.geom.border_width = bw_;
        c.flags.set_flag(ClientFlags::FLOATING, floating);
        let id = world.alloc_client(c);
        world.attach(mon, id);
        world.attach_stack(mon, id);
        world.mon_mut(mon).sel = Some(id);

        let conn = NoopXConn;
        let before = world.client(id).unwrap().geom;
        let before_floating = world.client(id).unwrap().is_floating();

        set_fullscreen(&conn, &mut world, id, true).unwrap();
        set_fullscreen(&conn, &mut world, id, false).unwrap();

        let after = world.client(id).unwrap();
        after.geom == before && after.is_floating() == before_floating && !after.is_fullscreen()
    }

    #[test]
    fn entering_tag_with_two_fullscreen_clients_drops_both() {
        let (mut w, mon, id1) = one_client_world();
        let x = NoopXConn;
        let mut c2 = Client::new(2, mon, 1);
        c2.geom.rect = Rect::new(0, 0, 1920, 1080);
        let id2 = w.alloc_client(c2);
        w.attach(mon, id2);
        w.attach_stack(mon, id2);

        set_fullscreen(&x, &mut w, id1, true).unwrap();
        set_fullscreen(&x, &mut w, id2, true).unwrap();
        assert!(w.client(id1).unwrap().is_fullscreen());
        assert!(w.client(id2).unwrap().is_fullscreen());

        resolve_tag_switch_fullscreen(&x, &mut w, mon).unwrap();
        assert!(!w.client(id1).unwrap().is_fullscreen());
        assert!(!w.client(id2).unwrap().is_fullscreen());
    }
}
