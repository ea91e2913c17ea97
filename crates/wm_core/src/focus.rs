//! Focus & Stack Manager.
//!
//! Modeled on `core::manager`-style free functions taking
//! `(&X, &mut State<X>)` — this project's handlers take `(&impl XConn,
//! &mut World)` the same way, with `World` playing the equivalent
//! state-container role.

use tracing::{debug, trace};

use crate::error::Result;
use crate::model::flags::ClientFlags;
use crate::model::ids::{ClientId, MonitorId};
use crate::model::world::World;
use crate::x::{ClientAttr, XConn};

/// Sentinel understood by [`focusstack`]: "the most recently focused
/// visible client that isn't the current selection".
pub const PREVSEL: i32 = 3000;

const UNFOCUS_BORDER: u32 = 0x444444;
const FOCUS_BORDER: u32 = 0x5e81ac;

/// `focus(c)`. `c = None` picks the front of `mon`'s stack that is
/// visible.
pub fn focus<X: XConn>(x: &X, w: &mut World, mon: MonitorId, c: Option<ClientId>) -> Result<()> {
    let tags = w.mon(mon).seltags_mask();
    let target = c.or_else(|| w.stack_of(mon).into_iter().find(|&id| w.client(id).map_or(false, |c| c.is_visible_on(tags))));

    if let Some(prev) = w.mon(mon).sel {
        if Some(prev) != target {
            unfocus(x, w, prev, false)?;
        }
    }

    let Some(target) = target else {
        w.mon_mut(mon).sel = None;
        x.set_input_focus(x.root())?;
        return Ok(());
    };

    // promote to stack head
    w.detach_stack(mon, target);
    w.attach_stack(mon, target);

    if let Some(client) = w.client_mut(target) {
        client.flags.set_flag(ClientFlags::URGENT, false);
    }

    x.grab_buttons(w.client(target).unwrap().win, &[], true)?;
    x.set_client_attributes(w.client(target).unwrap().win, &[ClientAttr::BorderColor(FOCUS_BORDER)])?;

    w.mon_mut(mon).sel = Some(target);

    let never_focus = w.client(target).unwrap().never_focus();
    if !never_focus {
        let win = w.client(target).unwrap().win;
        x.set_input_focus(win)?;
        let _ = x.send_protocol_message(win, "WM_TAKE_FOCUS")?;
    }
    trace!(?target, "focused client");
    Ok(())
}

pub fn unfocus<X: XConn>(x: &X, w: &World, c: ClientId, set_focus: bool) -> Result<()> {
    let Some(client) = w.client(c) else { return Ok(()) };
    x.set_client_attributes(client.win, &[ClientAttr::BorderColor(UNFOCUS_BORDER)])?;
    if set_focus {
        x.set_input_focus(x.root())?;
    }
    Ok(())
}

/// `focusstack(dir)`: step by `dir` (±1) over visible clients, or jump to
/// `PREVSEL`/a fixed index.
pub fn focusstack<X: XConn>(x: &X, w: &mut World, mon: MonitorId, dir: i32) -> Result<()> {
    let sel = w.mon(mon).sel;
    if w.lockfullscreen {
        if let Some(s) = sel {
            if w.client(s).map_or(false, |c| c.is_fullscreen()) {
                debug!("focus stack navigation locked by fullscreen client");
                return Ok(());
            }
        }
    }

    let visible = w.visible_clients(mon);
    if visible.is_empty() {
        return Ok(());
    }

    let target = if dir == PREVSEL {
        let stack = w.stack_of(mon);
        stack
            .into_iter()
            .find(|&id| Some(id) != sel && visible.contains(&id))
            .unwrap_or(visible[0])
    } else if (0..3).contains(&dir) {
        visible[(dir as usize).min(visible.len() - 1)]
    } else {
        let cur_idx = sel.and_then(|s| visible.iter().position(|&v| v == s)).unwrap_or(0);
        let n = visible.len() as i32;
        let next = ((cur_idx as i32 + dir) % n + n) % n;
        visible[next as usize]
    };

    focus(x, w, mon, Some(target))
}

/// `pushstack(dir)`: swap the current selection's position in attach
/// order, not the focus stack.
pub fn pushstack(w: &mut World, mon: MonitorId, dir: i32) {
    let Some(sel) = w.mon(mon).sel else { return };
    let clients = w.clients_of(mon);
    let Some(idx) = clients.iter().position(|&c| c == sel) else { return };
    let n = clients.len() as i32;
    if n < 2 {
        return;
    }
    let other_idx = (((idx as i32 + dir) % n + n) % n) as usize;
    swap_attach_order(w, mon, clients[idx], clients[other_idx]);
}

fn swap_attach_order(w: &mut World, mon: MonitorId, a: ClientId, b: ClientId) {
    let mut order = w.clients_of(mon);
    let (ia, ib) = (order.iter().position(|&c| c == a).unwrap(), order.iter().position(|&c| c == b).unwrap());
    order.swap(ia, ib);
    // rebuild the linked list from the new order
    w.mon_mut(mon).clients_head = order.first().copied();
    for pair in order.windows(2) {
        w.client_mut(pair[0]).unwrap().next_in_clients = Some(pair[1]);
    }
    if let Some(&last) = order.last() {
        w.client_mut(last).unwrap().next_in_clients = None;
    }
}

/// Warp the pointer to the center of the newly selected client unless the
/// pointer is already inside it or over any bar.
pub fn warp_to_selected<X: XConn>(x: &X, w: &World, mon: MonitorId) -> Result<()> {
    let Some(sel) = w.mon(mon).sel else { return Ok(()) };
    let Some(client) = w.client(sel) else { return Ok(()) };
    let pos = x.cursor_position()?;
    if client.geom.rect.contains(pos) {
        return Ok(());
    }
    if w.mon(mon).bars.iter().any(|b| b.rect.contains(pos)) {
        return Ok(());
    }
    let mid = client.geom.rect.midpoint();
    x.warp_pointer(client.win, (mid.x - client.geom.rect.x) as i16, (mid.y - client.geom.rect.y) as i16)
}
