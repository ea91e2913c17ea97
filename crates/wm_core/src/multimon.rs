//! Multi-monitor tag discipline.
//!
//! No single screen/workspace model assigns each workspace to at most
//! one screen by construction the way a flat tagset does, so the
//! bit-swap bookkeeping here is original to this design. It follows the
//! house style for state-mutating free functions (`fn(&mut World, ...)`,
//! mutation-then-rearrange) rather than introducing new idiom.

use crate::model::ids::{ClientId, MonitorId};
use crate::model::world::World;

fn owning_monitor(w: &World, bit: u32) -> Option<MonitorId> {
    w.mons.iter().find(|m| m.seltags_mask() & bit != 0).map(|m| m.id)
}

fn set_current_tagset(w: &mut World, mon: MonitorId, mask: u32) {
    let m = w.mon_mut(mon);
    let new_idx = 1 - m.seltags;
    m.tagset[new_idx] = mask;
    m.seltags = new_idx;
}

fn lowest_unoccupied_bit(w: &World) -> u32 {
    let ordinary = w.tag_config.ordinary_mask();
    let occupied: u32 = w.mons.iter().map(|m| m.seltags_mask()).fold(0, |a, b| a | b);
    for i in 0..w.tag_config.num_tags {
        let bit = 1 << i;
        if ordinary & bit != 0 && occupied & bit == 0 {
            return bit;
        }
    }
    w.tag_config.default_tagset()
}

/// Reassign every client visible on `mon` whose tags include bits now
/// owned by another monitor: strip those bits and move the client's
/// `mon` field to `mon`.
pub fn attachclients(w: &mut World, mon: MonitorId) {
    let tags = w.mon(mon).seltags_mask();
    for id in w.clients_of(mon) {
        let Some(c) = w.client(id) else { continue };
        if c.is_visible_on(tags) && c.mon != mon {
            relocate_client(w, id, mon);
        }
    }
}

fn relocate_client(w: &mut World, id: ClientId, dest: MonitorId) {
    let src = w.client(id).unwrap().mon;
    if src == dest {
        return;
    }
    w.detach(src, id);
    w.detach_stack(src, id);
    w.client_mut(id).unwrap().mon = dest;
    w.attach(dest, id);
    w.attach_stack(dest, id);
}

/// `view(mask)`: if `mask` is currently shown by another monitor, swap
/// the two monitors' tagsets so exactly one shows `mask`.
pub fn view(w: &mut World, mon: MonitorId, mask: u32) {
    if mask == 0 || mask == w.mon(mon).seltags_mask() {
        return;
    }

    if let Some(owner) = owning_monitor(w, mask) {
        if owner != mon {
            let my_prev_mask = w.mon(mon).seltags_mask();
            set_current_tagset(w, owner, my_prev_mask);
            attachclients(w, owner);
        }
    }

    set_current_tagset(w, mon, mask);
    attachclients(w, mon);
}

/// `toggleview(mask)`: flip `mask` bits in `mon`'s tagset. Any bit being
/// newly added that another monitor owns is transferred away from it; if
/// that leaves the donor with an empty tagset, it receives the lowest
/// currently unoccupied ordinary tag bit.
pub fn toggleview(w: &mut World, mon: MonitorId, mask: u32) {
    let cur = w.mon(mon).seltags_mask();
    let new_mask = cur ^ mask;
    if new_mask == 0 {
        return;
    }

    let added = mask & !cur;
    if added != 0 {
        if let Some(owner) = owning_monitor(w, added) {
            if owner != mon {
                let remaining = w.mon(owner).seltags_mask() & !added;
                let replacement = if remaining == 0 { lowest_unoccupied_bit(w) } else { remaining };
                set_current_tagset(w, owner, replacement);
                attachclients(w, owner);
            }
        }
    }

    set_current_tagset(w, mon, new_mask);
    attachclients(w, mon);
}

/// `tag(mask)` of the selected client. Refuses if `mask`'s bits are
/// already visible on `mon` itself; otherwise moves the
/// client to the monitor that owns `mask`.
pub fn tag(w: &mut World, mon: MonitorId, mask: u32) {
    if mask == 0 || mask & w.mon(mon).seltags_mask() != 0 {
        return;
    }
    let Some(sel) = w.mon(mon).sel else { return };
    if let Some(owner) = owning_monitor(w, mask) {
        if owner != mon {
            w.client_mut(sel).unwrap().tags = mask;
            relocate_client(w, sel, owner);
        }
    }
}

/// `toggletag(mask)`: flip `mask` bits in the selected client's own tag
/// mask. Refuses to clear a client down to zero tags.
pub fn toggletag(w: &mut World, mon: MonitorId, mask: u32) {
    let Some(sel) = w.mon(mon).sel else { return };
    let Some(client) = w.client_mut(sel) else { return };
    let new_tags = client.tags ^ mask;
    if new_tags == 0 {
        return;
    }
    client.tags = new_tags;
}

/// `focusorview(mask)`: focus the monitor already showing `mask`; if
/// none shows it, fall back to [`view`] on `mon`. Returns the monitor
/// that ends up holding focus.
pub fn focusorview(w: &mut World, mon: MonitorId, mask: u32) -> MonitorId {
    if let Some(owner) = owning_monitor(w, mask) {
        return owner;
    }
    view(w, mon, mask);
    mon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::LayoutKind;
    use crate::model::tags::TagConfig;

    fn two_monitor_world() -> World {
        let mut w = World::new(TagConfig::new(9, 1));
        let m0 = w.alloc_monitor(Rect::new(0, 0, 1920, 1080), 1 << 1, LayoutKind::Tile);
        let m1 = w.alloc_monitor(Rect::new(1920, 0, 1920, 1080), 1 << 4, LayoutKind::Tile);
        assert_eq!(m0.index(), 0);
        assert_eq!(m1.index(), 1);
        w.selmon = m0;
        w
    }

    #[test]
    fn view_swaps_tagsets_preserving_disjointness() {
        let mut w = two_monitor_world();
        let m0 = MonitorId::from_index(0);
        view(&mut w, m0, 1 << 4);
        assert_eq!(w.mon(m0).seltags_mask(), 1 << 4);
        assert_eq!(w.mon(MonitorId::from_index(1)).seltags_mask(), 1 << 1);
    }

    #[test]
    fn tag_refuses_bits_already_visible_on_selmon() {
        let mut w = two_monitor_world();
        let m0 = MonitorId::from_index(0);
        let c = w.alloc_client(crate::model::client::Client::new(1, m0, 1 << 1));
        w.attach(m0, c);
        w.attach_stack(m0, c);
        w.mon_mut(m0).sel = Some(c);
        tag(&mut w, m0, 1 << 1);
        assert_eq!(w.client(c).unwrap().tags, 1 << 1);
    }
}
