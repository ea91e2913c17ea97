//! `World`: the root state struct, threaded by mutable reference through
//! every event handler (Design Notes: "Global state").
//!
//! Modeled on a `client_set` + `config` + `extensions` split behind one
//! handle passed to every hook, with one deliberate difference: the
//! drawable/color-scheme ("drw", "scheme") lives in `wm_ui::Draw` instead,
//! owned by the `rwm` binary alongside a `World`, because `wm_core` must
//! not depend on `wm_ui` (see `DESIGN.md`). Everything else — `mons`,
//! `clients` (as the client/stack arenas), `systray`, atom handles via
//! `XConn`, the running flag — lives here.

use crate::model::client::Client;
use crate::model::ids::{ClientId, MonitorId};
use crate::model::monitor::Monitor;
use crate::model::rule::{MonitorRule, Rule};
use crate::model::tags::TagConfig;

pub struct World {
    pub clients: Vec<Option<Client>>,
    pub mons: Vec<Monitor>,
    pub selmon: MonitorId,

    pub tag_config: TagConfig,
    pub rules: Vec<Rule>,
    pub monitor_rules: Vec<MonitorRule>,

    /// Client ids docked in the system tray. Never linked into any
    /// monitor's `clients_head`/`stack_head` chain; this invariant does not apply to
    /// these, deliberately.
    pub systray_icons: Vec<ClientId>,
    pub systray_win: Option<u32>,

    pub smartgaps: u32,
    pub lockfullscreen: bool,
    pub resize_hints_global: bool,

    pub running: bool,
    /// Set by the `Restart` action; `main.rs` re-execs itself instead of
    /// exiting the process when this is set at loop exit.
    pub restart_requested: bool,
}

impl World {
    pub fn new(tag_config: TagConfig) -> Self {
        Self {
            clients: Vec::new(),
            mons: Vec::new(),
            selmon: MonitorId::from_index(0),
            tag_config,
            rules: Vec::new(),
            monitor_rules: Vec::new(),
            systray_icons: Vec::new(),
            systray_win: None,
            smartgaps: 3,
            lockfullscreen: true,
            resize_hints_global: false,
            running: true,
            restart_requested: false,
        }
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(id.index()).and_then(|c| c.as_ref())
    }

    pub fn client_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.get_mut(id.index()).and_then(|c| c.as_mut())
    }

    pub fn mon(&self, id: MonitorId) -> &Monitor {
        &self.mons[id.index()]
    }

    pub fn mon_mut(&mut self, id: MonitorId) -> &mut Monitor {
        &mut self.mons[id.index()]
    }

    pub fn selmon(&self) -> &Monitor {
        self.mon(self.selmon)
    }

    pub fn selmon_mut(&mut self) -> &mut Monitor {
        self.mon_mut(self.selmon)
    }

    pub fn alloc_client(&mut self, c: Client) -> ClientId {
        self.clients.push(Some(c));
        ClientId::from_index(self.clients.len() - 1)
    }

    /// Construct and register a new monitor, returning the id the caller
    /// needs to refer back to it. Takes the same inputs as
    /// [`Monitor::new`] rather than a built `Monitor`, since the id a
    /// `Monitor` carries must match its slot in `self.mons` and
    /// [`MonitorId::from_index`] isn't constructible outside this crate —
    /// this is the only way code outside `wm_core` (the `rwm` binary's
    /// startup monitor scan) can allocate one.
    pub fn alloc_monitor(&mut self, screen: crate::geometry::Rect, default_tags: u32, default_layout: crate::layout::LayoutKind) -> MonitorId {
        let id = MonitorId::from_index(self.mons.len());
        self.mons.push(Monitor::new(id, screen, default_tags, default_layout));
        id
    }

    /// Tombstone a client record. Does not unlink it from any chain —
    /// callers must detach/unstack first.
    pub fn free_client(&mut self, id: ClientId) {
        if let Some(slot) = self.clients.get_mut(id.index()) {
            *slot = None;
        }
    }

    /// Iterate a monitor's attach-order client list.
    pub fn clients_of(&self, mon: MonitorId) -> Vec<ClientId> {
        let mut out = Vec::new();
        let mut cur = self.mon(mon).clients_head;
        while let Some(id) = cur {
            out.push(id);
            cur = self.client(id).and_then(|c| c.next_in_clients);
        }
        out
    }

    /// Iterate a monitor's focus stack, MRU first.
    pub fn stack_of(&self, mon: MonitorId) -> Vec<ClientId> {
        let mut out = Vec::new();
        let mut cur = self.mon(mon).stack_head;
        while let Some(id) = cur {
            out.push(id);
            cur = self.client(id).and_then(|c| c.next_in_stack);
        }
        out
    }

    /// Tileable, visible clients on `mon` in attach order — the slice
    /// every [`crate::layout::arrange`] call consumes.
    pub fn tileable_visible(&self, mon: MonitorId) -> Vec<ClientId> {
        let tags = self.mon(mon).seltags_mask();
        self.clients_of(mon)
            .into_iter()
            .filter(|&id| {
                let c = self.client(id).expect("dangling id in client chain");
                !c.is_floating() && !c.is_fullscreen() && c.is_visible_on(tags)
            })
            .collect()
    }

    pub fn visible_clients(&self, mon: MonitorId) -> Vec<ClientId> {
        let tags = self.mon(mon).seltags_mask();
        self.clients_of(mon)
            .into_iter()
            .filter(|&id| self.client(id).map_or(false, |c| c.is_visible_on(tags)))
            .collect()
    }

    /// Attach `id` at the head of `mon`'s attach-order list.
    pub fn attach(&mut self, mon: MonitorId, id: ClientId) {
        let old_head = self.mon(mon).clients_head;
        self.client_mut(id).unwrap().next_in_clients = old_head;
        self.mon_mut(mon).clients_head = Some(id);
    }

    /// Attach `id` at the head of `mon`'s focus stack.
    pub fn attach_stack(&mut self, mon: MonitorId, id: ClientId) {
        let old_head = self.mon(mon).stack_head;
        self.client_mut(id).unwrap().next_in_stack = old_head;
        self.mon_mut(mon).stack_head = Some(id);
    }

    pub fn detach(&mut self, mon: MonitorId, id: ClientId) {
        let mut cur = self.mon(mon).clients_head;
        if cur == Some(id) {
            self.mon_mut(mon).clients_head = self.client(id).unwrap().next_in_clients;
            return;
        }
        while let Some(cid) = cur {
            let next = self.client(cid).unwrap().next_in_clients;
            if next == Some(id) {
                let after = self.client(id).unwrap().next_in_clients;
                self.client_mut(cid).unwrap().next_in_clients = after;
                return;
            }
            cur = next;
        }
    }

    pub fn detach_stack(&mut self, mon: MonitorId, id: ClientId) {
        let mut cur = self.mon(mon).stack_head;
        if cur == Some(id) {
            self.mon_mut(mon).stack_head = self.client(id).unwrap().next_in_stack;
        } else {
            while let Some(cid) = cur {
                let next = self.client(cid).unwrap().next_in_stack;
                if next == Some(id) {
                    let after = self.client(id).unwrap().next_in_stack;
                    self.client_mut(cid).unwrap().next_in_stack = after;
                    break;
                }
                cur = next;
            }
        }
        if self.mon(mon).sel == Some(id) {
            let top = self
                .stack_of(mon)
                .into_iter()
                .find(|&c| self.client(c).map_or(false, |c| c.is_visible_on(self.mon(mon).seltags_mask())));
            self.mon_mut(mon).sel = top;
        }
    }

    /// Every client is reachable through exactly one monitor's chains,
    /// both chains agree with `client.mon`.
    #[cfg(test)]
    pub fn check_t1(&self) -> bool {
        for (i, slot) in self.clients.iter().enumerate() {
            let Some(c) = slot else { continue };
            if self.systray_icons.contains(&ClientId::from_index(i)) {
                continue;
            }
            let id = ClientId::from_index(i);
            let in_clients = self.clients_of(c.mon).contains(&id);
            let in_stack = self.stack_of(c.mon).contains(&id);
            if !in_clients || !in_stack {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::LayoutKind;

    fn fresh_world() -> (World, MonitorId) {
        let mut w = World::new(TagConfig::new(9, 1));
        let mon = w.alloc_monitor(Rect::new(0, 0, 1920, 1080), 1, LayoutKind::Tile);
        w.selmon = mon;
        (w, mon)
    }

    #[test]
    fn attach_and_detach_preserve_t1() {
        let (mut w, mon) = fresh_world();
        let c1 = w.alloc_client(Client::new(1, mon, 1));
        let c2 = w.alloc_client(Client::new(2, mon, 1));
        w.attach(mon, c1);
        w.attach_stack(mon, c1);
        w.attach(mon, c2);
        w.attach_stack(mon, c2);
        assert!(w.check_t1());
        w.detach(mon, c1);
        w.detach_stack(mon, c1);
        w.free_client(c1);
        assert!(w.check_t1());
        assert_eq!(w.clients_of(mon), vec![c2]);
    }
}
