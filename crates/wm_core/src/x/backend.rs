//! `X11rbConn`: the production [`XConn`] backed by `x11rb`.
//!
//! Modeled on an `x11rb`-backed connection (atom
//! pre-interning via `Atom::iter()` + a batch of `InternAtom` requests
//! flushed once, RandR for screen geometry, `ConnectionExt` helpers for
//! property get/set). The benign-error swallowing policy is
//! implemented here rather than at the call site, same division of
//! responsibility as a thin error translation layer.

use std::cell::RefCell;
use std::collections::HashMap;

use strum::IntoEnumIterator;
use tracing::{debug, trace};
use x11rb::connection::Connection;
use x11rb::protocol::randr::ConnectionExt as _;
use x11rb::protocol::xproto::{
    Atom as XAtom, ChangeWindowAttributesAux, ConfigureWindowAux, ConnectionExt as _,
    CreateWindowAux, EventMask, GrabMode, InputFocus, PropMode, StackMode,
};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::x::atom::Atom;
use crate::x::event::*;
use crate::x::property::{Prop, WindowAttributes, WmState};
use crate::x::{ButtonCombo, ClientAttr, ClientConfig, KeyCombo, WinType, XConn, Xid};

pub struct X11rbConn {
    conn: RustConnection,
    root: Xid,
    atoms: HashMap<Atom, Xid>,
    /// Reply from a zero-width `PropMode::Append` to root used as the
    /// server-grab depth counter; mirrors a nested
    /// `grab_server`/`ungrab_server` bracket semantics.
    grab_depth: RefCell<u32>,
}

impl X11rbConn {
    pub fn connect() -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(None).map_err(Error::Connection)?;
        let root = conn.setup().roots[screen_num].root;

        let cookies: Vec<_> = Atom::iter()
            .map(|a| (a, conn.intern_atom(false, a.as_ref().as_bytes())))
            .collect::<Vec<_>>();
        let mut atoms = HashMap::new();
        for (atom, cookie) in cookies {
            let reply = cookie.map_err(Error::Connection)?.reply().map_err(Error::from)?;
            atoms.insert(atom, reply.atom);
        }

        conn.flush().map_err(Error::Connection)?;

        Ok(Self { conn, root, atoms, grab_depth: RefCell::new(0) })
    }

    fn atom_id(&self, atom: Atom) -> Xid {
        *self.atoms.get(&atom).expect("all declared atoms pre-interned at connect()")
    }

    fn atom_id_by_name(&self, name: &str) -> Result<Xid> {
        if let Some(a) = Atom::iter().find(|a| a.as_ref() == name) {
            return Ok(self.atom_id(a));
        }
        Ok(self.conn.intern_atom(false, name.as_bytes()).map_err(Error::Connection)?.reply().map_err(Error::from)?.atom)
    }

    /// Translate an X error code into `Ok(())` for the benign classes
    ///, propagating anything else.
    fn swallow_benign<T: Default>(&self, result: std::result::Result<T, x11rb::errors::ReplyError>) -> Result<T> {
        match result {
            Ok(v) => Ok(v),
            Err(x11rb::errors::ReplyError::X11Error(e)) if Error::benign_kind_for_code(e.error_code).is_some() => {
                trace!(code = e.error_code, "swallowed benign X error");
                Ok(T::default())
            }
            Err(e) => Err(Error::from(e)),
        }
    }
}

impl XConn for X11rbConn {
    fn root(&self) -> Xid {
        self.root
    }

    fn screen_rects(&self) -> Result<Vec<Rect>> {
        let resources = self.conn.randr_get_screen_resources(self.root).map_err(Error::Connection)?.reply().map_err(Error::from)?;
        let mut rects = Vec::new();
        for output in resources.outputs {
            let info = self
                .conn
                .randr_get_output_info(output, resources.config_timestamp)
                .map_err(Error::Connection)?
                .reply()
                .map_err(Error::from)?;
            if info.crtc == 0 {
                continue;
            }
            let crtc = self.conn.randr_get_crtc_info(info.crtc, resources.config_timestamp).map_err(Error::Connection)?.reply().map_err(Error::from)?;
            rects.push(Rect::new(crtc.x as i32, crtc.y as i32, crtc.width as u32, crtc.height as u32));
        }
        if rects.is_empty() {
            let setup = self.conn.setup();
            let screen = &setup.roots[0];
            rects.push(Rect::new(0, 0, screen.width_in_pixels as u32, screen.height_in_pixels as u32));
        }
        Ok(rects)
    }

    fn cursor_position(&self) -> Result<Point> {
        let reply = self.conn.query_pointer(self.root).map_err(Error::Connection)?.reply().map_err(Error::from)?;
        Ok(Point::new(reply.root_x as i32, reply.root_y as i32))
    }

    fn grab_keys(&self, combos: &[KeyCombo]) -> Result<()> {
        self.conn.ungrab_key(0u8, self.root, x11rb::protocol::xproto::ModMask::ANY).map_err(Error::Connection)?;
        for c in combos {
            self.conn
                .grab_key(true, self.root, c.mods.into(), c.keycode, GrabMode::ASYNC, GrabMode::ASYNC)
                .map_err(Error::Connection)?;
        }
        Ok(())
    }

    fn keysym_to_keycode(&self, keysym: u32) -> Result<Option<u8>> {
        let setup = self.conn.setup();
        let min = setup.min_keycode;
        let count = setup.max_keycode - min + 1;
        let reply = self.conn.get_keyboard_mapping(min, count).map_err(Error::Connection)?.reply().map_err(Error::from)?;
        let per_code = reply.keysyms_per_keycode.max(1) as usize;
        for (i, group) in reply.keysyms.chunks(per_code).enumerate() {
            if group.iter().any(|&ks| ks == keysym) {
                return Ok(Some(min + i as u8));
            }
        }
        Ok(None)
    }

    fn grab_buttons(&self, win: Xid, combos: &[ButtonCombo], _focused_only: bool) -> Result<()> {
        for c in combos {
            self.conn
                .grab_button(
                    false,
                    win,
                    (EventMask::BUTTON_PRESS).into(),
                    GrabMode::ASYNC,
                    GrabMode::ASYNC,
                    0u32,
                    0u32,
                    c.button.into(),
                    c.mods.into(),
                )
                .map_err(Error::Connection)?;
        }
        Ok(())
    }

    fn grab_pointer_for_drag(&self) -> Result<()> {
        let mask = EventMask::BUTTON_RELEASE | EventMask::POINTER_MOTION;
        self.conn
            .grab_pointer(false, self.root, mask, GrabMode::ASYNC, GrabMode::ASYNC, 0u32, 0u32, x11rb::CURRENT_TIME)
            .map_err(Error::Connection)?;
        Ok(())
    }

    fn ungrab_pointer(&self) -> Result<()> {
        self.conn.ungrab_pointer(x11rb::CURRENT_TIME).map_err(Error::Connection)?;
        Ok(())
    }

    fn next_event(&self) -> Result<XEvent> {
        loop {
            let ev = self.conn.wait_for_event().map_err(Error::Connection)?;
            if let Some(x) = translate(ev) {
                return Ok(x);
            }
            // missing dispatch slot: drop and pull the next one
        }
    }

    fn poll_event(&self) -> Result<Option<XEvent>> {
        match self.conn.poll_for_event().map_err(Error::Connection)? {
            Some(ev) => Ok(translate(ev)),
            None => Ok(None),
        }
    }

    fn flush(&self) {
        let _ = self.conn.flush();
    }

    fn sync(&self) {
        let _ = self.conn.sync();
    }

    fn intern_atom(&self, name: &str) -> Result<Xid> {
        self.atom_id_by_name(name)
    }

    fn atom_name(&self, xid: Xid) -> Result<String> {
        let reply = self.conn.get_atom_name(xid as XAtom).map_err(Error::Connection)?.reply().map_err(Error::from)?;
        Ok(String::from_utf8_lossy(&reply.name).into_owned())
    }

    fn get_prop(&self, win: Xid, name: &str) -> Result<Option<Prop>> {
        use x11rb::protocol::xproto::AtomEnum;

        let atom = self.atom_id_by_name(name)?;
        let reply = self
            .conn
            .get_property(false, win, atom, AtomEnum::ANY, 0, u32::MAX)
            .map_err(Error::Connection)?
            .reply()
            .map_err(Error::from)?;
        if reply.value.is_empty() {
            return Ok(None);
        }

        // Decode per the reply's declared type, not the requested name:
        // WM_TRANSIENT_FOR/WM_HINTS carry WINDOW/binary payloads that must
        // not be run through the UTF-8 text path.
        let type_atom = reply.type_;
        if type_atom == u32::from(AtomEnum::WINDOW) {
            let ids: Vec<u32> = reply.value32().map(|it| it.collect()).unwrap_or_default();
            return Ok(Some(Prop::Window(ids)));
        }
        if type_atom == u32::from(AtomEnum::CARDINAL) {
            let vals: Vec<u32> = reply.value32().map(|it| it.collect()).unwrap_or_default();
            return Ok(Some(Prop::Cardinal(vals)));
        }
        if type_atom == self.atom_id(Atom::Utf8String) {
            let s = String::from_utf8_lossy(&reply.value).into_owned();
            return Ok(Some(Prop::UTF8String(s.split('\0').filter(|s| !s.is_empty()).map(str::to_owned).collect())));
        }
        if type_atom == u32::from(AtomEnum::ATOM) {
            let mut names = Vec::new();
            for a in reply.value32().map(|it| it.collect::<Vec<_>>()).unwrap_or_default() {
                names.push(self.atom_name(a)?);
            }
            return Ok(Some(Prop::Atom(names)));
        }
        // STRING (WM_CLASS, legacy WM_NAME): NUL-separated 8-bit fields.
        let s = String::from_utf8_lossy(&reply.value).into_owned();
        Ok(Some(Prop::String(s.split('\0').filter(|s| !s.is_empty()).map(str::to_owned).collect())))
    }

    fn set_prop(&self, win: Xid, name: &str, val: Prop) -> Result<()> {
        let atom = self.atom_id_by_name(name)?;
        let utf8 = self.atom_id(Atom::Utf8String);
        let bytes = match &val {
            Prop::UTF8String(v) | Prop::Atom(v) | Prop::String(v) => v.join("\0").into_bytes(),
            Prop::Cardinal(v) => v.iter().flat_map(|x| x.to_ne_bytes()).collect(),
            Prop::Window(v) => v.iter().flat_map(|x| x.to_ne_bytes()).collect(),
        };
        self.conn.change_property8(PropMode::REPLACE, win, atom, utf8, &bytes).map_err(Error::Connection)?;
        Ok(())
    }

    fn delete_prop(&self, win: Xid, name: &str) -> Result<()> {
        let atom = self.atom_id_by_name(name)?;
        self.conn.delete_property(win, atom).map_err(Error::Connection)?;
        Ok(())
    }

    fn get_wm_state(&self, win: Xid) -> Result<Option<WmState>> {
        let atom = self.atom_id(Atom::WmState);
        let reply = self.swallow_benign(self.conn.get_property(false, win, atom, x11rb::protocol::xproto::AtomEnum::ANY, 0, 2).map_err(Error::Connection)?.reply())?;
        match reply.value32().and_then(|mut it| it.next()) {
            Some(0) => Ok(Some(WmState::Withdrawn)),
            Some(1) => Ok(Some(WmState::Normal)),
            Some(3) => Ok(Some(WmState::Iconic)),
            _ => Ok(None),
        }
    }

    fn set_wm_state(&self, win: Xid, state: WmState) -> Result<()> {
        let atom = self.atom_id(Atom::WmState);
        let data = [state.as_u32(), 0];
        self.conn.change_property32(PropMode::REPLACE, win, atom, atom, &data).map_err(Error::Connection)?;
        Ok(())
    }

    fn get_window_attributes(&self, win: Xid) -> Result<WindowAttributes> {
        let reply = self.swallow_benign(self.conn.get_window_attributes(win).map_err(Error::Connection)?.reply())?;
        Ok(WindowAttributes {
            override_redirect: reply.override_redirect,
            mapped: matches!(reply.map_state, x11rb::protocol::xproto::MapState::VIEWABLE),
        })
    }

    fn get_geometry(&self, win: Xid) -> Result<Rect> {
        let reply = self.swallow_benign(self.conn.get_geometry(win).map_err(Error::Connection)?.reply())?;
        Ok(Rect::new(reply.x as i32, reply.y as i32, reply.width as u32, reply.height as u32))
    }

    fn get_text_property(&self, win: Xid, prop: &str) -> Result<Option<String>> {
        Ok(self.get_prop(win, prop)?.and_then(|p| p.first_string().map(str::to_owned)))
    }

    fn create_window(&self, _kind: WinType, rect: Rect, _managed: bool) -> Result<Xid> {
        let id = self.conn.generate_id().map_err(Error::from)?;
        self.conn
            .create_window(
                x11rb::COPY_DEPTH_FROM_PARENT,
                id,
                self.root,
                rect.x as i16,
                rect.y as i16,
                rect.w as u16,
                rect.h as u16,
                0,
                x11rb::protocol::xproto::WindowClass::INPUT_OUTPUT,
                0,
                &CreateWindowAux::default().override_redirect(1),
            )
            .map_err(Error::Connection)?;
        Ok(id)
    }

    fn reparent(&self, win: Xid, parent: Xid, x: i16, y: i16) -> Result<()> {
        let _ = self.swallow_benign::<()>(self.conn.reparent_window(win, parent, x, y).map_err(Error::Connection)?.check());
        Ok(())
    }

    fn existing_clients(&self) -> Result<Vec<Xid>> {
        let reply = self.conn.query_tree(self.root).map_err(Error::Connection)?.reply().map_err(Error::from)?;
        Ok(reply.children)
    }

    fn map(&self, win: Xid) -> Result<()> {
        let _ = self.swallow_benign::<()>(self.conn.map_window(win).map_err(Error::Connection)?.check());
        Ok(())
    }

    fn unmap(&self, win: Xid) -> Result<()> {
        let _ = self.swallow_benign::<()>(self.conn.unmap_window(win).map_err(Error::Connection)?.check());
        Ok(())
    }

    fn destroy(&self, win: Xid) -> Result<()> {
        let _ = self.swallow_benign::<()>(self.conn.destroy_window(win).map_err(Error::Connection)?.check());
        Ok(())
    }

    fn kill(&self, win: Xid) -> Result<()> {
        if !self.send_protocol_message(win, "WM_DELETE_WINDOW")? {
            let _ = self.conn.kill_client(win).map_err(Error::Connection)?;
        }
        Ok(())
    }

    fn set_client_config(&self, win: Xid, data: &[ClientConfig]) -> Result<()> {
        let mut aux = ConfigureWindowAux::default();
        for c in data {
            match c {
                ClientConfig::BorderPx(bw) => aux = aux.border_width(*bw),
                ClientConfig::Position(r) => {
                    aux = aux.x(r.x).y(r.y).width(r.w).height(r.h);
                }
                ClientConfig::StackAbove(sibling) => aux = aux.sibling(*sibling).stack_mode(StackMode::ABOVE),
                ClientConfig::StackBelow(sibling) => aux = aux.sibling(*sibling).stack_mode(StackMode::BELOW),
                ClientConfig::StackTop => aux = aux.stack_mode(StackMode::ABOVE),
                ClientConfig::StackBottom => aux = aux.stack_mode(StackMode::BELOW),
            }
        }
        let _ = self.swallow_benign::<()>(self.conn.configure_window(win, &aux).map_err(Error::Connection)?.check());
        Ok(())
    }

    fn set_client_attributes(&self, win: Xid, attrs: &[ClientAttr]) -> Result<()> {
        let mut aux = ChangeWindowAttributesAux::default();
        for a in attrs {
            match a {
                ClientAttr::BorderColor(px) => aux = aux.border_pixel(*px),
                ClientAttr::ClientEventMask => {
                    aux = aux.event_mask(EventMask::ENTER_WINDOW | EventMask::FOCUS_CHANGE | EventMask::PROPERTY_CHANGE | EventMask::STRUCTURE_NOTIFY)
                }
                ClientAttr::ClientUnmapMask => aux = aux.event_mask(EventMask::NO_EVENT),
                ClientAttr::RootEventMask => {
                    aux = aux.event_mask(
                        EventMask::SUBSTRUCTURE_REDIRECT
                            | EventMask::SUBSTRUCTURE_NOTIFY
                            | EventMask::BUTTON_PRESS
                            | EventMask::POINTER_MOTION
                            | EventMask::STRUCTURE_NOTIFY
                            | EventMask::PROPERTY_CHANGE,
                    )
                }
                ClientAttr::OverrideRedirect => aux = aux.override_redirect(1),
            }
        }
        let _ = self.swallow_benign::<()>(self.conn.change_window_attributes(win, &aux).map_err(Error::Connection)?.check());
        Ok(())
    }

    fn set_input_focus(&self, win: Xid) -> Result<()> {
        let _ = self.swallow_benign::<()>(
            self.conn.set_input_focus(InputFocus::POINTER_ROOT, win, x11rb::CURRENT_TIME).map_err(Error::Connection)?.check(),
        );
        Ok(())
    }

    fn send_protocol_message(&self, win: Xid, protocol: &str) -> Result<bool> {
        let protocols_atom = self.atom_id(Atom::WmProtocols);
        let reply = self.conn.get_property(false, win, protocols_atom, x11rb::protocol::xproto::AtomEnum::ATOM, 0, 1024).map_err(Error::Connection)?.reply().map_err(Error::from)?;
        let target = self.atom_id_by_name(protocol)?;
        let supports = reply.value32().map_or(false, |mut it| it.any(|a| a == target));
        if !supports {
            return Ok(false);
        }
        self.send_client_message(win, "WM_PROTOCOLS", [target, x11rb::CURRENT_TIME, 0, 0, 0])?;
        Ok(true)
    }

    fn send_client_message(&self, win: Xid, type_atom: &str, data: [u32; 5]) -> Result<()> {
        let atom = self.atom_id_by_name(type_atom)?;
        let event = x11rb::protocol::xproto::ClientMessageEvent::new(32, win, atom, data);
        self.conn
            .send_event(false, win, EventMask::NO_EVENT, event)
            .map_err(Error::Connection)?;
        Ok(())
    }

    fn warp_pointer(&self, win: Xid, x: i16, y: i16) -> Result<()> {
        self.conn.warp_pointer(0u32, win, 0, 0, 0, 0, x, y).map_err(Error::Connection)?;
        Ok(())
    }

    fn grab_server(&self) -> Result<()> {
        let mut depth = self.grab_depth.borrow_mut();
        if *depth == 0 {
            self.conn.grab_server().map_err(Error::Connection)?;
        }
        *depth += 1;
        Ok(())
    }

    fn ungrab_server(&self) -> Result<()> {
        let mut depth = self.grab_depth.borrow_mut();
        *depth = depth.saturating_sub(1);
        if *depth == 0 {
            self.conn.ungrab_server().map_err(Error::Connection)?;
        }
        Ok(())
    }

    fn acquire_selection(&self, selection_atom: &str, owner: Xid) -> Result<bool> {
        let atom = self.atom_id_by_name(selection_atom)?;
        self.conn.set_selection_owner(owner, atom, x11rb::CURRENT_TIME).map_err(Error::Connection)?;
        let reply = self.conn.get_selection_owner(atom).map_err(Error::Connection)?.reply().map_err(Error::from)?;
        Ok(reply.owner == owner)
    }

    fn resource_manager_string(&self) -> Result<Option<String>> {
        self.get_text_property(self.root, "RESOURCE_MANAGER")
    }
}

fn translate(ev: x11rb::protocol::Event) -> Option<XEvent> {
    use x11rb::protocol::Event as E;
    match ev {
        E::ButtonPress(e) => Some(XEvent::ButtonPress(ButtonPress {
            window: e.event,
            subwindow: (e.child != 0).then_some(e.child),
            button: e.detail,
            mods: e.state.into(),
            root_pos: Point::new(e.root_x as i32, e.root_y as i32),
        })),
        E::ButtonRelease(e) => Some(XEvent::ButtonRelease(e.event)),
        E::ClientMessage(e) => Some(XEvent::ClientMessage(ClientMessage {
            window: e.window,
            type_atom: e.type_,
            data: {
                let d = e.data.as_data32();
                [d[0], d[1], d[2], d[3], d[4]]
            },
        })),
        E::ConfigureRequest(e) => Some(XEvent::ConfigureRequest(ConfigureEvent {
            window: e.window,
            rect: Rect::new(e.x as i32, e.y as i32, e.width as u32, e.height as u32),
            border_width: e.border_width as u32,
            above: (e.sibling != 0).then_some(e.sibling),
            override_redirect: false,
            is_request: true,
        })),
        E::ConfigureNotify(e) => Some(XEvent::ConfigureNotify(ConfigureEvent {
            window: e.window,
            rect: Rect::new(e.x as i32, e.y as i32, e.width as u32, e.height as u32),
            border_width: e.border_width as u32,
            above: None,
            override_redirect: e.override_redirect,
            is_request: false,
        })),
        E::DestroyNotify(e) => Some(XEvent::DestroyNotify(e.window)),
        E::EnterNotify(e) => Some(XEvent::EnterNotify(PointerChange {
            window: e.event,
            root_pos: Point::new(e.root_x as i32, e.root_y as i32),
            event_pos: Point::new(e.event_x as i32, e.event_y as i32),
        })),
        E::Expose(e) => Some(XEvent::Expose(ExposeEvent { window: e.window, count: e.count })),
        E::FocusIn(e) => Some(XEvent::FocusIn(e.event)),
        E::KeyPress(e) => Some(XEvent::KeyPress(KeyPress { mods: e.state.into(), keycode: e.detail })),
        E::MappingNotify(_) => Some(XEvent::MappingNotify),
        E::MapRequest(e) => Some(XEvent::MapRequest(e.window)),
        E::MotionNotify(e) => Some(XEvent::MotionNotify(MotionNotify {
            root_pos: Point::new(e.root_x as i32, e.root_y as i32),
            time_ms: e.time,
        })),
        E::PropertyNotify(e) => Some(XEvent::PropertyNotify(PropertyEvent {
            window: e.window,
            atom: e.atom,
            deleted: e.state == x11rb::protocol::xproto::Property::DELETE,
        })),
        E::ResizeRequest(e) => Some(XEvent::ResizeRequest(e.window)),
        E::UnmapNotify(e) => Some(XEvent::UnmapNotify(e.window)),
        other => {
            debug!(?other, "dropping event with no dispatch slot");
            None
        }
    }
}
