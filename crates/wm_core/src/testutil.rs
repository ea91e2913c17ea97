//! A no-op `XConn` for exercising state-mutating handlers without a real
//! display connection.
//!
//! Modeled on a `MockXConn` (test-only mock trait
//! with cheap defaults for every method); this project's handlers are
//! generic over `XConn` directly rather than a forwarding trait, so this
//! is one concrete struct with trivial bodies instead of a blanket-impl
//! trait, but the intent — "every X call is a harmless default in
//! tests, state assertions happen on `World` afterward" — is the same.

#![cfg(test)]

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::x::event::XEvent;
use crate::x::property::{Prop, WindowAttributes, WmState};
use crate::x::{ButtonCombo, ClientAttr, ClientConfig, KeyCombo, WinType, XConn, Xid};

#[derive(Default)]
pub(crate) struct NoopXConn;

impl XConn for NoopXConn {
    fn root(&self) -> Xid {
        1
    }
    fn screen_rects(&self) -> Result<Vec<Rect>> {
        Ok(vec![Rect::new(0, 0, 1920, 1080)])
    }
    fn cursor_position(&self) -> Result<Point> {
        Ok(Point { x: 0, y: 0 })
    }

    fn grab_keys(&self, _combos: &[KeyCombo]) -> Result<()> {
        Ok(())
    }
    fn keysym_to_keycode(&self, _keysym: u32) -> Result<Option<u8>> {
        Ok(None)
    }
    fn grab_buttons(&self, _win: Xid, _combos: &[ButtonCombo], _focused_only: bool) -> Result<()> {
        Ok(())
    }
    fn grab_pointer_for_drag(&self) -> Result<()> {
        Ok(())
    }
    fn ungrab_pointer(&self) -> Result<()> {
        Ok(())
    }

    fn next_event(&self) -> Result<XEvent> {
        Ok(XEvent::MappingNotify)
    }
    fn poll_event(&self) -> Result<Option<XEvent>> {
        Ok(None)
    }
    fn flush(&self) {}
    fn sync(&self) {}

    fn intern_atom(&self, _name: &str) -> Result<Xid> {
        Ok(0)
    }
    fn atom_name(&self, _xid: Xid) -> Result<String> {
        Ok(String::new())
    }

    fn get_prop(&self, _win: Xid, _name: &str) -> Result<Option<Prop>> {
        Ok(None)
    }
    fn set_prop(&self, _win: Xid, _name: &str, _val: Prop) -> Result<()> {
        Ok(())
    }
    fn delete_prop(&self, _win: Xid, _name: &str) -> Result<()> {
        Ok(())
    }
    fn get_wm_state(&self, _win: Xid) -> Result<Option<WmState>> {
        Ok(None)
    }
    fn set_wm_state(&self, _win: Xid, _state: WmState) -> Result<()> {
        Ok(())
    }
    fn get_window_attributes(&self, _win: Xid) -> Result<WindowAttributes> {
        Ok(WindowAttributes { override_redirect: false, mapped: true })
    }
    fn get_geometry(&self, _win: Xid) -> Result<Rect> {
        Ok(Rect::new(0, 0, 16, 16))
    }
    fn get_text_property(&self, _win: Xid, _prop: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn create_window(&self, _kind: WinType, _rect: Rect, _managed: bool) -> Result<Xid> {
        Ok(1)
    }
    fn reparent(&self, _win: Xid, _parent: Xid, _x: i16, _y: i16) -> Result<()> {
        Ok(())
    }
    fn existing_clients(&self) -> Result<Vec<Xid>> {
        Ok(Vec::new())
    }
    fn map(&self, _win: Xid) -> Result<()> {
        Ok(())
    }
    fn unmap(&self, _win: Xid) -> Result<()> {
        Ok(())
    }
    fn destroy(&self, _win: Xid) -> Result<()> {
        Ok(())
    }
    fn kill(&self, _win: Xid) -> Result<()> {
        Ok(())
    }
    fn set_client_config(&self, _win: Xid, _data: &[ClientConfig]) -> Result<()> {
        Ok(())
    }
    fn set_client_attributes(&self, _win: Xid, _attrs: &[ClientAttr]) -> Result<()> {
        Ok(())
    }
    fn set_input_focus(&self, _win: Xid) -> Result<()> {
        Ok(())
    }
    fn send_protocol_message(&self, _win: Xid, _protocol_atom: &str) -> Result<bool> {
        Ok(false)
    }
    fn send_client_message(&self, _win: Xid, _type_atom: &str, _data: [u32; 5]) -> Result<()> {
        Ok(())
    }

    fn warp_pointer(&self, _win: Xid, _x: i16, _y: i16) -> Result<()> {
        Ok(())
    }

    fn grab_server(&self) -> Result<()> {
        Ok(())
    }
    fn ungrab_server(&self) -> Result<()> {
        Ok(())
    }

    fn acquire_selection(&self, _selection_atom: &str, _owner: Xid) -> Result<bool> {
        Ok(true)
    }

    fn resource_manager_string(&self) -> Result<Option<String>> {
        Ok(None)
    }
}
