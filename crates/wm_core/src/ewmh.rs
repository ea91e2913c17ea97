//! EWMH/ICCCM publishing surface.
//!
//! Modeled on a `ClientMessageKind::as_message` +
//! the root-property publishing helpers scattered through its
//! `core::hooks` startup sequence; consolidated here into one module
//! since EWMH support is treated as a first-class component here
//! rather than an optional extension.

use crate::error::Result;
use crate::model::world::World;
use crate::x::atom::SUPPORTED;
use crate::x::{Prop, XConn};

/// Intern every atom in [`SUPPORTED`] and publish `_NET_SUPPORTED` plus
/// the supporting-wm-check window, run once at startup.
pub fn publish_supported<X: XConn>(x: &X, check_win: crate::x::Xid) -> Result<()> {
    let names: Vec<String> = SUPPORTED.iter().map(|a| a.as_ref().to_owned()).collect();
    x.set_prop(x.root(), "_NET_SUPPORTED", Prop::Atom(names))?;
    x.set_prop(x.root(), "_NET_SUPPORTING_WM_CHECK", Prop::Window(vec![check_win]))?;
    x.set_prop(check_win, "_NET_SUPPORTING_WM_CHECK", Prop::Window(vec![check_win]))?;
    x.set_prop(check_win, "_NET_WM_NAME", Prop::UTF8String(vec!["wm".into()]))?;
    Ok(())
}

pub fn publish_desktop_info<X: XConn>(x: &X, w: &World, tag_names: &[&str]) -> Result<()> {
    x.set_prop(x.root(), "_NET_NUMBER_OF_DESKTOPS", Prop::Cardinal(vec![w.tag_config.num_tags]))?;
    x.set_prop(x.root(), "_NET_DESKTOP_VIEWPORT", Prop::Cardinal(vec![0, 0]))?;
    x.set_prop(x.root(), "_NET_DESKTOP_NAMES", Prop::UTF8String(tag_names.iter().map(|s| s.to_string()).collect()))?;
    let current = first_set_bit(w.selmon().seltags_mask()).unwrap_or(0);
    x.set_prop(x.root(), "_NET_CURRENT_DESKTOP", Prop::Cardinal(vec![current]))?;
    Ok(())
}

pub fn publish_active_window<X: XConn>(x: &X, win: Option<crate::x::Xid>) -> Result<()> {
    x.set_prop(x.root(), "_NET_ACTIVE_WINDOW", Prop::Window(vec![win.unwrap_or(0)]))
}

/// `_NET_CLIENT_LIST` = concatenated attach-order lists across
/// monitors in monitor order; `_NET_CLIENT_LIST_STACKING` = concatenated
/// stack orders.
pub fn publish_client_lists<X: XConn>(x: &X, w: &World) -> Result<()> {
    let mut attach_order = Vec::new();
    let mut stack_order = Vec::new();
    for mon in &w.mons {
        for id in w.clients_of(mon.id) {
            if let Some(c) = w.client(id) {
                attach_order.push(c.win);
            }
        }
        for id in w.stack_of(mon.id) {
            if let Some(c) = w.client(id) {
                stack_order.push(c.win);
            }
        }
    }
    x.set_prop(x.root(), "_NET_CLIENT_LIST", Prop::Window(attach_order))?;
    x.set_prop(x.root(), "_NET_CLIENT_LIST_STACKING", Prop::Window(stack_order))?;
    Ok(())
}

fn first_set_bit(mask: u32) -> Option<u32> {
    if mask == 0 {
        None
    } else {
        Some(mask.trailing_zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_set_bit_of_zero_is_none() {
        assert_eq!(first_set_bit(0), None);
        assert_eq!(first_set_bit(0b1000), Some(3));
    }
}
