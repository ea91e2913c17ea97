//! Client state flags.
//!
//! A window manager typically models client state as a handful of separate
//! `bool` fields on `Client`; this project collapses the ones that are pure
//! state bits
//! (never carrying data of their own) into a `bitflags` set so `arrange`
//! and the rule engine can test/set several at once, while leaving
//! `oldstate`/`swallowing` as dedicated `Option` fields on [`crate::model::client::Client`]
//! since those carry payload.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClientFlags: u32 {
        const FLOATING        = 1 << 0;
        const URGENT          = 1 << 1;
        const FULLSCREEN      = 1 << 2;
        const NEVER_FOCUS     = 1 << 3;
        const IGNORE_SIZEHINTS = 1 << 4;
        const BEING_MOVED     = 1 << 5;
        const TERMINAL        = 1 << 6;
        const NO_SWALLOW      = 1 << 7;
        const FIXED           = 1 << 8;
    }
}

impl ClientFlags {
    pub fn set_flag(&mut self, flag: ClientFlags, on: bool) {
        self.set(flag, on);
    }
}
