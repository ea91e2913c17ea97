//! EWMH/ICCCM atom names used by the core.
//!
//! Modeled on an `Atom` enum (`AsRefStr` derive over
//! the X atom name strings, interned lazily by the backend and cached).

use strum_macros::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[allow(non_camel_case_types)]
pub enum Atom {
    #[strum(serialize = "WM_PROTOCOLS")]
    WmProtocols,
    #[strum(serialize = "WM_DELETE_WINDOW")]
    WmDeleteWindow,
    #[strum(serialize = "WM_TAKE_FOCUS")]
    WmTakeFocus,
    #[strum(serialize = "WM_STATE")]
    WmState,
    #[strum(serialize = "WM_CLASS")]
    WmClass,
    #[strum(serialize = "WM_NAME")]
    WmName,
    #[strum(serialize = "WM_TRANSIENT_FOR")]
    WmTransientFor,
    #[strum(serialize = "WM_NORMAL_HINTS")]
    WmNormalHints,
    #[strum(serialize = "WM_HINTS")]
    WmHints,

    #[strum(serialize = "_NET_SUPPORTED")]
    NetSupported,
    #[strum(serialize = "_NET_SUPPORTING_WM_CHECK")]
    NetSupportingWmCheck,
    #[strum(serialize = "_NET_WM_NAME")]
    NetWmName,
    #[strum(serialize = "_NET_WM_STATE")]
    NetWmState,
    #[strum(serialize = "_NET_WM_STATE_FULLSCREEN")]
    NetWmStateFullscreen,
    #[strum(serialize = "_NET_WM_WINDOW_TYPE")]
    NetWmWindowType,
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_DIALOG")]
    NetWmWindowTypeDialog,
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_UTILITY")]
    NetWmWindowTypeUtility,
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_TOOLBAR")]
    NetWmWindowTypeToolbar,
    #[strum(serialize = "_NET_WM_WINDOW_TYPE_SPLASH")]
    NetWmWindowTypeSplash,
    #[strum(serialize = "_NET_NUMBER_OF_DESKTOPS")]
    NetNumberOfDesktops,
    #[strum(serialize = "_NET_CURRENT_DESKTOP")]
    NetCurrentDesktop,
    #[strum(serialize = "_NET_DESKTOP_VIEWPORT")]
    NetDesktopViewport,
    #[strum(serialize = "_NET_DESKTOP_NAMES")]
    NetDesktopNames,
    #[strum(serialize = "_NET_ACTIVE_WINDOW")]
    NetActiveWindow,
    #[strum(serialize = "_NET_CLIENT_LIST")]
    NetClientList,
    #[strum(serialize = "_NET_CLIENT_LIST_STACKING")]
    NetClientListStacking,

    #[strum(serialize = "_MOTIF_WM_HINTS")]
    MotifWmHints,

    #[strum(serialize = "_NET_SYSTEM_TRAY_S0")]
    NetSystemTrayS0,
    #[strum(serialize = "_NET_SYSTEM_TRAY_ORIENTATION")]
    NetSystemTrayOrientation,
    #[strum(serialize = "_NET_SYSTEM_TRAY_OPCODE")]
    NetSystemTrayOpcode,
    #[strum(serialize = "_XEMBED")]
    XEmbed,
    #[strum(serialize = "_XEMBED_INFO")]
    XEmbedInfo,

    #[strum(serialize = "UTF8_STRING")]
    Utf8String,
}

/// Window types that are always floated on adoption, regardless of rules
///.
pub const AUTO_FLOAT_WINDOW_TYPES: &[Atom] = &[
    Atom::NetWmWindowTypeDialog,
    Atom::NetWmWindowTypeUtility,
    Atom::NetWmWindowTypeToolbar,
    Atom::NetWmWindowTypeSplash,
];

/// Every atom the core publishes on `_NET_SUPPORTED`.
pub const SUPPORTED: &[Atom] = &[
    Atom::NetSupported,
    Atom::NetSupportingWmCheck,
    Atom::NetNumberOfDesktops,
    Atom::NetCurrentDesktop,
    Atom::NetDesktopViewport,
    Atom::NetDesktopNames,
    Atom::NetActiveWindow,
    Atom::NetClientList,
    Atom::NetClientListStacking,
    Atom::NetWmState,
    Atom::NetWmStateFullscreen,
    Atom::NetWmWindowType,
    Atom::NetWmWindowTypeDialog,
    Atom::NetWmWindowTypeUtility,
    Atom::NetWmWindowTypeToolbar,
    Atom::NetWmWindowTypeSplash,
    Atom::NetSystemTrayOrientation,
];
