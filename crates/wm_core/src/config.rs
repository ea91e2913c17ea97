//! Compiled-in configuration" is explicitly
//! out of scope as *content*; this module is the *schema* those tables
//! are written against, which is squarely in scope as the mechanism the
//! Input Binder, Rule Engine and Layout Engine consume).
//!
//! Modeled on a top-level `Config` struct
//! (`core::Config`/`default_config()` pattern): one plain struct built
//! once at startup, passed by reference, no runtime mutation beyond the
//! handful of fields `xrdb` refreshes.

use crate::bindings::{ButtonBinding, KeyBinding};
use crate::layout::LayoutKind;
use crate::model::monitor::Gaps;
use crate::model::rule::{MonitorRule, Rule};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub foreground: u32,
    pub background: u32,
    pub accent: u32,
    pub secondary: u32,
    pub border: u32,
    pub palette: [u32; 16],
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            foreground: 0xe5e9f0,
            background: 0x2e3440,
            accent: 0x88c0d0,
            secondary: 0x4c566a,
            border: 0x3b4252,
            palette: [
                0x3b4252, 0xbf616a, 0xa3be8c, 0xebcb8b, 0x81a1c1, 0xb48ead, 0x88c0d0, 0xe5e9f0, 0x4c566a, 0xbf616a,
                0xa3be8c, 0xebcb8b, 0x81a1c1, 0xb48ead, 0x8fbcbb, 0xeceff4,
            ],
        }
    }
}

pub struct Config {
    pub tag_names: Vec<&'static str>,
    pub scratchpad_names: Vec<&'static str>,
    pub layouts: Vec<LayoutKind>,
    pub rules: Vec<Rule>,
    pub monitor_rules: Vec<MonitorRule>,
    pub keys: Vec<KeyBinding>,
    pub buttons: Vec<ButtonBinding>,
    pub colors: ColorScheme,
    pub gaps: Gaps,
    pub smartgaps: u32,
    pub lockfullscreen: bool,
    pub resize_hints: bool,
    pub border_px: u32,
    pub snap_px: u32,
    pub status_bar_process: &'static str,
    pub font_names: Vec<&'static str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_names: vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"],
            scratchpad_names: vec!["scratch"],
            layouts: vec![LayoutKind::Tile, LayoutKind::Floating, LayoutKind::Monocle],
            rules: Vec::new(),
            monitor_rules: vec![MonitorRule { monitor_id: -1, layout: LayoutKind::Tile, mfact: 0.55, nmaster: 1, show_bar: true, tagset: 1 }],
            keys: Vec::new(),
            buttons: Vec::new(),
            colors: ColorScheme::default(),
            gaps: Gaps::default(),
            smartgaps: 3,
            lockfullscreen: true,
            resize_hints: false,
            border_px: 1,
            snap_px: 32,
            status_bar_process: "statusbar",
            font_names: vec!["monospace:size=10"],
        }
    }
}
