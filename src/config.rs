//! The compiled-in configuration table (dwm's `config.h` role): key and
//! button bindings, adoption rules, and monitor defaults. Everything here
//! is content the core's [`wm_core::config::Config`] schema is agnostic
//! to — this module is the one place that content lives, built once
//! at startup against a live [`XConn`] since key bindings need the
//! keyboard's actual keysym-to-keycode mapping.

use tracing::warn;
use wm_core::bindings::{Action, ButtonAction, ButtonBinding, DragKind, KeyBinding};
use wm_core::config::Config;
use wm_core::layout::LayoutKind;
use wm_core::model::rule::{Rule, RuleEffects, RulePredicate};
use wm_core::x::{ButtonCombo, KeyCombo, XConn};

const SHIFT: u16 = 1 << 0;
const CONTROL: u16 = 1 << 2;
const MOD4: u16 = 1 << 6;
const MODKEY: u16 = MOD4;

const BUTTON_LEFT: u8 = 1;
const BUTTON_RIGHT: u8 = 3;

const TERMINAL: &str = "st";
const LAUNCHER: &str = "dmenu_run";

/// Resolve `name` to a keycode under the live keyboard mapping and push a
/// binding for it, skipping (with a warning) any key name the current
/// layout has no keysym or keycode for.
fn bind<X: XConn>(x: &X, keys: &mut Vec<KeyBinding>, mods: u16, name: &str, action: Action) {
    let Some(sym) = wm_core::bindings::resolve_keysym(name) else {
        warn!(key = name, "no keysym for configured binding; skipped");
        return;
    };
    match x.keysym_to_keycode(sym) {
        Ok(Some(keycode)) => keys.push(KeyBinding { combo: KeyCombo { mods, keycode }, action }),
        Ok(None) => warn!(key = name, "keysym has no keycode under the current mapping; skipped"),
        Err(e) => warn!(key = name, error = %e, "keycode lookup failed; skipped"),
    }
}

/// Build the full compiled-in configuration against a connected `XConn`.
/// Grounded on dwm's `config.h` table shape: modkey + digit for
/// view/tag, modkey+shift for tag, h/j/k/l for stack and factor
/// adjustment, a handful of spawned programs.
pub fn build<X: XConn>(x: &X) -> Config {
    let mut keys = Vec::new();

    bind(x, &mut keys, MODKEY | SHIFT, "Return", Action::Spawn(vec![TERMINAL.to_string()]));
    bind(x, &mut keys, MODKEY, "p", Action::Spawn(vec![LAUNCHER.to_string()]));

    bind(x, &mut keys, MODKEY, "j", Action::FocusStack(1));
    bind(x, &mut keys, MODKEY, "k", Action::FocusStack(-1));
    bind(x, &mut keys, MODKEY | SHIFT, "j", Action::PushStack(1));
    bind(x, &mut keys, MODKEY | SHIFT, "k", Action::PushStack(-1));

    bind(x, &mut keys, MODKEY, "comma", Action::IncNMaster(1));
    bind(x, &mut keys, MODKEY, "period", Action::IncNMaster(-1));

    bind(x, &mut keys, MODKEY, "t", Action::SetLayout(LayoutKind::Tile));
    bind(x, &mut keys, MODKEY, "f", Action::SetLayout(LayoutKind::Floating));
    bind(x, &mut keys, MODKEY, "m", Action::SetLayout(LayoutKind::Monocle));

    bind(x, &mut keys, MODKEY, "space", Action::ToggleFloating);
    bind(x, &mut keys, MODKEY | SHIFT, "f", Action::ToggleFullscreen);
    bind(x, &mut keys, MODKEY, "b", Action::ToggleBar);
    bind(x, &mut keys, MODKEY, "s", Action::ToggleScratchpad(0));

    bind(x, &mut keys, MODKEY | SHIFT, "c", Action::KillClient);
    bind(x, &mut keys, MODKEY | SHIFT, "q", Action::Quit);
    bind(x, &mut keys, MODKEY | CONTROL | SHIFT, "q", Action::Restart);
    bind(x, &mut keys, MODKEY | SHIFT, "x", Action::Xrdb);

    for i in 0..9u32 {
        let digit = (b'1' + i as u8) as char;
        let name = digit.to_string();
        let bit = 1u32 << i;
        bind(x, &mut keys, MODKEY, &name, Action::View(bit));
        bind(x, &mut keys, MODKEY | SHIFT, &name, Action::Tag(bit));
        bind(x, &mut keys, MODKEY | CONTROL, &name, Action::ToggleView(bit));
        bind(x, &mut keys, MODKEY | CONTROL | SHIFT, &name, Action::ToggleTag(bit));
    }

    let buttons = vec![
        ButtonBinding { combo: ButtonCombo { mods: 0, button: BUTTON_LEFT }, on_client: true, action: ButtonAction::FocusClient },
        ButtonBinding { combo: ButtonCombo { mods: MODKEY, button: BUTTON_LEFT }, on_client: true, action: ButtonAction::Drag(DragKind::Move) },
        ButtonBinding { combo: ButtonCombo { mods: MODKEY, button: BUTTON_RIGHT }, on_client: true, action: ButtonAction::Drag(DragKind::Resize) },
    ];

    let rules = vec![
        Rule {
            predicate: RulePredicate { class: Some("Gimp".into()), ..Default::default() },
            effects: RuleEffects { is_floating: Some(true), ..Default::default() },
        },
        Rule {
            predicate: RulePredicate { class: Some(TERMINAL.into()), ..Default::default() },
            effects: RuleEffects { is_terminal: Some(true), ..Default::default() },
        },
        Rule {
            predicate: RulePredicate { title: Some("scratch".into()), ..Default::default() },
            effects: RuleEffects { tags: Some(1 << 9), is_floating: Some(true), ..Default::default() },
        },
    ];

    Config { keys, buttons, rules, ..Config::default() }
}
