//! `wm`: the binary that assembles the core state machine, the UI crate's
//! drawable/bar/systray, and a live X connection into a running window
//! manager.
//!
//! The `-v`/usage argument handling below follows a conventional
//! `main.rs` shape; everything past that point — connecting, building
//! the compiled-in configuration, the startup monitor scan, and the
//! blocking event loop — is this binary's own assembly, since none of
//! the pieces it wires together live inside a library crate that hides
//! this sequence. It follows the shape `wm_core`'s module docs describe
//! for their callers (`event::handle_event` driven by `x.next_event()`,
//! bars redrawn by `wm_ui` alongside).

mod config;

use std::env;
use std::os::unix::process::CommandExt;
use std::process;

use tracing::{info, warn};
use wm_core::config::Config;
use wm_core::layout::LayoutKind;
use wm_core::model::tags::TagConfig;
use wm_core::x::backend::X11rbConn;
use wm_core::x::{Atom, ClientAttr, WinType, XConn, XEvent};
use wm_core::{ewmh, event, rules, spawn};
use wm_core::World;
use wm_ui::bar::status2d;
use wm_ui::{Alignment, BarModule, BarModuleKind, Draw, StatusBar, Systray};

const SYSTRAY_ICON_SIZE: u32 = 20;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() == 2 && args[1] == "-v" {
        println!("wm-{}", option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"));
        process::exit(0);
    } else if args.len() > 1 {
        println!("usage: wm [-v]");
        process::exit(1);
    }

    tracing_subscriber::fmt::init();
    spawn::install_sigchld_handler();

    if let Err(e) = run() {
        eprintln!("wm: fatal: {e}");
        process::exit(1);
    }
}

fn run() -> wm_core::Result<()> {
    let x = X11rbConn::connect()?;
    let cfg = config::build(&x);
    x.grab_keys(&wm_core::bindings::grab_combos(&cfg.keys))?;

    let tag_config = TagConfig::new(cfg.tag_names.len() as u32, cfg.scratchpad_names.len() as u32);
    let mut world = World::new(tag_config);
    world.rules = cfg.rules.clone();
    world.monitor_rules = cfg.monitor_rules.clone();
    world.smartgaps = cfg.smartgaps;
    world.lockfullscreen = cfg.lockfullscreen;
    world.resize_hints_global = cfg.resize_hints;

    let mut draw = Draw::open(&cfg.font_names, &cfg.colors)?;
    let bar_height = draw.bar_height();

    let screens = x.screen_rects()?;
    let mut bars = Vec::new();
    for (i, &screen) in screens.iter().enumerate() {
        let rule = cfg.monitor_rules.iter().rev().find(|r| r.matches(i as i32)).cloned().unwrap_or_else(|| cfg.monitor_rules[0].clone());
        let mon = world.alloc_monitor(screen, rule.tagset, rule.layout);
        {
            let m = world.mon_mut(mon);
            m.mfact = rule.mfact;
            m.nmaster = rule.nmaster;
            m.show_bar = rule.show_bar;
            m.gaps = cfg.gaps;
        }

        let bar_rect = wm_core::geometry::Rect::new(screen.x, screen.y, screen.w, bar_height);
        let bar_win = x.create_window(WinType::InputOutput(Atom::NetWmWindowTypeToolbar), bar_rect, false)?;
        x.set_client_attributes(bar_win, &[ClientAttr::OverrideRedirect, ClientAttr::ClientEventMask])?;
        x.grab_buttons(bar_win, &[wm_core::x::ButtonCombo { mods: 0, button: 0 }], false)?;
        x.map(bar_win)?;

        {
            let m = world.mon_mut(mon);
            m.work_area = wm_core::geometry::Rect::new(screen.x, screen.y + bar_height as i32, screen.w, screen.h.saturating_sub(bar_height));
            m.bars.push(wm_core::model::monitor::Bar { win: bar_win, rect: bar_rect, position: wm_core::model::monitor::BarPosition::Top, visible: rule.show_bar });
        }

        let modules = vec![
            BarModule { kind: BarModuleKind::Tags, align: Alignment::Left },
            BarModule { kind: BarModuleKind::LtSymbol, align: Alignment::Left },
            BarModule { kind: BarModuleKind::WinTitle, align: Alignment::Left },
            BarModule { kind: BarModuleKind::Status2D, align: Alignment::Right },
        ];
        bars.push((mon, bar_win, StatusBar::new(modules)));
    }
    world.selmon = bars.first().map(|(m, _, _)| *m).unwrap_or(world.selmon);

    let check_win = x.create_window(WinType::CheckWin, wm_core::geometry::Rect::new(-1, -1, 1, 1), false)?;
    ewmh::publish_supported(&x, check_win)?;
    ewmh::publish_desktop_info(&x, &world, &cfg.tag_names)?;

    let systray = match Systray::init(&x, SYSTRAY_ICON_SIZE) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "systray unavailable, continuing without one");
            None
        }
    };
    let tray_win = systray.as_ref().map(|s| s.win);

    let scan_mon = world.selmon;
    for win in x.existing_clients()? {
        if win == check_win || Some(win) == tray_win || bars.iter().any(|(_, w, _)| *w == win) {
            continue;
        }
        rules::manage(&x, &mut world, &cfg, win, scan_mon)?;
    }
    let mon_ids: Vec<_> = world.mons.iter().map(|m| m.id).collect();
    for mon in mon_ids {
        event::arrange_monitor(&x, &mut world, mon, &cfg)?;
    }

    info!("wm started");
    main_loop(&x, &mut world, cfg, &mut draw, &mut bars, systray)?;

    if world.restart_requested {
        let err = std::process::Command::new(&args0()).exec();
        return Err(wm_core::Error::Io(err));
    }
    Ok(())
}

fn args0() -> String {
    env::args().next().unwrap_or_else(|| "wm".to_string())
}

fn main_loop<X: XConn>(x: &X, world: &mut World, mut cfg: Config, draw: &mut Draw, bars: &mut [(wm_core::MonitorId, wm_core::Xid, StatusBar)], systray: Option<Systray>) -> wm_core::Result<()> {
    let mut dirty_status = String::new();

    while world.running {
        let ev = x.next_event()?;

        let bar_hit = bars.iter().position(|(_, win, _)| match &ev {
            XEvent::ButtonPress(b) => b.window == *win,
            _ => false,
        });

        match (&ev, bar_hit) {
            (XEvent::ButtonPress(b), Some(idx)) => {
                let (mon, _, bar) = &mut bars[idx];
                let local_x = b.root_pos.x - world.mon(*mon).screen.x;
                if let Some(tag) = bar.tag_at(local_x, &cfg) {
                    world.selmon = *mon;
                    event::apply_action(x, world, &mut cfg, &wm_core::bindings::Action::View(tag))?;
                } else if let Some(module) = bar.module_at(local_x) {
                    if module.kind == BarModuleKind::Status2D {
                        if let Ok(pid) = spawn::resolve_status_pid(cfg.status_bar_process) {
                            let widths: Vec<u32> = vec![module.w];
                            let idx = status2d::block_index_at(&status2d::parse(&dirty_status), &widths, (local_x - module.x) as u32);
                            let _ = spawn::signal_status_producer(pid.as_raw(), idx as u8);
                        }
                    }
                }
            }
            (XEvent::PropertyNotify(p), _) if p.window == x.root() => {
                if let Ok(name) = x.atom_name(p.atom) {
                    if name == "WM_NAME" {
                        if let Some(text) = x.get_text_property(x.root(), "WM_NAME")? {
                            dirty_status = text;
                            for (_, _, bar) in bars.iter_mut() {
                                bar.status_text = dirty_status.clone();
                            }
                        }
                    }
                }
            }
            (XEvent::ClientMessage(cm), _) => {
                let mut handled = false;
                if let Some(ref tray) = systray {
                    handled = tray.handle_opcode(x, world, cm.type_atom, cm.data)?;
                }
                if !handled {
                    event::handle_event(x, world, &mut cfg, ev)?;
                }
            }
            (XEvent::UnmapNotify(win), _) | (XEvent::DestroyNotify(win), _) => {
                let undocked = systray.as_ref().and_then(|t| t.undock(world, *win));
                if undocked.is_none() {
                    event::handle_event(x, world, &mut cfg, ev)?;
                }
            }
            _ => event::handle_event(x, world, &mut cfg, ev)?,
        }

        if let Some(ref tray) = systray {
            if let Some((mon, _, _)) = bars.iter().find(|(m, _, _)| *m == world.selmon) {
                let bar_rect = world.mon(*mon).bars.first().map(|b| b.rect).unwrap_or(world.mon(*mon).screen);
                let _ = tray.reposition(x, world, bar_rect);
            }
        }

        for (mon, win, bar) in bars.iter_mut() {
            if world.mon(*mon).show_bar {
                bar.redraw(draw, &cfg, world, world.mon(*mon), *win);
            }
        }
    }

    Ok(())
}
