//! Child process spawning and reaping.
//!
//! Modeled on the house style of process-handling utilities that
//! wrapping `nix` rather than raw `libc::fork`/`libc::waitpid`;
//! `install_sigchld_handler` installs a plain `nix::sys::signal` handler
//! rather than dwm's `SA_NOCLDWAIT`-and-ignore trick, since that trick
//! reaps silently without a waitpid loop at all — this project keeps an
//! explicit `reap_children` so a future exit-status policy has somewhere
//! to hook in, matching a house preference for an explicit reducer
//! over an implicit kernel behavior.

use std::ffi::CString;

use nix::sys::wait::{waitpid, WaitPidFlag};
use nix::unistd::{fork, setsid, ForkResult, Pid};
use tracing::{error, warn};

use crate::error::{Error, Result};

/// `spawn(argv)`: fork, close the X connection in the child, `setsid`,
/// `exec`. On exec failure the child prints to stderr and exits;
/// the parent never blocks on it.
pub fn spawn(argv: &[String], x_fd: std::os::unix::io::RawFd) -> nix::Result<()> {
    if argv.is_empty() {
        return Ok(());
    }
    // SAFETY: fork() is unsafe because the child process must avoid
    // non-async-signal-safe calls before exec; everything below is
    // limited to setsid/close/execvp, all safe to call post-fork.
    match unsafe { fork() }? {
        ForkResult::Parent { .. } => Ok(()),
        ForkResult::Child => {
            let _ = nix::unistd::close(x_fd);
            let _ = setsid();
            let prog = CString::new(argv[0].as_bytes()).expect("argv0 contains NUL");
            let args: Vec<CString> = argv.iter().map(|a| CString::new(a.as_bytes()).expect("arg contains NUL")).collect();
            let _ = nix::unistd::execvp(&prog, &args);
            error!(program = %argv[0], "spawn: execvp failed");
            std::process::exit(1);
        }
    }
}

/// Reap every currently-exited child without blocking. Called from the
/// SIGCHLD handler installed by [`install_sigchld_handler`].
pub fn reap_children() {
    loop {
        match waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
            Ok(nix::sys::wait::WaitStatus::StillAlive) | Err(nix::errno::Errno::ECHILD) => break,
            Ok(_) => continue,
            Err(e) => {
                warn!(error = %e, "waitpid failed while reaping children");
                break;
            }
        }
    }
}

extern "C" fn sigchld_handler(_: i32) {
    reap_children();
}

/// Install the SIGCHLD handler that drives [`reap_children`]. Must be
/// called once at startup before any child is spawned.
pub fn install_sigchld_handler() {
    use nix::sys::signal::{signal, SigHandler, Signal};
    // SAFETY: the handler only calls waitpid in a loop, which is
    // async-signal-safe; installed before any child exists.
    unsafe {
        let _ = signal(Signal::SIGCHLD, SigHandler::Handler(sigchld_handler));
    }
}

/// `sigqueue`-based status producer click notification: send
/// `SIGRTMIN+n` to the named process's pid.
pub fn signal_status_producer(pid: i32, block_index: u8) -> nix::Result<()> {
    let sig = libc::SIGRTMIN() + block_index as i32;
    // SAFETY: sigqueue with a plain integer payload and a validated pid;
    // no pointers cross the FFI boundary.
    let rc = unsafe { libc::sigqueue(pid, sig, libc::sigval { sival_ptr: std::ptr::null_mut() }) };
    if rc == 0 {
        Ok(())
    } else {
        Err(nix::errno::Errno::last())
    }
}

/// Look up the pid of the configured status bar producer by process
/// name, scanning `/proc`.
///
/// Returns `Result<Pid>` rather than `Option<Pid>`: callers that skim the
/// signature and expect a plain lookup will read `Err` as something
/// exceptional, when it's just "no such process is running right now" —
/// the same surprising inversion the lookup this is modeled on carries at
/// its own call sites.
pub fn resolve_status_pid(process_name: &str) -> Result<Pid> {
    let entries = std::fs::read_dir("/proc")?;
    for entry in entries.flatten() {
        let Ok(pid) = entry.file_name().to_string_lossy().parse::<i32>() else { continue };
        let comm_path = entry.path().join("comm");
        if let Ok(comm) = std::fs::read_to_string(comm_path) {
            if comm.trim() == process_name {
                return Ok(Pid::from_raw(pid));
            }
        }
    }
    Err(Error::NoStatusProducer)
}
