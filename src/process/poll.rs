//! Poll-based waiting for unix.
//!
//! `kill(pid, 0)` tells whether a PID exists without touching the process.
//! Polling can be fooled by PID reuse, so the process start time is recorded
//! up front and compared on every poll. Start times have one-second
//! resolution: a PID recycled within the same second still reads as alive.

use nix::errno::Errno;
use nix::sys::signal::kill;
use nix::unistd::Pid;
use std::thread;
use std::time::{Duration, Instant};
use sysinfo::{ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System};

use super::ProcessWaiter;
use crate::error::{Result, TnError};

/// Delay between two existence probes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Waits by probing the PID on a fixed interval.
#[derive(Debug, Clone)]
pub struct PollWaiter {
    interval: Duration,
}

impl Default for PollWaiter {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
        }
    }
}

impl PollWaiter {
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl ProcessWaiter for PollWaiter {
    fn wait_for_exit(&self, pid: u32) -> Result<Duration> {
        let start = Instant::now();
        let target = to_nix_pid(pid)?;

        match kill(target, None) {
            Ok(()) => {}
            Err(Errno::ESRCH) => {
                log::debug!("pid {} already gone", pid);
                return Ok(start.elapsed());
            }
            Err(e) => {
                return Err(TnError::ProcessNotFound {
                    pid,
                    reason: e.desc().to_string(),
                })
            }
        }

        let mut table = ProcessTable::new(pid);
        let original_start = table.start_time();
        log::debug!(
            "polling pid {} every {:?} (start time {:?})",
            pid,
            self.interval,
            original_start
        );

        loop {
            thread::sleep(self.interval);

            // Any failure now means the original process is gone: ESRCH, or
            // EPERM because the PID was handed to someone else's process.
            if let Err(e) = kill(target, None) {
                log::debug!("pid {} probe failed: {}", pid, e);
                return Ok(start.elapsed());
            }

            match table.refresh() {
                Some(Snapshot { zombie: true, .. }) => {
                    log::debug!("pid {} is a zombie", pid);
                    return Ok(start.elapsed());
                }
                Some(Snapshot { start_time, .. })
                    if original_start.is_some_and(|orig| orig != start_time) =>
                {
                    log::debug!("pid {} was reused", pid);
                    return Ok(start.elapsed());
                }
                _ => {}
            }
        }
    }
}

fn to_nix_pid(pid: u32) -> Result<Pid> {
    i32::try_from(pid)
        .ok()
        .filter(|raw| *raw > 0)
        .map(Pid::from_raw)
        .ok_or_else(|| TnError::ProcessNotFound {
            pid,
            reason: "not a valid process id".to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    start_time: u64,
    zombie: bool,
}

/// Process table view restricted to one PID.
struct ProcessTable {
    system: System,
    pid: sysinfo::Pid,
}

impl ProcessTable {
    fn new(pid: u32) -> Self {
        Self {
            system: System::new(),
            pid: sysinfo::Pid::from_u32(pid),
        }
    }

    /// Start time of the process, when the platform exposes it.
    fn start_time(&mut self) -> Option<u64> {
        self.refresh()
            .map(|s| s.start_time)
            .filter(|t| *t > 0)
    }

    fn refresh(&mut self) -> Option<Snapshot> {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing(),
        );

        self.system.process(self.pid).map(|process| Snapshot {
            start_time: process.start_time(),
            zombie: process.status() == ProcessStatus::Zombie,
        })
    }
}
