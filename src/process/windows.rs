//! Blocking wait on a process handle.

use std::io;
use std::time::{Duration, Instant};
use windows_sys::Win32::Foundation::{CloseHandle, HANDLE, WAIT_FAILED, WAIT_OBJECT_0};
use windows_sys::Win32::System::Threading::{
    OpenProcess, WaitForSingleObject, INFINITE, PROCESS_QUERY_LIMITED_INFORMATION,
    PROCESS_SYNCHRONIZE,
};

use super::ProcessWaiter;
use crate::error::{Result, TnError};

/// Waits on the process handle itself; not subject to PID reuse.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleWaiter;

/// Closes the handle on drop.
struct ProcessHandle(HANDLE);

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: the handle came from a successful OpenProcess and is closed once.
        unsafe {
            CloseHandle(self.0);
        }
    }
}

impl ProcessWaiter for HandleWaiter {
    fn wait_for_exit(&self, pid: u32) -> Result<Duration> {
        let start = Instant::now();

        // SAFETY: plain FFI call; a null return is handled below.
        let raw = unsafe {
            OpenProcess(
                PROCESS_SYNCHRONIZE | PROCESS_QUERY_LIMITED_INFORMATION,
                0,
                pid,
            )
        };
        if raw.is_null() {
            return Err(TnError::ProcessNotFound {
                pid,
                reason: io::Error::last_os_error().to_string(),
            });
        }
        let handle = ProcessHandle(raw);

        log::debug!("waiting on handle for pid {}", pid);
        // SAFETY: `handle` is a valid process handle opened with SYNCHRONIZE.
        let event = unsafe { WaitForSingleObject(handle.0, INFINITE) };
        match event {
            WAIT_OBJECT_0 => Ok(start.elapsed()),
            WAIT_FAILED => Err(TnError::ProcessWait {
                pid,
                reason: io::Error::last_os_error().to_string(),
            }),
            other => Err(TnError::ProcessWait {
                pid,
                reason: format!("unexpected wait result {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn test_waits_for_child_exit() {
        let mut child = Command::new("cmd").args(["/C", "exit 0"]).spawn().unwrap();
        let pid = child.id();

        let elapsed = HandleWaiter.wait_for_exit(pid).unwrap();
        child.wait().unwrap();
        assert!(elapsed < Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_pid_fails_immediately() {
        let err = HandleWaiter.wait_for_exit(0).unwrap_err();
        assert!(matches!(err, TnError::ProcessNotFound { pid: 0, .. }));
    }
}
