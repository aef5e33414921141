// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delivers a signal to an entire process group rather than a single PID.
//!
//! DCMTK wrappers and shell launchers fork helpers; signalling only the
//! immediate child would leave those helpers running. The child is always
//! spawned as its own process-group leader (`process_group(0)` on unix),
//! so signalling `-pid` reaches the whole tree.

#[cfg(unix)]
pub fn signal_tree(pid: u32, signal: nix::sys::signal::Signal) -> std::io::Result<()> {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    let group = Pid::from_raw(-(pid as i32));
    match kill(group, signal) {
        Ok(()) => Ok(()),
        // ESRCH: the group is already gone, which is the outcome we wanted.
        Err(nix::errno::Errno::ESRCH) => Ok(()),
        Err(errno) => Err(std::io::Error::from(errno)),
    }
}

#[cfg(not(unix))]
pub fn signal_tree(_pid: u32, _signal: ()) -> std::io::Result<()> {
    Ok(())
}

#[cfg(unix)]
pub fn terminate(pid: u32) -> std::io::Result<()> {
    signal_tree(pid, nix::sys::signal::Signal::SIGTERM)
}

#[cfg(unix)]
pub fn kill_unconditionally(pid: u32) -> std::io::Result<()> {
    signal_tree(pid, nix::sys::signal::Signal::SIGKILL)
}

#[cfg(not(unix))]
pub fn terminate(_pid: u32) -> std::io::Result<()> {
    Ok(())
}

#[cfg(not(unix))]
pub fn kill_unconditionally(_pid: u32) -> std::io::Result<()> {
    Ok(())
}
