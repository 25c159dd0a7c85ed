//! Exit codes and process setup.

/// Invalid flags or a character set that cannot produce a password.
pub const CONFIG_ERROR: u8 = 1;

/// Passwords could not be written to stdout.
pub const OUTPUT_ERROR: u8 = 1;

/// Keep generated passwords out of core dumps and ptrace attachments.
/// Call this early in main().
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}
