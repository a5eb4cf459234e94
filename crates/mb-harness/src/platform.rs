use std::fmt::Debug;
use std::time::Instant;

/// Clock and memory probe used to measure each multiply.
///
/// Everything OS-specific the runner needs sits behind this trait, so the
/// runner itself contains no conditional compilation and tests can script
/// exact timestamps and memory readings.
pub trait Platform: Debug {
    /// Monotonic timestamp in seconds. Only differences are meaningful.
    fn now_seconds(&self) -> f64;

    /// Point-in-time snapshot of process memory in MiB.
    ///
    /// Best effort: this is process-wide, not specific to any matrix.
    fn resident_memory_mb(&self) -> f64;
}

/// The host platform: `Instant` for time, `getrusage` for memory on Unix.
#[derive(Debug, Clone)]
pub struct SystemPlatform {
    origin: Instant,
}

impl SystemPlatform {
    pub fn new() -> Self {
        SystemPlatform {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for SystemPlatform {
    fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn resident_memory_mb(&self) -> f64 {
        sys::peak_rss_bytes() as f64 / (1024.0 * 1024.0)
    }
}

#[cfg(unix)]
mod sys {
    /// Peak resident set size in bytes.
    /// macOS reports ru_maxrss in bytes, other Unixes in kilobytes.
    pub fn peak_rss_bytes() -> u64 {
        // SAFETY: rusage is plain old data; an all-zero value is valid.
        let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
        // SAFETY: getrusage only writes into the struct we own.
        let ret = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
        if ret != 0 {
            return 0;
        }
        let maxrss = usage.ru_maxrss.max(0) as u64;
        if cfg!(target_os = "macos") {
            maxrss
        } else {
            maxrss * 1024
        }
    }
}

#[cfg(not(unix))]
mod sys {
    pub fn peak_rss_bytes() -> u64 {
        0
    }
}
