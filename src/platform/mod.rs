//! Platform abstraction for decoupling selection from the live OS.
//!
//! Selection logic only sees these traits. The native implementations in
//! [`native`] query Windows; tests plug in fixed values.

pub mod native;

use serde::Serialize;

use crate::models::{Margins, WindowHandle};

pub use native::{NativeCompositor, NativeProbe};

/// Success status returned by the compositor.
pub const S_OK: i32 = 0;

/// Build thresholds on Windows 10.0.
pub const BUILD_WIN10_1607: u32 = 14393;
pub const BUILD_WIN10_1903: u32 = 18362;
pub const BUILD_WIN10_2004: u32 = 19041;
pub const BUILD_WIN11: u32 = 22000;
pub const BUILD_WIN11_22H2: u32 = 22621;

/// OS version predicates consulted by the selector.
pub trait OsCapabilities: Send + Sync {
    fn is_windows11_or_greater(&self) -> bool;
    fn is_windows11_22h2_or_greater(&self) -> bool;
    fn is_windows10_2004_or_greater(&self) -> bool;
    fn is_windows10_1903_or_greater(&self) -> bool;
    fn is_windows10_1607_or_greater(&self) -> bool;
}

/// Coarse hardware facts sampled at call time.
pub trait HardwareProbe: Send + Sync {
    /// Memory sample in bytes. Treat as a hint, not authoritative RAM size.
    fn total_memory_bytes(&self) -> u64;

    fn logical_processor_count(&self) -> usize;
}

/// Everything the selector needs to know about the machine.
pub trait SystemProbe: OsCapabilities + HardwareProbe {
    /// Human-readable OS version, for diagnostics only.
    fn os_description(&self) -> String {
        String::from("unknown")
    }
}

/// The single native call this crate makes.
pub trait Compositor: Send + Sync {
    /// Extend the window frame into the client area.
    ///
    /// Returns the raw status code; [`S_OK`] means success.
    fn extend_frame_into_client_area(&self, hwnd: WindowHandle, margins: Margins) -> i32;
}

/// Anything that can hand over a native window handle.
pub trait NativeWindow {
    /// Returns [`WindowHandle::NULL`] while the window is not realized.
    fn native_handle(&self) -> WindowHandle;
}

impl NativeWindow for WindowHandle {
    fn native_handle(&self) -> WindowHandle {
        *self
    }
}

/// OS version triple as reported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self { major, minor, build }
    }

    /// At least Windows 10.0 with the given build number.
    pub fn is_win10_build_or_greater(&self, build: u32) -> bool {
        match self.major.cmp(&10) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => self.minor > 0 || self.build >= build,
        }
    }
}

impl std::fmt::Display for OsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

impl OsCapabilities for OsVersion {
    fn is_windows11_or_greater(&self) -> bool {
        self.is_win10_build_or_greater(BUILD_WIN11)
    }

    fn is_windows11_22h2_or_greater(&self) -> bool {
        self.is_win10_build_or_greater(BUILD_WIN11_22H2)
    }

    fn is_windows10_2004_or_greater(&self) -> bool {
        self.is_win10_build_or_greater(BUILD_WIN10_2004)
    }

    fn is_windows10_1903_or_greater(&self) -> bool {
        self.is_win10_build_or_greater(BUILD_WIN10_1903)
    }

    fn is_windows10_1607_or_greater(&self) -> bool {
        self.is_win10_build_or_greater(BUILD_WIN10_1607)
    }
}

/// Fixed machine description, for hosts that already know the facts and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe {
    pub os: OsVersion,
    pub total_memory_bytes: u64,
    pub logical_processors: usize,
}

impl OsCapabilities for FixedProbe {
    fn is_windows11_or_greater(&self) -> bool {
        self.os.is_windows11_or_greater()
    }

    fn is_windows11_22h2_or_greater(&self) -> bool {
        self.os.is_windows11_22h2_or_greater()
    }

    fn is_windows10_2004_or_greater(&self) -> bool {
        self.os.is_windows10_2004_or_greater()
    }

    fn is_windows10_1903_or_greater(&self) -> bool {
        self.os.is_windows10_1903_or_greater()
    }

    fn is_windows10_1607_or_greater(&self) -> bool {
        self.os.is_windows10_1607_or_greater()
    }
}

impl HardwareProbe for FixedProbe {
    fn total_memory_bytes(&self) -> u64 {
        self.total_memory_bytes
    }

    fn logical_processor_count(&self) -> usize {
        self.logical_processors
    }
}

impl SystemProbe for FixedProbe {
    fn os_description(&self) -> String {
        format!("Windows {}", self.os)
    }
}
