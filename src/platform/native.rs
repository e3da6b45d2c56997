//! Live OS probes and the DWM compositor call

use super::{Compositor, HardwareProbe, OsCapabilities, OsVersion, SystemProbe};
use crate::models::{Margins, WindowHandle};

/// `E_NOTIMPL`, reported where no compositor exists.
pub const E_NOTIMPL: i32 = 0x8000_4001u32 as i32;

/// Probe backed by the running OS. Every query samples fresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProbe;

impl NativeProbe {
    pub fn os_version(&self) -> OsVersion {
        imp::os_version()
    }
}

impl OsCapabilities for NativeProbe {
    fn is_windows11_or_greater(&self) -> bool {
        self.os_version().is_windows11_or_greater()
    }

    fn is_windows11_22h2_or_greater(&self) -> bool {
        self.os_version().is_windows11_22h2_or_greater()
    }

    fn is_windows10_2004_or_greater(&self) -> bool {
        self.os_version().is_windows10_2004_or_greater()
    }

    fn is_windows10_1903_or_greater(&self) -> bool {
        self.os_version().is_windows10_1903_or_greater()
    }

    fn is_windows10_1607_or_greater(&self) -> bool {
        self.os_version().is_windows10_1607_or_greater()
    }
}

impl HardwareProbe for NativeProbe {
    fn total_memory_bytes(&self) -> u64 {
        imp::total_memory_bytes()
    }

    fn logical_processor_count(&self) -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

impl SystemProbe for NativeProbe {
    fn os_description(&self) -> String {
        imp::os_description(self.os_version())
    }
}

/// Compositor backed by `DwmExtendFrameIntoClientArea`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCompositor;

impl Compositor for NativeCompositor {
    fn extend_frame_into_client_area(&self, hwnd: WindowHandle, margins: Margins) -> i32 {
        imp::extend_frame_into_client_area(hwnd, margins)
    }
}

#[cfg(target_os = "windows")]
mod imp {
    use std::mem::size_of;

    use windows::Wdk::System::SystemServices::RtlGetVersion;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
    use windows::Win32::System::SystemInformation::{
        GlobalMemoryStatusEx, MEMORYSTATUSEX, OSVERSIONINFOW,
    };
    use windows::Win32::UI::Controls::MARGINS;

    use crate::models::{Margins, WindowHandle};
    use crate::platform::{OsVersion, S_OK};

    pub fn os_version() -> OsVersion {
        let mut info = OSVERSIONINFOW {
            dwOSVersionInfoSize: size_of::<OSVERSIONINFOW>() as u32,
            ..Default::default()
        };

        // RtlGetVersion is not subject to manifest-based version lies
        let status = unsafe { RtlGetVersion(&mut info) };
        if status.is_err() {
            tracing::warn!("RtlGetVersion failed: NTSTATUS=0x{:08X}", status.0);
            return OsVersion::default();
        }

        OsVersion::new(info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber)
    }

    pub fn os_description(version: OsVersion) -> String {
        format!("Windows {}", version)
    }

    pub fn total_memory_bytes() -> u64 {
        let mut status = MEMORYSTATUSEX {
            dwLength: size_of::<MEMORYSTATUSEX>() as u32,
            ..Default::default()
        };

        match unsafe { GlobalMemoryStatusEx(&mut status) } {
            Ok(()) => status.ullTotalPhys,
            Err(e) => {
                tracing::warn!("GlobalMemoryStatusEx failed: {}", e);
                0
            }
        }
    }

    pub fn extend_frame_into_client_area(hwnd: WindowHandle, margins: Margins) -> i32 {
        let margins = MARGINS {
            cxLeftWidth: margins.left,
            cxRightWidth: margins.right,
            cyTopHeight: margins.top,
            cyBottomHeight: margins.bottom,
        };

        match unsafe { DwmExtendFrameIntoClientArea(HWND(hwnd.0 as *mut _), &margins) } {
            Ok(()) => S_OK,
            Err(e) => e.code().0,
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod imp {
    use super::E_NOTIMPL;
    use crate::models::{Margins, WindowHandle};
    use crate::platform::OsVersion;

    pub fn os_version() -> OsVersion {
        OsVersion::default()
    }

    pub fn os_description(_version: OsVersion) -> String {
        std::env::consts::OS.to_string()
    }

    // No DWM-style memory hint off Windows; everything falls in the lowest tier
    pub fn total_memory_bytes() -> u64 {
        0
    }

    pub fn extend_frame_into_client_area(_hwnd: WindowHandle, _margins: Margins) -> i32 {
        E_NOTIMPL
    }
}
