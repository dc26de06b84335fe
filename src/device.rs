//! Owning and borrowed handles for ALC output devices.

use std::ffi::CString;
use std::mem::ManuallyDrop;
use std::ptr;

use crate::ffi::{self, ALCdevice};

/// An opened OpenAL output device.
///
/// Closed by [`Device::close`], or on drop if never closed explicitly.
/// Contexts created from it borrow it, so it cannot be closed or dropped
/// while an owning [`Context`](crate::Context) is alive.
#[derive(Debug)]
pub struct Device {
    raw: *mut ALCdevice,
}

impl Device {
    /// Open a device by name, or the default device when `name` is `None`.
    ///
    /// Returns `None` if the native layer yields no device. A name with an
    /// interior NUL byte cannot be represented and also yields `None`.
    pub fn open(name: Option<&str>) -> Option<Self> {
        let raw = match name {
            Some(name) => {
                let c_name = match CString::new(name) {
                    Ok(s) => s,
                    Err(_) => {
                        log::warn!("Device name {:?} contains a NUL byte", name);
                        return None;
                    }
                };
                unsafe { ffi::alcOpenDevice(c_name.as_ptr()) }
            }
            None => unsafe { ffi::alcOpenDevice(ptr::null()) },
        };

        if raw.is_null() {
            log::warn!("alcOpenDevice({:?}) returned no device", name);
            return None;
        }

        log::debug!("Opened device {:?} at {:p}", name.unwrap_or("<default>"), raw);
        Some(Self { raw })
    }

    /// Close the device, returning the native success flag.
    ///
    /// The handle is consumed whether or not the native call succeeded.
    pub fn close(self) -> bool {
        let this = ManuallyDrop::new(self);
        close_raw(this.raw)
    }

    /// Non-owning view of this device.
    pub fn handle(&self) -> DeviceRef {
        DeviceRef { raw: self.raw }
    }

    /// The native handle, for passing to other ALC calls.
    pub fn as_raw(&self) -> *mut ALCdevice {
        self.raw
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        close_raw(self.raw);
    }
}

fn close_raw(raw: *mut ALCdevice) -> bool {
    let ok = unsafe { ffi::alcCloseDevice(raw) } != 0;
    if ok {
        log::debug!("Closed device at {:p}", raw);
    } else {
        log::warn!("alcCloseDevice({:p}) reported failure", raw);
    }
    ok
}

/// A device handle reported by the native layer, e.g. from
/// [`Context::device`](crate::Context::device).
///
/// Never closes the device. Compares equal to any handle referring to the
/// same native device.
///
/// # Validity
///
/// Like [`ContextRef`](crate::ContextRef), it may outlive the device it
/// names; only OpenAL Soft validates stale device handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceRef {
    raw: *mut ALCdevice,
}

impl DeviceRef {
    pub(crate) fn from_raw(raw: *mut ALCdevice) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(Self { raw })
        }
    }

    pub fn as_raw(&self) -> *mut ALCdevice {
        self.raw
    }
}

impl PartialEq<Device> for DeviceRef {
    fn eq(&self, other: &Device) -> bool {
        self.raw == other.raw
    }
}

impl PartialEq<DeviceRef> for Device {
    fn eq(&self, other: &DeviceRef) -> bool {
        self.raw == other.raw
    }
}
