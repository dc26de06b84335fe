//! Rendering contexts and the process-wide current context.
//!
//! The current context is owned by the native layer. It is never cached
//! here: [`current_context`] asks OpenAL every time.

use std::mem::ManuallyDrop;
use std::ptr;

use crate::device::{Device, DeviceRef};
use crate::ffi::{self, ALCcontext, ALCint};

/// An OpenAL rendering context created against a [`Device`].
///
/// Destroyed by [`Context::destroy`], or on drop. Borrows the device it was
/// created from, so the device outlives it.
#[derive(Debug)]
pub struct Context<'d> {
    raw: *mut ALCcontext,
    owner: &'d Device,
}

impl<'d> Context<'d> {
    /// Create a context on `device`.
    ///
    /// `attrs` is a flat list of ALC key/value pairs such as
    /// `[ALC_FREQUENCY, 44100]`; the zero terminator is appended here. An
    /// empty slice requests the device defaults. Returns `None` if the
    /// native layer yields no context.
    pub fn new(device: &'d Device, attrs: &[ALCint]) -> Option<Self> {
        let list = attr_list(attrs);
        let raw = unsafe { ffi::alcCreateContext(device.as_raw(), list.as_ptr()) };
        if raw.is_null() {
            log::warn!(
                "alcCreateContext on device {:p} with {:?} returned no context",
                device.as_raw(),
                attrs
            );
            return None;
        }

        log::debug!("Created context {:p} on device {:p}", raw, device.as_raw());
        Some(Self { raw, owner: device })
    }

    /// Make this the current context. Returns the native success flag.
    pub fn make_current(&self) -> bool {
        make_current_raw(self.raw)
    }

    pub fn process(&self) {
        unsafe { ffi::alcProcessContext(self.raw) }
    }

    pub fn suspend(&self) {
        unsafe { ffi::alcSuspendContext(self.raw) }
    }

    /// Whether the native layer currently reports this context as current.
    pub fn is_current(&self) -> bool {
        current_context().is_some_and(|c| c == *self)
    }

    /// The device the native layer associates with this context.
    pub fn device(&self) -> Option<DeviceRef> {
        device_of_raw(self.raw)
    }

    /// The device this context was created from.
    pub fn owner(&self) -> &'d Device {
        self.owner
    }

    /// Destroy the context. The native call reports nothing back.
    pub fn destroy(self) {
        let this = ManuallyDrop::new(self);
        destroy_raw(this.raw);
    }

    /// Non-owning view of this context.
    pub fn handle(&self) -> ContextRef {
        ContextRef { raw: self.raw }
    }

    pub fn as_raw(&self) -> *mut ALCcontext {
        self.raw
    }
}

impl Drop for Context<'_> {
    fn drop(&mut self) {
        destroy_raw(self.raw);
    }
}

/// A context handle reported by the native layer, e.g. from
/// [`current_context`].
///
/// Never destroys the context. Compares equal to any handle referring to
/// the same native context.
///
/// # Validity
///
/// The handle is not tied to the context's lifetime and may outlive it.
/// Using a stale handle hands a dangling pointer to ALC: OpenAL Soft
/// rejects it with `ALC_INVALID_CONTEXT`, other implementations (Apple's
/// framework) give no such guarantee. Drop it before destroying the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextRef {
    raw: *mut ALCcontext,
}

impl ContextRef {
    pub(crate) fn from_raw(raw: *mut ALCcontext) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(Self { raw })
        }
    }

    pub fn make_current(&self) -> bool {
        make_current_raw(self.raw)
    }

    pub fn process(&self) {
        unsafe { ffi::alcProcessContext(self.raw) }
    }

    pub fn suspend(&self) {
        unsafe { ffi::alcSuspendContext(self.raw) }
    }

    pub fn device(&self) -> Option<DeviceRef> {
        device_of_raw(self.raw)
    }

    pub fn as_raw(&self) -> *mut ALCcontext {
        self.raw
    }
}

impl PartialEq<Context<'_>> for ContextRef {
    fn eq(&self, other: &Context<'_>) -> bool {
        self.raw == other.raw
    }
}

impl PartialEq<ContextRef> for Context<'_> {
    fn eq(&self, other: &ContextRef) -> bool {
        self.raw == other.raw
    }
}

/// The context the native layer currently reports as current, if any.
pub fn current_context() -> Option<ContextRef> {
    ContextRef::from_raw(unsafe { ffi::alcGetCurrentContext() })
}

/// Leave no context current. Returns the native success flag.
pub fn clear_current() -> bool {
    make_current_raw(ptr::null_mut())
}

fn make_current_raw(raw: *mut ALCcontext) -> bool {
    let ok = unsafe { ffi::alcMakeContextCurrent(raw) } != 0;
    if !ok {
        log::warn!("alcMakeContextCurrent({:p}) reported failure", raw);
    }
    ok
}

fn device_of_raw(raw: *mut ALCcontext) -> Option<DeviceRef> {
    DeviceRef::from_raw(unsafe { ffi::alcGetContextsDevice(raw) })
}

fn destroy_raw(raw: *mut ALCcontext) {
    unsafe { ffi::alcDestroyContext(raw) }
    log::debug!("Destroyed context {:p}", raw);
}

/// Build the zero-terminated attribute array handed to `alcCreateContext`.
fn attr_list(attrs: &[ALCint]) -> Vec<ALCint> {
    let mut list = Vec::with_capacity(attrs.len() + 1);
    list.extend_from_slice(attrs);
    list.push(0);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ALC_FALSE, ALC_FREQUENCY, ALC_SYNC};

    #[test]
    fn test_attr_list_empty_is_single_terminator() {
        assert_eq!(attr_list(&[]), vec![0]);
    }

    #[test]
    fn test_attr_list_appends_terminator() {
        let list = attr_list(&[ALC_FREQUENCY, 48000, ALC_SYNC, ALC_FALSE]);
        assert_eq!(list, vec![ALC_FREQUENCY, 48000, ALC_SYNC, ALC_FALSE, 0]);
    }

    #[test]
    fn test_attr_list_keeps_caller_terminator() {
        // A terminator the caller already supplied is left in place.
        assert_eq!(attr_list(&[ALC_FREQUENCY, 22050, 0]), vec![ALC_FREQUENCY, 22050, 0, 0]);
    }

    #[test]
    fn test_attr_list_odd_length_forwarded_as_is() {
        let list = attr_list(&[ALC_FREQUENCY]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.last(), Some(&0));
    }

    #[test]
    fn test_context_ref_rejects_null() {
        assert!(ContextRef::from_raw(ptr::null_mut()).is_none());
    }
}
