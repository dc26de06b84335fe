//! Raw declarations for the ALC half of OpenAL, plus the AL/ALC enum-name
//! lookups used to check [`crate::consts`] against the installed library.
//!
//! Linking is set up by `build.rs`. Everything here is `unsafe` to call;
//! the owning wrappers live in [`crate::device`] and [`crate::context`].

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int};

// ======================== Types ========================

/// Opaque type for ALCdevice
#[repr(C)]
pub struct ALCdevice {
    _private: [u8; 0],
}

/// Opaque type for ALCcontext
#[repr(C)]
pub struct ALCcontext {
    _private: [u8; 0],
}

pub type ALboolean = c_char;
pub type ALchar = c_char;
pub type ALenum = c_int;

pub type ALCboolean = c_char;
pub type ALCchar = c_char;
pub type ALCint = c_int;
pub type ALCenum = c_int;

// ======================== FFI declarations ========================

unsafe extern "C" {
    pub fn alcOpenDevice(devicename: *const ALCchar) -> *mut ALCdevice;
    pub fn alcCloseDevice(device: *mut ALCdevice) -> ALCboolean;

    pub fn alcCreateContext(device: *mut ALCdevice, attrlist: *const ALCint) -> *mut ALCcontext;
    pub fn alcDestroyContext(context: *mut ALCcontext);

    pub fn alcMakeContextCurrent(context: *mut ALCcontext) -> ALCboolean;
    pub fn alcProcessContext(context: *mut ALCcontext);
    pub fn alcSuspendContext(context: *mut ALCcontext);

    pub fn alcGetCurrentContext() -> *mut ALCcontext;
    pub fn alcGetContextsDevice(context: *mut ALCcontext) -> *mut ALCdevice;

    /// Value of an `ALC_*` name; `device` may be null.
    pub fn alcGetEnumValue(device: *mut ALCdevice, enumname: *const ALCchar) -> ALCenum;
    /// Value of an `AL_*` name; needs a current context.
    pub fn alGetEnumValue(ename: *const ALchar) -> ALenum;
}
