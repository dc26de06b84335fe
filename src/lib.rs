//! openal_ctx - OpenAL device and context handles
//!
//! Thin ownership wrappers over the ALC device/context calls, plus the AL
//! enumeration values so callers do not need the native headers. Every
//! operation forwards straight to the OpenAL library; failures come back
//! as `None` or `false` exactly as the native layer reports them.
//!
//! ```no_run
//! use openal_ctx::{Context, Device, consts};
//!
//! let device = Device::open(None).expect("no default device");
//! let context = Context::new(&device, &[consts::ALC_FREQUENCY, 44100]).expect("no context");
//! assert!(context.make_current());
//! // ... drive OpenAL directly ...
//! context.destroy();
//! device.close();
//! ```

pub mod consts;
mod context;
mod device;
pub mod ffi;

pub use context::{Context, ContextRef, clear_current, current_context};
pub use device::{Device, DeviceRef};
