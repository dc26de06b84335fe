//! AL enumeration values, transcribed from the OpenAL 1.1 `al.h`, plus the
//! ALC keys used in context attribute lists.
//!
//! These are plain tokens for code that talks to OpenAL directly once a
//! context is current.

use crate::ffi::{ALCint, ALboolean, ALenum};

pub const TRUE: ALboolean = 1;
pub const FALSE: ALboolean = 0;

// Source properties
pub const SOURCE_RELATIVE: ALenum = 0x0202;
pub const CONE_INNER_ANGLE: ALenum = 0x1001;
pub const CONE_OUTER_ANGLE: ALenum = 0x1002;
pub const PITCH: ALenum = 0x1003;
pub const POSITION: ALenum = 0x1004;
pub const DIRECTION: ALenum = 0x1005;
pub const VELOCITY: ALenum = 0x1006;
pub const LOOPING: ALenum = 0x1007;
pub const BUFFER: ALenum = 0x1009;
pub const GAIN: ALenum = 0x100A;
pub const MIN_GAIN: ALenum = 0x100D;
pub const MAX_GAIN: ALenum = 0x100E;
pub const ORIENTATION: ALenum = 0x100F;
pub const SOURCE_STATE: ALenum = 0x1010;

// Source states
pub const INITIAL: ALenum = 0x1011;
pub const PLAYING: ALenum = 0x1012;
pub const PAUSED: ALenum = 0x1013;
pub const STOPPED: ALenum = 0x1014;

// Buffer queue
pub const BUFFERS_QUEUED: ALenum = 0x1015;
pub const BUFFERS_PROCESSED: ALenum = 0x1016;

// Attenuation
pub const REFERENCE_DISTANCE: ALenum = 0x1020;
pub const ROLLOFF_FACTOR: ALenum = 0x1021;
pub const CONE_OUTER_GAIN: ALenum = 0x1022;
pub const MAX_DISTANCE: ALenum = 0x1023;

// Playback offsets
pub const SEC_OFFSET: ALenum = 0x1024;
pub const SAMPLE_OFFSET: ALenum = 0x1025;
pub const BYTE_OFFSET: ALenum = 0x1026;

// Source type
pub const SOURCE_TYPE: ALenum = 0x1027;
pub const STATIC: ALenum = 0x1028;
pub const STREAMING: ALenum = 0x1029;
pub const UNDETERMINED: ALenum = 0x1030;

// Buffer formats
pub const FORMAT_MONO8: ALenum = 0x1100;
pub const FORMAT_MONO16: ALenum = 0x1101;
pub const FORMAT_STEREO8: ALenum = 0x1102;
pub const FORMAT_STEREO16: ALenum = 0x1103;

// Buffer properties
pub const FREQUENCY: ALenum = 0x2001;
pub const BITS: ALenum = 0x2002;
pub const CHANNELS: ALenum = 0x2003;
pub const SIZE: ALenum = 0x2004;

// Buffer states
pub const UNUSED: ALenum = 0x2010;
pub const PENDING: ALenum = 0x2011;
pub const PROCESSED: ALenum = 0x2012;

// Errors
pub const NO_ERROR: ALenum = 0;
pub const INVALID_NAME: ALenum = 0xA001;
pub const INVALID_ENUM: ALenum = 0xA002;
pub const INVALID_VALUE: ALenum = 0xA003;
pub const INVALID_OPERATION: ALenum = 0xA004;
pub const OUT_OF_MEMORY: ALenum = 0xA005;

// Context strings
pub const VENDOR: ALenum = 0xB001;
pub const VERSION: ALenum = 0xB002;
pub const RENDERER: ALenum = 0xB003;
pub const EXTENSIONS: ALenum = 0xB004;

// Global state
pub const DOPPLER_FACTOR: ALenum = 0xC000;
pub const DOPPLER_VELOCITY: ALenum = 0xC001;
pub const SPEED_OF_SOUND: ALenum = 0xC003;
pub const DISTANCE_MODEL: ALenum = 0xD000;

// Distance models
pub const INVERSE_DISTANCE: ALenum = 0xD001;
pub const INVERSE_DISTANCE_CLAMPED: ALenum = 0xD002;
pub const LINEAR_DISTANCE: ALenum = 0xD003;
pub const LINEAR_DISTANCE_CLAMPED: ALenum = 0xD004;
pub const EXPONENT_DISTANCE: ALenum = 0xD005;
pub const EXPONENT_DISTANCE_CLAMPED: ALenum = 0xD006;

// ======================== ALC attribute keys ========================

pub const ALC_FALSE: ALCint = 0;
pub const ALC_TRUE: ALCint = 1;

/// Output mixing frequency in Hz.
pub const ALC_FREQUENCY: ALCint = 0x1007;
/// Update rate of context processing, in Hz.
pub const ALC_REFRESH: ALCint = 0x1008;
/// Synchronous context flag (`ALC_TRUE`/`ALC_FALSE`).
pub const ALC_SYNC: ALCint = 0x1009;
/// Requested number of mono sources.
pub const ALC_MONO_SOURCES: ALCint = 0x1010;
/// Requested number of stereo sources.
pub const ALC_STEREO_SOURCES: ALCint = 0x1011;
