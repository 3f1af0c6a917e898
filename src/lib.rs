//! Host operating system identification for the language bindings of a
//! cross-platform Bluetooth Low Energy stack.
//!
//! Platform-conditional code in a BLE stack needs one authoritative answer to
//! "which host is this process on?", and bindings in other languages need
//! that answer across a stable C boundary. This crate provides both: the
//! [`OperatingSystem`] enumeration and the [`get_operating_system`] accessor
//! for Rust callers, and an `extern "C"` export of the same value (see
//! [`ffi`]) for everyone else.
//!
//! The answer is baked in when the library is compiled: the build target
//! selects one member of the closed enumeration, hosts outside the known
//! families report [`OperatingSystem::Unknown`], and every call for the life
//! of the process returns the identical value. There is no runtime probing
//! and no failure path.

pub mod api;
pub mod ffi;
mod platform;

pub use api::{get_operating_system, OperatingSystem, ParseOperatingSystemError};
