//! The typed surface for Rust callers. The C export in [`crate::ffi`] is a
//! thin shim over this module.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_cr as serde;

/// The host platform families a build of this library can report.
///
/// The numeric values cross a binary-compatibility boundary and are consumed
/// by independently-compiled bindings, so they are published and permanent:
/// members are never renumbered or reused, and new families append after the
/// highest existing value. Bindings mapping these integers into their own tag
/// types must treat values they do not recognize as [`Unknown`].
///
/// [`Unknown`]: OperatingSystem::Unknown
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_cr", rename_all = "lowercase")
)]
#[repr(i32)]
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum OperatingSystem {
    Windows = 0,
    MacOs = 1,
    Linux = 2,
    /// Sentinel for hosts that fit no known family. Not an error: callers
    /// receiving it should take their platform-agnostic path.
    Unknown = 3,
    Android = 4,
    Ios = 5,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
#[error("unrecognized operating system name: {0}")]
pub struct ParseOperatingSystemError(String);

impl OperatingSystem {
    /// Every member of the enumeration, in published-value order.
    pub const ALL: [OperatingSystem; 6] = [
        OperatingSystem::Windows,
        OperatingSystem::MacOs,
        OperatingSystem::Linux,
        OperatingSystem::Unknown,
        OperatingSystem::Android,
        OperatingSystem::Ios,
    ];

    /// The published integer value carried across the C boundary.
    pub const fn to_raw(self) -> i32 {
        self as i32
    }

    /// Decode a raw value received across the boundary.
    ///
    /// Total: integers outside the published table, including values appended
    /// by a newer library revision, decode to [`OperatingSystem::Unknown`].
    pub const fn from_raw(raw: i32) -> OperatingSystem {
        match raw {
            0 => OperatingSystem::Windows,
            1 => OperatingSystem::MacOs,
            2 => OperatingSystem::Linux,
            4 => OperatingSystem::Android,
            5 => OperatingSystem::Ios,
            _ => OperatingSystem::Unknown,
        }
    }

    /// Lowercase family name, the inverse of the [`FromStr`] impl.
    pub const fn name(self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOs => "macos",
            OperatingSystem::Linux => "linux",
            OperatingSystem::Unknown => "unknown",
            OperatingSystem::Android => "android",
            OperatingSystem::Ios => "ios",
        }
    }
}

impl Display for OperatingSystem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatingSystem {
    type Err = ParseOperatingSystemError;

    /// Parses a lowercase family name as produced by [`Display`].
    ///
    /// `"unknown"` parses to the sentinel; anything outside the table is an
    /// error rather than a silent fallback, since a string (unlike a raw ABI
    /// integer) never comes from a newer revision of this library.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" => Ok(OperatingSystem::Windows),
            "macos" => Ok(OperatingSystem::MacOs),
            "linux" => Ok(OperatingSystem::Linux),
            "unknown" => Ok(OperatingSystem::Unknown),
            "android" => Ok(OperatingSystem::Android),
            "ios" => Ok(OperatingSystem::Ios),
            _ => Err(ParseOperatingSystemError(s.to_owned())),
        }
    }
}

/// Report the operating system the calling process is running on.
///
/// The value is selected by the build target when the library is compiled and
/// never changes for the life of the process; repeated calls return the
/// identical member. Hosts outside the known families report
/// [`OperatingSystem::Unknown`].
pub const fn get_operating_system() -> OperatingSystem {
    crate::platform::HOST_OS
}
