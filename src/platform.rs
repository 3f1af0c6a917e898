//! The `platform` module selects the host platform family at compile time.
//! One `cfg` arm per supported build target; the final arm is the sentinel
//! for every target the table does not name, so exactly one definition
//! exists for any conceivable build.

use crate::api::OperatingSystem;
use static_assertions::assert_impl_all;
use std::fmt::Debug;

#[cfg(target_os = "windows")]
pub(crate) const HOST_OS: OperatingSystem = OperatingSystem::Windows;
#[cfg(target_os = "macos")]
pub(crate) const HOST_OS: OperatingSystem = OperatingSystem::MacOs;
#[cfg(target_os = "linux")]
pub(crate) const HOST_OS: OperatingSystem = OperatingSystem::Linux;
#[cfg(target_os = "android")]
pub(crate) const HOST_OS: OperatingSystem = OperatingSystem::Android;
#[cfg(target_os = "ios")]
pub(crate) const HOST_OS: OperatingSystem = OperatingSystem::Ios;
#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_os = "android",
    target_os = "ios"
)))]
pub(crate) const HOST_OS: OperatingSystem = OperatingSystem::Unknown;

// Ensure the reported type keeps the traits bindings rely on.
assert_impl_all!(OperatingSystem: Clone, Copy, Debug, Send, Sized, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_matches_build_target() {
        #[cfg(target_os = "windows")]
        assert_eq!(HOST_OS, OperatingSystem::Windows);
        #[cfg(target_os = "macos")]
        assert_eq!(HOST_OS, OperatingSystem::MacOs);
        #[cfg(target_os = "linux")]
        assert_eq!(HOST_OS, OperatingSystem::Linux);
        #[cfg(target_os = "android")]
        assert_eq!(HOST_OS, OperatingSystem::Android);
        #[cfg(target_os = "ios")]
        assert_eq!(HOST_OS, OperatingSystem::Ios);
        #[cfg(not(any(
            target_os = "windows",
            target_os = "macos",
            target_os = "linux",
            target_os = "android",
            target_os = "ios"
        )))]
        assert_eq!(HOST_OS, OperatingSystem::Unknown);
    }
}
