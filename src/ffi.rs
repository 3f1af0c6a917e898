//! The C-linkage boundary consumed by foreign-language bindings.
//!
//! One zero-argument symbol is exported. Its return type is the
//! `#[repr(i32)]` [`OperatingSystem`] enumeration, so the value crossing the
//! boundary is always a 4-byte integer from the published table; the
//! assertions below fail the build if a member is ever renumbered or the
//! width drifts.

use crate::api::{self, OperatingSystem};
use log::trace;
use static_assertions::const_assert_eq;
use std::mem;

// Published ABI values. Never renumber; new families append.
const_assert_eq!(OperatingSystem::Windows as i32, 0);
const_assert_eq!(OperatingSystem::MacOs as i32, 1);
const_assert_eq!(OperatingSystem::Linux as i32, 2);
const_assert_eq!(OperatingSystem::Unknown as i32, 3);
const_assert_eq!(OperatingSystem::Android as i32, 4);
const_assert_eq!(OperatingSystem::Ios as i32, 5);
const_assert_eq!(mem::size_of::<OperatingSystem>(), 4);

/// Report the host operating system to a foreign caller.
///
/// Never fails and never unwinds: an unclassifiable host is reported as
/// `Unknown`, not signalled as an error. The value is fixed for the life of
/// the process, and the function is safe to call concurrently from any
/// number of threads.
#[no_mangle]
pub extern "C" fn get_operating_system() -> OperatingSystem {
    let os = api::get_operating_system();
    trace!("get_operating_system() -> {}", os);
    os
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn agrees_with_rust_accessor() {
        assert_eq!(get_operating_system(), api::get_operating_system());
    }

    #[test]
    fn value_is_in_published_table() {
        let os = get_operating_system();
        assert!(OperatingSystem::ALL.contains(&os));
        assert_eq!(OperatingSystem::from_raw(os.to_raw()), os);
    }

    #[test]
    fn stable_across_calls() {
        let first = get_operating_system();
        for _ in 0..1000 {
            assert_eq!(get_operating_system(), first);
        }
    }

    #[test]
    fn stable_across_threads() {
        let expected = get_operating_system();
        let handles: Vec<_> = (0..32)
            .map(|_| {
                thread::spawn(move || {
                    for _ in 0..1000 {
                        assert_eq!(get_operating_system(), expected);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
