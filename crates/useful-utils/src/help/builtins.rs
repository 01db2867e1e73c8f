//! Built-in function registrations
//!
//! All registered functions are listed here, in one place. Each utility
//! module defines its own descriptor next to the function it describes;
//! this module only collects them.

use super::FunctionDescriptor;
use crate::{logging, timing};

/// Number of built-in functions.
pub const BUILTIN_COUNT: usize = 3;

/// Returns descriptors for every function the library exposes.
pub fn builtin_descriptors() -> Vec<FunctionDescriptor> {
    vec![
        logging::set_debug_descriptor(),
        timing::log_time_descriptor(),
        timing::time_it_descriptor(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_descriptors() {
        assert_eq!(builtin_descriptors().len(), BUILTIN_COUNT);
    }

    #[test]
    fn names_are_unique() {
        let descs = builtin_descriptors();
        let mut names: Vec<_> = descs.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_COUNT);
    }

    #[test]
    fn all_carry_signature_and_location() {
        for desc in builtin_descriptors() {
            assert!(!desc.signature.is_empty(), "{} has no signature", desc.name);
            assert!(desc.location.is_some(), "{} has no location", desc.name);
        }
    }
}
