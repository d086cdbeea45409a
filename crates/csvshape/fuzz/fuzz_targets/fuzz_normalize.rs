//! Fuzz target for header normalization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use csvshape::normalize;

fuzz_target!(|token: &str| {
    if let Ok(name) = normalize(token) {
        assert!(!name.starts_with('_'));
        assert!(!name.contains("__"));
    }
});
