//! Fuzz target for the record parser.
//!
//! Arbitrary bytes go through the full parse loop; malformed input must come
//! back as an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use csvshape::RecordMapper;

csvshape::record! {
    #[allow(dead_code)]
    struct Move {
        name as "move": String,
        sp_cost: i32,
        power: Option<f64>,
        inheritable: Option<bool>,
    }
}

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mapper) = RecordMapper::<Move>::new() {
        let _ = mapper.parse_reader(data);
    }
});
