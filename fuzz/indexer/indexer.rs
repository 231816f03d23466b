#![no_main]

use congruent::{Indexer32, Indexer64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u32, u64)| {
    let m = f64::from_bits(data.0);
    let k = u64::from(data.1.max(1));
    let n = f64::from_bits(data.2);
    if m != 0. {
        if let Ok(indexer) = Indexer64::new(m, k) {
            let i = indexer.index(n);
            if n.is_finite() {
                assert!(i < k);
            } else {
                assert_eq!(i, k);
            }
        }
    }

    let lo = data.0.to_ne_bytes();
    let m = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let k = (data.1 & 0xffff).max(1);
    let hi = data.2.to_ne_bytes();
    let n = f32::from_bits(u32::from_ne_bytes([hi[0], hi[1], hi[2], hi[3]]));
    if m != 0. {
        if let Ok(indexer) = Indexer32::new(m, k) {
            let i = indexer.index(n);
            if n.is_finite() {
                assert!(i < k);
            } else {
                assert_eq!(i, k);
            }
        }
    }
});
