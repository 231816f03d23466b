#![no_main]

use congruent::{Modulus32, Modulus64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u64)| {
    let m = f64::from_bits(data.0);
    let n = f64::from_bits(data.1);
    if m.is_finite() && m != 0. {
        let modulus = Modulus64::new(m);
        let r = modulus.modulo(n);
        if n.is_finite() {
            assert!(r >= 0. && r < m.abs());
            assert_eq!(modulus.modulo(r), r);
            let mut want = n % m.abs();
            if want < 0. {
                want += m.abs();
            }
            assert_eq!(r, want);
        } else {
            assert!(r.is_nan());
        }
        _ = modulus.dist(n, 0.5);
        _ = modulus.get_congruent(n, 0.5);
    }

    let lo = data.0.to_ne_bytes();
    let m = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let hi = data.1.to_ne_bytes();
    let n = f32::from_bits(u32::from_ne_bytes([hi[0], hi[1], hi[2], hi[3]]));
    if m.is_finite() && m != 0. {
        let modulus = Modulus32::new(m);
        let r = modulus.modulo(n);
        if n.is_finite() {
            assert!(r >= 0. && r < m.abs());
            assert_eq!(modulus.modulo(r), r);
            let mut want = n % m.abs();
            if want < 0. {
                want += m.abs();
            }
            assert_eq!(r, want);
        } else {
            assert!(r.is_nan());
        }
    }
});
