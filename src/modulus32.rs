/*
 * // Copyright (c) Radzivon Bartoshyk 3/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::fastdiv::FastDiv64;
use crate::float32::{MAX_EXP, frexp, ldexp};

/// A reusable modulus over `f32`.
///
/// The single precision twin of [`Modulus64`](crate::Modulus64): a
/// reciprocal of the modulus fraction plus a table of powers of two make
/// [`modulo`](Self::modulo) constant time for any finite argument. The
/// reciprocal is carried at 64-bit width, which covers the widening
/// product of two 24-bit fractions outright.
#[derive(Clone, Debug)]
pub struct Modulus32 {
    pub(crate) inv: FastDiv64,
    pub(crate) powers: Vec<u32>,
    pub(crate) modulus: f32,
    pub(crate) fr: u32,
    pub(crate) exp: u32,
}

impl Modulus32 {
    /// Creates a new `Modulus32`. The sign of `modulus` is discarded.
    ///
    /// Panics with a divide by zero when `modulus == 0`.
    pub fn new(modulus: f32) -> Self {
        let (fr, exp) = frexp(modulus);
        let inv = FastDiv64::new(fr as u64);

        let len = MAX_EXP - exp;
        let mut powers = vec![0u32; len as usize];
        if let Some(p0) = powers.first_mut() {
            *p0 = 1;
        }
        let mut r: u32 = 1;
        for p in powers.iter_mut().skip(1) {
            r = inv.rem((r as u64) << 1) as u32;
            *p = r;
        }

        Self {
            inv,
            powers,
            modulus: modulus.abs(),
            fr,
            exp,
        }
    }

    /// Returns the modulus value.
    #[inline]
    pub const fn value(&self) -> f32 {
        self.modulus
    }

    /// Returns `n` modulo the stored modulus, in `[0, value())`. The
    /// convention is Euclidean: negative `n` still maps to a nonnegative
    /// representative.
    ///
    /// Special cases:
    ///
    /// ```text
    /// Modulus32{NaN}.modulo(n)      = NaN
    /// Modulus32{±Inf}.modulo(n >= 0) = n
    /// Modulus32{±Inf}.modulo(n < 0)  = +Inf
    /// Modulus32{m}.modulo(±Inf)     = NaN
    /// Modulus32{m}.modulo(NaN)      = NaN
    /// ```
    pub fn modulo(&self, n: f32) -> f32 {
        if self.modulus.is_nan() {
            return f32::NAN;
        }
        if self.modulus.is_infinite() {
            if n >= 0. {
                return n;
            }
            if n < 0. {
                return f32::INFINITY;
            }
            return f32::NAN;
        }
        if n.is_nan() || n.is_infinite() {
            return f32::NAN;
        }

        if n < self.modulus && n > -self.modulus {
            if n < 0. {
                return n + self.modulus;
            }
            return n;
        }

        let (nfr, nexp) = frexp(n);
        let rfr = self.mod_exp(nfr, self.exp_diff(nexp));
        let r = ldexp(rfr, self.exp);

        if n < 0. && r != 0. {
            return self.modulus - r;
        }
        r
    }

    /// Returns the distance and direction of `n1` to `n2` along the
    /// shortest arc, in `[-value()/2, value()/2]`. Propagates NaN.
    pub fn dist(&self, n1: f32, n2: f32) -> f32 {
        let d = self.modulo(n2 - n1);
        if d > self.modulus / 2. {
            return d - self.modulus;
        }
        d
    }

    /// Returns the closest number to `n1` that is congruent to `n2`.
    pub fn get_congruent(&self, n1: f32, n2: f32) -> f32 {
        n1 - self.dist(n2, n1)
    }

    /// Serialises the modulus as the little-endian bytes of its value.
    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.modulus.to_le_bytes()
    }

    /// Rebuilds a modulus from bytes written by [`Self::to_le_bytes`].
    /// Panics like [`Self::new`] when the stored value is zero.
    pub fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self::new(f32::from_le_bytes(bytes))
    }

    /// Difference between a biased exponent and the modulus exponent,
    /// stepped down once more when the modulus is subnormal and its
    /// fraction carries no implied bit.
    #[inline]
    pub(crate) fn exp_diff(&self, nexp: u32) -> u32 {
        let mut diff = nexp - self.exp;
        if self.exp == 0 && nexp != 0 {
            diff -= 1;
        }
        diff
    }

    /// Computes `nfr * 2^exp (mod fr)`. The widening product of two
    /// 24-bit fractions fits 64 bits, so the reciprocal covers both arms.
    #[inline]
    pub(crate) fn mod_exp(&self, nfr: u32, exp: u32) -> u32 {
        if exp <= nfr.leading_zeros() {
            return self.inv.rem((nfr as u64) << exp) as u32;
        }
        self.inv.rem(nfr as u64 * self.powers[exp as usize] as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::pow2mod;
    use rand::Rng;

    fn reference(n: f32, m: f32) -> f32 {
        let mut want = n % m.abs();
        if want < 0. {
            want += m.abs();
        }
        want
    }

    #[test]
    fn test_modulo_table() {
        let cases: [(f32, f32, f32); 5] = [
            (13., 58., 6.),
            (435., 434., 434.),
            (10., 3456125., 3456125f32 % 10.),
            (5., -34., 1.),
            (-5., -3., 2.),
        ];
        for &(m, n, want) in cases.iter() {
            let modulus = Modulus32::new(m);
            assert_eq!(modulus.modulo(n), want, "{n} mod {m}");
        }
    }

    #[test]
    fn test_modulo_special_cases() {
        let m = Modulus32::new(f32::NAN);
        assert!(m.modulo(0.01).is_nan());

        let m = Modulus32::new(f32::INFINITY);
        assert_eq!(m.modulo(0.01), 0.01);
        assert_eq!(m.modulo(-1.), f32::INFINITY);
        assert!(m.modulo(f32::NAN).is_nan());

        let m = Modulus32::new(2.);
        assert!(m.modulo(f32::INFINITY).is_nan());
        assert!(m.modulo(f32::NEG_INFINITY).is_nan());
        assert!(m.modulo(f32::NAN).is_nan());
    }

    #[test]
    fn test_modulo_subnormal_bits() {
        let m = Modulus32::new(f32::from_bits(4144));
        assert_eq!(m.modulo(f32::from_bits(123445)).to_bits(), 3269);
    }

    #[test]
    fn test_modulo_subnormal_edge() {
        let m = f32::MIN_POSITIVE;
        let n = 1.003 * f32::MIN_POSITIVE;
        assert_eq!(Modulus32::new(m).modulo(n), reference(n, m));
    }

    #[test]
    fn test_modulo_agrees_with_reference() {
        let mut rng = rand::rng();
        for _ in 0..50_000 {
            let m = f32::from_bits(rng.random::<u32>());
            let n = f32::from_bits(rng.random::<u32>());
            if !m.is_finite() || m == 0. || !n.is_finite() {
                continue;
            }
            let modulus = Modulus32::new(m);
            let got = modulus.modulo(n);
            let want = reference(n, m);
            assert_eq!(got, want, "{n} mod {m}");
            assert!(got >= 0. && got < m.abs(), "{n} mod {m} out of range");
            assert_eq!(modulus.modulo(got), got, "{n} mod {m} not idempotent");
        }
    }

    #[test]
    fn test_modulo_sign_of_modulus_ignored() {
        let mut rng = rand::rng();
        for _ in 0..5_000 {
            let m = f32::from_bits(rng.random::<u32>());
            let n = f32::from_bits(rng.random::<u32>());
            if !m.is_finite() || m == 0. || !n.is_finite() {
                continue;
            }
            let pos = Modulus32::new(m);
            let neg = Modulus32::new(-m);
            assert_eq!(pos.modulo(n), neg.modulo(n), "{n} mod ±{m}");
        }
    }

    #[test]
    fn test_dist_table() {
        let cases: [(f32, f32, f32, f32); 5] = [
            (100., 10., 20., 10.),
            (100., 90., 20., 30.),
            (100., 10., 90., -20.),
            (100., 40., 30., -10.),
            (f32::INFINITY, 20., 30., 10.),
        ];
        for &(m, n1, n2, want) in cases.iter() {
            assert_eq!(Modulus32::new(m).dist(n1, n2), want, "dist({n1}, {n2})");
        }
    }

    #[test]
    fn test_dist_range_and_residue() {
        let mut rng = rand::rng();
        for _ in 0..20_000 {
            let m = rng.random_range(1..1000) as f32;
            let a = rng.random_range(-100_000..100_000) as f32;
            let b = rng.random_range(-100_000..100_000) as f32;
            let modulus = Modulus32::new(m);
            let d = modulus.dist(a, b);
            assert!(-m / 2. <= d && d <= m / 2., "dist({a}, {b}) mod {m} = {d}");
            assert_eq!(modulus.modulo(a + d - b), 0., "dist({a}, {b}) mod {m}");
        }
    }

    #[test]
    fn test_get_congruent() {
        let cases: [(f32, f32, f32, f32); 4] = [
            (100., 230., 20., 220.),
            (100., 210., 20., 220.),
            (100., -350., 20., -380.),
            (100., -310., 20., -280.),
        ];
        for &(m, n1, n2, want) in cases.iter() {
            let got = Modulus32::new(m).get_congruent(n1, n2);
            assert_eq!(got, want, "get_congruent({n1}, {n2}) mod {m}");
        }
    }

    #[test]
    fn test_value() {
        assert_eq!(Modulus32::new(15.).value(), 15.);
        assert_eq!(Modulus32::new(-15.).value(), 15.);
    }

    #[test]
    fn test_le_bytes_round_trip() {
        let m = Modulus32::new(-0.37);
        let back = Modulus32::from_le_bytes(m.to_le_bytes());
        assert_eq!(back.value(), 0.37);
        assert_eq!(back.modulo(5.2), m.modulo(5.2));
    }

    #[test]
    fn test_power_table() {
        let m = Modulus32::new(0.1);
        assert_eq!(m.powers.len() as u32, MAX_EXP - m.exp);
        for &i in [0usize, 1, 2, 5, 31, 64, 120].iter() {
            assert_eq!(m.powers[i], pow2mod(i as u32, m.fr), "powers[{i}]");
        }
    }
}
