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
use crate::float64::{MAX_EXP, frexp, ldexp};

/// The table must cover every reachable exponent difference even when the
/// modulus exponent is at the top of the range.
const MIN_POWERS: u32 = 65;

/// A reusable modulus over `f64`.
///
/// Precomputes a reciprocal of the modulus fraction together with a table
/// of powers of two, so that [`modulo`](Self::modulo) runs in constant
/// time regardless of the magnitude of its argument, where a plain
/// floating point remainder degrades with the exponent difference.
///
/// The object is immutable after construction and cheap to share.
#[derive(Clone, Debug)]
pub struct Modulus64 {
    pub(crate) inv: FastDiv64,
    pub(crate) powers: Vec<u64>,
    pub(crate) modulus: f64,
    pub(crate) fr: u64,
    pub(crate) exp: u32,
}

impl Modulus64 {
    /// Creates a new `Modulus64`. The sign of `modulus` is discarded.
    ///
    /// Panics with a divide by zero when `modulus == 0`.
    pub fn new(modulus: f64) -> Self {
        let (fr, exp) = frexp(modulus);
        let inv = FastDiv64::new(fr);

        let len = (MAX_EXP - exp).max(MIN_POWERS);
        let mut powers = vec![0u64; len as usize];
        if let Some(p0) = powers.first_mut() {
            *p0 = 1;
        }
        let mut r: u64 = 1;
        for p in powers.iter_mut().skip(1) {
            r = inv.rem(r << 1);
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
    pub const fn value(&self) -> f64 {
        self.modulus
    }

    /// Returns `n` modulo the stored modulus, in `[0, value())`. The
    /// convention is Euclidean: negative `n` still maps to a nonnegative
    /// representative.
    ///
    /// Special cases:
    ///
    /// ```text
    /// Modulus64{NaN}.modulo(n)      = NaN
    /// Modulus64{±Inf}.modulo(n >= 0) = n
    /// Modulus64{±Inf}.modulo(n < 0)  = +Inf
    /// Modulus64{m}.modulo(±Inf)     = NaN
    /// Modulus64{m}.modulo(NaN)      = NaN
    /// ```
    pub fn modulo(&self, n: f64) -> f64 {
        if self.modulus.is_nan() {
            return f64::NAN;
        }
        if self.modulus.is_infinite() {
            if n >= 0. {
                return n;
            }
            if n < 0. {
                return f64::INFINITY;
            }
            return f64::NAN;
        }
        if n.is_nan() || n.is_infinite() {
            return f64::NAN;
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
    pub fn dist(&self, n1: f64, n2: f64) -> f64 {
        let d = self.modulo(n2 - n1);
        if d > self.modulus / 2. {
            return d - self.modulus;
        }
        d
    }

    /// Returns the closest number to `n1` that is congruent to `n2`.
    pub fn get_congruent(&self, n1: f64, n2: f64) -> f64 {
        n1 - self.dist(n2, n1)
    }

    /// Serialises the modulus as the little-endian bytes of its value.
    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.modulus.to_le_bytes()
    }

    /// Rebuilds a modulus from bytes written by [`Self::to_le_bytes`].
    /// Panics like [`Self::new`] when the stored value is zero.
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::new(f64::from_le_bytes(bytes))
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

    /// Computes `nfr * 2^exp (mod fr)`.
    #[inline]
    pub(crate) fn mod_exp(&self, nfr: u64, exp: u32) -> u64 {
        if exp <= nfr.leading_zeros() {
            return self.inv.rem(nfr << exp);
        }
        let wide = nfr as u128 * self.powers[exp as usize] as u128;
        if wide >> 64 == 0 {
            return self.inv.rem(wide as u64);
        }
        (wide % self.fr as u128) as u64
    }
}
