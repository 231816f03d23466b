/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
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
use crate::err::ModulusError;
use crate::fastdiv::FastDiv32;
use crate::float32::{EXPONENT_BITS, frexp};
use crate::helpers::shift_sub;
use crate::modulus32::Modulus32;

/// Upper limit on the index range. The single precision residue carries
/// fewer bits, so the ceiling sits lower than the `f64` indexer's.
const MAX_INDEX: u32 = 1 << 16;

/// Maps floats into the integer range `[0, index)` through an `f32`
/// modulus, in one multiply instead of a scale and divide.
#[derive(Clone, Debug)]
pub struct Indexer32 {
    modulus: Modulus32,
    inv_r: FastDiv32,
    r: u32,
    index: u32,
}

impl Modulus32 {
    /// Derives an indexer mapping residues of this modulus to `[0, index)`.
    ///
    /// The modulus must be a normal, finite float, otherwise
    /// [`ModulusError::BadModulus`] is returned; `index` must lie in
    /// `[1, 2^16]`, otherwise [`ModulusError::BadIndex`].
    pub fn new_indexer(&self, index: u32) -> Result<Indexer32, ModulusError> {
        if self.modulus.is_infinite() || self.modulus.is_nan() || self.exp == 0 {
            return Err(ModulusError::BadModulus);
        }
        if index < 1 || index > MAX_INDEX {
            return Err(ModulusError::BadIndex);
        }

        // shifted up to keep precision near the top of the range
        let r = self.fr << EXPONENT_BITS;
        let inv_r = FastDiv32::new(r / index);
        Ok(Indexer32 {
            modulus: self.clone(),
            inv_r,
            r,
            index,
        })
    }
}

impl Indexer32 {
    /// Builds the modulus and derives an indexer in one step.
    ///
    /// Panics like [`Modulus32::new`] when `modulus == 0`.
    pub fn new(modulus: f32, index: u32) -> Result<Self, ModulusError> {
        Modulus32::new(modulus).new_indexer(index)
    }

    /// Returns the embedded modulus.
    #[inline]
    pub const fn modulus(&self) -> &Modulus32 {
        &self.modulus
    }

    /// Maps `n` to an integer in `[0, index)`.
    ///
    /// Special cases:
    ///
    /// ```text
    /// index(NaN)  = index
    /// index(±Inf) = index
    /// ```
    pub fn index(&self, n: f32) -> u32 {
        if n.is_nan() || n.is_infinite() {
            return self.index;
        }

        let m = &self.modulus;
        let (nfr, nexp) = frexp(n);
        let nr = if n > m.modulus {
            m.mod_exp(nfr, m.exp_diff(nexp)) << EXPONENT_BITS
        } else if n < -m.modulus {
            let nr = m.mod_exp(nfr, m.exp_diff(nexp)) << EXPONENT_BITS;
            if nr != 0 { self.r - nr } else { nr }
        } else if n < 0. {
            let nr = shift_sub(EXPONENT_BITS, m.exp - nexp, nfr);
            if nr == 0 {
                // the magnitude is an exact multiple of the modulus
                return self.index - 1;
            }
            self.r - nr
        } else {
            shift_sub(EXPONENT_BITS, m.exp - nexp, nfr)
        };
        // the truncation in r / index can overshoot the last bucket for
        // inputs within a few ULP of a multiple of the modulus
        self.inv_r.div(nr).min(self.index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_index_table() {
        let cases: [(f32, u32, f32, u32); 9] = [
            (15., 15, 1., 1),
            (15., 10, 1.5, 1),
            (120., 100, 115., 95),
            (200., 100, -2., 99),
            (200., 100, -202., 99),
            (10., 20, 987256., 12),
            (24., 3, 0., 0),
            (24., 3, 13., 1),
            (24., 3, 65., 2),
        ];
        for &(m, k, n, want) in cases.iter() {
            let indexer = Indexer32::new(m, k).unwrap();
            assert_eq!(indexer.index(n), want, "index({n}) over ({m}, {k})");
        }
    }

    #[test]
    fn test_index_sentinels() {
        let indexer = Indexer32::new(23., 10054).unwrap();
        assert_eq!(indexer.index(f32::NAN), 10054);
        assert_eq!(indexer.index(f32::INFINITY), 10054);
        assert_eq!(indexer.index(f32::NEG_INFINITY), 10054);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Indexer32::new(f32::INFINITY, 100).unwrap_err(),
            ModulusError::BadModulus
        );
        assert_eq!(
            Indexer32::new(f32::NAN, 10054).unwrap_err(),
            ModulusError::BadModulus
        );
        assert_eq!(
            Indexer32::new(f32::from_bits(4144), 100).unwrap_err(),
            ModulusError::BadModulus
        );
        assert_eq!(
            Indexer32::new(1.45104621, 70000).unwrap_err(),
            ModulusError::BadIndex
        );
        assert_eq!(Indexer32::new(15., 0).unwrap_err(), ModulusError::BadIndex);
        assert!(Indexer32::new(15., 1 << 16).is_ok());
        assert!(Modulus32::new(15.).new_indexer(15).is_ok());
    }

    #[test]
    fn test_index_in_range() {
        let mut rng = rand::rng();
        for _ in 0..20_000 {
            let m = f32::from_bits(rng.random::<u32>());
            if !m.is_normal() {
                continue;
            }
            let k = rng.random_range(1..=MAX_INDEX);
            let n = f32::from_bits(rng.random::<u32>());
            if !n.is_finite() {
                continue;
            }
            let indexer = Indexer32::new(m, k).unwrap();
            let got = indexer.index(n);
            assert!(got < k, "index({n}) over ({m}, {k}) = {got}");
        }
    }

    #[test]
    fn test_index_monotone() {
        let indexer = Indexer32::new(100., 1000).unwrap();
        let mut prev = 0;
        let mut a = 0f32;
        while a < 100. {
            let i = indexer.index(a);
            assert!(i >= prev, "index({a}) decreased");
            prev = i;
            a += 0.0625;
        }
    }

    #[test]
    fn test_index_exact_buckets() {
        let indexer = Indexer32::new(360., 360).unwrap();
        for i in 0..360u32 {
            assert_eq!(indexer.index(i as f32), i);
        }
        for i in 1..360u32 {
            assert_eq!(indexer.index(i as f32 + 360.), i);
            assert_eq!(indexer.index(i as f32 - 360.), i);
        }
    }
}
