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
use crate::fastdiv::FastDiv64;
use crate::float64::{EXPONENT_BITS, frexp};
use crate::helpers::shift_sub;
use crate::modulus64::Modulus64;

/// Upper limit on the index range. Larger ranges approach the resolution
/// of the scaled residue and lose accuracy.
const MAX_INDEX: u64 = 1 << 32;

/// Maps floats into the integer range `[0, index)` through an `f64`
/// modulus, in one multiply instead of a scale and divide.
#[derive(Clone, Debug)]
pub struct Indexer64 {
    modulus: Modulus64,
    inv_r: FastDiv64,
    r: u64,
    index: u64,
}

impl Modulus64 {
    /// Derives an indexer mapping residues of this modulus to `[0, index)`.
    ///
    /// The modulus must be a normal, finite float, otherwise
    /// [`ModulusError::BadModulus`] is returned; `index` must lie in
    /// `[1, 2^32]`, otherwise [`ModulusError::BadIndex`].
    pub fn new_indexer(&self, index: u64) -> Result<Indexer64, ModulusError> {
        if self.modulus.is_infinite() || self.modulus.is_nan() || self.exp == 0 {
            return Err(ModulusError::BadModulus);
        }
        if index < 1 || index > MAX_INDEX {
            return Err(ModulusError::BadIndex);
        }

        // shifted up to keep precision near the top of the range
        let r = self.fr << EXPONENT_BITS;
        let inv_r = FastDiv64::new(r / index);
        Ok(Indexer64 {
            modulus: self.clone(),
            inv_r,
            r,
            index,
        })
    }
}

impl Indexer64 {
    /// Builds the modulus and derives an indexer in one step.
    ///
    /// Panics like [`Modulus64::new`] when `modulus == 0`.
    pub fn new(modulus: f64, index: u64) -> Result<Self, ModulusError> {
        Modulus64::new(modulus).new_indexer(index)
    }

    /// Returns the embedded modulus.
    #[inline]
    pub const fn modulus(&self) -> &Modulus64 {
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
    pub fn index(&self, n: f64) -> u64 {
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
