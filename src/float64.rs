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
pub(crate) const EXPONENT_BITS: u32 = 11;
pub(crate) const FRACTION_BITS: u32 = 52;
pub(crate) const MAX_EXP: u32 = (1 << EXPONENT_BITS) - 1;
pub(crate) const EXPONENT_MASK: u64 = ((1u64 << EXPONENT_BITS) - 1) << FRACTION_BITS;
pub(crate) const FRACTION_MASK: u64 = (1u64 << FRACTION_BITS) - 1;
pub(crate) const IMPLICIT_BIT: u64 = 1u64 << FRACTION_BITS;

/// Splits a float into its fraction and biased exponent. The sign bit is
/// discarded. For normal numbers the implied 53rd bit is set in the fraction.
#[inline]
pub(crate) const fn frexp(f: f64) -> (u64, u32) {
    let bits = f.to_bits();
    let exp = ((bits & EXPONENT_MASK) >> FRACTION_BITS) as u32;
    if exp == 0 {
        return (bits & FRACTION_MASK, 0);
    }
    ((bits & FRACTION_MASK) | IMPLICIT_BIT, exp)
}

/// Assembles a float from a fraction and biased exponent. Sign is ignored.
/// Expects the implied bit to be set in the fraction if appropriate; a
/// fraction with its top bit below the implied position is renormalised,
/// spilling into the subnormal range when the exponent runs out.
#[inline]
pub(crate) const fn ldexp(fr: u64, exp: u32) -> f64 {
    if exp == 0 || fr == 0 {
        return f64::from_bits(fr & FRACTION_MASK);
    }
    let mut exp = exp;
    let mut shift = fr.leading_zeros() - EXPONENT_BITS;
    if shift >= exp {
        shift = exp - 1;
        exp = 0;
    } else {
        exp -= shift;
    }
    f64::from_bits(((exp as u64) << FRACTION_BITS) | ((fr << shift) & FRACTION_MASK))
}
