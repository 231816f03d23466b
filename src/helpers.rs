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
use num_traits::PrimInt;

/// Shifts `n` up by `up - down`. A net right shift reaching the word size
/// saturates to zero rather than being rejected by the shift operator.
#[inline]
pub(crate) fn shift_sub<T: PrimInt>(up: u32, down: u32, n: T) -> T {
    if up >= down {
        n << (up - down) as usize
    } else {
        let shift = (down - up) as usize;
        if shift >= size_of::<T>() * 8 {
            return T::zero();
        }
        n >> shift
    }
}

/// Computes `2^exp mod modulus` by repeated doubling. Slow, kept as the
/// reference oracle for the precomputed power tables. The modulus must
/// leave one bit of doubling headroom in `T`.
#[allow(dead_code)]
pub(crate) fn pow2mod<T: PrimInt>(exp: u32, modulus: T) -> T {
    let mut r = T::one();
    let mut i = 0;
    while i < exp {
        r = (r << 1) % modulus;
        i += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_sub() {
        assert_eq!(shift_sub(11, 4, 1u64), 1 << 7);
        assert_eq!(shift_sub(8, 8, 5u32), 5);
        assert_eq!(shift_sub(8, 10, 12u32), 3);
        assert_eq!(shift_sub(8, 40, u32::MAX), 0);
        assert_eq!(shift_sub(11, 75, u64::MAX), 0);
        assert_eq!(shift_sub(11, 2000, u64::MAX), 0);
    }

    #[test]
    fn test_pow2mod() {
        assert_eq!(pow2mod(0, 7u32), 1);
        assert_eq!(pow2mod(5, 12u32), 8);
        assert_eq!(pow2mod(64, 12u64), 4);
        assert_eq!(pow2mod(128, 36754u64), 18344);
    }
}
