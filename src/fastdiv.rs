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

/// High 64 bits of the 192-bit product of a 128-bit and a 64-bit operand.
#[inline]
const fn mul128_hi64(a: u128, b: u64) -> u64 {
    let lo = ((a as u64 as u128) * b as u128) >> 64;
    let hi = (a >> 64) * b as u128;
    ((hi + lo) >> 64) as u64
}

/// Precomputed reciprocal of a fixed 64-bit divisor.
///
/// Replaces repeated division by the same constant with a widening
/// multiply and shift. `rem` is exact for any 64-bit dividend and any
/// non-zero divisor; `div` additionally requires the divisor to be at
/// least 2.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FastDiv64 {
    d: u64,
    m: u128,
}

impl FastDiv64 {
    /// Panics when `d` is zero.
    #[inline]
    pub(crate) const fn new(d: u64) -> Self {
        Self {
            d,
            m: (u128::MAX / d as u128).wrapping_add(1),
        }
    }

    #[inline]
    pub(crate) const fn div(&self, n: u64) -> u64 {
        mul128_hi64(self.m, n)
    }

    #[inline]
    pub(crate) const fn rem(&self, n: u64) -> u64 {
        let fraction = self.m.wrapping_mul(n as u128);
        mul128_hi64(fraction, self.d)
    }
}

/// Precomputed reciprocal of a fixed 32-bit divisor, for 32-bit dividends.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FastDiv32 {
    m: u64,
}

impl FastDiv32 {
    /// Panics when `d` is zero.
    #[inline]
    pub(crate) const fn new(d: u32) -> Self {
        Self {
            m: (u64::MAX / d as u64).wrapping_add(1),
        }
    }

    #[inline]
    pub(crate) const fn div(&self, n: u32) -> u32 {
        ((self.m as u128 * n as u128) >> 64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_fastdiv64_fixed() {
        let divisors: [u64; 7] = [
            2,
            3,
            1 << 23,
            1 << 52,
            (1 << 52) | 1,
            3 << 51,
            (1 << 53) - 1,
        ];
        let dividends: [u64; 6] = [0, 1, 12345654321, 1 << 53, u64::MAX - 1, u64::MAX];
        for &d in divisors.iter() {
            let fd = FastDiv64::new(d);
            for &n in dividends.iter() {
                assert_eq!(fd.rem(n), n % d, "rem {n} by {d}");
                assert_eq!(fd.div(n), n / d, "div {n} by {d}");
            }
        }
    }

    #[test]
    fn test_fastdiv64_by_one() {
        let fd = FastDiv64::new(1);
        assert_eq!(fd.rem(0), 0);
        assert_eq!(fd.rem(1), 0);
        assert_eq!(fd.rem(u64::MAX), 0);
    }

    #[test]
    fn test_fastdiv64_random() {
        let mut rng = rand::rng();
        for _ in 0..100_000 {
            let d = rng.random_range(2u64..1 << 53);
            let n = rng.random::<u64>();
            let fd = FastDiv64::new(d);
            assert_eq!(fd.rem(n), n % d, "rem {n} by {d}");
            assert_eq!(fd.div(n), n / d, "div {n} by {d}");
        }
    }

    #[test]
    fn test_fastdiv32_fixed() {
        let divisors: [u32; 5] = [2, 3, 1 << 15, (1 << 31) + 1, u32::MAX];
        let dividends: [u32; 5] = [0, 1, 65535, 1 << 30, u32::MAX];
        for &d in divisors.iter() {
            let fd = FastDiv32::new(d);
            for &n in dividends.iter() {
                assert_eq!(fd.div(n), n / d, "div {n} by {d}");
            }
        }
    }

    #[test]
    fn test_fastdiv32_random() {
        let mut rng = rand::rng();
        for _ in 0..100_000 {
            let d = rng.random_range(2u32..=u32::MAX);
            let n = rng.random::<u32>();
            let fd = FastDiv32::new(d);
            assert_eq!(fd.div(n), n / d, "div {n} by {d}");
        }
    }
}
