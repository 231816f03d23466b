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
use crate::modulus32::Modulus32;
use crate::modulus64::Modulus64;

/// Per-axis modulus over fixed size `f64` vectors.
#[derive(Clone, Debug)]
pub struct VecModulus64<const N: usize> {
    axes: [Modulus64; N],
}

impl<const N: usize> VecModulus64<N> {
    /// Creates one modulus per axis. Panics when any axis is zero.
    pub fn new(moduli: [f64; N]) -> Self {
        Self {
            axes: moduli.map(Modulus64::new),
        }
    }

    /// Returns the per-axis modulus values.
    pub fn value(&self) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].value())
    }

    /// Applies [`Modulus64::modulo`] on every axis.
    pub fn modulo(&self, v: [f64; N]) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].modulo(v[i]))
    }

    /// Applies [`Modulus64::dist`] on every axis.
    pub fn dist(&self, v1: [f64; N], v2: [f64; N]) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].dist(v1[i], v2[i]))
    }

    /// Applies [`Modulus64::get_congruent`] on every axis.
    pub fn get_congruent(&self, v1: [f64; N], v2: [f64; N]) -> [f64; N] {
        std::array::from_fn(|i| self.axes[i].get_congruent(v1[i], v2[i]))
    }
}

/// Per-axis modulus over fixed size `f32` vectors.
#[derive(Clone, Debug)]
pub struct VecModulus32<const N: usize> {
    axes: [Modulus32; N],
}

impl<const N: usize> VecModulus32<N> {
    /// Creates one modulus per axis. Panics when any axis is zero.
    pub fn new(moduli: [f32; N]) -> Self {
        Self {
            axes: moduli.map(Modulus32::new),
        }
    }

    /// Returns the per-axis modulus values.
    pub fn value(&self) -> [f32; N] {
        std::array::from_fn(|i| self.axes[i].value())
    }

    /// Applies [`Modulus32::modulo`] on every axis.
    pub fn modulo(&self, v: [f32; N]) -> [f32; N] {
        std::array::from_fn(|i| self.axes[i].modulo(v[i]))
    }

    /// Applies [`Modulus32::dist`] on every axis.
    pub fn dist(&self, v1: [f32; N], v2: [f32; N]) -> [f32; N] {
        std::array::from_fn(|i| self.axes[i].dist(v1[i], v2[i]))
    }

    /// Applies [`Modulus32::get_congruent`] on every axis.
    pub fn get_congruent(&self, v1: [f32; N], v2: [f32; N]) -> [f32; N] {
        std::array::from_fn(|i| self.axes[i].get_congruent(v1[i], v2[i]))
    }
}
