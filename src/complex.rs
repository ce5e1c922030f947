//! Fixed-point helpers for complex samples.

use std;

use num::Complex;

/// Multiply a 32-bit complex value by a 16-bit complex value, keeping 32 bits. The
/// products wrap on overflow.
pub fn mul_wide(a: Complex<i32>, b: Complex<i16>) -> Complex<i32> {
    let (br, bi) = (b.re as i32, b.im as i32);

    Complex::new(a.re.wrapping_mul(br).wrapping_sub(a.im.wrapping_mul(bi)),
                 a.im.wrapping_mul(br).wrapping_add(a.re.wrapping_mul(bi)))
}

/// Arithmetic right shift of both parts.
pub fn scale32(z: Complex<i32>, shift: u32) -> Complex<i32> {
    Complex::new(z.re >> shift, z.im >> shift)
}

/// Arithmetic right shift of both parts, with each part clamped to `±i16::MAX`.
pub fn limit_scale16(z: Complex<i32>, shift: u32) -> Complex<i16> {
    let limit = |x: i32| {
        let max = std::i16::MAX as i32;

        if x > max {
            max
        } else if x < -max {
            -max
        } else {
            x
        }
    };

    Complex::new(limit(z.re >> shift) as i16, limit(z.im >> shift) as i16)
}
