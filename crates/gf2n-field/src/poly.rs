//! Unreduced polynomial arithmetic over GF(2)
//!
//! Everything above division is built from the primitives here:
//! multiply-by-x feeds schoolbook multiplication, which together with
//! monomials drives long division. Reduced multiplication and inversion
//! (see [`crate::euclid`]) are then expressed through division.

use std::fmt;

use tracing::trace;

use crate::elem::FieldElement;
use crate::error::{FieldError, Result};
use crate::modulus::Modulus;

/// Highest set bit index across the byte vector, 0 when no bit is set
pub(crate) fn bit_degree(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |i| i * 8 + (7 - bytes[i].leading_zeros() as usize))
}

/// Render as `x^d + ... + x + 1`, highest power first, `0` when empty
pub(crate) fn write_poly(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    if bytes.iter().all(|&b| b == 0) {
        return f.write_str("0");
    }
    let mut first = true;
    for power in (0..=bit_degree(bytes)).rev() {
        if (bytes[power / 8] >> (power % 8)) & 1 == 0 {
            continue;
        }
        if !first {
            f.write_str(" + ")?;
        }
        first = false;
        match power {
            0 => f.write_str("1")?,
            1 => f.write_str("x")?,
            d => write!(f, "x^{}", d)?,
        }
    }
    Ok(())
}

/// XOR the overlapping bytes; the longer side's excess bytes pass through
pub(crate) fn xor_coefficients(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
    let (long, short) = if lhs.len() > rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let mut out = long.to_vec();
    out.iter_mut().zip(short).for_each(|(o, s)| *o ^= s);
    out
}

/// Shift the whole vector left by one bit, growing it if a carry escapes
fn shift_left_one(bytes: &mut Vec<u8>) {
    let mut carry = 0u8;
    for byte in bytes.iter_mut() {
        let next_carry = *byte >> 7;
        *byte = (*byte << 1) | carry;
        carry = next_carry;
    }
    if carry != 0 {
        bytes.push(carry);
    }
}

/// Multiply by the indeterminate `x` without reduction
pub fn mul_by_x_no_reduction(arg: &FieldElement) -> FieldElement {
    let mut coefficients = arg.coefficients.clone();
    shift_left_one(&mut coefficients);
    FieldElement {
        coefficients,
        modulus: arg.modulus.clone(),
    }
}

/// Exact polynomial product of `lhs` and `rhs`, no modular reduction.
///
/// Walks the bits of `lhs` from the lowest up, adding a running doubled
/// copy of `rhs` wherever a bit is set.
pub fn mul_no_reduction(lhs: &FieldElement, rhs: &FieldElement) -> Result<FieldElement> {
    lhs.ensure_same_field(rhs)?;
    let mut acc = vec![0u8];
    let mut shifted = rhs.coefficients.clone();
    for &byte in &lhs.coefficients {
        for bit in 0..8 {
            if (byte >> bit) & 1 == 1 {
                acc = xor_coefficients(&acc, &shifted);
            }
            shift_left_one(&mut shifted);
        }
    }
    Ok(FieldElement {
        coefficients: acc,
        modulus: lhs.modulus.clone(),
    })
}

/// `x^degree` built by setting a single bit
pub fn monomial(degree: usize, modulus: &Modulus) -> FieldElement {
    let index = degree / 8;
    let mut coefficients = vec![0u8; index + 1];
    coefficients[index] = 1 << (degree % 8);
    FieldElement::new(coefficients, modulus)
}

/// Polynomial long division over GF(2), returning `(quotient, remainder)`.
///
/// When the dividend's degree is below the divisor's the quotient is zero
/// and the remainder is the dividend unchanged.
pub fn full_divide(
    dividend: &FieldElement,
    divisor: &FieldElement,
) -> Result<(FieldElement, FieldElement)> {
    dividend.ensure_same_field(divisor)?;
    if divisor.is_zero() {
        return Err(FieldError::DivisionByZero);
    }

    let modulus = &dividend.modulus;
    let divisor_degree = divisor.degree();
    if dividend.is_zero() || dividend.degree() < divisor_degree {
        return Ok((FieldElement::zero(modulus), dividend.clone()));
    }

    trace!(dividend = %dividend, divisor = %divisor, "dividing");
    let mut quotient = FieldElement::zero(modulus);
    let mut working = dividend.clone();
    while working.degree() >= divisor_degree {
        let delta = working.degree() - divisor_degree;
        let term = monomial(delta, modulus);
        quotient.coefficients = xor_coefficients(&quotient.coefficients, &term.coefficients);

        let eliminated = mul_no_reduction(divisor, &term)?;
        working.coefficients = xor_coefficients(&working.coefficients, &eliminated.coefficients);
        trace!(delta, working = %working, "eliminated leading term");

        if working.is_zero() {
            break;
        }
        // hard stop: the quotient can only cancel out on a degenerate first step
        if quotient.is_zero() {
            break;
        }
    }
    trace!(quotient = %quotient, remainder = %working, "division done");
    Ok((quotient, working))
}
