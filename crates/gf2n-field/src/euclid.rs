//! Extended Euclidean algorithm and multiplicative inversion
//!
//! The Bézout recurrence runs on unreduced polynomials: quotients are
//! folded into the coefficient sequences with [`mul_no_reduction`] and XOR,
//! never with the modular product.

use std::mem;

use tracing::{debug, trace};

use crate::elem::FieldElement;
use crate::error::{FieldError, Result};
use crate::poly::{full_divide, mul_no_reduction};

/// Result of [`gcd`]: `gcd = p·a + q·b`
#[derive(Clone, Debug)]
pub struct ExtendedGcd {
    pub gcd: FieldElement,
    pub p: FieldElement,
    pub q: FieldElement,
}

/// Greatest common divisor of two elements of the same field together with
/// their Bézout coefficients.
///
/// If the smaller operand is zero the other operand is returned as the gcd
/// and both coefficients are zero.
pub fn gcd(a: &FieldElement, b: &FieldElement) -> Result<ExtendedGcd> {
    a.ensure_same_field(b)?;
    let modulus = a.modulus();

    // always divide the larger-degree element by the smaller
    let (mut wa, mut wb, swapped) = if a < b {
        (a.clone(), b.clone(), false)
    } else {
        (b.clone(), a.clone(), true)
    };

    if wa.is_zero() {
        return Ok(ExtendedGcd {
            gcd: wb,
            p: FieldElement::zero(modulus),
            q: FieldElement::zero(modulus),
        });
    }

    // remainder_k = p_k·wa + q_k·wb
    let mut p_prev = FieldElement::one(modulus);
    let mut p_cur = FieldElement::zero(modulus);
    let mut q_prev = FieldElement::zero(modulus);
    let mut q_cur = FieldElement::one(modulus);

    loop {
        let (quotient, remainder) = full_divide(&wa, &wb)?;
        let p_next = p_prev.try_add(&mul_no_reduction(&quotient, &p_cur)?)?;
        let q_next = q_prev.try_add(&mul_no_reduction(&quotient, &q_cur)?)?;

        wa = mem::replace(&mut wb, remainder);
        p_prev = mem::replace(&mut p_cur, p_next);
        q_prev = mem::replace(&mut q_cur, q_next);
        trace!(remainder = %wb, "euclid step");

        if wb.is_zero() {
            break;
        }
    }

    if swapped {
        mem::swap(&mut p_prev, &mut q_prev);
    }
    trace!(gcd = %wa, p = %p_prev, q = %q_prev, "extended gcd");

    Ok(ExtendedGcd {
        gcd: wa,
        p: p_prev,
        q: q_prev,
    })
}

impl FieldElement {
    /// Multiplicative inverse modulo the field polynomial.
    ///
    /// Fails with [`FieldError::NoInverse`] for zero, and for any element
    /// sharing a factor with a modulus that is not irreducible.
    pub fn inverse(&self) -> Result<Self> {
        let ideal = self.modulus().to_element();
        let ExtendedGcd { gcd, p, .. } = gcd(self, &ideal)?;
        if !gcd.is_one() {
            debug!(element = %self, gcd = %gcd, "element has no inverse");
            return Err(FieldError::NoInverse);
        }
        Ok(p)
    }
}
