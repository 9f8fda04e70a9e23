use std::cmp::Ordering;
use std::fmt;

use crate::error::{FieldError, Result};
use crate::modulus::{vectors_match, Modulus};
use crate::poly::{bit_degree, monomial, write_poly, xor_coefficients};

/// An element of GF(2^n) tied to the modulus that defines its field.
///
/// Coefficients are stored lowest-degree byte first: bit `i` of byte `b` is
/// the coefficient of `x^(8b + i)`. The vector length is not normalised, so
/// unreduced results may be longer than the modulus and carry zero high bytes.
#[derive(Clone)]
pub struct FieldElement {
    pub(crate) coefficients: Vec<u8>,
    pub(crate) modulus: Modulus,
}

impl FieldElement {
    pub fn new(coefficients: impl Into<Vec<u8>>, modulus: &Modulus) -> Self {
        Self {
            coefficients: coefficients.into(),
            modulus: modulus.clone(),
        }
    }

    /// Additive identity, stored as a single zero byte
    pub fn zero(modulus: &Modulus) -> Self {
        Self::new(vec![0], modulus)
    }

    /// Multiplicative identity
    pub fn one(modulus: &Modulus) -> Self {
        monomial(0, modulus)
    }

    pub fn from_byte(v0: u8, modulus: &Modulus) -> Self {
        Self::new(vec![v0], modulus)
    }

    pub fn from_byte_pair(v0: u8, v1: u8, modulus: &Modulus) -> Self {
        Self::new(vec![v0, v1], modulus)
    }

    pub fn from_byte_triple(v0: u8, v1: u8, v2: u8, modulus: &Modulus) -> Self {
        Self::new(vec![v0, v1, v2], modulus)
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<u8> {
        self.coefficients
    }

    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Index of the highest set coefficient bit.
    ///
    /// The zero polynomial also reports 0; use [`is_zero`](Self::is_zero)
    /// to tell it apart from the constant polynomials.
    pub fn degree(&self) -> usize {
        bit_degree(&self.coefficients)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&b| b == 0)
    }

    /// True when the first coefficient byte is exactly 1.
    ///
    /// Bytes past the first are not inspected.
    pub fn is_one(&self) -> bool {
        self.coefficients.first() == Some(&1)
    }

    /// Coefficient of `x^power`
    pub fn bit(&self, power: usize) -> bool {
        self.coefficients
            .get(power / 8)
            .map_or(false, |byte| (byte >> (power % 8)) & 1 == 1)
    }

    /// Copy with zero high bytes dropped, keeping at least one byte
    pub fn trimmed(&self) -> Self {
        let len = self
            .coefficients
            .iter()
            .rposition(|&b| b != 0)
            .map_or(1, |i| i + 1);
        let mut coefficients = self.coefficients.clone();
        coefficients.resize(len, 0);
        Self {
            coefficients,
            modulus: self.modulus.clone(),
        }
    }

    pub(crate) fn same_field(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }

    pub(crate) fn ensure_same_field(&self, other: &Self) -> Result<()> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    /// Polynomial addition: XOR over the overlapping bytes, the longer
    /// operand's high bytes carried through unchanged.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.ensure_same_field(rhs)?;
        Ok(Self {
            coefficients: xor_coefficients(&self.coefficients, &rhs.coefficients),
            modulus: self.modulus.clone(),
        })
    }

    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.try_add(rhs)?;
        Ok(())
    }
}

/// Compare coefficient bytes index by index from the lowest byte up; the
/// first differing position decides. Missing bytes read as zero.
fn compare_coefficients(lhs: &[u8], rhs: &[u8]) -> Ordering {
    let len = lhs.len().max(rhs.len());
    (0..len)
        .map(|i| {
            let a = lhs.get(i).copied().unwrap_or(0);
            let b = rhs.get(i).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| lhs.len().cmp(&rhs.len()))
}

// Elements of different fields are neither equal nor unequal.
#[allow(clippy::partialeq_ne_impl)]
impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other) && vectors_match(&self.coefficients, &other.coefficients)
    }

    fn ne(&self, other: &Self) -> bool {
        self.same_field(other) && !vectors_match(&self.coefficients, &other.coefficients)
    }
}

/// Orders by degree, then by the first differing coefficient byte.
///
/// Returns `None` for elements of different fields, so `<`, `>`, `<=` and
/// `>=` all evaluate to false for them.
impl PartialOrd for FieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_field(other) {
            return None;
        }
        Some(
            self.degree()
                .cmp(&other.degree())
                .then_with(|| compare_coefficients(&self.coefficients, &other.coefficients)),
        )
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_poly(f, &self.coefficients)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldElement")
            .field("poly", &format_args!("{}", self))
            .field("coefficients", &self.coefficients)
            .field("modulus", &self.modulus)
            .finish()
    }
}
