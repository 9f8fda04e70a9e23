use std::fmt;
use std::sync::Arc;

use crate::elem::FieldElement;
use crate::poly::{bit_degree, write_poly};

/// Irreducible polynomials, lowest-degree byte first
pub mod moduli {
    /// x^2 + x + 1
    pub const GF2_2: [u8; 1] = [0x07];
    /// x^3 + x + 1
    pub const GF2_3: [u8; 1] = [0x0b];
    /// x^7 + x + 1
    pub const GF2_7: [u8; 1] = [0x83];
    /// x^8 + x^4 + x^3 + x + 1 (AES)
    pub const GF2_8: [u8; 2] = [0x1b, 0x01];
    /// x^13 + x^4 + x^3 + x + 1
    pub const GF2_13: [u8; 2] = [0x1b, 0x20];
    /// x^16 + x^5 + x^3 + x^2 + 1
    pub const GF2_16: [u8; 3] = [0x2d, 0x00, 0x01];
    /// x^17 + x^3 + 1
    pub const GF2_17: [u8; 3] = [0x09, 0x00, 0x02];
}

/// The defining polynomial of a field GF(2^n).
///
/// Bit `i` of byte `b` is the coefficient of `x^(8b + i)`. Cloning shares
/// the underlying bytes, so every element of a field can carry its modulus.
#[derive(Clone)]
pub struct Modulus {
    bytes: Arc<[u8]>,
}

impl Modulus {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            bytes: Arc::from(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Degree of the polynomial, i.e. `n` for GF(2^n)
    pub fn degree(&self) -> usize {
        bit_degree(&self.bytes)
    }

    /// The modulus itself as an element of its own field
    pub fn to_element(&self) -> FieldElement {
        FieldElement::new(self.bytes.to_vec(), self)
    }
}

impl PartialEq for Modulus {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes) || vectors_match(&self.bytes, &other.bytes)
    }
}

impl Eq for Modulus {}

impl From<&[u8]> for Modulus {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for Modulus {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_poly(f, &self.bytes)
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus({})", self)
    }
}

/// Byte-for-byte equality: same length, same content
pub fn vectors_match(lhs: &[u8], rhs: &[u8]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| a == b)
}
