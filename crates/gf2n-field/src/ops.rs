//! Reduced field arithmetic and operator overloads
//!
//! Operators return `Result<FieldElement>`: `(&a * &b)?` fails with
//! [`FieldError::FieldMismatch`](crate::FieldError::FieldMismatch) when the
//! operands come from different fields.

use std::ops::{Add, Mul};

use crate::elem::FieldElement;
use crate::error::Result;
use crate::poly::{full_divide, mul_no_reduction};

impl FieldElement {
    /// Product reduced modulo the field polynomial
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        let product = mul_no_reduction(self, rhs)?;
        let (_, remainder) = full_divide(&product, &self.modulus.to_element())?;
        Ok(remainder)
    }

    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.try_mul(rhs)?;
        Ok(())
    }

    /// `self * rhs^-1`
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.try_mul(&rhs.inverse()?)
    }

    /// Square-and-multiply exponentiation; `pow(0)` is one
    pub fn pow(&self, mut exp: u64) -> Result<Self> {
        let mut result = Self::one(&self.modulus);
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(result)
    }

    /// Uniformly random element of degree below the modulus degree
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, modulus: &crate::Modulus) -> Self {
        let degree = modulus.degree();
        if degree == 0 {
            return Self::zero(modulus);
        }
        let mut coefficients = vec![0u8; degree.div_ceil(8)];
        rng.fill_bytes(&mut coefficients);
        let spare = coefficients.len() * 8 - degree;
        if let Some(top) = coefficients.last_mut() {
            *top &= 0xff >> spare;
        }
        Self::new(coefficients, modulus)
    }
}

impl Add for &FieldElement {
    type Output = Result<FieldElement>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Add for FieldElement {
    type Output = Result<FieldElement>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl Mul for &FieldElement {
    type Output = Result<FieldElement>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs)
    }
}

impl Mul for FieldElement {
    type Output = Result<FieldElement>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::modulus::{moduli, Modulus};

    #[test]
    fn test_mul_reduces() {
        let p = Modulus::from(moduli::GF2_8);
        // x^7 * x = x^8 = x^4 + x^3 + x + 1
        let a = FieldElement::from_byte(0x80, &p);
        let x = FieldElement::from_byte(0x02, &p);
        let product = a.try_mul(&x).unwrap();
        assert_eq!(product.trimmed().coefficients(), &[0x1b]);
        assert!(product.degree() < p.degree());
    }

    #[test]
    fn test_aes_mul_vector() {
        // {57} * {83} = {c1}
        let p = Modulus::from(moduli::GF2_8);
        let a = FieldElement::from_byte(0x57, &p);
        let b = FieldElement::from_byte(0x83, &p);
        assert_eq!((&a * &b).unwrap().trimmed().coefficients(), &[0xc1]);
    }

    #[test]
    fn test_operators() {
        let p = Modulus::from(moduli::GF2_17);
        let a = FieldElement::from_byte_pair(0x34, 0x12, &p);
        let b = FieldElement::from_byte(0x56, &p);
        assert_eq!((&a + &b).unwrap(), a.try_add(&b).unwrap());
        assert_eq!((&a * &b).unwrap(), a.try_mul(&b).unwrap());
        assert_eq!((a.clone() + b.clone()).unwrap(), a.try_add(&b).unwrap());
        assert_eq!((a.clone() * b.clone()).unwrap(), a.try_mul(&b).unwrap());
    }

    #[test]
    fn test_mul_assign() {
        let p = Modulus::from(moduli::GF2_8);
        let mut acc = FieldElement::one(&p);
        let x = FieldElement::from_byte(0x02, &p);
        for _ in 0..8 {
            acc.try_mul_assign(&x).unwrap();
        }
        assert_eq!(acc.trimmed().coefficients(), &[0x1b]);
    }

    #[test]
    fn test_operator_field_mismatch() {
        let a = FieldElement::from_byte(3, &Modulus::from(moduli::GF2_17));
        let b = FieldElement::from_byte(3, &Modulus::from(moduli::GF2_8));
        assert_eq!((&a + &b).unwrap_err(), FieldError::FieldMismatch);
        assert_eq!((&a * &b).unwrap_err(), FieldError::FieldMismatch);
        let mut c = a.clone();
        assert_eq!(c.try_mul_assign(&b), Err(FieldError::FieldMismatch));
    }

    #[test]
    fn test_fermat_little_theorem() {
        // a^(2^n - 1) = 1 for all a != 0 in GF(2^n)
        let p = Modulus::from(moduli::GF2_8);
        let a = FieldElement::from_byte(0x1d, &p);
        assert!(a.pow(255).unwrap().is_one());
        assert_eq!(a.pow(256).unwrap().trimmed(), a);

        let p = Modulus::from(moduli::GF2_17);
        let a = FieldElement::from_byte_pair(0x34, 0x12, &p);
        assert!(a.pow((1 << 17) - 1).unwrap().is_one());
    }

    #[test]
    fn test_pow_small() {
        let p = Modulus::from(moduli::GF2_17);
        let a = FieldElement::from_byte(0x07, &p);
        assert!(a.pow(0).unwrap().is_one());
        assert_eq!(a.pow(1).unwrap(), a.try_mul(&FieldElement::one(&p)).unwrap());
        let cube = a.try_mul(&a).unwrap().try_mul(&a).unwrap();
        assert_eq!(a.pow(3).unwrap().trimmed(), cube.trimmed());
    }

    #[test]
    fn test_div() {
        let p = Modulus::from(moduli::GF2_17);
        let a = FieldElement::from_byte_pair(0xef, 0xbe, &p);
        let b = FieldElement::from_byte(0x5a, &p);
        let q = a.try_div(&b).unwrap();
        assert_eq!(q.try_mul(&b).unwrap().trimmed(), a);
        assert_eq!(a.try_div(&FieldElement::zero(&p)).unwrap_err(), FieldError::NoInverse);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random_stays_below_modulus_degree() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        for bytes in [&moduli::GF2_3[..], &moduli::GF2_8[..], &moduli::GF2_17[..]] {
            let p = Modulus::new(bytes);
            for _ in 0..64 {
                let e = FieldElement::random(&mut rng, &p);
                assert!(e.is_zero() || e.degree() < p.degree());
                assert_eq!(e.modulus(), &p);
            }
        }
    }
}
