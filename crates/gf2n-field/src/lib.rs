//! Binary extension fields GF(2^n) over byte-vector polynomials
//!
//! Elements are bit-polynomials stored lowest-degree byte first and reduced
//! modulo an irreducible polynomial chosen at runtime. Every element carries
//! its [`Modulus`]; combining elements of different fields is an error.
//!
//! # Features
//!
//! - `rand` (default): sample random elements with [`FieldElement::random`]
//! - `cli` (default): build the `gf2n` command-line binary
//!
//! # Examples
//!
//! ```rust
//! use gf2n_field::{moduli, FieldElement, Modulus};
//!
//! // x^17 + x^3 + 1
//! let p = Modulus::from(moduli::GF2_17);
//! let a = FieldElement::from_byte(123, &p);
//!
//! let inv = a.inverse()?;
//! assert!((&a * &inv)?.is_one());
//! # Ok::<(), gf2n_field::FieldError>(())
//! ```

mod elem;
mod error;
pub mod euclid;
mod modulus;
mod ops;
pub mod poly;

pub use elem::FieldElement;
pub use error::{FieldError, Result};
pub use euclid::{gcd, ExtendedGcd};
pub use modulus::{moduli, vectors_match, Modulus};
pub use poly::{full_divide, monomial, mul_by_x_no_reduction, mul_no_reduction};
