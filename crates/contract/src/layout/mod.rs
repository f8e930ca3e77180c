//! Primitive data-layout verification.
//!
//! The host's C ABI fixes a storage width for each scalar type; everything
//! that reinterprets raw bytes leans on those widths. This module observes
//! the live widths with `size_of` over the `libc` aliases and checks them
//! against a declared [`Contract`]. Checking is a portability assertion,
//! not an algorithm: the only possible outcome per primitive is
//! expected-equals-observed or a [`CheckError::WidthMismatch`].

pub use self::contract::Contract;
pub use self::primitive::Primitive;
pub use self::report::{Report, WidthCheck};

pub mod contract;
pub mod primitive;
pub mod report;

use crate::common::error::CheckError;

/// Checks one primitive against the contract.
pub fn check(primitive: Primitive, contract: &Contract) -> Result<(), CheckError> {
    let expected = contract.expected(primitive);
    let observed = primitive.observed_width();
    if expected == observed {
        Ok(())
    } else {
        Err(CheckError::WidthMismatch {
            primitive,
            expected,
            observed,
        })
    }
}

/// Checks every contract primitive and collects the outcomes.
///
/// A mismatch on one primitive does not stop the remaining checks; the
/// returned report always holds one entry per primitive, in the order of
/// [`Primitive::ALL`].
pub fn verify(contract: &Contract) -> Report {
    let checks = Primitive::ALL
        .iter()
        .map(|&primitive| WidthCheck {
            primitive,
            expected: contract.expected(primitive),
            observed: primitive.observed_width(),
        })
        .collect();
    Report::new(checks)
}

/// Checks the host against the default (LP64) contract.
pub fn verify_default() -> Report {
    verify(&Contract::default())
}
