//! Host platform contract checks.
//!
//! This crate pins down two assumptions that code handling raw data layouts
//! tends to make without saying so:
//!
//! - The C ABI scalar types (`char`, `int`, `long`, `double`) have the
//!   widths the LP64 data model promises: 1, 4, 8, and 8 bytes. The
//!   [`layout`] module observes the live widths through `libc` and checks
//!   them against a declared [`layout::Contract`], producing a
//!   [`layout::Report`] that records every outcome.
//! - Building a two-part value from bare integers is something a caller
//!   must spell out. The [`record`] module's [`record::Field`] converts
//!   from a single offset, but a `(offset, width)` pair never converts
//!   implicitly; sized fields come only from [`record::Field::new`] or
//!   in-place construction on a [`record::Record`].
//!
//! Both checks are cheap, synchronous, and side-effect free. A width
//! mismatch is reported with the offending type and both widths; it never
//! suppresses the remaining checks.

pub mod common;
pub mod layout;
pub mod record;

pub use common::error::CheckError;
pub use layout::{Contract, Primitive, Report};
pub use record::{Field, Record};
