use std::fmt;
use std::mem::size_of;

use libc::{c_char, c_double, c_int, c_long};
use serde::{Deserialize, Serialize};

/// The C ABI scalar types whose widths the host contract pins down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Char,
    Int,
    Long,
    Double,
}

impl Primitive {
    /// Every contract primitive, in reporting order.
    pub const ALL: [Primitive; 4] = [
        Primitive::Char,
        Primitive::Int,
        Primitive::Long,
        Primitive::Double,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Double => "double",
        }
    }

    /// Width of this type on the running host, in bytes.
    pub fn observed_width(&self) -> usize {
        match self {
            Primitive::Char => size_of::<c_char>(),
            Primitive::Int => size_of::<c_int>(),
            Primitive::Long => size_of::<c_long>(),
            Primitive::Double => size_of::<c_double>(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
