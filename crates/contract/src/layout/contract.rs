use serde::{Deserialize, Serialize};

use super::Primitive;

/// Expected width, in bytes, of each contract primitive.
///
/// The default is the LP64 data model used by every 64-bit Unix target:
/// 1-byte `char`, 4-byte `int`, 8-byte `long`, 8-byte `double`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub char_width: usize,
    pub int_width: usize,
    pub long_width: usize,
    pub double_width: usize,
}

impl Contract {
    pub fn lp64() -> Self {
        Self {
            char_width: 1,
            int_width: 4,
            long_width: 8,
            double_width: 8,
        }
    }

    pub fn expected(&self, primitive: Primitive) -> usize {
        match primitive {
            Primitive::Char => self.char_width,
            Primitive::Int => self.int_width,
            Primitive::Long => self.long_width,
            Primitive::Double => self.double_width,
        }
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::lp64()
    }
}
