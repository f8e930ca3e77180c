use serde::Serialize;

use super::Primitive;

/// Outcome of checking one primitive against the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WidthCheck {
    pub primitive: Primitive,
    pub expected: usize,
    pub observed: usize,
}

impl WidthCheck {
    pub fn passed(&self) -> bool {
        self.expected == self.observed
    }
}

/// Outcome of a full contract verification.
///
/// Holds one [`WidthCheck`] per contract primitive. A failed check is
/// recorded alongside the ones that passed; nothing is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    checks: Vec<WidthCheck>,
}

impl Report {
    pub(crate) fn new(checks: Vec<WidthCheck>) -> Self {
        Self { checks }
    }

    pub fn checks(&self) -> &[WidthCheck] {
        &self.checks
    }

    /// The checks whose observed width broke the contract.
    pub fn mismatches(&self) -> impl Iterator<Item = &WidthCheck> {
        self.checks.iter().filter(|check| !check.passed())
    }

    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(WidthCheck::passed)
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
