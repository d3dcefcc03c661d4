//! Customer identifier.

use std::fmt;

/// Sequence number of a customer, assigned in arrival order starting at 1.
///
/// `CustomerId(0)` is never handed out by the engine; it is the `Default`
/// so an uninitialised id is visibly invalid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CustomerId(pub u64);

impl CustomerId {
    pub const FIRST: CustomerId = CustomerId(1);

    /// The id of the customer arriving after `self`.
    #[inline]
    pub fn next(self) -> CustomerId {
        CustomerId(self.0 + 1)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
