pub use crate::error::PrivacyError;
use crate::member::Member;

/// Name-based access to a type's members that honors the same hiding rules the compiler applies
/// to direct access.
///
/// Implementors list only their visible members and answer every by-name request for a hidden
/// one with [`PrivacyError::Hidden`]. The value of a hidden member never leaves the
/// implementation.
pub trait Introspect {
    const TYPE_NAME: &'static str;

    /// Visible members in declaration order.
    fn members() -> &'static [Member];

    fn has_member(name: &str) -> bool {
        Self::members().iter().any(|m| m.name() == name)
    }

    /// Read a visible field.
    fn get(&self, name: &str) -> Result<i64, PrivacyError>;

    /// Write a visible field.
    fn set(&mut self, name: &str, value: i64) -> Result<(), PrivacyError>;

    /// Call a visible method that takes no arguments.
    fn call(&self, name: &str) -> Result<i64, PrivacyError>;
}
