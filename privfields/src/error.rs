use thiserror::Error;

/// Error type of the name-based [`Introspect`](crate::Introspect) surface.
///
/// Every variant names the owning type and the member that was asked for. A hidden member's
/// name may appear here, its value never does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrivacyError {
    /// The member exists but is hidden inside its defining module.
    #[error("member '{member}' is hidden inside '{owner}'")]
    Hidden { owner: &'static str, member: String },
    /// The type has no member with this name.
    #[error("'{owner}' has no member named '{member}'")]
    NoSuchMember { owner: &'static str, member: String },
    /// A method name was used where a field is expected.
    #[error("'{owner}::{member}' is a method, not a field")]
    NotAField { owner: &'static str, member: String },
    /// A field name was used where a method is expected.
    #[error("'{owner}::{member}' is a field, not a method")]
    NotAMethod { owner: &'static str, member: String },
}

impl PrivacyError {
    /// A by-name request reached a hidden member.
    pub fn hidden<S: ToString>(owner: &'static str, member: S) -> PrivacyError {
        PrivacyError::Hidden {
            owner,
            member: member.to_string(),
        }
    }

    /// The requested name is not a member of `owner`.
    pub fn no_such_member<S: ToString>(owner: &'static str, member: S) -> PrivacyError {
        PrivacyError::NoSuchMember {
            owner,
            member: member.to_string(),
        }
    }

    /// A method was requested where a field is expected.
    pub fn not_a_field<S: ToString>(owner: &'static str, member: S) -> PrivacyError {
        PrivacyError::NotAField {
            owner,
            member: member.to_string(),
        }
    }

    /// A field was requested where a method is expected.
    pub fn not_a_method<S: ToString>(owner: &'static str, member: S) -> PrivacyError {
        PrivacyError::NotAMethod {
            owner,
            member: member.to_string(),
        }
    }

    /// Name of the member the failed lookup was about.
    pub fn member(&self) -> &str {
        match self {
            PrivacyError::Hidden { member, .. }
            | PrivacyError::NoSuchMember { member, .. }
            | PrivacyError::NotAField { member, .. }
            | PrivacyError::NotAMethod { member, .. } => member,
        }
    }

    /// Name of the type the lookup was made on.
    pub fn owner(&self) -> &'static str {
        match self {
            PrivacyError::Hidden { owner, .. }
            | PrivacyError::NoSuchMember { owner, .. }
            | PrivacyError::NotAField { owner, .. }
            | PrivacyError::NotAMethod { owner, .. } => owner,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, PrivacyError::Hidden { .. })
    }
}
