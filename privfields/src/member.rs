use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Method,
}

/// Descriptor of a visible member, as listed by [`Introspect::members`](crate::Introspect::members).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Member {
    name: &'static str,
    kind: MemberKind,
}

impl Member {
    pub const fn field(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Field,
        }
    }

    pub const fn method(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Method,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline]
    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    #[inline]
    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MemberKind::Field => write!(f, "{}", self.name),
            MemberKind::Method => write!(f, "{}()", self.name),
        }
    }
}
