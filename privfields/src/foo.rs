use crate::{error::PrivacyError, member::Member, traits::Introspect};
use std::fmt;

const VISIBLE_MEMBERS: &[Member] = &[Member::field("y"), Member::method("public_method")];

// Names are kept only to report denials; they are never listed.
const HIDDEN_MEMBERS: &[&str] = &["x", "hidden_method"];

/// A struct with one hidden and one visible field, and one hidden and one visible method.
///
/// Only code inside this module can touch `x` or call `hidden_method`. Everywhere else the
/// compiler rejects the program before it runs:
///
/// ```compile_fail,E0616
/// let foo = privfields::Foo::new();
/// let _x = foo.x;
/// ```
///
/// ```compile_fail,E0616
/// let mut foo = privfields::Foo::new();
/// foo.x = 0;
/// ```
///
/// ```compile_fail,E0624
/// let foo = privfields::Foo::new();
/// let _sum = foo.hidden_method();
/// ```
///
/// Neither can an instance with a chosen hidden value be forged or taken apart from outside:
///
/// ```compile_fail,E0451
/// let _foo = privfields::Foo { x: 0, y: 100 };
/// ```
///
/// ```compile_fail,E0451
/// let _foo = privfields::Foo { y: 5, ..privfields::Foo::new() };
/// ```
///
/// ```compile_fail,E0451
/// let privfields::Foo { x, .. } = privfields::Foo::new();
/// println!("{x}");
/// ```
///
/// The visible half is open to anyone holding the instance:
///
/// ```
/// let mut foo = privfields::Foo::new();
/// assert_eq!(foo.y, 100);
/// assert_eq!(foo.public_method(), 0);
/// foo.y = 200;
/// assert_eq!(foo.y, 200);
/// assert_eq!(foo.public_method(), 0);
/// ```
#[derive(Clone)]
pub struct Foo {
    x:     i64,
    pub y: i64,
}

impl Foo {
    /// Creates an instance with the hidden `x` set to `42` and `y` set to `100`.
    pub fn new() -> Self {
        Self { x: 42, y: 100 }
    }

    fn hidden_method(&self) -> i64 {
        self.x.wrapping_add(self.y)
    }

    /// `hidden_method() - x - y`, which is `0` for any value of `y`.
    pub fn public_method(&self) -> i64 {
        self.hidden_method().wrapping_sub(self.x).wrapping_sub(self.y)
    }

    fn deny(name: &str) -> PrivacyError {
        if HIDDEN_MEMBERS.iter().any(|hidden| *hidden == name) {
            pftrace!("denied hidden member", name);
            PrivacyError::hidden(Self::TYPE_NAME, name)
        }
        else {
            PrivacyError::no_such_member(Self::TYPE_NAME, name)
        }
    }
}

impl Default for Foo {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Foo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Foo").field("y", &self.y).finish_non_exhaustive()
    }
}

impl Introspect for Foo {
    const TYPE_NAME: &'static str = "Foo";

    fn members() -> &'static [Member] {
        VISIBLE_MEMBERS
    }

    fn get(&self, name: &str) -> Result<i64, PrivacyError> {
        pftrace!("get", name);
        match name {
            "y" => Ok(self.y),
            "public_method" => Err(PrivacyError::not_a_field(Self::TYPE_NAME, name)),
            _ => Err(Self::deny(name)),
        }
    }

    fn set(&mut self, name: &str, value: i64) -> Result<(), PrivacyError> {
        pftrace!("set", name, value);
        match name {
            "y" => {
                self.y = value;
                Ok(())
            }
            "public_method" => Err(PrivacyError::not_a_field(Self::TYPE_NAME, name)),
            _ => Err(Self::deny(name)),
        }
    }

    fn call(&self, name: &str) -> Result<i64, PrivacyError> {
        pftrace!("call", name);
        match name {
            "public_method" => Ok(self.public_method()),
            "y" => Err(PrivacyError::not_a_method(Self::TYPE_NAME, name)),
            _ => Err(Self::deny(name)),
        }
    }
}
