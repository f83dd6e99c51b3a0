//! # privfields
//!
//! Hidden and visible members of a struct, with the hiding enforced by rustc's module privacy
//! rather than by naming conventions.
//!
//! [`Foo`] carries one hidden field (`x`), one visible field ([`Foo::y`]), one hidden method and
//! one visible method ([`Foo::public_method`]). Code outside the [`foo`] module can only see the
//! visible half: naming `x` or `hidden_method` anywhere else is a compile error.
//!
//! ```
//! use privfields::Foo;
//!
//! let mut foo = Foo::new();
//! assert_eq!(foo.y, 100);
//! assert_eq!(foo.public_method(), 0);
//!
//! foo.y = 200;
//! assert_eq!(foo.public_method(), 0);
//! ```
//!
//! The [`Introspect`] trait adds a name-based lookup surface that applies the same rules at run
//! time: hidden members are never listed and every attempt to reach one by name produces
//! [`PrivacyError::Hidden`].
//!
//! ```
//! use privfields::{Foo, Introspect, PrivacyError};
//!
//! let foo = Foo::new();
//! assert_eq!(foo.get("y"), Ok(100));
//! assert_eq!(foo.get("x"), Err(PrivacyError::hidden("Foo", "x")));
//! ```
//!
//! ## Features
//!
//! - `tracing`: print introspection lookups to stderr. Meant for debugging only.

#[macro_use]
mod util;

pub mod error;
pub mod foo;
pub mod member;
pub mod traits;

pub use error::PrivacyError;
pub use foo::Foo;
pub use member::{Member, MemberKind};
pub use traits::Introspect;
