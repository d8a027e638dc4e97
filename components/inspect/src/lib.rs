//! Runtime type classification and assertions for dynamic values.
//!
//! Given a [`Value`] of unknown shape, [`detect`] assigns exactly one
//! canonical [`TypeName`]; the [`is`] module exposes boolean predicates
//! for every common type category, refinement, and emptiness condition;
//! the [`assert`] module provides a throwing counterpart for each
//! predicate; and [`any`]/[`all`] test a predicate family across several
//! values at once.
//!
//! Classification is ordered and total: primitive checks come first, then
//! structural capability checks where class tags are unreliable across
//! realms (observables, promise-likes), then the recognized-tag lookup,
//! with a plain `Object` fallback. The only value the classifier refuses
//! is a boxed primitive wrapper, which is deliberate API misuse rather
//! than a classifiable type.
//!
//! # Examples
//!
//! ```
//! use core_values::Value;
//! use inspect::{assert, detect, is, TypeName};
//!
//! let value = Value::array_from(vec![Value::number(1.0), Value::number(2.0)]);
//!
//! assert_eq!(detect(&value), Ok(TypeName::Array));
//! assert!(is::non_empty_array(&value));
//! assert!(assert::array(&value, None).is_ok());
//! assert!(assert::string(&value, None).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod assert;
mod capability;
mod combinators;
mod detect;
mod error;
pub mod is;
mod type_name;

pub use combinators::{all, any, assert_all, assert_any};
pub use detect::{detect, get_object_type};
pub use error::{InspectError, InspectResult};
pub use type_name::{TypeName, PRIMITIVE_TYPE_NAMES, TYPED_ARRAY_TYPE_NAMES};

pub use core_values::Value;

/// A unary predicate over values.
///
/// Plain function pointers so predicate lists can be compared against the
/// registered description table when formatting combinator failures.
pub type Predicate = fn(&Value) -> bool;
