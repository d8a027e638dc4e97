//! Dynamic value model for runtime type inspection.
//!
//! This crate provides the foundational value types that the `inspect`
//! crate classifies: a tagged [`Value`] enum for primitives, and a uniform
//! object representation carrying an internal class tag, properties, a
//! prototype link, and an optional native payload (array elements, byte
//! buffers, map entries, callable functions, and so on).
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of dynamic values
//! - [`ObjectData`] - Shared object state behind `Rc<RefCell<_>>`
//! - [`Payload`] - Native data slot attached to an object
//! - [`SymbolValue`] - Unique symbol primitives and well-known symbols
//! - [`TypedArrayKind`] - The numeric typed-array kinds
//! - [`CallError`] - Failure raised by a native function payload
//!
//! # Examples
//!
//! ```
//! use core_values::Value;
//!
//! let list = Value::array_from(vec![Value::number(1.0), Value::number(2.0)]);
//! assert_eq!(list.type_of(), "object");
//! assert_eq!(list.array_length(), Some(2));
//! assert_eq!(list.class_tag().as_deref(), Some("Array"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod object;
mod symbol;
mod typed_array;
mod value;

pub use error::CallError;
pub use object::{FunctionData, FunctionKind, ObjectData, ObjectRef, Payload, Prototype};
pub use symbol::SymbolValue;
pub use typed_array::TypedArrayKind;
pub use value::Value;
