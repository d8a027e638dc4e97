//! The type name resolver.
//!
//! [`detect`] is the spine of the crate: a total, deterministic mapping
//! from any value to exactly one [`TypeName`]. Resolution order matters:
//! primitives first, then callables and capability-based observables, then
//! the native array and byte-buffer fast paths, then the generic tag
//! lookup, and only then the boxed-primitive rejection, so that legitimate
//! tagged objects are never mistaken for wrappers.

use std::sync::LazyLock;

use core_values::Value;
use regex::Regex;

use crate::capability;
use crate::error::{InspectError, InspectResult};
use crate::type_name::{TypeName, RECOGNIZED_TAGS};

/// Fixed rejection message for boxed primitive wrappers.
pub(crate) const BOXED_PRIMITIVE_MESSAGE: &str =
    "Please don't use object wrappers for primitive types.";

/// Matches any Element-family class tag, so individual element tags need
/// not be enumerated.
static ELEMENT_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:HTML|SVG)\w*Element$").expect("element tag pattern is valid"));

/// Resolve the internal class tag of an object value against the fixed
/// recognized set.
///
/// Element-family tags are re-routed to the unified `HTMLElement` name
/// when the structural element check also passes; unrecognized tags yield
/// `None`.
pub fn get_object_type(value: &Value) -> Option<TypeName> {
    let tag = value.class_tag()?;
    if ELEMENT_TAG_PATTERN.is_match(&tag) && capability::html_element(value) {
        return Some(TypeName::HtmlElement);
    }
    RECOGNIZED_TAGS.get(tag.as_str()).copied()
}

fn is_boxed_primitive(value: &Value) -> bool {
    value.boxed_inner().is_some()
        || matches!(
            value.class_tag().as_deref(),
            Some("String" | "Number" | "Boolean")
        )
}

/// Assign the canonical type name of a value.
///
/// Total over all values; the only failure is the deliberate rejection of
/// boxed primitive wrappers, which signal API misuse rather than a
/// classifiable type.
///
/// # Examples
///
/// ```
/// use core_values::Value;
/// use inspect::{detect, TypeName};
///
/// assert_eq!(detect(&Value::null()), Ok(TypeName::Null));
/// assert_eq!(detect(&Value::number(f64::NAN)), Ok(TypeName::NaN));
/// assert_eq!(detect(&Value::map()), Ok(TypeName::Map));
/// ```
pub fn detect(value: &Value) -> InspectResult<TypeName> {
    match value {
        Value::Null => return Ok(TypeName::Null),
        Value::Undefined => return Ok(TypeName::Undefined),
        Value::String(_) => return Ok(TypeName::String),
        Value::Boolean(_) => return Ok(TypeName::Boolean),
        Value::Number(n) => {
            return if n.is_nan() {
                Ok(TypeName::NaN)
            } else {
                Ok(TypeName::Number)
            };
        }
        Value::BigInt(_) => return Ok(TypeName::BigInt),
        Value::Symbol(_) => return Ok(TypeName::Symbol),
        Value::Object(_) => {}
    }
    if value.is_callable() {
        return Ok(TypeName::Function);
    }
    if capability::observable(value) {
        return Ok(TypeName::Observable);
    }
    if value.has_array_payload() {
        return Ok(TypeName::Array);
    }
    if value.has_bytes_payload() {
        return Ok(TypeName::Buffer);
    }
    if let Some(name) = get_object_type(value) {
        return Ok(name);
    }
    if is_boxed_primitive(value) {
        return Err(InspectError::Type(BOXED_PRIMITIVE_MESSAGE.to_string()));
    }
    Ok(TypeName::Object)
}
