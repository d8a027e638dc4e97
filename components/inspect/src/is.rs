//! The predicate namespace.
//!
//! Every predicate is a pure `fn(&Value) -> bool` (a few take extra
//! arguments). Predicates never fail for "false" inputs; only `in_range`
//! can reject its own malformed range argument. The unary predicates all
//! have throwing counterparts in [`crate::assert`].

use std::rc::Rc;
use std::sync::LazyLock;

use core_values::{FunctionKind, Prototype, Value};
use regex::Regex;

use crate::capability;
use crate::detect::get_object_type;
use crate::error::{InspectError, InspectResult};
use crate::type_name::TypeName;
use crate::Predicate;

pub use crate::combinators::{all, any};

/// Largest integer exactly representable in a double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

static URL_STRING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:\S+$").expect("URL pattern is valid"));

fn object_of_type(value: &Value, name: TypeName) -> bool {
    get_object_type(value) == Some(name)
}

// --- Primitives ---

/// The undefined value.
pub fn undefined(value: &Value) -> bool {
    value.is_undefined()
}

/// The null value.
pub fn null(value: &Value) -> bool {
    value.is_null()
}

/// Null or undefined.
pub fn null_or_undefined(value: &Value) -> bool {
    null(value) || undefined(value)
}

/// A string primitive.
pub fn string(value: &Value) -> bool {
    value.is_string()
}

/// A number primitive, excluding NaN.
pub fn number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_nan())
}

/// The not-a-number value.
pub fn nan(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_nan())
}

/// A boolean primitive.
pub fn boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// A symbol primitive.
pub fn symbol(value: &Value) -> bool {
    value.is_symbol()
}

/// A big integer primitive.
pub fn bigint(value: &Value) -> bool {
    value.is_bigint()
}

/// Any primitive: null, undefined, string, number (incl. NaN), boolean,
/// symbol, or bigint.
pub fn primitive(value: &Value) -> bool {
    !value.is_object()
}

/// A valid property key: string, number, or symbol.
pub fn property_key(value: &Value) -> bool {
    string(value) || number(value) || symbol(value)
}

// --- Functions ---

/// Any callable value.
pub fn function(value: &Value) -> bool {
    value.is_callable()
}

/// A generator function.
pub fn generator_function(value: &Value) -> bool {
    value.function_kind() == Some(FunctionKind::Generator)
}

/// An async function.
pub fn async_function(value: &Value) -> bool {
    value.function_kind() == Some(FunctionKind::AsyncFunction)
}

/// An async generator function.
pub fn async_generator_function(value: &Value) -> bool {
    value.function_kind() == Some(FunctionKind::AsyncGenerator)
}

/// A bound function.
pub fn bound_function(value: &Value) -> bool {
    value.function_kind() == Some(FunctionKind::Bound)
}

// --- Objects and built-in kinds ---

/// Any object, including arrays, collections, and functions.
pub fn object(value: &Value) -> bool {
    value.is_object()
}

/// A plain data object: base or null prototype, no string-tag override,
/// not iterable, and not advertising any other built-in category.
pub fn plain_object(value: &Value) -> bool {
    if value.class_tag().as_deref() != Some("Object") {
        return false;
    }
    if value.to_string_tag().is_some() || capability::iterable(value) {
        return false;
    }
    matches!(
        value.prototype(),
        Some(Prototype::Base) | Some(Prototype::Null)
    )
}

/// A native array.
pub fn array(value: &Value) -> bool {
    value.has_array_payload()
}

/// The host byte-buffer type.
pub fn buffer(value: &Value) -> bool {
    value.has_bytes_payload()
}

/// A Blob.
pub fn blob(value: &Value) -> bool {
    object_of_type(value, TypeName::Blob)
}

/// A regular expression object.
pub fn regexp(value: &Value) -> bool {
    object_of_type(value, TypeName::RegExp)
}

/// A date object.
pub fn date(value: &Value) -> bool {
    object_of_type(value, TypeName::Date)
}

/// An error object.
pub fn error(value: &Value) -> bool {
    object_of_type(value, TypeName::Error)
}

/// A map collection.
pub fn map(value: &Value) -> bool {
    object_of_type(value, TypeName::Map)
}

/// A set collection.
pub fn set(value: &Value) -> bool {
    object_of_type(value, TypeName::Set)
}

/// A weak map collection.
pub fn weak_map(value: &Value) -> bool {
    object_of_type(value, TypeName::WeakMap)
}

/// A weak set collection.
pub fn weak_set(value: &Value) -> bool {
    object_of_type(value, TypeName::WeakSet)
}

/// A weak reference.
pub fn weak_ref(value: &Value) -> bool {
    object_of_type(value, TypeName::WeakRef)
}

/// A native promise, by class tag.
pub fn native_promise(value: &Value) -> bool {
    object_of_type(value, TypeName::Promise)
}

/// A promise: native by tag, or promise-shaped by structure, so
/// cross-realm and subclassed promises are recognized.
pub fn promise(value: &Value) -> bool {
    native_promise(value) || capability::promise_like(value)
}

/// A generator object.
pub fn generator(value: &Value) -> bool {
    capability::generator_object(value)
}

/// An async generator object.
pub fn async_generator(value: &Value) -> bool {
    capability::async_generator_object(value)
}

/// A synchronously iterable value.
pub fn iterable(value: &Value) -> bool {
    capability::iterable(value)
}

/// An asynchronously iterable value.
pub fn async_iterable(value: &Value) -> bool {
    capability::async_iterable(value)
}

/// An observable-shaped value.
pub fn observable(value: &Value) -> bool {
    capability::observable(value)
}

/// A node-style stream.
pub fn node_stream(value: &Value) -> bool {
    capability::node_stream(value)
}

/// A host UI element.
pub fn html_element(value: &Value) -> bool {
    capability::html_element(value)
}

/// Any numeric typed array.
pub fn typed_array(value: &Value) -> bool {
    get_object_type(value).map(|n| n.is_typed_array()).unwrap_or(false)
}

/// An Int8Array.
pub fn int8_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Int8Array)
}

/// A Uint8Array.
pub fn uint8_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Uint8Array)
}

/// A Uint8ClampedArray.
pub fn uint8_clamped_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Uint8ClampedArray)
}

/// An Int16Array.
pub fn int16_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Int16Array)
}

/// A Uint16Array.
pub fn uint16_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Uint16Array)
}

/// An Int32Array.
pub fn int32_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Int32Array)
}

/// A Uint32Array.
pub fn uint32_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Uint32Array)
}

/// A Float32Array.
pub fn float32_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Float32Array)
}

/// A Float64Array.
pub fn float64_array(value: &Value) -> bool {
    object_of_type(value, TypeName::Float64Array)
}

/// A BigInt64Array.
pub fn bigint64_array(value: &Value) -> bool {
    object_of_type(value, TypeName::BigInt64Array)
}

/// A BigUint64Array.
pub fn biguint64_array(value: &Value) -> bool {
    object_of_type(value, TypeName::BigUint64Array)
}

/// An ArrayBuffer.
pub fn array_buffer(value: &Value) -> bool {
    object_of_type(value, TypeName::ArrayBuffer)
}

/// A SharedArrayBuffer.
pub fn shared_array_buffer(value: &Value) -> bool {
    object_of_type(value, TypeName::SharedArrayBuffer)
}

/// A DataView.
pub fn data_view(value: &Value) -> bool {
    object_of_type(value, TypeName::DataView)
}

/// A URL object.
pub fn url_instance(value: &Value) -> bool {
    object_of_type(value, TypeName::Url)
}

/// A string holding a URL.
pub fn url_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if URL_STRING_PATTERN.is_match(s))
}

/// A URLSearchParams object.
pub fn url_search_params(value: &Value) -> bool {
    object_of_type(value, TypeName::UrlSearchParams)
}

/// A FormData object.
pub fn form_data(value: &Value) -> bool {
    object_of_type(value, TypeName::FormData)
}

// --- Numeric refinements ---

/// An integer-valued number.
pub fn integer(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite() && n.trunc() == *n)
}

/// An integer exactly representable without precision loss.
pub fn safe_integer(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite() && n.trunc() == *n && n.abs() <= MAX_SAFE_INTEGER)
}

/// Positive or negative infinity.
pub fn infinite(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_infinite())
}

/// An even integer.
pub fn even_integer(value: &Value) -> bool {
    integer(value) && matches!(value, Value::Number(n) if n.abs() % 2.0 == 0.0)
}

/// An odd integer.
pub fn odd_integer(value: &Value) -> bool {
    integer(value) && matches!(value, Value::Number(n) if n.abs() % 2.0 == 1.0)
}

/// A safe non-negative integer, usable as a sequence length.
pub fn valid_length(value: &Value) -> bool {
    safe_integer(value) && matches!(value, Value::Number(n) if *n >= 0.0)
}

/// Membership of a numeric range.
///
/// A single endpoint makes zero the other endpoint; two endpoints are
/// order-insensitive. Any other range shape is an argument error.
/// Non-number values are simply out of range.
pub fn in_range(value: &Value, range: &[f64]) -> InspectResult<bool> {
    let (lower, upper) = match range {
        [only] => (only.min(0.0), only.max(0.0)),
        [a, b] => (a.min(*b), a.max(*b)),
        _ => {
            return Err(InspectError::Argument(format!(
                "Invalid range given, expected one or two endpoints, received {}.",
                range.len()
            )));
        }
    };
    Ok(matches!(value, Value::Number(n) if *n >= lower && *n <= upper))
}

// --- String refinements ---

/// The empty string.
pub fn empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

/// A string with at least one character.
pub fn non_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty())
}

/// A non-empty string of only whitespace.
pub fn whitespace_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty() && s.chars().all(char::is_whitespace))
}

/// The empty string, or whitespace only.
pub fn empty_string_or_whitespace(value: &Value) -> bool {
    empty_string(value) || whitespace_string(value)
}

/// A string with at least one non-whitespace character.
pub fn non_empty_string_and_not_whitespace(value: &Value) -> bool {
    string(value) && !empty_string_or_whitespace(value)
}

/// A non-empty, non-whitespace string convertible to a finite number.
pub fn numeric_string(value: &Value) -> bool {
    let Value::String(s) = value else { return false };
    let trimmed = s.trim();
    !trimmed.is_empty()
        && trimmed
            .parse::<f64>()
            .map(|n| n.is_finite())
            .unwrap_or(false)
}

// --- Structure and emptiness ---

/// Anything with a valid length property that is not callable.
pub fn array_like(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Object(_) => {
            !value.is_callable()
                && value
                    .get("length")
                    .map(|l| valid_length(&l))
                    .unwrap_or(false)
        }
        _ => false,
    }
}

/// An array whose length matches the guard list and whose elements
/// satisfy the corresponding positional predicates.
///
/// Short-circuits on the first mismatch; order-sensitive.
pub fn tuple_like(value: &Value, guards: &[Predicate]) -> bool {
    match value.array_elements() {
        Some(elements) if elements.len() == guards.len() => {
            elements.iter().zip(guards).all(|(element, guard)| guard(element))
        }
        _ => false,
    }
}

/// An empty array.
pub fn empty_array(value: &Value) -> bool {
    value.array_length() == Some(0)
}

/// An array with at least one element.
pub fn non_empty_array(value: &Value) -> bool {
    value.array_length().map(|n| n > 0).unwrap_or(false)
}

/// An object (excluding maps and sets) with zero own enumerable keys.
pub fn empty_object(value: &Value) -> bool {
    object(value)
        && !value.has_map_payload()
        && !value.has_set_payload()
        && value.own_keys().is_empty()
}

/// An object (excluding maps and sets) with at least one own enumerable
/// key.
pub fn non_empty_object(value: &Value) -> bool {
    object(value)
        && !value.has_map_payload()
        && !value.has_set_payload()
        && !value.own_keys().is_empty()
}

/// An empty map.
pub fn empty_map(value: &Value) -> bool {
    map(value) && value.map_size() == 0
}

/// A map with at least one entry.
pub fn non_empty_map(value: &Value) -> bool {
    map(value) && value.map_size() > 0
}

/// An empty set.
pub fn empty_set(value: &Value) -> bool {
    set(value) && value.set_size() == 0
}

/// A set with at least one value.
pub fn non_empty_set(value: &Value) -> bool {
    set(value) && value.set_size() > 0
}

/// Falsy, or an empty string, array, object, map, or set.
pub fn empty(value: &Value) -> bool {
    falsy(value)
        || empty_array(value)
        || empty_map(value)
        || empty_set(value)
        || empty_object(value)
}

/// Empty, or a whitespace-only string.
pub fn empty_or_whitespace(value: &Value) -> bool {
    empty(value) || whitespace_string(value)
}

/// Truthy under the host's boolean conversion.
pub fn truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// Falsy under the host's boolean conversion.
pub fn falsy(value: &Value) -> bool {
    !value.is_truthy()
}

// --- Identity and membership ---

/// Exact-class instance check: the instance's prototype must be the
/// class's own `prototype` object, so subclass instances are excluded.
pub fn direct_instance_of(instance: &Value, class: &Value) -> bool {
    let Some(Prototype::Object(actual)) = instance.prototype() else {
        return false;
    };
    let Some(Value::Object(expected)) = class.get_own("prototype") else {
        return false;
    };
    Rc::ptr_eq(&actual, &expected)
}

/// Membership among the enumerable values of an enum-like object.
///
/// Comparison is SameValueZero, so a NaN member matches a NaN value.
pub fn enum_case(value: &Value, enum_like: &Value) -> bool {
    enum_like
        .own_values()
        .iter()
        .any(|case| case.same_value_zero(value))
}
