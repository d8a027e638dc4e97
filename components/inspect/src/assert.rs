//! The assertion namespace.
//!
//! One throwing counterpart per unary predicate, derived mechanically from
//! a single name/predicate/description table so the two namespaces can
//! never drift apart. On success an assertion returns `Ok(())`; on failure
//! it produces the type-error kind with the default message
//! `` Expected value which is `<description>`, received value of type
//! `<detected>`. `` unless the caller supplies a custom message.

use core_values::Value;

use crate::detect::detect;
use crate::error::{InspectError, InspectResult};
use crate::is;
use crate::Predicate;

pub use crate::combinators::{assert_all as all, assert_any as any};

/// Render the default assertion failure message.
///
/// Classifying the received value may itself fail (boxed primitive
/// wrappers); that failure takes precedence.
fn default_message(description: &str, value: &Value) -> InspectResult<String> {
    let received = detect(value)?;
    Ok(format!(
        "Expected value which is `{}`, received value of type `{}`.",
        description, received
    ))
}

fn guard(
    predicate: Predicate,
    description: &str,
    value: &Value,
    message: Option<&str>,
) -> InspectResult<()> {
    if predicate(value) {
        return Ok(());
    }
    let text = match message {
        Some(custom) => custom.to_string(),
        None => default_message(description, value)?,
    };
    Err(InspectError::Type(text))
}

macro_rules! assertions {
    ($( $name:ident => $pred:expr, $desc:expr; )+) => {
        $(
            #[doc = concat!("Asserts that the value is `", $desc, "`.")]
            pub fn $name(value: &Value, message: Option<&str>) -> InspectResult<()> {
                guard($pred, $desc, value, message)
            }
        )+

        /// Predicate-to-description table used by the combinators to
        /// report the expected type of a bare predicate.
        pub(crate) static DESCRIPTIONS: &[(Predicate, &str)] = &[
            $( ($pred, $desc), )+
        ];
    };
}

assertions! {
    undefined => is::undefined, "undefined";
    null => is::null, "null";
    null_or_undefined => is::null_or_undefined, "null or undefined";
    string => is::string, "string";
    number => is::number, "number";
    nan => is::nan, "NaN";
    boolean => is::boolean, "boolean";
    symbol => is::symbol, "symbol";
    bigint => is::bigint, "bigint";
    primitive => is::primitive, "primitive";
    property_key => is::property_key, "PropertyKey";
    function => is::function, "Function";
    generator_function => is::generator_function, "GeneratorFunction";
    async_function => is::async_function, "AsyncFunction";
    async_generator_function => is::async_generator_function, "AsyncGeneratorFunction";
    bound_function => is::bound_function, "Function";
    object => is::object, "Object";
    plain_object => is::plain_object, "plain object";
    array => is::array, "Array";
    buffer => is::buffer, "Buffer";
    blob => is::blob, "Blob";
    regexp => is::regexp, "RegExp";
    date => is::date, "Date";
    error => is::error, "Error";
    map => is::map, "Map";
    set => is::set, "Set";
    weak_map => is::weak_map, "WeakMap";
    weak_set => is::weak_set, "WeakSet";
    weak_ref => is::weak_ref, "WeakRef";
    native_promise => is::native_promise, "native Promise";
    promise => is::promise, "Promise";
    generator => is::generator, "Generator";
    async_generator => is::async_generator, "AsyncGenerator";
    iterable => is::iterable, "Iterable";
    async_iterable => is::async_iterable, "AsyncIterable";
    observable => is::observable, "Observable";
    node_stream => is::node_stream, "Node.js Stream";
    html_element => is::html_element, "HTMLElement";
    typed_array => is::typed_array, "TypedArray";
    int8_array => is::int8_array, "Int8Array";
    uint8_array => is::uint8_array, "Uint8Array";
    uint8_clamped_array => is::uint8_clamped_array, "Uint8ClampedArray";
    int16_array => is::int16_array, "Int16Array";
    uint16_array => is::uint16_array, "Uint16Array";
    int32_array => is::int32_array, "Int32Array";
    uint32_array => is::uint32_array, "Uint32Array";
    float32_array => is::float32_array, "Float32Array";
    float64_array => is::float64_array, "Float64Array";
    bigint64_array => is::bigint64_array, "BigInt64Array";
    biguint64_array => is::biguint64_array, "BigUint64Array";
    array_buffer => is::array_buffer, "ArrayBuffer";
    shared_array_buffer => is::shared_array_buffer, "SharedArrayBuffer";
    data_view => is::data_view, "DataView";
    url_instance => is::url_instance, "URL";
    url_string => is::url_string, "string with a URL";
    url_search_params => is::url_search_params, "URLSearchParams";
    form_data => is::form_data, "FormData";
    integer => is::integer, "integer";
    safe_integer => is::safe_integer, "integer";
    infinite => is::infinite, "infinite number";
    even_integer => is::even_integer, "even integer";
    odd_integer => is::odd_integer, "odd integer";
    valid_length => is::valid_length, "valid length";
    empty_string => is::empty_string, "empty string";
    non_empty_string => is::non_empty_string, "non-empty string";
    whitespace_string => is::whitespace_string, "whitespace string";
    empty_string_or_whitespace => is::empty_string_or_whitespace, "empty string or whitespace";
    non_empty_string_and_not_whitespace => is::non_empty_string_and_not_whitespace, "non-empty string and not whitespace";
    numeric_string => is::numeric_string, "string with a number";
    array_like => is::array_like, "array-like";
    empty_array => is::empty_array, "empty array";
    non_empty_array => is::non_empty_array, "non-empty array";
    empty_object => is::empty_object, "empty object";
    non_empty_object => is::non_empty_object, "non-empty object";
    empty_map => is::empty_map, "empty map";
    non_empty_map => is::non_empty_map, "non-empty map";
    empty_set => is::empty_set, "empty set";
    non_empty_set => is::non_empty_set, "non-empty set";
    empty => is::empty, "empty";
    empty_or_whitespace => is::empty_or_whitespace, "empty or whitespace";
    truthy => is::truthy, "truthy";
    falsy => is::falsy, "falsy";
}

/// Asserts that the value is inside the given numeric range.
pub fn in_range(value: &Value, range: &[f64], message: Option<&str>) -> InspectResult<()> {
    if is::in_range(value, range)? {
        return Ok(());
    }
    let text = match message {
        Some(custom) => custom.to_string(),
        None => default_message("in range", value)?,
    };
    Err(InspectError::Type(text))
}

/// Asserts that the value is an array matching the positional guards.
pub fn tuple_like(value: &Value, guards: &[Predicate], message: Option<&str>) -> InspectResult<()> {
    if is::tuple_like(value, guards) {
        return Ok(());
    }
    let text = match message {
        Some(custom) => custom.to_string(),
        None => default_message("tuple-like", value)?,
    };
    Err(InspectError::Type(text))
}

/// Asserts that the instance is a direct instance of the given class.
pub fn direct_instance_of(
    instance: &Value,
    class: &Value,
    message: Option<&str>,
) -> InspectResult<()> {
    if is::direct_instance_of(instance, class) {
        return Ok(());
    }
    let text = match message {
        Some(custom) => custom.to_string(),
        None => default_message("direct instance of the given class", instance)?,
    };
    Err(InspectError::Type(text))
}

/// Asserts that the value is one of the enumerable cases of the given
/// enum-like object.
pub fn enum_case(value: &Value, enum_like: &Value, message: Option<&str>) -> InspectResult<()> {
    if is::enum_case(value, enum_like) {
        return Ok(());
    }
    let text = match message {
        Some(custom) => custom.to_string(),
        None => default_message("enum case", value)?,
    };
    Err(InspectError::Type(text))
}
