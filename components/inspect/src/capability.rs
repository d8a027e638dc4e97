//! Structural capability detectors.
//!
//! Some categories cannot be resolved reliably through the internal class
//! tag: subclassed promises, cross-realm observables, stream-shaped
//! objects. These checks classify by the presence of the expected callable
//! members instead. Each detector is independent and pure; `detect` uses
//! only the observable check, the rest back the standalone predicates.

use core_values::{SymbolValue, Value};

use crate::is;

/// The legacy string spelling of the observable subscription key.
const OBSERVABLE_LEGACY_KEY: &str = "@@observable";

/// Property names every host UI element exposes. No single one is a
/// reliable signal, the conjunction is.
const DOM_MARKER_PROPERTIES: [&str; 5] =
    ["innerHTML", "ownerDocument", "style", "attributes", "nodeValue"];

fn callable_prop(value: &Value, key: &str) -> bool {
    value.get(key).map(|p| p.is_callable()).unwrap_or(false)
}

fn callable_symbol(value: &Value, sym: &SymbolValue) -> bool {
    value.get_symbol(sym).map(|p| p.is_callable()).unwrap_or(false)
}

/// Native iteration support carried by a payload rather than an explicit
/// protocol method: arrays, byte buffers, typed arrays, maps, sets.
fn has_native_iteration(value: &Value) -> bool {
    value.has_array_payload()
        || value.has_bytes_payload()
        || value.typed_array_kind().is_some()
        || value.has_map_payload()
        || value.has_set_payload()
}

/// Promise-shaped: a non-callable object with callable `then` and `catch`.
///
/// Used as a structural fallback after tag-based native-promise detection,
/// so subclassed or cross-realm promises are still recognized.
pub(crate) fn promise_like(value: &Value) -> bool {
    value.is_object()
        && !value.is_callable()
        && callable_prop(value, "then")
        && callable_prop(value, "catch")
}

/// Observable-shaped: truthy, and invoking its subscription method (under
/// the well-known symbol or the legacy `@@observable` key) returns the
/// value itself.
pub(crate) fn observable(value: &Value) -> bool {
    if !value.is_truthy() || !value.is_object() {
        return false;
    }
    let candidates = [
        value.get_symbol(&SymbolValue::observable()),
        value.get(OBSERVABLE_LEGACY_KEY),
    ];
    for method in candidates.into_iter().flatten() {
        if !method.is_callable() {
            continue;
        }
        if let Ok(result) = method.call(value, &[]) {
            if result.ptr_eq(value) {
                return true;
            }
        }
    }
    false
}

/// Iterable: a string, or an object with native iteration support or a
/// callable iteration-protocol method.
pub(crate) fn iterable(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Object(_) => {
            has_native_iteration(value) || callable_symbol(value, &SymbolValue::iterator())
        }
        _ => false,
    }
}

/// Async iterable: an object with a callable async iteration-protocol
/// method.
pub(crate) fn async_iterable(value: &Value) -> bool {
    value.is_object() && callable_symbol(value, &SymbolValue::async_iterator())
}

/// Generator object: iterable, with callable `next` and `throw`.
pub(crate) fn generator_object(value: &Value) -> bool {
    iterable(value) && callable_prop(value, "next") && callable_prop(value, "throw")
}

/// Async generator object: async iterable, with callable `next` and
/// `throw`.
pub(crate) fn async_generator_object(value: &Value) -> bool {
    async_iterable(value) && callable_prop(value, "next") && callable_prop(value, "throw")
}

/// Node-style stream: an object with a callable `pipe` that is not an
/// observable. The exclusion disambiguates the two subscribe-ish shapes.
pub(crate) fn node_stream(value: &Value) -> bool {
    value.is_object() && callable_prop(value, "pipe") && !observable(value)
}

/// Host UI element: `nodeType` 1, a string `nodeName`, not a plain
/// object, and all DOM marker properties present.
pub(crate) fn html_element(value: &Value) -> bool {
    if !value.is_object() || is::plain_object(value) {
        return false;
    }
    if value.get("nodeType") != Some(Value::number(1.0)) {
        return false;
    }
    let Some(name) = value.get("nodeName") else {
        return false;
    };
    if !name.is_string() {
        return false;
    }
    DOM_MARKER_PROPERTIES.iter().all(|p| value.get(p).is_some())
}
