//! Unit tests for the type name resolver

use core_values::{FunctionKind, SymbolValue, TypedArrayKind, Value};
use inspect::{detect, get_object_type, InspectError, TypeName};

fn observable_fixture() -> Value {
    let obj = Value::object();
    let subscribe = Value::function(FunctionKind::Normal, |this, _| Ok(this.clone()));
    obj.set_symbol(&SymbolValue::observable(), subscribe);
    obj
}

#[cfg(test)]
mod primitive_classification_tests {
    use super::*;

    #[test]
    fn test_null_and_undefined() {
        assert_eq!(detect(&Value::null()), Ok(TypeName::Null));
        assert_eq!(detect(&Value::undefined()), Ok(TypeName::Undefined));
    }

    #[test]
    fn test_string_boolean_symbol_bigint() {
        assert_eq!(detect(&Value::string("")), Ok(TypeName::String));
        assert_eq!(detect(&Value::boolean(false)), Ok(TypeName::Boolean));
        assert_eq!(
            detect(&Value::symbol(SymbolValue::new(None))),
            Ok(TypeName::Symbol)
        );
        assert_eq!(detect(&Value::bigint(10)), Ok(TypeName::BigInt));
    }

    #[test]
    fn test_nan_is_split_from_number() {
        assert_eq!(detect(&Value::number(1.0)), Ok(TypeName::Number));
        assert_eq!(detect(&Value::number(f64::NAN)), Ok(TypeName::NaN));
        assert_eq!(detect(&Value::number(f64::INFINITY)), Ok(TypeName::Number));
    }
}

#[cfg(test)]
mod object_classification_tests {
    use super::*;

    #[test]
    fn test_function_precedes_tag_lookup() {
        let f = Value::function(FunctionKind::Normal, |_, _| Ok(Value::undefined()));
        assert_eq!(detect(&f), Ok(TypeName::Function));
    }

    #[test]
    fn test_observable_precedes_array() {
        assert_eq!(detect(&observable_fixture()), Ok(TypeName::Observable));

        // Even an array-shaped observable classifies as Observable
        let arr = Value::array();
        let subscribe = Value::function(FunctionKind::Normal, |this, _| Ok(this.clone()));
        arr.set_symbol(&SymbolValue::observable(), subscribe);
        assert_eq!(detect(&arr), Ok(TypeName::Observable));
    }

    #[test]
    fn test_array_and_buffer_fast_paths() {
        assert_eq!(detect(&Value::array()), Ok(TypeName::Array));
        // Buffers carry a byte-array class tag but classify as Buffer
        assert_eq!(detect(&Value::buffer(vec![1])), Ok(TypeName::Buffer));
    }

    #[test]
    fn test_recognized_tags() {
        assert_eq!(detect(&Value::map()), Ok(TypeName::Map));
        assert_eq!(detect(&Value::set_collection()), Ok(TypeName::Set));
        assert_eq!(detect(&Value::tagged("Date")), Ok(TypeName::Date));
        assert_eq!(detect(&Value::tagged("RegExp")), Ok(TypeName::RegExp));
        assert_eq!(detect(&Value::tagged("Promise")), Ok(TypeName::Promise));
        assert_eq!(detect(&Value::tagged("WeakRef")), Ok(TypeName::WeakRef));
        assert_eq!(detect(&Value::tagged("URL")), Ok(TypeName::Url));
        assert_eq!(
            detect(&Value::tagged("SharedArrayBuffer")),
            Ok(TypeName::SharedArrayBuffer)
        );
    }

    #[test]
    fn test_every_typed_array_kind_classifies_to_its_own_name() {
        for kind in TypedArrayKind::ALL {
            let ta = Value::typed_array(kind, vec![0; kind.bytes_per_element()]);
            let name = detect(&ta).expect("typed arrays classify");
            assert!(name.is_typed_array());
            assert_eq!(name.as_str(), kind.name());
        }
    }

    #[test]
    fn test_unrecognized_tag_is_plain_object() {
        assert_eq!(detect(&Value::tagged("Reflect")), Ok(TypeName::Object));
        assert_eq!(detect(&Value::object()), Ok(TypeName::Object));
    }

    #[test]
    fn test_element_family_tags_unify_to_html_element() {
        for tag in ["HTMLElement", "HTMLDivElement", "HTMLAnchorElement", "SVGSVGElement"] {
            let el = Value::tagged(tag);
            el.set("nodeType", Value::number(1.0));
            el.set("nodeName", Value::string("EL"));
            for marker in ["innerHTML", "ownerDocument", "style", "attributes", "nodeValue"] {
                el.set(marker, Value::object());
            }
            assert_eq!(detect(&el), Ok(TypeName::HtmlElement), "tag {}", tag);
            assert_eq!(get_object_type(&el), Some(TypeName::HtmlElement));
        }
    }
}

#[cfg(test)]
mod boxed_primitive_tests {
    use super::*;

    #[test]
    fn test_all_three_wrappers_are_rejected() {
        for boxed in [
            Value::boxed_string("s"),
            Value::boxed_number(0.0),
            Value::boxed_boolean(true),
        ] {
            match detect(&boxed) {
                Err(InspectError::Type(message)) => {
                    assert_eq!(message, "Please don't use object wrappers for primitive types.");
                }
                other => panic!("expected rejection, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejection_comes_after_legitimate_tags() {
        // A Date must never be mistaken for a wrapper
        assert_eq!(detect(&Value::tagged("Date")), Ok(TypeName::Date));
    }
}
