//! The closed set of canonical type names.
//!
//! Every value classifies to exactly one [`TypeName`]. The set is fixed:
//! the primitive names (with `NaN` split out from `number`), `Function`,
//! `Observable`, `Array`, `Buffer`, and the recognized object class tags.
//! Tags outside the recognized set fall back to `Object` during detection.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical type name assigned by [`crate::detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TypeName {
    Null,
    Undefined,
    String,
    Number,
    NaN,
    Boolean,
    Symbol,
    BigInt,
    Function,
    Observable,
    Array,
    Buffer,
    Object,
    RegExp,
    Date,
    Error,
    Map,
    Set,
    WeakMap,
    WeakSet,
    WeakRef,
    Promise,
    Generator,
    AsyncGenerator,
    ArrayBuffer,
    SharedArrayBuffer,
    DataView,
    Url,
    UrlSearchParams,
    FormData,
    Blob,
    HtmlElement,
    Int8Array,
    Uint8Array,
    Uint8ClampedArray,
    Int16Array,
    Uint16Array,
    Int32Array,
    Uint32Array,
    Float32Array,
    Float64Array,
    BigInt64Array,
    BigUint64Array,
}

/// Primitive type names, including the `NaN` sentinel.
pub const PRIMITIVE_TYPE_NAMES: [TypeName; 8] = [
    TypeName::Null,
    TypeName::Undefined,
    TypeName::String,
    TypeName::Number,
    TypeName::NaN,
    TypeName::Boolean,
    TypeName::Symbol,
    TypeName::BigInt,
];

/// The numeric typed-array type names.
pub const TYPED_ARRAY_TYPE_NAMES: [TypeName; 11] = [
    TypeName::Int8Array,
    TypeName::Uint8Array,
    TypeName::Uint8ClampedArray,
    TypeName::Int16Array,
    TypeName::Uint16Array,
    TypeName::Int32Array,
    TypeName::Uint32Array,
    TypeName::Float32Array,
    TypeName::Float64Array,
    TypeName::BigInt64Array,
    TypeName::BigUint64Array,
];

/// Internal class tags the object tag resolver accepts, mapped to their
/// canonical names. Built once, never mutated.
pub(crate) static RECOGNIZED_TAGS: LazyLock<HashMap<&'static str, TypeName>> =
    LazyLock::new(|| {
        let mut tags = HashMap::new();
        tags.insert("Object", TypeName::Object);
        tags.insert("Function", TypeName::Function);
        tags.insert("Observable", TypeName::Observable);
        tags.insert("Array", TypeName::Array);
        tags.insert("RegExp", TypeName::RegExp);
        tags.insert("Date", TypeName::Date);
        tags.insert("Error", TypeName::Error);
        tags.insert("Map", TypeName::Map);
        tags.insert("Set", TypeName::Set);
        tags.insert("WeakMap", TypeName::WeakMap);
        tags.insert("WeakSet", TypeName::WeakSet);
        tags.insert("WeakRef", TypeName::WeakRef);
        tags.insert("Promise", TypeName::Promise);
        tags.insert("Generator", TypeName::Generator);
        tags.insert("AsyncGenerator", TypeName::AsyncGenerator);
        tags.insert("ArrayBuffer", TypeName::ArrayBuffer);
        tags.insert("SharedArrayBuffer", TypeName::SharedArrayBuffer);
        tags.insert("DataView", TypeName::DataView);
        tags.insert("URL", TypeName::Url);
        tags.insert("URLSearchParams", TypeName::UrlSearchParams);
        tags.insert("FormData", TypeName::FormData);
        tags.insert("Blob", TypeName::Blob);
        tags.insert("HTMLElement", TypeName::HtmlElement);
        tags.insert("Int8Array", TypeName::Int8Array);
        tags.insert("Uint8Array", TypeName::Uint8Array);
        tags.insert("Uint8ClampedArray", TypeName::Uint8ClampedArray);
        tags.insert("Int16Array", TypeName::Int16Array);
        tags.insert("Uint16Array", TypeName::Uint16Array);
        tags.insert("Int32Array", TypeName::Int32Array);
        tags.insert("Uint32Array", TypeName::Uint32Array);
        tags.insert("Float32Array", TypeName::Float32Array);
        tags.insert("Float64Array", TypeName::Float64Array);
        tags.insert("BigInt64Array", TypeName::BigInt64Array);
        tags.insert("BigUint64Array", TypeName::BigUint64Array);
        tags
    });

impl TypeName {
    /// The canonical string spelling of this name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Null => "null",
            TypeName::Undefined => "undefined",
            TypeName::String => "string",
            TypeName::Number => "number",
            TypeName::NaN => "NaN",
            TypeName::Boolean => "boolean",
            TypeName::Symbol => "symbol",
            TypeName::BigInt => "bigint",
            TypeName::Function => "Function",
            TypeName::Observable => "Observable",
            TypeName::Array => "Array",
            TypeName::Buffer => "Buffer",
            TypeName::Object => "Object",
            TypeName::RegExp => "RegExp",
            TypeName::Date => "Date",
            TypeName::Error => "Error",
            TypeName::Map => "Map",
            TypeName::Set => "Set",
            TypeName::WeakMap => "WeakMap",
            TypeName::WeakSet => "WeakSet",
            TypeName::WeakRef => "WeakRef",
            TypeName::Promise => "Promise",
            TypeName::Generator => "Generator",
            TypeName::AsyncGenerator => "AsyncGenerator",
            TypeName::ArrayBuffer => "ArrayBuffer",
            TypeName::SharedArrayBuffer => "SharedArrayBuffer",
            TypeName::DataView => "DataView",
            TypeName::Url => "URL",
            TypeName::UrlSearchParams => "URLSearchParams",
            TypeName::FormData => "FormData",
            TypeName::Blob => "Blob",
            TypeName::HtmlElement => "HTMLElement",
            TypeName::Int8Array => "Int8Array",
            TypeName::Uint8Array => "Uint8Array",
            TypeName::Uint8ClampedArray => "Uint8ClampedArray",
            TypeName::Int16Array => "Int16Array",
            TypeName::Uint16Array => "Uint16Array",
            TypeName::Int32Array => "Int32Array",
            TypeName::Uint32Array => "Uint32Array",
            TypeName::Float32Array => "Float32Array",
            TypeName::Float64Array => "Float64Array",
            TypeName::BigInt64Array => "BigInt64Array",
            TypeName::BigUint64Array => "BigUint64Array",
        }
    }

    /// Whether this is one of the primitive names (including `NaN`).
    pub fn is_primitive(&self) -> bool {
        PRIMITIVE_TYPE_NAMES.contains(self)
    }

    /// Whether this is one of the numeric typed-array names.
    pub fn is_typed_array(&self) -> bool {
        TYPED_ARRAY_TYPE_NAMES.contains(self)
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
