//! Tagged dynamic value representation.
//!
//! Primitives are stored inline; every object kind shares one
//! [`ObjectData`] representation behind `Rc<RefCell<_>>`, distinguished by
//! its internal class tag and native payload. This keeps the object kind a
//! piece of runtime data a classifier can inspect, rather than static
//! structure.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::CallError;
use crate::object::{FunctionData, FunctionKind, ObjectData, ObjectRef, Payload, Prototype};
use crate::symbol::SymbolValue;
use crate::typed_array::TypedArrayKind;

/// Represents any dynamic value.
///
/// # Examples
///
/// ```
/// use core_values::Value;
///
/// let undefined = Value::undefined();
/// let number = Value::number(42.0);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(number.type_of(), "number");
/// ```
#[derive(Clone)]
pub enum Value {
    /// The undefined value
    Undefined,
    /// The null value
    Null,
    /// Boolean (true or false)
    Boolean(bool),
    /// IEEE 754 double-precision number
    Number(f64),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// Arbitrary precision integer
    BigInt(BigInt),
    /// Any object, including arrays, collections, and functions
    Object(ObjectRef),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(s) => f.debug_tuple("Symbol").field(&s.id()).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::Object(rc) => f
                .debug_tuple("Object")
                .field(&rc.borrow().class_tag)
                .finish(),
        }
    }
}

impl Value {
    /// Create the undefined value.
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create the null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value.
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create a number value.
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a symbol value.
    pub fn symbol(sym: SymbolValue) -> Self {
        Value::Symbol(sym)
    }

    /// Create a big integer value.
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Value::BigInt(v.into())
    }

    /// Wrap prepared object state in a value.
    pub fn from_object(data: ObjectData) -> Self {
        Value::Object(Rc::new(RefCell::new(data)))
    }

    /// Create an empty plain object.
    pub fn object() -> Self {
        Value::from_object(ObjectData::new("Object"))
    }

    /// Create a plain object whose prototype is the given object.
    ///
    /// Non-object prototypes produce a null-prototype object.
    pub fn object_with_proto(proto: &Value) -> Self {
        let mut data = ObjectData::new("Object");
        data.prototype = match proto {
            Value::Object(rc) => Prototype::Object(Rc::clone(rc)),
            _ => Prototype::Null,
        };
        Value::from_object(data)
    }

    /// Create a plain object with no prototype at all.
    pub fn null_proto_object() -> Self {
        let mut data = ObjectData::new("Object");
        data.prototype = Prototype::Null;
        Value::from_object(data)
    }

    /// Create an object with an arbitrary class tag and no payload.
    pub fn tagged(class_tag: impl Into<String>) -> Self {
        Value::from_object(ObjectData::new(class_tag))
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::array_from(Vec::new())
    }

    /// Create an array from values.
    pub fn array_from(elements: Vec<Value>) -> Self {
        Value::from_object(ObjectData::with_payload("Array", Payload::Array(elements)))
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::map_from(Vec::new())
    }

    /// Create a map from entries, preserving order.
    pub fn map_from(entries: Vec<(Value, Value)>) -> Self {
        Value::from_object(ObjectData::with_payload("Map", Payload::MapEntries(entries)))
    }

    /// Create an empty set.
    pub fn set_collection() -> Self {
        Value::set_from(Vec::new())
    }

    /// Create a set from values, preserving order.
    pub fn set_from(values: Vec<Value>) -> Self {
        Value::from_object(ObjectData::with_payload("Set", Payload::SetValues(values)))
    }

    /// Create a byte buffer.
    pub fn buffer(bytes: Vec<u8>) -> Self {
        Value::from_object(ObjectData::with_payload("Uint8Array", Payload::Bytes(bytes)))
    }

    /// Create a typed array of the given kind over raw bytes.
    pub fn typed_array(kind: TypedArrayKind, data: Vec<u8>) -> Self {
        Value::from_object(ObjectData::with_payload(
            kind.name(),
            Payload::TypedArray { kind, data },
        ))
    }

    /// Create a function value of the given subkind.
    pub fn function<F>(kind: FunctionKind, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, CallError> + 'static,
    {
        Value::from_object(ObjectData::with_payload(
            "Function",
            Payload::Function(FunctionData {
                kind,
                func: Box::new(func),
            }),
        ))
    }

    /// Create a boxed string wrapper object.
    pub fn boxed_string(s: impl Into<String>) -> Self {
        Value::from_object(ObjectData::with_payload(
            "String",
            Payload::Boxed(Value::string(s)),
        ))
    }

    /// Create a boxed number wrapper object.
    pub fn boxed_number(n: f64) -> Self {
        Value::from_object(ObjectData::with_payload(
            "Number",
            Payload::Boxed(Value::number(n)),
        ))
    }

    /// Create a boxed boolean wrapper object.
    pub fn boxed_boolean(b: bool) -> Self {
        Value::from_object(ObjectData::with_payload(
            "Boolean",
            Payload::Boxed(Value::boolean(b)),
        ))
    }

    /// Check if value is undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Check if value is a number (including NaN).
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a symbol.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is a big integer.
    pub fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    /// Check if value is any object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Get as boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Get as symbol.
    pub fn as_symbol(&self) -> Option<SymbolValue> {
        match self {
            Value::Symbol(sym) => Some(sym.clone()),
            _ => None,
        }
    }

    /// Get as big integer.
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self {
            Value::BigInt(n) => Some(n.clone()),
            _ => None,
        }
    }

    /// Get the shared object handle, if this is an object.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(rc) => Some(rc),
            _ => None,
        }
    }

    /// The internal class tag of an object value.
    pub fn class_tag(&self) -> Option<String> {
        self.as_object().map(|rc| rc.borrow().class_tag.clone())
    }

    /// The custom string-tag override of an object value, if any.
    pub fn to_string_tag(&self) -> Option<String> {
        self.as_object().and_then(|rc| rc.borrow().to_string_tag.clone())
    }

    /// Install a custom string-tag override on an object.
    pub fn set_to_string_tag(&self, tag: impl Into<String>) {
        if let Value::Object(rc) = self {
            rc.borrow_mut().to_string_tag = Some(tag.into());
        }
    }

    /// Check whether the value is callable.
    pub fn is_callable(&self) -> bool {
        self.as_object()
            .map(|rc| matches!(rc.borrow().payload, Payload::Function(_)))
            .unwrap_or(false)
    }

    /// The function subkind of a callable value.
    pub fn function_kind(&self) -> Option<FunctionKind> {
        self.as_object().and_then(|rc| match &rc.borrow().payload {
            Payload::Function(data) => Some(data.kind),
            _ => None,
        })
    }

    /// Invoke a callable value with the given receiver and arguments.
    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, CallError> {
        let Value::Object(rc) = self else {
            return Err(CallError::new("value is not callable"));
        };
        let data = rc.borrow();
        match &data.payload {
            Payload::Function(func) => (func.func)(this, args),
            _ => Err(CallError::new("value is not callable")),
        }
    }

    /// Set a string-keyed property on an object.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        if let Value::Object(rc) = self {
            rc.borrow_mut().set_prop(key, value);
        }
    }

    /// Get an own string-keyed property, without prototype lookup.
    ///
    /// The `length` of sequence payloads (arrays, typed arrays, byte
    /// buffers) is synthesized here.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        let Value::Object(rc) = self else { return None };
        if key == "length" {
            if let Some(len) = self.sequence_length() {
                return Some(Value::number(len as f64));
            }
        }
        rc.borrow().get_own(key)
    }

    /// Get a string-keyed property, walking the prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        if !self.is_object() {
            return None;
        }
        if let Some(v) = self.get_own(key) {
            return Some(v);
        }
        let mut proto = self
            .as_object()
            .map(|rc| rc.borrow().prototype.clone())?;
        while let Prototype::Object(rc) = proto {
            let data = rc.borrow();
            if let Some(v) = data.get_own(key) {
                return Some(v);
            }
            proto = data.prototype.clone();
        }
        None
    }

    /// Check if object has an own string-keyed property.
    pub fn has_own(&self, key: &str) -> bool {
        self.get_own(key).is_some()
    }

    /// Set a symbol-keyed property on an object.
    pub fn set_symbol(&self, sym: &SymbolValue, value: Value) {
        if let Value::Object(rc) = self {
            rc.borrow_mut().symbol_properties.insert(sym.id(), value);
        }
    }

    /// Get a symbol-keyed property, walking the prototype chain.
    pub fn get_symbol(&self, sym: &SymbolValue) -> Option<Value> {
        let Value::Object(rc) = self else { return None };
        if let Some(v) = rc.borrow().get_symbol_own(sym.id()) {
            return Some(v);
        }
        let mut proto = rc.borrow().prototype.clone();
        while let Prototype::Object(rc) = proto {
            let data = rc.borrow();
            if let Some(v) = data.get_symbol_own(sym.id()) {
                return Some(v);
            }
            proto = data.prototype.clone();
        }
        None
    }

    /// The prototype link of an object value.
    pub fn prototype(&self) -> Option<Prototype> {
        self.as_object().map(|rc| rc.borrow().prototype.clone())
    }

    /// Replace the prototype link of an object value.
    pub fn set_prototype(&self, proto: Prototype) {
        if let Value::Object(rc) = self {
            rc.borrow_mut().prototype = proto;
        }
    }

    /// Element count of a sequence payload (array, typed array, bytes).
    pub fn sequence_length(&self) -> Option<usize> {
        self.as_object().and_then(|rc| match &rc.borrow().payload {
            Payload::Array(v) => Some(v.len()),
            Payload::Bytes(b) => Some(b.len()),
            Payload::TypedArray { kind, data } => Some(data.len() / kind.bytes_per_element()),
            _ => None,
        })
    }

    /// Cloned array elements, if this object carries an array payload.
    pub fn array_elements(&self) -> Option<Vec<Value>> {
        self.as_object().and_then(|rc| match &rc.borrow().payload {
            Payload::Array(v) => Some(v.clone()),
            _ => None,
        })
    }

    /// Array length, if this object carries an array payload.
    pub fn array_length(&self) -> Option<usize> {
        self.as_object().and_then(|rc| match &rc.borrow().payload {
            Payload::Array(v) => Some(v.len()),
            _ => None,
        })
    }

    /// Check for a native array payload.
    pub fn has_array_payload(&self) -> bool {
        self.array_length().is_some()
    }

    /// Check for a raw byte-buffer payload.
    pub fn has_bytes_payload(&self) -> bool {
        self.as_object()
            .map(|rc| matches!(rc.borrow().payload, Payload::Bytes(_)))
            .unwrap_or(false)
    }

    /// Check for a map payload.
    pub fn has_map_payload(&self) -> bool {
        self.as_object()
            .map(|rc| matches!(rc.borrow().payload, Payload::MapEntries(_)))
            .unwrap_or(false)
    }

    /// Check for a set payload.
    pub fn has_set_payload(&self) -> bool {
        self.as_object()
            .map(|rc| matches!(rc.borrow().payload, Payload::SetValues(_)))
            .unwrap_or(false)
    }

    /// Entry count of a map payload; zero when absent.
    pub fn map_size(&self) -> usize {
        self.as_object()
            .map(|rc| match &rc.borrow().payload {
                Payload::MapEntries(entries) => entries.len(),
                _ => 0,
            })
            .unwrap_or(0)
    }

    /// Value count of a set payload; zero when absent.
    pub fn set_size(&self) -> usize {
        self.as_object()
            .map(|rc| match &rc.borrow().payload {
                Payload::SetValues(values) => values.len(),
                _ => 0,
            })
            .unwrap_or(0)
    }

    /// The typed-array kind of a typed-array payload.
    pub fn typed_array_kind(&self) -> Option<TypedArrayKind> {
        self.as_object().and_then(|rc| match &rc.borrow().payload {
            Payload::TypedArray { kind, .. } => Some(*kind),
            _ => None,
        })
    }

    /// The primitive inside a boxed wrapper object.
    pub fn boxed_inner(&self) -> Option<Value> {
        self.as_object().and_then(|rc| match &rc.borrow().payload {
            Payload::Boxed(inner) => Some(inner.clone()),
            _ => None,
        })
    }

    /// Own enumerable string keys, including sequence element indices.
    pub fn own_keys(&self) -> Vec<String> {
        let Value::Object(rc) = self else {
            return Vec::new();
        };
        let data = rc.borrow();
        let mut keys: Vec<String> = match &data.payload {
            Payload::Array(v) => (0..v.len()).map(|i| i.to_string()).collect(),
            Payload::Bytes(b) => (0..b.len()).map(|i| i.to_string()).collect(),
            Payload::TypedArray { kind, data } => (0..data.len() / kind.bytes_per_element())
                .map(|i| i.to_string())
                .collect(),
            _ => Vec::new(),
        };
        keys.extend(data.properties.iter().map(|(k, _)| k.clone()));
        keys
    }

    /// Own enumerable values: property values plus array elements.
    pub fn own_values(&self) -> Vec<Value> {
        let Value::Object(rc) = self else {
            return Vec::new();
        };
        let data = rc.borrow();
        let mut values: Vec<Value> = match &data.payload {
            Payload::Array(v) => v.clone(),
            _ => Vec::new(),
        };
        values.extend(data.properties.iter().map(|(_, v)| v.clone()));
        values
    }

    /// Object identity comparison by shared pointer.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns whether this value is truthy.
    ///
    /// Falsy values: undefined, null, false, 0 and NaN, the empty string,
    /// and the zero big integer. All objects are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(),
            Value::Object(_) => true,
        }
    }

    /// Returns the typeof result for this value.
    ///
    /// Follows the host's typeof operator, including the historical
    /// `null -> "object"` quirk; callable objects report `"function"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Object(_) => {
                if self.is_callable() {
                    "function"
                } else {
                    "object"
                }
            }
        }
    }

    /// Check equality: primitives by value (NaN unequal to itself),
    /// objects by identity.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    false
                } else {
                    a == b
                }
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// SameValueZero comparison: like [`Value::equals`] but NaN equals NaN.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.equals(other),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// String conversion following the host's `String()` rules.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    // Integer-valued doubles display without decimal point
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::Object(rc) => {
                let data = rc.borrow();
                match &data.payload {
                    Payload::Array(elements) => {
                        let parts: Vec<String> =
                            elements.iter().map(|e| e.to_string()).collect();
                        write!(f, "{}", parts.join(","))
                    }
                    Payload::Function(_) => write!(f, "function () {{ [native code] }}"),
                    _ => {
                        if data.class_tag == "Object" {
                            write!(f, "[object Object]")
                        } else {
                            write!(f, "[object {}]", data.class_tag)
                        }
                    }
                }
            }
        }
    }
}
