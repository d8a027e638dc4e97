//! Object representation: class tags, properties, prototypes, payloads.
//!
//! Every non-primitive value is an [`ObjectData`] behind `Rc<RefCell<_>>`.
//! An object carries the host's internal class tag (the string an external
//! classifier reads to decide its built-in category), ordered string-keyed
//! properties, symbol-keyed properties, a prototype link, and an optional
//! native [`Payload`] such as array elements or a byte buffer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::CallError;
use crate::typed_array::TypedArrayKind;
use crate::value::Value;

/// Shared handle to object state.
pub type ObjectRef = Rc<RefCell<ObjectData>>;

/// Prototype link of an object.
///
/// `Base` is the process-wide base object prototype; `Null` is a
/// null-prototype object. Identity of `Object` links is by `Rc` pointer.
#[derive(Debug, Clone)]
pub enum Prototype {
    /// The base object prototype.
    Base,
    /// No prototype at all.
    Null,
    /// A specific prototype object.
    Object(ObjectRef),
}

/// Subkind of a callable payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Ordinary function
    Normal,
    /// Generator function
    Generator,
    /// Async function
    AsyncFunction,
    /// Async generator function
    AsyncGenerator,
    /// Bound function produced by a bind operation
    Bound,
}

/// Boxed native function signature: receiver plus arguments.
pub type NativeFn = Box<dyn Fn(&Value, &[Value]) -> Result<Value, CallError>>;

/// Callable payload attached to a function object.
pub struct FunctionData {
    /// Which subkind of function this is
    pub kind: FunctionKind,
    /// The function implementation
    pub func: NativeFn,
}

impl std::fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionData").field("kind", &self.kind).finish()
    }
}

/// Native data slot attached to an object.
///
/// The slot is what the host APIs expose natively about an object; the
/// class tag is what it advertises. The two usually agree but are kept
/// separate so an external classifier can resolve disagreements with an
/// explicit policy.
#[derive(Debug)]
pub enum Payload {
    /// No native data
    None,
    /// Native array elements
    Array(Vec<Value>),
    /// Raw byte buffer
    Bytes(Vec<u8>),
    /// Typed-array view over raw bytes
    TypedArray {
        /// Element kind of the view
        kind: TypedArrayKind,
        /// Backing bytes
        data: Vec<u8>,
    },
    /// Map entries in insertion order
    MapEntries(Vec<(Value, Value)>),
    /// Set values in insertion order
    SetValues(Vec<Value>),
    /// Callable function
    Function(FunctionData),
    /// Boxed primitive wrapper around an inner primitive
    Boxed(Value),
}

/// Internal object state.
#[derive(Debug)]
pub struct ObjectData {
    /// The host's internal class tag ("Object", "Array", "Map", ...)
    pub class_tag: String,
    /// Own enumerable string-keyed properties in insertion order
    pub properties: Vec<(String, Value)>,
    /// Symbol-keyed properties, keyed by symbol ID
    pub symbol_properties: HashMap<u64, Value>,
    /// Prototype link
    pub prototype: Prototype,
    /// Native data slot
    pub payload: Payload,
    /// Custom string-tag override, if any
    pub to_string_tag: Option<String>,
}

impl ObjectData {
    /// Create an object with the given class tag, base prototype, and no payload.
    pub fn new(class_tag: impl Into<String>) -> Self {
        ObjectData {
            class_tag: class_tag.into(),
            properties: Vec::new(),
            symbol_properties: HashMap::new(),
            prototype: Prototype::Base,
            payload: Payload::None,
            to_string_tag: None,
        }
    }

    /// Create an object with the given class tag and payload.
    pub fn with_payload(class_tag: impl Into<String>, payload: Payload) -> Self {
        let mut data = ObjectData::new(class_tag);
        data.payload = payload;
        data
    }

    /// Get an own string-keyed property.
    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Set a string-keyed property, replacing any existing entry.
    pub fn set_prop(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(slot) = self.properties.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.properties.push((key, value));
        }
    }

    /// Get an own symbol-keyed property by symbol ID.
    pub fn get_symbol_own(&self, id: u64) -> Option<Value> {
        self.symbol_properties.get(&id).cloned()
    }
}
