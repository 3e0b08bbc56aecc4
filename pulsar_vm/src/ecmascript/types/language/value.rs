// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{OrdinaryObject, String, Symbol};
use crate::{
    SmallInteger,
    ecmascript::builtins::{Array, BuiltinFunction, Error, Proxy},
};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
///
/// Language values as a small `Copy` enum. Number values keep a fast path:
/// integral doubles within the safe-integer range are stored inline as
/// [`SmallInteger`], everything else as an f64.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Symbol(Symbol),
    Integer(SmallInteger),
    Number(f64),
    Object(OrdinaryObject),
    Array(Array),
    BuiltinFunction(BuiltinFunction),
    Proxy(Proxy),
    Error(Error),
}

impl Value {
    /// Create a number value, normalizing integral doubles into the inline
    /// integer representation.
    pub fn from_f64(value: f64) -> Self {
        if let Ok(data) = SmallInteger::try_from(value) {
            Value::Integer(data)
        } else {
            Value::Number(value)
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_string(self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_number(self) -> bool {
        matches!(self, Value::Integer(_) | Value::Number(_))
    }

    pub fn is_object(self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Array(_) | Value::BuiltinFunction(_) | Value::Proxy(_)
        )
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<SmallInteger> for Value {
    fn from(value: SmallInteger) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(SmallInteger::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(SmallInteger::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::from_f64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Error> for Value {
    fn from(value: Error) -> Self {
        Value::Error(value)
    }
}
