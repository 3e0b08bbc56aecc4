// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, Value};
use crate::ecmascript::builtins::{BuiltinFunction, Proxy};

/// Union of callable objects: built-in functions and proxies whose target is
/// callable. Getters, setters and proxy traps are held through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    BuiltinFunction(BuiltinFunction),
    Proxy(Proxy),
}

impl Function {
    pub fn into_object(self) -> Object {
        self.into()
    }

    pub fn into_value(self) -> Value {
        self.into()
    }
}

impl From<BuiltinFunction> for Function {
    fn from(value: BuiltinFunction) -> Self {
        Function::BuiltinFunction(value)
    }
}

impl From<Function> for Object {
    fn from(value: Function) -> Self {
        match value {
            Function::BuiltinFunction(data) => Object::BuiltinFunction(data),
            Function::Proxy(data) => Object::Proxy(data),
        }
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        match value {
            Function::BuiltinFunction(data) => Value::BuiltinFunction(data),
            Function::Proxy(data) => Value::Proxy(data),
        }
    }
}
