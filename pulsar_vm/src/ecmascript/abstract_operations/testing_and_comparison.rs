// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::{
    execution::Agent,
    types::{Function, Value},
};

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
///
/// Returns the callable as a [`Function`] rather than a boolean, so callers
/// can invoke it without re-matching.
pub fn is_callable(agent: &Agent, value: Value) -> Option<Function> {
    match value {
        Value::BuiltinFunction(function) => Some(Function::BuiltinFunction(function)),
        Value::Proxy(proxy) if agent[proxy].callable => Some(Function::Proxy(proxy)),
        _ => None,
    }
}

/// ### [7.2.4 IsConstructor ( argument )](https://tc39.es/ecma262/#sec-isconstructor)
pub fn is_constructor(agent: &Agent, value: Value) -> bool {
    match value {
        Value::BuiltinFunction(function) => function.is_constructor(agent),
        Value::Proxy(proxy) => agent[proxy].constructable,
        _ => false,
    }
}

/// ### [7.2.10 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
///
/// Unlike `==` on numbers this equates NaNs and distinguishes the zeroes.
/// Integral numbers are normalized to the inline integer representation on
/// construction, so the two number variants never alias.
pub fn same_value(x: Value, y: Value) -> bool {
    match (x, y) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                true
            } else {
                x.to_bits() == y.to_bits()
            }
        }
        _ => x == y,
    }
}
