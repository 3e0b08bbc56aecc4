// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! Only the conversions the property engine itself needs. Object arguments
//! throw instead of going through ToPrimitive; there are no ordinary
//! `valueOf`/`toString` methods to consult here.

use crate::{
    SmallInteger,
    ecmascript::{
        execution::{Agent, ExceptionType, JsResult},
        types::{PropertyKey, String, Value},
    },
};

/// ### [7.1.2 ToBoolean ( argument )](https://tc39.es/ecma262/#sec-toboolean)
pub fn to_boolean(agent: &Agent, value: Value) -> bool {
    match value {
        Value::Undefined | Value::Null => false,
        Value::Boolean(data) => data,
        Value::String(data) => !data.is_empty(agent),
        Value::Integer(data) => data.into_i64() != 0,
        Value::Number(data) => !(data == 0.0 || data.is_nan()),
        _ => true,
    }
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
pub fn to_number(agent: &mut Agent, value: Value) -> JsResult<f64> {
    match value {
        Value::Undefined => Ok(f64::NAN),
        Value::Null => Ok(0.0),
        Value::Boolean(data) => Ok(if data { 1.0 } else { 0.0 }),
        Value::Integer(data) => Ok(data.into_i64() as f64),
        Value::Number(data) => Ok(data),
        Value::String(data) => Ok(string_to_number(data.as_str(agent))),
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "cannot convert a symbol to a number",
        )),
        _ => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "cannot convert an object to a number",
        )),
    }
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
fn string_to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // fast-float also accepts spellings like "inf" that the language does
    // not; only let decimal literals through to the parser.
    if !text
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    fast_float::parse(text).unwrap_or(f64::NAN)
}

/// ### [7.1.6 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
pub fn to_uint32(agent: &mut Agent, value: Value) -> JsResult<u32> {
    let number = to_number(agent, value)?;
    if !number.is_finite() || number == 0.0 {
        return Ok(0);
    }
    // Truncate toward zero, then take the value modulo 2^32.
    Ok(number.trunc().rem_euclid(4294967296.0) as u32)
}

/// ### [7.1.20 ToLength ( argument )](https://tc39.es/ecma262/#sec-tolength)
pub fn to_length(agent: &mut Agent, value: Value) -> JsResult<i64> {
    let number = to_number(agent, value)?;
    if number.is_nan() || number <= 0.0 {
        return Ok(0);
    }
    Ok((number.trunc() as i64).min(SmallInteger::MAX))
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
pub fn to_string(agent: &mut Agent, value: Value) -> JsResult<String> {
    match value {
        Value::Undefined => Ok(String::from_str(agent, "undefined")),
        Value::Null => Ok(String::from_str(agent, "null")),
        Value::Boolean(data) => Ok(String::from_str(agent, if data { "true" } else { "false" })),
        Value::String(data) => Ok(data),
        Value::Integer(data) => {
            let text = data.into_i64().to_string();
            Ok(String::from_string(agent, text))
        }
        Value::Number(data) => {
            let mut buffer = ryu_js::Buffer::new();
            let text = buffer.format(data).to_owned();
            Ok(String::from_string(agent, text))
        }
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "cannot convert a symbol to a string",
        )),
        _ => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "cannot convert an object to a string",
        )),
    }
}

/// ### [7.1.19 ToPropertyKey ( argument )](https://tc39.es/ecma262/#sec-topropertykey)
pub fn to_property_key(agent: &mut Agent, value: Value) -> JsResult<PropertyKey> {
    match value {
        Value::Symbol(data) => Ok(PropertyKey::from(data)),
        Value::Integer(data) => Ok(PropertyKey::from_integer(agent, data.into_i64())),
        _ => {
            let string = to_string(agent, value)?;
            let string = string.as_str(agent).to_owned();
            Ok(PropertyKey::from_string(agent, string))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::string_to_number;

    #[test]
    fn string_to_number_literals() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("  42  "), 42.0);
        assert_eq!(string_to_number("-1.5e3"), -1500.0);
        assert_eq!(string_to_number("Infinity"), f64::INFINITY);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("12px").is_nan());
    }
}
