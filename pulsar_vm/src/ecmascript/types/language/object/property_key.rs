// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    SmallInteger,
    ecmascript::{
        execution::Agent,
        types::{String, Symbol, Value},
    },
};

/// Largest valid array index, `2^32 - 2`.
pub(crate) const MAX_ARRAY_INDEX: u32 = u32::MAX - 1;

/// ### [Property keys](https://tc39.es/ecma262/#sec-object-type)
///
/// Canonicalized property key. A string that is the exact canonical decimal
/// rendering of an integer in `0..=MAX_ARRAY_INDEX` is stored in integer
/// form; all other strings intern as string keys and symbols compare by
/// identity. The canonical forms make plain `==` and hashing of keys valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKey {
    Integer(SmallInteger),
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, value: &str) -> PropertyKey {
        if let Some(index) = parse_string_to_integer_property_key(value) {
            PropertyKey::Integer(SmallInteger::from(index))
        } else {
            PropertyKey::String(String::from_str(agent, value))
        }
    }

    pub fn from_string(agent: &mut Agent, value: std::string::String) -> PropertyKey {
        Self::from_str(agent, &value)
    }

    /// Canonicalize a signed integer: in-range values become index keys,
    /// everything else goes through its decimal string rendering.
    pub fn from_integer(agent: &mut Agent, value: i64) -> PropertyKey {
        if (0..=MAX_ARRAY_INDEX as i64).contains(&value) {
            PropertyKey::Integer(SmallInteger::from(value as u32))
        } else {
            PropertyKey::String(String::from_string(agent, value.to_string()))
        }
    }

    pub fn is_array_index(self) -> bool {
        matches!(self, PropertyKey::Integer(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    pub(crate) fn array_index(self) -> Option<u32> {
        match self {
            PropertyKey::Integer(data) => Some(data.into_i64() as u32),
            _ => None,
        }
    }

    /// The key as a language value; integer keys surface as their string
    /// rendering, which is what trap handlers and reflection observe.
    pub fn into_value(self, agent: &mut Agent) -> Value {
        match self {
            PropertyKey::Integer(data) => {
                Value::String(String::from_string(agent, data.into_i64().to_string()))
            }
            PropertyKey::String(data) => Value::String(data),
            PropertyKey::Symbol(data) => Value::Symbol(data),
        }
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        debug_assert!(value <= MAX_ARRAY_INDEX);
        PropertyKey::Integer(SmallInteger::from(value))
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

/// Recognize the canonical decimal rendering of an array index: no empty
/// string, no sign, no leading zero, value at most [`MAX_ARRAY_INDEX`].
pub(crate) fn parse_string_to_integer_property_key(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    if !bytes.iter().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let parsed = value.parse::<u64>().ok()?;
    if parsed <= MAX_ARRAY_INDEX as u64 {
        Some(parsed as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_ARRAY_INDEX, parse_string_to_integer_property_key};

    #[test]
    fn canonical_indices() {
        assert_eq!(parse_string_to_integer_property_key("0"), Some(0));
        assert_eq!(parse_string_to_integer_property_key("7"), Some(7));
        assert_eq!(
            parse_string_to_integer_property_key("4294967294"),
            Some(MAX_ARRAY_INDEX)
        );
    }

    #[test]
    fn non_canonical_strings() {
        assert_eq!(parse_string_to_integer_property_key(""), None);
        assert_eq!(parse_string_to_integer_property_key("01"), None);
        assert_eq!(parse_string_to_integer_property_key("00"), None);
        assert_eq!(parse_string_to_integer_property_key("-1"), None);
        assert_eq!(parse_string_to_integer_property_key("+1"), None);
        assert_eq!(parse_string_to_integer_property_key("1.0"), None);
        assert_eq!(parse_string_to_integer_property_key(" 1"), None);
        // One past the largest array index stays a string key.
        assert_eq!(parse_string_to_integer_property_key("4294967295"), None);
        assert_eq!(parse_string_to_integer_property_key("99999999999"), None);
    }
}
