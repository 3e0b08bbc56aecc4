// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builtins::error::ErrorHeapData,
        types::{String, Value},
    },
    heap::{CreateHeapData, Heap},
};

pub type JsResult<T> = Result<T, JsError>;

/// A thrown JavaScript value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub fn value(self) -> Value {
        self.0
    }

    pub fn kind(self, agent: &Agent) -> Option<ExceptionType> {
        match self.0 {
            Value::Error(error) => Some(error.kind(agent)),
            _ => None,
        }
    }

    pub fn message(self, agent: &Agent) -> Option<&str> {
        match self.0 {
            Value::Error(error) => error.message(agent).map(|message| message.as_str(agent)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionType {
    Error,
    AggregateError,
    EvalError,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
    UriError,
}

/// Holds the heap and hosts every operation on it.
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
}

impl Agent {
    pub fn new() -> Self {
        Self { heap: Heap::new() }
    }

    pub fn throw_exception(&mut self, kind: ExceptionType, message: &'static str) -> JsError {
        let message = String::from_str(self, message);
        let error = self.heap.create(ErrorHeapData::new(kind, Some(message)));
        JsError(Value::Error(error))
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}
