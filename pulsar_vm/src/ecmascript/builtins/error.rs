// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use crate::{
    ecmascript::{
        execution::{Agent, ExceptionType},
        types::{String, Value},
    },
    heap::{Heap, indexes::ErrorIndex},
};

#[derive(Debug)]
pub struct ErrorHeapData {
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
}

impl ErrorHeapData {
    pub(crate) fn new(kind: ExceptionType, message: Option<String>) -> Self {
        Self { kind, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error(pub(crate) ErrorIndex);

impl Error {
    pub fn kind(self, agent: &Agent) -> ExceptionType {
        agent[self].kind
    }

    pub fn message(self, agent: &Agent) -> Option<String> {
        agent[self].message
    }

    pub fn into_value(self) -> Value {
        Value::Error(self)
    }
}

impl Index<Error> for Agent {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        &self.heap[index]
    }
}

impl IndexMut<Error> for Agent {
    fn index_mut(&mut self, index: Error) -> &mut Self::Output {
        &mut self.heap[index]
    }
}

impl Index<Error> for Heap {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        self.errors
            .get(index.0.into_index())
            .expect("Error out of bounds")
            .as_ref()
            .expect("Error slot empty")
    }
}

impl IndexMut<Error> for Heap {
    fn index_mut(&mut self, index: Error) -> &mut Self::Output {
        self.errors
            .get_mut(index.0.into_index())
            .expect("Error out of bounds")
            .as_mut()
            .expect("Error slot empty")
    }
}
