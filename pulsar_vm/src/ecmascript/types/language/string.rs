// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use crate::{
    ecmascript::execution::Agent,
    heap::{Heap, indexes::StringIndex},
};

/// Handle to an interned heap string.
///
/// The heap deduplicates string contents on allocation, so two handles are
/// equal if and only if their contents are equal. This is what makes handle
/// equality and hashing valid for property keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct String(pub(crate) StringIndex);

#[derive(Debug, Clone)]
pub struct StringHeapData {
    pub(crate) data: Box<str>,
}

impl String {
    pub fn from_str(agent: &mut Agent, data: &str) -> String {
        agent.heap.alloc_string(data)
    }

    pub fn from_string(agent: &mut Agent, data: std::string::String) -> String {
        agent.heap.alloc_string(&data)
    }

    pub fn as_str(self, agent: &Agent) -> &str {
        &agent[self].data
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].data.is_empty()
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        &self.heap[index]
    }
}

impl Index<String> for Heap {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        self.strings
            .get(index.0.into_index())
            .expect("String out of bounds")
            .as_ref()
            .expect("String slot empty")
    }
}
