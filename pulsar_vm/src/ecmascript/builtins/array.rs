// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.4.2 Array Exotic Objects](https://tc39.es/ecma262/#sec-array-exotic-objects)

pub(crate) mod abstract_operations;
pub mod data;

use std::ops::{Index, IndexMut};

pub use abstract_operations::{array_create, create_array_from_list};
use abstract_operations::array_set_length;
use data::ArrayHeapData;

use crate::{
    ecmascript::{
        builtins::ordinary::{ordinary_define_own_property, ordinary_get_own_property},
        execution::{Agent, JsResult},
        types::{
            InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyDescriptor,
            PropertyKey, Value,
        },
    },
    heap::{Heap, indexes::ArrayIndex},
};

/// An Array exotic object. The elements live in the backing object's indexed
/// property store; only the length and its writability are kept here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array(pub(crate) ArrayIndex);

impl Array {
    pub fn len(self, agent: &Agent) -> u32 {
        agent[self].len
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].len == 0
    }

    pub fn into_object(self) -> Object {
        Object::Array(self)
    }

    pub fn into_value(self) -> Value {
        Value::Array(self)
    }
}

impl InternalSlots for Array {
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        Some(agent[self].backing_object)
    }

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        agent[self].backing_object
    }
}

impl InternalMethods for Array {
    /// ### [10.4.2.1 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-array-exotic-objects-defineownproperty-p-desc)
    ///
    /// The length property has no slot anywhere; its descriptor is built
    /// from the array's own fields on every lookup.
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        let length_key = PropertyKey::from_str(agent, "length");
        if property_key == length_key {
            let data = &agent[self];
            return Ok(Some(PropertyDescriptor {
                value: Some(Value::from(data.len)),
                writable: Some(data.len_writable),
                get: None,
                set: None,
                enumerable: Some(false),
                configurable: Some(false),
            }));
        }
        let backing_object = agent[self].backing_object;
        Ok(ordinary_get_own_property(agent, backing_object, property_key))
    }

    /// ### [10.4.2.1 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-array-exotic-objects-defineownproperty-p-desc)
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        // 2. If P is "length", return ? ArraySetLength(A, Desc).
        let length_key = PropertyKey::from_str(agent, "length");
        if property_key == length_key {
            return array_set_length(agent, self, descriptor);
        }
        // 3. Else if P is an array index:
        if let Some(index) = property_key.array_index() {
            let len = agent[self].len;
            // 3.f. If index >= oldLen and oldLenDesc.[[Writable]] is false,
            //      return false.
            if index >= len && !agent[self].len_writable {
                return Ok(false);
            }
            // 3.g. Let succeeded be ! OrdinaryDefineOwnProperty(A, P, Desc).
            let backing_object = agent[self].backing_object;
            let succeeded = ordinary_define_own_property(
                agent,
                self.into(),
                backing_object,
                property_key,
                descriptor,
            )?;
            // 3.i. If index >= oldLen, set oldLenDesc.[[Value]] to index + 1.
            if succeeded && index >= len {
                agent[self].len = index + 1;
            }
            return Ok(succeeded);
        }
        // 4. Return ? OrdinaryDefineOwnProperty(A, P, Desc).
        let backing_object = agent[self].backing_object;
        ordinary_define_own_property(agent, self.into(), backing_object, property_key, descriptor)
    }

    /// Array indices in ascending order, then "length", then the remaining
    /// string keys, then symbol keys.
    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        let backing_object = agent[self].backing_object;
        let shape = agent[backing_object].shape;
        let mut keys = Vec::with_capacity(shape.len(agent) as usize + 8);
        keys.extend(agent[backing_object].indexed.keys().map(PropertyKey::from));
        keys.push(PropertyKey::from_str(agent, "length"));
        let table = shape.property_table(agent);
        let mut symbol_keys = Vec::new();
        for key in table.keys() {
            match key {
                PropertyKey::String(_) => keys.push(key),
                PropertyKey::Symbol(_) => symbol_keys.push(key),
                PropertyKey::Integer(_) => unreachable!("integer key in a shape property table"),
            }
        }
        keys.extend(symbol_keys);
        Ok(keys)
    }
}

impl Index<Array> for Agent {
    type Output = ArrayHeapData;

    fn index(&self, index: Array) -> &Self::Output {
        &self.heap[index]
    }
}

impl IndexMut<Array> for Agent {
    fn index_mut(&mut self, index: Array) -> &mut Self::Output {
        &mut self.heap[index]
    }
}

impl Index<Array> for Heap {
    type Output = ArrayHeapData;

    fn index(&self, index: Array) -> &Self::Output {
        self.arrays
            .get(index.0.into_index())
            .expect("Array out of bounds")
            .as_ref()
            .expect("Array slot empty")
    }
}

impl IndexMut<Array> for Heap {
    fn index_mut(&mut self, index: Array) -> &mut Self::Output {
        self.arrays
            .get_mut(index.0.into_index())
            .expect("Array out of bounds")
            .as_mut()
            .expect("Array slot empty")
    }
}
