// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod data;
mod internal_methods;
mod internal_slots;
mod property_key;
mod property_storage;

use std::{
    any::Any,
    ops::{Index, IndexMut},
};

pub use data::ObjectHeapData;
pub use internal_methods::InternalMethods;
pub use internal_slots::InternalSlots;
pub use property_key::PropertyKey;
pub use property_storage::PropertyStorage;

use super::Value;
use crate::{
    ecmascript::{
        builtins::{ArgumentsList, Array, BuiltinFunction, Proxy, ordinary::shape::ObjectShape},
        execution::{Agent, JsResult},
        types::PropertyDescriptor,
    },
    heap::{Heap, indexes::ObjectIndex},
};

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// Union of all object kinds the engine knows. Internal method calls
/// dispatch through this enum to the kind's implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Object(OrdinaryObject),
    Array(Array),
    BuiltinFunction(BuiltinFunction),
    Proxy(Proxy),
}

/// Handle to an ordinary object's heap data: shape, property values,
/// indexed properties and internal slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrdinaryObject(pub(crate) ObjectIndex);

impl OrdinaryObject {
    pub fn property_storage(self) -> PropertyStorage {
        PropertyStorage::new(self)
    }

    /// Shape identity, shared between objects built by identical
    /// transition sequences.
    pub fn shape(self, agent: &Agent) -> ObjectShape {
        agent[self].shape
    }

    pub fn into_value(self) -> Value {
        Value::Object(self)
    }

    pub fn add_internal_slot(self, agent: &mut Agent, name: &'static str, value: Box<dyn Any>) {
        agent[self].internal_slots.insert(name, value);
    }

    pub fn has_internal_slot(self, agent: &Agent, name: &'static str) -> bool {
        agent[self].internal_slots.has(name)
    }

    pub fn internal_slot<'a, T: 'static>(
        self,
        agent: &'a Agent,
        name: &'static str,
    ) -> Option<&'a T> {
        agent[self].internal_slots.get(name)
    }

    pub fn internal_slot_mut<'a, T: 'static>(
        self,
        agent: &'a mut Agent,
        name: &'static str,
    ) -> Option<&'a mut T> {
        agent[self].internal_slots.get_mut(name)
    }
}

impl Object {
    pub fn into_value(self) -> Value {
        match self {
            Object::Object(data) => Value::Object(data),
            Object::Array(data) => Value::Array(data),
            Object::BuiltinFunction(data) => Value::BuiltinFunction(data),
            Object::Proxy(data) => Value::Proxy(data),
        }
    }

    /// Attach an opaque internal field to this object. Arrays and functions
    /// store it on their backing object; proxies have no local storage and
    /// do not support internal slots.
    pub fn add_internal_slot(self, agent: &mut Agent, name: &'static str, value: Box<dyn Any>) {
        self.get_or_create_backing_object(agent)
            .add_internal_slot(agent, name, value);
    }

    pub fn has_internal_slot(self, agent: &Agent, name: &'static str) -> bool {
        self.get_backing_object(agent)
            .is_some_and(|object| object.has_internal_slot(agent, name))
    }

    pub fn internal_slot<'a, T: 'static>(
        self,
        agent: &'a Agent,
        name: &'static str,
    ) -> Option<&'a T> {
        self.get_backing_object(agent)?.internal_slot(agent, name)
    }

    pub fn internal_slot_mut<'a, T: 'static>(
        self,
        agent: &'a mut Agent,
        name: &'static str,
    ) -> Option<&'a mut T> {
        let backing_object = self.get_backing_object(agent)?;
        backing_object.internal_slot_mut(agent, name)
    }
}

impl From<OrdinaryObject> for Object {
    fn from(value: OrdinaryObject) -> Self {
        Object::Object(value)
    }
}

impl From<Array> for Object {
    fn from(value: Array) -> Self {
        Object::Array(value)
    }
}

impl From<BuiltinFunction> for Object {
    fn from(value: BuiltinFunction) -> Self {
        Object::BuiltinFunction(value)
    }
}

impl From<Proxy> for Object {
    fn from(value: Proxy) -> Self {
        Object::Proxy(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        value.into_value()
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(data) => Ok(Object::Object(data)),
            Value::Array(data) => Ok(Object::Array(data)),
            Value::BuiltinFunction(data) => Ok(Object::BuiltinFunction(data)),
            Value::Proxy(data) => Ok(Object::Proxy(data)),
            _ => Err(()),
        }
    }
}

impl Index<OrdinaryObject> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        &self.heap[index]
    }
}

impl IndexMut<OrdinaryObject> for Agent {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        &mut self.heap[index]
    }
}

impl Index<OrdinaryObject> for Heap {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        self.objects
            .get(index.0.into_index())
            .expect("OrdinaryObject out of bounds")
            .as_ref()
            .expect("OrdinaryObject slot empty")
    }
}

impl IndexMut<OrdinaryObject> for Heap {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        self.objects
            .get_mut(index.0.into_index())
            .expect("OrdinaryObject out of bounds")
            .as_mut()
            .expect("OrdinaryObject slot empty")
    }
}

impl InternalSlots for Object {
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        match self {
            Object::Object(data) => data.get_backing_object(agent),
            Object::Array(data) => data.get_backing_object(agent),
            Object::BuiltinFunction(data) => data.get_backing_object(agent),
            Object::Proxy(data) => data.get_backing_object(agent),
        }
    }

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        match self {
            Object::Object(data) => data.create_backing_object(agent),
            Object::Array(data) => data.create_backing_object(agent),
            Object::BuiltinFunction(data) => data.create_backing_object(agent),
            Object::Proxy(data) => data.create_backing_object(agent),
        }
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        match self {
            Object::Object(data) => data.internal_prototype(agent),
            Object::Array(data) => data.internal_prototype(agent),
            Object::BuiltinFunction(data) => data.internal_prototype(agent),
            Object::Proxy(data) => data.internal_prototype(agent),
        }
    }

    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        match self {
            Object::Object(data) => data.internal_set_prototype(agent, prototype),
            Object::Array(data) => data.internal_set_prototype(agent, prototype),
            Object::BuiltinFunction(data) => data.internal_set_prototype(agent, prototype),
            Object::Proxy(data) => data.internal_set_prototype(agent, prototype),
        }
    }

    fn internal_extensible(self, agent: &Agent) -> bool {
        match self {
            Object::Object(data) => data.internal_extensible(agent),
            Object::Array(data) => data.internal_extensible(agent),
            Object::BuiltinFunction(data) => data.internal_extensible(agent),
            Object::Proxy(data) => data.internal_extensible(agent),
        }
    }

    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        match self {
            Object::Object(data) => data.internal_set_extensible(agent, value),
            Object::Array(data) => data.internal_set_extensible(agent, value),
            Object::BuiltinFunction(data) => data.internal_set_extensible(agent, value),
            Object::Proxy(data) => data.internal_set_extensible(agent, value),
        }
    }
}

impl InternalMethods for Object {
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        match self {
            Object::Object(data) => data.internal_get_prototype_of(agent),
            Object::Array(data) => data.internal_get_prototype_of(agent),
            Object::BuiltinFunction(data) => data.internal_get_prototype_of(agent),
            Object::Proxy(data) => data.internal_get_prototype_of(agent),
        }
    }

    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        match self {
            Object::Object(data) => data.internal_set_prototype_of(agent, prototype),
            Object::Array(data) => data.internal_set_prototype_of(agent, prototype),
            Object::BuiltinFunction(data) => data.internal_set_prototype_of(agent, prototype),
            Object::Proxy(data) => data.internal_set_prototype_of(agent, prototype),
        }
    }

    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        match self {
            Object::Object(data) => data.internal_is_extensible(agent),
            Object::Array(data) => data.internal_is_extensible(agent),
            Object::BuiltinFunction(data) => data.internal_is_extensible(agent),
            Object::Proxy(data) => data.internal_is_extensible(agent),
        }
    }

    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        match self {
            Object::Object(data) => data.internal_prevent_extensions(agent),
            Object::Array(data) => data.internal_prevent_extensions(agent),
            Object::BuiltinFunction(data) => data.internal_prevent_extensions(agent),
            Object::Proxy(data) => data.internal_prevent_extensions(agent),
        }
    }

    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        match self {
            Object::Object(data) => data.internal_get_own_property(agent, property_key),
            Object::Array(data) => data.internal_get_own_property(agent, property_key),
            Object::BuiltinFunction(data) => data.internal_get_own_property(agent, property_key),
            Object::Proxy(data) => data.internal_get_own_property(agent, property_key),
        }
    }

    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        match self {
            Object::Object(data) => {
                data.internal_define_own_property(agent, property_key, descriptor)
            }
            Object::Array(data) => {
                data.internal_define_own_property(agent, property_key, descriptor)
            }
            Object::BuiltinFunction(data) => {
                data.internal_define_own_property(agent, property_key, descriptor)
            }
            Object::Proxy(data) => {
                data.internal_define_own_property(agent, property_key, descriptor)
            }
        }
    }

    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        match self {
            Object::Object(data) => data.internal_has_property(agent, property_key),
            Object::Array(data) => data.internal_has_property(agent, property_key),
            Object::BuiltinFunction(data) => data.internal_has_property(agent, property_key),
            Object::Proxy(data) => data.internal_has_property(agent, property_key),
        }
    }

    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        match self {
            Object::Object(data) => data.internal_get(agent, property_key, receiver),
            Object::Array(data) => data.internal_get(agent, property_key, receiver),
            Object::BuiltinFunction(data) => data.internal_get(agent, property_key, receiver),
            Object::Proxy(data) => data.internal_get(agent, property_key, receiver),
        }
    }

    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        match self {
            Object::Object(data) => data.internal_set(agent, property_key, value, receiver),
            Object::Array(data) => data.internal_set(agent, property_key, value, receiver),
            Object::BuiltinFunction(data) => {
                data.internal_set(agent, property_key, value, receiver)
            }
            Object::Proxy(data) => data.internal_set(agent, property_key, value, receiver),
        }
    }

    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        match self {
            Object::Object(data) => data.internal_delete(agent, property_key),
            Object::Array(data) => data.internal_delete(agent, property_key),
            Object::BuiltinFunction(data) => data.internal_delete(agent, property_key),
            Object::Proxy(data) => data.internal_delete(agent, property_key),
        }
    }

    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        match self {
            Object::Object(data) => data.internal_own_property_keys(agent),
            Object::Array(data) => data.internal_own_property_keys(agent),
            Object::BuiltinFunction(data) => data.internal_own_property_keys(agent),
            Object::Proxy(data) => data.internal_own_property_keys(agent),
        }
    }

    fn internal_call(
        self,
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        match self {
            Object::BuiltinFunction(data) => data.internal_call(agent, this_value, arguments),
            Object::Proxy(data) => data.internal_call(agent, this_value, arguments),
            _ => unreachable!("object is not callable"),
        }
    }

    fn internal_construct(
        self,
        agent: &mut Agent,
        arguments: ArgumentsList,
        new_target: Object,
    ) -> JsResult<Object> {
        match self {
            Object::BuiltinFunction(data) => data.internal_construct(agent, arguments, new_target),
            Object::Proxy(data) => data.internal_construct(agent, arguments, new_target),
            _ => unreachable!("object is not a constructor"),
        }
    }
}
