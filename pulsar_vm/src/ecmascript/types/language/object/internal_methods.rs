// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{InternalSlots, Object, PropertyKey};
use crate::ecmascript::{
    builtins::{
        ArgumentsList,
        ordinary::{
            ordinary_define_own_property, ordinary_delete, ordinary_get,
            ordinary_get_own_property, ordinary_has_property, ordinary_own_property_keys,
            ordinary_set, ordinary_set_prototype_of,
        },
    },
    execution::{Agent, JsResult},
    types::{PropertyDescriptor, Value},
};

/// ### [6.1.7.2 Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-object-internal-methods-and-internal-slots)
///
/// The default bodies are the ordinary object algorithms of 10.1; exotic
/// object kinds override the strict subset their semantics require.
pub trait InternalMethods: InternalSlots {
    /// ### [\[\[GetPrototypeOf\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-getprototypeof)
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        Ok(self.internal_prototype(agent))
    }

    /// ### [\[\[SetPrototypeOf\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-setprototypeof-v)
    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        Ok(ordinary_set_prototype_of(agent, self.into(), prototype))
    }

    /// ### [\[\[IsExtensible\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-isextensible)
    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        Ok(self.internal_extensible(agent))
    }

    /// ### [\[\[PreventExtensions\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-preventextensions)
    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        self.internal_set_extensible(agent, false);
        Ok(true)
    }

    /// ### [\[\[GetOwnProperty\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-getownproperty-p)
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        match self.get_backing_object(agent) {
            Some(backing_object) => {
                Ok(ordinary_get_own_property(agent, backing_object, property_key))
            }
            None => Ok(None),
        }
    }

    /// ### [\[\[DefineOwnProperty\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-defineownproperty-p-desc)
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        let backing_object = self.get_or_create_backing_object(agent);
        ordinary_define_own_property(agent, self.into(), backing_object, property_key, descriptor)
    }

    /// ### [\[\[HasProperty\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-hasproperty-p)
    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        ordinary_has_property(agent, self.into(), property_key)
    }

    /// ### [\[\[Get\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-get-p-receiver)
    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        ordinary_get(agent, self.into(), property_key, receiver)
    }

    /// ### [\[\[Set\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-set-p-v-receiver)
    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        ordinary_set(agent, self.into(), property_key, value, receiver)
    }

    /// ### [\[\[Delete\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-delete-p)
    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        ordinary_delete(agent, self.into(), property_key)
    }

    /// ### [\[\[OwnPropertyKeys\]\]](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-ownpropertykeys)
    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        match self.get_backing_object(agent) {
            Some(backing_object) => Ok(ordinary_own_property_keys(agent, backing_object)),
            None => Ok(vec![]),
        }
    }

    /// ### [\[\[Call\]\]](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    fn internal_call(
        self,
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        let _ = (agent, this_value, arguments);
        unreachable!("object is not callable");
    }

    /// ### [\[\[Construct\]\]](https://tc39.es/ecma262/#sec-built-in-function-objects-construct-argumentslist-newtarget)
    fn internal_construct(
        self,
        agent: &mut Agent,
        arguments: ArgumentsList,
        new_target: Object,
    ) -> JsResult<Object> {
        let _ = (agent, arguments, new_target);
        unreachable!("object is not a constructor");
    }
}
