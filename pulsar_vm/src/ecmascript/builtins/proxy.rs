// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.5 Proxy Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots)

pub(crate) mod abstract_operations;
pub mod data;

use std::ops::{Index, IndexMut};

pub use abstract_operations::proxy_create;
use abstract_operations::{NonRevokedProxy, validate_non_revoked_proxy};
use ahash::AHashSet;
use data::ProxyHeapData;

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{
                call, call_function, create_list_from_array_like, get_object_method,
            },
            testing_and_comparison::same_value,
            type_conversion::to_boolean,
        },
        builtins::{
            ArgumentsList, array::create_array_from_list,
            ordinary::is_compatible_property_descriptor,
        },
        execution::{Agent, ExceptionType, JsResult},
        types::{
            InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyDescriptor,
            PropertyKey, Value,
        },
    },
    heap::{Heap, indexes::ProxyIndex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Proxy(pub(crate) ProxyIndex);

impl Proxy {
    pub fn into_object(self) -> Object {
        Object::Proxy(self)
    }

    pub fn into_value(self) -> Value {
        Value::Proxy(self)
    }

    pub fn is_revoked(self, agent: &Agent) -> bool {
        agent[self].target.is_none()
    }

    /// ### [28.2.2.1 Proxy Revocation Functions](https://tc39.es/ecma262/#sec-proxy-revocation-functions)
    ///
    /// Clears the target and handler; every later operation on the proxy
    /// throws a TypeError. Revoking twice is a no-op.
    pub fn revoke(self, agent: &mut Agent) {
        let data = &mut agent[self];
        data.target = None;
        data.handler = None;
    }
}

impl InternalSlots for Proxy {
    fn get_backing_object(self, _: &Agent) -> Option<OrdinaryObject> {
        None
    }

    fn create_backing_object(self, _: &mut Agent) -> OrdinaryObject {
        unreachable!("proxy has no backing object");
    }
}

impl InternalMethods for Proxy {
    /// ### [10.5.1 \[\[GetPrototypeOf\]\] ( )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-getprototypeof)
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "getPrototypeOf");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_get_prototype_of(agent);
        };
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value()])),
        )?;
        // 8. If handlerProto is not an Object and handlerProto is not null,
        //    throw a TypeError exception.
        let handler_prototype = match trap_result {
            Value::Null => None,
            _ => match Object::try_from(trap_result) {
                Ok(object) => Some(object),
                Err(_) => {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "getPrototypeOf trap must return an object or null",
                    ));
                }
            },
        };
        // 9-10. An extensible target places no constraint on the answer.
        if target.internal_is_extensible(agent)? {
            return Ok(handler_prototype);
        }
        // 11-12. A non-extensible target pins the prototype.
        let target_prototype = target.internal_get_prototype_of(agent)?;
        if handler_prototype != target_prototype {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "getPrototypeOf trap disagrees with its non-extensible target",
            ));
        }
        Ok(handler_prototype)
    }

    /// ### [10.5.2 \[\[SetPrototypeOf\]\] ( V )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-setprototypeof-v)
    fn internal_set_prototype_of(
        self,
        agent: &mut Agent,
        prototype: Option<Object>,
    ) -> JsResult<bool> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "setPrototypeOf");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_set_prototype_of(agent, prototype);
        };
        let prototype_value = prototype.map_or(Value::Null, Object::into_value);
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value(), prototype_value])),
        )?;
        // 9. If booleanTrapResult is false, return false.
        if !to_boolean(agent, trap_result) {
            return Ok(false);
        }
        // 10-11. An extensible target accepts any claimed change.
        if target.internal_is_extensible(agent)? {
            return Ok(true);
        }
        // 12-14. A non-extensible target must keep its prototype.
        let target_prototype = target.internal_get_prototype_of(agent)?;
        if prototype != target_prototype {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "setPrototypeOf trap changed the prototype of a non-extensible target",
            ));
        }
        Ok(true)
    }

    /// ### [10.5.3 \[\[IsExtensible\]\] ( )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-isextensible)
    fn internal_is_extensible(self, agent: &mut Agent) -> JsResult<bool> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "isExtensible");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_is_extensible(agent);
        };
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value()])),
        )?;
        let result = to_boolean(agent, trap_result);
        // 8-9. The trap must agree with the target exactly.
        if result != target.internal_is_extensible(agent)? {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "isExtensible trap disagrees with the target",
            ));
        }
        Ok(result)
    }

    /// ### [10.5.4 \[\[PreventExtensions\]\] ( )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-preventextensions)
    fn internal_prevent_extensions(self, agent: &mut Agent) -> JsResult<bool> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "preventExtensions");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_prevent_extensions(agent);
        };
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value()])),
        )?;
        let result = to_boolean(agent, trap_result);
        // 8. Success may only be claimed once the target is sealed off.
        if result && target.internal_is_extensible(agent)? {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "preventExtensions trap returned true while the target is extensible",
            ));
        }
        Ok(result)
    }

    /// ### [10.5.5 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-getownproperty-p)
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "getOwnPropertyDescriptor");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_get_own_property(agent, property_key);
        };
        let key_value = property_key.into_value(agent);
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value(), key_value])),
        )?;
        // 8. If trapResultObj is neither an Object nor undefined, throw.
        if trap_result != Value::Undefined && Object::try_from(trap_result).is_err() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "getOwnPropertyDescriptor trap must return an object or undefined",
            ));
        }
        // 9. Let targetDesc be ? target.[[GetOwnProperty]](P).
        let target_descriptor = target.internal_get_own_property(agent, property_key)?;
        if trap_result == Value::Undefined {
            // 10. The trap may only report a property missing when the
            //     target could lose it.
            let Some(target_descriptor) = target_descriptor else {
                return Ok(None);
            };
            if target_descriptor.configurable == Some(false) {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "getOwnPropertyDescriptor trap hid a non-configurable property",
                ));
            }
            if !target.internal_is_extensible(agent)? {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "getOwnPropertyDescriptor trap hid a property of a non-extensible target",
                ));
            }
            return Ok(None);
        }
        // 11-13. Read the claimed descriptor back and complete it.
        let extensible_target = target.internal_is_extensible(agent)?;
        let result_descriptor =
            PropertyDescriptor::to_property_descriptor(agent, trap_result)?.complete();
        // 14-15. It must be a descriptor the target could legally hold.
        if !is_compatible_property_descriptor(
            agent,
            extensible_target,
            result_descriptor,
            target_descriptor,
        ) {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "getOwnPropertyDescriptor trap reported an incompatible descriptor",
            ));
        }
        // 16. Non-configurability claims need a matching target property.
        if result_descriptor.configurable == Some(false) {
            match target_descriptor {
                None => {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "getOwnPropertyDescriptor trap reported a non-configurable property the target does not have",
                    ));
                }
                Some(target_descriptor) => {
                    if target_descriptor.configurable == Some(true) {
                        return Err(agent.throw_exception(
                            ExceptionType::TypeError,
                            "getOwnPropertyDescriptor trap reported a configurable property as non-configurable",
                        ));
                    }
                    if result_descriptor.writable == Some(false)
                        && target_descriptor.writable == Some(true)
                    {
                        return Err(agent.throw_exception(
                            ExceptionType::TypeError,
                            "getOwnPropertyDescriptor trap reported a writable property as non-writable",
                        ));
                    }
                }
            }
        }
        // 18. Return resultDesc.
        Ok(Some(result_descriptor))
    }

    /// ### [10.5.6 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-defineownproperty-p-desc)
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "defineProperty");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_define_own_property(agent, property_key, descriptor);
        };
        // 7. Let descObj be FromPropertyDescriptor(Desc).
        let descriptor_object = descriptor.from_property_descriptor(agent)?;
        let key_value = property_key.into_value(agent);
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[
                target.into_value(),
                key_value,
                descriptor_object.into_value(),
            ])),
        )?;
        // 9. If booleanTrapResult is false, return false.
        if !to_boolean(agent, trap_result) {
            return Ok(false);
        }
        let target_descriptor = target.internal_get_own_property(agent, property_key)?;
        let extensible_target = target.internal_is_extensible(agent)?;
        // 12-14. settingConfigFalse is true when Desc pins the property.
        let setting_config_false = descriptor.configurable == Some(false);
        match target_descriptor {
            None => {
                // 15.a. A new property may not appear on a non-extensible
                //       target.
                if !extensible_target {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "defineProperty trap added a property to a non-extensible target",
                    ));
                }
                // 15.b. A missing property may not be pinned.
                if setting_config_false {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "defineProperty trap defined a non-configurable property the target does not have",
                    ));
                }
            }
            Some(target_descriptor) => {
                // 16.a. The claimed definition must be applicable.
                if !is_compatible_property_descriptor(
                    agent,
                    extensible_target,
                    descriptor,
                    Some(target_descriptor),
                ) {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "defineProperty trap applied an incompatible descriptor",
                    ));
                }
                // 16.b. Pinning requires a non-configurable target property.
                if setting_config_false && target_descriptor.configurable == Some(true) {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "defineProperty trap pinned a configurable property",
                    ));
                }
                // 16.c. A writable, non-configurable data property may not
                //       be reported as non-writable.
                if target_descriptor.is_data_descriptor()
                    && target_descriptor.configurable == Some(false)
                    && target_descriptor.writable == Some(true)
                    && descriptor.writable == Some(false)
                {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "defineProperty trap made a non-configurable writable property non-writable",
                    ));
                }
            }
        }
        Ok(true)
    }

    /// ### [10.5.7 \[\[HasProperty\]\] ( P )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-hasproperty-p)
    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "has");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_has_property(agent, property_key);
        };
        let key_value = property_key.into_value(agent);
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value(), key_value])),
        )?;
        let has = to_boolean(agent, trap_result);
        if !has {
            // 9. The trap may only deny properties the target could lose.
            if let Some(target_descriptor) =
                target.internal_get_own_property(agent, property_key)?
            {
                if target_descriptor.configurable == Some(false) {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "has trap denied a non-configurable property",
                    ));
                }
                if !target.internal_is_extensible(agent)? {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "has trap denied a property of a non-extensible target",
                    ));
                }
            }
        }
        Ok(has)
    }

    /// ### [10.5.8 \[\[Get\]\] ( P, Receiver )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-get-p-receiver)
    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "get");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_get(agent, property_key, receiver);
        };
        let key_value = property_key.into_value(agent);
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value(), key_value, receiver])),
        )?;
        // 8-9. Non-configurable target properties constrain the answer.
        if let Some(target_descriptor) = target.internal_get_own_property(agent, property_key)?
            && target_descriptor.configurable == Some(false)
        {
            if target_descriptor.is_data_descriptor()
                && target_descriptor.writable == Some(false)
            {
                let target_value = target_descriptor.value.unwrap_or(Value::Undefined);
                if !same_value(trap_result, target_value) {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "get trap disagrees with a non-writable, non-configurable property",
                    ));
                }
            } else if target_descriptor.is_accessor_descriptor()
                && target_descriptor.get == Some(None)
                && trap_result != Value::Undefined
            {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "get trap returned a value for a property without a getter",
                ));
            }
        }
        Ok(trap_result)
    }

    /// ### [10.5.9 \[\[Set\]\] ( P, V, Receiver )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-set-p-v-receiver)
    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "set");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_set(agent, property_key, value, receiver);
        };
        let key_value = property_key.into_value(agent);
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[
                target.into_value(),
                key_value,
                value,
                receiver,
            ])),
        )?;
        // 9. If booleanTrapResult is false, return false.
        if !to_boolean(agent, trap_result) {
            return Ok(false);
        }
        // 10-11. Non-configurable target properties constrain the claim.
        if let Some(target_descriptor) = target.internal_get_own_property(agent, property_key)?
            && target_descriptor.configurable == Some(false)
        {
            if target_descriptor.is_data_descriptor()
                && target_descriptor.writable == Some(false)
            {
                let target_value = target_descriptor.value.unwrap_or(Value::Undefined);
                if !same_value(value, target_value) {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "set trap changed a non-writable, non-configurable property",
                    ));
                }
            } else if target_descriptor.is_accessor_descriptor()
                && target_descriptor.set == Some(None)
            {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "set trap wrote to a property without a setter",
                ));
            }
        }
        Ok(true)
    }

    /// ### [10.5.10 \[\[Delete\]\] ( P )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-delete-p)
    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "deleteProperty");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_delete(agent, property_key);
        };
        let key_value = property_key.into_value(agent);
        let trap_result = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value(), key_value])),
        )?;
        if !to_boolean(agent, trap_result) {
            return Ok(false);
        }
        // 10. A property the target does not have deletes trivially.
        let Some(target_descriptor) = target.internal_get_own_property(agent, property_key)?
        else {
            return Ok(true);
        };
        // 11. A non-configurable property may not be reported deleted.
        if target_descriptor.configurable == Some(false) {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "deleteProperty trap removed a non-configurable property",
            ));
        }
        // 12-13. Nor may any property of a non-extensible target.
        if !target.internal_is_extensible(agent)? {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "deleteProperty trap removed a property of a non-extensible target",
            ));
        }
        Ok(true)
    }

    /// ### [10.5.11 \[\[OwnPropertyKeys\]\] ( )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-ownpropertykeys)
    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "ownKeys");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            return target.internal_own_property_keys(agent);
        };
        let trap_result_array = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[target.into_value()])),
        )?;
        // 7. Let trapResult be ? CreateListFromArrayLike(trapResultArray,
        //    property-key).
        let raw_keys = create_list_from_array_like(agent, trap_result_array)?;
        let mut trap_keys = Vec::with_capacity(raw_keys.len());
        for value in raw_keys {
            let key = match value {
                Value::String(string) => {
                    let string = string.as_str(agent).to_owned();
                    PropertyKey::from_string(agent, string)
                }
                Value::Symbol(symbol) => PropertyKey::from(symbol),
                _ => {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "ownKeys trap returned a key that is neither a string nor a symbol",
                    ));
                }
            };
            trap_keys.push(key);
        }
        // 8. If trapResult contains any duplicate entries, throw.
        let mut unchecked_result_keys = AHashSet::with_capacity(trap_keys.len());
        for key in &trap_keys {
            if !unchecked_result_keys.insert(*key) {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "ownKeys trap returned duplicate keys",
                ));
            }
        }
        let extensible_target = target.internal_is_extensible(agent)?;
        // 10-15. Split the target's keys by configurability.
        let target_keys = target.internal_own_property_keys(agent)?;
        let mut target_configurable_keys = Vec::with_capacity(target_keys.len());
        let mut target_nonconfigurable_keys = Vec::new();
        for key in target_keys {
            let descriptor = target.internal_get_own_property(agent, key)?;
            if descriptor.is_some_and(|descriptor| descriptor.configurable == Some(false)) {
                target_nonconfigurable_keys.push(key);
            } else {
                target_configurable_keys.push(key);
            }
        }
        // 16. With an extensible target and no pinned keys, anything goes.
        if extensible_target && target_nonconfigurable_keys.is_empty() {
            return Ok(trap_keys);
        }
        // 17-18. Every non-configurable key must be reported.
        for key in target_nonconfigurable_keys {
            if !unchecked_result_keys.remove(&key) {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "ownKeys trap skipped a non-configurable property",
                ));
            }
        }
        // 19. If extensibleTarget is true, return trapResult.
        if extensible_target {
            return Ok(trap_keys);
        }
        // 20-21. A non-extensible target fixes the key set exactly.
        for key in target_configurable_keys {
            if !unchecked_result_keys.remove(&key) {
                return Err(agent.throw_exception(
                    ExceptionType::TypeError,
                    "ownKeys trap skipped a property of a non-extensible target",
                ));
            }
        }
        if !unchecked_result_keys.is_empty() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "ownKeys trap reported keys its non-extensible target does not have",
            ));
        }
        // 22. Return trapResult.
        Ok(trap_keys)
    }

    /// ### [10.5.12 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-call-thisargument-argumentslist)
    fn internal_call(
        self,
        agent: &mut Agent,
        this_value: Value,
        arguments: ArgumentsList,
    ) -> JsResult<Value> {
        debug_assert!(agent[self].callable);
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "apply");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            // 7. Return ? Call(target, thisArgument, argumentsList).
            return call(agent, target.into_value(), this_value, Some(arguments));
        };
        // 8. Let argArray be CreateArrayFromList(argumentsList).
        let arguments_array = create_array_from_list(agent, arguments.0)?;
        // 9. Return ? Call(trap, handler, « target, thisArgument, argArray »).
        call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[
                target.into_value(),
                this_value,
                arguments_array.into_value(),
            ])),
        )
    }

    /// ### [10.5.13 \[\[Construct\]\] ( argumentsList, newTarget )](https://tc39.es/ecma262/#sec-proxy-object-internal-methods-and-internal-slots-construct-argumentslist-newtarget)
    fn internal_construct(
        self,
        agent: &mut Agent,
        arguments: ArgumentsList,
        new_target: Object,
    ) -> JsResult<Object> {
        debug_assert!(agent[self].constructable);
        let NonRevokedProxy { target, handler } = validate_non_revoked_proxy(agent, self)?;
        let trap_name = PropertyKey::from_str(agent, "construct");
        let Some(trap) = get_object_method(agent, handler, trap_name)? else {
            // 7. Return ? Construct(target, argumentsList, newTarget).
            return target.internal_construct(agent, arguments, new_target);
        };
        // 8. Let argArray be CreateArrayFromList(argumentsList).
        let arguments_array = create_array_from_list(agent, arguments.0)?;
        // 9. Let newObj be ? Call(trap, handler, « target, argArray, newTarget »).
        let new_object = call_function(
            agent,
            trap,
            handler.into_value(),
            Some(ArgumentsList(&[
                target.into_value(),
                arguments_array.into_value(),
                new_target.into_value(),
            ])),
        )?;
        // 10. If newObj is not an Object, throw a TypeError exception.
        Object::try_from(new_object).map_err(|_| {
            agent.throw_exception(
                ExceptionType::TypeError,
                "construct trap returned a non-object",
            )
        })
    }
}

impl Index<Proxy> for Agent {
    type Output = ProxyHeapData;

    fn index(&self, index: Proxy) -> &Self::Output {
        &self.heap[index]
    }
}

impl IndexMut<Proxy> for Agent {
    fn index_mut(&mut self, index: Proxy) -> &mut Self::Output {
        &mut self.heap[index]
    }
}

impl Index<Proxy> for Heap {
    type Output = ProxyHeapData;

    fn index(&self, index: Proxy) -> &Self::Output {
        self.proxys
            .get(index.0.into_index())
            .expect("Proxy out of bounds")
            .as_ref()
            .expect("Proxy slot empty")
    }
}

impl IndexMut<Proxy> for Heap {
    fn index_mut(&mut self, index: Proxy) -> &mut Self::Output {
        self.proxys
            .get_mut(index.0.into_index())
            .expect("Proxy out of bounds")
            .as_mut()
            .expect("Proxy slot empty")
    }
}
