// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod shape;

use shape::{Transition, get_shape_for_prototype};

use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::{call_function, create_data_property},
            testing_and_comparison::same_value,
        },
        execution::{Agent, JsResult},
        types::{
            InternalMethods, InternalSlots, Object, ObjectHeapData, OrdinaryObject,
            PropertyDescriptor, PropertyKey, Value,
        },
    },
    heap::CreateHeapData,
};

impl InternalSlots for OrdinaryObject {
    fn get_backing_object(self, _: &Agent) -> Option<OrdinaryObject> {
        Some(self)
    }

    fn create_backing_object(self, _: &mut Agent) -> OrdinaryObject {
        self
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        agent[self].shape.prototype(agent)
    }

    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        let shape = agent[self].shape;
        if shape.prototype(agent) == prototype {
            return;
        }
        if shape.is_unique(agent) {
            shape.set_unique_prototype(agent, prototype);
        } else {
            let next = shape.get_or_create_child(agent, Transition::Prototype { prototype });
            agent[self].shape = next;
        }
    }

    fn internal_extensible(self, agent: &Agent) -> bool {
        agent[self].extensible
    }

    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        agent[self].extensible = value;
    }
}

impl InternalMethods for OrdinaryObject {}

/// ### [10.1.12 OrdinaryObjectCreate ( proto \[ , additionalInternalSlotsList \] )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
pub fn ordinary_object_create(agent: &mut Agent, prototype: Option<Object>) -> OrdinaryObject {
    let shape = get_shape_for_prototype(agent, prototype);
    agent.heap.create(ObjectHeapData::new(shape))
}

/// ### [10.1.2.1 OrdinarySetPrototypeOf ( O, V )](https://tc39.es/ecma262/#sec-ordinarysetprototypeof)
pub(crate) fn ordinary_set_prototype_of(
    agent: &mut Agent,
    object: Object,
    prototype: Option<Object>,
) -> bool {
    // 1. Let current be O.[[Prototype]].
    let current = object.internal_prototype(agent);
    // 2. If SameValue(V, current) is true, return true.
    if prototype == current {
        return true;
    }
    // 3. Let extensible be O.[[Extensible]].
    // 4. If extensible is false, return false.
    if !object.internal_extensible(agent) {
        return false;
    }
    // 5. Let p be V; 6. Let done be false.
    // 7. Repeat, while done is false:
    let mut p = prototype;
    while let Some(proto) = p {
        // b. Else if SameValue(p, O) is true, return false.
        if proto == object {
            return false;
        }
        // c. i. If p.[[GetPrototypeOf]] is not the ordinary object internal
        //       method defined in 10.1.1, set done to true. The walk stops
        //       here, so cycles running through a proxy go undetected.
        if matches!(proto, Object::Proxy(_)) {
            break;
        }
        // c. ii. Set p to p.[[Prototype]].
        p = proto.internal_prototype(agent);
    }
    // 8. Set O.[[Prototype]] to V; 9. Return true.
    object.internal_set_prototype(agent, prototype);
    true
}

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &mut Agent,
    backing_object: OrdinaryObject,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    backing_object.property_storage().get(agent, property_key)
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: Object,
    backing_object: OrdinaryObject,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    // 1. Let current be ? O.[[GetOwnProperty]](P).
    let current = object.internal_get_own_property(agent, property_key)?;
    // 2. Let extensible be ? IsExtensible(O).
    let extensible = object.internal_is_extensible(agent)?;
    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    Ok(validate_and_apply_property_descriptor(
        agent,
        Some((backing_object, property_key)),
        extensible,
        descriptor,
        current,
    ))
}

/// ### [10.1.6.2 IsCompatiblePropertyDescriptor ( Extensible, Desc, Current )](https://tc39.es/ecma262/#sec-iscompatiblepropertydescriptor)
pub(crate) fn is_compatible_property_descriptor(
    agent: &mut Agent,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    validate_and_apply_property_descriptor(agent, None, extensible, descriptor, current)
}

/// ### [10.1.6.3 ValidateAndApplyPropertyDescriptor ( O, P, extensible, Desc, current )](https://tc39.es/ecma262/#sec-validateandapplypropertydescriptor)
///
/// When `target` is None this only validates, which is what the proxy
/// invariant checks need.
pub(crate) fn validate_and_apply_property_descriptor(
    agent: &mut Agent,
    target: Option<(OrdinaryObject, PropertyKey)>,
    extensible: bool,
    descriptor: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> bool {
    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return false;
        }
        // b. If O is undefined, return true.
        let Some((backing_object, property_key)) = target else {
            return true;
        };
        // c-d. Create the property, filling in absent fields with their
        // defaults. A generic descriptor creates a data property.
        let descriptor = if descriptor.is_accessor_descriptor() {
            PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(descriptor.get.unwrap_or(None)),
                set: Some(descriptor.set.unwrap_or(None)),
                enumerable: Some(descriptor.enumerable.unwrap_or(false)),
                configurable: Some(descriptor.configurable.unwrap_or(false)),
            }
        } else {
            PropertyDescriptor {
                value: Some(descriptor.value.unwrap_or(Value::Undefined)),
                writable: Some(descriptor.writable.unwrap_or(false)),
                get: None,
                set: None,
                enumerable: Some(descriptor.enumerable.unwrap_or(false)),
                configurable: Some(descriptor.configurable.unwrap_or(false)),
            }
        };
        backing_object
            .property_storage()
            .add(agent, property_key, &descriptor);
        // e. Return true.
        return true;
    };
    // 3. Assert: current is a fully populated Property Descriptor.
    debug_assert!(current.is_fully_populated());
    // 4. If every field in Desc is absent, return true.
    if !descriptor.has_fields() {
        return true;
    }
    // 5. If current.[[Configurable]] is false, then
    if current.configurable == Some(false) {
        // a. If Desc has a [[Configurable]] field and
        //    Desc.[[Configurable]] is true, return false.
        if descriptor.configurable == Some(true) {
            return false;
        }
        // b. If Desc has an [[Enumerable]] field and SameValue(...) is
        //    false, return false.
        if descriptor.enumerable.is_some() && descriptor.enumerable != current.enumerable {
            return false;
        }
        // c. If IsGenericDescriptor(Desc) is false and
        //    IsAccessorDescriptor(Desc) is not IsAccessorDescriptor(current),
        //    return false.
        if !descriptor.is_generic_descriptor()
            && descriptor.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return false;
        }
        if current.is_accessor_descriptor() {
            // d. If IsAccessorDescriptor(current) is true:
            //    getter and setter may not change.
            if let Some(get) = descriptor.get
                && get != current.get.unwrap_or(None)
            {
                return false;
            }
            if let Some(set) = descriptor.set
                && set != current.set.unwrap_or(None)
            {
                return false;
            }
        } else if current.writable == Some(false) {
            // e. Else if current.[[Writable]] is false:
            //    the value may not change and writability may not turn on.
            if descriptor.writable == Some(true) {
                return false;
            }
            if let Some(value) = descriptor.value
                && !same_value(value, current.value.unwrap_or(Value::Undefined))
            {
                return false;
            }
        }
    }
    // 6. If O is not undefined, apply the change.
    if let Some((backing_object, property_key)) = target {
        let result = if descriptor.is_data_descriptor() && current.is_accessor_descriptor() {
            // a-b. Convert between data and accessor, keeping the existing
            // [[Configurable]] and [[Enumerable]] unless overridden.
            PropertyDescriptor {
                value: Some(descriptor.value.unwrap_or(Value::Undefined)),
                writable: Some(descriptor.writable.unwrap_or(false)),
                get: None,
                set: None,
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
            }
        } else if descriptor.is_accessor_descriptor() && current.is_data_descriptor() {
            PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(descriptor.get.unwrap_or(None)),
                set: Some(descriptor.set.unwrap_or(None)),
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
            }
        } else {
            // c-d. Same kind: present fields override the current ones.
            PropertyDescriptor {
                value: descriptor.value.or(current.value),
                writable: descriptor.writable.or(current.writable),
                get: descriptor.get.or(current.get),
                set: descriptor.set.or(current.set),
                enumerable: descriptor.enumerable.or(current.enumerable),
                configurable: descriptor.configurable.or(current.configurable),
            }
        };
        backing_object
            .property_storage()
            .update(agent, property_key, &result);
    }
    // 7. Return true.
    true
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    if object
        .internal_get_own_property(agent, property_key)?
        .is_some()
    {
        // 2. If hasOwn is not undefined, return true.
        return Ok(true);
    }
    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    if let Some(parent) = object.internal_get_prototype_of(agent)? {
        // 4. If parent is not null, return ? parent.[[HasProperty]](P).
        return parent.internal_has_property(agent, property_key);
    }
    // 5. Return false.
    Ok(false)
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let Some(descriptor) = object.internal_get_own_property(agent, property_key)? else {
        // 2. a. Let parent be ? O.[[GetPrototypeOf]]().
        let Some(parent) = object.internal_get_prototype_of(agent)? else {
            // b. If parent is null, return undefined.
            return Ok(Value::Undefined);
        };
        // c. Return ? parent.[[Get]](P, Receiver).
        return parent.internal_get(agent, property_key, receiver);
    };
    // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
    if let Some(value) = descriptor.value {
        return Ok(value);
    }
    // 4-6. Accessor: call the getter with Receiver as this value, or
    // return undefined if there is none.
    let Some(Some(getter)) = descriptor.get else {
        return Ok(Value::Undefined);
    };
    // 7. Return ? Call(getter, Receiver).
    call_function(agent, getter, receiver, None)
}

/// ### [10.1.9.1 OrdinarySet ( O, P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinaryset)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    // 1. Let ownDesc be ? O.[[GetOwnProperty]](P).
    let own_descriptor = object.internal_get_own_property(agent, property_key)?;
    // 2. Return ? OrdinarySetWithOwnDescriptor(O, P, V, Receiver, ownDesc).
    ordinary_set_with_own_descriptor(agent, object, property_key, value, receiver, own_descriptor)
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
pub(crate) fn ordinary_set_with_own_descriptor(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
    own_descriptor: Option<PropertyDescriptor>,
) -> JsResult<bool> {
    // 1. If ownDesc is undefined, then
    let own_descriptor = if let Some(own_descriptor) = own_descriptor {
        own_descriptor
    } else {
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        if let Some(parent) = object.internal_get_prototype_of(agent)? {
            // b. If parent is not null, return ? parent.[[Set]](P, V, Receiver).
            return parent.internal_set(agent, property_key, value, receiver);
        }
        // c. Else, set ownDesc to the default data property descriptor.
        PropertyDescriptor {
            value: Some(Value::Undefined),
            writable: Some(true),
            get: None,
            set: None,
            enumerable: Some(true),
            configurable: Some(true),
        }
    };
    // 2. If IsDataDescriptor(ownDesc) is true, then
    if own_descriptor.is_data_descriptor() {
        // a. If ownDesc.[[Writable]] is false, return false.
        if own_descriptor.writable == Some(false) {
            return Ok(false);
        }
        // b. If Receiver is not an Object, return false.
        let Ok(receiver_object) = Object::try_from(receiver) else {
            return Ok(false);
        };
        // c. Let existingDescriptor be ? Receiver.[[GetOwnProperty]](P).
        if let Some(existing) = receiver_object.internal_get_own_property(agent, property_key)? {
            // d. i. If IsAccessorDescriptor(existingDescriptor) is true,
            //       return false.
            if existing.is_accessor_descriptor() {
                return Ok(false);
            }
            // ii. If existingDescriptor.[[Writable]] is false, return false.
            if existing.writable == Some(false) {
                return Ok(false);
            }
            // iii-iv. Define the value through the receiver.
            let value_descriptor = PropertyDescriptor {
                value: Some(value),
                ..Default::default()
            };
            receiver_object.internal_define_own_property(agent, property_key, value_descriptor)
        } else {
            // e. Perform ? CreateDataProperty(Receiver, P, V).
            create_data_property(agent, receiver_object, property_key, value)
        }
    } else {
        // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
        // 4-5. If the setter is undefined, return false.
        let Some(Some(setter)) = own_descriptor.set else {
            return Ok(false);
        };
        // 6. Perform ? Call(setter, Receiver, « V »).
        call_function(
            agent,
            setter,
            receiver,
            Some(crate::ecmascript::builtins::ArgumentsList(&[value])),
        )?;
        // 7. Return true.
        Ok(true)
    }
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let descriptor = object.internal_get_own_property(agent, property_key)?;
    match descriptor {
        // 2. If desc is undefined, return true.
        None => Ok(true),
        // 3. If desc.[[Configurable]] is true, remove the property.
        Some(descriptor) if descriptor.configurable == Some(true) => {
            if let Some(backing_object) = object.get_backing_object(agent) {
                backing_object
                    .property_storage()
                    .remove(agent, property_key);
            }
            Ok(true)
        }
        // 4. Return false.
        _ => Ok(false),
    }
}

/// ### [10.1.11.1 OrdinaryOwnPropertyKeys ( O )](https://tc39.es/ecma262/#sec-ordinaryownpropertykeys)
///
/// Integer-index keys come first in ascending numeric order, then string
/// keys, then symbol keys, the latter two each in property creation order.
pub(crate) fn ordinary_own_property_keys(
    agent: &mut Agent,
    backing_object: OrdinaryObject,
) -> Vec<PropertyKey> {
    let shape = agent[backing_object].shape;
    let mut keys = Vec::with_capacity(shape.len(agent) as usize + 8);
    keys.extend(agent[backing_object].indexed.keys().map(PropertyKey::from));
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
    keys
}
