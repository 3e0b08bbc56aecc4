// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)

use super::{testing_and_comparison::is_callable, type_conversion::to_length};
use crate::ecmascript::{
    builtins::ArgumentsList,
    execution::{Agent, ExceptionType, JsResult},
    types::{Function, InternalMethods, Object, PropertyDescriptor, PropertyKey, Value},
};

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
pub fn get(agent: &mut Agent, object: Object, property_key: PropertyKey) -> JsResult<Value> {
    // 1. Return ? O.[[Get]](P, O).
    object.internal_get(agent, property_key, object.into_value())
}

/// ### [7.3.4 Set ( O, P, V, Throw )](https://tc39.es/ecma262/#sec-set-o-p-v-throw)
pub fn set(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    throw: bool,
) -> JsResult<()> {
    // 1. Let success be ? O.[[Set]](P, V, O).
    let success = object.internal_set(agent, property_key, value, object.into_value())?;
    // 2. If success is false and Throw is true, throw a TypeError exception.
    if !success && throw {
        return Err(agent.throw_exception(ExceptionType::TypeError, "could not set property"));
    }
    Ok(())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
pub fn create_data_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<bool> {
    // 1. Let newDesc be the PropertyDescriptor { [[Value]]: V,
    //    [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
    let new_descriptor = PropertyDescriptor {
        value: Some(value),
        writable: Some(true),
        get: None,
        set: None,
        enumerable: Some(true),
        configurable: Some(true),
    };
    // 2. Return ? O.[[DefineOwnProperty]](P, newDesc).
    object.internal_define_own_property(agent, property_key, new_descriptor)
}

/// ### [7.3.7 CreateDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createdatapropertyorthrow)
pub fn create_data_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<()> {
    let success = create_data_property(agent, object, property_key, value)?;
    if !success {
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "could not create data property",
        ));
    }
    Ok(())
}

/// ### [7.3.8 DefinePropertyOrThrow ( O, P, desc )](https://tc39.es/ecma262/#sec-definepropertyorthrow)
pub fn define_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> JsResult<()> {
    let success = object.internal_define_own_property(agent, property_key, descriptor)?;
    if !success {
        return Err(agent.throw_exception(ExceptionType::TypeError, "could not define property"));
    }
    Ok(())
}

/// ### [7.3.9 DeletePropertyOrThrow ( O, P )](https://tc39.es/ecma262/#sec-deletepropertyorthrow)
pub fn delete_property_or_throw(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<()> {
    let success = object.internal_delete(agent, property_key)?;
    if !success {
        return Err(agent.throw_exception(ExceptionType::TypeError, "could not delete property"));
    }
    Ok(())
}

/// ### [7.3.12 HasProperty ( O, P )](https://tc39.es/ecma262/#sec-hasproperty)
pub fn has_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    object.internal_has_property(agent, property_key)
}

/// ### [7.3.13 HasOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-hasownproperty)
pub fn has_own_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let descriptor = object.internal_get_own_property(agent, property_key)?;
    // 2-3. Return false if desc is undefined, true otherwise.
    Ok(descriptor.is_some())
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// Specialised to object receivers, which is the only shape the proxy trap
/// lookups need. Undefined and null methods read as absent.
pub fn get_object_method(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<Option<Function>> {
    // 1. Let func be ? GetV(V, P).
    let func = get(agent, object, property_key)?;
    // 2. If func is either undefined or null, return undefined.
    if func == Value::Undefined || func == Value::Null {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    let Some(func) = is_callable(agent, func) else {
        return Err(agent.throw_exception(ExceptionType::TypeError, "value is not a function"));
    };
    // 4. Return func.
    Ok(Some(func))
}

/// ### [7.3.14 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
pub fn call(
    agent: &mut Agent,
    function: Value,
    this_value: Value,
    arguments: Option<ArgumentsList>,
) -> JsResult<Value> {
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    let Some(function) = is_callable(agent, function) else {
        return Err(agent.throw_exception(ExceptionType::TypeError, "value is not a function"));
    };
    // 3. Return ? F.[[Call]](V, argumentsList).
    call_function(agent, function, this_value, arguments)
}

pub fn call_function(
    agent: &mut Agent,
    function: Function,
    this_value: Value,
    arguments: Option<ArgumentsList>,
) -> JsResult<Value> {
    let arguments = arguments.unwrap_or_default();
    match function {
        Function::BuiltinFunction(function) => function.internal_call(agent, this_value, arguments),
        Function::Proxy(proxy) => proxy.internal_call(agent, this_value, arguments),
    }
}

/// ### [7.3.15 Construct ( F \[ , argumentsList \[ , newTarget \] \] )](https://tc39.es/ecma262/#sec-construct)
pub fn construct(
    agent: &mut Agent,
    function: Function,
    arguments: Option<ArgumentsList>,
    new_target: Option<Function>,
) -> JsResult<Object> {
    // 1. If newTarget is not present, set newTarget to F.
    let new_target = new_target.unwrap_or(function);
    let arguments = arguments.unwrap_or_default();
    function
        .into_object()
        .internal_construct(agent, arguments, new_target.into_object())
}

/// ### [7.3.19 CreateListFromArrayLike ( obj \[ , validElementTypes \] )](https://tc39.es/ecma262/#sec-createlistfromarraylike)
pub fn create_list_from_array_like(agent: &mut Agent, value: Value) -> JsResult<Vec<Value>> {
    // 2. If obj is not an Object, throw a TypeError exception.
    let Ok(object) = Object::try_from(value) else {
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "array-like argument must be an object",
        ));
    };
    // 3. Let len be ? LengthOfArrayLike(obj).
    let length_key = PropertyKey::from_str(agent, "length");
    let length_value = get(agent, object, length_key)?;
    let length = to_length(agent, length_value)?;
    // 4-6. Read the elements in index order.
    let mut list = Vec::with_capacity(length as usize);
    for index in 0..length {
        let key = PropertyKey::from_integer(agent, index);
        list.push(get(agent, object, key)?);
    }
    // 7. Return list.
    Ok(list)
}

/// ### [7.3.24 EnumerableOwnProperties ( O, kind )](https://tc39.es/ecma262/#sec-enumerableownproperties)
///
/// The key-kind subset: own property keys whose descriptor is enumerable,
/// with symbol keys excluded.
pub fn own_enumerable_property_keys(agent: &mut Agent, object: Object) -> JsResult<Vec<PropertyKey>> {
    let own_keys = object.internal_own_property_keys(agent)?;
    let mut keys = Vec::with_capacity(own_keys.len());
    for key in own_keys {
        if key.is_symbol() {
            continue;
        }
        let descriptor = object.internal_get_own_property(agent, key)?;
        if descriptor.is_some_and(|descriptor| descriptor.enumerable == Some(true)) {
            keys.push(key);
        }
    }
    Ok(keys)
}
