// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    abstract_operations::{
        operations_on_objects::{create_data_property, get, has_property},
        testing_and_comparison::is_callable,
        type_conversion::to_boolean,
    },
    builtins::ordinary_object_create,
    execution::{Agent, ExceptionType, JsResult},
    types::{Function, Object, OrdinaryObject, PropertyKey, Value},
};

/// ### [6.2.6 The Property Descriptor Specification Type](https://tc39.es/ecma262/#sec-property-descriptor-specification-type)
///
/// Every field is optional; a `None` means the field is absent. The getter
/// and setter fields distinguish an absent field from a present field
/// holding undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyDescriptor {
    pub value: Option<Value>,
    pub writable: Option<bool>,
    pub get: Option<Option<Function>>,
    pub set: Option<Option<Function>>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    /// ### [6.2.6.1 IsAccessorDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isaccessordescriptor)
    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    /// ### [6.2.6.2 IsDataDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isdatadescriptor)
    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    /// ### [6.2.6.3 IsGenericDescriptor ( Desc )](https://tc39.es/ecma262/#sec-isgenericdescriptor)
    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    pub fn has_fields(&self) -> bool {
        self.value.is_some()
            || self.writable.is_some()
            || self.get.is_some()
            || self.set.is_some()
            || self.enumerable.is_some()
            || self.configurable.is_some()
    }

    pub fn is_fully_populated(&self) -> bool {
        self.enumerable.is_some()
            && self.configurable.is_some()
            && ((self.value.is_some() && self.writable.is_some())
                || (self.get.is_some() && self.set.is_some()))
    }

    /// ### [6.2.6.4 FromPropertyDescriptor ( Desc )](https://tc39.es/ecma262/#sec-frompropertydescriptor)
    ///
    /// Descriptor reflection objects are created without a prototype; there
    /// is no realm to take %Object.prototype% from.
    pub fn from_property_descriptor(self, agent: &mut Agent) -> JsResult<OrdinaryObject> {
        let object = ordinary_object_create(agent, None);
        if let Some(value) = self.value {
            let key = PropertyKey::from_str(agent, "value");
            create_data_property(agent, object.into(), key, value)?;
        }
        if let Some(writable) = self.writable {
            let key = PropertyKey::from_str(agent, "writable");
            create_data_property(agent, object.into(), key, writable.into())?;
        }
        if let Some(get) = self.get {
            let key = PropertyKey::from_str(agent, "get");
            let get = get.map_or(Value::Undefined, Function::into_value);
            create_data_property(agent, object.into(), key, get)?;
        }
        if let Some(set) = self.set {
            let key = PropertyKey::from_str(agent, "set");
            let set = set.map_or(Value::Undefined, Function::into_value);
            create_data_property(agent, object.into(), key, set)?;
        }
        if let Some(enumerable) = self.enumerable {
            let key = PropertyKey::from_str(agent, "enumerable");
            create_data_property(agent, object.into(), key, enumerable.into())?;
        }
        if let Some(configurable) = self.configurable {
            let key = PropertyKey::from_str(agent, "configurable");
            create_data_property(agent, object.into(), key, configurable.into())?;
        }
        Ok(object)
    }

    /// ### [6.2.6.5 ToPropertyDescriptor ( Obj )](https://tc39.es/ecma262/#sec-topropertydescriptor)
    pub fn to_property_descriptor(agent: &mut Agent, value: Value) -> JsResult<Self> {
        // 1. If Obj is not an Object, throw a TypeError exception.
        let Ok(object) = Object::try_from(value) else {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "property descriptor must be an object",
            ));
        };
        let mut descriptor = Self::default();
        // 3-4. enumerable.
        let enumerable_key = PropertyKey::from_str(agent, "enumerable");
        if has_property(agent, object, enumerable_key)? {
            let enumerable = get(agent, object, enumerable_key)?;
            descriptor.enumerable = Some(to_boolean(agent, enumerable));
        }
        // 5-6. configurable.
        let configurable_key = PropertyKey::from_str(agent, "configurable");
        if has_property(agent, object, configurable_key)? {
            let configurable = get(agent, object, configurable_key)?;
            descriptor.configurable = Some(to_boolean(agent, configurable));
        }
        // 7-8. value.
        let value_key = PropertyKey::from_str(agent, "value");
        if has_property(agent, object, value_key)? {
            descriptor.value = Some(get(agent, object, value_key)?);
        }
        // 9-10. writable.
        let writable_key = PropertyKey::from_str(agent, "writable");
        if has_property(agent, object, writable_key)? {
            let writable = get(agent, object, writable_key)?;
            descriptor.writable = Some(to_boolean(agent, writable));
        }
        // 11-12. get: present fields must hold a callable or undefined.
        let get_key = PropertyKey::from_str(agent, "get");
        if has_property(agent, object, get_key)? {
            let getter = get(agent, object, get_key)?;
            descriptor.get = if getter == Value::Undefined {
                Some(None)
            } else {
                let Some(getter) = is_callable(agent, getter) else {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "getter is not callable",
                    ));
                };
                Some(Some(getter))
            };
        }
        // 13-14. set.
        let set_key = PropertyKey::from_str(agent, "set");
        if has_property(agent, object, set_key)? {
            let setter = get(agent, object, set_key)?;
            descriptor.set = if setter == Value::Undefined {
                Some(None)
            } else {
                let Some(setter) = is_callable(agent, setter) else {
                    return Err(agent.throw_exception(
                        ExceptionType::TypeError,
                        "setter is not callable",
                    ));
                };
                Some(Some(setter))
            };
        }
        // 15. Accessor and data fields are mutually exclusive.
        if descriptor.is_accessor_descriptor() && descriptor.is_data_descriptor() {
            return Err(agent.throw_exception(
                ExceptionType::TypeError,
                "descriptor cannot be both a data and an accessor descriptor",
            ));
        }
        Ok(descriptor)
    }

    /// ### [6.2.6.6 CompletePropertyDescriptor ( Desc )](https://tc39.es/ecma262/#sec-completepropertydescriptor)
    ///
    /// A generic descriptor completes to a data descriptor.
    pub fn complete(self) -> Self {
        if self.is_accessor_descriptor() {
            Self {
                value: None,
                writable: None,
                get: Some(self.get.unwrap_or(None)),
                set: Some(self.set.unwrap_or(None)),
                enumerable: Some(self.enumerable.unwrap_or(false)),
                configurable: Some(self.configurable.unwrap_or(false)),
            }
        } else {
            Self {
                value: Some(self.value.unwrap_or(Value::Undefined)),
                writable: Some(self.writable.unwrap_or(false)),
                get: None,
                set: None,
                enumerable: Some(self.enumerable.unwrap_or(false)),
                configurable: Some(self.configurable.unwrap_or(false)),
            }
        }
    }
}
