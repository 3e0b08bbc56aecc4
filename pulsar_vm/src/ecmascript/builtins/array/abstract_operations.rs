// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Array, data::ArrayHeapData};
use crate::{
    ecmascript::{
        abstract_operations::{
            operations_on_objects::create_data_property,
            type_conversion::{to_number, to_uint32},
        },
        builtins::ordinary::ordinary_object_create,
        execution::{Agent, ExceptionType, JsResult},
        types::{Object, PropertyDescriptor, PropertyKey, Value},
    },
    heap::CreateHeapData,
};

/// ### [10.4.2.2 ArrayCreate ( length \[ , proto \] )](https://tc39.es/ecma262/#sec-arraycreate)
pub fn array_create(
    agent: &mut Agent,
    length: u64,
    prototype: Option<Object>,
) -> JsResult<Array> {
    // 1. If length > 2^32 - 1, throw a RangeError exception.
    if length > u32::MAX as u64 {
        return Err(agent.throw_exception(ExceptionType::RangeError, "invalid array length"));
    }
    let backing_object = ordinary_object_create(agent, prototype);
    Ok(agent.heap.create(ArrayHeapData {
        backing_object,
        len: length as u32,
        len_writable: true,
    }))
}

/// ### [7.3.18 CreateArrayFromList ( elements )](https://tc39.es/ecma262/#sec-createarrayfromlist)
pub fn create_array_from_list(agent: &mut Agent, elements: &[Value]) -> JsResult<Array> {
    // 1. Let array be ! ArrayCreate(0).
    let array = array_create(agent, elements.len() as u64, None)?;
    // 2-3. Add each element as a data property, in list order.
    for (index, value) in elements.iter().enumerate() {
        let property_key = PropertyKey::from(index as u32);
        create_data_property(agent, array.into(), property_key, *value)?;
    }
    // 4. Return array.
    Ok(array)
}

/// ### [10.4.2.4 ArraySetLength ( A, Desc )](https://tc39.es/ecma262/#sec-arraysetlength)
pub(crate) fn array_set_length(
    agent: &mut Agent,
    array: Array,
    descriptor: PropertyDescriptor,
) -> JsResult<bool> {
    // 1. If Desc does not have a [[Value]] field, this only redefines the
    //    attributes of the length property.
    let Some(length_value) = descriptor.value else {
        return Ok(apply_length_descriptor(agent, array, &descriptor, None));
    };
    // 3. Let newLen be ? ToUint32(Desc.[[Value]]).
    let new_len = to_uint32(agent, length_value)?;
    // 4. Let numberLen be ? ToNumber(Desc.[[Value]]).
    let number_len = to_number(agent, length_value)?;
    // 5. If SameValueZero(newLen, numberLen) is false, throw a RangeError.
    if new_len as f64 != number_len {
        return Err(agent.throw_exception(ExceptionType::RangeError, "invalid array length"));
    }
    let old_len = agent[array].len;
    // 11. If newLen >= oldLen, the array only grows or keeps its length.
    if new_len >= old_len {
        return Ok(apply_length_descriptor(agent, array, &descriptor, Some(new_len)));
    }
    // 12. If oldLenDesc.[[Writable]] is false, return false.
    if !agent[array].len_writable {
        return Ok(false);
    }
    // 13-14. Defer turning writability off until the elements are gone, so
    // the deletions below are not blocked by it.
    let new_writable = descriptor.writable != Some(false);
    // 15. Apply the descriptor with the new length and writability on.
    let deferred = PropertyDescriptor {
        writable: Some(true),
        ..descriptor
    };
    if !apply_length_descriptor(agent, array, &deferred, Some(new_len)) {
        return Ok(false);
    }
    // 16. Delete the indices at and above the new length, highest first. A
    //     non-configurable element stops the shrink and clamps the length
    //     to just above it.
    let backing_object = agent[array].backing_object;
    let doomed = agent[backing_object]
        .indexed
        .keys_in_range_descending(new_len..old_len);
    for index in doomed {
        let configurable = agent[backing_object]
            .indexed
            .get(index)
            .is_some_and(|entry| entry.attributes.configurable());
        if !configurable {
            // 16.b. i-iii. Set the length to index + 1, restore the
            // requested writability, and report failure.
            agent[array].len = index + 1;
            if !new_writable {
                agent[array].len_writable = false;
            }
            return Ok(false);
        }
        agent[backing_object].indexed.remove(index);
    }
    // 17. If newWritable is false, turn writability off now.
    if !new_writable {
        agent[array].len_writable = false;
    }
    // 18. Return true.
    Ok(true)
}

/// OrdinaryDefineOwnProperty specialised for the synthetic length property,
/// which is always a non-configurable, non-enumerable data property.
fn apply_length_descriptor(
    agent: &mut Agent,
    array: Array,
    descriptor: &PropertyDescriptor,
    new_len: Option<u32>,
) -> bool {
    if descriptor.configurable == Some(true)
        || descriptor.enumerable == Some(true)
        || descriptor.is_accessor_descriptor()
    {
        return false;
    }
    if !agent[array].len_writable {
        // A non-writable length rejects writability turning back on and any
        // value change.
        if descriptor.writable == Some(true) {
            return false;
        }
        if let Some(new_len) = new_len
            && new_len != agent[array].len
        {
            return false;
        }
    }
    if let Some(new_len) = new_len {
        agent[array].len = new_len;
    }
    if let Some(writable) = descriptor.writable {
        agent[array].len_writable = writable;
    }
    true
}
