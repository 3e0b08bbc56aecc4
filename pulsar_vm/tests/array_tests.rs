// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pulsar_vm::ecmascript::{
    abstract_operations::operations_on_objects::{
        create_data_property_or_throw, define_property_or_throw, get, has_property, set,
    },
    builtins::{array_create, create_array_from_list},
    execution::{Agent, ExceptionType},
    types::{InternalMethods, Object, PropertyDescriptor, PropertyKey, Value},
};

#[test]
fn array_create_checks_the_length_range() {
    let mut agent = Agent::new();
    let array = array_create(&mut agent, 3, None).unwrap();
    assert_eq!(array.len(&agent), 3);

    let error = array_create(&mut agent, 1 << 32, None).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));
}

#[test]
fn length_reads_as_a_non_configurable_data_property() {
    let mut agent = Agent::new();
    let array = array_create(&mut agent, 2, None).unwrap();
    let length_key = PropertyKey::from_str(&mut agent, "length");
    let descriptor = Object::from(array)
        .internal_get_own_property(&mut agent, length_key)
        .unwrap()
        .unwrap();
    assert_eq!(descriptor.value, Some(Value::from(2u32)));
    assert_eq!(descriptor.writable, Some(true));
    assert_eq!(descriptor.enumerable, Some(false));
    assert_eq!(descriptor.configurable, Some(false));
}

#[test]
fn writing_past_the_end_grows_the_length() {
    let mut agent = Agent::new();
    let array = array_create(&mut agent, 0, None).unwrap();
    create_data_property_or_throw(
        &mut agent,
        array.into(),
        PropertyKey::from(5u32),
        Value::from(1),
    )
    .unwrap();
    assert_eq!(array.len(&agent), 6);

    let length_key = PropertyKey::from_str(&mut agent, "length");
    assert_eq!(
        get(&mut agent, array.into(), length_key).unwrap(),
        Value::from(6u32)
    );
}

#[test]
fn shrinking_the_length_deletes_elements() {
    let mut agent = Agent::new();
    let array = array_create(&mut agent, 0, None).unwrap();
    for index in 0..4u32 {
        create_data_property_or_throw(
            &mut agent,
            array.into(),
            PropertyKey::from(index),
            Value::from(index),
        )
        .unwrap();
    }
    let length_key = PropertyKey::from_str(&mut agent, "length");
    set(&mut agent, array.into(), length_key, Value::from(2), true).unwrap();

    assert_eq!(array.len(&agent), 2);
    assert!(!has_property(&mut agent, array.into(), PropertyKey::from(3u32)).unwrap());
    assert!(has_property(&mut agent, array.into(), PropertyKey::from(1u32)).unwrap());
}

#[test]
fn shrink_clamps_at_a_non_configurable_element() {
    let mut agent = Agent::new();
    let array = array_create(&mut agent, 0, None).unwrap();
    for index in 0..10u32 {
        create_data_property_or_throw(
            &mut agent,
            array.into(),
            PropertyKey::from(index),
            Value::from(index),
        )
        .unwrap();
    }
    define_property_or_throw(
        &mut agent,
        array.into(),
        PropertyKey::from(5u32),
        PropertyDescriptor {
            configurable: Some(false),
            ..Default::default()
        },
    )
    .unwrap();

    let length_key = PropertyKey::from_str(&mut agent, "length");
    let succeeded = Object::from(array)
        .internal_define_own_property(
            &mut agent,
            length_key,
            PropertyDescriptor {
                value: Some(Value::from(0)),
                ..Default::default()
            },
        )
        .unwrap();
    // The shrink stops just above the pinned element and reports failure.
    assert!(!succeeded);
    assert_eq!(array.len(&agent), 6);
    assert!(has_property(&mut agent, array.into(), PropertyKey::from(5u32)).unwrap());
    assert!(!has_property(&mut agent, array.into(), PropertyKey::from(6u32)).unwrap());
}

#[test]
fn invalid_lengths_throw_a_range_error() {
    let mut agent = Agent::new();
    let array = array_create(&mut agent, 0, None).unwrap();
    let length_key = PropertyKey::from_str(&mut agent, "length");
    for bad in [Value::from_f64(4294967296.0), Value::from_f64(3.5), Value::from(-1)] {
        let error = Object::from(array)
            .internal_define_own_property(
                &mut agent,
                length_key,
                PropertyDescriptor {
                    value: Some(bad),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));
    }
}

#[test]
fn non_writable_length_freezes_the_array_size() {
    let mut agent = Agent::new();
    let array = array_create(&mut agent, 3, None).unwrap();
    let length_key = PropertyKey::from_str(&mut agent, "length");
    define_property_or_throw(
        &mut agent,
        array.into(),
        length_key,
        PropertyDescriptor {
            writable: Some(false),
            ..Default::default()
        },
    )
    .unwrap();

    // The length cannot change.
    let error = set(&mut agent, array.into(), length_key, Value::from(5), true).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    // Nor can elements appear beyond it.
    let succeeded = Object::from(array)
        .internal_define_own_property(
            &mut agent,
            PropertyKey::from(7u32),
            PropertyDescriptor {
                value: Some(Value::from(1)),
                writable: Some(true),
                enumerable: Some(true),
                configurable: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(!succeeded);
    assert_eq!(array.len(&agent), 3);
    // Writability cannot be turned back on.
    let succeeded = Object::from(array)
        .internal_define_own_property(
            &mut agent,
            length_key,
            PropertyDescriptor {
                writable: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(!succeeded);
}

#[test]
fn own_property_keys_put_length_after_the_indexes() {
    let mut agent = Agent::new();
    let array = create_array_from_list(
        &mut agent,
        &[Value::from(10), Value::from(20), Value::from(30)],
    )
    .unwrap();
    let named = PropertyKey::from_str(&mut agent, "named");
    create_data_property_or_throw(&mut agent, array.into(), named, Value::from(1)).unwrap();

    let length_key = PropertyKey::from_str(&mut agent, "length");
    let keys = Object::from(array)
        .internal_own_property_keys(&mut agent)
        .unwrap();
    assert_eq!(
        keys,
        vec![
            PropertyKey::from(0u32),
            PropertyKey::from(1u32),
            PropertyKey::from(2u32),
            length_key,
            named,
        ]
    );
}

#[test]
fn create_array_from_list_populates_elements() {
    let mut agent = Agent::new();
    let array = create_array_from_list(&mut agent, &[Value::from(1), Value::from(2)]).unwrap();
    assert_eq!(array.len(&agent), 2);
    assert_eq!(
        get(&mut agent, array.into(), PropertyKey::from(0u32)).unwrap(),
        Value::from(1)
    );
    assert_eq!(
        get(&mut agent, array.into(), PropertyKey::from(1u32)).unwrap(),
        Value::from(2)
    );
}
