// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pulsar_vm::ecmascript::{
    abstract_operations::operations_on_objects::{
        create_data_property_or_throw, define_property_or_throw, delete_property_or_throw,
    },
    builtins::ordinary_object_create,
    execution::Agent,
    types::{InternalMethods, Object, PropertyDescriptor, PropertyKey, Value},
};

#[test]
fn identical_insertion_orders_share_a_shape() {
    let mut agent = Agent::new();
    let a = ordinary_object_create(&mut agent, None);
    let b = ordinary_object_create(&mut agent, None);
    assert_eq!(a.shape(&agent), b.shape(&agent));

    let x = PropertyKey::from_str(&mut agent, "x");
    let y = PropertyKey::from_str(&mut agent, "y");
    create_data_property_or_throw(&mut agent, a.into(), x, Value::from(1)).unwrap();
    assert_ne!(a.shape(&agent), b.shape(&agent));

    create_data_property_or_throw(&mut agent, b.into(), x, Value::from(2)).unwrap();
    assert_eq!(a.shape(&agent), b.shape(&agent));

    create_data_property_or_throw(&mut agent, a.into(), y, Value::from(3)).unwrap();
    create_data_property_or_throw(&mut agent, b.into(), y, Value::from(4)).unwrap();
    assert_eq!(a.shape(&agent), b.shape(&agent));

    // Same keys in a different order land on a different shape.
    let c = ordinary_object_create(&mut agent, None);
    create_data_property_or_throw(&mut agent, c.into(), y, Value::from(5)).unwrap();
    create_data_property_or_throw(&mut agent, c.into(), x, Value::from(6)).unwrap();
    assert_ne!(a.shape(&agent), c.shape(&agent));
}

#[test]
fn shared_values_stay_independent() {
    let mut agent = Agent::new();
    let a = ordinary_object_create(&mut agent, None);
    let b = ordinary_object_create(&mut agent, None);
    let x = PropertyKey::from_str(&mut agent, "x");
    create_data_property_or_throw(&mut agent, a.into(), x, Value::from(1)).unwrap();
    create_data_property_or_throw(&mut agent, b.into(), x, Value::from(2)).unwrap();
    assert_eq!(a.shape(&agent), b.shape(&agent));

    let a_desc = Object::from(a)
        .internal_get_own_property(&mut agent, x)
        .unwrap()
        .unwrap();
    let b_desc = Object::from(b)
        .internal_get_own_property(&mut agent, x)
        .unwrap()
        .unwrap();
    assert_eq!(a_desc.value, Some(Value::from(1)));
    assert_eq!(b_desc.value, Some(Value::from(2)));
}

#[test]
fn reconfiguration_transitions_are_shared() {
    let mut agent = Agent::new();
    let a = ordinary_object_create(&mut agent, None);
    let b = ordinary_object_create(&mut agent, None);
    let x = PropertyKey::from_str(&mut agent, "x");
    create_data_property_or_throw(&mut agent, a.into(), x, Value::from(1)).unwrap();
    create_data_property_or_throw(&mut agent, b.into(), x, Value::from(2)).unwrap();

    let hide = PropertyDescriptor {
        enumerable: Some(false),
        ..Default::default()
    };
    define_property_or_throw(&mut agent, a.into(), x, hide).unwrap();
    assert_ne!(a.shape(&agent), b.shape(&agent));
    define_property_or_throw(&mut agent, b.into(), x, hide).unwrap();
    assert_eq!(a.shape(&agent), b.shape(&agent));

    // The value survives the attribute change.
    let a_desc = Object::from(a)
        .internal_get_own_property(&mut agent, x)
        .unwrap()
        .unwrap();
    assert_eq!(a_desc.value, Some(Value::from(1)));
    assert_eq!(a_desc.enumerable, Some(false));
    assert_eq!(a_desc.writable, Some(true));
}

#[test]
fn deletion_diverges_onto_a_unique_shape() {
    let mut agent = Agent::new();
    let a = ordinary_object_create(&mut agent, None);
    let b = ordinary_object_create(&mut agent, None);
    let x = PropertyKey::from_str(&mut agent, "x");
    let y = PropertyKey::from_str(&mut agent, "y");
    for object in [a, b] {
        create_data_property_or_throw(&mut agent, object.into(), x, Value::from(1)).unwrap();
        create_data_property_or_throw(&mut agent, object.into(), y, Value::from(2)).unwrap();
    }
    assert_eq!(a.shape(&agent), b.shape(&agent));

    delete_property_or_throw(&mut agent, a.into(), x).unwrap();
    assert_ne!(a.shape(&agent), b.shape(&agent));

    // Later offsets shifted down without disturbing the values.
    assert!(
        Object::from(a)
            .internal_get_own_property(&mut agent, x)
            .unwrap()
            .is_none()
    );
    let y_desc = Object::from(a)
        .internal_get_own_property(&mut agent, y)
        .unwrap()
        .unwrap();
    assert_eq!(y_desc.value, Some(Value::from(2)));

    // The sibling keeps the shared layout.
    let b_x = Object::from(b)
        .internal_get_own_property(&mut agent, x)
        .unwrap()
        .unwrap();
    assert_eq!(b_x.value, Some(Value::from(1)));
}

#[test]
fn unique_shapes_do_not_rejoin_the_tree() {
    let mut agent = Agent::new();
    let a = ordinary_object_create(&mut agent, None);
    let b = ordinary_object_create(&mut agent, None);
    let x = PropertyKey::from_str(&mut agent, "x");
    create_data_property_or_throw(&mut agent, a.into(), x, Value::from(1)).unwrap();
    create_data_property_or_throw(&mut agent, b.into(), x, Value::from(1)).unwrap();
    delete_property_or_throw(&mut agent, a.into(), x).unwrap();
    create_data_property_or_throw(&mut agent, a.into(), x, Value::from(1)).unwrap();
    // Same layout as b again, but on a private shape.
    assert_ne!(a.shape(&agent), b.shape(&agent));
}

#[test]
fn crowded_shapes_fall_back_to_unique_clones() {
    let mut agent = Agent::new();
    let first = ordinary_object_create(&mut agent, None);
    let second = ordinary_object_create(&mut agent, None);
    let k0 = PropertyKey::from_str(&mut agent, "k0");
    create_data_property_or_throw(&mut agent, first.into(), k0, Value::from(0)).unwrap();
    create_data_property_or_throw(&mut agent, second.into(), k0, Value::from(0)).unwrap();
    assert_eq!(first.shape(&agent), second.shape(&agent));

    // Push the root shape's transition cache past its limit with distinct
    // first keys.
    let mut objects = vec![first];
    for index in 1..150i32 {
        let object = ordinary_object_create(&mut agent, None);
        let key = PropertyKey::from_string(&mut agent, format!("k{index}"));
        create_data_property_or_throw(&mut agent, object.into(), key, Value::from(index)).unwrap();
        objects.push(object);
    }

    // Objects past the limit continue on private clones instead of growing
    // the cache.
    let overflow = objects[149];
    let peer = objects[148];
    assert_ne!(overflow.shape(&agent), peer.shape(&agent));
    // The shared shapes from before the overflow are untouched.
    assert_eq!(first.shape(&agent), second.shape(&agent));

    // Properties still resolve on the fallback shape, for the key that
    // triggered the clone and for later additions.
    let k149 = PropertyKey::from_str(&mut agent, "k149");
    let descriptor = Object::from(overflow)
        .internal_get_own_property(&mut agent, k149)
        .unwrap()
        .unwrap();
    assert_eq!(descriptor.value, Some(Value::from(149)));
    let late = PropertyKey::from_str(&mut agent, "late");
    create_data_property_or_throw(&mut agent, overflow.into(), late, Value::from(1)).unwrap();
    let late_descriptor = Object::from(overflow)
        .internal_get_own_property(&mut agent, late)
        .unwrap()
        .unwrap();
    assert_eq!(late_descriptor.value, Some(Value::from(1)));
    assert!(
        Object::from(peer)
            .internal_get_own_property(&mut agent, late)
            .unwrap()
            .is_none()
    );
}

#[test]
fn prototype_transitions_converge() {
    let mut agent = Agent::new();
    let prototype = ordinary_object_create(&mut agent, None);
    let a = ordinary_object_create(&mut agent, None);
    let b = ordinary_object_create(&mut agent, None);
    Object::from(a)
        .internal_set_prototype_of(&mut agent, Some(prototype.into()))
        .unwrap();
    Object::from(b)
        .internal_set_prototype_of(&mut agent, Some(prototype.into()))
        .unwrap();
    assert_eq!(a.shape(&agent), b.shape(&agent));
    assert_eq!(a.shape(&agent).prototype(&agent), Some(prototype.into()));
}

#[test]
fn objects_created_with_a_prototype_share_its_root_shape() {
    let mut agent = Agent::new();
    let prototype = ordinary_object_create(&mut agent, None);
    let a = ordinary_object_create(&mut agent, Some(prototype.into()));
    let b = ordinary_object_create(&mut agent, Some(prototype.into()));
    assert_eq!(a.shape(&agent), b.shape(&agent));
    assert_ne!(
        a.shape(&agent),
        ordinary_object_create(&mut agent, None).shape(&agent)
    );
}
