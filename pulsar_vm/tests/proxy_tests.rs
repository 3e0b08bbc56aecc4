// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pulsar_vm::ecmascript::{
    abstract_operations::operations_on_objects::{
        call, create_data_property_or_throw, define_property_or_throw, get, has_property, set,
    },
    builtins::{
        ArgumentsList, Behaviour, BuiltinFunctionArgs, Proxy, create_array_from_list,
        create_builtin_function, ordinary_object_create, proxy_create,
    },
    execution::{Agent, ExceptionType, JsResult},
    types::{
        InternalMethods, Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
    },
};

fn new_proxy(agent: &mut Agent) -> (Proxy, OrdinaryObject, OrdinaryObject) {
    let target = ordinary_object_create(agent, None);
    let handler = ordinary_object_create(agent, None);
    let proxy = proxy_create(agent, target.into_value(), handler.into_value()).unwrap();
    (proxy, target, handler)
}

#[test]
fn proxy_creation_requires_objects() {
    let mut agent = Agent::new();
    let object = ordinary_object_create(&mut agent, None);
    let error = proxy_create(&mut agent, Value::Undefined, object.into_value()).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    let error = proxy_create(&mut agent, object.into_value(), Value::Null).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn absent_traps_forward_to_the_target() {
    let mut agent = Agent::new();
    let (proxy, target, _) = new_proxy(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "x");
    create_data_property_or_throw(&mut agent, target.into(), key, Value::from(1)).unwrap();

    assert_eq!(get(&mut agent, proxy.into(), key).unwrap(), Value::from(1));
    assert!(has_property(&mut agent, proxy.into(), key).unwrap());

    // Writes and deletes reach the target too.
    set(&mut agent, proxy.into(), key, Value::from(2), true).unwrap();
    assert_eq!(get(&mut agent, target.into(), key).unwrap(), Value::from(2));
    assert!(Object::from(proxy).internal_delete(&mut agent, key).unwrap());
    assert!(!has_property(&mut agent, target.into(), key).unwrap());
}

fn trap_returning_42(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::from(42))
}

fn install_trap(
    agent: &mut Agent,
    handler: OrdinaryObject,
    name: &'static str,
    behaviour: Behaviour,
) {
    let function = create_builtin_function(agent, behaviour, BuiltinFunctionArgs::new(0, name));
    let key = PropertyKey::from_str(agent, name);
    create_data_property_or_throw(agent, handler.into(), key, function.into_value()).unwrap();
}

#[test]
fn get_trap_overrides_the_target() {
    let mut agent = Agent::new();
    let (proxy, _, handler) = new_proxy(&mut agent);
    install_trap(&mut agent, handler, "get", Behaviour::Regular(trap_returning_42));
    let key = PropertyKey::from_str(&mut agent, "anything");
    assert_eq!(get(&mut agent, proxy.into(), key).unwrap(), Value::from(42));
}

#[test]
fn get_trap_may_not_contradict_a_frozen_property() {
    let mut agent = Agent::new();
    let (proxy, target, handler) = new_proxy(&mut agent);
    install_trap(&mut agent, handler, "get", Behaviour::Regular(trap_returning_42));
    let key = PropertyKey::from_str(&mut agent, "pinned");
    define_property_or_throw(
        &mut agent,
        target.into(),
        key,
        PropertyDescriptor {
            value: Some(Value::from(1)),
            writable: Some(false),
            enumerable: Some(true),
            configurable: Some(false),
            ..Default::default()
        },
    )
    .unwrap();

    let error = get(&mut agent, proxy.into(), key).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

fn trap_returning_false(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::Boolean(false))
}

fn trap_returning_undefined(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::Undefined)
}

#[test]
fn has_trap_may_not_hide_a_non_configurable_property() {
    let mut agent = Agent::new();
    let (proxy, target, handler) = new_proxy(&mut agent);
    install_trap(&mut agent, handler, "has", Behaviour::Regular(trap_returning_false));
    let missing = PropertyKey::from_str(&mut agent, "missing");
    assert!(!has_property(&mut agent, proxy.into(), missing).unwrap());

    let key = PropertyKey::from_str(&mut agent, "pinned");
    define_property_or_throw(
        &mut agent,
        target.into(),
        key,
        PropertyDescriptor {
            value: Some(Value::from(1)),
            configurable: Some(false),
            ..Default::default()
        },
    )
    .unwrap();
    let error = has_property(&mut agent, proxy.into(), key).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn get_own_property_trap_may_not_hide_a_non_configurable_property() {
    let mut agent = Agent::new();
    let (proxy, target, handler) = new_proxy(&mut agent);
    install_trap(
        &mut agent,
        handler,
        "getOwnPropertyDescriptor",
        Behaviour::Regular(trap_returning_undefined),
    );
    // Hiding a configurable property is fine.
    let loose = PropertyKey::from_str(&mut agent, "loose");
    create_data_property_or_throw(&mut agent, target.into(), loose, Value::from(1)).unwrap();
    assert!(
        Object::from(proxy)
            .internal_get_own_property(&mut agent, loose)
            .unwrap()
            .is_none()
    );

    let key = PropertyKey::from_str(&mut agent, "pinned");
    define_property_or_throw(
        &mut agent,
        target.into(),
        key,
        PropertyDescriptor {
            value: Some(Value::from(1)),
            configurable: Some(false),
            ..Default::default()
        },
    )
    .unwrap();
    let error = Object::from(proxy)
        .internal_get_own_property(&mut agent, key)
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

fn configurable_data_descriptor_trap(
    agent: &mut Agent,
    _: Value,
    _: ArgumentsList,
) -> JsResult<Value> {
    let descriptor = ordinary_object_create(agent, None);
    let value_key = PropertyKey::from_str(agent, "value");
    create_data_property_or_throw(agent, descriptor.into(), value_key, Value::from(5))?;
    let configurable_key = PropertyKey::from_str(agent, "configurable");
    create_data_property_or_throw(
        agent,
        descriptor.into(),
        configurable_key,
        Value::Boolean(true),
    )?;
    Ok(descriptor.into_value())
}

#[test]
fn get_own_property_trap_results_are_completed_and_checked() {
    let mut agent = Agent::new();
    let (proxy, target, handler) = new_proxy(&mut agent);
    install_trap(
        &mut agent,
        handler,
        "getOwnPropertyDescriptor",
        Behaviour::Regular(configurable_data_descriptor_trap),
    );
    let key = PropertyKey::from_str(&mut agent, "x");

    // The trap result only carries value and configurable; the missing
    // fields complete to their defaults.
    let descriptor = Object::from(proxy)
        .internal_get_own_property(&mut agent, key)
        .unwrap()
        .unwrap();
    assert_eq!(descriptor.value, Some(Value::from(5)));
    assert_eq!(descriptor.writable, Some(false));
    assert_eq!(descriptor.enumerable, Some(false));
    assert_eq!(descriptor.configurable, Some(true));

    // Claiming a property a non-extensible target does not have fails.
    assert!(
        Object::from(target)
            .internal_prevent_extensions(&mut agent)
            .unwrap()
    );
    let error = Object::from(proxy)
        .internal_get_own_property(&mut agent, key)
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn define_property_trap_false_reports_failure() {
    let mut agent = Agent::new();
    let (proxy, target, handler) = new_proxy(&mut agent);
    install_trap(
        &mut agent,
        handler,
        "defineProperty",
        Behaviour::Regular(trap_returning_false),
    );
    let key = PropertyKey::from_str(&mut agent, "x");
    let succeeded = Object::from(proxy)
        .internal_define_own_property(
            &mut agent,
            key,
            PropertyDescriptor {
                value: Some(Value::from(1)),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(!succeeded);
    assert!(!has_property(&mut agent, target.into(), key).unwrap());
}

fn own_keys_a_trap(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    let a = String::from_str(agent, "a");
    let array = create_array_from_list(agent, &[a.into()])?;
    Ok(array.into_value())
}

fn own_keys_a_a_trap(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    let a = String::from_str(agent, "a");
    let array = create_array_from_list(agent, &[a.into(), a.into()])?;
    Ok(array.into_value())
}

#[test]
fn own_keys_trap_controls_enumeration() {
    let mut agent = Agent::new();
    let (proxy, _, handler) = new_proxy(&mut agent);
    install_trap(&mut agent, handler, "ownKeys", Behaviour::Regular(own_keys_a_trap));
    let keys = Object::from(proxy)
        .internal_own_property_keys(&mut agent)
        .unwrap();
    let a = PropertyKey::from_str(&mut agent, "a");
    assert_eq!(keys, vec![a]);
}

#[test]
fn own_keys_trap_rejects_duplicates_and_skipped_pinned_keys() {
    let mut agent = Agent::new();
    let (proxy, _, handler) = new_proxy(&mut agent);
    install_trap(
        &mut agent,
        handler,
        "ownKeys",
        Behaviour::Regular(own_keys_a_a_trap),
    );
    let error = Object::from(proxy)
        .internal_own_property_keys(&mut agent)
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));

    // A trap that skips a non-configurable key also fails.
    let (proxy, target2, handler2) = new_proxy(&mut agent);
    install_trap(
        &mut agent,
        handler2,
        "ownKeys",
        Behaviour::Regular(own_keys_a_trap),
    );
    let pinned = PropertyKey::from_str(&mut agent, "pinned");
    define_property_or_throw(
        &mut agent,
        target2.into(),
        pinned,
        PropertyDescriptor {
            value: Some(Value::from(1)),
            configurable: Some(false),
            ..Default::default()
        },
    )
    .unwrap();
    let error = Object::from(proxy)
        .internal_own_property_keys(&mut agent)
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn revoked_proxies_throw_on_every_operation() {
    let mut agent = Agent::new();
    let (proxy, target, _) = new_proxy(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "x");
    create_data_property_or_throw(&mut agent, target.into(), key, Value::from(1)).unwrap();

    assert!(!proxy.is_revoked(&agent));
    proxy.revoke(&mut agent);
    assert!(proxy.is_revoked(&agent));
    // Revoking twice is harmless.
    proxy.revoke(&mut agent);

    let error = get(&mut agent, proxy.into(), key).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    let error = has_property(&mut agent, proxy.into(), key).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    let error = Object::from(proxy)
        .internal_own_property_keys(&mut agent)
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    let error = Object::from(proxy)
        .internal_get_prototype_of(&mut agent)
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

fn callable_target(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Ok(Value::from(7))
}

fn apply_trap(_: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
    // Receives (target, thisArgument, argArray).
    assert!(arguments.get(0).is_object());
    assert!(arguments.get(2).is_object());
    Ok(Value::from(99))
}

#[test]
fn callable_proxies_forward_and_trap_calls() {
    let mut agent = Agent::new();
    let target = create_builtin_function(
        &mut agent,
        Behaviour::Regular(callable_target),
        BuiltinFunctionArgs::new(0, "seven"),
    );
    let handler = ordinary_object_create(&mut agent, None);
    let proxy = proxy_create(&mut agent, target.into_value(), handler.into_value()).unwrap();

    // No apply trap: the call reaches the target.
    let result = call(&mut agent, proxy.into_value(), Value::Undefined, None).unwrap();
    assert_eq!(result, Value::from(7));

    install_trap(&mut agent, handler, "apply", Behaviour::Regular(apply_trap));
    let result = call(
        &mut agent,
        proxy.into_value(),
        Value::Undefined,
        Some(ArgumentsList(&[Value::from(1)])),
    )
    .unwrap();
    assert_eq!(result, Value::from(99));
}

#[test]
fn non_callable_proxies_are_not_callable() {
    let mut agent = Agent::new();
    let (proxy, _, _) = new_proxy(&mut agent);
    let error = call(&mut agent, proxy.into_value(), Value::Undefined, None).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[test]
fn set_trap_false_surfaces_as_a_failed_write() {
    let mut agent = Agent::new();
    let (proxy, target, handler) = new_proxy(&mut agent);
    install_trap(&mut agent, handler, "set", Behaviour::Regular(trap_returning_false));
    let key = PropertyKey::from_str(&mut agent, "x");
    let error = set(&mut agent, proxy.into(), key, Value::from(1), true).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    assert!(!has_property(&mut agent, target.into(), key).unwrap());
}
