// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Proxy, data::ProxyHeapData};
use crate::{
    ecmascript::{
        abstract_operations::testing_and_comparison::{is_callable, is_constructor},
        execution::{Agent, ExceptionType, JsResult},
        types::{Object, Value},
    },
    heap::CreateHeapData,
};

/// A proxy's target and handler, proven present. Every internal method
/// revalidates revocation before touching either.
pub(crate) struct NonRevokedProxy {
    pub(crate) target: Object,
    pub(crate) handler: Object,
}

pub(crate) fn validate_non_revoked_proxy(
    agent: &mut Agent,
    proxy: Proxy,
) -> JsResult<NonRevokedProxy> {
    let data = &agent[proxy];
    match (data.target, data.handler) {
        (Some(target), Some(handler)) => Ok(NonRevokedProxy { target, handler }),
        _ => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "attempted to operate on a revoked proxy",
        )),
    }
}

/// ### [10.5.14 ProxyCreate ( target, handler )](https://tc39.es/ecma262/#sec-proxycreate)
pub fn proxy_create(agent: &mut Agent, target: Value, handler: Value) -> JsResult<Proxy> {
    // 1. If target is not an Object, throw a TypeError exception.
    let Ok(target) = Object::try_from(target) else {
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "proxy target must be an object",
        ));
    };
    // 2. If handler is not an Object, throw a TypeError exception.
    let Ok(handler) = Object::try_from(handler) else {
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "proxy handler must be an object",
        ));
    };
    // 5-6. A proxy is callable or constructable exactly when its target is.
    let callable = is_callable(agent, target.into_value()).is_some();
    let constructable = is_constructor(agent, target.into_value());
    // 3-4, 7-8. Create and initialise the proxy.
    Ok(agent.heap.create(ProxyHeapData {
        target: Some(target),
        handler: Some(handler),
        callable,
        constructable,
    }))
}
