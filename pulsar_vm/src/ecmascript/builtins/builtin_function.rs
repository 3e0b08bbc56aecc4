// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use crate::{
    ecmascript::{
        builtins::ordinary::ordinary_object_create,
        execution::{Agent, ExceptionType, JsResult},
        types::{
            Function, InternalMethods, InternalSlots, Object, OrdinaryObject, String, Value,
        },
    },
    heap::{CreateHeapData, Heap, indexes::BuiltinFunctionIndex},
};

/// Arguments passed to a builtin function behaviour. Missing arguments read
/// as undefined.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArgumentsList<'a>(pub &'a [Value]);

impl ArgumentsList<'_> {
    pub fn get(&self, index: usize) -> Value {
        self.0.get(index).copied().unwrap_or(Value::Undefined)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;
pub type ConstructorFn = fn(&mut Agent, Value, ArgumentsList<'_>, Option<Object>) -> JsResult<Value>;

/// Native behaviour of a builtin function. Constructor behaviours receive
/// the active new target as their extra parameter.
#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Regular(RegularFn),
    Constructor(ConstructorFn),
}

#[derive(Debug)]
pub struct BuiltinFunctionHeapData {
    pub(crate) backing_object: Option<OrdinaryObject>,
    pub(crate) behaviour: Behaviour,
    pub(crate) initial_name: Option<String>,
    pub(crate) length: u8,
}

#[derive(Debug, Default)]
pub struct BuiltinFunctionArgs {
    pub length: u8,
    pub name: &'static str,
}

impl BuiltinFunctionArgs {
    pub fn new(length: u8, name: &'static str) -> Self {
        Self { length, name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinFunction(pub(crate) BuiltinFunctionIndex);

impl BuiltinFunction {
    pub fn into_object(self) -> Object {
        Object::BuiltinFunction(self)
    }

    pub fn into_function(self) -> Function {
        Function::BuiltinFunction(self)
    }

    pub fn into_value(self) -> Value {
        Value::BuiltinFunction(self)
    }

    pub fn initial_name(self, agent: &Agent) -> Option<String> {
        agent[self].initial_name
    }

    pub fn is_constructor(self, agent: &Agent) -> bool {
        matches!(agent[self].behaviour, Behaviour::Constructor(_))
    }
}

impl InternalSlots for BuiltinFunction {
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject> {
        agent[self].backing_object
    }

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        debug_assert!(agent[self].backing_object.is_none());
        let backing_object = ordinary_object_create(agent, None);
        agent[self].backing_object = Some(backing_object);
        backing_object
    }
}

impl InternalMethods for BuiltinFunction {
    /// ### [10.3.1 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    fn internal_call(
        self,
        agent: &mut Agent,
        this_argument: Value,
        arguments: ArgumentsList<'_>,
    ) -> JsResult<Value> {
        match agent[self].behaviour {
            Behaviour::Regular(func) => func(agent, this_argument, arguments),
            Behaviour::Constructor(func) => func(agent, this_argument, arguments, None),
        }
    }

    /// ### [10.3.2 \[\[Construct\]\] ( argumentsList, newTarget )](https://tc39.es/ecma262/#sec-built-in-function-objects-construct-argumentslist-newtarget)
    fn internal_construct(
        self,
        agent: &mut Agent,
        arguments: ArgumentsList<'_>,
        new_target: Object,
    ) -> JsResult<Object> {
        let Behaviour::Constructor(func) = agent[self].behaviour else {
            return Err(
                agent.throw_exception(ExceptionType::TypeError, "function is not a constructor")
            );
        };
        let result = func(agent, Value::Undefined, arguments, Some(new_target))?;
        Object::try_from(result).map_err(|_| {
            agent.throw_exception(ExceptionType::TypeError, "constructor returned a non-object")
        })
    }
}

/// ### [10.3.3 CreateBuiltinFunction ( behaviour, length, name, ... )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> BuiltinFunction {
    let initial_name = if args.name.is_empty() {
        None
    } else {
        Some(String::from_str(agent, args.name))
    };
    agent.heap.create(BuiltinFunctionHeapData {
        backing_object: None,
        behaviour,
        initial_name,
        length: args.length,
    })
}

impl Index<BuiltinFunction> for Agent {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        &self.heap[index]
    }
}

impl IndexMut<BuiltinFunction> for Agent {
    fn index_mut(&mut self, index: BuiltinFunction) -> &mut Self::Output {
        &mut self.heap[index]
    }
}

impl Index<BuiltinFunction> for Heap {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        self.builtin_functions
            .get(index.0.into_index())
            .expect("BuiltinFunction out of bounds")
            .as_ref()
            .expect("BuiltinFunction slot empty")
    }
}

impl IndexMut<BuiltinFunction> for Heap {
    fn index_mut(&mut self, index: BuiltinFunction) -> &mut Self::Output {
        self.builtin_functions
            .get_mut(index.0.into_index())
            .expect("BuiltinFunction out of bounds")
            .as_mut()
            .expect("BuiltinFunction slot empty")
    }
}
