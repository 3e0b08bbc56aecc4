// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod indexes;

use ahash::AHashMap;

use crate::ecmascript::{
    builtins::{
        Array, BuiltinFunction, Error, Proxy,
        array::data::ArrayHeapData,
        builtin_function::BuiltinFunctionHeapData,
        error::ErrorHeapData,
        ordinary::shape::{ObjectShape, ObjectShapeRecord, ShapeTransitionMap},
        proxy::data::ProxyHeapData,
    },
    types::{
        Object, ObjectHeapData, OrdinaryObject, String, StringHeapData, Symbol, SymbolHeapData,
    },
};
use indexes::{
    ArrayIndex, BuiltinFunctionIndex, ErrorIndex, ObjectIndex, ProxyIndex, StringIndex,
    SymbolIndex,
};

/// Arena-allocated storage for all heap data. Handles index into the
/// per-kind vectors; a `None` slot is a reserved but uninitialized entry.
#[derive(Debug, Default)]
pub struct Heap {
    pub(crate) arrays: Vec<Option<ArrayHeapData>>,
    pub(crate) builtin_functions: Vec<Option<BuiltinFunctionHeapData>>,
    pub(crate) errors: Vec<Option<ErrorHeapData>>,
    pub(crate) objects: Vec<Option<ObjectHeapData>>,
    pub(crate) proxys: Vec<Option<ProxyHeapData>>,
    pub(crate) strings: Vec<Option<StringHeapData>>,
    /// Contents-to-handle map backing string interning.
    pub(crate) string_lookup: AHashMap<Box<str>, String>,
    pub(crate) symbols: Vec<Option<SymbolHeapData>>,
    /// Shape records, with their cached outgoing transitions in a parallel
    /// vector.
    pub(crate) shapes: Vec<ObjectShapeRecord>,
    pub(crate) shape_transitions: Vec<ShapeTransitionMap>,
    /// Root shape of the transition tree for each prototype.
    pub(crate) prototype_shapes: AHashMap<Option<Object>, ObjectShape>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a string, deduplicating by contents. Equal contents always
    /// return the same handle.
    pub(crate) fn alloc_string(&mut self, data: &str) -> String {
        if let Some(string) = self.string_lookup.get(data) {
            return *string;
        }
        self.strings.push(Some(StringHeapData { data: data.into() }));
        let string = String(StringIndex::last(&self.strings));
        self.string_lookup.insert(data.into(), string);
        string
    }
}

/// Helper trait for allocating heap data and getting a handle of the right
/// kind back.
pub trait CreateHeapData<T, F> {
    fn create(&mut self, data: T) -> F;
}

impl CreateHeapData<ObjectHeapData, OrdinaryObject> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> OrdinaryObject {
        self.objects.push(Some(data));
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}

impl CreateHeapData<ArrayHeapData, Array> for Heap {
    fn create(&mut self, data: ArrayHeapData) -> Array {
        self.arrays.push(Some(data));
        Array(ArrayIndex::last(&self.arrays))
    }
}

impl CreateHeapData<BuiltinFunctionHeapData, BuiltinFunction> for Heap {
    fn create(&mut self, data: BuiltinFunctionHeapData) -> BuiltinFunction {
        self.builtin_functions.push(Some(data));
        BuiltinFunction(BuiltinFunctionIndex::last(&self.builtin_functions))
    }
}

impl CreateHeapData<ErrorHeapData, Error> for Heap {
    fn create(&mut self, data: ErrorHeapData) -> Error {
        self.errors.push(Some(data));
        Error(ErrorIndex::last(&self.errors))
    }
}

impl CreateHeapData<ProxyHeapData, Proxy> for Heap {
    fn create(&mut self, data: ProxyHeapData) -> Proxy {
        self.proxys.push(Some(data));
        Proxy(ProxyIndex::last(&self.proxys))
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(Some(data));
        Symbol(SymbolIndex::last(&self.symbols))
    }
}
