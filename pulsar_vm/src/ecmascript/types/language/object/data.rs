// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::any::Any;

use ahash::AHashMap;

use super::property_storage::{IndexedProperties, PropertySlot};
use crate::ecmascript::builtins::ordinary::shape::ObjectShape;

/// Heap data of an ordinary object.
///
/// Keyed property values live in `values`, indexed by the offset the shape's
/// property table assigns to their key. Array-index properties are kept in a
/// separate indexed store. The shape carries the key layout and the
/// prototype.
#[derive(Debug)]
pub struct ObjectHeapData {
    pub(crate) shape: ObjectShape,
    pub(crate) extensible: bool,
    pub(crate) values: Vec<PropertySlot>,
    pub(crate) indexed: IndexedProperties,
    pub(crate) internal_slots: InternalSlotMap,
}

impl ObjectHeapData {
    pub(crate) fn new(shape: ObjectShape) -> Self {
        Self {
            shape,
            extensible: true,
            values: Vec::new(),
            indexed: IndexedProperties::default(),
            internal_slots: InternalSlotMap::default(),
        }
    }
}

/// Embedder-attached opaque internal fields, keyed by slot name.
#[derive(Default)]
pub(crate) struct InternalSlotMap(AHashMap<&'static str, Box<dyn Any>>);

impl std::fmt::Debug for InternalSlotMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

impl InternalSlotMap {
    pub(crate) fn insert(&mut self, name: &'static str, value: Box<dyn Any>) {
        self.0.insert(name, value);
    }

    pub(crate) fn has(&self, name: &'static str) -> bool {
        self.0.contains_key(name)
    }

    pub(crate) fn get<T: 'static>(&self, name: &'static str) -> Option<&T> {
        self.0.get(name)?.downcast_ref()
    }

    pub(crate) fn get_mut<T: 'static>(&mut self, name: &'static str) -> Option<&mut T> {
        self.0.get_mut(name)?.downcast_mut()
    }
}
