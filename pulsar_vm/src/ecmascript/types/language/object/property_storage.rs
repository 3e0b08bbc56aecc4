// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{collections::BTreeMap, ops::Range};

use super::{OrdinaryObject, PropertyKey};
use crate::ecmascript::{
    builtins::ordinary::shape::{
        MAX_CACHED_TRANSITIONS, PropertyAttributes, Transition,
    },
    execution::Agent,
    types::{Function, PropertyDescriptor, Value},
};

/// Value half of a property: the attribute half lives in the shape's
/// property table (or next to the slot, for indexed properties).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PropertySlot {
    Data {
        value: Value,
    },
    Accessor {
        get: Option<Function>,
        set: Option<Function>,
    },
}

impl PropertySlot {
    /// Split a fully populated descriptor into its value half.
    pub(crate) fn from_descriptor(descriptor: &PropertyDescriptor) -> Self {
        if descriptor.is_accessor_descriptor() {
            PropertySlot::Accessor {
                get: descriptor.get.unwrap_or(None),
                set: descriptor.set.unwrap_or(None),
            }
        } else {
            PropertySlot::Data {
                value: descriptor.value.unwrap_or(Value::Undefined),
            }
        }
    }

    /// Reassemble a fully populated descriptor from slot and attributes.
    pub(crate) fn into_descriptor(self, attributes: PropertyAttributes) -> PropertyDescriptor {
        match self {
            PropertySlot::Data { value } => PropertyDescriptor {
                value: Some(value),
                writable: Some(attributes.writable()),
                get: None,
                set: None,
                enumerable: Some(attributes.enumerable()),
                configurable: Some(attributes.configurable()),
            },
            PropertySlot::Accessor { get, set } => PropertyDescriptor {
                value: None,
                writable: None,
                get: Some(get),
                set: Some(set),
                enumerable: Some(attributes.enumerable()),
                configurable: Some(attributes.configurable()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct IndexedProperty {
    pub(crate) slot: PropertySlot,
    pub(crate) attributes: PropertyAttributes,
}

/// Array-index properties, kept apart from the keyed table. The sorted map
/// gives ascending-index iteration for key enumeration.
#[derive(Debug, Default)]
pub(crate) struct IndexedProperties {
    entries: BTreeMap<u32, IndexedProperty>,
}

impl IndexedProperties {
    pub(crate) fn get(&self, index: u32) -> Option<IndexedProperty> {
        self.entries.get(&index).copied()
    }

    pub(crate) fn insert(&mut self, index: u32, property: IndexedProperty) {
        self.entries.insert(index, property);
    }

    pub(crate) fn remove(&mut self, index: u32) -> Option<IndexedProperty> {
        self.entries.remove(&index)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Indices within `range`, highest first. Used by the array length
    /// shrink loop.
    pub(crate) fn keys_in_range_descending(&self, range: Range<u32>) -> Vec<u32> {
        self.entries.range(range).rev().map(|(key, _)| *key).collect()
    }
}

/// Couples an object's shape with its value vector: every mutation keeps the
/// shape's property table and the values in lock-step so that the table
/// index of a key is the offset of its value.
#[derive(Debug, Clone, Copy)]
pub struct PropertyStorage(OrdinaryObject);

impl PropertyStorage {
    pub(crate) fn new(object: OrdinaryObject) -> Self {
        Self(object)
    }

    pub fn get(self, agent: &mut Agent, key: PropertyKey) -> Option<PropertyDescriptor> {
        if let Some(index) = key.array_index() {
            let entry = agent[self.0].indexed.get(index)?;
            Some(entry.slot.into_descriptor(entry.attributes))
        } else {
            let shape = agent[self.0].shape;
            let (offset, attributes) = shape.lookup(agent, key)?;
            let slot = agent[self.0].values[offset as usize];
            Some(slot.into_descriptor(attributes))
        }
    }

    /// Create a property that does not exist yet. The descriptor must be
    /// fully populated.
    pub(crate) fn add(self, agent: &mut Agent, key: PropertyKey, descriptor: &PropertyDescriptor) {
        let attributes = PropertyAttributes::from_descriptor(descriptor);
        let slot = PropertySlot::from_descriptor(descriptor);
        if let Some(index) = key.array_index() {
            agent[self.0]
                .indexed
                .insert(index, IndexedProperty { slot, attributes });
            return;
        }
        let shape = agent[self.0].shape;
        if shape.is_unique(agent) {
            shape.add_unique_property(agent, key, attributes);
        } else if shape.cached_transition_count(agent) >= MAX_CACHED_TRANSITIONS {
            // Heavily branching shapes stop sharing; the object continues on
            // a private clone.
            let unique = shape.make_unique_clone(agent);
            unique.add_unique_property(agent, key, attributes);
            agent[self.0].shape = unique;
        } else {
            let next = shape.get_or_create_child(agent, Transition::Put { key, attributes });
            agent[self.0].shape = next;
        }
        agent[self.0].values.push(slot);
    }

    /// Overwrite an existing property with a fully populated descriptor,
    /// reconfiguring attributes through a Configure transition when they
    /// change.
    pub(crate) fn update(
        self,
        agent: &mut Agent,
        key: PropertyKey,
        descriptor: &PropertyDescriptor,
    ) {
        let attributes = PropertyAttributes::from_descriptor(descriptor);
        let slot = PropertySlot::from_descriptor(descriptor);
        if let Some(index) = key.array_index() {
            agent[self.0]
                .indexed
                .insert(index, IndexedProperty { slot, attributes });
            return;
        }
        let shape = agent[self.0].shape;
        let (offset, current) = shape
            .lookup(agent, key)
            .expect("updated a property that does not exist");
        if attributes != current {
            if shape.is_unique(agent) {
                shape.reconfigure_unique_property(agent, key, attributes);
            } else if shape.cached_transition_count(agent) >= MAX_CACHED_TRANSITIONS {
                let unique = shape.make_unique_clone(agent);
                unique.reconfigure_unique_property(agent, key, attributes);
                agent[self.0].shape = unique;
            } else {
                let next =
                    shape.get_or_create_child(agent, Transition::Configure { key, attributes });
                agent[self.0].shape = next;
            }
        }
        agent[self.0].values[offset as usize] = slot;
    }

    /// Remove a property. Keyed removal leaves the shared transition tree:
    /// the object moves onto a unique shape and later offsets shift down by
    /// one.
    pub(crate) fn remove(self, agent: &mut Agent, key: PropertyKey) {
        if let Some(index) = key.array_index() {
            agent[self.0].indexed.remove(index);
            return;
        }
        let shape = agent[self.0].shape;
        let shape = if shape.is_unique(agent) {
            shape
        } else {
            let unique = shape.make_unique_clone(agent);
            agent[self.0].shape = unique;
            unique
        };
        if let Some(offset) = shape.remove_unique_property(agent, key) {
            agent[self.0].values.remove(offset as usize);
        }
    }
}
