// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ahash::RandomState;
use hashbrown::HashMap;
use indexmap::IndexMap;

use crate::{
    ecmascript::{
        execution::Agent,
        types::{Object, PropertyDescriptor, PropertyKey},
    },
    heap::indexes::ObjectShapeIndex,
};

/// Once a shape has this many cached outgoing transitions, objects adding
/// further properties through it fall off the shared tree onto unique
/// shapes.
pub(crate) const MAX_CACHED_TRANSITIONS: usize = 100;

/// Resolved property attributes, as stored in shape property tables. The
/// has-bits of a partial descriptor never reach this type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyAttributes(u8);

impl PropertyAttributes {
    const WRITABLE: u8 = 1 << 0;
    const ENUMERABLE: u8 = 1 << 1;
    const CONFIGURABLE: u8 = 1 << 2;

    pub(crate) fn new(writable: bool, enumerable: bool, configurable: bool) -> Self {
        let mut bits = 0;
        if writable {
            bits |= Self::WRITABLE;
        }
        if enumerable {
            bits |= Self::ENUMERABLE;
        }
        if configurable {
            bits |= Self::CONFIGURABLE;
        }
        Self(bits)
    }

    /// Resolve a fully populated descriptor's attribute half. Accessor
    /// properties carry no writability; the bit stays clear.
    pub(crate) fn from_descriptor(descriptor: &PropertyDescriptor) -> Self {
        Self::new(
            descriptor.writable.unwrap_or(false),
            descriptor.enumerable.unwrap_or(false),
            descriptor.configurable.unwrap_or(false),
        )
    }

    pub(crate) fn writable(self) -> bool {
        self.0 & Self::WRITABLE != 0
    }

    pub(crate) fn enumerable(self) -> bool {
        self.0 & Self::ENUMERABLE != 0
    }

    pub(crate) fn configurable(self) -> bool {
        self.0 & Self::CONFIGURABLE != 0
    }
}

impl std::fmt::Debug for PropertyAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyAttributes")
            .field("writable", &self.writable())
            .field("enumerable", &self.enumerable())
            .field("configurable", &self.configurable())
            .finish()
    }
}

/// Edge label in the shape transition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Transition {
    /// A new property was added; its offset is the parent shape's length.
    Put {
        key: PropertyKey,
        attributes: PropertyAttributes,
    },
    /// An existing property's attributes changed; offsets are untouched.
    Configure {
        key: PropertyKey,
        attributes: PropertyAttributes,
    },
    /// The prototype changed; the property table is untouched.
    Prototype { prototype: Option<Object> },
}

/// Insertion-ordered key layout of a shape. The map index of a key is the
/// offset of its value in every object that holds the shape.
#[derive(Debug, Clone, Default)]
pub(crate) struct PropertyTable {
    entries: IndexMap<PropertyKey, PropertyAttributes, RandomState>,
}

impl PropertyTable {
    pub(crate) fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        self.entries.keys().copied()
    }
}

/// Cached outgoing transitions of one shape, in an arena vector parallel to
/// the shape records.
#[derive(Debug, Default)]
pub(crate) struct ShapeTransitionMap {
    table: HashMap<Transition, ObjectShape, RandomState>,
}

/// A node in the shape transition tree.
///
/// Shared shapes are immutable once created; their property table is
/// memoized lazily by replaying the transition chain. Unique shapes are
/// owned by a single object, always carry their table, and are mutated in
/// place.
#[derive(Debug)]
pub struct ObjectShapeRecord {
    previous: Option<ObjectShape>,
    transition: Option<Transition>,
    prototype: Option<Object>,
    len: u32,
    unique: bool,
    table: Option<PropertyTable>,
}

/// Handle to a shape record. Two objects built by identical insertion
/// sequences hold equal handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectShape(pub(crate) ObjectShapeIndex);

impl ObjectShape {
    fn record(self, agent: &Agent) -> &ObjectShapeRecord {
        &agent.heap.shapes[self.0.into_index()]
    }

    fn record_mut(self, agent: &mut Agent) -> &mut ObjectShapeRecord {
        &mut agent.heap.shapes[self.0.into_index()]
    }

    pub fn prototype(self, agent: &Agent) -> Option<Object> {
        self.record(agent).prototype
    }

    /// Number of keyed properties laid out by this shape.
    pub fn len(self, agent: &Agent) -> u32 {
        self.record(agent).len
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        self.record(agent).len == 0
    }

    pub fn is_unique(self, agent: &Agent) -> bool {
        self.record(agent).unique
    }

    pub(crate) fn cached_transition_count(self, agent: &Agent) -> usize {
        agent.heap.shape_transitions[self.0.into_index()].table.len()
    }

    fn get_transition(self, agent: &Agent, transition: Transition) -> Option<ObjectShape> {
        agent.heap.shape_transitions[self.0.into_index()]
            .table
            .get(&transition)
            .copied()
    }

    /// Follow a transition edge, creating and caching the child shape on
    /// first use.
    pub(crate) fn get_or_create_child(
        self,
        agent: &mut Agent,
        transition: Transition,
    ) -> ObjectShape {
        if let Some(shape) = self.get_transition(agent, transition) {
            return shape;
        }
        let record = self.record(agent);
        debug_assert!(!record.unique);
        let len = match transition {
            Transition::Put { .. } => record.len + 1,
            Transition::Configure { .. } | Transition::Prototype { .. } => record.len,
        };
        let prototype = match transition {
            Transition::Prototype { prototype } => prototype,
            _ => record.prototype,
        };
        let shape = push_shape(
            agent,
            ObjectShapeRecord {
                previous: Some(self),
                transition: Some(transition),
                prototype,
                len,
                unique: false,
                table: None,
            },
        );
        let replaced = agent.heap.shape_transitions[self.0.into_index()]
            .table
            .insert(transition, shape);
        debug_assert!(replaced.is_none());
        shape
    }

    /// Clone into a mutable shape owned by a single object. The clone is
    /// never registered in any transition cache or prototype root table.
    pub(crate) fn make_unique_clone(self, agent: &mut Agent) -> ObjectShape {
        let table = self.property_table(agent).clone();
        let record = self.record(agent);
        let prototype = record.prototype;
        let len = record.len;
        push_shape(
            agent,
            ObjectShapeRecord {
                previous: None,
                transition: None,
                prototype,
                len,
                unique: true,
                table: Some(table),
            },
        )
    }

    pub(crate) fn add_unique_property(
        self,
        agent: &mut Agent,
        key: PropertyKey,
        attributes: PropertyAttributes,
    ) {
        let record = self.record_mut(agent);
        debug_assert!(record.unique);
        let table = record
            .table
            .as_mut()
            .expect("unique shape without property table");
        let (offset, replaced) = table.entries.insert_full(key, attributes);
        debug_assert!(replaced.is_none());
        debug_assert_eq!(offset as u32, record.len);
        record.len += 1;
    }

    pub(crate) fn reconfigure_unique_property(
        self,
        agent: &mut Agent,
        key: PropertyKey,
        attributes: PropertyAttributes,
    ) {
        let record = self.record_mut(agent);
        debug_assert!(record.unique);
        let table = record
            .table
            .as_mut()
            .expect("unique shape without property table");
        if let Some(entry) = table.entries.get_mut(&key) {
            *entry = attributes;
        }
    }

    /// Remove a key from a unique shape, returning the offset it occupied.
    /// Later offsets shift down by one.
    pub(crate) fn remove_unique_property(
        self,
        agent: &mut Agent,
        key: PropertyKey,
    ) -> Option<u32> {
        let record = self.record_mut(agent);
        debug_assert!(record.unique);
        let table = record
            .table
            .as_mut()
            .expect("unique shape without property table");
        let (offset, _, _) = table.entries.shift_remove_full(&key)?;
        record.len -= 1;
        Some(offset as u32)
    }

    pub(crate) fn set_unique_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        let record = self.record_mut(agent);
        debug_assert!(record.unique);
        record.prototype = prototype;
    }

    /// Offset and attributes of a key in this shape's layout.
    pub(crate) fn lookup(
        self,
        agent: &mut Agent,
        key: PropertyKey,
    ) -> Option<(u32, PropertyAttributes)> {
        let table = self.property_table(agent);
        let (offset, _, attributes) = table.entries.get_full(&key)?;
        Some((offset as u32, *attributes))
    }

    pub(crate) fn property_table(self, agent: &mut Agent) -> &PropertyTable {
        self.ensure_property_table(agent);
        agent.heap.shapes[self.0.into_index()]
            .table
            .as_ref()
            .expect("property table was just built")
    }

    /// Memoize this shape's property table: walk `previous` links until a
    /// shape with a memoized table (at worst a root, which always has one),
    /// then replay the intermediate transitions forward over a copy of it.
    fn ensure_property_table(self, agent: &mut Agent) {
        if self.record(agent).table.is_some() {
            return;
        }
        let mut replay = Vec::new();
        let mut cursor = self;
        let mut table = loop {
            let record = cursor.record(agent);
            if let Some(table) = &record.table {
                break table.clone();
            }
            replay.push(record.transition);
            match record.previous {
                Some(previous) => cursor = previous,
                None => break PropertyTable::default(),
            }
        };
        for transition in replay.iter().rev() {
            match transition {
                Some(Transition::Put { key, attributes }) => {
                    table.entries.insert(*key, *attributes);
                }
                Some(Transition::Configure { key, attributes }) => {
                    if let Some(entry) = table.entries.get_mut(key) {
                        *entry = *attributes;
                    }
                }
                Some(Transition::Prototype { .. }) | None => {}
            }
        }
        self.record_mut(agent).table = Some(table);
    }
}

/// Root shape for a prototype, shared by every object created with it.
pub(crate) fn get_shape_for_prototype(agent: &mut Agent, prototype: Option<Object>) -> ObjectShape {
    if let Some(shape) = agent.heap.prototype_shapes.get(&prototype) {
        return *shape;
    }
    let shape = push_shape(
        agent,
        ObjectShapeRecord {
            previous: None,
            transition: None,
            prototype,
            len: 0,
            unique: false,
            table: Some(PropertyTable::default()),
        },
    );
    agent.heap.prototype_shapes.insert(prototype, shape);
    shape
}

fn push_shape(agent: &mut Agent, record: ObjectShapeRecord) -> ObjectShape {
    agent.heap.shapes.push(record);
    agent.heap.shape_transitions.push(ShapeTransitionMap::default());
    ObjectShape(ObjectShapeIndex::from_index(agent.heap.shapes.len() - 1))
}
