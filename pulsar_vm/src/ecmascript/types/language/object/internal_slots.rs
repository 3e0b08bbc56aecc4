// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Object, OrdinaryObject};
use crate::ecmascript::execution::Agent;

/// Access to the storage-level slots every object carries: the ordinary
/// backing object that holds keyed properties, the prototype, and the
/// extensible flag.
///
/// Exotic objects keep their own heap data and create the backing object
/// lazily when a keyed property is first defined on them.
pub trait InternalSlots: Sized + Copy + Into<Object> {
    fn get_backing_object(self, agent: &Agent) -> Option<OrdinaryObject>;

    fn create_backing_object(self, agent: &mut Agent) -> OrdinaryObject;

    fn get_or_create_backing_object(self, agent: &mut Agent) -> OrdinaryObject {
        match self.get_backing_object(agent) {
            Some(backing_object) => backing_object,
            None => self.create_backing_object(agent),
        }
    }

    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        self.get_backing_object(agent)?.internal_prototype(agent)
    }

    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        if prototype.is_none() && self.get_backing_object(agent).is_none() {
            return;
        }
        self.get_or_create_backing_object(agent)
            .internal_set_prototype(agent, prototype);
    }

    fn internal_extensible(self, agent: &Agent) -> bool {
        self.get_backing_object(agent)
            .is_none_or(|object| object.internal_extensible(agent))
    }

    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        if value && self.get_backing_object(agent).is_none() {
            return;
        }
        self.get_or_create_backing_object(agent)
            .internal_set_extensible(agent, value);
    }
}
