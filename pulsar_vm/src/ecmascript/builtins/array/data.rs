// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::OrdinaryObject;

/// Heap data of an Array exotic object.
#[derive(Debug)]
pub struct ArrayHeapData {
    pub(crate) backing_object: OrdinaryObject,
    pub(crate) len: u32,
    pub(crate) len_writable: bool,
}
