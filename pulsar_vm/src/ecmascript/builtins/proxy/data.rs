// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::Object;

/// Heap data of a Proxy exotic object. Revocation clears both the target
/// and the handler.
#[derive(Debug)]
pub struct ProxyHeapData {
    pub(crate) target: Option<Object>,
    pub(crate) handler: Option<Object>,
    /// Captured at creation: the target was callable.
    pub(crate) callable: bool,
    /// Captured at creation: the target was a constructor.
    pub(crate) constructable: bool,
}
