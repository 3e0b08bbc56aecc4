// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod array;
pub mod builtin_function;
pub mod error;
pub mod ordinary;
pub mod proxy;

pub use array::{Array, array_create, create_array_from_list};
pub use builtin_function::{
    ArgumentsList, Behaviour, BuiltinFunction, BuiltinFunctionArgs, ConstructorFn, RegularFn,
    create_builtin_function,
};
pub use error::Error;
pub use ordinary::ordinary_object_create;
pub use proxy::{Proxy, proxy_create};
