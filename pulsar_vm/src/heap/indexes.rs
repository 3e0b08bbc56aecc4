// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::NonZeroU32,
};

use crate::ecmascript::{
    builtins::{
        array::data::ArrayHeapData, builtin_function::BuiltinFunctionHeapData,
        error::ErrorHeapData, ordinary::shape::ObjectShapeRecord, proxy::data::ProxyHeapData,
    },
    types::{ObjectHeapData, StringHeapData, SymbolHeapData},
};

/// A typed index into one of the heap's arena vectors.
///
/// Stored as a `NonZeroU32` of the index plus one, so that `Option<BaseIndex>`
/// is pointer-niche optimized.
pub struct BaseIndex<T: ?Sized>(NonZeroU32, PhantomData<T>);

impl<T: ?Sized> std::fmt::Debug for BaseIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BaseIndex({})", self.into_index())
    }
}

impl<T: ?Sized> Clone for BaseIndex<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for BaseIndex<T> {}

impl<T: ?Sized> PartialEq for BaseIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized> Eq for BaseIndex<T> {}

impl<T: ?Sized> PartialOrd for BaseIndex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for BaseIndex<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: ?Sized> Hash for BaseIndex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T: ?Sized> BaseIndex<T> {
    pub(crate) fn into_index(self) -> usize {
        self.0.get() as usize - 1
    }

    pub(crate) fn from_index(value: usize) -> Self {
        assert!(value < u32::MAX as usize);
        // SAFETY: value + 1 cannot wrap to zero after the assert above.
        Self(
            unsafe { NonZeroU32::new_unchecked(value as u32 + 1) },
            PhantomData,
        )
    }

    /// Index of the most recently pushed entry in an arena vector.
    pub(crate) fn last(vec: &[Option<T>]) -> Self
    where
        T: Sized,
    {
        assert!(!vec.is_empty());
        Self::from_index(vec.len() - 1)
    }
}

pub type ArrayIndex = BaseIndex<ArrayHeapData>;
pub type BuiltinFunctionIndex = BaseIndex<BuiltinFunctionHeapData>;
pub type ErrorIndex = BaseIndex<ErrorHeapData>;
pub type ObjectIndex = BaseIndex<ObjectHeapData>;
pub type ObjectShapeIndex = BaseIndex<ObjectShapeRecord>;
pub type ProxyIndex = BaseIndex<ProxyHeapData>;
pub type StringIndex = BaseIndex<StringHeapData>;
pub type SymbolIndex = BaseIndex<SymbolHeapData>;
