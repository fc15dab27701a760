#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use core::fmt::Debug;

/// Rendered node map: key -> mounted node handle.
#[cfg(feature = "std")]
pub(crate) type NodeMap<K, N> = HashMap<K, N>;
#[cfg(not(feature = "std"))]
pub(crate) type NodeMap<K, N> = BTreeMap<K, N>;

/// Keys that can index the rendered node map.
///
/// Implemented for `usize` (list indexes) and [`crate::CellKey`] (grid cells). With `std` the map
/// is hashed; without it the map is ordered.
#[cfg(feature = "std")]
pub trait NodeKey: Copy + Debug + core::hash::Hash + Eq + Ord {}
#[cfg(feature = "std")]
impl<K: Copy + Debug + core::hash::Hash + Eq + Ord> NodeKey for K {}

#[cfg(not(feature = "std"))]
pub trait NodeKey: Copy + Debug + Ord {}
#[cfg(not(feature = "std"))]
impl<K: Copy + Debug + Ord> NodeKey for K {}
