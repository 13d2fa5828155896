use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap to keep insertion order and rustc_hash for fast hashing
/// Neighbor iteration and tree attach order both rely on the insertion order
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
