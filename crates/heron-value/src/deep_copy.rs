//! Cycle-safe deep copy
//!
//! Rebuilds a value graph container by container. Mappings and sequences are
//! copied; every other value is atomic and is shared with the copy.
//!
//! Key properties:
//! - Handles circular references
//! - Preserves shared references within one copy operation
//! - Never mutates the input
//!
//! Each container is registered in the [`CloneCache`] *before* its children
//! are visited, so a child that leads back to it finds the copy in progress
//! instead of recursing again. Recursion depth is therefore bounded by the
//! number of distinct containers on the current path.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::array::JsArray;
use crate::error::{CloneError, CloneResult};
use crate::gc::GcRef;
use crate::object::JsObject;
use crate::value::{Value, ValueKind};

/// What to do with atomic heap values (functions, dates, regexps)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AtomicPolicy {
    /// Share the handle with the copy
    #[default]
    PassThrough,
    /// Fail with [`CloneError::NotCloneable`]. Primitives still pass.
    Reject,
}

/// Deep copy configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneConfig {
    /// Treatment of atomic heap values (default: pass through)
    pub atomic_policy: AtomicPolicy,
    /// Maximum container nesting (default: unlimited)
    pub max_depth: Option<usize>,
}

/// Counters for one copier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneStats {
    /// Containers newly allocated
    pub containers_copied: usize,
    /// Containers resolved from the cache (cycles and shared references)
    pub cache_hits: usize,
    /// Atomic values passed through
    pub atomics_passed: usize,
}

/// Identity-keyed map from original containers to their copies
#[derive(Debug, Default)]
pub struct CloneCache {
    /// Heap address of the original -> (original, copy). Holding the
    /// original keeps its address from being reused while the entry exists.
    entries: FxHashMap<usize, (Value, Value)>,
}

impl CloneCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy registered for `original`, matched by identity
    pub fn get(&self, original: &Value) -> Option<Value> {
        let addr = original.heap_addr()?;
        self.entries.get(&addr).map(|(_, copy)| copy.clone())
    }

    /// Whether `original` has been registered
    pub fn contains(&self, original: &Value) -> bool {
        original
            .heap_addr()
            .is_some_and(|addr| self.entries.contains_key(&addr))
    }

    /// Number of registered containers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn insert(&mut self, original: &Value, copy: &Value) {
        if let Some(addr) = original.heap_addr() {
            self.entries.insert(addr, (original.clone(), copy.clone()));
        }
    }
}

/// Reusable deep copier.
///
/// The cache lives as long as the copier: values copied by successive calls
/// to [`DeepCopier::copy`] share copies of the containers they have in
/// common. Call [`DeepCopier::reset`] to start over. After an error the
/// cache may hold partially filled copies, so reset before reusing.
#[derive(Debug, Default)]
pub struct DeepCopier {
    config: CloneConfig,
    cache: CloneCache,
    stats: CloneStats,
}

impl DeepCopier {
    /// Create a copier with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a copier with a custom config
    pub fn with_config(config: CloneConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Get config
    pub fn config(&self) -> &CloneConfig {
        &self.config
    }

    /// Cache built so far
    pub fn cache(&self) -> &CloneCache {
        &self.cache
    }

    /// Counters accumulated since creation or the last reset
    pub fn stats(&self) -> CloneStats {
        self.stats
    }

    /// Clear the cache and counters
    pub fn reset(&mut self) {
        self.cache.clear();
        self.stats = CloneStats::default();
    }

    /// Deep copy `value`
    pub fn copy(&mut self, value: &Value) -> CloneResult<Value> {
        let result = self.copy_value(value, 0);
        match &result {
            Ok(_) => debug!(
                containers_copied = self.stats.containers_copied,
                cache_hits = self.stats.cache_hits,
                atomics_passed = self.stats.atomics_passed,
                "deep copy finished"
            ),
            Err(err) => debug!(error = %err, "deep copy failed"),
        }
        result
    }

    fn copy_value(&mut self, value: &Value, depth: usize) -> CloneResult<Value> {
        if value.kind() == ValueKind::Atomic {
            return self.pass_atomic(value);
        }

        if let Some(copy) = self.cache.get(value) {
            self.stats.cache_hits += 1;
            trace!(kind = value.type_name(), "deep copy cache hit");
            return Ok(copy);
        }

        let depth = depth + 1;
        if let Some(limit) = self.config.max_depth.filter(|&limit| depth > limit) {
            return Err(CloneError::DepthExceeded { limit });
        }

        match value {
            Value::Array(arr) => self.copy_array(value, arr, depth),
            Value::Object(obj) => self.copy_object(value, obj, depth),
            _ => self.pass_atomic(value),
        }
    }

    fn pass_atomic(&mut self, value: &Value) -> CloneResult<Value> {
        if self.config.atomic_policy == AtomicPolicy::Reject && value.is_heap() {
            return Err(CloneError::NotCloneable(value.type_name()));
        }
        self.stats.atomics_passed += 1;
        Ok(value.clone())
    }

    fn copy_array(
        &mut self,
        original: &Value,
        arr: &GcRef<JsArray>,
        depth: usize,
    ) -> CloneResult<Value> {
        let elements = arr.elements();
        let new_arr = GcRef::new(JsArray::with_capacity(elements.len()));
        let copy = Value::array(new_arr.clone());

        // Register before cloning elements
        self.cache.insert(original, &copy);
        self.stats.containers_copied += 1;

        for element in &elements {
            let cloned = self.copy_value(element, depth)?;
            new_arr.push(cloned);
        }

        Ok(copy)
    }

    fn copy_object(
        &mut self,
        original: &Value,
        obj: &GcRef<JsObject>,
        depth: usize,
    ) -> CloneResult<Value> {
        let entries = obj.entries();
        let new_obj = GcRef::new(JsObject::with_capacity(entries.len()));
        let copy = Value::object(new_obj.clone());

        // Register before cloning properties
        self.cache.insert(original, &copy);
        self.stats.containers_copied += 1;

        for (key, val) in entries {
            let cloned = self.copy_value(&val, depth)?;
            new_obj.set(key, cloned);
        }

        Ok(copy)
    }
}

/// Deep copy `value` with a fresh cache and the default config
pub fn deep_copy(value: &Value) -> Value {
    match DeepCopier::new().copy(value) {
        Ok(copy) => copy,
        // Pass-through with no depth limit has no failure path.
        Err(err) => unreachable!("default deep copy failed: {err}"),
    }
}
