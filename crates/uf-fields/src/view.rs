//! Lazy canonical-array projection of a record's unit-bearing fields.

use core::fmt;
use std::any::type_name;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::class::UnitRecord;
use crate::error::{FieldError, FieldResult};
use crate::registry;

/// Per-instance memo of canonicalized arrays.
///
/// Embedded in the record as a field, next to the quantities it mirrors.
/// Entries are write-once: populated on first access, never invalidated or
/// evicted for the life of the instance. Reassigning a field after its
/// first read is NOT observed by the cache.
#[derive(Default)]
pub struct ArrayCache {
    slots: Mutex<HashMap<&'static str, Arc<[f64]>>>,
}

impl ArrayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.slots.lock().expect("array cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn hit(&self, name: &str) -> Option<Arc<[f64]>> {
        self.slots
            .lock()
            .expect("array cache poisoned")
            .get(name)
            .cloned()
    }

    // First store wins; a racing duplicate computation is discarded.
    fn store(&self, name: &'static str, values: Arc<[f64]>) -> Arc<[f64]> {
        self.slots
            .lock()
            .expect("array cache poisoned")
            .entry(name)
            .or_insert(values)
            .clone()
    }
}

impl Clone for ArrayCache {
    // The memo is derived data; a cloned record starts empty and refills
    // on demand.
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl fmt::Debug for ArrayCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayCache({} cached)", self.len())
    }
}

/// Read-only view of a record's unit-bearing fields as plain numeric
/// arrays in their canonical units.
///
/// Construction does no work; each field is converted on first access and
/// memoized in the owner's [`ArrayCache`].
pub struct ArrayView<'a, R: UnitRecord + 'static> {
    owner: &'a R,
    cache: &'a ArrayCache,
}

impl<'a, R: UnitRecord + 'static> ArrayView<'a, R> {
    /// Bind a view to its owner and the owner's cache. Fully lazy.
    pub fn new(owner: &'a R, cache: &'a ArrayCache) -> Self {
        Self { owner, cache }
    }

    /// The owner's value for `name`, converted to the field's canonical
    /// unit and stripped of its tag.
    ///
    /// The first access converts and caches; later accesses return the
    /// cached array (the same `Arc`) without re-reading the owner. Names
    /// that are not unit-bearing fields of the owner's type fail with
    /// [`FieldError::UnknownField`]; there is no pass-through to plain
    /// attributes.
    pub fn get(&self, name: &str) -> FieldResult<Arc<[f64]>> {
        if let Some(hit) = self.cache.hit(name) {
            return Ok(hit);
        }

        let class = registry::ensure::<R>()?;
        let field = class.field(name).ok_or_else(|| FieldError::UnknownField {
            class: class.type_name(),
            name: name.to_string(),
        })?;
        let quantity = self
            .owner
            .quantity(name)
            .ok_or_else(|| FieldError::UnknownField {
                class: class.type_name(),
                name: name.to_string(),
            })?;
        let converted = quantity
            .to_values(field.canonical_unit())
            .map_err(|source| FieldError::Conversion {
                attribute: field.name(),
                source,
            })?;
        Ok(self.cache.store(field.name(), converted.into()))
    }

    /// The names this view exposes, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        registry::lookup::<R>()
            .map(|class| class.iter().map(|f| f.name()).collect())
            .unwrap_or_default()
    }
}

impl<R: UnitRecord + 'static> fmt::Debug for ArrayView<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayView<{}>", type_name::<R>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::ClassDecl;
    use uf_core::{Quantity, gram, kilogram};

    struct Sample {
        m: Quantity,
        cache: ArrayCache,
    }

    impl UnitRecord for Sample {
        fn declare(decl: &mut ClassDecl) {
            decl.field("m", kilogram());
        }
        fn quantity(&self, name: &str) -> Option<&Quantity> {
            match name {
                "m" => Some(&self.m),
                _ => None,
            }
        }
    }

    fn sample() -> Sample {
        Sample {
            m: Quantity::new(vec![1000.0, 2000.0], gram()),
            cache: ArrayCache::new(),
        }
    }

    #[test]
    fn get_converts_to_canonical() {
        let s = sample();
        let view = ArrayView::new(&s, &s.cache);
        let m = view.get("m").unwrap();
        assert_eq!(&m[..], &[1.0, 2.0]);
    }

    #[test]
    fn second_get_returns_cached_arc() {
        let s = sample();
        let view = ArrayView::new(&s, &s.cache);
        let first = view.get("m").unwrap();
        let second = view.get("m").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(s.cache.len(), 1);
    }

    #[test]
    fn unknown_name_rejected() {
        let s = sample();
        let view = ArrayView::new(&s, &s.cache);
        let err = view.get("notes").unwrap_err();
        assert!(matches!(err, FieldError::UnknownField { .. }));
    }

    #[test]
    fn construction_is_lazy() {
        let s = sample();
        let _view = ArrayView::new(&s, &s.cache);
        assert!(s.cache.is_empty());
    }

    #[test]
    fn names_follow_declaration() {
        let s = sample();
        let view = ArrayView::new(&s, &s.cache);
        let _ = view.get("m").unwrap();
        assert_eq!(view.names(), ["m"]);
    }

    #[test]
    fn cloned_cache_starts_empty() {
        let s = sample();
        let view = ArrayView::new(&s, &s.cache);
        let _ = view.get("m").unwrap();
        assert!(s.cache.clone().is_empty());
    }
}
