//! Process-wide registry of unit-field declarations, keyed by record type.
//!
//! Entries are written once, at the first use of a record type, and read
//! for the rest of the process lifetime. There is no removal: class
//! metadata lives as long as the class.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::class::{AccessorSpec, ClassDecl, UnitRecord};
use crate::error::{FieldError, FieldResult};
use crate::field::{RawValue, UnitField};
use uf_core::{Quantity, Unit};

/// Frozen unit-field declaration of one record type.
#[derive(Debug)]
pub struct ClassFields {
    type_name: &'static str,
    fields: Vec<UnitField>,
    accessor: AccessorSpec,
}

impl ClassFields {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&UnitField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Declared fields, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn accessor(&self) -> AccessorSpec {
        self.accessor
    }

    pub fn accessor_name(&self) -> Option<&'static str> {
        self.accessor.name()
    }

    pub fn canonical_unit(&self, name: &str) -> Option<&Unit> {
        self.field(name).map(UnitField::canonical_unit)
    }

    /// Coerce a raw input for the named field.
    ///
    /// This is the hook a record constructor calls once per field; unknown
    /// names fail rather than passing through.
    pub fn coerce(&self, name: &str, raw: impl Into<RawValue>) -> FieldResult<Quantity> {
        let field = self.field(name).ok_or_else(|| FieldError::UnknownField {
            class: self.type_name,
            name: name.to_string(),
        })?;
        field.coerce(raw)
    }
}

static REGISTRY: OnceLock<RwLock<HashMap<TypeId, Arc<ClassFields>>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<TypeId, Arc<ClassFields>>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Fields of an already-declared record type, if any.
pub fn lookup<R: 'static>() -> Option<Arc<ClassFields>> {
    registry()
        .read()
        .expect("field registry poisoned")
        .get(&TypeId::of::<R>())
        .cloned()
}

/// Like [`lookup`], but an error for types that were never declared.
pub fn require<R: 'static>() -> FieldResult<Arc<ClassFields>> {
    lookup::<R>().ok_or(FieldError::UndeclaredClass {
        class: type_name::<R>(),
    })
}

/// Declare-once-and-freeze.
///
/// The first call for `R` runs `R::declare`, validates the declaration
/// (duplicate names, accessor clashes), and stores it; every later call
/// returns the stored entry untouched. Entries are append-only.
pub fn ensure<R: UnitRecord + 'static>() -> FieldResult<Arc<ClassFields>> {
    if let Some(existing) = lookup::<R>() {
        return Ok(existing);
    }

    let mut decl = ClassDecl::new();
    R::declare(&mut decl);
    let entry = Arc::new(freeze(type_name::<R>(), decl)?);

    let mut map = registry().write().expect("field registry poisoned");
    // two threads declaring the same type race benignly; the first insert wins
    Ok(map.entry(TypeId::of::<R>()).or_insert(entry).clone())
}

/// The registry's enumeration operation: `(name, canonical unit)` pairs in
/// declaration order. Empty for undeclared types.
pub fn fields_of<R: 'static>() -> Vec<(&'static str, Unit)> {
    lookup::<R>()
        .map(|class| {
            class
                .iter()
                .map(|f| (f.name(), f.canonical_unit().clone()))
                .collect()
        })
        .unwrap_or_default()
}

fn freeze(type_name: &'static str, decl: ClassDecl) -> FieldResult<ClassFields> {
    let (fields, accessor) = decl.into_parts();
    for (i, field) in fields.iter().enumerate() {
        if fields[..i].iter().any(|prev| prev.name() == field.name()) {
            return Err(FieldError::DuplicateField {
                class: type_name,
                name: field.name(),
            });
        }
        if accessor.name() == Some(field.name()) {
            return Err(FieldError::AccessorClash {
                class: type_name,
                name: field.name(),
            });
        }
    }
    Ok(ClassFields {
        type_name,
        fields,
        accessor,
    })
}
