//! Append-only arena of resolved type descriptors.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::descriptor::{PrimitiveKind, TypeData, TypeFlags, TypeId, TypeKind};

/// Arena of [`TypeData`], indexed by [`TypeId`].
///
/// The front-end interns descriptors here during resolution; the
/// translation pipeline only reads. Primitives and class descriptors are
/// deduplicated by origin name, so repeated references to the same
/// declaration resolve to one identity. Type variables, parameterized
/// types, and arrays are use-site descriptors and are allocated fresh.
#[derive(Debug, Default)]
pub struct TypeStore {
    types: Vec<TypeData>,
    by_origin: FxHashMap<String, TypeId>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // =========================================================================
    // Interning
    // =========================================================================

    pub fn primitive(&mut self, kind: PrimitiveKind) -> TypeId {
        if let Some(&id) = self.by_origin.get(kind.keyword()) {
            return id;
        }
        let id = self.alloc(TypeData {
            origin: kind.keyword().to_string(),
            kind: TypeKind::Primitive(kind),
            flags: TypeFlags::empty(),
        });
        self.by_origin.insert(kind.keyword().to_string(), id);
        id
    }

    /// Interns a top-level class, interface, or annotation declaration.
    pub fn class(&mut self, origin: &str, flags: TypeFlags) -> TypeId {
        if let Some(&id) = self.by_origin.get(origin) {
            return id;
        }
        let id = self.alloc(TypeData {
            origin: origin.to_string(),
            kind: TypeKind::Class { enclosing: None },
            flags,
        });
        self.by_origin.insert(origin.to_string(), id);
        id
    }

    /// Interns a declaration nested inside `enclosing`.
    pub fn nested_class(&mut self, origin: &str, enclosing: TypeId, flags: TypeFlags) -> TypeId {
        if let Some(&id) = self.by_origin.get(origin) {
            return id;
        }
        let id = self.alloc(TypeData {
            origin: origin.to_string(),
            kind: TypeKind::Class {
                enclosing: Some(enclosing),
            },
            flags,
        });
        self.by_origin.insert(origin.to_string(), id);
        id
    }

    /// Allocates a type variable with its declared bounds, in order.
    pub fn type_variable(&mut self, name: &str, bounds: impl IntoIterator<Item = TypeId>) -> TypeId {
        let bounds: SmallVec<[TypeId; 2]> = bounds.into_iter().collect();
        self.alloc(TypeData {
            origin: name.to_string(),
            kind: TypeKind::TypeVariable { bounds },
            flags: TypeFlags::empty(),
        })
    }

    /// Allocates a parameterized use of `erasure`.
    pub fn parameterized(&mut self, erasure: TypeId, args: Vec<TypeId>) -> TypeId {
        let origin = self
            .get(erasure)
            .map(|data| data.origin.clone())
            .unwrap_or_default();
        self.alloc(TypeData {
            origin,
            kind: TypeKind::Parameterized { erasure, args },
            flags: self.get(erasure).map(|data| data.flags).unwrap_or_default(),
        })
    }

    /// Allocates an array specialization over `component`.
    pub fn array(&mut self, component: TypeId) -> TypeId {
        let origin = self
            .get(component)
            .map(|data| format!("{}[]", data.origin))
            .unwrap_or_default();
        self.alloc(TypeData {
            origin,
            kind: TypeKind::Array { component },
            flags: TypeFlags::empty(),
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn origin_name(&self, id: TypeId) -> Option<&str> {
        self.get(id).map(|data| data.origin.as_str())
    }

    pub fn is_primitive(&self, id: TypeId) -> bool {
        matches!(
            self.get(id).map(|data| &data.kind),
            Some(TypeKind::Primitive(_))
        )
    }

    pub fn is_type_variable(&self, id: TypeId) -> bool {
        matches!(
            self.get(id).map(|data| &data.kind),
            Some(TypeKind::TypeVariable { .. })
        )
    }

    pub fn is_interface(&self, id: TypeId) -> bool {
        self.get(id).is_some_and(TypeData::is_interface)
    }

    pub fn is_annotation(&self, id: TypeId) -> bool {
        self.get(id).is_some_and(TypeData::is_annotation)
    }

    /// Whether the descriptor is (or erases to) a top-level declaration.
    pub fn is_top_level(&self, id: TypeId) -> bool {
        self.enclosing(id).is_none()
    }

    /// The declaration immediately enclosing a nested type.
    pub fn enclosing(&self, id: TypeId) -> Option<TypeId> {
        match self.get(id).map(|data| &data.kind) {
            Some(TypeKind::Class { enclosing }) => *enclosing,
            _ => None,
        }
    }

    /// Ordered bounds of a type variable; empty for anything else.
    pub fn bounds(&self, id: TypeId) -> &[TypeId] {
        match self.get(id).map(|data| &data.kind) {
            Some(TypeKind::TypeVariable { bounds }) => bounds,
            _ => &[],
        }
    }

    /// The descriptor with generic parameterization removed.
    pub fn erasure(&self, id: TypeId) -> TypeId {
        match self.get(id).map(|data| &data.kind) {
            Some(TypeKind::Parameterized { erasure, .. }) => *erasure,
            _ => id,
        }
    }

    /// Walks the enclosing-type chain up to the top-level declaration.
    ///
    /// Identity for descriptors that are already top-level (or have no
    /// enclosing chain at all).
    pub fn top_level(&self, id: TypeId) -> TypeId {
        let mut current = id;
        while let Some(enclosing) = self.enclosing(current) {
            current = enclosing;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_deduplicated_by_origin() {
        let mut store = TypeStore::new();
        let a = store.class("demo.Foo", TypeFlags::empty());
        let b = store.class("demo.Foo", TypeFlags::INTERFACE);
        assert_eq!(a, b);
        // First interning wins; the later flags are ignored.
        assert!(!store.is_interface(a));
    }

    #[test]
    fn erasure_unwraps_parameterized_types() {
        let mut store = TypeStore::new();
        let list = store.class("java.util.List", TypeFlags::INTERFACE);
        let string = store.class("java.lang.String", TypeFlags::empty());
        let list_of_string = store.parameterized(list, vec![string]);
        assert_eq!(store.erasure(list_of_string), list);
        assert_eq!(store.erasure(list), list);
    }

    #[test]
    fn top_level_walks_the_enclosing_chain() {
        let mut store = TypeStore::new();
        let outer = store.class("demo.Outer", TypeFlags::empty());
        let inner = store.nested_class("demo.Outer.Inner", outer, TypeFlags::empty());
        let deepest = store.nested_class("demo.Outer.Inner.Deepest", inner, TypeFlags::empty());
        assert_eq!(store.top_level(deepest), outer);
        assert_eq!(store.top_level(outer), outer);
        assert!(store.is_top_level(outer));
        assert!(!store.is_top_level(inner));
    }

    #[test]
    fn bounds_are_empty_for_non_variables() {
        let mut store = TypeStore::new();
        let comparable = store.class("java.lang.Comparable", TypeFlags::INTERFACE);
        let t = store.type_variable("T", [comparable]);
        assert_eq!(store.bounds(t), &[comparable]);
        assert!(store.bounds(comparable).is_empty());
    }

    #[test]
    fn array_origins_carry_the_component_name() {
        let mut store = TypeStore::new();
        let int = store.primitive(PrimitiveKind::Int);
        let ints = store.array(int);
        assert_eq!(store.origin_name(ints), Some("int[]"));
    }
}
