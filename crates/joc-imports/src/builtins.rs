//! Classification of runtime-provided types.

use joc_frontend::{TypeId, TypeKind, TypeStore};
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// How the Objective-C runtime relates to a referenced type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeKind {
    /// A translated type with a generated header.
    Ordinary,
    /// Provided by the runtime umbrella header; nothing to import.
    BuiltinRuntime,
    /// A runtime array wrapper. Provided by the runtime but declared in
    /// its own header, so it is always imported.
    BuiltinArray,
}

/// Distinguishes runtime-provided types from translated ones.
///
/// Pure and total over every descriptor the front-end can produce.
pub trait BuiltinClassifier {
    fn runtime_kind(&self, store: &TypeStore, ty: TypeId) -> RuntimeKind;

    /// Whether a *mapped* name collides with a type the runtime umbrella
    /// header already declares.
    fn is_reserved_name(&self, name: &str) -> bool;
}

/// Types declared by the runtime umbrella header.
static RUNTIME_TYPES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    FxHashSet::from_iter([
        "NSObject",
        "NSString",
        "NSNumber",
        "NSCopying",
        "NSException",
        "NSZone",
        "JrtClass",
        "id",
    ])
});

/// Default classifier for the bundled `jrt` runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct JrtBuiltins;

impl BuiltinClassifier for JrtBuiltins {
    fn runtime_kind(&self, store: &TypeStore, ty: TypeId) -> RuntimeKind {
        let Some(data) = store.get(ty) else {
            return RuntimeKind::Ordinary;
        };
        match &data.kind {
            TypeKind::Array { .. } => RuntimeKind::BuiltinArray,
            _ if RUNTIME_TYPES.contains(data.origin.as_str()) => RuntimeKind::BuiltinRuntime,
            _ => RuntimeKind::Ordinary,
        }
    }

    fn is_reserved_name(&self, name: &str) -> bool {
        RUNTIME_TYPES.contains(name)
    }
}
