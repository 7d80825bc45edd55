//! Objective-C name mapping and header path derivation.

use joc_common::{HeaderLayout, Options};
use joc_frontend::{PrimitiveKind, TypeId, TypeKind, TypeStore};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Maps resolved descriptors to Objective-C type names.
///
/// Implementations must be deterministic and side-effect free. Tests
/// substitute fakes so the collector can be exercised without the real
/// naming scheme.
pub trait NameMapper {
    /// Returns the mapped name, or `None` when the descriptor has no
    /// generable Objective-C name.
    fn qualified_name(&self, store: &TypeStore, ty: TypeId) -> Option<String>;
}

/// Core `java.lang` types that translate onto runtime classes instead of
/// generated ones.
static PLATFORM_TYPES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    FxHashMap::from_iter([
        ("java.lang.Object", "NSObject"),
        ("java.lang.String", "NSString"),
        ("java.lang.Number", "NSNumber"),
        ("java.lang.Cloneable", "NSCopying"),
        ("java.lang.Throwable", "NSException"),
        ("java.lang.Class", "JrtClass"),
    ])
});

/// Default production mapper.
///
/// Platform types map through [`PLATFORM_TYPES`], arrays map to the
/// runtime's array wrapper interfaces, and everything else camel-cases
/// its dot-qualified origin name (`java.util.List` -> `JavaUtilList`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcNames;

impl NameMapper for ObjcNames {
    fn qualified_name(&self, store: &TypeStore, ty: TypeId) -> Option<String> {
        let data = store.get(ty)?;
        match &data.kind {
            TypeKind::Primitive(_) | TypeKind::TypeVariable { .. } => None,
            TypeKind::Array { component } => Some(array_name(store, *component).to_string()),
            TypeKind::Parameterized { erasure, .. } => self.qualified_name(store, *erasure),
            TypeKind::Class { .. } => {
                if let Some(mapped) = PLATFORM_TYPES.get(data.origin.as_str()) {
                    return Some((*mapped).to_string());
                }
                Some(camel_case_qualified(&data.origin))
            }
        }
    }
}

/// Runtime array wrapper for a component type.
fn array_name(store: &TypeStore, component: TypeId) -> &'static str {
    match store.get(component).map(|data| &data.kind) {
        Some(TypeKind::Primitive(kind)) => match kind {
            PrimitiveKind::Boolean => "JrtBooleanArray",
            PrimitiveKind::Byte => "JrtByteArray",
            PrimitiveKind::Char => "JrtCharArray",
            PrimitiveKind::Short => "JrtShortArray",
            PrimitiveKind::Int => "JrtIntArray",
            PrimitiveKind::Long => "JrtLongArray",
            PrimitiveKind::Float => "JrtFloatArray",
            PrimitiveKind::Double => "JrtDoubleArray",
            // void components cannot be resolved by the front-end; fall
            // back to the object wrapper.
            PrimitiveKind::Void => "JrtObjectArray",
        },
        _ => "JrtObjectArray",
    }
}

/// Capitalizes every dot segment and joins them:
/// `java.util.List` -> `JavaUtilList`.
fn camel_case_qualified(origin: &str) -> String {
    let mut out = String::with_capacity(origin.len());
    for segment in origin.split('.') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Relative header path (no extension) for a dot-qualified origin name.
///
/// Headers for the platform runtime (`java*`) and the bundled reference
/// testing framework (`junit*`) ship with package directories, so those
/// roots keep directory form even under [`HeaderLayout::Flat`].
pub fn header_path(origin_name: &str, options: &Options) -> String {
    let package_form = matches!(options.header_layout, HeaderLayout::PackageDirectories)
        || origin_name.starts_with("java")
        || origin_name.starts_with("junit");
    if package_form {
        origin_name.replace('.', "/")
    } else {
        origin_name
            .rsplit('.')
            .next()
            .unwrap_or(origin_name)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joc_frontend::TypeFlags;

    #[test]
    fn camel_cases_qualified_names() {
        assert_eq!(camel_case_qualified("java.util.List"), "JavaUtilList");
        assert_eq!(camel_case_qualified("Foo"), "Foo");
        assert_eq!(camel_case_qualified("com.example.Foo"), "ComExampleFoo");
    }

    #[test]
    fn platform_types_map_to_runtime_names() {
        let mut store = TypeStore::new();
        let object = store.class("java.lang.Object", TypeFlags::empty());
        let string = store.class("java.lang.String", TypeFlags::empty());
        assert_eq!(
            ObjcNames.qualified_name(&store, object).as_deref(),
            Some("NSObject")
        );
        assert_eq!(
            ObjcNames.qualified_name(&store, string).as_deref(),
            Some("NSString")
        );
    }

    #[test]
    fn parameterized_types_map_through_their_erasure() {
        let mut store = TypeStore::new();
        let list = store.class("java.util.List", TypeFlags::INTERFACE);
        let foo = store.class("demo.Foo", TypeFlags::empty());
        let list_of_foo = store.parameterized(list, vec![foo]);
        assert_eq!(
            ObjcNames.qualified_name(&store, list_of_foo).as_deref(),
            Some("JavaUtilList")
        );
    }

    #[test]
    fn arrays_map_to_runtime_wrappers() {
        let mut store = TypeStore::new();
        let int = store.primitive(PrimitiveKind::Int);
        let ints = store.array(int);
        let foo = store.class("demo.Foo", TypeFlags::empty());
        let foos = store.array(foo);
        assert_eq!(
            ObjcNames.qualified_name(&store, ints).as_deref(),
            Some("JrtIntArray")
        );
        assert_eq!(
            ObjcNames.qualified_name(&store, foos).as_deref(),
            Some("JrtObjectArray")
        );
    }

    #[test]
    fn type_variables_have_no_name_of_their_own() {
        let mut store = TypeStore::new();
        let t = store.type_variable("T", []);
        assert_eq!(ObjcNames.qualified_name(&store, t), None);
    }

    #[test]
    fn header_path_follows_the_configured_layout() {
        let package = Options {
            header_layout: HeaderLayout::PackageDirectories,
        };
        let flat = Options {
            header_layout: HeaderLayout::Flat,
        };
        assert_eq!(header_path("com.example.Foo", &package), "com/example/Foo");
        assert_eq!(header_path("com.example.Foo", &flat), "Foo");
        assert_eq!(header_path("Foo", &flat), "Foo");
    }

    #[test]
    fn reserved_roots_always_use_package_directories() {
        let flat = Options {
            header_layout: HeaderLayout::Flat,
        };
        assert_eq!(header_path("java.util.List", &flat), "java/util/List");
        assert_eq!(
            header_path("junit.framework.TestCase", &flat),
            "junit/framework/TestCase"
        );
    }
}
