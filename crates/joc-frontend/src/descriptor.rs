//! Type descriptors: the post-resolution identity of every type the
//! front-end can produce.

use bitflags::bitflags;
use smallvec::SmallVec;

/// Arena handle for a resolved type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

bitflags! {
    /// Descriptor properties that do not affect a descriptor's shape.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TypeFlags: u8 {
        /// Declared as an interface; translates to an Objective-C
        /// protocol rather than a class.
        const INTERFACE = 1 << 0;
        /// Declared as an annotation type. Annotations leave no runtime
        /// footprint in generated code.
        const ANNOTATION = 1 << 1;
    }
}

/// Primitive kinds of the input language.
///
/// `void` is carried as a primitive so method return positions stay
/// uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    /// The source-language keyword for this primitive.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Void => "void",
        }
    }
}

/// Shape of one resolved descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Primitive(PrimitiveKind),
    /// A class, interface, or annotation declaration. `enclosing` is set
    /// for nested declarations.
    Class { enclosing: Option<TypeId> },
    /// A declaration-site or method-level type variable with its ordered
    /// bounds.
    TypeVariable { bounds: SmallVec<[TypeId; 2]> },
    /// A generic type applied to arguments; `erasure` is the raw class.
    Parameterized { erasure: TypeId, args: Vec<TypeId> },
    /// An array specialization over a component type.
    Array { component: TypeId },
}

/// One resolved type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeData {
    /// Dot-qualified name in the input language (`java.util.List`), the
    /// primitive keyword, or the type variable's declared name.
    pub origin: String,
    pub kind: TypeKind,
    pub flags: TypeFlags,
}

impl TypeData {
    pub fn is_interface(&self) -> bool {
        self.flags.contains(TypeFlags::INTERFACE)
    }

    pub fn is_annotation(&self) -> bool {
        self.flags.contains(TypeFlags::ANNOTATION)
    }
}
