//! Front-end contract for the joc translator.
//!
//! The semantic front-end (parser plus resolver, outside this workspace)
//! hands the translation pipeline fully resolved data: a closed syntax
//! tree for each type declaration and an arena of type descriptors behind
//! [`TypeId`] handles. This crate defines that contract.
//!
//! Nothing here parses or type checks. Positions the front-end could not
//! resolve arrive with no descriptor attached; the front-end has already
//! reported those as semantic errors, and downstream passes skip them
//! without re-raising.

pub mod ast;
pub mod descriptor;
pub mod store;

pub use ast::{
    Block, CatchClause, Expression, FieldDecl, Literal, Member, MethodDecl, Param, Statement,
    TypeDeclaration, TypeNode,
};
pub use descriptor::{PrimitiveKind, TypeData, TypeFlags, TypeId, TypeKind};
pub use store::TypeStore;
