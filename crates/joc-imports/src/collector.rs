//! The reference collector.
//!
//! One traversal of a resolved type declaration decides, for every type
//! mentioned anywhere in it, whether the generated header needs a full
//! import or can rely on a forward declaration. extends/implements
//! clauses feed the supertype set (a base type must be fully visible to
//! the compiler); every other type-bearing position feeds the generic
//! import set. A reconciliation pass then removes from the generic set
//! anything the supertype set already covers, so each referenced type
//! appears exactly once.
//!
//! The collector never reports diagnostics: unresolved positions were
//! already reported by the front-end and are skipped silently here.

use joc_frontend::{
    Block, Expression, Member, MethodDecl, Statement, TypeDeclaration, TypeId, TypeNode, TypeStore,
};
use tracing::{debug, trace};

use crate::builtins::{BuiltinClassifier, RuntimeKind};
use crate::names::NameMapper;
use crate::reference::{Reference, ReferenceSet};

/// Which of the two result sets a syntax position feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Imports,
    Supertypes,
}

/// Final, reconciled output of one collection run.
#[derive(Debug, Clone)]
pub struct CollectionResult {
    /// Types referenced outside inheritance clauses, in first-mention
    /// order. The emitter may satisfy these with forward declarations.
    pub imports: ReferenceSet,
    /// Supertypes in declared order. These must be fully imported.
    pub supertypes: ReferenceSet,
}

/// Single-use collector over one declaration's resolved subtree.
///
/// `collect` consumes the collector, so an instance cannot be reused
/// across declarations and no partial state is ever observable. A driver
/// processing declarations in parallel creates one collector per
/// declaration; instances share nothing mutable.
pub struct ImportCollector<'a> {
    store: &'a TypeStore,
    names: &'a dyn NameMapper,
    builtins: &'a dyn BuiltinClassifier,
    imports: ReferenceSet,
    supertypes: ReferenceSet,
}

impl<'a> ImportCollector<'a> {
    pub fn new(
        store: &'a TypeStore,
        names: &'a dyn NameMapper,
        builtins: &'a dyn BuiltinClassifier,
    ) -> Self {
        Self {
            store,
            names,
            builtins,
            imports: ReferenceSet::new(),
            supertypes: ReferenceSet::new(),
        }
    }

    /// Pre-seeds a generic import before traversal.
    ///
    /// Used by emitters that force references the syntax tree does not
    /// mention, such as the copying protocol. Seeded references take part
    /// in deduplication and reconciliation like traversed ones.
    pub fn seed_import(&mut self, reference: Reference) {
        self.imports.insert(reference);
    }

    /// Pre-seeds a supertype import before traversal.
    pub fn seed_supertype(&mut self, reference: Reference) {
        self.supertypes.insert(reference);
    }

    /// Scans the declaration and returns the reconciled reference lists.
    pub fn collect(mut self, decl: &TypeDeclaration) -> CollectionResult {
        self.scan_declaration(decl);
        self.reconcile();
        debug!(
            imports = self.imports.len(),
            supertypes = self.supertypes.len(),
            "collected references"
        );
        CollectionResult {
            imports: self.imports,
            supertypes: self.supertypes,
        }
    }

    /// Removes every supertype from the generic import set. The relation
    /// is asymmetric: the supertype set is never pruned.
    fn reconcile(&mut self) {
        for reference in self.supertypes.iter() {
            self.imports.remove(&reference.qualified_name);
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    fn scan_declaration(&mut self, decl: &TypeDeclaration) {
        for type_param in &decl.type_params {
            self.scan_type_node(type_param, Target::Imports);
        }
        if let Some(superclass) = &decl.superclass {
            self.scan_type_node(superclass, Target::Supertypes);
        }
        for interface in &decl.interfaces {
            self.scan_type_node(interface, Target::Supertypes);
        }
        for member in &decl.members {
            self.scan_member(member);
        }
    }

    fn scan_member(&mut self, member: &Member) {
        match member {
            Member::Field(field) => {
                self.scan_type_node(&field.ty, Target::Imports);
                if let Some(initializer) = &field.initializer {
                    self.scan_expression(initializer);
                }
            }
            Member::Method(method) => self.scan_method(method),
            Member::Initializer(body) => self.scan_block(body),
            // Nested declarations share this header, so their supertypes
            // are forced imports of this file as well.
            Member::Nested(nested) => self.scan_declaration(nested),
        }
    }

    fn scan_method(&mut self, method: &MethodDecl) {
        for type_param in &method.type_params {
            self.scan_type_node(type_param, Target::Imports);
        }
        if let Some(return_type) = &method.return_type {
            self.scan_type_node(return_type, Target::Imports);
        }
        for param in &method.params {
            self.scan_type_node(&param.ty, Target::Imports);
        }
        for thrown in &method.throws {
            self.scan_type_node(thrown, Target::Imports);
        }
        if let Some(body) = &method.body {
            self.scan_block(body);
        }
    }

    fn scan_block(&mut self, block: &Block) {
        for statement in &block.statements {
            self.scan_statement(statement);
        }
    }

    fn scan_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::LocalVar {
                ty, initializer, ..
            } => {
                self.scan_type_node(ty, Target::Imports);
                if let Some(initializer) = initializer {
                    self.scan_expression(initializer);
                }
            }
            Statement::Expr(expression) | Statement::Throw(expression) => {
                self.scan_expression(expression);
            }
            Statement::Return(value) => {
                if let Some(value) = value {
                    self.scan_expression(value);
                }
            }
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.scan_expression(condition);
                self.scan_block(then_branch);
                if let Some(else_branch) = else_branch {
                    self.scan_block(else_branch);
                }
            }
            Statement::While { condition, body } => {
                self.scan_expression(condition);
                self.scan_block(body);
            }
            Statement::Try {
                body,
                catches,
                finally,
            } => {
                self.scan_block(body);
                for catch in catches {
                    self.scan_type_node(&catch.ty, Target::Imports);
                    self.scan_block(&catch.body);
                }
                if let Some(finally) = finally {
                    self.scan_block(finally);
                }
            }
            Statement::Block(block) => self.scan_block(block),
        }
    }

    fn scan_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Literal(_) | Expression::Name(_) => {}
            Expression::FieldAccess { object, .. } => self.scan_expression(object),
            Expression::ArrayAccess { array, index } => {
                self.scan_expression(array);
                self.scan_expression(index);
            }
            Expression::Assign { target, value } => {
                self.scan_expression(target);
                self.scan_expression(value);
            }
            Expression::Binary { lhs, rhs } => {
                self.scan_expression(lhs);
                self.scan_expression(rhs);
            }
            Expression::Conditional {
                condition,
                then_value,
                else_value,
            } => {
                self.scan_expression(condition);
                self.scan_expression(then_value);
                self.scan_expression(else_value);
            }
            Expression::Cast {
                target_type,
                operand,
            } => {
                self.scan_type_node(target_type, Target::Imports);
                self.scan_expression(operand);
            }
            Expression::InstanceOf {
                operand,
                target_type,
            } => {
                self.scan_expression(operand);
                self.scan_type_node(target_type, Target::Imports);
            }
            Expression::New { ty, args } => {
                self.scan_type_node(ty, Target::Imports);
                for arg in args {
                    self.scan_expression(arg);
                }
            }
            Expression::NewArray { ty, dimensions } => {
                self.scan_type_node(ty, Target::Imports);
                for dimension in dimensions {
                    self.scan_expression(dimension);
                }
            }
            Expression::Invoke {
                receiver,
                type_args,
                args,
                ..
            } => {
                if let Some(receiver) = receiver {
                    self.scan_expression(receiver);
                }
                for type_arg in type_args {
                    self.scan_type_node(type_arg, Target::Imports);
                }
                for arg in args {
                    self.scan_expression(arg);
                }
            }
        }
    }

    /// Visits one type-naming syntax position.
    ///
    /// Child type positions (type arguments, array components) are
    /// ordinary references even when the position itself sits under an
    /// inheritance clause: `implements Comparable<Foo>` forces
    /// `Comparable` but only imports `Foo`. An unresolved position still
    /// has its children visited, matching what the front-end resolved.
    fn scan_type_node(&mut self, node: &TypeNode, target: Target) {
        if let Some(descriptor) = node.descriptor {
            self.add_type(descriptor, target);
        }
        for arg in &node.args {
            self.scan_type_node(arg, Target::Imports);
        }
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Applies the classification rules to one resolved descriptor and
    /// registers the resulting reference, if any.
    fn add_type(&mut self, ty: TypeId, target: Target) {
        let store = self.store;
        let Some(data) = store.get(ty) else {
            return;
        };
        if store.is_primitive(ty) {
            return;
        }
        match self.builtins.runtime_kind(store, ty) {
            // Array wrappers are runtime types with headers of their own,
            // so they are imported unconditionally.
            RuntimeKind::BuiltinArray => {
                if let Some(qualified) = self.names.qualified_name(store, ty) {
                    self.register(Reference::new(qualified.clone(), qualified, false), target);
                }
                return;
            }
            RuntimeKind::BuiltinRuntime => {
                trace!(origin = %data.origin, "skipping runtime builtin");
                return;
            }
            RuntimeKind::Ordinary => {}
        }
        if store.is_annotation(ty) {
            return;
        }
        if store.is_type_variable(ty) {
            // A type variable has no header of its own; its bounds do.
            for &bound in store.bounds(ty) {
                self.add_type(bound, target);
            }
            return;
        }
        let erased = store.erasure(ty);
        // One generated file per top-level unit: nested references
        // collapse to the declaration that owns the header.
        let top_level = store.top_level(erased);
        let Some(qualified) = self.names.qualified_name(store, top_level) else {
            return;
        };
        if self.builtins.is_reserved_name(&qualified) {
            trace!(name = %qualified, "skipping reserved runtime name");
            return;
        }
        let Some(origin) = store.origin_name(top_level) else {
            return;
        };
        self.register(
            Reference::new(qualified, origin, store.is_interface(top_level)),
            target,
        );
    }

    fn register(&mut self, reference: Reference, target: Target) {
        trace!(name = %reference.qualified_name, ?target, "registering reference");
        match target {
            Target::Imports => self.imports.insert(reference),
            Target::Supertypes => self.supertypes.insert(reference),
        };
    }
}
