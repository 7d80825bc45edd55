//! Import collection for the joc translator.
//!
//! Objective-C headers must either `#import` a referenced type's header
//! (full declaration) or forward-declare it (`@class` / `@protocol`).
//! Supertypes can never be forward-declared, and circular `#import`
//! chains between generated headers do not compile. This crate decides,
//! one resolved type declaration at a time, which referenced types land
//! in the generic import list and which are forced supertype imports,
//! deduplicated and in deterministic order.
//!
//! The decision rules live in [`collector::ImportCollector`]. The
//! [`names::NameMapper`] and [`builtins::BuiltinClassifier`] adapters
//! isolate the Objective-C naming scheme and the runtime's built-in type
//! catalog, so tests can exercise the collector with fakes.

pub mod builtins;
pub mod collector;
pub mod names;
pub mod reference;

pub use builtins::{BuiltinClassifier, JrtBuiltins, RuntimeKind};
pub use collector::{CollectionResult, ImportCollector};
pub use names::{NameMapper, ObjcNames, header_path};
pub use reference::{Reference, ReferenceSet};
