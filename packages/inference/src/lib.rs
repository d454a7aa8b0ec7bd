//! # Scopetype Inference
//!
//! Structural type inference over live JSON scope data, and synthesis of the
//! TypeScript declaration documents an in-browser code editor needs to offer
//! completions and diagnostics against that scope.
//!
//! ## Pipeline
//!
//! - **Classification**: each JSON value becomes a closed [`ScopeValue`]
//! - **Inference**: the scope becomes an ordered list of named record shapes,
//!   nested objects hoisted by path (`RootObject_page`)
//! - **Synthesis**: the shapes are emitted as interfaces, followed by one
//!   `declare const` per scope key indexing into the root interface
//!
//! ## Example
//!
//! ```rust
//! use scopetype_inference::{parse_scope, synthesize_scope};
//!
//! let scope = parse_scope(r#"{ "page": { "id": "p1", "title": "Home" } }"#).unwrap();
//! let doc = synthesize_scope(&scope);
//!
//! assert!(doc.as_str().contains("interface RootObject_page {"));
//! assert!(doc.as_str().contains(r#"declare const page: RootObject["page"];"#));
//! ```

pub mod codegen;
pub mod declarations;
pub mod error;
pub mod inference;
pub mod options;
pub mod types;
pub mod value;

// Re-export main types for convenience
pub use codegen::{typescript::TypeScriptGenerator, CodeGenerator};
pub use declarations::{
    synthesize, synthesize_scope, synthesize_scope_with, DeclarationDocument,
    DeclarationSynthesizer,
};
pub use error::{InferenceError, InferenceResult};
pub use inference::{infer, StructuralTypeInferer};
pub use options::InferenceOptions;
pub use types::{Field, InferredTypes, Type, TypeDefinition};
pub use value::{parse_scope, Scope, ScopeValue};
