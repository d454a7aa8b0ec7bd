pub mod typescript;

use crate::types::{Type, TypeDefinition};

/// Plugin trait for rendering inferred definitions as source text
pub trait CodeGenerator {
    /// Generate code for a single type reference
    fn generate_type(&self, type_: &Type) -> String;

    /// Generate code for a single property (name + type)
    fn generate_property(&self, name: &str, type_: &Type) -> String;

    /// Generate a complete interface definition
    fn generate_interface(&self, definition: &TypeDefinition) -> String;
}
