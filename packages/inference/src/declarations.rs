//! Declaration document synthesis.
//!
//! A document is the inferred interfaces followed by one global binding per
//! scope key. Each binding is typed as an indexed access into the root
//! interface (`RootObject["page"]`) instead of repeating the field's type, so
//! the root definition stays the single source of truth.

use crate::codegen::typescript::{is_identifier, is_reserved_word, quote, TypeScriptGenerator};
use crate::codegen::CodeGenerator;
use crate::inference::StructuralTypeInferer;
use crate::options::InferenceOptions;
use crate::types::InferredTypes;
use crate::value::Scope;
use std::fmt;
use tracing::{debug, warn};

/// Synthesized declaration text, ready to hand to a language service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DeclarationDocument {
    source: String,
    /// Scope keys in declaration order, one per `declare const` line
    bindings: Vec<String>,
}

impl DeclarationDocument {
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    /// Names of the global bindings this document declares, in order
    pub fn bindings(&self) -> &[String] {
        &self.bindings
    }
}

impl fmt::Display for DeclarationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for DeclarationDocument {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

/// Renders inferred types plus scope bindings into a declaration document
pub struct DeclarationSynthesizer {
    generator: TypeScriptGenerator,
}

impl DeclarationSynthesizer {
    pub fn new(options: &InferenceOptions) -> Self {
        Self {
            generator: TypeScriptGenerator::with_options(options),
        }
    }

    /// Emit every definition, then one binding per key in the given order
    pub fn synthesize<'a, I>(&self, scope_keys: I, types: &InferredTypes) -> DeclarationDocument
    where
        I: IntoIterator<Item = &'a str>,
    {
        let root = types.root();

        let interfaces: Vec<String> = types
            .definitions()
            .iter()
            .map(|def| self.generator.generate_interface(def))
            .collect();

        let mut bindings = Vec::new();
        let mut lines = Vec::new();
        for key in scope_keys {
            // Escaped keys keep the declaration on a single line
            let name = if is_identifier(key) {
                if is_reserved_word(key) {
                    warn!(key, "Scope key is a reserved word, its binding will not type-check");
                }
                key.to_string()
            } else {
                warn!(key, "Scope key is not a valid identifier, its binding will not type-check");
                quote(key)
            };
            if root.field(key).is_none() {
                warn!(key, root = %root.name, "Scope key has no field in the root definition");
            }
            lines.push(format!("declare const {}: {}[{}];", name, root.name, quote(key)));
            bindings.push(key.to_string());
        }

        let mut source = interfaces.join("\n\n");
        source.push('\n');
        if !lines.is_empty() {
            source.push('\n');
            source.push_str(&lines.join("\n"));
            source.push('\n');
        }

        debug!(
            definitions = types.len(),
            bindings = bindings.len(),
            bytes = source.len(),
            "Synthesized declaration document"
        );
        DeclarationDocument { source, bindings }
    }
}

impl Default for DeclarationSynthesizer {
    fn default() -> Self {
        Self::new(&InferenceOptions::default())
    }
}

/// Synthesize a document for explicit keys and pre-inferred types
pub fn synthesize<'a, I>(scope_keys: I, types: &InferredTypes) -> DeclarationDocument
where
    I: IntoIterator<Item = &'a str>,
{
    DeclarationSynthesizer::default().synthesize(scope_keys, types)
}

/// Infer and synthesize in one step with default options
pub fn synthesize_scope(scope: &Scope) -> DeclarationDocument {
    synthesize_scope_with(scope, &InferenceOptions::default())
}

/// Infer and synthesize in one step
pub fn synthesize_scope_with(scope: &Scope, options: &InferenceOptions) -> DeclarationDocument {
    let types = StructuralTypeInferer::new(options.clone()).infer_scope(scope);
    DeclarationSynthesizer::new(options).synthesize(scope.keys().map(String::as_str), &types)
}
