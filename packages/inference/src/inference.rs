use crate::options::InferenceOptions;
use crate::types::{InferredTypes, Type, TypeDefinition};
use crate::value::{Scope, ScopeValue};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Derives structural type definitions from sample scope data.
///
/// Nested objects are hoisted into their own definitions named after their
/// path from the root (`RootObject_page_meta`). Structurally identical shapes
/// are not merged: each occurrence gets its own definition.
#[derive(Debug, Clone, Default)]
pub struct StructuralTypeInferer {
    options: InferenceOptions,
}

impl StructuralTypeInferer {
    /// Create a new inferer with the given options
    pub fn new(options: InferenceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InferenceOptions {
        &self.options
    }

    /// Infer definitions for any JSON value.
    ///
    /// A non-object value still yields a root record, with no fields.
    #[instrument(skip_all, fields(root = %self.options.root_name))]
    pub fn infer(&self, value: &Value) -> InferredTypes {
        match ScopeValue::classify(value) {
            ScopeValue::Object(map) => self.infer_scope(map),
            other => {
                debug!(kind = other.kind(), "Top-level value is not an object, inferring empty root");
                self.infer_scope(&Map::new())
            }
        }
    }

    /// Infer definitions for a scope map
    pub fn infer_scope(&self, scope: &Scope) -> InferredTypes {
        let mut ctx = InferenceContext::default();
        let root_name = ctx.claim_name(&self.options.root_name);
        ctx.infer_object(root_name, scope);

        debug!(
            keys = scope.len(),
            definitions = ctx.definitions.len(),
            "Scope inference complete"
        );
        InferredTypes::from_definitions(ctx.definitions)
    }
}

/// Mutable state for one inference run
#[derive(Default)]
struct InferenceContext {
    definitions: Vec<TypeDefinition>,
    used_names: HashSet<String>,
}

impl InferenceContext {
    /// Reserve a definition slot, then fill it. Children are pushed after
    /// their parent, so definitions come out in depth-first pre-order.
    fn infer_object(&mut self, name: String, map: &Map<String, Value>) {
        let index = self.definitions.len();
        self.definitions.push(TypeDefinition::new(name.clone()));

        for (key, value) in map {
            let path = format!("{}_{}", name, name_fragment(key));
            let type_ = self.infer_value(&path, value);
            self.definitions[index].push_field(key.clone(), type_);
        }
    }

    fn infer_value(&mut self, path: &str, value: &Value) -> Type {
        match ScopeValue::classify(value) {
            ScopeValue::Object(map) => {
                let name = self.claim_name(path);
                self.infer_object(name.clone(), map);
                Type::Reference(name)
            }
            // Elements of an array share the array field's path
            ScopeValue::Array(items) => {
                let element = match items.first() {
                    Some(first) => self.infer_value(path, first),
                    None => Type::Any,
                };
                Type::Array(Box::new(element))
            }
            ScopeValue::String => Type::String,
            ScopeValue::Number => Type::Number,
            ScopeValue::Boolean => Type::Boolean,
            ScopeValue::Null => Type::Any,
        }
    }

    /// Take `base` as a definition name, or the first free `base_N` (N >= 2)
    fn claim_name(&mut self, base: &str) -> String {
        if self.used_names.insert(base.to_string()) {
            return base.to_string();
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", base, n);
            if self.used_names.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Turn an arbitrary object key into something usable inside a type name
fn name_fragment(key: &str) -> String {
    let fragment: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if fragment.is_empty() {
        "_".to_string()
    } else {
        fragment
    }
}

/// Infer definitions for a value with default options
pub fn infer(value: &Value) -> InferredTypes {
    StructuralTypeInferer::default().infer(value)
}
