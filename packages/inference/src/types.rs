use serde::{Deserialize, Serialize};

/// A type reference inside a structural type definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "camelCase")]
pub enum Type {
    /// Any type - fallback for values with no useful shape (null, empty arrays)
    Any,

    /// String type
    String,

    /// Number type
    Number,

    /// Boolean type
    Boolean,

    /// Array type, element inferred from the first sample
    Array(Box<Type>),

    /// Reference to another named definition in the same `InferredTypes`
    Reference(String),
}

/// A single field of a structural definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Type,
}

/// Named record shape, fields kept in the order they were observed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Ordered sequence of definitions produced by one inference run.
/// The first definition is always the root record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InferredTypes {
    definitions: Vec<TypeDefinition>,
}

impl Type {
    /// Name of the definition this type ultimately points at, looking through arrays
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            Type::Reference(name) => Some(name),
            Type::Array(inner) => inner.referenced_name(),
            _ => None,
        }
    }

    /// Check if this type is a primitive (not a reference or array)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Type::Any | Type::String | Type::Number | Type::Boolean
        )
    }
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field; callers feed each object key once, in enumeration order
    pub fn push_field(&mut self, name: impl Into<String>, type_: Type) {
        self.fields.push(Field {
            name: name.into(),
            type_,
        });
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

impl InferredTypes {
    /// Build from a definition list. The root must come first.
    pub(crate) fn from_definitions(definitions: Vec<TypeDefinition>) -> Self {
        debug_assert!(!definitions.is_empty(), "inference always yields a root");
        Self { definitions }
    }

    /// The root record modelling the whole scope
    pub fn root(&self) -> &TypeDefinition {
        &self.definitions[0]
    }

    pub fn definitions(&self) -> &[TypeDefinition] {
        &self.definitions
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
