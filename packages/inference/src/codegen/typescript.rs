use crate::codegen::CodeGenerator;
use crate::options::InferenceOptions;
use crate::types::{Type, TypeDefinition};

/// TypeScript code generator for inferred definitions.
///
/// Interfaces are emitted without `export` so the surrounding document stays
/// a global script rather than a module.
pub struct TypeScriptGenerator {
    indent: String,
}

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self::with_options(&InferenceOptions::default())
    }

    pub fn with_options(options: &InferenceOptions) -> Self {
        Self {
            indent: options.indent.clone(),
        }
    }

    /// Render a property key, quoting it when it is not a plain identifier
    fn generate_key(&self, name: &str) -> String {
        if is_identifier(name) {
            name.to_string()
        } else {
            quote(name)
        }
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate_type(&self, type_: &Type) -> String {
        match type_ {
            Type::Any => "any".to_string(),
            Type::String => "string".to_string(),
            Type::Number => "number".to_string(),
            Type::Boolean => "boolean".to_string(),
            Type::Array(inner) => format!("{}[]", self.generate_type(inner)),
            Type::Reference(name) => name.clone(),
        }
    }

    fn generate_property(&self, name: &str, type_: &Type) -> String {
        format!("{}: {}", self.generate_key(name), self.generate_type(type_))
    }

    fn generate_interface(&self, definition: &TypeDefinition) -> String {
        let mut lines = vec![format!("interface {} {{", definition.name)];

        for field in &definition.fields {
            lines.push(format!(
                "{}{};",
                self.indent,
                self.generate_property(&field.name, &field.type_)
            ));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

/// Check whether `name` can be written bare as a JavaScript identifier
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Words that cannot name a `declare const` binding
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check whether `name` is a reserved word in strict-mode JavaScript
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Quote a string as a JavaScript/JSON string literal
pub fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_primitive_types() {
        let gen = TypeScriptGenerator::new();

        assert_eq!(gen.generate_type(&Type::String), "string");
        assert_eq!(gen.generate_type(&Type::Number), "number");
        assert_eq!(gen.generate_type(&Type::Boolean), "boolean");
        assert_eq!(gen.generate_type(&Type::Any), "any");
    }

    #[test]
    fn test_generate_array_type() {
        let gen = TypeScriptGenerator::new();

        let array_type = Type::Array(Box::new(Type::String));
        assert_eq!(gen.generate_type(&array_type), "string[]");

        let nested = Type::Array(Box::new(Type::Array(Box::new(Type::Reference(
            "RootObject_rows".to_string(),
        )))));
        assert_eq!(gen.generate_type(&nested), "RootObject_rows[][]");
    }

    #[test]
    fn test_generate_property() {
        let gen = TypeScriptGenerator::new();

        assert_eq!(gen.generate_property("name", &Type::String), "name: string");
        assert_eq!(
            gen.generate_property("data-id", &Type::Number),
            "\"data-id\": number"
        );
    }

    #[test]
    fn test_generate_interface() {
        let gen = TypeScriptGenerator::new();

        let mut def = TypeDefinition::new("RootObject_page");
        def.push_field("id", Type::String);
        def.push_field("tags", Type::Array(Box::new(Type::String)));

        assert_eq!(
            gen.generate_interface(&def),
            "interface RootObject_page {\n  id: string;\n  tags: string[];\n}"
        );
    }

    #[test]
    fn test_generate_empty_interface() {
        let gen = TypeScriptGenerator::new();
        assert_eq!(
            gen.generate_interface(&TypeDefinition::new("RootObject")),
            "interface RootObject {\n}"
        );
    }

    #[test]
    fn test_custom_indent() {
        let options = InferenceOptions {
            indent: "\t".to_string(),
            ..Default::default()
        };
        let gen = TypeScriptGenerator::with_options(&options);

        let mut def = TypeDefinition::new("RootObject");
        def.push_field("a", Type::Boolean);
        assert_eq!(gen.generate_interface(&def), "interface RootObject {\n\ta: boolean;\n}");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("page"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$store2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("my-key"));
        assert!(!is_identifier("has space"));
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_identifier("class"));
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("default"));
        assert!(!is_reserved_word("page"));
        assert!(!is_reserved_word("Class"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("page"), "\"page\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
