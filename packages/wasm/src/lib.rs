use scopetype_editor::theme::contrast_text;
use scopetype_inference::{
    parse_scope, synthesize_scope_with, InferenceOptions, InferenceResult, StructuralTypeInferer,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn options(root_name: Option<String>) -> InferenceOptions {
    root_name
        .map(InferenceOptions::with_root_name)
        .unwrap_or_default()
}

fn declarations_for(scope_json: &str, options: &InferenceOptions) -> InferenceResult<String> {
    let scope = parse_scope(scope_json)?;
    Ok(synthesize_scope_with(&scope, options).into_string())
}

fn types_for(scope_json: &str, options: &InferenceOptions) -> Result<String, String> {
    let scope = parse_scope(scope_json).map_err(|e| e.to_string())?;
    let types = StructuralTypeInferer::new(options.clone()).infer_scope(&scope);
    serde_json::to_string(&types).map_err(|e| format!("Serialization error: {}", e))
}

/// Synthesize the declaration document for a JSON scope
#[wasm_bindgen(js_name = synthesizeDeclarations)]
pub fn synthesize_declarations_js(
    scope_json: &str,
    root_name: Option<String>,
) -> Result<String, JsValue> {
    declarations_for(scope_json, &options(root_name))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Infer definitions for a JSON scope, returned as JSON
#[wasm_bindgen(js_name = inferTypes)]
pub fn infer_types_js(scope_json: &str, root_name: Option<String>) -> Result<String, JsValue> {
    types_for(scope_json, &options(root_name)).map_err(|e| JsValue::from_str(&e))
}

/// Readable text color for a palette background
#[wasm_bindgen(js_name = contrastText)]
pub fn contrast_text_js(color: &str) -> Result<String, JsValue> {
    contrast_text(color)
        .map(str::to_string)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Declarations for one editor instance, re-synthesized per scope update.
///
/// `update` reports whether the text changed, so the JS side only replaces
/// its extra lib when there is something new to install.
#[wasm_bindgen]
pub struct ScopeDeclarations {
    options: InferenceOptions,
    source: String,
}

#[wasm_bindgen]
impl ScopeDeclarations {
    #[wasm_bindgen(constructor)]
    pub fn new(root_name: Option<String>) -> ScopeDeclarations {
        let options = options(root_name);
        let source = synthesize_scope_with(&Default::default(), &options).into_string();
        ScopeDeclarations { options, source }
    }

    #[wasm_bindgen(getter)]
    pub fn source(&self) -> String {
        self.source.clone()
    }

    pub fn update(&mut self, scope_json: &str) -> Result<bool, JsValue> {
        let source = declarations_for(scope_json, &self.options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.replace(source))
    }
}

impl ScopeDeclarations {
    fn replace(&mut self, source: String) -> bool {
        if source == self.source {
            return false;
        }
        self.source = source;
        true
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_invalid_scope_rejects() {
        assert!(synthesize_declarations_js("[]", None).is_err());
        assert!(contrast_text_js("nope").is_err());
    }
}
