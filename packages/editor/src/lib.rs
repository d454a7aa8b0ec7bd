//! # Scopetype Editor
//!
//! Lifecycle of an in-browser expression editor bound to a live data scope.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ inference: scope → interfaces + bindings    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: controller + declaration registry   │
//! │  - Memoize declarations on scope identity   │
//! │  - Dispose previous lib, install the next   │
//! │  - Mount config, commit chord, focus once   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: language service extra-lib namespace  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scopetype_editor::{EditorProps, ExpressionEditor, InMemoryLanguageHost};
//! use std::rc::Rc;
//!
//! let host = Rc::new(InMemoryLanguageHost::new());
//! let mut editor = ExpressionEditor::new(EditorProps::new("page.title", scope), |text| {
//!     println!("edited: {}", text);
//! })
//! .on_commit(|| println!("commit"));
//!
//! editor.mount(Box::new(surface), host.clone());
//! editor.update(EditorProps::new("page.title", new_scope));
//! editor.unmount();
//! ```

mod controller;
mod errors;
mod host;
mod options;
mod registry;
mod surface;

pub mod theme;

pub use controller::{
    ChangeHandler, CommandBinding, CommitHandler, EditorProps, ExpressionEditor, FocusState,
};
pub use errors::EditorError;
pub use host::{ExtraLibHandle, InMemoryLanguageHost, LanguageHost};
pub use options::{
    AccessibilitySupport, CompilerOptions, DiagnosticsOptions, EditorConfig, EditorOptions,
    JsxEmit, KeyChord, MinimapOptions, ModuleKind, ModuleResolutionKind, ScriptTarget,
    COMMIT_CHORD,
};
pub use registry::{unique_lib_path, DeclarationRegistry, Registration};
pub use surface::EditorSurface;

// Re-export inference types for convenience
pub use scopetype_inference::{DeclarationDocument, InferenceOptions, Scope};
