//! # Expression editor controller
//!
//! Drives one code editor bound to a live data scope.
//!
//! ## Lifecycle
//!
//! ```text
//! new ──▶ mount(surface, host) ──▶ update(props)* ──▶ unmount
//!              │                        │                │
//!   options, commit chord,      scope identity changed:  dispose
//!   focus once, install         re-synthesize, reinstall  registration
//! ```
//!
//! The declaration document is memoized on the scope's identity: passing the
//! same `Rc<Scope>` again never re-runs inference.

use crate::host::LanguageHost;
use crate::options::{
    CompilerOptions, DiagnosticsOptions, EditorConfig, EditorOptions, KeyChord, COMMIT_CHORD,
};
use crate::registry::DeclarationRegistry;
use crate::surface::EditorSurface;
use scopetype_inference::{synthesize_scope_with, DeclarationDocument, InferenceOptions, Scope};
use std::rc::Rc;
use tracing::{debug, info};

pub type ChangeHandler = Box<dyn FnMut(String)>;
pub type CommitHandler = Box<dyn FnMut()>;

/// Caller-controlled inputs of the editor
#[derive(Debug, Clone)]
pub struct EditorProps {
    pub value: String,
    pub global_scope: Rc<Scope>,
    pub disabled: bool,
    pub auto_focus: bool,
}

impl EditorProps {
    pub fn new(value: impl Into<String>, global_scope: Rc<Scope>) -> Self {
        Self {
            value: value.into(),
            global_scope,
            disabled: false,
            auto_focus: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }
}

/// One-shot autofocus guard, kept across remounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    NotYetFocused,
    Focused,
}

/// Commit chord binding of the mounted surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandBinding {
    Unbound,
    Bound(KeyChord),
}

struct Mounted {
    surface: Box<dyn EditorSurface>,
    commands: CommandBinding,
    /// Last content known to be in the surface
    content: String,
}

pub struct ExpressionEditor {
    props: EditorProps,
    on_change: ChangeHandler,
    on_commit: Option<CommitHandler>,
    inference: InferenceOptions,
    document: DeclarationDocument,
    registry: DeclarationRegistry,
    focus: FocusState,
    mounted: Option<Mounted>,
}

impl ExpressionEditor {
    /// Create an unmounted editor with default configuration
    pub fn new(props: EditorProps, on_change: impl FnMut(String) + 'static) -> Self {
        Self::with_config(EditorConfig::default(), props, on_change)
    }

    pub fn with_config(
        config: EditorConfig,
        props: EditorProps,
        on_change: impl FnMut(String) + 'static,
    ) -> Self {
        let registry = match config.lib_path {
            Some(path) => DeclarationRegistry::with_lib_path(path),
            None => DeclarationRegistry::new(),
        };
        let document = synthesize_scope_with(&props.global_scope, &config.inference);

        Self {
            props,
            on_change: Box::new(on_change),
            on_commit: None,
            inference: config.inference,
            document,
            registry,
            focus: FocusState::NotYetFocused,
            mounted: None,
        }
    }

    /// Builder form of [`set_on_commit`](Self::set_on_commit)
    pub fn on_commit(mut self, on_commit: impl FnMut() + 'static) -> Self {
        self.on_commit = Some(Box::new(on_commit));
        self
    }

    /// Replace the commit callback. Takes effect without rebinding the chord.
    pub fn set_on_commit(&mut self, on_commit: Option<CommitHandler>) {
        self.on_commit = on_commit;
    }

    pub fn props(&self) -> &EditorProps {
        &self.props
    }

    pub fn value(&self) -> &str {
        &self.props.value
    }

    /// Declarations for the current scope
    pub fn document(&self) -> &DeclarationDocument {
        &self.document
    }

    pub fn registry(&self) -> &DeclarationRegistry {
        &self.registry
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    pub fn command_binding(&self) -> CommandBinding {
        self.mounted
            .as_ref()
            .map_or(CommandBinding::Unbound, |m| m.commands)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Attach the editor widget and language host.
    ///
    /// Mounting while already mounted releases the previous surface first.
    pub fn mount(&mut self, surface: Box<dyn EditorSurface>, host: Rc<dyn LanguageHost>) {
        if self.mounted.is_some() {
            self.unmount();
        }

        let mut surface = surface;
        surface.update_options(&EditorOptions::for_expressions(self.props.disabled));
        surface.set_value(&self.props.value);

        host.set_compiler_options(&CompilerOptions::for_expressions());
        host.set_diagnostics_options(&DiagnosticsOptions::default());

        surface.add_command(COMMIT_CHORD);

        if self.focus == FocusState::NotYetFocused && self.props.auto_focus && !self.props.disabled {
            surface.focus();
            self.focus = FocusState::Focused;
        }

        self.registry.attach(host);
        self.registry.install(&self.document);

        info!(
            path = %self.registry.lib_path(),
            disabled = self.props.disabled,
            focused = self.focus == FocusState::Focused,
            "Expression editor mounted"
        );

        self.mounted = Some(Mounted {
            surface,
            commands: CommandBinding::Bound(COMMIT_CHORD),
            content: self.props.value.clone(),
        });
    }

    /// Apply new props from the caller
    pub fn update(&mut self, props: EditorProps) {
        if !Rc::ptr_eq(&self.props.global_scope, &props.global_scope) {
            let document = synthesize_scope_with(&props.global_scope, &self.inference);
            if document != self.document {
                debug!(keys = props.global_scope.len(), "Scope changed, reinstalling declarations");
                self.document = document;
                self.registry.install(&self.document);
            }
        }

        if let Some(mounted) = &mut self.mounted {
            if props.disabled != self.props.disabled {
                mounted
                    .surface
                    .update_options(&EditorOptions::for_expressions(props.disabled));
            }
            if props.value != mounted.content {
                mounted.surface.set_value(&props.value);
                mounted.content = props.value.clone();
            }
        }

        self.props = props;
    }

    /// The surface content changed; report the full text to the caller
    pub fn handle_edit(&mut self, text: Option<String>) {
        let text = text.unwrap_or_default();
        if let Some(mounted) = &mut self.mounted {
            mounted.content = text.clone();
        }
        (self.on_change)(text);
    }

    /// A bound chord was pressed. Returns whether the chord was handled.
    pub fn handle_command(&mut self, chord: KeyChord) -> bool {
        let bound = matches!(
            self.command_binding(),
            CommandBinding::Bound(c) if c == chord
        );
        if !bound {
            return false;
        }

        if let Some(on_commit) = &mut self.on_commit {
            on_commit();
        }
        true
    }

    /// Release the surface and dispose the registration
    pub fn unmount(&mut self) {
        if self.mounted.take().is_none() {
            return;
        }
        self.registry.detach();
        info!(path = %self.registry.lib_path(), "Expression editor unmounted");
    }
}
