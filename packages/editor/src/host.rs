//! # Language host
//!
//! The host is the editor environment's language service: it owns the global
//! compiler configuration and a namespace of extra declaration libs keyed by
//! virtual path. It is shared by every editor on the page, so all methods take
//! `&self` and implementations use interior mutability.

use crate::errors::EditorError;
use crate::options::{CompilerOptions, DiagnosticsOptions};
use scopetype_inference::DeclarationDocument;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Token for one installed extra lib
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtraLibHandle {
    id: u64,
    path: String,
}

impl ExtraLibHandle {
    pub fn new(id: u64, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Language service collaborator consumed by the registry and controller
pub trait LanguageHost {
    fn set_compiler_options(&self, options: &CompilerOptions);

    fn set_diagnostics_options(&self, options: &DiagnosticsOptions);

    /// Install `document` under `path`, replacing whatever lived there
    fn add_extra_lib(
        &self,
        document: &DeclarationDocument,
        path: &str,
    ) -> Result<ExtraLibHandle, EditorError>;

    /// Remove the lib `handle` installed. Must be a no-op for stale handles.
    fn dispose_extra_lib(&self, handle: &ExtraLibHandle);
}

#[derive(Debug)]
struct ExtraLib {
    id: u64,
    content: String,
    bindings: Vec<String>,
}

#[derive(Debug, Default)]
struct HostState {
    next_id: u64,
    libs: BTreeMap<String, ExtraLib>,
    compiler_options: Option<CompilerOptions>,
    diagnostics_options: Option<DiagnosticsOptions>,
    added: usize,
    disposed: usize,
    replaced: usize,
    rejecting: bool,
}

/// In-process language host: a keyed store of extra libs.
///
/// Used as the default host outside a browser and as the injectable fake in
/// tests.
#[derive(Debug, Default)]
pub struct InMemoryLanguageHost {
    state: RefCell<HostState>,
}

impl InMemoryLanguageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `add_extra_lib` calls fail
    pub fn set_rejecting(&self, rejecting: bool) {
        self.state.borrow_mut().rejecting = rejecting;
    }

    pub fn lib_content(&self, path: &str) -> Option<String> {
        self.state
            .borrow()
            .libs
            .get(path)
            .map(|lib| lib.content.clone())
    }

    pub fn lib_paths(&self) -> Vec<String> {
        self.state.borrow().libs.keys().cloned().collect()
    }

    /// Global bindings currently visible to completions, across all libs
    pub fn visible_bindings(&self) -> Vec<String> {
        self.state
            .borrow()
            .libs
            .values()
            .flat_map(|lib| lib.bindings.iter().cloned())
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.state.borrow().libs.len()
    }

    pub fn added_count(&self) -> usize {
        self.state.borrow().added
    }

    /// Libs removed through `dispose_extra_lib`
    pub fn disposed_count(&self) -> usize {
        self.state.borrow().disposed
    }

    /// Libs overwritten by an `add_extra_lib` under an occupied path
    pub fn replaced_count(&self) -> usize {
        self.state.borrow().replaced
    }

    pub fn compiler_options(&self) -> Option<CompilerOptions> {
        self.state.borrow().compiler_options.clone()
    }

    pub fn diagnostics_options(&self) -> Option<DiagnosticsOptions> {
        self.state.borrow().diagnostics_options
    }
}

impl LanguageHost for InMemoryLanguageHost {
    fn set_compiler_options(&self, options: &CompilerOptions) {
        self.state.borrow_mut().compiler_options = Some(options.clone());
    }

    fn set_diagnostics_options(&self, options: &DiagnosticsOptions) {
        self.state.borrow_mut().diagnostics_options = Some(*options);
    }

    fn add_extra_lib(
        &self,
        document: &DeclarationDocument,
        path: &str,
    ) -> Result<ExtraLibHandle, EditorError> {
        let mut state = self.state.borrow_mut();
        if state.rejecting {
            return Err(EditorError::Host {
                path: path.to_string(),
                reason: "host is rejecting extra libs".to_string(),
            });
        }

        state.next_id += 1;
        let id = state.next_id;
        let previous = state.libs.insert(
            path.to_string(),
            ExtraLib {
                id,
                content: document.as_str().to_string(),
                bindings: document.bindings().to_vec(),
            },
        );
        if previous.is_some() {
            state.replaced += 1;
        }
        state.added += 1;

        Ok(ExtraLibHandle::new(id, path))
    }

    fn dispose_extra_lib(&self, handle: &ExtraLibHandle) {
        let mut state = self.state.borrow_mut();
        let owned = state
            .libs
            .get(handle.path())
            .map_or(false, |lib| lib.id == handle.id());

        if owned {
            state.libs.remove(handle.path());
            state.disposed += 1;
        }
    }
}
