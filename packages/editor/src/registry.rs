//! # Declaration registry
//!
//! Keeps exactly one declaration document installed per editor instance.
//!
//! ```text
//! Uninstalled ──install──▶ Installed(h1) ──install──▶ dispose(h1), Installed(h2)
//!      ▲                                                     │
//!      └─────────────────────── dispose ─────────────────────┘
//! ```
//!
//! The previous handle is always disposed before the next document is added,
//! so the host never holds two live documents for one instance.

use crate::host::{ExtraLibHandle, LanguageHost};
use scopetype_inference::DeclarationDocument;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static NEXT_LIB_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a virtual path no other registry in this process uses
pub fn unique_lib_path() -> String {
    let n = NEXT_LIB_ID.fetch_add(1, Ordering::Relaxed);
    format!("file:///node_modules/@scopetype/scope-{}.d.ts", n)
}

/// Registration state of one editor instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Uninstalled,
    Installed(ExtraLibHandle),
}

pub struct DeclarationRegistry {
    lib_path: String,
    host: Option<Rc<dyn LanguageHost>>,
    state: Registration,
}

impl DeclarationRegistry {
    /// Registry with its own unique virtual path
    pub fn new() -> Self {
        Self::with_lib_path(unique_lib_path())
    }

    /// Registry installing under a fixed virtual path
    pub fn with_lib_path(lib_path: impl Into<String>) -> Self {
        Self {
            lib_path: lib_path.into(),
            host: None,
            state: Registration::Uninstalled,
        }
    }

    pub fn lib_path(&self) -> &str {
        &self.lib_path
    }

    pub fn state(&self) -> &Registration {
        &self.state
    }

    pub fn handle(&self) -> Option<&ExtraLibHandle> {
        match &self.state {
            Registration::Installed(handle) => Some(handle),
            Registration::Uninstalled => None,
        }
    }

    pub fn is_installed(&self) -> bool {
        matches!(self.state, Registration::Installed(_))
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// Bind to a host. A registration held on a previous host is disposed.
    pub fn attach(&mut self, host: Rc<dyn LanguageHost>) {
        self.dispose();
        self.host = Some(host);
    }

    /// Dispose the current registration and forget the host
    pub fn detach(&mut self) {
        self.dispose();
        self.host = None;
    }

    /// Replace the installed document with `document`.
    ///
    /// Best effort: without a host this only clears state, and a host error
    /// leaves the registry `Uninstalled`.
    pub fn install(&mut self, document: &DeclarationDocument) {
        self.dispose();

        let Some(host) = &self.host else {
            debug!(path = %self.lib_path, "No language host attached, skipping declaration install");
            return;
        };

        match host.add_extra_lib(document, &self.lib_path) {
            Ok(handle) => {
                debug!(path = %self.lib_path, id = handle.id(), bytes = document.as_str().len(), "Installed scope declarations");
                self.state = Registration::Installed(handle);
            }
            Err(e) => {
                warn!(path = %self.lib_path, error = %e, "Language host rejected scope declarations");
            }
        }
    }

    /// Dispose the current registration. Safe to call any number of times.
    pub fn dispose(&mut self) {
        let Registration::Installed(handle) =
            std::mem::replace(&mut self.state, Registration::Uninstalled)
        else {
            return;
        };

        if let Some(host) = &self.host {
            host.dispose_extra_lib(&handle);
            debug!(path = %handle.path(), id = handle.id(), "Disposed scope declarations");
        }
    }
}

impl Default for DeclarationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DeclarationRegistry {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for DeclarationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclarationRegistry")
            .field("lib_path", &self.lib_path)
            .field("has_host", &self.host.is_some())
            .field("state", &self.state)
            .finish()
    }
}
