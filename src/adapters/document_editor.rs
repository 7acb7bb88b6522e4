//! Raw document surface.
//!
//! The editor is a sink: it is loaded with snapshots of the canonical document
//! and the operator may type over them, but its text is never parsed back into
//! the form fields.

use tracing::warn;

use crate::domain::DnsPolicy;

#[derive(Debug, Clone)]
pub struct DocumentEditor {
    initial: String,
    buffer: String,
    create: bool,
}

impl DocumentEditor {
    /// `create` marks the editor as authoring a new resource
    pub fn new(create: bool) -> Self {
        Self {
            initial: String::new(),
            buffer: String::new(),
            create,
        }
    }

    /// Replace the contents with a fresh snapshot, dropping manual edits
    pub fn load(&mut self, document: &DnsPolicy) {
        match document.to_yaml() {
            Ok(yaml) => {
                self.initial = yaml.clone();
                self.buffer = yaml;
            }
            Err(e) => warn!("Failed to render DNSPolicy as YAML: {}", e),
        }
    }

    /// Operator typed into the editor
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_modified(&self) -> bool {
        self.buffer != self.initial
    }

    pub fn is_create(&self) -> bool {
        self.create
    }
}
