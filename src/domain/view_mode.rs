use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which authoring surface is shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Form,
    #[serde(alias = "yaml")]
    Document,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Form => ViewMode::Document,
            ViewMode::Document => ViewMode::Form,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Form => write!(f, "form"),
            ViewMode::Document => write!(f, "document"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "form" => Ok(ViewMode::Form),
            "document" | "yaml" => Ok(ViewMode::Document),
            other => Err(format!(
                "unknown view mode '{}', expected 'form' or 'document'",
                other
            )),
        }
    }
}
