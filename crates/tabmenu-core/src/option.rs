//! Flat, declarative menu entries.
//!
//! A menu is described as a flat list of [`MenuOption`]s. Each option's
//! `structure` is a dot-delimited path ("file.open.recent") that encodes its
//! position in the tree: depth is the number of dots, and the parent is the
//! option whose structure equals everything before the last dot.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::tagged_width;

const SEPARATOR: char = '.';

/// One entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    /// Identifier passed to the selection callback when this entry runs
    pub id: String,
    /// Label, may contain style tags
    pub text: String,
    /// Dot-delimited hierarchical path
    pub structure: String,
}

impl MenuOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, structure: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            structure: structure.into(),
        }
    }

    /// Number of ancestors this option has in a well-formed tree.
    pub fn depth(&self) -> usize {
        self.structure.matches(SEPARATOR).count()
    }

    pub fn is_top_level(&self) -> bool {
        !self.structure.contains(SEPARATOR)
    }

    /// Structure of the direct parent, or `None` for a top-level option.
    pub fn parent_structure(&self) -> Option<&str> {
        self.structure
            .rfind(SEPARATOR)
            .map(|idx| &self.structure[..idx])
    }

    /// True iff `self` sits exactly one path segment below `parent`.
    pub fn is_direct_child_of(&self, parent: &MenuOption) -> bool {
        self.parent_structure() == Some(parent.structure.as_str())
    }

    /// Reject structures that can never be placed in a tree, and labels
    /// that would take up no cells.
    pub fn validate(&self) -> Result<()> {
        if self.structure.is_empty() {
            return Err(Error::invalid_option(&self.structure, "empty structure"));
        }
        if self.structure.split(SEPARATOR).any(str::is_empty) {
            return Err(Error::invalid_option(
                &self.structure,
                "empty path segment",
            ));
        }
        if tagged_width(&self.text) == 0 {
            return Err(Error::invalid_option(&self.structure, "empty label"));
        }
        Ok(())
    }
}
