//! Signature block types.

use serde::{Deserialize, Serialize};

/// One signatory: a name with the title printed beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    /// Printed name (e.g., "Jane Doe").
    pub name: String,

    /// Office or title (e.g., "Council President").
    pub title: String,
}

impl Signatory {
    /// Create a signatory from name and title.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    /// Check if both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.title.is_empty()
    }
}

/// The trailing two-column attestation closing the document.
///
/// Either column may be empty when the source text lacks a parseable
/// signature section; an empty block is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBlock {
    /// Left column signatory.
    pub left: Signatory,

    /// Right column signatory.
    pub right: Signatory,
}

impl SignatureBlock {
    /// Create a signature block from two signatories.
    pub fn new(left: Signatory, right: Signatory) -> Self {
        Self { left, right }
    }

    /// Check if the block has no content at all.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Both names in column order.
    pub fn names(&self) -> [&str; 2] {
        [&self.left.name, &self.right.name]
    }

    /// Both titles in column order.
    pub fn titles(&self) -> [&str; 2] {
        [&self.left.title, &self.right.title]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block() {
        let block = SignatureBlock::default();
        assert!(block.is_empty());
        assert_eq!(block.names(), ["", ""]);
    }

    #[test]
    fn test_columns() {
        let block = SignatureBlock::new(
            Signatory::new("Jane Doe", "Council President"),
            Signatory::new("John Roe", "Township Clerk"),
        );
        assert!(!block.is_empty());
        assert_eq!(block.names(), ["Jane Doe", "John Roe"]);
        assert_eq!(block.titles(), ["Council President", "Township Clerk"]);
    }
}
