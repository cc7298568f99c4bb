//! Display symbols for diagramming tools.

use alsvid_ir::Side;
use serde::{Deserialize, Serialize};

/// A short text label an operation exposes for one register wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireSymbol {
    /// A free-standing label, used when no particular register is asked for.
    Text(String),
    /// A directional text box attached to one side of the operation.
    TextBox {
        /// The box label.
        text: String,
        /// Which side of the operation the box attaches to.
        side: Side,
    },
}

impl WireSymbol {
    /// A free-standing label.
    pub fn text(text: impl Into<String>) -> Self {
        WireSymbol::Text(text.into())
    }

    /// A directional text box.
    pub fn text_box(text: impl Into<String>, side: Side) -> Self {
        WireSymbol::TextBox {
            text: text.into(),
            side,
        }
    }

    /// The label text.
    pub fn label(&self) -> &str {
        match self {
            WireSymbol::Text(text) | WireSymbol::TextBox { text, .. } => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(WireSymbol::text("split").label(), "split");
        assert_eq!(WireSymbol::text_box("alloc", Side::Right).label(), "alloc");
    }
}
