//! Native circuit export: wire-identifier arrays.
//!
//! When a circuit is lowered to a native gate representation, every register
//! becomes an array of physical wire identifiers. Bookkeeping operations do
//! not touch the wires themselves; they only reshape or re-slice the arrays
//! so downstream gates see the layout the new registers imply.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shaped::Shaped;

/// Unique identifier for a physical wire in the exported circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

/// Wire arrays keyed by register name.
pub type WireValues = FxHashMap<String, Shaped<WireId>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", WireId(3)), "w3");
    }

    #[test]
    fn test_shaped_wires() {
        let wires = Shaped::from_vec((0..4).map(WireId).collect());
        let reshaped = wires.reshaped("reg", &[4, 1]).unwrap();
        assert_eq!(reshaped.as_array("reg").unwrap().shape(), &[4, 1]);
    }
}
