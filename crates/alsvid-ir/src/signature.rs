//! Operation signatures.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{IrError, IrResult};
use crate::register::{Register, Side};

/// An ordered, named collection of registers forming an operation interface.
///
/// Registers are grouped into a left (input) view and a right (output) view
/// by their [`Side`]; a THRU register appears once and counts in both views.
/// Names must be unique within each view. A name may legitimately appear
/// once as LEFT and once as RIGHT; that is how reshaping operations pair an
/// input register with its reshaped output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    registers: Vec<Register>,
}

impl Signature {
    /// Build a signature from caller-supplied registers, validating name
    /// uniqueness within each side view.
    pub fn try_new(registers: impl IntoIterator<Item = Register>) -> IrResult<Self> {
        let registers: Vec<Register> = registers.into_iter().collect();
        check_unique(registers.iter().filter(|r| r.side().includes_left()), "left")?;
        check_unique(
            registers.iter().filter(|r| r.side().includes_right()),
            "right",
        )?;
        Ok(Self { registers })
    }

    /// Build a signature from registers whose names are known to be distinct
    /// per side.
    ///
    /// Intended for operations whose register names are fixed literals; the
    /// uniqueness invariant is checked only in debug builds.
    pub fn new(registers: impl IntoIterator<Item = Register>) -> Self {
        let registers: Vec<Register> = registers.into_iter().collect();
        debug_assert!(
            Self::try_new(registers.clone()).is_ok(),
            "register names must be unique per side"
        );
        Self { registers }
    }

    /// All registers in declaration order.
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Registers participating in the left (input) view.
    pub fn lefts(&self) -> impl Iterator<Item = &Register> {
        self.registers.iter().filter(|r| r.side().includes_left())
    }

    /// Registers participating in the right (output) view.
    pub fn rights(&self) -> impl Iterator<Item = &Register> {
        self.registers.iter().filter(|r| r.side().includes_right())
    }

    /// Look up a register by name and side view.
    pub fn find(&self, name: &str, side: Side) -> Option<&Register> {
        self.registers.iter().find(|r| {
            r.name() == name
                && match side {
                    Side::Left => r.side().includes_left(),
                    Side::Right => r.side().includes_right(),
                    Side::Thru => r.side() == Side::Thru,
                }
        })
    }

    /// Whether every register flows through.
    pub fn is_thru_only(&self) -> bool {
        self.registers.iter().all(|r| r.side() == Side::Thru)
    }

    /// Total concrete bit count of the left view, if all widths are concrete.
    pub fn n_qubits_left(&self) -> Option<u64> {
        self.lefts().map(|r| r.total_bits().value()).sum()
    }

    /// Total concrete bit count of the right view, if all widths are concrete.
    pub fn n_qubits_right(&self) -> Option<u64> {
        self.rights().map(|r| r.total_bits().value()).sum()
    }

    /// Number of registers.
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Whether the signature has no registers.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a Register;
    type IntoIter = std::slice::Iter<'a, Register>;

    fn into_iter(self) -> Self::IntoIter {
        self.registers.iter()
    }
}

fn check_unique<'a>(
    registers: impl Iterator<Item = &'a Register>,
    side: &'static str,
) -> IrResult<()> {
    let mut seen = HashSet::new();
    for reg in registers {
        if !seen.insert(reg.name()) {
            return Err(IrError::DuplicateRegisterName {
                name: reg.name().to_string(),
                side,
            });
        }
    }
    Ok(())
}
