//! Repeat an operation a fixed number of times.

use std::any::Any;
use std::sync::Arc;

use alsvid_ir::{Signature, Side, SymbolicInt};
use tracing::debug;

use crate::bloq::{Bloq, Cost};
use crate::classical::ClassicalValues;
use crate::error::{BloqError, BloqResult};
use crate::symbol::WireSymbol;

/// Apply a wrapped operation sequentially `power` times.
///
/// The wrapped operation must have only THRU registers, so each repetition
/// reads exactly the registers the previous one wrote. A `Power` does not
/// define its own tensor rule; it decomposes into its repetitions instead,
/// while the cost contribution stays aggregate (one call to the wrapped
/// operation with multiplicity `power`) so symbolic and very large repeat
/// counts remain tractable.
#[derive(Debug, Clone)]
pub struct Power {
    bloq: Arc<dyn Bloq>,
    power: SymbolicInt,
}

impl Power {
    /// Wrap `bloq` with a repeat count.
    ///
    /// Fails when any register of `bloq` is not THRU, or when the count is
    /// concrete and not a positive integer.
    pub fn try_new(bloq: Arc<dyn Bloq>, power: impl Into<SymbolicInt>) -> BloqResult<Self> {
        for reg in &bloq.signature() {
            if reg.side() != Side::Thru {
                return Err(BloqError::NonThruRegister {
                    register: reg.name().to_string(),
                });
            }
        }
        let power = power.into();
        if let Some(value) = power.value() {
            if value == 0 {
                return Err(BloqError::NonPositivePower { power: value });
            }
        }
        Ok(Self { bloq, power })
    }

    /// The wrapped operation.
    pub fn bloq(&self) -> &Arc<dyn Bloq> {
        &self.bloq
    }

    /// The repeat count.
    pub fn power(&self) -> &SymbolicInt {
        &self.power
    }

    /// Expand into the sequential applications of the wrapped operation.
    ///
    /// The applications thread the wrapped operation's outputs into the
    /// next application's inputs, in order. Fails when the repeat count is
    /// symbolic.
    pub fn unroll(&self) -> BloqResult<Vec<Arc<dyn Bloq>>> {
        let p = self.concrete_power()?;
        debug!(power = p, bloq = self.bloq.name(), "unrolling repeated bloq");
        Ok((0..p).map(|_| Arc::clone(&self.bloq)).collect())
    }

    /// Raise this repetition to a further power.
    ///
    /// A negative exponent adjoints the wrapped operation and multiplies
    /// the count by its magnitude; zero fails the positivity check.
    pub fn pow(&self, exponent: i64) -> BloqResult<Self> {
        let base = if exponent < 0 {
            self.bloq.adjoint()
        } else {
            Arc::clone(&self.bloq)
        };
        Self::try_new(base, self.power.clone().mul(exponent.unsigned_abs()))
    }

    fn concrete_power(&self) -> BloqResult<u64> {
        self.power.value().ok_or_else(|| BloqError::SymbolicPower {
            power: self.power.clone(),
        })
    }
}

impl Bloq for Power {
    fn name(&self) -> &'static str {
        "power"
    }

    fn signature(&self) -> Signature {
        self.bloq.signature()
    }

    fn adjoint(&self) -> Arc<dyn Bloq> {
        // THRU-ness and positivity survive adjointing the base.
        Arc::new(Self {
            bloq: self.bloq.adjoint(),
            power: self.power.clone(),
        })
    }

    /// Evaluate by decomposition: fold the wrapped operation's classical
    /// rule over the repeat count.
    fn on_classical(&self, vals: ClassicalValues) -> BloqResult<ClassicalValues> {
        let mut vals = vals;
        for rep in self.unroll()? {
            vals = rep.on_classical(vals)?;
        }
        Ok(vals)
    }

    fn wire_symbol(&self, reg: Option<&alsvid_ir::Register>, idx: &[usize]) -> WireSymbol {
        let inner = self.bloq.wire_symbol(reg, idx);
        let base = match inner.label().trim() {
            "" => self.bloq.name().to_string(),
            label => label.to_string(),
        };
        let text = format!("{base}^{}", self.power);
        match inner {
            WireSymbol::Text(_) => WireSymbol::Text(text),
            WireSymbol::TextBox { side, .. } => WireSymbol::TextBox { text, side },
        }
    }

    fn cost(&self) -> Cost {
        Cost::Repeat {
            bloq: Arc::clone(&self.bloq),
            times: self.power.clone(),
        }
    }

    fn absorbs_control(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
