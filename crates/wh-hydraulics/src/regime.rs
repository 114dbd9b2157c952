//! Flow regime classification.

use std::fmt;

/// Reynolds number at which flow is treated as turbulent.
///
/// `NRe < LAMINAR_REYNOLDS_LIMIT` is laminar, everything else turbulent.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_REYNOLDS_LIMIT {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Turbulent => "Turbulent",
        }
    }

    pub fn is_laminar(self) -> bool {
        matches!(self, FlowRegime::Laminar)
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
