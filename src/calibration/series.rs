use super::ModelCurve;

/// Defines the model quantity drawn against the directional strain
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Series {
    /// Directional stress (11 or 12)
    Stress,

    /// Von Mises equivalent stress
    VonMises,

    /// Directional backstress α
    Backstress,

    /// Isotropic hardening κ
    Kappa,

    /// β + α₁₁ + κ
    HardeningTotal,
}

impl Series {
    /// Returns the values of the series
    pub(crate) fn calc<'a>(&self, curve: &'a ModelCurve) -> &'a [f64] {
        match self {
            Self::Stress => &curve.stress,
            Self::VonMises => &curve.von_mises,
            Self::Backstress => &curve.backstress,
            Self::Kappa => &curve.kappa,
            Self::HardeningTotal => &curve.hardening_total,
        }
    }

    /// Returns the legend label prefix
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Stress => "$\\sigma$",
            Self::VonMises => "VM Model",
            Self::Backstress => "$\\alpha$",
            Self::Kappa => "$\\kappa$",
            Self::HardeningTotal => "$total$",
        }
    }

    /// Returns the line style
    pub(crate) fn line_style(&self) -> &'static str {
        match self {
            Self::Stress | Self::VonMises => "-",
            Self::Backstress => "--",
            Self::Kappa => "-.",
            Self::HardeningTotal => ":",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
