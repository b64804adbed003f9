// Display mode toggles shared by all charts
/// Linear or logarithmic byte axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    #[default]
    Linear,
    Logarithmic,
}

impl ScaleMode {
    pub fn axis_title(self) -> &'static str {
        match self {
            ScaleMode::Linear => "Bytes",
            ScaleMode::Logarithmic => "Bytes (log scale)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccumulationMode {
    #[default]
    Instantaneous,
    Cumulative,
}

/// Decimal (1000) or binary (1024) byte prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitBase {
    #[default]
    Decimal,
    Binary,
}

impl UnitBase {
    pub fn divisor(self) -> f64 {
        match self {
            UnitBase::Decimal => 1000.0,
            UnitBase::Binary => 1024.0,
        }
    }

    /// Suffix appended to abbreviated tick numbers on linear byte axes.
    pub fn byte_suffix(self) -> &'static str {
        match self {
            UnitBase::Decimal => "B",
            UnitBase::Binary => "iB",
        }
    }
}

/// The three user toggles, passed by value into every transform, format,
/// and present call rather than held as shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMode {
    pub scale: ScaleMode,
    pub accumulation: AccumulationMode,
    pub unit_base: UnitBase,
}
