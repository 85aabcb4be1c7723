/// Which modulation terms are applied to the sine carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Modulation {
    /// Amplitude modulation only
    Am,
    /// Frequency modulation only
    Fm,
    /// Amplitude and frequency modulation on the same carrier
    Afm,
}

impl Modulation {
    pub const ALL: [Modulation; 3] = [Modulation::Am, Modulation::Fm, Modulation::Afm];

    /// Whether the amplitude envelope and its normalization are applied
    pub fn modulates_amplitude(self) -> bool {
        matches!(self, Modulation::Am | Modulation::Afm)
    }

    /// Whether the carrier phase is deviated by the FM term
    pub fn modulates_phase(self) -> bool {
        matches!(self, Modulation::Fm | Modulation::Afm)
    }

    /// Index used by the C and wasm bindings (0 = AM, 1 = FM, 2 = AFM)
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Modulation::Am),
            1 => Some(Modulation::Fm),
            2 => Some(Modulation::Afm),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Modulation::Am => 0,
            Modulation::Fm => 1,
            Modulation::Afm => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Modulation::Am => "am",
            Modulation::Fm => "fm",
            Modulation::Afm => "afm",
        }
    }
}

impl std::fmt::Display for Modulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
