//! Diatonic scale construction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnwoundError};
use crate::pitch::{normalize, PitchClass};

// ============================================================================
// Scale Families
// ============================================================================

/// Scale families offered to the user.
///
/// `Chromatic` is accepted but has no tables of its own: it builds and
/// progresses exactly like `Major`. This is a known limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleFamily {
    #[default]
    Major,
    HarmonicMinor,
    Chromatic,
}

const MAJOR_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
const HARMONIC_MINOR_INTERVALS: [u8; 7] = [0, 2, 3, 5, 7, 8, 11];

const MAJOR_DEGREES: [Degree; 7] = [
    Degree::new("I", Quality::Major),
    Degree::new("ii", Quality::Minor),
    Degree::new("iii", Quality::Minor),
    Degree::new("IV", Quality::Major),
    Degree::new("V", Quality::Major),
    Degree::new("vi", Quality::Minor),
    Degree::new("vii°", Quality::Diminished),
];

const HARMONIC_MINOR_DEGREES: [Degree; 7] = [
    Degree::new("i", Quality::Minor),
    Degree::new("ii°", Quality::Diminished),
    Degree::new("III", Quality::Major),
    Degree::new("iv", Quality::Minor),
    Degree::new("v", Quality::Minor),
    Degree::new("VI", Quality::Major),
    Degree::new("VII", Quality::Major),
];

impl ScaleFamily {
    pub const ALL: [ScaleFamily; 3] = [Self::Major, Self::HarmonicMinor, Self::Chromatic];

    /// Semitone offsets from the root for degrees 0..6
    pub fn intervals(&self) -> &'static [u8; 7] {
        match self {
            Self::HarmonicMinor => &HARMONIC_MINOR_INTERVALS,
            Self::Major | Self::Chromatic => &MAJOR_INTERVALS,
        }
    }

    /// Roman numeral and triad quality for each degree, independent of root
    pub fn degrees(&self) -> &'static [Degree; 7] {
        match self {
            Self::HarmonicMinor => &HARMONIC_MINOR_DEGREES,
            Self::Major | Self::Chromatic => &MAJOR_DEGREES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::HarmonicMinor => "Minor",
            Self::Chromatic => "Chromatic",
        }
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleFamily {
    type Err = UnwoundError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" | "harmonicminor" | "harmonic minor" | "harmonic-minor" => {
                Ok(Self::HarmonicMinor)
            }
            "chromatic" => Ok(Self::Chromatic),
            _ => Err(UnwoundError::UnknownScaleFamily(s.to_string())),
        }
    }
}

// ============================================================================
// Degrees
// ============================================================================

/// Triad quality of a scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    /// Suffix appended to the root spelling in a chord name
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Diminished => "°",
        }
    }
}

/// One entry of a family's degree table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub roman: &'static str,
    pub quality: Quality,
}

impl Degree {
    const fn new(roman: &'static str, quality: Quality) -> Self {
        Self { roman, quality }
    }
}

// ============================================================================
// Scale
// ============================================================================

/// A 7-note scale, indexed by degree 0..6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    family: ScaleFamily,
    notes: [PitchClass; 7],
}

impl Scale {
    pub fn new(root: PitchClass, family: ScaleFamily) -> Self {
        let notes = family.intervals().map(|interval| root.transpose(interval));
        Self { family, notes }
    }

    pub fn root(&self) -> PitchClass {
        self.notes[0]
    }

    pub fn family(&self) -> ScaleFamily {
        self.family
    }

    pub fn notes(&self) -> &[PitchClass; 7] {
        &self.notes
    }

    /// Pitch at `degree`, reduced mod 7
    pub fn degree(&self, degree: usize) -> PitchClass {
        self.notes[degree % 7]
    }
}

/// Build the scale for a root spelling.
///
/// Returns `None` when the root is not a recognized spelling; callers treat
/// that as "nothing to generate".
pub fn build_scale(root: &str, family: ScaleFamily) -> Option<Scale> {
    match normalize(root) {
        Ok(pitch) => Some(Scale::new(pitch, family)),
        Err(err) => {
            tracing::debug!(root, %err, "Scale root rejected");
            None
        }
    }
}
