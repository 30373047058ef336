//! Fixed 12-tone chromatic naming and enharmonic normalization

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnwoundError};

/// One of the 12 canonical note spellings.
///
/// Spelling is fixed and not key-aware: the table mixes sharps and flats
/// (C#, Eb, F#, Ab, Bb), so some keys come out with non-traditional names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "Bb")]
    BFlat,
    #[serde(rename = "B")]
    B,
}

/// Alternate root spellings accepted on input, with their canonical class.
const ENHARMONICS: [(&str, PitchClass); 2] = [
    ("Db", PitchClass::CSharp),
    ("Gb", PitchClass::FSharp),
];

impl PitchClass {
    /// All 12 classes in circular order, starting from C.
    pub const ALL: [PitchClass; 12] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::EFlat,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::AFlat,
        Self::A,
        Self::BFlat,
        Self::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::EFlat => "Eb",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::AFlat => "Ab",
            Self::A => "A",
            Self::BFlat => "Bb",
            Self::B => "B",
        }
    }

    /// Position in the circular order (C = 0)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Class at `index` mod 12
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Move up by `semitones`, wrapping around the octave
    pub fn transpose(&self, semitones: u8) -> Self {
        Self::from_index(self.index() as usize + semitones as usize)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = UnwoundError;

    fn from_str(s: &str) -> Result<Self> {
        normalize(s)
    }
}

/// Resolve a root spelling to its canonical class.
///
/// The enharmonic table is consulted first, then the 12 canonical names.
/// Matching is exact; there is no trimming or case folding.
pub fn normalize(root: &str) -> Result<PitchClass> {
    if let Some(&(_, pitch)) = ENHARMONICS.iter().find(|(alt, _)| *alt == root) {
        return Ok(pitch);
    }

    PitchClass::ALL
        .iter()
        .copied()
        .find(|p| p.name() == root)
        .ok_or_else(|| UnwoundError::UnknownPitch(root.to_string()))
}

/// Ascending distance from `a` up to `b`, in semitones (0..=11)
pub fn interval(a: PitchClass, b: PitchClass) -> u8 {
    (b.index() + 12 - a.index()) % 12
}
