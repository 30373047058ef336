//! Per-instrument fingering and keying positions for chord names
//!
//! Each instrument owns one hand-authored table keyed by the chord's base
//! spelling and minor flag. Lookups are total: a base the table does not list
//! gets that table's fallback shape.

mod bass;
mod guitar;
mod piano;
mod violin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnwoundError};

// ============================================================================
// Instruments
// ============================================================================

/// Instruments with a position table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Instrument {
    /// Six-string guitar
    #[default]
    FrettedSix,
    /// Four-string bass
    FrettedFour,
    /// Violin
    BowedFour,
    /// Piano, one octave
    Keyboard,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Self::FrettedSix,
        Self::FrettedFour,
        Self::BowedFour,
        Self::Keyboard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FrettedSix => "Guitar",
            Self::FrettedFour => "Bass",
            Self::BowedFour => "Violin",
            Self::Keyboard => "Piano",
        }
    }

    /// Number of courses drawn in the diagram; `None` for the keyboard
    pub fn courses(&self) -> Option<u8> {
        match self {
            Self::FrettedSix => Some(6),
            Self::FrettedFour | Self::BowedFour => Some(4),
            Self::Keyboard => None,
        }
    }

    /// Whether diagrams for this instrument carry a base-fret label
    pub fn shows_base_fret(&self) -> bool {
        matches!(self, Self::FrettedSix | Self::FrettedFour)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = UnwoundError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guitar" | "frettedsix" => Ok(Self::FrettedSix),
            "bass" | "frettedfour" => Ok(Self::FrettedFour),
            "violin" | "bowedfour" => Ok(Self::BowedFour),
            "piano" | "keyboard" => Ok(Self::Keyboard),
            _ => Err(UnwoundError::UnknownInstrument(s.to_string())),
        }
    }
}

// ============================================================================
// Chord names
// ============================================================================

/// A chord name split into the table key and its minor flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordName {
    /// Name with every "m" and "°" removed
    pub base: String,
    /// Contains "m" but not "maj"
    pub is_minor: bool,
}

impl ChordName {
    pub fn parse(name: &str) -> Self {
        Self {
            base: name.replace('m', "").replace('°', ""),
            is_minor: name.contains('m') && !name.contains("maj"),
        }
    }
}

// ============================================================================
// Positions
// ============================================================================

/// A finger on one course of a fretted or bowed instrument.
///
/// Frets are relative to the shape's own nut. The violin table uses -1 for
/// an open string drawn above the first position line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingeringPosition {
    pub course: u8,
    pub fret: i8,
}

/// A key on the one-octave keyboard diagram.
///
/// White keys sit on whole numbers 0..=6; a `.5` offset is the raised key to
/// the right of that white key. Upper chord tones past the octave wrap back
/// toward 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPosition {
    pub offset: f64,
}

impl KeyPosition {
    pub fn is_raised(&self) -> bool {
        self.offset.fract() == 0.5
    }
}

/// Ordered positions for one chord on one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Positions {
    Fretted(Vec<FingeringPosition>),
    Keys(Vec<KeyPosition>),
}

impl Positions {
    fn fretted(table: &[(u8, i8)]) -> Self {
        Self::Fretted(
            table
                .iter()
                .map(|&(course, fret)| FingeringPosition { course, fret })
                .collect(),
        )
    }

    fn keys(table: &[f64]) -> Self {
        Self::Keys(table.iter().map(|&offset| KeyPosition { offset }).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fretted(p) => p.len(),
            Self::Keys(k) => k.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a chord name to positions on `instrument`.
///
/// Never fails: unknown names resolve to the instrument's fallback shape.
pub fn resolve_positions(chord_name: &str, instrument: Instrument) -> Positions {
    let chord = ChordName::parse(chord_name);
    match instrument {
        Instrument::FrettedSix => Positions::fretted(guitar::positions(&chord)),
        Instrument::FrettedFour => Positions::fretted(bass::positions(&chord)),
        Instrument::BowedFour => Positions::fretted(violin::positions(&chord)),
        Instrument::Keyboard => Positions::keys(piano::keys(&chord)),
    }
}

/// Fret label for movable shapes on guitar and bass; 0 means no label.
///
/// This is a display label only. The returned positions are already
/// expressed relative to the shape.
pub fn base_fret(chord_name: &str) -> u8 {
    match ChordName::parse(chord_name).base.as_str() {
        "C#" | "Db" | "G#" | "Ab" => 4,
        "D#" | "Eb" | "A#" | "Bb" => 6,
        _ => 0,
    }
}

// ============================================================================
// Diagrams
// ============================================================================

/// Everything a renderer needs to draw one chord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordDiagram {
    pub chord: String,
    pub instrument: Instrument,
    pub positions: Positions,
    /// Set only for guitar and bass when the shape needs a fret label
    pub base_fret: Option<u8>,
}

pub fn chord_diagram(chord_name: &str, instrument: Instrument) -> ChordDiagram {
    let base_fret = if instrument.shows_base_fret() {
        Some(base_fret(chord_name)).filter(|&fret| fret > 0)
    } else {
        None
    };

    ChordDiagram {
        chord: chord_name.to_string(),
        instrument,
        positions: resolve_positions(chord_name, instrument),
        base_fret,
    }
}
