//! unwound-core: Chord progressions and instrument fingerings

mod error;
pub mod fingering;
pub mod pitch;
pub mod progression;
pub mod random;
pub mod scale;

pub use error::{Result, UnwoundError};
pub use fingering::{
    base_fret, chord_diagram, resolve_positions,
    ChordDiagram, ChordName, FingeringPosition, Instrument, KeyPosition, Positions,
};
pub use pitch::{interval, normalize, PitchClass};
pub use progression::{
    generate, patterns, progression_from_pattern,
    Chord, ProgressionRequest, COUNT_CHOICES,
};
pub use random::{RandomSource, ScriptedPicks};
pub use scale::{build_scale, Degree, Quality, Scale, ScaleFamily};
