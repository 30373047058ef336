//! One-octave keyboard triads
//!
//! Offsets count white keys from C (0) to B (6). Tones above B wrap to the
//! left edge of the same octave rather than extending the diagram.

use super::ChordName;

const FALLBACK: [f64; 3] = [0.0, 2.0, 4.0];

pub(super) fn keys(chord: &ChordName) -> &'static [f64] {
    match (chord.base.as_str(), chord.is_minor) {
        ("C", false) => &[0.0, 2.0, 4.0],
        ("C", true) => &[0.0, 1.5, 4.0],
        ("C#" | "Db", false) => &[0.5, 3.0, 4.5],
        ("C#" | "Db", true) => &[0.5, 2.0, 4.5],
        ("D", false) => &[1.0, 3.5, 5.0],
        ("D", true) => &[1.0, 3.0, 5.0],
        ("D#" | "Eb", false) => &[1.5, 4.0, 5.5],
        ("D#" | "Eb", true) => &[1.5, 3.5, 5.5],
        ("E", false) => &[2.0, 4.5, 6.0],
        ("E", true) => &[2.0, 4.0, 6.0],
        ("F", false) => &[3.0, 5.0, 0.0],
        ("F", true) => &[3.0, 4.5, 0.0],
        ("F#" | "Gb", false) => &[3.5, 5.5, 0.5],
        ("F#" | "Gb", true) => &[3.5, 5.0, 0.5],
        ("G", false) => &[4.0, 6.0, 1.0],
        ("G", true) => &[4.0, 5.5, 1.0],
        ("G#" | "Ab", false) => &[4.5, 0.0, 1.5],
        ("G#" | "Ab", true) => &[4.5, 6.0, 1.5],
        ("A", false) => &[0.5, 3.0, 5.0],
        ("A", true) => &[0.0, 3.0, 5.0],
        ("A#" | "Bb", false) => &[1.0, 3.5, 5.5],
        ("A#" | "Bb", true) => &[0.5, 3.0, 5.5],
        ("B", false) => &[6.0, 1.5, 3.0],
        ("B", true) => &[6.0, 1.0, 3.0],
        _ => {
            tracing::trace!(base = %chord.base, "No keyboard triad, using fallback");
            &FALLBACK
        }
    }
}
