//! Four-string bass root positions
//!
//! Courses run G (0), D (1), A (2), E (3). Only the root is fingered, so
//! chord quality does not change the shape.

use super::ChordName;

const FALLBACK: [(u8, i8); 1] = [(2, 3)];

pub(super) fn positions(chord: &ChordName) -> &'static [(u8, i8)] {
    match chord.base.as_str() {
        "C" => &[(2, 3)],
        "C#" | "Db" => &[(2, 4)],
        "D" => &[(1, 0)],
        "D#" | "Eb" => &[(2, 2)],
        "E" => &[(3, 0), (1, 2)],
        "F" => &[(3, 1), (1, 3)],
        "F#" | "Gb" => &[(3, 2), (1, 4)],
        "G" => &[(3, 3)],
        "G#" | "Ab" | "A#" | "Bb" => &[(3, 2)],
        "A" => &[(2, 0)],
        "B" => &[(2, 2), (0, 4)],
        _ => {
            tracing::trace!(base = %chord.base, "No bass position, using fallback");
            &FALLBACK
        }
    }
}
