//! Violin stops
//!
//! Courses run G (0), D (1), A (2), E (3). Each position line is roughly a
//! whole step; -1 marks an open string above the first line.

use super::ChordName;

const FALLBACK: [(u8, i8); 2] = [(1, 1), (2, 2)];

pub(super) fn positions(chord: &ChordName) -> &'static [(u8, i8)] {
    match (chord.base.as_str(), chord.is_minor) {
        ("C", false) => &[(1, 1), (2, 2), (3, 2)],
        ("C", true) => &[(1, 0), (2, 2), (3, 2)],
        ("C#" | "Db", false) => &[(1, 2), (2, 3), (3, 3)],
        ("C#" | "Db", true) => &[(1, 1), (2, 3), (3, 3)],
        ("D", false) => &[(1, -1), (2, -1), (3, 1)],
        ("D", true) => &[(1, -1), (2, -1), (3, 0)],
        ("D#" | "Eb", false) => &[(0, -1), (1, 0), (2, 0), (3, 2)],
        ("D#" | "Eb", true) => &[(1, 0), (2, 0), (3, 1)],
        ("E", false) => &[(1, 1), (2, 1), (3, 3)],
        ("E", true) => &[(1, 1), (2, 1), (3, 2)],
        ("F", false) => &[(0, 1), (1, 2), (2, 2), (3, 4)],
        ("F", true) => &[(0, 0), (1, 2), (2, 2), (3, 3)],
        ("F#" | "Gb", false) => &[(0, 2), (1, 3), (2, 3), (3, 4)],
        ("F#" | "Gb", true) => &[(0, 1), (1, 3), (2, 3), (3, 4)],
        ("G", false) => &[(0, -1), (1, -1), (2, 1), (3, 2)],
        ("G", true) => &[(0, -1), (1, -1), (2, 0), (3, 2)],
        ("G#" | "Ab", false) => &[(0, 0), (1, 0), (2, 2), (3, 3)],
        ("G#" | "Ab", true) => &[(0, 0), (1, 0), (2, 1), (3, 3)],
        ("A", false) => &[(0, 1), (1, 1), (2, 3), (3, 4)],
        ("A", true) => &[(0, 1), (1, 1), (2, 2), (3, 4)],
        ("A#" | "Bb", false) => &[(0, 2), (1, 2), (2, 4)],
        ("A#" | "Bb", true) => &[(0, 2), (1, 2), (2, 3)],
        ("B", false) => &[(0, 3), (1, 0), (2, 1)],
        ("B", true) => &[(0, 3), (1, -1), (2, 1), (3, 1)],
        _ => {
            tracing::trace!(base = %chord.base, "No violin stop, using fallback");
            &FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_strings_below_nut() {
        let d = positions(&ChordName::parse("D"));
        assert_eq!(d, [(1, -1), (2, -1), (3, 1)]);
        assert!(positions(&ChordName::parse("Gm")).iter().any(|&(_, fret)| fret < 0));
    }

    #[test]
    fn test_courses_in_range() {
        for base in ["C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"] {
            for name in [base.to_string(), format!("{base}m")] {
                for &(course, _) in positions(&ChordName::parse(&name)) {
                    assert!(course < 4, "{name}");
                }
            }
        }
    }

    type Row = (&'static [&'static str], &'static [(u8, i8)], &'static [(u8, i8)]);

    // (spellings, major, minor)
    const STOPS: [Row; 12] = [
        (&["C"], &[(1, 1), (2, 2), (3, 2)], &[(1, 0), (2, 2), (3, 2)]),
        (&["C#", "Db"], &[(1, 2), (2, 3), (3, 3)], &[(1, 1), (2, 3), (3, 3)]),
        (&["D"], &[(1, -1), (2, -1), (3, 1)], &[(1, -1), (2, -1), (3, 0)]),
        (&["D#", "Eb"], &[(0, -1), (1, 0), (2, 0), (3, 2)], &[(1, 0), (2, 0), (3, 1)]),
        (&["E"], &[(1, 1), (2, 1), (3, 3)], &[(1, 1), (2, 1), (3, 2)]),
        (&["F"], &[(0, 1), (1, 2), (2, 2), (3, 4)], &[(0, 0), (1, 2), (2, 2), (3, 3)]),
        (&["F#", "Gb"], &[(0, 2), (1, 3), (2, 3), (3, 4)], &[(0, 1), (1, 3), (2, 3), (3, 4)]),
        (&["G"], &[(0, -1), (1, -1), (2, 1), (3, 2)], &[(0, -1), (1, -1), (2, 0), (3, 2)]),
        (&["G#", "Ab"], &[(0, 0), (1, 0), (2, 2), (3, 3)], &[(0, 0), (1, 0), (2, 1), (3, 3)]),
        (&["A"], &[(0, 1), (1, 1), (2, 3), (3, 4)], &[(0, 1), (1, 1), (2, 2), (3, 4)]),
        (&["A#", "Bb"], &[(0, 2), (1, 2), (2, 4)], &[(0, 2), (1, 2), (2, 3)]),
        (&["B"], &[(0, 3), (1, 0), (2, 1)], &[(0, 3), (1, -1), (2, 1), (3, 1)]),
    ];

    #[test]
    fn test_every_root_and_quality() {
        for (spellings, major, minor) in STOPS {
            for root in spellings {
                assert_eq!(positions(&ChordName::parse(root)), major, "{root}");
                assert_eq!(positions(&ChordName::parse(&format!("{root}m"))), minor, "{root}m");
            }
        }
    }
}
