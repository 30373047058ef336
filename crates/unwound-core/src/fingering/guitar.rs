//! Six-string guitar shapes
//!
//! Courses run low E (0), A (1), D (2), G (3), B (4), high E (5).

use super::ChordName;

// Movable barre shapes, drawn relative to their own nut and labeled with
// `base_fret` by the renderer
const A_SHAPE_MAJOR: [(u8, i8); 5] = [(0, 2), (1, 4), (2, 4), (3, 4), (4, 2)];
const A_SHAPE_MINOR: [(u8, i8); 5] = [(0, 2), (1, 3), (2, 4), (3, 4), (4, 2)];
const E_SHAPE_MAJOR: [(u8, i8); 6] = [(0, 2), (1, 2), (2, 3), (3, 4), (4, 4), (5, 2)];
const E_SHAPE_MINOR: [(u8, i8); 6] = [(0, 2), (1, 2), (2, 2), (3, 4), (4, 4), (5, 2)];

const FALLBACK: [(u8, i8); 3] = [(2, 1), (3, 2), (4, 2)];

pub(super) fn positions(chord: &ChordName) -> &'static [(u8, i8)] {
    match (chord.base.as_str(), chord.is_minor) {
        ("C", false) => &[(1, 1), (2, 0), (3, 2), (4, 3)],
        ("C" | "C#" | "Db" | "D#" | "Eb" | "B", true) => &A_SHAPE_MINOR,
        ("C#" | "Db" | "D#" | "Eb" | "B", false) => &A_SHAPE_MAJOR,

        ("D", false) => &[(0, 2), (1, 3), (2, 2), (3, 0)],
        ("D", true) => &[(0, 1), (1, 3), (2, 2), (3, 0)],

        ("E", false) => &[(2, 1), (3, 2), (4, 2), (5, 0)],
        ("E", true) => &[(2, 0), (3, 2), (4, 2), (5, 0)],

        ("F", false) => &[(0, 1), (1, 1), (2, 2), (3, 3), (4, 3), (5, 1)],
        ("F", true) => &[(0, 1), (1, 1), (2, 1), (3, 3), (4, 3), (5, 1)],

        ("G", false) => &[(0, 3), (1, 0), (2, 0), (3, 0), (4, 2), (5, 3)],
        ("F#" | "Gb" | "G" | "G#" | "Ab" | "A#" | "Bb", true) => &E_SHAPE_MINOR,
        ("F#" | "Gb" | "G#" | "Ab" | "A#" | "Bb", false) => &E_SHAPE_MAJOR,

        ("A", false) => &[(1, 2), (2, 2), (3, 2), (4, 0)],
        ("A", true) => &[(1, 1), (2, 2), (3, 2), (4, 0)],

        _ => {
            tracing::trace!(base = %chord.base, "No guitar shape, using fallback");
            &FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> &'static [(u8, i8)] {
        positions(&ChordName::parse(name))
    }

    #[test]
    fn test_open_shapes() {
        assert_eq!(lookup("C"), [(1, 1), (2, 0), (3, 2), (4, 3)]);
        assert_eq!(lookup("Em"), [(2, 0), (3, 2), (4, 2), (5, 0)]);
        assert_eq!(lookup("G"), [(0, 3), (1, 0), (2, 0), (3, 0), (4, 2), (5, 3)]);
    }

    #[test]
    fn test_barre_shapes() {
        assert_eq!(lookup("Bm"), A_SHAPE_MINOR);
        assert_eq!(lookup("Eb"), A_SHAPE_MAJOR);
        assert_eq!(lookup("F#m"), E_SHAPE_MINOR);
        assert_eq!(lookup("Bb"), E_SHAPE_MAJOR);
    }

    #[test]
    fn test_g_minor_uses_barre() {
        assert_eq!(lookup("Gm"), E_SHAPE_MINOR);
    }

    #[test]
    fn test_diminished_uses_major_shape() {
        assert_eq!(lookup("B°"), A_SHAPE_MAJOR);
    }

    type Row = (&'static [&'static str], &'static [(u8, i8)], &'static [(u8, i8)]);

    // (spellings, major, minor)
    const SHAPES: [Row; 12] = [
        (&["C"], &[(1, 1), (2, 0), (3, 2), (4, 3)], &A_SHAPE_MINOR),
        (&["C#", "Db"], &A_SHAPE_MAJOR, &A_SHAPE_MINOR),
        (&["D"], &[(0, 2), (1, 3), (2, 2), (3, 0)], &[(0, 1), (1, 3), (2, 2), (3, 0)]),
        (&["D#", "Eb"], &A_SHAPE_MAJOR, &A_SHAPE_MINOR),
        (&["E"], &[(2, 1), (3, 2), (4, 2), (5, 0)], &[(2, 0), (3, 2), (4, 2), (5, 0)]),
        (
            &["F"],
            &[(0, 1), (1, 1), (2, 2), (3, 3), (4, 3), (5, 1)],
            &[(0, 1), (1, 1), (2, 1), (3, 3), (4, 3), (5, 1)],
        ),
        (&["F#", "Gb"], &E_SHAPE_MAJOR, &E_SHAPE_MINOR),
        (&["G"], &[(0, 3), (1, 0), (2, 0), (3, 0), (4, 2), (5, 3)], &E_SHAPE_MINOR),
        (&["G#", "Ab"], &E_SHAPE_MAJOR, &E_SHAPE_MINOR),
        (&["A"], &[(1, 2), (2, 2), (3, 2), (4, 0)], &[(1, 1), (2, 2), (3, 2), (4, 0)]),
        (&["A#", "Bb"], &E_SHAPE_MAJOR, &E_SHAPE_MINOR),
        (&["B"], &A_SHAPE_MAJOR, &A_SHAPE_MINOR),
    ];

    #[test]
    fn test_every_root_and_quality() {
        for (spellings, major, minor) in SHAPES {
            for root in spellings {
                assert_eq!(lookup(root), major, "{root}");
                assert_eq!(lookup(&format!("{root}m")), minor, "{root}m");
            }
        }
    }
}
