//! Plain-text output for progressions and chord diagrams

use std::fmt::Write;

use unwound_core::{ChordDiagram, Chord, FingeringPosition, KeyPosition, Positions};

const SEPARATOR: &str = "  –  ";
const WHITE_KEYS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Roman numeral line followed by chord name line
pub(crate) fn progression(chords: &[Chord]) -> String {
    if chords.is_empty() {
        return "—\nNo chords generated\n".to_string();
    }

    let romans: Vec<_> = chords.iter().map(|c| c.roman.as_str()).collect();
    let names: Vec<_> = chords.iter().map(|c| c.name.as_str()).collect();
    format!("{}\n{}\n", romans.join(SEPARATOR), names.join(SEPARATOR))
}

pub(crate) fn diagram(diagram: &ChordDiagram) -> String {
    let mut out = format!("{} ({})", diagram.chord, diagram.instrument);
    if let Some(fret) = diagram.base_fret {
        let _ = write!(out, " fret {fret}");
    }
    out.push('\n');

    match &diagram.positions {
        Positions::Fretted(positions) => {
            let courses = diagram.instrument.courses().unwrap_or(4);
            out.push_str(&fretboard(positions, courses));
        }
        Positions::Keys(keys) => {
            out.push_str(&keyboard(keys));
        }
    }
    out
}

/// One row per fret, one column per course; `o` marks a finger
fn fretboard(positions: &[FingeringPosition], courses: u8) -> String {
    let low = positions.iter().map(|p| p.fret).min().unwrap_or(0).min(0);
    let high = positions.iter().map(|p| p.fret).max().unwrap_or(0).max(4);

    let mut out = String::new();
    for fret in low..=high {
        let _ = write!(out, "{fret:>3} ");
        for course in 0..courses {
            let marked = positions.iter().any(|p| p.course == course && p.fret == fret);
            out.push_str(if marked { " o" } else { " |" });
        }
        out.push('\n');
    }
    out
}

fn key_name(key: &KeyPosition) -> String {
    let white = WHITE_KEYS[(key.offset.floor() as usize) % WHITE_KEYS.len()];
    if key.is_raised() {
        format!("{white}#")
    } else {
        white.to_string()
    }
}

fn keyboard(keys: &[KeyPosition]) -> String {
    let names: Vec<_> = keys.iter().map(key_name).collect();
    format!("  keys: {}\n", names.join(" "))
}
