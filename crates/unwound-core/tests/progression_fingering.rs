//! End-to-end checks from key selection through to diagram positions

use unwound_core::{
    base_fret, build_scale, chord_diagram, generate, patterns, resolve_positions,
    ChordName, Instrument, PitchClass, Positions, ScaleFamily, ScriptedPicks,
};

#[test]
fn test_c_major_golden_progression() {
    let chords = generate("C", ScaleFamily::Major, 4, &mut ScriptedPicks::new([0]));
    let names: Vec<_> = chords.iter().map(|c| c.name.as_str()).collect();
    let romans: Vec<_> = chords.iter().map(|c| c.roman.as_str()).collect();
    assert_eq!(names, ["C", "G", "Am", "F"]);
    assert_eq!(romans, ["I", "V", "vi", "IV"]);
}

#[test]
fn test_names_decompose_to_degree_root() {
    for family in [ScaleFamily::Major, ScaleFamily::HarmonicMinor] {
        for root in PitchClass::ALL {
            let scale = build_scale(root.name(), family).unwrap();
            for pick in 0..patterns(family).len() {
                let pattern = patterns(family)[pick];
                let chords = generate(root.name(), family, 8, &mut ScriptedPicks::new([pick]));
                assert_eq!(chords.len(), 8);
                for (i, chord) in chords.iter().enumerate() {
                    let degree = pattern[i % pattern.len()];
                    assert_eq!(
                        ChordName::parse(&chord.name).base,
                        scale.degree(degree).name(),
                        "{} in {root} {family}",
                        chord.name
                    );
                }
            }
        }
    }
}

#[test]
fn test_every_generated_chord_resolves() {
    let mut rng = fastrand::Rng::with_seed(2024);
    for family in ScaleFamily::ALL {
        for root in PitchClass::ALL {
            for chord in generate(root.name(), family, 6, &mut rng) {
                for instrument in Instrument::ALL {
                    assert!(!resolve_positions(&chord.name, instrument).is_empty());
                }
            }
        }
    }
}

#[test]
fn test_a_minor_guitar_fixture() {
    let Positions::Fretted(positions) = resolve_positions("Am", Instrument::FrettedSix) else {
        panic!("guitar should return fretted positions");
    };
    let courses: Vec<_> = positions.iter().map(|p| p.course).collect();
    let frets: Vec<_> = positions.iter().map(|p| p.fret).collect();
    assert_eq!(courses, [1, 2, 3, 4]);
    assert_eq!(frets, [1, 2, 2, 0]);
}

#[test]
fn test_base_fret_scenarios() {
    assert_eq!(base_fret("C#"), 4);
    assert_eq!(base_fret("C"), 0);
    for root in PitchClass::ALL {
        assert!([0, 4, 6].contains(&base_fret(root.name())));
    }
}

#[test]
fn test_diagram_serializes_for_renderer() {
    let diagram = chord_diagram("Db", Instrument::FrettedSix);
    let json = serde_json::to_value(&diagram).unwrap();
    assert_eq!(json["chord"], "Db");
    assert_eq!(json["instrument"], "FrettedSix");
    assert_eq!(json["base_fret"], 4);
    assert_eq!(json["positions"]["kind"], "fretted");
    assert_eq!(json["positions"]["items"][0]["course"], 0);
    assert_eq!(json["positions"]["items"][0]["fret"], 2);

    let keys = serde_json::to_value(chord_diagram("F#", Instrument::Keyboard)).unwrap();
    assert_eq!(keys["positions"]["kind"], "keys");
    assert_eq!(keys["positions"]["items"][2]["offset"], 0.5);
    assert!(keys["base_fret"].is_null());
}
