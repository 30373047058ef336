//! Chord progression generation from scale-degree patterns

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;
use crate::random::RandomSource;
use crate::scale::{build_scale, Scale, ScaleFamily};

// ============================================================================
// Patterns
// ============================================================================

const MAJOR_PATTERNS: &[&[usize]] = &[
    &[0, 4, 5, 3], // I-V-vi-IV
    &[1, 4, 0],    // ii-V-I
    &[5, 3, 0, 4], // vi-IV-I-V
    &[0, 3, 4],    // I-IV-V
];

const HARMONIC_MINOR_PATTERNS: &[&[usize]] = &[
    &[0, 5, 2, 6], // i-VI-III-VII
    &[0, 3, 4],    // i-iv-v
    &[5, 6, 0],    // VI-VII-i
];

/// Chord counts offered by the "surprise me" action
pub const COUNT_CHOICES: [usize; 7] = [2, 3, 4, 5, 6, 7, 8];

/// Degree patterns a progression is drawn from.
///
/// Chromatic shares the Major set.
pub fn patterns(family: ScaleFamily) -> &'static [&'static [usize]] {
    match family {
        ScaleFamily::HarmonicMinor => HARMONIC_MINOR_PATTERNS,
        ScaleFamily::Major | ScaleFamily::Chromatic => MAJOR_PATTERNS,
    }
}

// ============================================================================
// Chords
// ============================================================================

/// One slot of a progression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Roman numeral for the degree, e.g. "vi" or "vii°"
    pub roman: String,
    /// Root spelling plus quality suffix, e.g. "Am"
    pub name: String,
}

/// Build `count` chords by cycling through `pattern`.
///
/// Degrees are reduced mod 7. An empty pattern yields no chords.
pub fn progression_from_pattern(scale: &Scale, pattern: &[usize], count: usize) -> Vec<Chord> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let degrees = scale.family().degrees();
    (0..count)
        .map(|i| {
            let degree = pattern[i % pattern.len()] % 7;
            let def = degrees[degree];
            Chord {
                roman: def.roman.to_string(),
                name: format!("{}{}", scale.degree(degree), def.quality.suffix()),
            }
        })
        .collect()
}

/// Generate a progression of `count` chords in the given key.
///
/// The pattern is chosen uniformly from the family's set using `rng`, so
/// repeated calls with the same inputs may differ. An unrecognized root or a
/// zero count yields an empty progression.
pub fn generate<R: RandomSource>(
    root: &str,
    family: ScaleFamily,
    count: usize,
    rng: &mut R,
) -> Vec<Chord> {
    if count == 0 {
        return Vec::new();
    }
    let Some(scale) = build_scale(root, family) else {
        return Vec::new();
    };

    let set = patterns(family);
    let pattern = set[rng.pick(set.len())];
    tracing::debug!(root, %family, count, ?pattern, "Progression pattern selected");

    progression_from_pattern(&scale, pattern, count)
}

// ============================================================================
// Requests
// ============================================================================

/// Key, family and length for one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRequest {
    pub root: String,
    pub family: ScaleFamily,
    pub count: usize,
}

impl Default for ProgressionRequest {
    fn default() -> Self {
        Self {
            root: PitchClass::C.name().to_string(),
            family: ScaleFamily::Major,
            count: COUNT_CHOICES[2],
        }
    }
}

impl ProgressionRequest {
    pub fn new(root: &str, family: ScaleFamily, count: usize) -> Self {
        Self {
            root: root.to_string(),
            family,
            count,
        }
    }

    /// Random key, family and count.
    ///
    /// Only Major and HarmonicMinor are drawn; Chromatic is never picked.
    pub fn surprise<R: RandomSource>(rng: &mut R) -> Self {
        let root = PitchClass::ALL[rng.pick(PitchClass::ALL.len())];
        let family = [ScaleFamily::Major, ScaleFamily::HarmonicMinor][rng.pick(2)];
        let count = COUNT_CHOICES[rng.pick(COUNT_CHOICES.len())];
        Self::new(root.name(), family, count)
    }

    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Vec<Chord> {
        generate(&self.root, self.family, self.count, rng)
    }
}
