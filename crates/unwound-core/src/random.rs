//! Injected randomness for progression selection

/// Source of uniform choices.
///
/// The generator never reaches for ambient randomness; callers pass one of
/// these in, so a seeded or scripted source gives reproducible output.
pub trait RandomSource {
    /// Index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn pick(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

/// Replays a fixed list of picks, cycling when exhausted.
///
/// Each value is reduced mod `len`, so a script written for one list size
/// stays in range for another. An empty script always picks 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicks {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicks {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedPicks {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        value % len
    }
}
