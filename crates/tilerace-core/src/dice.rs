//! Die rolls.
//!
//! [`Die`] is the seam for the random source so the roll transaction can
//! be driven deterministically in tests.

use std::fmt;

use rand::Rng;

/// A source of die values.
pub trait Die: Send {
    /// Produce the next roll, in `1..=faces` for a fair die.
    fn roll(&mut self) -> u32;
}

/// A fair die backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadDie {
    faces: u32,
}

impl ThreadDie {
    /// A fair die with `faces` sides. Zero is treated as one.
    pub fn new(faces: u32) -> Self {
        Self {
            faces: faces.max(1),
        }
    }

    /// Number of faces.
    pub const fn faces(&self) -> u32 {
        self.faces
    }
}

impl Default for ThreadDie {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Die for ThreadDie {
    fn roll(&mut self) -> u32 {
        rand::rng().random_range(1..=self.faces)
    }
}

/// A die that replays a fixed sequence, cycling forever.
///
/// An empty script always rolls 1.
#[derive(Clone)]
pub struct ScriptedDie {
    rolls: std::iter::Cycle<std::vec::IntoIter<u32>>,
}

impl ScriptedDie {
    /// Replay `rolls` in order, starting over at the end.
    pub fn new(rolls: Vec<u32>) -> Self {
        Self {
            rolls: rolls.into_iter().cycle(),
        }
    }
}

impl fmt::Debug for ScriptedDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedDie").finish_non_exhaustive()
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u32 {
        self.rolls.next().unwrap_or(1)
    }
}
