//! Deterministic die source for tests and replays.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::DieSource;
use crate::error::{MechError, MechResult};

/// Returns faces from a fixed script, in order.
///
/// Unlike a cycling fixture, running past the end of the script is an
/// error: a test that draws more dice than it scripted should fail loudly.
/// The cursor is atomic, so a scripted source can be shared across threads;
/// [`DieSource::draw_pair`] claims two consecutive faces in one step.
#[derive(Debug)]
pub struct ScriptedDieSource {
    faces: Vec<u32>,
    cursor: AtomicUsize,
}

impl ScriptedDieSource {
    /// Create a source that yields `faces` in order.
    pub fn new(faces: Vec<u32>) -> Self {
        Self {
            faces,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Create a source scripted as `(hope, fear)` pairs.
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Self {
        Self::new(
            pairs
                .iter()
                .flat_map(|&(hope, fear)| [hope, fear])
                .collect(),
        )
    }

    /// Number of faces not yet drawn.
    pub fn remaining(&self) -> usize {
        self.faces
            .len()
            .saturating_sub(self.cursor.load(Ordering::SeqCst))
    }

    fn face_at(&self, index: usize) -> MechResult<u32> {
        self.faces.get(index).copied().ok_or_else(|| {
            MechError::DieSourceUnavailable(format!(
                "script exhausted after {} faces",
                self.faces.len()
            ))
        })
    }
}

impl DieSource for ScriptedDieSource {
    fn draw_d12(&self) -> MechResult<u32> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.face_at(index)
    }

    fn draw_pair(&self) -> MechResult<(u32, u32)> {
        let index = self.cursor.fetch_add(2, Ordering::SeqCst);
        Ok((self.face_at(index)?, self.face_at(index + 1)?))
    }
}
