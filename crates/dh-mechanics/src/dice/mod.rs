//! Die sources for the Duality roll.
//!
//! The resolver never touches an RNG directly. It draws faces through a
//! [`DieSource`], so production code can use a seeded or entropy-backed
//! [`RngDieSource`] while tests script exact faces with [`ScriptedDieSource`].

pub mod rng;
pub mod scripted;

pub use rng::RngDieSource;
pub use scripted::ScriptedDieSource;

use std::sync::Arc;

use crate::error::{MechError, MechResult};

/// Number of faces on the Hope and Fear dice.
pub const D12_SIDES: u32 = 12;

/// A source of twelve-sided die faces.
///
/// Implementations must be safe to share between threads; the resolver
/// only ever holds a shared reference.
pub trait DieSource: Send + Sync {
    /// Draw one face in `1..=12`.
    fn draw_d12(&self) -> MechResult<u32>;

    /// Draw the Hope face and the Fear face for one resolution.
    ///
    /// The default draws twice in sequence. Sources shared across threads
    /// override this so both faces of a pair come from one uninterrupted draw.
    fn draw_pair(&self) -> MechResult<(u32, u32)> {
        let hope = self.draw_d12()?;
        let fear = self.draw_d12()?;
        Ok((hope, fear))
    }
}

impl<S: DieSource + ?Sized> DieSource for &S {
    fn draw_d12(&self) -> MechResult<u32> {
        (**self).draw_d12()
    }

    fn draw_pair(&self) -> MechResult<(u32, u32)> {
        (**self).draw_pair()
    }
}

impl<S: DieSource + ?Sized> DieSource for Arc<S> {
    fn draw_d12(&self) -> MechResult<u32> {
        (**self).draw_d12()
    }

    fn draw_pair(&self) -> MechResult<(u32, u32)> {
        (**self).draw_pair()
    }
}

impl<S: DieSource + ?Sized> DieSource for Box<S> {
    fn draw_d12(&self) -> MechResult<u32> {
        (**self).draw_d12()
    }

    fn draw_pair(&self) -> MechResult<(u32, u32)> {
        (**self).draw_pair()
    }
}

/// Reject a face that is not a legal d12 result.
pub fn check_face(face: u32) -> MechResult<u32> {
    if (1..=D12_SIDES).contains(&face) {
        Ok(face)
    } else {
        Err(MechError::DieSourceUnavailable(format!(
            "face {face} is outside 1..={D12_SIDES}"
        )))
    }
}
