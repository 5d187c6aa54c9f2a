//! Draws the Hope and Fear dice and evaluates the roll.

use crate::dice::{D12_SIDES, DieSource, check_face};
use crate::error::{MechError, MechResult};

use super::{ResolutionResult, RollRequest, Side};

/// Critical success face on the prevailing die.
const CRITICAL_FACE: u32 = 12;
/// Face both dice must show for a critical failure.
const FUMBLE_FACE: u32 = 1;

/// Resolves Duality rolls against an injected die source.
///
/// The resolver keeps no state between calls. `resolve` takes `&self`, so
/// a resolver over a thread-safe source can be shared freely.
#[derive(Debug)]
pub struct DualityResolver<S> {
    source: S,
}

impl<S: DieSource> DualityResolver<S> {
    /// Create a resolver drawing from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying die source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draw both dice and evaluate the roll.
    ///
    /// The request is validated before anything is drawn. A source failure
    /// is returned as-is and no result exists.
    pub fn resolve(&self, request: &RollRequest) -> MechResult<ResolutionResult> {
        request.validate()?;

        let (hope_face, fear_face) = self
            .source
            .draw_pair()
            .and_then(|(hope, fear)| Ok((check_face(hope)?, check_face(fear)?)))
            .inspect_err(|e| tracing::warn!(error = %e, "duality roll aborted"))?;

        let result = evaluate(hope_face, fear_face, request)?;
        tracing::debug!(
            hope_face,
            fear_face,
            modifier = result.modifier,
            bonus = result.bonus,
            side = %result.side,
            total = result.prevailing_total,
            difficulty = result.difficulty,
            success = result.is_success,
            critical_success = result.is_critical_success,
            critical_failure = result.is_critical_failure,
            "duality roll resolved"
        );
        Ok(result)
    }
}

/// Evaluate a Duality roll from two known faces.
///
/// This is the whole rule without the draw: totals, the Fear-favoring tie
/// break, the inclusive difficulty check, and both critical flags.
pub fn evaluate(
    hope_face: u32,
    fear_face: u32,
    request: &RollRequest,
) -> MechResult<ResolutionResult> {
    request.validate()?;

    let hope_total = face_value(hope_face)?
        .checked_add(request.modifier)
        .and_then(|t| t.checked_add(request.bonus))
        .ok_or_else(|| overflow("hope total"))?;
    let fear_total = face_value(fear_face)?
        .checked_add(request.modifier)
        .ok_or_else(|| overflow("fear total"))?;

    let side = if hope_total > fear_total {
        Side::Hope
    } else {
        Side::Fear
    };
    let (prevailing_total, prevailing_face) = match side {
        Side::Hope => (hope_total, hope_face),
        Side::Fear => (fear_total, fear_face),
    };

    Ok(ResolutionResult {
        hope_face,
        fear_face,
        hope_total,
        fear_total,
        modifier: request.modifier,
        bonus: request.bonus,
        side,
        prevailing_total,
        difficulty: request.difficulty,
        is_success: prevailing_total >= request.difficulty,
        is_critical_success: prevailing_face == CRITICAL_FACE,
        is_critical_failure: hope_face == FUMBLE_FACE && fear_face == FUMBLE_FACE,
        flavor: request.flavor.clone(),
    })
}

fn face_value(face: u32) -> MechResult<i32> {
    if !(1..=D12_SIDES).contains(&face) {
        return Err(MechError::InvalidArgument(format!(
            "face {face} is outside 1..={D12_SIDES}"
        )));
    }
    Ok(face as i32)
}

fn overflow(what: &str) -> MechError {
    MechError::InvalidArgument(format!("{what} overflows"))
}
