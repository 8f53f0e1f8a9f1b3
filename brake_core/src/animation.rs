//! # Build Animation State
//!
//! Immutable snapshots describing the "car being assembled" animation a
//! front end plays after each recalculation. The core only models progress
//! and outcome; drawing and timers belong to the front end.
//!
//! A timeline starts at progress 0 in the `Building` state. Every tick adds
//! [`PROGRESS_STEP`] and stamps the snapshot with the calculation's
//! classification, until progress reaches exactly 1.
//!
//! ## Example
//!
//! ```rust
//! use brake_core::animation::AnimationState;
//! use brake_core::classification::{BuildStatus, Classification};
//!
//! let outcome = Classification { status: BuildStatus::Complete, failure_type: None };
//! let last = AnimationState::frames(&outcome).last().unwrap();
//! assert!(last.is_finished());
//! assert_eq!(last.status, BuildStatus::Complete);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::classification::{BuildStatus, Classification, FailureType};

/// Progress added per tick
pub const PROGRESS_STEP: f64 = 0.02;

/// Nominal time between ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// One frame of the build animation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationState {
    /// Assembly progress, 0 to 1
    pub build_progress: f64,
    pub status: BuildStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_type: Option<FailureType>,
}

impl AnimationState {
    /// First frame: nothing built, outcome not yet shown.
    pub fn initial() -> Self {
        Self::default()
    }

    /// The frame after this one. Progress is clamped at 1.
    pub fn next_frame(&self, outcome: &Classification) -> AnimationState {
        let progress = self.build_progress + PROGRESS_STEP;
        AnimationState {
            build_progress: if progress >= 1.0 { 1.0 } else { progress },
            status: outcome.status,
            failure_type: outcome.failure_type,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.build_progress >= 1.0
    }

    /// Every ticked frame from the initial state, ending with progress 1.
    pub fn frames(outcome: &Classification) -> Frames {
        Frames {
            current: AnimationState::initial(),
            outcome: *outcome,
        }
    }
}

/// Iterator over a build timeline; see [`AnimationState::frames`].
#[derive(Debug, Clone)]
pub struct Frames {
    current: AnimationState,
    outcome: Classification,
}

impl Iterator for Frames {
    type Item = AnimationState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_finished() {
            return None;
        }
        self.current = self.current.next_frame(&self.outcome);
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_sliding() -> Classification {
        Classification {
            status: BuildStatus::Failed,
            failure_type: Some(FailureType::Sliding),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AnimationState::initial();
        assert_eq!(state.build_progress, 0.0);
        assert_eq!(state.status, BuildStatus::Building);
        assert_eq!(state.failure_type, None);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_next_frame_carries_outcome() {
        let frame = AnimationState::initial().next_frame(&failed_sliding());
        assert!((frame.build_progress - 0.02).abs() < 1e-12);
        assert_eq!(frame.status, BuildStatus::Failed);
        assert_eq!(frame.failure_type, Some(FailureType::Sliding));
    }

    #[test]
    fn test_progress_clamps_at_one() {
        let almost = AnimationState {
            build_progress: 0.99,
            ..AnimationState::initial()
        };
        let frame = almost.next_frame(&failed_sliding());
        assert_eq!(frame.build_progress, 1.0);
        assert!(frame.is_finished());
    }

    #[test]
    fn test_timeline_is_monotonic_and_terminates() {
        let frames: Vec<_> = AnimationState::frames(&failed_sliding()).collect();
        assert!(frames.len() >= 50 && frames.len() <= 51, "{} frames", frames.len());
        assert!(frames.windows(2).all(|w| w[0].build_progress < w[1].build_progress));
        assert_eq!(frames.last().map(|f| f.build_progress), Some(1.0));
        assert!(frames.iter().all(|f| f.status == BuildStatus::Failed));
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(TICK_INTERVAL.as_millis(), 50);
    }

    #[test]
    fn test_serialization() {
        let state = AnimationState::initial();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"build_progress":0.0,"status":"building"}"#);
    }
}
