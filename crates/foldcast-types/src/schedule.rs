//! Multi-stage training schedules.

use serde::{Deserialize, Serialize};

/// One stage of a training run: a number of steps at a fixed sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingStage {
    /// Stage name (e.g., "Stage 0").
    pub name: String,
    /// Number of optimizer steps in this stage.
    pub steps: u64,
    /// Crop/sequence length trained at during this stage.
    pub seq_len: u32,
}

/// A named training schedule with its cubic-model calibration point.
///
/// `base_step_seconds` is the measured (or extrapolated) step time at
/// `base_seq_len`; other stages' step times are derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSchedule {
    /// Short identifier (e.g., "megafold-256xh200").
    pub id: String,
    /// Human-readable description of the schedule.
    pub description: String,
    /// Sequence length the base step time was measured at.
    pub base_seq_len: u32,
    /// Step time in seconds at the base sequence length.
    pub base_step_seconds: f64,
    /// Stages in execution order.
    pub stages: Vec<TrainingStage>,
}

impl TrainingSchedule {
    /// Returns the total number of steps across all stages.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.stages.iter().map(|s| s.steps).sum()
    }
}
