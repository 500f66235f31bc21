//! Cubic step-time model and multi-stage training projection.

use foldcast_types::{InvalidInput, TrainingSchedule, TrainingStage};
use serde::Serialize;

/// Returns the modeled step time at `seq_len`, in seconds.
///
/// Step cost is modeled as scaling with the cube of sequence length:
/// `base_step_seconds * (seq_len / base_seq_len)^3`. The cubic exponent is a
/// modeling assumption of the original estimate, not a measured law.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `base_seq_len` is zero or `base_step_seconds`
/// is non-positive or non-finite.
pub fn cubic_step_seconds(
    base_seq_len: u32,
    base_step_seconds: f64,
    seq_len: u32,
) -> Result<f64, InvalidInput> {
    if base_seq_len == 0 {
        return Err(InvalidInput::ZeroBaseSeqLen);
    }
    if !(base_step_seconds > 0.0 && base_step_seconds.is_finite()) {
        return Err(InvalidInput::NonPositiveBaseStepTime {
            seconds: base_step_seconds,
        });
    }

    let ratio = f64::from(seq_len) / f64::from(base_seq_len);
    Ok(base_step_seconds * ratio.powi(3))
}

/// Projection for a single training stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageProjection {
    /// The input stage.
    pub stage: TrainingStage,
    /// Modeled step time at the stage's sequence length.
    pub step_seconds: f64,
    /// Total stage time (steps x step seconds).
    pub total_seconds: f64,
}

impl StageProjection {
    /// Returns the stage total in hours.
    #[must_use]
    pub const fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }

    /// Returns the stage total in days.
    #[must_use]
    pub const fn total_days(&self) -> f64 {
        self.total_seconds / 86_400.0
    }
}

/// Projection for a full training schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingProjection {
    /// Per-stage projections in schedule order.
    pub stages: Vec<StageProjection>,
    /// Grand total across all stages, in seconds.
    pub total_seconds: f64,
}

impl TrainingProjection {
    /// Returns the grand total in hours.
    #[must_use]
    pub const fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }

    /// Returns the grand total in days.
    #[must_use]
    pub const fn total_days(&self) -> f64 {
        self.total_seconds / 86_400.0
    }
}

/// Projects a training schedule with the cubic step-time model.
///
/// # Errors
///
/// Returns [`InvalidInput`] if the schedule's base calibration values are
/// invalid.
pub fn project_schedule(schedule: &TrainingSchedule) -> Result<TrainingProjection, InvalidInput> {
    let mut stages = Vec::with_capacity(schedule.stages.len());
    let mut total_seconds = 0.0;

    for stage in &schedule.stages {
        let step_seconds =
            cubic_step_seconds(schedule.base_seq_len, schedule.base_step_seconds, stage.seq_len)?;
        let stage_seconds = step_seconds * stage.steps as f64;
        total_seconds += stage_seconds;
        stages.push(StageProjection {
            stage: stage.clone(),
            step_seconds,
            total_seconds: stage_seconds,
        });
    }

    Ok(TrainingProjection {
        stages,
        total_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_at_base_length() {
        assert_eq!(cubic_step_seconds(384, 14.82, 384).unwrap(), 14.82);
    }

    #[test]
    fn test_doubling_is_eightfold() {
        // 768/384 = 2, so 2^3 = 8x the base step time.
        assert_relative_eq!(
            cubic_step_seconds(384, 14.82, 768).unwrap(),
            118.56,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_shrinking_below_base() {
        let t = cubic_step_seconds(384, 14.82, 192).unwrap();
        assert_relative_eq!(t, 14.82 / 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_bad_base_values() {
        assert_eq!(
            cubic_step_seconds(0, 14.82, 384).unwrap_err(),
            InvalidInput::ZeroBaseSeqLen
        );
        assert!(matches!(
            cubic_step_seconds(384, 0.0, 384).unwrap_err(),
            InvalidInput::NonPositiveBaseStepTime { .. }
        ));
        assert!(cubic_step_seconds(384, -1.0, 384).is_err());
    }

    #[test]
    fn test_project_schedule_totals() {
        let schedule = TrainingSchedule {
            id: "test".into(),
            description: String::new(),
            base_seq_len: 384,
            base_step_seconds: 14.82,
            stages: vec![
                TrainingStage {
                    name: "Stage 0".into(),
                    steps: 74_250,
                    seq_len: 384,
                },
                TrainingStage {
                    name: "Stage 2".into(),
                    steps: 250,
                    seq_len: 768,
                },
            ],
        };

        let projection = project_schedule(&schedule).unwrap();
        assert_eq!(projection.stages.len(), 2);
        assert_relative_eq!(
            projection.stages[0].total_seconds,
            74_250.0 * 14.82,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            projection.stages[1].total_seconds,
            250.0 * 118.56,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            projection.total_seconds,
            74_250.0 * 14.82 + 250.0 * 118.56,
            max_relative = 1e-12
        );
        // Stage 0 at base length: ~305.7 hours
        assert_relative_eq!(
            projection.stages[0].total_hours(),
            74_250.0 * 14.82 / 3600.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = TrainingSchedule {
            id: "empty".into(),
            description: String::new(),
            base_seq_len: 384,
            base_step_seconds: 14.82,
            stages: vec![],
        };
        let projection = project_schedule(&schedule).unwrap();
        assert!(projection.stages.is_empty());
        assert_eq!(projection.total_seconds, 0.0);
    }
}
