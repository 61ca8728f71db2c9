use std::time::Duration;

use thiserror::Error;

use crate::{Stage, STAGE_COUNT};

pub const STEPS_PER_STAGE: u32 = 20;

const DEFAULT_STAGE_DURATIONS_MS: [u64; STAGE_COUNT] = [1500, 2000, 1800, 2200];
const DEFAULT_INTER_STAGE_PAUSE_MS: u64 = 300;
const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duration of stage `{stage}` must be non-zero")]
    ZeroStageDuration { stage: Stage },
    #[error("steps per stage must be non-zero")]
    ZeroSteps,
}

/// Immutable timer choreography for a run.
///
/// Each stage is split into `steps_per_stage` equal steps. Stages are separated
/// by one inter-stage pause, and results are revealed after a settle delay
/// following the last stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    stage_durations: [Duration; STAGE_COUNT],
    steps_per_stage: u32,
    inter_stage_pause: Duration,
    settle_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            stage_durations: DEFAULT_STAGE_DURATIONS_MS.map(Duration::from_millis),
            steps_per_stage: STEPS_PER_STAGE,
            inter_stage_pause: Duration::from_millis(DEFAULT_INTER_STAGE_PAUSE_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

impl TimingConfig {
    pub fn new(
        stage_durations: [Duration; STAGE_COUNT],
        steps_per_stage: u32,
        inter_stage_pause: Duration,
        settle_delay: Duration,
    ) -> Result<Self, ConfigError> {
        if steps_per_stage == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if let Some(stage) = Stage::ALL
            .into_iter()
            .find(|stage| stage_durations[stage.index()].is_zero())
        {
            return Err(ConfigError::ZeroStageDuration { stage });
        }
        Ok(Self {
            stage_durations,
            steps_per_stage,
            inter_stage_pause,
            settle_delay,
        })
    }

    pub fn stage_duration(&self, stage: Stage) -> Duration {
        self.stage_durations[stage.index()]
    }

    pub fn steps_per_stage(&self) -> u32 {
        self.steps_per_stage
    }

    /// Delay between two progress increments of `stage`.
    pub fn step_delay(&self, stage: Stage) -> Duration {
        self.stage_duration(stage) / self.steps_per_stage
    }

    pub fn inter_stage_pause(&self) -> Duration {
        self.inter_stage_pause
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Wall time from submission to result delivery.
    pub fn total_run_time(&self) -> Duration {
        let stages: Duration = Stage::ALL
            .into_iter()
            .map(|stage| self.step_delay(stage) * self.steps_per_stage)
            .sum();
        let pauses = self.inter_stage_pause * (STAGE_COUNT as u32 - 1);
        stages + pauses + self.settle_delay
    }

    /// Progress in percent after `step` of the stage's steps completed.
    pub(crate) fn percent_after(&self, step: u32) -> u8 {
        let step = step.min(self.steps_per_stage);
        (u64::from(step) * 100 / u64::from(self.steps_per_stage)) as u8
    }
}
