use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context};
use discovery_core::{Stage, TimingConfig, STAGE_COUNT};
use discovery_logging::{discovery_debug, discovery_info};
use serde::Deserialize;

const CONFIG_FILENAME: &str = "discovery.ron";

/// On-disk timing overrides. Omitted fields keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PersistedTiming {
    stage_durations_ms: Vec<u64>,
    steps_per_stage: u32,
    inter_stage_pause_ms: u64,
    settle_delay_ms: u64,
}

impl Default for PersistedTiming {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            stage_durations_ms: Stage::ALL
                .iter()
                .map(|stage| millis(timing.stage_duration(*stage)))
                .collect(),
            steps_per_stage: timing.steps_per_stage(),
            inter_stage_pause_ms: millis(timing.inter_stage_pause()),
            settle_delay_ms: millis(timing.settle_delay()),
        }
    }
}

impl PersistedTiming {
    fn into_timing(self) -> anyhow::Result<TimingConfig> {
        if self.stage_durations_ms.len() != STAGE_COUNT {
            bail!(
                "expected {} stage durations, found {}",
                STAGE_COUNT,
                self.stage_durations_ms.len()
            );
        }
        let durations: [Duration; STAGE_COUNT] =
            std::array::from_fn(|i| Duration::from_millis(self.stage_durations_ms[i]));

        let timing = TimingConfig::new(
            durations,
            self.steps_per_stage,
            Duration::from_millis(self.inter_stage_pause_ms),
            Duration::from_millis(self.settle_delay_ms),
        )?;
        Ok(timing)
    }
}

fn millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}

/// Loads timing overrides.
///
/// An explicit path must exist. Without one, `./discovery.ron` is used when
/// present and the built-in timings otherwise.
pub(crate) fn load_timing(explicit: Option<&Path>) -> anyhow::Result<TimingConfig> {
    let path = explicit.unwrap_or_else(|| Path::new(CONFIG_FILENAME));
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if explicit.is_none() && err.kind() == std::io::ErrorKind::NotFound => {
            discovery_debug!("no {} found, using default timings", CONFIG_FILENAME);
            return Ok(TimingConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {:?}", path));
        }
    };

    let timing = parse_timing(&content).with_context(|| format!("invalid config {:?}", path))?;
    discovery_info!("loaded timing overrides from {:?}", path);
    Ok(timing)
}

fn parse_timing(content: &str) -> anyhow::Result<TimingConfig> {
    let persisted: PersistedTiming = ron::from_str(content)?;
    persisted.into_timing()
}
