use std::time::Duration;

use discovery_core::{
    find_language, ConfigError, ResultKind, Score, Stage, TimingConfig, FEATURED_RESULTS,
    STAGE_COUNT,
};

#[test]
fn stages_are_ordered_and_chained() {
    let labels: Vec<&str> = Stage::ALL.iter().map(|stage| stage.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Understanding Intent",
            "Discovering Videos & Playlists",
            "Intelligent Filtering",
            "AI Scoring & Ranking",
        ]
    );
    assert_eq!(Stage::Intent.next(), Some(Stage::Discovery));
    assert_eq!(Stage::Scoring.next(), None);
    assert_eq!(Stage::from_index(STAGE_COUNT), None);
}

#[test]
fn featured_results_are_sorted_by_score() {
    assert!(FEATURED_RESULTS
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
    assert_eq!(FEATURED_RESULTS[0].score.to_string(), "9.4");
    assert_eq!(FEATURED_RESULTS[0].kind, ResultKind::Playlist);
    assert_eq!(Score::from_tenths(85).tenths(), 85);
}

#[test]
fn results_serialize_with_lowercase_kind_and_decimal_score() {
    let json = serde_json::to_value(&FEATURED_RESULTS[1]).unwrap();

    assert_eq!(json["kind"], "video");
    assert_eq!(json["score"], 9.1);
    assert_eq!(json["channel"], "Tech Interview Pro");
}

#[test]
fn language_lookup_ignores_case_and_whitespace() {
    assert_eq!(find_language(" PT ").map(|l| l.name), Some("Portuguese"));
    assert!(find_language("tlh").is_none());
}

#[test]
fn timing_rejects_zero_values() {
    let ok = [Duration::from_millis(100); STAGE_COUNT];
    assert_eq!(
        TimingConfig::new(ok, 0, Duration::ZERO, Duration::ZERO),
        Err(ConfigError::ZeroSteps)
    );

    let mut durations = ok;
    durations[2] = Duration::ZERO;
    assert_eq!(
        TimingConfig::new(durations, 20, Duration::ZERO, Duration::ZERO),
        Err(ConfigError::ZeroStageDuration {
            stage: Stage::Filtering
        })
    );
}

#[test]
fn default_timing_matches_stage_table() {
    let timing = TimingConfig::default();

    assert_eq!(timing.stage_duration(Stage::Discovery), Duration::from_millis(2000));
    assert_eq!(timing.step_delay(Stage::Filtering), Duration::from_millis(90));
    assert_eq!(timing.step_delay(Stage::Scoring), Duration::from_millis(110));
    assert_eq!(timing.total_run_time(), Duration::from_millis(8900));
}
