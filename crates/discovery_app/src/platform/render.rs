use std::fmt::Write;

use discovery_core::{ResultItem, Stage, TimingConfig, LANGUAGES, STAGE_COUNT};

const BAR_WIDTH: usize = 20;

/// One status line for the active stage, e.g. `[2/4] Discovering ... [####----]  20%`.
pub fn render_progress(stage_index: usize, percent: u8) -> String {
    let Some(stage) = Stage::from_index(stage_index) else {
        return "All stages complete".to_string();
    };
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!(
        "[{}/{}] {:<32} [{}{}] {:>3}%",
        stage_index + 1,
        STAGE_COUNT,
        stage.label(),
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

pub fn render_results(query: &str, results: &[ResultItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Results for \"{}\"", query);
    let _ = writeln!(
        out,
        "{} items found, sorted by AI score",
        results.len()
    );
    for (n, item) in results.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. [{}] {} ({})",
            n + 1,
            item.kind,
            item.title,
            item.score
        );
        let _ = writeln!(out, "   {} | {}", item.channel, item.url);
        let _ = writeln!(out, "   {}", item.description);
    }
    out
}

pub fn render_stages(timing: &TimingConfig) -> String {
    let mut out = String::new();
    for stage in Stage::ALL {
        let _ = writeln!(
            out,
            "{}. {} ({} ms)",
            stage.index() + 1,
            stage.label(),
            timing.stage_duration(stage).as_millis()
        );
        let _ = writeln!(out, "   {}", stage.explanation());
    }
    let _ = writeln!(
        out,
        "Total run time: {} ms",
        timing.total_run_time().as_millis()
    );
    out
}

pub fn render_languages() -> String {
    let mut out = String::new();
    for language in LANGUAGES {
        let _ = writeln!(out, "{}  {}", language.code, language.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use discovery_core::FEATURED_RESULTS;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(
            render_progress(1, 25),
            "[2/4] Discovering Videos & Playlists   [#####---------------]  25%"
        );
        assert!(render_progress(3, 100).ends_with("[####################] 100%"));
        assert_eq!(render_progress(STAGE_COUNT, 100), "All stages complete");
    }

    #[test]
    fn results_header_counts_items() {
        let text = render_results("DP in C++", &FEATURED_RESULTS);

        assert!(text.starts_with("Results for \"DP in C++\"\n5 items found"));
        assert!(text.contains("1. [playlist] Dynamic Programming Full Course"));
        assert!(text.contains("(9.4)"));
    }

    #[test]
    fn stage_listing_includes_total() {
        let text = render_stages(&TimingConfig::default());

        assert!(text.contains("1. Understanding Intent (1500 ms)"));
        assert!(text.ends_with("Total run time: 8900 ms\n"));
    }

    #[test]
    fn language_listing_has_every_code() {
        assert_eq!(render_languages().lines().count(), LANGUAGES.len());
    }
}
