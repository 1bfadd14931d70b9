use anyhow::{Context, Result};

use crate::api::SeasonAverage;
use crate::commands::format_stat_rows;
use crate::config::DisplayConfig;
use crate::data_provider::StatsProvider;
use crate::formatting::format_header;
use crate::summary::season_rows;

pub fn format_season(avg: &SeasonAverage, display: &DisplayConfig) -> String {
    let mut output = format_header("Season Averages", true, display);
    output.push_str(&format_stat_rows(&season_rows(avg)));
    output
}

pub async fn run(client: &dyn StatsProvider, season: &str, display: &DisplayConfig) -> Result<()> {
    let avg = client
        .season_average(season)
        .await
        .with_context(|| format!("Failed to fetch season averages for {}", season))?;

    print!("{}", format_season(&avg, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_season_average;
    use crate::tui::testing::StubProvider;

    #[test]
    fn test_format_season() {
        let output = format_season(&create_mock_season_average(), &DisplayConfig::default());

        assert_eq!(
            output,
            "Season Averages\n\
             ═══════════════\n  \
             Season   2024-25\n  \
             Games    41\n  \
             MPG      30.2\n  \
             PPG      18.5\n  \
             RPG      6.7\n  \
             APG      3.9\n  \
             TS%      58.0%\n  \
             eFG%     54.0%\n"
        );
    }

    #[tokio::test]
    async fn test_run_propagates_fetch_error_with_context() {
        let stub = StubProvider::failing(404);

        let err = run(&stub, "1999-00", &DisplayConfig::default())
            .await
            .expect_err("should fail");

        let message = format!("{:#}", err);
        assert!(message.contains("Failed to fetch season averages for 1999-00"));
        assert!(message.contains("HTTP 404"));
    }

    #[tokio::test]
    async fn test_run_succeeds() {
        let stub = StubProvider::ok();
        assert!(run(&stub, "2024-25", &DisplayConfig::default()).await.is_ok());
    }
}
