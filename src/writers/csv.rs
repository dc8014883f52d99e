use super::Writer;
use crate::data_fetcher::models::{
    Fixture, FixturesResponse, LeagueTable, LiveScores, SplitRecord, StandingRow, TeamPlayers,
};
use crate::error::AppError;
use crate::queries::TimeWindow;
use crate::reference::League;
use std::path::PathBuf;
use tracing::info;

const LIVE_HEADERS: [&str; 5] = [
    "League",
    "Home Team Name",
    "Home Team Goals",
    "Away Team Goals",
    "Away Team Name",
];

const SCORE_HEADERS: [&str; 7] = [
    "League",
    "Date",
    "Status",
    "Home Team Name",
    "Home Team Goals",
    "Away Team Goals",
    "Away Team Name",
];

const STANDINGS_HEADERS: [&str; 7] = [
    "Position",
    "Team Name",
    "Games Played",
    "Goals For",
    "Goals Against",
    "Goal Difference",
    "Points",
];

const EXTENDED_HEADERS: [&str; 13] = [
    "Wins",
    "Draws",
    "Losses",
    "Home Goals For",
    "Home Goals Against",
    "Home Wins",
    "Home Draws",
    "Home Losses",
    "Away Goals For",
    "Away Goals Against",
    "Away Wins",
    "Away Draws",
    "Away Losses",
];

const PLAYER_HEADERS: [&str; 7] = [
    "Jersey Number",
    "Name",
    "Position",
    "Nationality",
    "Date of Birth",
    "Contract Until",
    "Market Value",
];

/// Writes one header row and one row per item to the destination file,
/// replacing its previous contents.
#[derive(Debug, Clone)]
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn write(&self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<(), AppError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(headers)?;
        let count = rows.len();
        for row in rows {
            writer.write_record(&row)?;
        }
        writer.flush()?;
        info!("Wrote {count} CSV rows to {}", self.path.display());
        Ok(())
    }
}

fn goals(value: Option<i32>) -> String {
    value.map(|g| g.to_string()).unwrap_or_default()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn score_row(fixture: &Fixture) -> Vec<String> {
    vec![
        fixture.league.clone().unwrap_or_default(),
        fixture.date.clone(),
        fixture.status.clone(),
        fixture.home_team_name.clone(),
        goals(fixture.result.goals_home_team),
        goals(fixture.result.goals_away_team),
        fixture.away_team_name.clone(),
    ]
}

fn standings_row(row: &StandingRow) -> Vec<String> {
    vec![
        row.position.to_string(),
        row.team_name.clone(),
        row.played_games.to_string(),
        row.goals.to_string(),
        row.goals_against.to_string(),
        row.goal_difference.to_string(),
        row.points.to_string(),
    ]
}

fn split_columns(split: Option<&SplitRecord>) -> [String; 5] {
    let split = split.cloned().unwrap_or_default();
    [
        split.goals.to_string(),
        split.goals_against.to_string(),
        split.wins.to_string(),
        split.draws.to_string(),
        split.losses.to_string(),
    ]
}

impl Writer for CsvWriter {
    fn live_scores(&mut self, scores: &LiveScores, _use_12_hour: bool) -> Result<(), AppError> {
        let rows = scores
            .games
            .iter()
            .map(|game| {
                vec![
                    game.league.clone(),
                    game.home_team_name.clone(),
                    goals(game.goals_home_team),
                    goals(game.goals_away_team),
                    game.away_team_name.clone(),
                ]
            })
            .collect();
        self.write(&LIVE_HEADERS, rows)
    }

    fn team_scores(
        &mut self,
        fixtures: &FixturesResponse,
        _window: &TimeWindow,
        _use_12_hour: bool,
    ) -> Result<(), AppError> {
        self.write(&SCORE_HEADERS, fixtures.fixtures.iter().map(score_row).collect())
    }

    fn league_scores(
        &mut self,
        fixtures: &FixturesResponse,
        _window: &TimeWindow,
        _use_12_hour: bool,
    ) -> Result<(), AppError> {
        self.write(&SCORE_HEADERS, fixtures.fixtures.iter().map(score_row).collect())
    }

    fn standings(&mut self, table: &LeagueTable, _league: &League) -> Result<(), AppError> {
        self.write(
            &STANDINGS_HEADERS,
            table.standing.iter().map(standings_row).collect(),
        )
    }

    fn standings_extended(
        &mut self,
        table: &LeagueTable,
        _league: &League,
    ) -> Result<(), AppError> {
        let headers: Vec<&str> = STANDINGS_HEADERS
            .iter()
            .chain(EXTENDED_HEADERS.iter())
            .copied()
            .collect();

        let rows = table
            .standing
            .iter()
            .map(|row| {
                let mut record = standings_row(row);
                record.extend([
                    row.wins.to_string(),
                    row.draws.to_string(),
                    row.losses.to_string(),
                ]);
                record.extend(split_columns(row.home.as_ref()));
                record.extend(split_columns(row.away.as_ref()));
                record
            })
            .collect();

        self.write(&headers, rows)
    }

    fn team_players(&mut self, players: &TeamPlayers) -> Result<(), AppError> {
        let rows = players
            .sorted_by_jersey()
            .into_iter()
            .map(|player| {
                vec![
                    player
                        .jersey_number
                        .map(|n| n.to_string())
                        .unwrap_or_default(),
                    player.name.clone(),
                    text(&player.position),
                    text(&player.nationality),
                    text(&player.date_of_birth),
                    text(&player.contract_until),
                    text(&player.market_value),
                ]
            })
            .collect();
        self.write(&PLAYER_HEADERS, rows)
    }
}
