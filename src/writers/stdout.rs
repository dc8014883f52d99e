use super::Writer;
use super::colors::{
    cl_position_fg, el_position_fg, header_fg, lose_fg, misc_fg, position_fg, rl_position_fg,
    tie_fg, time_fg, win_fg,
};
use super::time_formatting::utc_to_local;
use crate::constants::layout::{LEAGUE_HEADER_WIDTH, TEAM_NAME_WIDTH};
use crate::data_fetcher::models::{
    Fixture, FixturesResponse, LeagueTable, LiveScores, SplitRecord, StandingRow, TeamPlayers,
};
use crate::error::AppError;
use crate::queries::TimeWindow;
use crate::reference::{League, Zone};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

/// Styled terminal output.
pub struct StdoutWriter<W: Write> {
    out: W,
}

impl<W: Write> StdoutWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn colored(&mut self, text: &str, color: Color) -> Result<(), AppError> {
        queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)?;
        Ok(())
    }

    fn bold_line(&mut self, text: &str, color: Color) -> Result<(), AppError> {
        queue!(
            self.out,
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )?;
        Ok(())
    }

    fn league_header(&mut self, label: &str) -> Result<(), AppError> {
        let header = format!("{:=^width$}", format!(" {label} "), width = LEAGUE_HEADER_WIDTH);
        self.bold_line(&header, header_fg())
    }

    /// `Home  2  vs  1  Away`, team names coloured by the result.
    fn score_line(
        &mut self,
        home: &str,
        away: &str,
        home_goals: Option<i32>,
        away_goals: Option<i32>,
    ) -> Result<(), AppError> {
        let (home_color, away_color) = match (home_goals, away_goals) {
            (Some(h), Some(a)) if h > a => (win_fg(), lose_fg()),
            (Some(h), Some(a)) if h < a => (lose_fg(), win_fg()),
            (Some(_), Some(_)) => (tie_fg(), tie_fg()),
            _ => (misc_fg(), misc_fg()),
        };
        let goals = |g: Option<i32>| g.map(|g| g.to_string()).unwrap_or_default();

        self.colored(&format!("{home:<width$}", width = TEAM_NAME_WIDTH), home_color)?;
        self.colored(
            &format!(" {:>2}  vs {:>2} ", goals(home_goals), goals(away_goals)),
            misc_fg(),
        )?;
        self.colored(away, away_color)?;
        Ok(())
    }

    fn fixture_line(
        &mut self,
        fixture: &Fixture,
        window: &TimeWindow,
        use_12_hour: bool,
    ) -> Result<(), AppError> {
        if fixture.is_finished() {
            self.colored(&format!("{} ", fixture.day()), misc_fg())?;
            self.score_line(
                &fixture.home_team_name,
                &fixture.away_team_name,
                fixture.result.goals_home_team,
                fixture.result.goals_away_team,
            )?;
        } else {
            let kickoff = utc_to_local(&fixture.date, use_12_hour, true);
            self.score_line(&fixture.home_team_name, &fixture.away_team_name, None, None)?;
            self.colored(&format!(" {kickoff}"), time_fg())?;
            if !window.is_upcoming() {
                self.colored(&format!(" ({})", fixture.status), misc_fg())?;
            }
        }
        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    fn standings_header(&mut self, extended: bool) -> Result<(), AppError> {
        let mut header = format!(
            "{:<6}{:<30}{:>8}{:>8}{:>8}{:>8}{:>8}",
            "POS", "CLUB", "PLAYED", "GF", "GA", "GD", "POINTS"
        );
        if extended {
            header.push_str(&format!(
                "{:>5}{:>5}{:>5}  {:>16}  {:>16}",
                "W", "D", "L", "HOME GF/GA W-D-L", "AWAY GF/GA W-D-L"
            ));
        }
        self.bold_line(&header, misc_fg())
    }

    fn standings_rows(
        &mut self,
        table: &LeagueTable,
        league: &League,
        extended: bool,
    ) -> Result<(), AppError> {
        self.league_header(&league.code)?;
        self.standings_header(extended)?;

        for row in &table.standing {
            let color = match league.zone_for(row.position) {
                Some(Zone::ChampionsLeague) => cl_position_fg(),
                Some(Zone::EuropaLeague) => el_position_fg(),
                Some(Zone::Relegation) => rl_position_fg(),
                None => position_fg(),
            };
            let mut line = standings_line(row);
            if extended {
                line.push_str(&format!(
                    "{:>5}{:>5}{:>5}  {:>16}  {:>16}",
                    row.wins,
                    row.draws,
                    row.losses,
                    split_summary(row.home.as_ref()),
                    split_summary(row.away.as_ref())
                ));
            }
            self.colored(&line, color)?;
            queue!(self.out, Print("\n"))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

fn standings_line(row: &StandingRow) -> String {
    format!(
        "{:<6}{:<30}{:>8}{:>8}{:>8}{:>8}{:>8}",
        row.position,
        row.team_name,
        row.played_games,
        row.goals,
        row.goals_against,
        row.goal_difference,
        row.points
    )
}

fn split_summary(split: Option<&SplitRecord>) -> String {
    match split {
        Some(s) => format!(
            "{}/{} {}-{}-{}",
            s.goals, s.goals_against, s.wins, s.draws, s.losses
        ),
        None => "-".to_string(),
    }
}

/// Groups items by a label, keeping first-seen order of labels.
fn group_by_label<'a, T>(items: &'a [T], label: impl Fn(&T) -> &str) -> Vec<(String, Vec<&'a T>)> {
    let mut groups: Vec<(String, Vec<&T>)> = Vec::new();
    for item in items {
        let key = label(item);
        match groups.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key.to_string(), vec![item])),
        }
    }
    groups
}

impl<W: Write> Writer for StdoutWriter<W> {
    fn live_scores(&mut self, scores: &LiveScores, use_12_hour: bool) -> Result<(), AppError> {
        for (league, games) in group_by_label(&scores.games, |g| g.league.as_str()) {
            self.league_header(&league)?;
            for game in games {
                self.score_line(
                    &game.home_team_name,
                    &game.away_team_name,
                    game.goals_home_team,
                    game.goals_away_team,
                )?;
                let time = utc_to_local(&game.time, use_12_hour, false);
                self.colored(&format!(" {time}"), time_fg())?;
                queue!(self.out, Print("\n"))?;
            }
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn team_scores(
        &mut self,
        fixtures: &FixturesResponse,
        window: &TimeWindow,
        use_12_hour: bool,
    ) -> Result<(), AppError> {
        for fixture in &fixtures.fixtures {
            self.fixture_line(fixture, window, use_12_hour)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn league_scores(
        &mut self,
        fixtures: &FixturesResponse,
        window: &TimeWindow,
        use_12_hour: bool,
    ) -> Result<(), AppError> {
        let groups = group_by_label(&fixtures.fixtures, |f| f.league.as_deref().unwrap_or(""));
        for (league, members) in groups {
            self.league_header(&league)?;
            for fixture in members {
                self.fixture_line(fixture, window, use_12_hour)?;
            }
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn standings(&mut self, table: &LeagueTable, league: &League) -> Result<(), AppError> {
        self.standings_rows(table, league, false)
    }

    fn standings_extended(
        &mut self,
        table: &LeagueTable,
        league: &League,
    ) -> Result<(), AppError> {
        self.standings_rows(table, league, true)
    }

    fn team_players(&mut self, players: &TeamPlayers) -> Result<(), AppError> {
        self.bold_line(
            &format!(
                "{:<5}{:<28}{:<22}{:<22}{:<12}{}",
                "N.", "NAME", "POSITION", "NATIONALITY", "BIRTHDAY", "MARKET VALUE"
            ),
            misc_fg(),
        )?;

        for player in players.sorted_by_jersey() {
            let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
            let jersey = player
                .jersey_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            let line = format!(
                "{:<5}{:<28}{:<22}{:<22}{:<12}{}",
                jersey,
                player.name,
                field(&player.position),
                field(&player.nationality),
                field(&player.date_of_birth),
                field(&player.market_value)
            );
            self.colored(&line, position_fg())?;
            queue!(self.out, Print("\n"))?;
        }

        self.out.flush()?;
        Ok(())
    }
}
