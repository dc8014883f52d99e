use serde_json::{Value, json};
use soccer_cli::cli::Action;
use soccer_cli::commands::execute;
use soccer_cli::config::Config;
use soccer_cli::config::credential::ApiToken;
use soccer_cli::queries::{Outcome, TimeWindow};
use soccer_cli::reference::ReferenceData;
use soccer_cli::testing_utils::{RecordingWriter, Rendered, TestDataBuilder};
use soccer_cli::writers::{CsvWriter, JsonWriter};
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, header, method, path, query_param},
};

const TOKEN: &str = "0123456789abcdef0123456789abcdef";

fn create_config(server: &MockServer) -> Config {
    Config {
        stats_api_url: server.uri(),
        live_api_url: server.uri(),
        ..Config::default()
    }
}

fn token() -> ApiToken {
    ApiToken::parse(TOKEN).unwrap()
}

async fn run_action(
    server: &MockServer,
    action: Action,
    writer: &mut dyn soccer_cli::writers::Writer,
) -> Outcome {
    let reference = ReferenceData::load().unwrap();
    let config = create_config(server);
    let token = token();
    let mut out = Vec::new();
    execute(&action, &reference, &config, Some(&token), writer, &mut out, false)
        .await
        .unwrap()
}

fn table_body(matchday: u32) -> Value {
    json!({
        "leagueCaption": "Premier League 2017/18",
        "matchday": matchday,
        "standing": [
            {"position": 1, "teamName": "Manchester City FC", "playedGames": 10, "points": 28,
             "goals": 35, "goalsAgainst": 6, "goalDifference": 29},
            {"position": 2, "teamName": "Manchester United FC", "playedGames": 10, "points": 23,
             "goals": 23, "goalsAgainst": 4, "goalDifference": 19}
        ]
    })
}

fn competition_body(current_matchday: u32) -> Value {
    json!({
        "id": 445,
        "caption": "Premier League 2017/18",
        "league": "PL",
        "year": "2017",
        "currentMatchday": current_matchday,
        "numberOfMatchdays": 38
    })
}

#[tokio::test]
async fn test_epl_standings_single_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/445/leagueTable"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(table_body(10)))
        .expect(1)
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let outcome = run_action(
        &server,
        Action::Standings {
            league: "EPL".to_string(),
            extended: false,
            matchday: None,
        },
        &mut writer,
    )
    .await;

    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(writer.calls.len(), 1);
    match &writer.calls[0] {
        Rendered::Standings { league, table } => {
            assert_eq!(league, "EPL");
            assert_eq!(table.standing.len(), 2);
        }
        other => panic!("unexpected render {other:?}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_matchday_standings_two_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/445"))
        .respond_with(ResponseTemplate::new(200).set_body_json(competition_body(10)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/competitions/445/leagueTable"))
        .and(query_param("matchday", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(table_body(1)))
        .expect(1)
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let outcome = run_action(
        &server,
        Action::Standings {
            league: "EPL".to_string(),
            extended: true,
            matchday: Some(1),
        },
        &mut writer,
    )
    .await;

    assert_eq!(outcome, Outcome::Rendered);
    assert!(matches!(writer.calls[0], Rendered::StandingsExtended { .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_future_matchday_reports_current_and_skips_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/445"))
        .respond_with(ResponseTemplate::new(200).set_body_json(competition_body(10)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/competitions/445/leagueTable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(table_body(11)))
        .expect(0)
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let outcome = run_action(
        &server,
        Action::Standings {
            league: "EPL".to_string(),
            extended: false,
            matchday: Some(11),
        },
        &mut writer,
    )
    .await;

    assert_eq!(
        outcome,
        Outcome::no_data(
            "The current matchday for this league is 10, introduce a value that is less than or equal to it."
        )
    );
    assert!(writer.calls.is_empty());
}

#[tokio::test]
async fn test_standings_unavailable_for_cup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/464/leagueTable"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let outcome = run_action(
        &server,
        Action::Standings {
            league: "CL".to_string(),
            extended: false,
            matchday: None,
        },
        &mut writer,
    )
    .await;

    assert_eq!(outcome, Outcome::no_data("No standings available for CL."));
}

#[tokio::test]
async fn test_unknown_team_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let window = TimeWindow::new(6, false).unwrap();
    let mut writer = RecordingWriter::new();

    let scores = run_action(
        &server,
        Action::TeamScores {
            team: "NOPE".to_string(),
            window,
        },
        &mut writer,
    )
    .await;
    let players = run_action(
        &server,
        Action::TeamPlayers {
            team: "NOPE".to_string(),
        },
        &mut writer,
    )
    .await;

    assert_eq!(scores, Outcome::no_data("Team code is not correct."));
    assert_eq!(players, Outcome::no_data("Team code is not correct."));
    assert!(writer.calls.is_empty());
}

#[tokio::test]
async fn test_team_fixtures_api_errors_become_messages() {
    let cases = [
        (400, "Invalid request. Check parameters."),
        (403, "This resource is restricted"),
        (404, "This resource does not exist. Check parameters"),
        (429, "You have exceeded your allowed requests per minute/day"),
    ];

    for (status, message) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/57/fixtures"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        let mut writer = RecordingWriter::new();
        let outcome = run_action(
            &server,
            Action::TeamScores {
                team: "AFC".to_string(),
                window: TimeWindow::new(6, false).unwrap(),
            },
            &mut writer,
        )
        .await;

        assert_eq!(outcome, Outcome::failed(message), "status {status}");
        assert!(writer.calls.is_empty());
    }
}

#[tokio::test]
async fn test_empty_team_fixtures_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/57/fixtures"))
        .and(query_param("timeFrame", "n3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0, "fixtures": []})))
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let outcome = run_action(
        &server,
        Action::TeamScores {
            team: "AFC".to_string(),
            window: TimeWindow::new(3, true).unwrap(),
        },
        &mut writer,
    )
    .await;

    assert_eq!(
        outcome,
        Outcome::no_data(
            "No action during next 3 days. Change the time parameter to get more fixtures."
        )
    );
}

#[tokio::test]
async fn test_league_fixtures_labelled_and_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/452/fixtures"))
        .and(query_param("timeFrame", "p6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "fixtures": [{
                "date": "2017-08-18T18:30:00Z",
                "status": "FINISHED",
                "matchday": 1,
                "homeTeamName": "FC Bayern München",
                "awayTeamName": "Bayer Leverkusen",
                "result": {"goalsHomeTeam": 3, "goalsAwayTeam": 1}
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/competitions/445/fixtures"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let window = TimeWindow::new(6, false).unwrap();
    let mut writer = RecordingWriter::new();

    let bundesliga = run_action(
        &server,
        Action::LeagueScores {
            league: Some("BL".to_string()),
            window,
        },
        &mut writer,
    )
    .await;
    let premier = run_action(
        &server,
        Action::LeagueScores {
            league: Some("EPL".to_string()),
            window,
        },
        &mut writer,
    )
    .await;

    assert_eq!(bundesliga, Outcome::Rendered);
    assert_eq!(premier, Outcome::failed("No data for the given league."));
    match &writer.calls[0] {
        Rendered::LeagueScores(fixtures) => {
            assert_eq!(fixtures.fixtures[0].league.as_deref(), Some("BL"));
        }
        other => panic!("unexpected render {other:?}"),
    }
}

#[tokio::test]
async fn test_global_fixtures_drop_unknown_competitions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fixtures"))
        .and(query_param("timeFrame", "n2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "fixtures": [
                {
                    "_links": {"competition": {"href": "http://api.football-data.org/v1/competitions/456"}},
                    "date": "2017-08-20T18:45:00Z",
                    "status": "TIMED",
                    "homeTeamName": "Juventus Turin",
                    "awayTeamName": "Cagliari Calcio",
                    "result": {"goalsHomeTeam": null, "goalsAwayTeam": null}
                },
                {
                    "_links": {"competition": {"href": "http://api.football-data.org/v1/competitions/999"}},
                    "date": "2017-08-20T16:00:00Z",
                    "status": "TIMED",
                    "homeTeamName": "Somewhere FC",
                    "awayTeamName": "Elsewhere FC",
                    "result": {"goalsHomeTeam": null, "goalsAwayTeam": null}
                }
            ]
        })))
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let outcome = run_action(
        &server,
        Action::LeagueScores {
            league: None,
            window: TimeWindow::new(2, true).unwrap(),
        },
        &mut writer,
    )
    .await;

    assert_eq!(outcome, Outcome::Rendered);
    match &writer.calls[0] {
        Rendered::LeagueScores(fixtures) => {
            assert_eq!(fixtures.fixtures.len(), 1);
            assert_eq!(fixtures.fixtures[0].league.as_deref(), Some("SA"));
        }
        other => panic!("unexpected render {other:?}"),
    }
}

#[tokio::test]
async fn test_players_empty_and_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/57/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0, "players": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teams/64/players"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let empty = run_action(
        &server,
        Action::TeamPlayers {
            team: "AFC".to_string(),
        },
        &mut writer,
    )
    .await;
    let failed = run_action(
        &server,
        Action::TeamPlayers {
            team: "LFC".to_string(),
        },
        &mut writer,
    )
    .await;

    assert_eq!(empty, Outcome::no_data("No players found for this team"));
    assert_eq!(
        failed,
        Outcome::failed("No data for the team. Please check the team code.")
    );
    assert!(writer.calls.is_empty());
}

#[tokio::test]
async fn test_live_league_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::live_payload(&[
            ("English Premier League", "Arsenal", "Chelsea"),
            ("Spanish La Liga", "Real Madrid", "Sevilla"),
            ("English Premier League", "Everton", "Burnley"),
        ])))
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let epl = run_action(
        &server,
        Action::Live {
            league: Some("EPL".to_string()),
            refresh: -1,
        },
        &mut writer,
    )
    .await;
    let serie_a = run_action(
        &server,
        Action::Live {
            league: Some("SA".to_string()),
            refresh: -1,
        },
        &mut writer,
    )
    .await;

    assert_eq!(epl, Outcome::Rendered);
    assert_eq!(serie_a, Outcome::no_data("No live action currently for SA."));
    assert_eq!(writer.calls.len(), 1);
    match &writer.calls[0] {
        Rendered::LiveScores(scores) => {
            let homes: Vec<&str> = scores.games.iter().map(|g| g.home_team_name.as_str()).collect();
            assert_eq!(homes, vec!["Arsenal", "Everton"]);
            assert!(scores.games.iter().all(|g| g.league == "EPL"));
        }
        other => panic!("unexpected render {other:?}"),
    }
}

#[tokio::test]
async fn test_live_failure_and_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"games": []})))
        .mount(&server)
        .await;

    let mut writer = RecordingWriter::new();
    let failed = run_action(&server, Action::Live { league: None, refresh: -1 }, &mut writer).await;
    let empty = run_action(&server, Action::Live { league: None, refresh: -1 }, &mut writer).await;

    assert_eq!(failed, Outcome::failed("There was a problem getting live scores"));
    assert_eq!(empty, Outcome::no_data("No live action currently"));
    assert!(writer.calls.is_empty());
}

#[tokio::test]
async fn test_live_polling_stops_when_games_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::live_payload(&[
            ("German Bundesliga", "Bayern", "Dortmund"),
        ])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"games": []})))
        .expect(1)
        .mount(&server)
        .await;

    let reference = ReferenceData::load().unwrap();
    let config = create_config(&server);
    let mut writer = RecordingWriter::new();
    let mut out = Vec::new();

    let outcome = execute(
        &Action::Live {
            league: None,
            refresh: 1,
        },
        &reference,
        &config,
        None,
        &mut writer,
        &mut out,
        false,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::no_data("No live action currently"));
    assert_eq!(writer.calls.len(), 1);
    match &writer.calls[0] {
        Rendered::LiveScores(scores) => assert_eq!(scores.games[0].league, "BL"),
        other => panic!("unexpected render {other:?}"),
    }
    let notices = String::from_utf8(out).unwrap();
    assert_eq!(notices.matches("Next refresh in ").count(), 1);
}

#[tokio::test]
async fn test_csv_standings_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/competitions/445/leagueTable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(table_body(10)))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = dir.path().join("standings.csv");
    let mut writer = CsvWriter::new(file.clone());
    let outcome = run_action(
        &server,
        Action::Standings {
            league: "EPL".to_string(),
            extended: false,
            matchday: None,
        },
        &mut writer,
    )
    .await;

    assert_eq!(outcome, Outcome::Rendered);
    let content = std::fs::read_to_string(&file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Position,Team Name,Games Played,Goals For,Goals Against,Goal Difference,Points"
    );
    assert_eq!(lines[1], "1,Manchester City FC,10,35,6,29,28");
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn test_json_output_keeps_every_response_field() {
    let body = json!({
        "_links": {"team": {"href": "http://api.football-data.org/v1/teams/57"}},
        "count": 1,
        "players": [{
            "name": "Petr Čech",
            "position": "Keeper",
            "jerseyNumber": 33,
            "dateOfBirth": "1982-05-20",
            "nationality": "Czech Republic",
            "contractUntil": "2019-06-30",
            "marketValue": null,
            "injured": false
        }]
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teams/57/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let file = dir.path().join("players.json");
    let mut writer = JsonWriter::new(file.clone());
    let outcome = run_action(
        &server,
        Action::TeamPlayers {
            team: "AFC".to_string(),
        },
        &mut writer,
    )
    .await;

    assert_eq!(outcome, Outcome::Rendered);
    let written: Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(written, body);
}
