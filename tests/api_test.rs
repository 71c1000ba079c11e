// tests/api_test.rs

use assert_matches::assert_matches;
use chrono::NaiveDate;

use club_tournaments::api::commands::{
    AddPairCommand, Command, DeleteTournamentCommand, DetailCommand, DirectoryCommand,
    ToggleRegistrationCommand,
};
use club_tournaments::api::dto::CommandResponse;
use club_tournaments::api::errors::ApiError;
use club_tournaments::api::queries::{Query, QueryResponse};
use club_tournaments::directory::StatusFilter;
use club_tournaments::domain::club::{ActorKind, ClubProfile};
use club_tournaments::domain::pair::PairEntry;
use club_tournaments::domain::tournament::{
    Location, Phase, RegistrationState, StatusCode, Tournament,
};
use club_tournaments::infra::persistence::BlobTournamentStore;
use club_tournaments::TournamentHub;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample(id: &str, name: &str, phase: Phase, reg: RegistrationState) -> Tournament {
    Tournament {
        id: id.to_string(),
        name: name.to_string(),
        club: "Padel Arena".to_string(),
        club_id: Some("club-1".to_string()),
        location: Location {
            city: "Sao Paulo".to_string(),
            state: "SP".to_string(),
        },
        sport: "Padel".to_string(),
        description: String::new(),
        start_date: date(2026, 1, 10),
        end_date: date(2026, 1, 11),
        registration_fee: 150.0,
        categories: vec!["Open".to_string()],
        courts: vec![],
        participants_count: 15,
        max_participants: 20,
        has_participant_limit: true,
        phase,
        registration: reg,
    }
}

fn owner_profile() -> ClubProfile {
    ClubProfile {
        id: "club-1".to_string(),
        kind: ActorKind::Club,
        fantasy_name: Some("Padel Arena".to_string()),
        club_name: None,
    }
}

fn seeded_hub() -> TournamentHub<BlobTournamentStore<club_tournaments::infra::persistence::InMemoryBlobStore>> {
    let seed = vec![
        sample("1", "Summer Open", Phase::Scheduled, RegistrationState::Open),
        sample("2", "Winter Cup", Phase::Scheduled, RegistrationState::Open),
        sample("3", "Autumn Classic", Phase::Completed, RegistrationState::Paused),
    ];

    let store = BlobTournamentStore::seeded(&seed).unwrap();
    TournamentHub::new(store, owner_profile())
}

//
// TEST 1 — список под фильтром статуса, карточки с занятостью
//
#[test]
fn list_tournaments_applies_filter() {
    let hub = seeded_hub();

    let response = hub
        .query(Query::ListTournaments {
            status: StatusFilter::Only(StatusCode::Open),
            search: String::new(),
            date: String::new(),
        })
        .unwrap();

    let cards = match response {
        QueryResponse::Tournaments(cards) => cards,
        other => panic!("expected Tournaments, got {:?}", other),
    };

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].tournament_id, "1");
    assert_eq!(cards[0].status, "open");
    assert_eq!(cards[0].occupancy, Some(75));
    assert_eq!(cards[0].start_date, "2026-01-10");
}

//
// TEST 2 — счётчики вкладок
//
#[test]
fn status_counts_query() {
    let hub = seeded_hub();

    let counts = match hub.query(Query::StatusCounts).unwrap() {
        QueryResponse::Counts(counts) => counts,
        other => panic!("expected Counts, got {:?}", other),
    };

    assert_eq!(counts.all, 3);
    assert_eq!(counts.open, 2);
    assert_eq!(counts.completed, 1);
}

//
// TEST 3 — неизвестный id — это ответ «не найдено», а не ошибка
//
#[test]
fn get_unknown_tournament_is_not_found_response() {
    let hub = seeded_hub();

    assert_matches!(
        hub.query(Query::GetTournament {
            tournament_id: "no-such-id".to_string()
        })
        .unwrap(),
        QueryResponse::TournamentNotFound
    );
}

//
// TEST 4 — страница турнира: владелец и открытая регистрация
//
#[test]
fn get_tournament_builds_detail_dto() {
    let mut hub = seeded_hub();

    let dto = match hub
        .query(Query::GetTournament {
            tournament_id: "1".to_string(),
        })
        .unwrap()
    {
        QueryResponse::Tournament(dto) => dto,
        other => panic!("expected Tournament, got {:?}", other),
    };

    assert_eq!(dto.name, "Summer Open");
    assert_eq!(dto.city, "Sao Paulo");
    assert!(dto.registration_open);
    assert!(dto.is_owner);
    assert!(dto.pairs.is_empty());

    // Состав, залитый внешним сервисом, появляется в DTO.
    hub.seed_roster(
        "1",
        vec![PairEntry {
            player1: "Joao Silva".to_string(),
            player2: "Pedro Santos".to_string(),
            category: "Open".to_string(),
            confirmed: true,
        }],
    );

    let dto = match hub
        .query(Query::GetTournament {
            tournament_id: "1".to_string(),
        })
        .unwrap()
    {
        QueryResponse::Tournament(dto) => dto,
        other => panic!("expected Tournament, got {:?}", other),
    };
    assert_eq!(dto.pairs.len(), 1);
    assert!(dto.pairs[0].confirmed);
}

//
// TEST 5 — переключение регистрации через команду сохраняется
//
#[test]
fn toggle_registration_command_persists() {
    let mut hub = seeded_hub();

    let response = hub
        .execute(Command::Detail(DetailCommand::ToggleRegistration(
            ToggleRegistrationCommand {
                tournament_id: "1".to_string(),
            },
        )))
        .unwrap();

    let dto = match response {
        CommandResponse::TournamentState(dto) => dto,
        other => panic!("expected TournamentState, got {:?}", other),
    };
    assert!(!dto.registration_open);
    assert_eq!(dto.status, "scheduled");

    // Повторный запрос читает уже новое состояние из хранилища.
    let dto = match hub
        .query(Query::GetTournament {
            tournament_id: "1".to_string(),
        })
        .unwrap()
    {
        QueryResponse::Tournament(dto) => dto,
        other => panic!("expected Tournament, got {:?}", other),
    };
    assert!(!dto.registration_open);
}

//
// TEST 6 — добавление пары через команду
//
#[test]
fn add_pair_command_updates_roster_and_count() {
    let mut hub = seeded_hub();

    let response = hub
        .execute(Command::Detail(DetailCommand::AddPair(AddPairCommand {
            tournament_id: "1".to_string(),
            player1: "  Joao Silva ".to_string(),
            player2: "Pedro Santos".to_string(),
            category: "Open".to_string(),
        })))
        .unwrap();

    let pair = match response {
        CommandResponse::PairAdded(pair) => pair,
        other => panic!("expected PairAdded, got {:?}", other),
    };
    assert_eq!(pair.player1, "Joao Silva");
    assert!(!pair.confirmed);

    assert_eq!(hub.rosters().pairs("1").len(), 1);

    let dto = match hub
        .query(Query::GetTournament {
            tournament_id: "1".to_string(),
        })
        .unwrap()
    {
        QueryResponse::Tournament(dto) => dto,
        other => panic!("expected Tournament, got {:?}", other),
    };
    assert_eq!(dto.participants_count, 16);
    assert_eq!(dto.pairs.len(), 1);
}

//
// TEST 7 — невалидная пара отклоняется на уровне API
//
#[test]
fn add_pair_command_rejects_bad_input() {
    let mut hub = seeded_hub();

    let err = hub
        .execute(Command::Detail(DetailCommand::AddPair(AddPairCommand {
            tournament_id: "1".to_string(),
            player1: "   ".to_string(),
            player2: "Pedro Santos".to_string(),
            category: "Open".to_string(),
        })))
        .unwrap_err();

    assert_matches!(err, ApiError::ValidationRejected(_));
}

//
// TEST 8 — чужая учётка получает NotOwner
//
#[test]
fn stranger_gets_not_owner() {
    let seed = vec![sample("1", "Summer Open", Phase::Scheduled, RegistrationState::Open)];
    let store = BlobTournamentStore::seeded(&seed).unwrap();

    let stranger = ClubProfile {
        id: "club-9".to_string(),
        kind: ActorKind::Player,
        fantasy_name: None,
        club_name: None,
    };
    let mut hub = TournamentHub::new(store, stranger);

    let err = hub
        .execute(Command::Detail(DetailCommand::ToggleRegistration(
            ToggleRegistrationCommand {
                tournament_id: "1".to_string(),
            },
        )))
        .unwrap_err();

    assert_matches!(err, ApiError::NotOwner(_));
}

//
// TEST 9 — удаление через команду сокращает список
//
#[test]
fn delete_command_shrinks_list() {
    let mut hub = seeded_hub();

    let response = hub
        .execute(Command::Directory(DirectoryCommand::DeleteTournament(
            DeleteTournamentCommand {
                tournament_id: "2".to_string(),
            },
        )))
        .unwrap();
    assert_matches!(response, CommandResponse::Ok);

    let cards = match hub
        .query(Query::ListTournaments {
            status: StatusFilter::All,
            search: String::new(),
            date: String::new(),
        })
        .unwrap()
    {
        QueryResponse::Tournaments(cards) => cards,
        other => panic!("expected Tournaments, got {:?}", other),
    };

    let ids: Vec<&str> = cards.iter().map(|c| c.tournament_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

//
// TEST 10 — команда по несуществующему турниру
//
#[test]
fn command_on_missing_tournament_is_api_not_found() {
    let mut hub = seeded_hub();

    let err = hub
        .execute(Command::Detail(DetailCommand::ToggleRegistration(
            ToggleRegistrationCommand {
                tournament_id: "no-such-id".to_string(),
            },
        )))
        .unwrap_err();

    assert_matches!(err, ApiError::TournamentNotFound(_));
}
