// tests/tournament_lifecycle_tests.rs

use assert_matches::assert_matches;
use chrono::NaiveDate;

use club_tournaments::detail::{DetailScreen, TournamentDetail};
use club_tournaments::domain::club::{is_owner, ActorKind, ClubProfile};
use club_tournaments::domain::tournament::{
    Location, Phase, RegistrationState, StatusCode, Tournament, TournamentError,
};
use club_tournaments::infra::persistence::{BlobTournamentStore, TournamentStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_tournament() -> Tournament {
    Tournament {
        id: "42".to_string(),
        name: "Club Championship".to_string(),
        club: "Padel Arena".to_string(),
        club_id: Some("club-42".to_string()),
        location: Location::default(),
        sport: "Padel".to_string(),
        description: String::new(),
        start_date: date(2026, 2, 7),
        end_date: date(2026, 2, 8),
        registration_fee: 200.0,
        categories: vec!["Open".to_string()],
        courts: vec![],
        participants_count: 15,
        max_participants: 20,
        has_participant_limit: true,
        phase: Phase::Scheduled,
        registration: RegistrationState::Open,
    }
}

fn club_profile(id: &str) -> ClubProfile {
    ClubProfile {
        id: id.to_string(),
        kind: ActorKind::Club,
        fantasy_name: Some("Padel Arena".to_string()),
        club_name: None,
    }
}

//
// TEST 1 — переключение регистрации обратимо и не трогает фазу
//
#[test]
fn toggle_is_its_own_inverse() {
    let mut t = sample_tournament();

    assert!(t.registration_open());
    assert_eq!(t.status_code(), StatusCode::Open);

    t.toggle_registration();
    assert!(!t.registration_open());
    assert_eq!(t.phase, Phase::Scheduled);
    assert_eq!(t.status_code(), StatusCode::Scheduled);

    t.toggle_registration();
    assert!(t.registration_open());
    assert_eq!(t.status_code(), StatusCode::Open);
}

//
// TEST 2 — занятость: 15 из 20 = 75%
//
#[test]
fn occupancy_is_percent_of_capacity() {
    let t = sample_tournament();
    assert_eq!(t.occupancy(), Some(75));
}

//
// TEST 3 — занятость не определена без флага лимита или без самого лимита
//
#[test]
fn occupancy_requires_limit_flag_and_positive_max() {
    let mut t = sample_tournament();

    t.has_participant_limit = false;
    assert_eq!(t.occupancy(), None);

    t.has_participant_limit = true;
    t.max_participants = 0;
    assert_eq!(t.occupancy(), None);
}

//
// TEST 4 — занятость зажимается в 100 даже у «переполненной» записи
//
#[test]
fn occupancy_clamps_overfull_records() {
    let mut t = sample_tournament();
    t.participants_count = 50; // легаси-запись, залитая мимо лимита

    assert_eq!(t.occupancy(), Some(100));
}

//
// TEST 5 — округление занятости
//
#[test]
fn occupancy_rounds_to_nearest() {
    let mut t = sample_tournament();
    t.participants_count = 1;
    t.max_participants = 3;

    assert_eq!(t.occupancy(), Some(33));
}

//
// TEST 6 — владелец по id
//
#[test]
fn owner_by_club_id() {
    let t = sample_tournament();

    assert!(is_owner(&t, &club_profile("club-42")));
    assert!(!is_owner(
        &t,
        &ClubProfile {
            id: "club-7".to_string(),
            kind: ActorKind::Player,
            fantasy_name: None,
            club_name: None,
        }
    ));
}

//
// TEST 7 — легаси-ветка: клубная учётка с совпадающим именем
//
#[test]
fn owner_by_fantasy_name_for_club_kind() {
    let mut t = sample_tournament();
    t.club_id = None; // запись до привязки по id

    let by_name = club_profile("club-7");
    assert!(is_owner(&t, &by_name));

    // То же имя, но учётка игрока — не владелец.
    let player = ClubProfile {
        kind: ActorKind::Player,
        ..by_name.clone()
    };
    assert!(!is_owner(&t, &player));

    // Запасная сверка по club_name, когда fantasy_name не задано.
    let by_club_name = ClubProfile {
        id: "club-7".to_string(),
        kind: ActorKind::Club,
        fantasy_name: None,
        club_name: Some("Padel Arena".to_string()),
    };
    assert!(is_owner(&t, &by_club_name));
}

//
// TEST 8 — статусы wire-формы
//
#[test]
fn status_code_covers_all_phases() {
    let mut t = sample_tournament();

    assert_eq!(t.status_code().as_wire_str(), "open");

    t.registration = RegistrationState::Paused;
    assert_eq!(t.status_code().as_wire_str(), "scheduled");

    t.phase = Phase::InProgress;
    assert_eq!(t.status_code().as_wire_str(), "in-progress");

    t.phase = Phase::Completed;
    assert_eq!(t.status_code().as_wire_str(), "completed");
}

//
// TEST 9 — перепутанные даты не проходят валидацию записи
//
#[test]
fn inverted_dates_fail_validation() {
    let mut t = sample_tournament();
    t.start_date = date(2026, 3, 1);
    t.end_date = date(2026, 2, 1);

    assert_matches!(t.validate(), Err(TournamentError::InvalidDates { .. }));
}

//
// TEST 10 — не-владелец не может переключить регистрацию
//
#[test]
fn stranger_cannot_toggle() {
    let mut store = BlobTournamentStore::seeded(&[sample_tournament()]).unwrap();

    let mut detail = match TournamentDetail::load(&store, "42").unwrap() {
        DetailScreen::Found(detail) => detail,
        DetailScreen::NotFound => panic!("seeded above"),
    };

    let stranger = ClubProfile {
        id: "club-7".to_string(),
        kind: ActorKind::Player,
        fantasy_name: None,
        club_name: None,
    };

    let err = detail.toggle_registration(&mut store, &stranger).unwrap_err();
    assert_matches!(err, TournamentError::NotOwner { .. });

    // В хранилище ничего не поменялось.
    let reloaded = store.load_all().unwrap();
    assert!(reloaded[0].registration_open());
}

//
// TEST 11 — переключение владельцем долетает до хранилища
//
#[test]
fn owner_toggle_persists() {
    let mut store = BlobTournamentStore::seeded(&[sample_tournament()]).unwrap();

    let mut detail = match TournamentDetail::load(&store, "42").unwrap() {
        DetailScreen::Found(detail) => detail,
        DetailScreen::NotFound => panic!("seeded above"),
    };

    detail
        .toggle_registration(&mut store, &club_profile("club-42"))
        .unwrap();

    let reloaded = store.load_all().unwrap();
    assert!(!reloaded[0].registration_open());
    assert_eq!(reloaded[0].status_code(), StatusCode::Scheduled);

    // Остальные поля записи не тронуты.
    assert_eq!(reloaded[0].participants_count, 15);
    assert_eq!(reloaded[0].name, "Club Championship");
}

//
// TEST 12 — загрузка несуществующего id даёт терминальное «не найдено»
//
#[test]
fn missing_id_is_terminal_not_found() {
    let store = BlobTournamentStore::seeded(&[sample_tournament()]).unwrap();

    assert_matches!(
        TournamentDetail::load(&store, "no-such-id").unwrap(),
        DetailScreen::NotFound
    );
}
