// src/bin/tournament_directory_cli.rs

use chrono::NaiveDate;

use club_tournaments::directory::{StatusFilter, TournamentDirectory};
use club_tournaments::domain::tournament::{
    Location, Phase, RegistrationState, StatusCode, Tournament,
};
use club_tournaments::infra::ids::IdGenerator;
use club_tournaments::infra::persistence::BlobTournamentStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn sample(
    ids: &IdGenerator,
    name: &str,
    start: NaiveDate,
    phase: Phase,
    reg: RegistrationState,
) -> Tournament {
    Tournament {
        id: ids.next_tournament_id(),
        name: name.to_string(),
        club: "Padel Arena".to_string(),
        club_id: Some("club-1".to_string()),
        location: Location {
            city: "Sao Paulo".to_string(),
            state: "SP".to_string(),
        },
        sport: "Padel".to_string(),
        description: String::new(),
        start_date: start,
        end_date: start,
        registration_fee: 150.0,
        categories: vec!["Open".to_string(), "B".to_string()],
        courts: vec!["Court 1".to_string()],
        participants_count: 12,
        max_participants: 32,
        has_participant_limit: true,
        phase,
        registration: reg,
    }
}

fn print_visible(directory: &TournamentDirectory) {
    for t in directory.visible() {
        println!(
            "- id={} | name=\"{}\" | status={} | {} / {} участников | занятость={:?}",
            t.id,
            t.name,
            t.status_code().as_wire_str(),
            t.participants_count,
            t.max_participants,
            t.occupancy(),
        );
    }

    if let Some(kind) = directory.empty_kind() {
        println!("  (пусто: {:?})", kind);
    }

    println!();
}

fn main() {
    println!("=== TOURNAMENT DIRECTORY CLI ===\n");

    let ids = IdGenerator::new();
    let seed = vec![
        sample(
            &ids,
            "Summer Padel Open",
            date(2026, 1, 10),
            Phase::Scheduled,
            RegistrationState::Open,
        ),
        sample(
            &ids,
            "Winter Cup",
            date(2026, 6, 5),
            Phase::Scheduled,
            RegistrationState::Open,
        ),
        sample(
            &ids,
            "Spring Masters",
            date(2026, 3, 20),
            Phase::InProgress,
            RegistrationState::Paused,
        ),
        sample(
            &ids,
            "Autumn Classic",
            date(2025, 9, 1),
            Phase::Completed,
            RegistrationState::Paused,
        ),
    ];

    let mut store = BlobTournamentStore::seeded(&seed).expect("seed store");
    let mut directory = TournamentDirectory::load(&store).expect("load directory");

    let counts = directory.counts();
    println!(
        "Счётчики вкладок: все={} открыта регистрация={} запланированы={} идут={} завершены={}\n",
        counts.all, counts.open, counts.scheduled, counts.in_progress, counts.completed
    );

    // Кнопки каталога — это запросы навигации к внешнему роутеру.
    println!("Навигация: создать={:?}", directory.create_request());
    println!("Навигация: открыть={:?}", directory.detail_request("1"));
    println!("Навигация: редактировать={:?}\n", directory.edit_request("1"));

    println!("Вкладка «открыта регистрация»:");
    directory.set_status_filter(StatusFilter::Only(StatusCode::Open));
    print_visible(&directory);

    println!("Поиск \"winter\" (без учёта регистра):");
    directory.set_search("winter");
    print_visible(&directory);

    println!("Поиск, который ничего не найдёт:");
    directory.set_search("squash");
    print_visible(&directory);

    println!("Сбросили текстовые фильтры, фильтр по дате \"2026-03\":");
    directory.clear_filters();
    directory.set_status_filter(StatusFilter::All);
    directory.set_date_filter("2026-03");
    print_visible(&directory);

    println!("Удаляем турнир id=2 и смотрим остаток:");
    directory.clear_filters();
    if let Err(err) = directory.delete(&mut store, "2") {
        println!("  Ошибка удаления: {}", err);
    }
    print_visible(&directory);

    let counts = directory.counts();
    println!(
        "Счётчики после удаления: все={} открыта регистрация={}",
        counts.all, counts.open
    );
}
