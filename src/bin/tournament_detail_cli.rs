// src/bin/tournament_detail_cli.rs

use chrono::NaiveDate;

use club_tournaments::detail::{DetailScreen, PairRegistrar, TournamentDetail};
use club_tournaments::domain::club::{ActorKind, ClubProfile};
use club_tournaments::domain::pair::PairEntry;
use club_tournaments::domain::tournament::{
    Location, Phase, RegistrationState, Tournament, TournamentError,
};
use club_tournaments::infra::persistence::BlobTournamentStore;

/// Простейший регистратор: просто печатает, что ему сообщили.
struct PrintingRegistrar;

impl PairRegistrar for PrintingRegistrar {
    fn pair_registered(&mut self, tournament_id: &str, pair: &PairEntry) {
        println!(
            "  [регистратор] турнир {}: пара {} & {} в категории {}",
            tournament_id, pair.player1, pair.player2, pair.category
        );
    }
}

fn main() {
    println!("=== TOURNAMENT DETAIL CLI ===\n");

    let tournament = Tournament {
        id: "42".to_string(),
        name: "Club Championship".to_string(),
        club: "Padel Arena".to_string(),
        club_id: Some("club-1".to_string()),
        location: Location {
            city: "Campinas".to_string(),
            state: "SP".to_string(),
        },
        sport: "Padel".to_string(),
        description: "Чемпионат клуба, два дня игр.".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 2, 7).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2026, 2, 8).expect("valid date"),
        registration_fee: 200.0,
        categories: vec!["Open".to_string(), "B".to_string()],
        courts: vec!["Court 1".to_string(), "Court 2".to_string()],
        participants_count: 1,
        max_participants: 2,
        has_participant_limit: true,
        phase: Phase::Scheduled,
        registration: RegistrationState::Open,
    };

    let mut store = BlobTournamentStore::seeded(&[tournament]).expect("seed store");

    let owner = ClubProfile {
        id: "club-1".to_string(),
        kind: ActorKind::Club,
        fantasy_name: Some("Padel Arena".to_string()),
        club_name: None,
    };
    let stranger = ClubProfile {
        id: "club-9".to_string(),
        kind: ActorKind::Player,
        fantasy_name: None,
        club_name: None,
    };

    // Несуществующий id — терминальное «не найдено».
    match TournamentDetail::load(&store, "no-such-id").expect("load") {
        DetailScreen::Found(_) => println!("Нашли то, чего нет?"),
        DetailScreen::NotFound => println!("id=no-such-id: турнир не найден\n"),
    }

    let mut detail = match TournamentDetail::load(&store, "42").expect("load") {
        DetailScreen::Found(detail) => detail,
        DetailScreen::NotFound => unreachable!("seeded above"),
    };

    detail.seed_roster(vec![PairEntry {
        player1: "Joao Silva".to_string(),
        player2: "Pedro Santos".to_string(),
        category: "Open".to_string(),
        confirmed: true,
    }]);

    println!(
        "Турнир \"{}\": статус={}, регистрация открыта={}, занятость={:?}",
        detail.tournament.name,
        detail.tournament.status_code().as_wire_str(),
        detail.tournament.registration_open(),
        detail.tournament.occupancy(),
    );

    // Чужая учётка не может переключать регистрацию.
    match detail.toggle_registration(&mut store, &stranger) {
        Err(TournamentError::NotOwner { actor_id, .. }) => {
            println!("Учётка {} — не владелец, переключение запрещено", actor_id)
        }
        other => println!("Неожиданный результат: {:?}", other.err()),
    }

    // Владелец ставит регистрацию на паузу и возвращает обратно.
    detail
        .toggle_registration(&mut store, &owner)
        .expect("owner toggles");
    println!(
        "После паузы: статус={}, регистрация открыта={}",
        detail.tournament.status_code().as_wire_str(),
        detail.tournament.registration_open(),
    );

    detail
        .toggle_registration(&mut store, &owner)
        .expect("owner toggles back");
    println!(
        "Снова открыли: статус={}\n",
        detail.tournament.status_code().as_wire_str(),
    );

    let mut registrar = PrintingRegistrar;

    // Пробелы вместо имени — отказ, ввод остаётся в форме.
    detail.form.open();
    detail.form.player1 = "   ".to_string();
    detail.form.player2 = "Rafael Dias".to_string();
    detail.form.category = "Open".to_string();

    match detail.submit_pair(&mut store, &owner, &mut registrar) {
        Err(err) => println!("Отказ формы: {}", err),
        Ok(_) => println!("Пара неожиданно принята"),
    }
    println!(
        "  Ввод сохранился: player2=\"{}\", форма открыта={}",
        detail.form.player2, detail.form.is_open
    );

    // Нормальная пара — принимается, форма чистится и закрывается.
    detail.form.player1 = "Carlos Lima".to_string();
    match detail.submit_pair(&mut store, &owner, &mut registrar) {
        Ok(pair) => println!(
            "Принята пара {} & {}; участников стало {}",
            pair.player1, pair.player2, detail.tournament.participants_count
        ),
        Err(err) => println!("Ошибка: {}", err),
    }

    // Лимит 2 исчерпан — следующая пара не проходит.
    detail.form.open();
    detail.form.player1 = "Ana Costa".to_string();
    detail.form.player2 = "Maria Santos".to_string();
    detail.form.category = "B".to_string();

    match detail.submit_pair(&mut store, &owner, &mut registrar) {
        Err(TournamentError::CapacityReached { .. }) => {
            println!("Лимит участников исчерпан, пара не принята")
        }
        other => println!("Неожиданный результат: {:?}", other.err()),
    }

    println!("\nПоиск по составу \"silva\":");
    for pair in detail.visible_pairs("silva", None) {
        println!(
            "  {} & {} | категория={} | подтверждена={}",
            pair.player1, pair.player2, pair.category, pair.confirmed
        );
    }
}
