// tests/infra_test.rs

use club_tournaments::infra::ids::IdGenerator;

//
// TEST 1 — счётчик монотонный, id — строки
//
#[test]
fn id_generator_is_monotonic() {
    let ids = IdGenerator::new();

    assert_eq!(ids.next_tournament_id(), "1");
    assert_eq!(ids.next_tournament_id(), "2");
    assert_eq!(ids.next_tournament_id(), "3");
}

//
// TEST 2 — стартуем после самого большого числового id коллекции
//
#[test]
fn id_generator_starts_after_existing() {
    let existing = vec![
        "3".to_string(),
        "17".to_string(),
        // Нечисловые id счётчику не мешают.
        "legacy-abc".to_string(),
    ];

    let ids = IdGenerator::starting_after(existing.into_iter());
    assert_eq!(ids.next_tournament_id(), "18");
    assert_eq!(ids.next_tournament_id(), "19");
}

//
// TEST 3 — пустая коллекция: начинаем с 1
//
#[test]
fn id_generator_from_empty_collection() {
    let ids = IdGenerator::starting_after(std::iter::empty());
    assert_eq!(ids.next_tournament_id(), "1");
}
