use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::TournamentId;

/// Простая генерация ID на основе монотонного счётчика.
///
/// В легаси-хранилище id — непрозрачные строки (часто числовые),
/// поэтому наружу отдаём сразу строку.
#[derive(Debug)]
pub struct IdGenerator {
    tournament_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self {
            tournament_counter: AtomicU64::new(1),
        }
    }

    /// Стартовать счётчик после самого большого числового id коллекции,
    /// чтобы свежие id не пересекались с уже сохранёнными.
    pub fn starting_after(existing: impl Iterator<Item = TournamentId>) -> Self {
        let max_numeric = existing
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            tournament_counter: AtomicU64::new(max_numeric + 1),
        }
    }

    #[inline]
    pub fn next_tournament_id(&self) -> TournamentId {
        self.tournament_counter
            .fetch_add(1, Ordering::Relaxed)
            .to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
