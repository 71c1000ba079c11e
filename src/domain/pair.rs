// src/domain/pair.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Пара, записанная в турнир.
///
/// Пары живут только в памяти страницы турнира — коллекция
/// в хранилище содержит сами турниры, без составов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairEntry {
    pub player1: String,
    pub player2: String,
    /// Категория из списка категорий турнира.
    pub category: String,
    /// Подтверждение ставит внешний платёжный сервис, не мы.
    pub confirmed: bool,
}

/// Черновик пары из формы «добавить дуплу»: ещё не проверенный ввод.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PairDraft {
    pub player1: String,
    pub player2: String,
    pub category: String,
}

impl PairDraft {
    /// Проверить черновик и собрать запись пары.
    ///
    /// Правила:
    /// - оба имени непустые после обрезки пробелов;
    /// - категория выбрана и есть в списке категорий турнира.
    ///
    /// При отказе ничего не отправляется, ввод остаётся у вызывающего.
    pub fn validate(&self, categories: &[String]) -> Result<PairEntry, PairError> {
        let player1 = self.player1.trim();
        let player2 = self.player2.trim();

        if player1.is_empty() || player2.is_empty() {
            return Err(PairError::EmptyPlayerName);
        }

        if self.category.is_empty() {
            return Err(PairError::MissingCategory);
        }

        if !categories.iter().any(|c| c == &self.category) {
            return Err(PairError::UnknownCategory(self.category.clone()));
        }

        Ok(PairEntry {
            player1: player1.to_string(),
            player2: player2.to_string(),
            category: self.category.clone(),
            confirmed: false,
        })
    }
}

/// Поиск по списку пар: совпадение по любому из двух имён,
/// без учёта регистра. Пустой запрос пропускает всех.
pub fn filter_pairs<'a>(pairs: &'a [PairEntry], search: &str) -> Vec<&'a PairEntry> {
    if search.is_empty() {
        return pairs.iter().collect();
    }

    let needle = search.to_lowercase();

    pairs
        .iter()
        .filter(|p| {
            p.player1.to_lowercase().contains(&needle)
                || p.player2.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Ошибки проверки пары.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairError {
    #[error("Имя игрока пустое")]
    EmptyPlayerName,

    #[error("Категория не выбрана")]
    MissingCategory,

    #[error("Категории {0} нет в этом турнире")]
    UnknownCategory(String),
}
