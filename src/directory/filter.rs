// src/directory/filter.rs

use serde::{Deserialize, Serialize};

use crate::domain::tournament::{StatusCode, Tournament};

/// Вкладка статуса в каталоге.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(StatusCode),
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// Составной фильтр каталога: вкладка статуса + поиск по имени +
/// подстрока даты. Критерии соединяются по И.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DirectoryFilter {
    pub status: StatusFilter,
    pub search: String,
    pub date: String,
}

impl DirectoryFilter {
    /// Активен ли хотя бы один текстовый критерий (поиск или дата).
    /// От этого зависит, какое «пусто» показывать.
    pub fn has_text_criteria(&self) -> bool {
        !self.search.is_empty() || !self.date.is_empty()
    }

    /// Проходит ли турнир все три предиката.
    pub fn matches(&self, tournament: &Tournament) -> bool {
        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(code) => tournament.status_code() == code,
        };

        let matches_search = self.search.is_empty()
            || tournament
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        // Дата сверяется по сериализованной форме (YYYY-MM-DD),
        // как её вводит date-пикер.
        let matches_date =
            self.date.is_empty() || tournament.start_date.to_string().contains(&self.date);

        matches_status && matches_search && matches_date
    }
}

/// Чистая проекция коллекции через фильтр.
///
/// Коллекцию не мутирует, порядок вставки сохраняет,
/// на одинаковом входе даёт одинаковый результат.
pub fn filter_tournaments<'a>(
    collection: &'a [Tournament],
    filter: &DirectoryFilter,
) -> Vec<&'a Tournament> {
    collection.iter().filter(|t| filter.matches(t)).collect()
}

/// Счётчики для бейджей вкладок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub open: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(StatusCode::Open) => self.open,
            StatusFilter::Only(StatusCode::Scheduled) => self.scheduled,
            StatusFilter::Only(StatusCode::InProgress) => self.in_progress,
            StatusFilter::Only(StatusCode::Completed) => self.completed,
        }
    }
}

/// Счётчики считаются по НЕфильтрованной коллекции:
/// бейдж вкладки не зависит от текущего поиска/даты.
pub fn status_counts(collection: &[Tournament]) -> StatusCounts {
    let mut counts = StatusCounts {
        all: collection.len(),
        ..StatusCounts::default()
    };

    for tournament in collection {
        match tournament.status_code() {
            StatusCode::Open => counts.open += 1,
            StatusCode::Scheduled => counts.scheduled += 1,
            StatusCode::InProgress => counts.in_progress += 1,
            StatusCode::Completed => counts.completed += 1,
        }
    }

    counts
}

/// Какое «пусто» показывать, когда видимый список пуст.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmptyListKind {
    /// Поиск или дата активны — «по фильтрам ничего не найдено».
    NoMatches,
    /// Вкладка «все» и коллекция пуста — «турниров ещё нет».
    NothingCreated,
    /// Конкретная вкладка без записей такого статуса.
    NoneWithStatus(StatusCode),
}

/// Классификация пустого списка. None — список не пуст.
pub fn empty_kind(
    visible_is_empty: bool,
    filter: &DirectoryFilter,
) -> Option<EmptyListKind> {
    if !visible_is_empty {
        return None;
    }

    if filter.has_text_criteria() {
        return Some(EmptyListKind::NoMatches);
    }

    match filter.status {
        StatusFilter::All => Some(EmptyListKind::NothingCreated),
        StatusFilter::Only(code) => Some(EmptyListKind::NoneWithStatus(code)),
    }
}
