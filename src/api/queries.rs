use serde::{Deserialize, Serialize};

use crate::api::dto::{
    PairDto, StatusCountsDto, TournamentCardDto, TournamentDetailDto,
};
use crate::directory::filter::{StatusCounts, StatusFilter};
use crate::domain::club::ClubProfile;
use crate::domain::pair::PairEntry;
use crate::domain::tournament::Tournament;
use crate::domain::TournamentId;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Видимый список каталога под заданным фильтром.
    ListTournaments {
        status: StatusFilter,
        search: String,
        date: String,
    },

    /// Страница одного турнира.
    GetTournament { tournament_id: TournamentId },

    /// Счётчики вкладок (по нефильтрованной коллекции).
    StatusCounts,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Tournaments(Vec<TournamentCardDto>),
    Tournament(TournamentDetailDto),

    /// Терминальное состояние «турнир не найден» — это не ошибка,
    /// а то, что рисует страница.
    TournamentNotFound,

    Counts(StatusCountsDto),
}

/// Собрать DTO карточки каталога из доменной записи.
pub fn build_tournament_card(tournament: &Tournament) -> TournamentCardDto {
    TournamentCardDto {
        tournament_id: tournament.id.clone(),
        name: tournament.name.clone(),
        start_date: tournament.start_date.to_string(),
        end_date: tournament.end_date.to_string(),
        registration_fee: tournament.registration_fee,
        categories: tournament.categories.clone(),
        participants_count: tournament.participants_count,
        max_participants: tournament.max_participants,
        status: tournament.status_code().as_wire_str().to_string(),
        occupancy: tournament.occupancy(),
    }
}

/// Собрать DTO страницы турнира: запись + состав + кто смотрит.
pub fn build_tournament_detail(
    tournament: &Tournament,
    roster: &[PairEntry],
    viewer: &ClubProfile,
) -> TournamentDetailDto {
    TournamentDetailDto {
        tournament_id: tournament.id.clone(),
        name: tournament.name.clone(),
        club: tournament.club.clone(),
        city: tournament.location.city.clone(),
        state: tournament.location.state.clone(),
        sport: tournament.sport.clone(),
        description: tournament.description.clone(),
        start_date: tournament.start_date.to_string(),
        end_date: tournament.end_date.to_string(),
        registration_fee: tournament.registration_fee,
        categories: tournament.categories.clone(),
        participants_count: tournament.participants_count,
        status: tournament.status_code().as_wire_str().to_string(),
        registration_open: tournament.registration_open(),
        is_owner: crate::domain::club::is_owner(tournament, viewer),
        pairs: roster.iter().map(build_pair_dto).collect(),
    }
}

pub fn build_pair_dto(pair: &PairEntry) -> PairDto {
    PairDto {
        player1: pair.player1.clone(),
        player2: pair.player2.clone(),
        category: pair.category.clone(),
        confirmed: pair.confirmed,
    }
}

pub fn build_counts_dto(counts: StatusCounts) -> StatusCountsDto {
    StatusCountsDto {
        all: counts.all,
        open: counts.open,
        scheduled: counts.scheduled,
        in_progress: counts.in_progress,
        completed: counts.completed,
    }
}
