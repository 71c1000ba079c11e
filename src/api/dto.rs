use serde::{Deserialize, Serialize};

use crate::domain::TournamentId;

/// DTO карточки турнира в каталоге.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentCardDto {
    pub tournament_id: TournamentId,
    pub name: String,
    /// Даты в сериализованной форме YYYY-MM-DD (как их ждёт фронт).
    pub start_date: String,
    pub end_date: String,
    pub registration_fee: f64,
    pub categories: Vec<String>,
    pub participants_count: u32,
    pub max_participants: u32,
    /// Статус в wire-форме: "open" / "scheduled" / "in-progress" / "completed".
    pub status: String,
    /// Процент занятости; None — бейдж не рисуем.
    pub occupancy: Option<u8>,
}

/// DTO страницы турнира.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentDetailDto {
    pub tournament_id: TournamentId,
    pub name: String,
    pub club: String,
    pub city: String,
    pub state: String,
    pub sport: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub registration_fee: f64,
    pub categories: Vec<String>,
    pub participants_count: u32,
    pub status: String,
    /// Открыто ли окно регистрации.
    pub registration_open: bool,
    /// Является ли зритель владельцем (гейтит кнопки владельца).
    pub is_owner: bool,
    pub pairs: Vec<PairDto>,
}

/// DTO пары в составе.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairDto {
    pub player1: String,
    pub player2: String,
    pub category: String,
    /// Подтверждена ли оплата (ставит внешний сервис).
    pub confirmed: bool,
}

/// DTO счётчиков вкладок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StatusCountsDto {
    pub all: usize,
    pub open: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных (удаление).
    Ok,

    /// Обновлённое состояние турнира (после переключения регистрации).
    TournamentState(TournamentDetailDto),

    /// Пара принята.
    PairAdded(PairDto),
}
