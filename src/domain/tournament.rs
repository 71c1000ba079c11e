// src/domain/tournament.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::pair::PairError;
use crate::domain::{ClubId, TournamentId};

/// Фаза турнира как события в календаре.
///
/// Легаси хранило фазу и состояние регистрации в одном поле `status`,
/// из-за чего пауза регистрации затирала фазу. Здесь они разведены:
/// фаза меняется только ходом самого турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Scheduled,
    InProgress,
    Completed,
}

/// Состояние окна регистрации. Ортогонально фазе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistrationState {
    Open,
    Paused,
}

/// Четыре видимых статуса (вкладки каталога и wire-формат хранилища).
///
/// `Open` — только когда турнир ещё не начался И регистрация открыта.
/// Легаси-значение `closed` при чтении схлопывается в `Scheduled`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusCode {
    Open,
    Scheduled,
    InProgress,
    Completed,
}

impl StatusCode {
    /// Строка статуса в том виде, в котором она лежит в хранилище.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            StatusCode::Open => "open",
            StatusCode::Scheduled => "scheduled",
            StatusCode::InProgress => "in-progress",
            StatusCode::Completed => "completed",
        }
    }
}

/// Город и штат площадки (как на странице турнира).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
}

/// Основная запись турнира, принадлежащего клубу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    /// Непрозрачный идентификатор. После создания не меняется.
    pub id: TournamentId,
    pub name: String,

    /// Отображаемое имя клуба-организатора.
    pub club: String,
    /// Id клуба-владельца. У старых записей отсутствует —
    /// тогда владельца определяем по имени (см. `domain::club::is_owner`).
    pub club_id: Option<ClubId>,

    pub location: Location,
    pub sport: String,
    pub description: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Взнос за участие, в валюте клуба.
    pub registration_fee: f64,

    /// Категории в порядке, заданном организатором.
    pub categories: Vec<String>,
    /// Корты, на которых играется турнир.
    pub courts: Vec<String>,

    pub participants_count: u32,
    /// 0 = без лимита (занятость не считается).
    pub max_participants: u32,
    /// Отдельный флаг лимита: занятость показываем только когда
    /// он включён И max_participants > 0.
    pub has_participant_limit: bool,

    pub phase: Phase,
    pub registration: RegistrationState,
}

impl Tournament {
    /// Открыта ли регистрация (двузначная проекция состояния).
    pub fn registration_open(&self) -> bool {
        self.registration == RegistrationState::Open
    }

    /// Переключить окно регистрации: Open <-> Paused.
    ///
    /// Фазу НЕ трогаем. Применённый дважды, возвращает исходное состояние.
    pub fn toggle_registration(&mut self) {
        self.registration = match self.registration {
            RegistrationState::Open => RegistrationState::Paused,
            RegistrationState::Paused => RegistrationState::Open,
        };
    }

    /// Видимый статус для каталога и хранилища.
    pub fn status_code(&self) -> StatusCode {
        match (self.phase, self.registration) {
            (Phase::Scheduled, RegistrationState::Open) => StatusCode::Open,
            (Phase::Scheduled, RegistrationState::Paused) => StatusCode::Scheduled,
            (Phase::InProgress, _) => StatusCode::InProgress,
            (Phase::Completed, _) => StatusCode::Completed,
        }
    }

    /// Процент занятости, если лимит участников включён.
    ///
    /// None — лимит выключен или max_participants = 0 (бейдж не рисуем).
    /// Значение зажато в [0, 100], даже если запись «переполнена».
    pub fn occupancy(&self) -> Option<u8> {
        if !self.has_participant_limit || self.max_participants == 0 {
            return None;
        }

        let percent =
            (self.participants_count as f64 / self.max_participants as f64 * 100.0).round();

        Some(percent.clamp(0.0, 100.0) as u8)
    }

    /// Есть ли ещё место под новую пару.
    pub fn has_capacity(&self) -> bool {
        if !self.has_participant_limit || self.max_participants == 0 {
            return true;
        }
        self.participants_count < self.max_participants
    }

    /// Учесть принятую пару: +1 к числу участников.
    ///
    /// Лимит проверяем здесь, на записи, а не только при отрисовке.
    pub fn record_pair_registration(&mut self) -> Result<(), TournamentError> {
        if !self.has_capacity() {
            return Err(TournamentError::CapacityReached {
                tournament_id: self.id.clone(),
            });
        }
        self.participants_count += 1;
        Ok(())
    }

    /// Жёсткая валидация записи перед сохранением.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidRecord(
                "Tournament: name is empty".into(),
            ));
        }

        if self.start_date > self.end_date {
            return Err(TournamentError::InvalidDates {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.registration_fee < 0.0 {
            return Err(TournamentError::InvalidRecord(
                "Tournament: registration_fee is negative".into(),
            ));
        }

        Ok(())
    }
}

/// Ошибки, которые могут возникать при работе с турниром.
#[derive(Debug, Error, Clone)]
pub enum TournamentError {
    #[error("Tournament not found: id={tournament_id}")]
    TournamentNotFound { tournament_id: TournamentId },

    #[error("Tournament is full: id={tournament_id}")]
    CapacityReached { tournament_id: TournamentId },

    #[error("Actor {actor_id} does not own tournament {tournament_id}")]
    NotOwner {
        actor_id: ClubId,
        tournament_id: TournamentId,
    },

    #[error("Tournament dates are inverted: start={start}, end={end}")]
    InvalidDates { start: NaiveDate, end: NaiveDate },

    #[error("Invalid tournament record: {0}")]
    InvalidRecord(String),

    #[error("Pair rejected: {0}")]
    InvalidPair(#[from] PairError),

    #[error("Storage error: {0}")]
    Storage(String),
}
