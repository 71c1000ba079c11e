use serde::{Deserialize, Serialize};

use crate::domain::tournament::TournamentError;
use crate::domain::TournamentId;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Турнир не найден.
    TournamentNotFound(TournamentId),

    /// Действие доступно только владельцу турнира.
    NotOwner(TournamentId),

    /// Форма пары отклонена валидацией; ввод остаётся у клиента.
    ValidationRejected(String),

    /// Лимит участников исчерпан.
    CapacityReached(TournamentId),

    /// Внутренняя ошибка (хранилище, битая запись).
    Internal(String),
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        match err {
            TournamentError::TournamentNotFound { tournament_id } => {
                ApiError::TournamentNotFound(tournament_id)
            }
            TournamentError::NotOwner { tournament_id, .. } => ApiError::NotOwner(tournament_id),
            TournamentError::CapacityReached { tournament_id } => {
                ApiError::CapacityReached(tournament_id)
            }
            TournamentError::InvalidPair(pair_err) => {
                ApiError::ValidationRejected(pair_err.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}
