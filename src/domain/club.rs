// src/domain/club.rs

use serde::{Deserialize, Serialize};

use crate::domain::tournament::Tournament;
use crate::domain::ClubId;

/// Тип учётки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActorKind {
    Club,
    Player,
}

/// Профиль действующей учётки. Аутентификация снаружи —
/// сюда профиль приходит уже проверенным.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClubProfile {
    pub id: ClubId,
    pub kind: ActorKind,
    /// «Фантазийное» имя клуба — то, что показывается на витрине.
    pub fantasy_name: Option<String>,
    /// Юридическое имя клуба (запасной вариант для сверки).
    pub club_name: Option<String>,
}

impl ClubProfile {
    /// Имя, которым клуб подписывает свои турниры.
    fn display_name(&self) -> Option<&str> {
        self.fantasy_name
            .as_deref()
            .or(self.club_name.as_deref())
    }
}

/// Владеет ли учётка турниром.
///
/// Две независимые ветки, обе оставлены намеренно:
/// 1) строгая — id учётки совпадает с `club_id` записи;
/// 2) легаси — учётка клубного типа, и её имя текстуально равно
///    имени клуба в записи (записи до привязки по id).
pub fn is_owner(tournament: &Tournament, profile: &ClubProfile) -> bool {
    if let Some(club_id) = &tournament.club_id {
        if *club_id == profile.id {
            return true;
        }
    }

    if profile.kind == ActorKind::Club {
        if let Some(name) = profile.display_name() {
            if name == tournament.club {
                return true;
            }
        }
    }

    false
}
