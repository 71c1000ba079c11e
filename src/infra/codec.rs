// src/infra/codec.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::tournament::{Location, Phase, RegistrationState, Tournament};

// Кодек коллекции турниров в том виде, в котором её писал старый фронт:
// camelCase-ключи (и почему-то snake_case `club_id`), числа иногда строками,
// id иногда числом, один строковый `status` вместо пары фаза/регистрация.
//
// Форму прощаем, мусор — нет: нечитаемое число, дата или неизвестный
// статус валят загрузку структурированной ошибкой, а не нулём по умолчанию.

/// Id в легаси-записях: строка или число.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WireId {
    Str(String),
    Num(serde_json::Number),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Str(s) => s,
            WireId::Num(n) => n.to_string(),
        }
    }
}

/// Числовое поле в легаси-записях: число или строка с числом.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Num(f64),
    Str(String),
}

impl WireNumber {
    /// Пустую строку считаем отсутствующим значением (0),
    /// непустую парсим; не парсится — ошибка.
    fn as_f64(&self, field: &'static str) -> Result<f64, DecodeError> {
        match self {
            WireNumber::Num(n) => Ok(*n),
            WireNumber::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0.0);
                }
                trimmed.parse::<f64>().map_err(|_| DecodeError::BadNumber {
                    field,
                    value: s.clone(),
                })
            }
        }
    }

    fn as_u32(&self, field: &'static str) -> Result<u32, DecodeError> {
        let value = self.as_f64(field)?;
        if value < 0.0 {
            return Err(DecodeError::BadNumber {
                field,
                value: value.to_string(),
            });
        }
        // parseInt-поведение: дробную часть отбрасываем.
        Ok(value.trunc() as u32)
    }
}

fn default_sport() -> String {
    "Padel".to_string()
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WireLocation {
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
}

/// Запись турнира в wire-формате хранилища.
#[derive(Debug, Serialize, Deserialize)]
struct WireTournament {
    id: WireId,
    name: String,

    #[serde(default)]
    club: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    club_id: Option<String>,

    #[serde(default)]
    location: WireLocation,
    #[serde(default = "default_sport")]
    sport: String,
    #[serde(default)]
    description: String,

    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,

    #[serde(rename = "registrationFee", default)]
    registration_fee: Option<WireNumber>,

    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    courts: Vec<String>,

    #[serde(rename = "participantsCount", default)]
    participants_count: Option<WireNumber>,
    #[serde(rename = "maxParticipants", default)]
    max_participants: Option<WireNumber>,
    #[serde(rename = "hasParticipantLimit", default)]
    has_participant_limit: bool,

    status: String,
}

fn parse_wire_date(field: &'static str, value: &str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DecodeError::BadDate {
        field,
        value: value.to_string(),
    })
}

/// Один строковый статус -> пара (фаза, регистрация).
fn decode_status(status: &str) -> Result<(Phase, RegistrationState), DecodeError> {
    match status {
        "open" => Ok((Phase::Scheduled, RegistrationState::Open)),
        // Легаси-пауза регистрации писалась как отдельный статус `closed`.
        "closed" | "scheduled" => Ok((Phase::Scheduled, RegistrationState::Paused)),
        "in-progress" => Ok((Phase::InProgress, RegistrationState::Paused)),
        "completed" => Ok((Phase::Completed, RegistrationState::Paused)),
        other => Err(DecodeError::UnknownStatus(other.to_string())),
    }
}

fn decode_record(wire: WireTournament) -> Result<Tournament, DecodeError> {
    let (phase, registration) = decode_status(&wire.status)?;

    let registration_fee = match &wire.registration_fee {
        Some(n) => n.as_f64("registrationFee")?,
        None => 0.0,
    };
    let participants_count = match &wire.participants_count {
        Some(n) => n.as_u32("participantsCount")?,
        None => 0,
    };
    let max_participants = match &wire.max_participants {
        Some(n) => n.as_u32("maxParticipants")?,
        None => 0,
    };

    Ok(Tournament {
        id: wire.id.into_string(),
        name: wire.name,
        club: wire.club,
        club_id: wire.club_id,
        location: Location {
            city: wire.location.city,
            state: wire.location.state,
        },
        sport: wire.sport,
        description: wire.description,
        start_date: parse_wire_date("startDate", &wire.start_date)?,
        end_date: parse_wire_date("endDate", &wire.end_date)?,
        registration_fee,
        categories: wire.categories,
        courts: wire.courts,
        participants_count,
        max_participants,
        has_participant_limit: wire.has_participant_limit,
        phase,
        registration,
    })
}

fn encode_record(t: &Tournament) -> WireTournament {
    WireTournament {
        id: WireId::Str(t.id.clone()),
        name: t.name.clone(),
        club: t.club.clone(),
        club_id: t.club_id.clone(),
        location: WireLocation {
            city: t.location.city.clone(),
            state: t.location.state.clone(),
        },
        sport: t.sport.clone(),
        description: t.description.clone(),
        start_date: t.start_date.format("%Y-%m-%d").to_string(),
        end_date: t.end_date.format("%Y-%m-%d").to_string(),
        registration_fee: Some(WireNumber::Num(t.registration_fee)),
        categories: t.categories.clone(),
        courts: t.courts.clone(),
        participants_count: Some(WireNumber::Num(t.participants_count as f64)),
        max_participants: Some(WireNumber::Num(t.max_participants as f64)),
        has_participant_limit: t.has_participant_limit,
        status: t.status_code().as_wire_str().to_string(),
    }
}

/// Разобрать коллекцию из blob-а. Любая битая запись валит всю загрузку.
pub fn decode_tournaments(raw: &str) -> Result<Vec<Tournament>, DecodeError> {
    let wires: Vec<WireTournament> = serde_json::from_str(raw)?;
    wires.into_iter().map(decode_record).collect()
}

/// Сериализовать коллекцию обратно в wire-формат.
pub fn encode_tournaments(tournaments: &[Tournament]) -> Result<String, serde_json::Error> {
    let wires: Vec<WireTournament> = tournaments.iter().map(encode_record).collect();
    serde_json::to_string(&wires)
}

/// Ошибки разбора коллекции.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Коллекция не парсится как JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Поле {field} не является числом: {value:?}")]
    BadNumber { field: &'static str, value: String },

    #[error("Поле {field} не является датой YYYY-MM-DD: {value:?}")]
    BadDate { field: &'static str, value: String },

    #[error("Неизвестный статус турнира: {0:?}")]
    UnknownStatus(String),
}
