// src/detail/mod.rs

pub mod add_pair;
pub mod view;

pub use add_pair::AddPairForm;
pub use view::{DetailScreen, TournamentDetail};

use crate::domain::pair::PairEntry;

/// Внешний регистрационно-платёжный сервис.
///
/// Ему сообщаем каждую принятую пару; подтверждение оплаты
/// и статус `confirmed` — его зона, не наша.
pub trait PairRegistrar {
    fn pair_registered(&mut self, tournament_id: &str, pair: &PairEntry);
}
