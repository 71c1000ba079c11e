//! Доменная модель клубных турниров: турнир, пары, профиль клуба.

pub mod club;
pub mod pair;
pub mod tournament;

// Базовые идентификаторы. В легаси-хранилище id бывают и числами,
// и строками, поэтому внутри везде работаем со строками.
pub type TournamentId = String;
pub type ClubId = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Tournament и т.п.
pub use club::*;
pub use pair::*;
pub use tournament::*;
