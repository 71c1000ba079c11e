//! Каталог и управление турнирами спортивного клуба.
//!
//! Два рабочих компонента поверх общей доменной модели:
//! - каталог (directory) — список турниров клуба с составным фильтром
//!   и счётчиками вкладок;
//! - страница турнира (detail) — состояние регистрации, занятость
//!   и приём пар через форму.
//!
//! Хранилище — внешний key/value blob (см. `infra::persistence`);
//! вся запись идёт полными коллекциями, read-modify-write.

pub mod api;
pub mod detail;
pub mod directory;
pub mod domain;
pub mod infra;
pub mod state;

pub use state::{RosterBook, TournamentHub};
