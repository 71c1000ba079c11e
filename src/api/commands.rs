use serde::{Deserialize, Serialize};

use crate::domain::TournamentId;

/// Команда верхнего уровня.
///
/// Одна команда = одно действие пользователя в интерфейсе.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Действие в каталоге «мои турниры».
    Directory(DirectoryCommand),

    /// Действие на странице конкретного турнира.
    Detail(DetailCommand),
}

/// Команды каталога.
///
/// Каталог умеет только удалять — редактирование полей записи
/// делегируется странице турнира.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DirectoryCommand {
    /// Удалить турнир безвозвратно и сохранить остаток коллекции.
    DeleteTournament(DeleteTournamentCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteTournamentCommand {
    pub tournament_id: TournamentId,
}

/// Команды страницы турнира. Обе только для владельца.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DetailCommand {
    /// Переключить окно регистрации: открыто <-> пауза.
    ToggleRegistration(ToggleRegistrationCommand),

    /// Добавить пару в турнир через форму.
    AddPair(AddPairCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToggleRegistrationCommand {
    pub tournament_id: TournamentId,
}

/// Сырой ввод формы «добавить дуплу».
///
/// Имена обрезаются от пробелов уже при валидации;
/// категория обязана быть из списка категорий турнира.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddPairCommand {
    pub tournament_id: TournamentId,
    pub player1: String,
    pub player2: String,
    pub category: String,
}
