// src/directory/directory.rs

use serde::{Deserialize, Serialize};

use crate::directory::filter::{
    empty_kind, filter_tournaments, status_counts, DirectoryFilter, EmptyListKind, StatusCounts,
    StatusFilter,
};
use crate::domain::tournament::{Tournament, TournamentError};
use crate::domain::TournamentId;
use crate::infra::persistence::TournamentStore;

/// Запрос навигации к внешнему роутеру.
///
/// Каталог сам никуда не переходит — он только просит:
/// форму создания, страницу турнира или форму редактирования.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationTarget {
    CreateTournament,
    TournamentDetail(TournamentId),
    EditTournament(TournamentId),
}

/// Каталог турниров текущего клуба.
///
/// Коллекция читается из хранилища один раз; фильтры применяются
/// на каждое изменение ввода поверх загруженной копии.
/// Из мутаций каталогу доступно только удаление — редактирование
/// делегируется странице турнира по id.
pub struct TournamentDirectory {
    tournaments: Vec<Tournament>,
    pub filter: DirectoryFilter,
}

impl TournamentDirectory {
    /// Загрузить коллекцию клуба целиком.
    pub fn load<S: TournamentStore>(store: &S) -> Result<Self, TournamentError> {
        let tournaments = store.load_all()?;

        Ok(Self {
            tournaments,
            filter: DirectoryFilter::default(),
        })
    }

    /// Вся коллекция в порядке вставки (для счётчиков и отладки).
    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    /// Видимый список: коллекция через текущий фильтр.
    pub fn visible(&self) -> Vec<&Tournament> {
        filter_tournaments(&self.tournaments, &self.filter)
    }

    /// Бейджи вкладок — всегда по нефильтрованной коллекции.
    pub fn counts(&self) -> StatusCounts {
        status_counts(&self.tournaments)
    }

    /// Какое «пусто» показывать (None — список не пуст).
    pub fn empty_kind(&self) -> Option<EmptyListKind> {
        empty_kind(self.visible().is_empty(), &self.filter)
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_date_filter(&mut self, date: impl Into<String>) {
        self.filter.date = date.into();
    }

    /// Кнопка «очистить»: сбрасывает поиск и дату, вкладку не трогает.
    pub fn clear_filters(&mut self) {
        self.filter.search.clear();
        self.filter.date.clear();
    }

    /// Удалить турнир и сохранить остаток коллекции.
    ///
    /// Подтверждение — забота UI; здесь удаление безусловное
    /// и необратимое.
    pub fn delete<S: TournamentStore>(
        &mut self,
        store: &mut S,
        tournament_id: &str,
    ) -> Result<(), TournamentError> {
        let before = self.tournaments.len();
        self.tournaments.retain(|t| t.id != tournament_id);

        if self.tournaments.len() == before {
            return Err(TournamentError::TournamentNotFound {
                tournament_id: tournament_id.to_string(),
            });
        }

        store.save_all(&self.tournaments)?;
        Ok(())
    }

    pub fn create_request(&self) -> NavigationTarget {
        NavigationTarget::CreateTournament
    }

    pub fn detail_request(&self, tournament_id: &str) -> NavigationTarget {
        NavigationTarget::TournamentDetail(tournament_id.to_string())
    }

    pub fn edit_request(&self, tournament_id: &str) -> NavigationTarget {
        NavigationTarget::EditTournament(tournament_id.to_string())
    }
}
