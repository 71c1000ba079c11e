// src/detail/view.rs

use crate::detail::add_pair::AddPairForm;
use crate::detail::PairRegistrar;
use crate::domain::club::{is_owner, ClubProfile};
use crate::domain::pair::{filter_pairs, PairEntry};
use crate::domain::tournament::{Tournament, TournamentError};
use crate::infra::persistence::TournamentStore;

/// Что показывает страница турнира после загрузки.
///
/// NotFound — терминальное состояние: дальше никаких действий,
/// только сообщение «турнир не найден».
#[derive(Debug)]
pub enum DetailScreen {
    Found(TournamentDetail),
    NotFound,
}

/// Страница одного турнира: запись, состав пар и форма добавления.
///
/// Состав живёт в памяти (хранилище содержит только турниры);
/// его наполняет внешний регистрационный сервис.
#[derive(Debug)]
pub struct TournamentDetail {
    pub tournament: Tournament,
    pub roster: Vec<PairEntry>,
    pub form: AddPairForm,
}

impl TournamentDetail {
    /// Найти турнир по id в коллекции хранилища.
    pub fn load<S: TournamentStore>(
        store: &S,
        tournament_id: &str,
    ) -> Result<DetailScreen, TournamentError> {
        let collection = store.load_all()?;

        match collection.into_iter().find(|t| t.id == tournament_id) {
            Some(tournament) => Ok(DetailScreen::Found(Self::from_record(tournament))),
            None => Ok(DetailScreen::NotFound),
        }
    }

    pub fn from_record(tournament: Tournament) -> Self {
        Self {
            tournament,
            roster: Vec::new(),
            form: AddPairForm::default(),
        }
    }

    /// Залить состав, полученный от регистрационного сервиса.
    pub fn seed_roster(&mut self, pairs: Vec<PairEntry>) {
        self.roster = pairs;
    }

    /// Владеет ли зритель этим турниром (см. `domain::club::is_owner`).
    pub fn is_owner(&self, profile: &ClubProfile) -> bool {
        is_owner(&self.tournament, profile)
    }

    /// Видимая часть состава: поиск по именам (ИЛИ по двум полям)
    /// плюс необязательный фильтр категории.
    pub fn visible_pairs(&self, search: &str, category: Option<&str>) -> Vec<&PairEntry> {
        filter_pairs(&self.roster, search)
            .into_iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    /// Переключить окно регистрации. Только для владельца.
    ///
    /// Меняется ровно одно поле записи; после переключения
    /// коллекция сохраняется целиком.
    pub fn toggle_registration<S: TournamentStore>(
        &mut self,
        store: &mut S,
        actor: &ClubProfile,
    ) -> Result<(), TournamentError> {
        self.ensure_owner(actor)?;

        self.tournament.toggle_registration();
        self.persist(store)
    }

    /// Принять пару из формы. Только для владельца.
    ///
    /// Порядок: проверка ввода -> проверка лимита -> +1 к участникам ->
    /// сохранение -> пара в состав -> уведомление регистратора.
    /// Любой отказ до сохранения оставляет запись нетронутой.
    pub fn submit_pair<S: TournamentStore>(
        &mut self,
        store: &mut S,
        actor: &ClubProfile,
        registrar: &mut dyn PairRegistrar,
    ) -> Result<PairEntry, TournamentError> {
        self.ensure_owner(actor)?;

        // Сначала валидация ввода: при отказе форма хранит ввод как был.
        let entry = self
            .form
            .draft()
            .validate(&self.tournament.categories)?;

        self.tournament.record_pair_registration()?;
        self.persist(store)?;

        // Запись принята — теперь можно чистить форму.
        self.form.reset();

        self.roster.push(entry.clone());
        registrar.pair_registered(&self.tournament.id, &entry);

        Ok(entry)
    }

    fn ensure_owner(&self, actor: &ClubProfile) -> Result<(), TournamentError> {
        if self.is_owner(actor) {
            return Ok(());
        }

        Err(TournamentError::NotOwner {
            actor_id: actor.id.clone(),
            tournament_id: self.tournament.id.clone(),
        })
    }

    /// Полный цикл read-modify-write: перечитать коллекцию,
    /// заменить свою запись, записать коллекцию обратно.
    fn persist<S: TournamentStore>(&self, store: &mut S) -> Result<(), TournamentError> {
        self.tournament.validate()?;

        let mut collection = store.load_all()?;

        match collection.iter_mut().find(|t| t.id == self.tournament.id) {
            Some(slot) => *slot = self.tournament.clone(),
            None => {
                return Err(TournamentError::TournamentNotFound {
                    tournament_id: self.tournament.id.clone(),
                })
            }
        }

        store.save_all(&collection)?;
        Ok(())
    }
}
