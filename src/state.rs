use std::collections::HashMap;

use crate::api::commands::{Command, DetailCommand, DirectoryCommand};
use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::api::queries::{
    build_counts_dto, build_pair_dto, build_tournament_card, build_tournament_detail, Query,
    QueryResponse,
};
use crate::detail::{DetailScreen, PairRegistrar, TournamentDetail};
use crate::directory::TournamentDirectory;
use crate::domain::club::ClubProfile;
use crate::domain::pair::PairEntry;
use crate::domain::TournamentId;
use crate::infra::persistence::TournamentStore;

/// Составы пар по турнирам.
///
/// Живут только в памяти сессии: хранилище содержит турниры,
/// составы наполняет внешний регистрационный сервис.
#[derive(Debug, Default)]
pub struct RosterBook {
    rosters: HashMap<TournamentId, Vec<PairEntry>>,
}

impl RosterBook {
    /// Залить состав турнира целиком (данные от внешнего сервиса).
    pub fn seed(&mut self, tournament_id: impl Into<TournamentId>, pairs: Vec<PairEntry>) {
        self.rosters.insert(tournament_id.into(), pairs);
    }

    pub fn pairs(&self, tournament_id: &str) -> &[PairEntry] {
        self.rosters
            .get(tournament_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl PairRegistrar for RosterBook {
    fn pair_registered(&mut self, tournament_id: &str, pair: &PairEntry) {
        self.rosters
            .entry(tournament_id.to_string())
            .or_default()
            .push(pair.clone());
    }
}

/// Корневое состояние приложения.
///
/// Владеет репозиторием, профилем действующей учётки и составами;
/// диспетчеризует команды и запросы внешнего API.
pub struct TournamentHub<S: TournamentStore> {
    store: S,
    profile: ClubProfile,
    rosters: RosterBook,
}

impl<S: TournamentStore> TournamentHub<S> {
    pub fn new(store: S, profile: ClubProfile) -> Self {
        Self {
            store,
            profile,
            rosters: RosterBook::default(),
        }
    }

    pub fn profile(&self) -> &ClubProfile {
        &self.profile
    }

    pub fn rosters(&self) -> &RosterBook {
        &self.rosters
    }

    pub fn seed_roster(&mut self, tournament_id: impl Into<TournamentId>, pairs: Vec<PairEntry>) {
        self.rosters.seed(tournament_id, pairs);
    }

    /// Выполнить команду (мутацию).
    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::Directory(DirectoryCommand::DeleteTournament(cmd)) => {
                let mut directory = TournamentDirectory::load(&self.store)?;
                directory.delete(&mut self.store, &cmd.tournament_id)?;
                Ok(CommandResponse::Ok)
            }

            Command::Detail(DetailCommand::ToggleRegistration(cmd)) => {
                let mut detail = self.require_detail(&cmd.tournament_id)?;
                detail.toggle_registration(&mut self.store, &self.profile)?;

                let dto = build_tournament_detail(
                    &detail.tournament,
                    self.rosters.pairs(&cmd.tournament_id),
                    &self.profile,
                );
                Ok(CommandResponse::TournamentState(dto))
            }

            Command::Detail(DetailCommand::AddPair(cmd)) => {
                let mut detail = self.require_detail(&cmd.tournament_id)?;

                detail.form.open();
                detail.form.player1 = cmd.player1;
                detail.form.player2 = cmd.player2;
                detail.form.category = cmd.category;

                let pair =
                    detail.submit_pair(&mut self.store, &self.profile, &mut self.rosters)?;
                Ok(CommandResponse::PairAdded(build_pair_dto(&pair)))
            }
        }
    }

    /// Выполнить запрос (только чтение).
    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::ListTournaments {
                status,
                search,
                date,
            } => {
                let mut directory = TournamentDirectory::load(&self.store)?;
                directory.set_status_filter(status);
                directory.set_search(search);
                directory.set_date_filter(date);

                let cards = directory
                    .visible()
                    .into_iter()
                    .map(build_tournament_card)
                    .collect();
                Ok(QueryResponse::Tournaments(cards))
            }

            Query::GetTournament { tournament_id } => {
                match TournamentDetail::load(&self.store, &tournament_id)? {
                    DetailScreen::Found(detail) => Ok(QueryResponse::Tournament(
                        build_tournament_detail(
                            &detail.tournament,
                            self.rosters.pairs(&tournament_id),
                            &self.profile,
                        ),
                    )),
                    DetailScreen::NotFound => Ok(QueryResponse::TournamentNotFound),
                }
            }

            Query::StatusCounts => {
                let directory = TournamentDirectory::load(&self.store)?;
                Ok(QueryResponse::Counts(build_counts_dto(directory.counts())))
            }
        }
    }

    /// Страница турнира для команды; отсутствие записи — ошибка API.
    fn require_detail(&self, tournament_id: &str) -> Result<TournamentDetail, ApiError> {
        match TournamentDetail::load(&self.store, tournament_id)? {
            DetailScreen::Found(detail) => Ok(detail),
            DetailScreen::NotFound => {
                Err(ApiError::TournamentNotFound(tournament_id.to_string()))
            }
        }
    }
}
