use std::collections::HashMap;

use thiserror::Error;

use crate::domain::tournament::{Tournament, TournamentError};
use crate::infra::codec::{decode_tournaments, encode_tournaments, DecodeError};

/// Ключ, под которым лежит вся коллекция турниров клуба.
pub const TOURNAMENTS_KEY: &str = "clubTournaments";

/// Непрозрачное key/value-хранилище blob-ов (аналог localStorage).
///
/// Синхронное и мгновенное с точки зрения вызывающего;
/// каждая мутация — полная перезапись значения по ключу.
pub trait BlobStore {
    /// Прочитать blob. None — ключа ещё нет.
    fn read(&self, key: &str) -> Option<String>;

    /// Записать blob целиком.
    fn write(&mut self, key: &str, value: String);
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) {
        self.blobs.insert(key.to_string(), value);
    }
}

/// Репозиторий коллекции турниров.
///
/// Каталог и страница турнира зависят от этого трейта, а не от
/// конкретного хранилища — в тестах подставляется in-memory фейк.
pub trait TournamentStore {
    /// Загрузить коллекцию целиком (отсутствующий ключ = пустая коллекция).
    fn load_all(&self) -> Result<Vec<Tournament>, StoreError>;

    /// Сохранить коллекцию целиком (полная замена значения по ключу).
    fn save_all(&mut self, tournaments: &[Tournament]) -> Result<(), StoreError>;
}

/// Репозиторий поверх произвольного blob-хранилища + кодека.
#[derive(Debug, Default)]
pub struct BlobTournamentStore<B: BlobStore> {
    blob: B,
}

impl<B: BlobStore> BlobTournamentStore<B> {
    pub fn new(blob: B) -> Self {
        Self { blob }
    }
}

impl BlobTournamentStore<InMemoryBlobStore> {
    /// In-memory вариант (тесты, CLI-демки).
    pub fn in_memory() -> Self {
        Self::new(InMemoryBlobStore::new())
    }

    /// Сразу с посеянной коллекцией.
    pub fn seeded(tournaments: &[Tournament]) -> Result<Self, StoreError> {
        let mut store = Self::in_memory();
        store.save_all(tournaments)?;
        Ok(store)
    }
}

impl<B: BlobStore> TournamentStore for BlobTournamentStore<B> {
    fn load_all(&self) -> Result<Vec<Tournament>, StoreError> {
        match self.blob.read(TOURNAMENTS_KEY) {
            Some(raw) => Ok(decode_tournaments(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&mut self, tournaments: &[Tournament]) -> Result<(), StoreError> {
        let raw = encode_tournaments(tournaments).map_err(StoreError::Encode)?;
        self.blob.write(TOURNAMENTS_KEY, raw);
        Ok(())
    }
}

/// Ошибки репозитория.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Не удалось разобрать коллекцию: {0}")]
    Decode(#[from] DecodeError),

    #[error("Не удалось сериализовать коллекцию: {0}")]
    Encode(serde_json::Error),
}

impl From<StoreError> for TournamentError {
    fn from(err: StoreError) -> Self {
        TournamentError::Storage(err.to_string())
    }
}
