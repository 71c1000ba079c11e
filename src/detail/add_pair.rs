// src/detail/add_pair.rs

use serde::{Deserialize, Serialize};

use crate::domain::pair::{PairDraft, PairEntry, PairError};

/// Модальная форма «добавить дуплу».
///
/// Держит сырой ввод трёх полей. При отказе валидации ввод
/// остаётся как был; при приёме поля очищаются и форма закрывается.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddPairForm {
    pub is_open: bool,
    pub player1: String,
    pub player2: String,
    pub category: String,
}

impl AddPairForm {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Текущий ввод как черновик пары.
    pub fn draft(&self) -> PairDraft {
        PairDraft {
            player1: self.player1.clone(),
            player2: self.player2.clone(),
            category: self.category.clone(),
        }
    }

    /// Очистить поля и закрыть форму (после принятой пары).
    pub fn reset(&mut self) {
        self.player1.clear();
        self.player2.clear();
        self.category.clear();
        self.close();
    }

    /// Отправка формы.
    ///
    /// Валидация по правилам `PairDraft::validate` (обрезка пробелов,
    /// непустые имена, категория из списка турнира). Успех возвращает
    /// готовую запись, чистит поля и закрывает форму.
    pub fn submit(&mut self, categories: &[String]) -> Result<PairEntry, PairError> {
        let entry = self.draft().validate(categories)?;
        self.reset();
        Ok(entry)
    }
}
