use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Заголовочные поля, общие для всех агрегатов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Идентификатор записи
    pub id: Id,
    /// Бизнес-код ("CUS-00017", "ORD-2026-0042")
    pub code: String,
    /// Отображаемое имя / описание
    pub description: String,
    /// Произвольный комментарий
    pub comment: Option<String>,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
