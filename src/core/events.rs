use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::dto::BookDto;
use crate::utils::date::serializer;

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Borrowed,
    Returned,
}

// DomainEvent is the notification handed to every registered sink
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub message: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added(book: &BookDto) -> Self {
        Self::build("book_added", book.book_id.as_str(), DomainEventType::Added,
                    format!("New book registered: {}", book.title))
    }

    pub fn borrowed(book: &BookDto) -> Self {
        Self::build("book_borrowed", book.book_id.as_str(), DomainEventType::Borrowed,
                    format!("The book '{}' has been borrowed.", book.title))
    }

    pub fn returned(book: &BookDto) -> Self {
        Self::build("book_returned", book.book_id.as_str(), DomainEventType::Returned,
                    format!("The book '{}' has been returned.", book.title))
    }

    fn build(name: &str, key: &str, kind: DomainEventType, message: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.to_string(),
            kind,
            message,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Display for DomainEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
