use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookEntity is the copy of a book held by the catalog. The title never changes
// after creation, only the status moves between Available and Borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            book_status: BookStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // No state guard here, borrowing a borrowed book leaves it borrowed.
    pub fn borrow(&mut self) {
        self.book_status = BookStatus::Borrowed;
        self.updated_at = Utc::now().naive_utc();
    }

    pub fn returned(&mut self) {
        self.book_status = BookStatus::Available;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}
