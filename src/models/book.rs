//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};

/// Book record, as stored and as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub published_year: i32,
}

/// Create book request
///
/// Fields are optional here so a missing one can be reported by name;
/// use [`CreateBook::into_new_book`] to obtain a validated [`NewBook`].
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i32>,
}

/// Validated data for a book about to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: String,
    pub published_year: i32,
}

/// Update book request; absent fields keep their stored value
#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: Option<String>,
    pub published_year: Option<i32>,
}

/// Response body for a successful creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookCreated {
    pub message: String,
    pub id: i32,
}

/// Response body carrying a single message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("Missing required field: {}", field))
}

/// Flatten validator errors into a single caller-facing message
fn validation_message(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value for field: {}", field),
            })
        })
        .collect();
    messages.sort();
    AppError::Validation(messages.join("; "))
}

impl CreateBook {
    /// Check presence of every required field, in declaration order, then
    /// field constraints.
    pub fn into_new_book(self) -> AppResult<NewBook> {
        let book = NewBook {
            title: self.title.ok_or_else(|| missing("title"))?,
            author: self.author.ok_or_else(|| missing("author"))?,
            published_year: self.published_year.ok_or_else(|| missing("published_year"))?,
        };
        book.validate().map_err(validation_message)?;
        Ok(book)
    }
}

impl UpdateBook {
    pub fn check(&self) -> AppResult<()> {
        self.validate().map_err(validation_message)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.published_year.is_none()
    }

    /// Apply the supplied fields to an existing record
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(ref title) = self.title {
            book.title = title.clone();
        }
        if let Some(ref author) = self.author {
            book.author = author.clone();
        }
        if let Some(year) = self.published_year {
            book.published_year = year;
        }
    }
}
