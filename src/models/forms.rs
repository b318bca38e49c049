use serde::{Deserialize, Serialize};
use crate::errors::{AppError, AppResult};
use super::ticket::{NewTicket, TicketStatus};

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CreateTicketForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusForm {
    pub status: TicketStatus,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignForm {
    pub manager_email: String,
}

impl CreateTicketForm {
    /// Trimmed category, with an empty input treated as no category.
    pub fn category(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }

    /// Validated draft owned by `created_by`; title and description are required.
    pub fn into_new_ticket(self, created_by: &str) -> AppResult<NewTicket> {
        let category = self.category();
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".into()));
        }
        if description.is_empty() {
            return Err(AppError::Validation("Description is required".into()));
        }

        Ok(NewTicket {
            title: title.to_string(),
            description: description.to_string(),
            category,
            created_by: created_by.to_string(),
            assigned_to: None,
        })
    }
}
