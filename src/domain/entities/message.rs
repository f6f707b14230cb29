use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Visitor submission from the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct MessageForm {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000, message = "Message cannot be empty"))]
    pub message: String,
}

impl MessageForm {
    pub fn trimmed(self) -> Self {
        MessageForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Stored message. `created_at` is assigned by the store; rows are never updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageReceivedResponse {
    pub message: String,
    pub stored: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_form_validates() {
        let form = MessageForm {
            name: "  Rina ".into(),
            email: " rina@example.com ".into(),
            message: " Hello there ".into(),
        }
        .trimmed();
        assert_eq!(form.name, "Rina");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn blank_message_is_rejected() {
        let form = MessageForm {
            name: "Rina".into(),
            email: "rina@example.com".into(),
            message: "   ".into(),
        }
        .trimmed();
        assert!(form.validate().unwrap_err().field_errors().contains_key("message"));
    }
}
