use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Any role a client sends that this app never produces, e.g. "system".
    #[serde(other)]
    Other,
}

/// One message of the conversation. `content` is optional on the wire so a
/// turn without text can be rejected instead of silently treated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatTurn {
    pub fn new(role: Role, content: impl Into<String>) -> ChatTurn {
        ChatTurn {
            role,
            content: Some(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> ChatTurn {
        ChatTurn::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> ChatTurn {
        ChatTurn::new(Role::Assistant, content)
    }

    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub revealed: bool,
}

impl Flashcard {
    pub fn new(question: String, answer: String) -> Flashcard {
        Flashcard {
            question,
            answer,
            revealed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_roles_use_lowercase_names() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "assistant", "content": "hi"}"#).unwrap();
        assert_eq!(turn, ChatTurn::assistant("hi"));

        let json = serde_json::to_value(ChatTurn::user("yo")).unwrap();
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn missing_content_is_kept_as_none() {
        let turn: ChatTurn = serde_json::from_str(r#"{"role": "user"}"#).unwrap();
        assert_eq!(turn.content, None);
        assert_eq!(turn.text(), "");
    }

    #[test]
    fn foreign_role_is_kept_as_other() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "system", "content": "x"}"#).unwrap();
        assert_eq!(turn.role, Role::Other);
    }

    #[test]
    fn toggle_flips_revealed() {
        let mut card = Flashcard::new("Q?".into(), "A".into());
        assert!(!card.revealed);
        card.toggle();
        assert!(card.revealed);
        card.toggle();
        assert!(!card.revealed);
    }
}
