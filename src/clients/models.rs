#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChatModel {
    #[default]
    Llama3_70b,  // "llama3-70b-8192" (Groq)
    Llama3_8b,   // "llama3-8b-8192" (Groq)
    Gpt4oMini,   // "gpt-4o-mini" (OpenAI)
    Gpt4o,       // "gpt-4o" (OpenAI)
    DeepSeekChat, // "deepseek-chat"
    Override(String),
}

impl ChatModel {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Llama3_70b => "llama3-70b-8192",
            Self::Llama3_8b => "llama3-8b-8192",
            Self::Gpt4oMini => "gpt-4o-mini",
            Self::Gpt4o => "gpt-4o",
            Self::DeepSeekChat => "deepseek-chat",
            Self::Override(s) => s.as_str(),
        }
    }

    /// Map a user-supplied id onto a known model, keeping unknown ids verbatim.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "llama3-70b-8192" => Self::Llama3_70b,
            "llama3-8b-8192" => Self::Llama3_8b,
            "gpt-4o-mini" => Self::Gpt4oMini,
            "gpt-4o" => Self::Gpt4o,
            "deepseek-chat" => Self::DeepSeekChat,
            other => Self::Override(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_back_to_variants() {
        assert_eq!(ChatModel::from_id("llama3-70b-8192"), ChatModel::Llama3_70b);
        assert_eq!(ChatModel::from_id("mixtral-8x7b-32768").id(), "mixtral-8x7b-32768");
    }
}
