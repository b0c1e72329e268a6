use serde::{Deserialize, Serialize};

/// The three structured-generation kinds the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    Website,
    Email,
    Insights,
}

impl GenerationKind {
    /// Field names the model must return for this kind. Every field must be
    /// present and a non-empty string for the result to validate.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            GenerationKind::Website => &["html", "css", "title", "description"],
            GenerationKind::Email => &["subject", "content", "description"],
            GenerationKind::Insights => &[
                "competitors",
                "seo",
                "prosAndCons",
                "marketRelevance",
                "futureScore",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationKind::Website => "website",
            GenerationKind::Email => "email",
            GenerationKind::Insights => "insights",
        }
    }
}

/// Generated website bundle: a full HTML document plus its stylesheet and
/// the metadata shown in the dashboard preview card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteContent {
    pub html: String,
    pub css: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub subject: String,
    pub content: String,
    pub description: String,
}

/// AI insight report. Serialized with camelCase keys: the dashboard's
/// insight panel reads `prosAndCons`/`marketRelevance`/`futureScore`
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsContent {
    pub competitors: String,
    pub seo: String,
    pub pros_and_cons: String,
    pub market_relevance: String,
    pub future_score: String,
}

/// One generated result, success and fallback alike. Untagged: the wire
/// shape is the bare contract object for the request kind, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedContent {
    Insights(InsightsContent),
    Website(WebsiteContent),
    Email(EmailContent),
}

impl GeneratedContent {
    pub fn kind(&self) -> GenerationKind {
        match self {
            GeneratedContent::Website(_) => GenerationKind::Website,
            GeneratedContent::Email(_) => GenerationKind::Email,
            GeneratedContent::Insights(_) => GenerationKind::Insights,
        }
    }
}

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Ordered history of a dashboard chat session. The caller owns this value:
/// it is accepted in each request, extended with the new exchange, and
/// returned in the response. There is no server-side session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub turns: Vec<ChatTurn>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: ChatRole::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: ChatRole::Assistant,
            content: content.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }
}
