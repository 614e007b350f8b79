//! Types describing a single support exchange.

use serde::{Deserialize, Serialize};

/// Reply style requested by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    #[default]
    Concise,
    Detailed,
}

impl Verbosity {
    /// Map the wire-level `concise` flag onto a verbosity mode.
    pub fn from_concise(concise: bool) -> Self {
        if concise {
            Verbosity::Concise
        } else {
            Verbosity::Detailed
        }
    }

    /// Style phrase spliced into the prompt preamble.
    pub fn reply_style(&self) -> &'static str {
        match self {
            Verbosity::Concise => "short and concise (1-3 sentences)",
            Verbosity::Detailed => "detailed and comprehensive",
        }
    }
}

/// Result of answering one customer question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskOutcome {
    /// Text returned to the customer. Never empty.
    pub response: String,
    /// Whether the reply hands the customer off to a human agent.
    pub escalated: bool,
}
