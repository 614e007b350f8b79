//! Escalation detection over generated replies.

/// Phrases whose presence in a reply means a human handoff was offered.
pub const ESCALATION_INDICATORS: [&str; 7] = [
    "connect you with a human support agent",
    "connect you with a senior support agent",
    "transfer you",
    "escalate",
    "human support",
    "senior support agent",
    "specialized issue that requires expert attention",
];

/// Decides whether a reply implies handing the customer to a human.
pub struct EscalationClassifier;

impl EscalationClassifier {
    /// Case-insensitive substring match of `reply` against
    /// [`ESCALATION_INDICATORS`]. The query does not influence the result.
    pub fn should_escalate(_query: &str, reply: &str) -> bool {
        let reply = reply.to_lowercase();
        ESCALATION_INDICATORS
            .iter()
            .any(|indicator| reply.contains(indicator))
    }
}
