/// Fixed instruction sent as the model's system prompt on every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a friendly and encouraging 4th-grade teaching assistant. \
A student just failed a test and needs help with the following skills. \
For each skill, please generate a simple, easy-to-understand mini-lesson. \
This lesson should include: 1. A simple definition of the skill. \
2. A few tips or strategies to help them get the right answer next time. \
3. A quick, simple example. Do not use external links or URLs.";

/// Prefix of the user turn; the skills follow it.
pub const USER_QUERY_PREFIX: &str = "Here are the skills I struggled with: ";

/// System instruction and user query for one upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPayload {
    pub system_instruction: String,
    pub user_query: String,
}

/// Joins the skills into the user turn, in the order given.
#[must_use]
pub fn build_user_query(skills: &[String]) -> String {
    format!("{}{}", USER_QUERY_PREFIX, skills.join(", "))
}

#[must_use]
pub fn build_payload(skills: &[String]) -> UpstreamPayload {
    UpstreamPayload {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        user_query: build_user_query(skills),
    }
}
