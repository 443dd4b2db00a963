pub const HEALTH_URL: &str = "/health";
pub const FILTER_URL: &str = "/filter/{event}/{collection}";

pub fn filter_url(event: &str, collection: &str) -> String {
    format!("/filter/{event}/{collection}")
}

// Mutation events the filter is registered against
pub const ITEMS_CREATE: &str = "items.create";
pub const ITEMS_UPDATE: &str = "items.update";

// Question collections, by the names they carry across deployments
pub const DEFAULT_COLLECTIONS: &[&str] = &["Questions", "quiz_questions"];

// Answer mode labels
pub const SINGLE_ANSWER: &str = "single_answer";
pub const SINGLE_ANSWER_LEGACY: &str = "Single Answer";
pub const SINGLE_CHOICE: &str = "single_choice";
pub const SINGLE_CHOICE_SINGLE_ANSWER: &str = "single_choice_single_answer";
pub const MULTIPLE_ANSWERS: &str = "multiple_answers";
pub const MULTIPLE_ANSWERS_LEGACY: &str = "Multiple Answers";
pub const TRUE_FALSE: &str = "true_false";

pub const MIN_MULTIPLE_ANSWERS: usize = 2;
pub const MAX_MULTIPLE_ANSWERS: usize = 4;

// CMS REST API
pub const DEFAULT_DIRECTUS_URL: &str = "http://localhost:8055";
pub const SERVER_HEALTH_PATH: &str = "/server/health";
pub const STAGING_ITEMS_PATH: &str = "/items/ai_question_staging";
pub const STAGING_FIELDS: &str = "*,ai_answer_options_staging.*";
pub const PENDING_STATUS: &str = "pending";
pub const ACCEPT_RPC_PATH: &str = "/rpc/accept_ai_question";
pub const DECLINE_RPC_PATH: &str = "/rpc/decline_ai_question";
