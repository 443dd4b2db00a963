use color_eyre::Result;

use crate::directus::DirectusClient;
use crate::models::StagedQuestion;

// ---------------------------------------------------------------------------
// ReviewRepository trait (service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    fn pending_questions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<StagedQuestion>>> + Send;

    fn accept_question(
        &self,
        question_id: i64,
        user: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn decline_question(
        &self,
        question_id: i64,
        user: &str,
        reason: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

impl ReviewRepository for DirectusClient {
    async fn pending_questions(&self) -> Result<Vec<StagedQuestion>> {
        DirectusClient::pending_questions(self).await
    }

    async fn accept_question(&self, question_id: i64, user: &str) -> Result<()> {
        DirectusClient::accept_question(self, question_id, user).await
    }

    async fn decline_question(&self, question_id: i64, user: &str, reason: &str) -> Result<()> {
        DirectusClient::decline_question(self, question_id, user, reason).await
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub enum AcceptOutcome {
    Accepted,
    /// The question is not in the pending queue (already reviewed or unknown).
    NotPending,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeclineOutcome {
    Declined,
    EmptyReason,
    NotPending,
}

// ---------------------------------------------------------------------------
// ReviewService
// ---------------------------------------------------------------------------

pub struct ReviewService<R: ReviewRepository = DirectusClient> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn pending(&self) -> Result<Vec<StagedQuestion>> {
        self.repo.pending_questions().await
    }

    async fn is_pending(&self, question_id: i64) -> Result<bool> {
        let pending = self.repo.pending_questions().await?;
        Ok(pending.iter().any(|q| q.id == question_id))
    }

    pub async fn accept(&self, question_id: i64, user: &str) -> Result<AcceptOutcome> {
        if !self.is_pending(question_id).await? {
            tracing::warn!("question {question_id} is not pending review");
            return Ok(AcceptOutcome::NotPending);
        }

        self.repo.accept_question(question_id, user).await?;
        Ok(AcceptOutcome::Accepted)
    }

    pub async fn decline(&self, question_id: i64, user: &str, reason: &str) -> Result<DeclineOutcome> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Ok(DeclineOutcome::EmptyReason);
        }

        if !self.is_pending(question_id).await? {
            tracing::warn!("question {question_id} is not pending review");
            return Ok(DeclineOutcome::NotPending);
        }

        self.repo.decline_question(question_id, user, reason).await?;
        Ok(DeclineOutcome::Declined)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn staged(id: i64) -> StagedQuestion {
        StagedQuestion {
            id,
            question_prompt: format!("Question {id}"),
            question_type: Some("single_answer".to_string()),
            explanation: None,
            status: Some("pending".to_string()),
            ai_answer_options_staging: Vec::new(),
        }
    }

    fn with_pending(mock: &mut MockReviewRepository, ids: &'static [i64]) {
        mock.expect_pending_questions()
            .returning(move || Box::pin(async move { Ok(ids.iter().copied().map(staged).collect()) }));
    }

    #[tokio::test]
    async fn accept_pending_question_calls_rpc() {
        let mut mock = MockReviewRepository::new();
        with_pending(&mut mock, &[7, 8]);
        mock.expect_accept_question()
            .withf(|id, user| *id == 7 && user.to_string() == "reviewer")
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let svc = ReviewService::new(mock);
        let outcome = svc.accept(7, "reviewer").await.unwrap();

        assert_eq!(outcome, AcceptOutcome::Accepted);
    }

    #[tokio::test]
    async fn accept_unknown_question_is_not_pending() {
        let mut mock = MockReviewRepository::new();
        with_pending(&mut mock, &[1]);
        mock.expect_accept_question().never();

        let svc = ReviewService::new(mock);
        let outcome = svc.accept(2, "reviewer").await.unwrap();

        assert_eq!(outcome, AcceptOutcome::NotPending);
    }

    #[tokio::test]
    async fn decline_with_blank_reason_makes_no_calls() {
        let mut mock = MockReviewRepository::new();
        mock.expect_pending_questions().never();
        mock.expect_decline_question().never();

        let svc = ReviewService::new(mock);
        let outcome = svc.decline(3, "reviewer", "   ").await.unwrap();

        assert_eq!(outcome, DeclineOutcome::EmptyReason);
    }

    #[tokio::test]
    async fn decline_forwards_trimmed_reason() {
        let mut mock = MockReviewRepository::new();
        with_pending(&mut mock, &[3]);
        mock.expect_decline_question()
            .withf(|id, user, reason| {
                *id == 3 && user.to_string() == "reviewer" && reason.to_string() == "off topic"
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(()) }));

        let svc = ReviewService::new(mock);
        let outcome = svc.decline(3, "reviewer", " off topic ").await.unwrap();

        assert_eq!(outcome, DeclineOutcome::Declined);
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let mut mock = MockReviewRepository::new();
        mock.expect_pending_questions()
            .returning(|| Box::pin(async { Err(color_eyre::eyre::eyre!("unreachable")) }));

        let svc = ReviewService::new(mock);
        assert!(svc.accept(1, "reviewer").await.is_err());
    }
}
