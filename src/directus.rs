use color_eyre::Result;
use serde::Serialize;

use crate::{
    models::{DataEnvelope, HealthStatus, StagedQuestion},
    names,
};

#[derive(Serialize)]
struct AcceptRequest<'a> {
    p_question_id: i64,
    p_user: &'a str,
}

#[derive(Serialize)]
struct DeclineRequest<'a> {
    p_question_id: i64,
    p_user: &'a str,
    p_reason: &'a str,
}

/// Thin client over the CMS REST API.
#[derive(Clone)]
pub struct DirectusClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl DirectusClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn check(resp: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("{what} failed: {status} - {text}");
            color_eyre::eyre::bail!("{what} returned {status}");
        }
        Ok(resp)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let resp = self
            .http
            .get(self.url(names::SERVER_HEALTH_PATH))
            .send()
            .await?;
        let health = Self::check(resp, "health check").await?.json().await?;
        Ok(health)
    }

    pub async fn pending_questions(&self) -> Result<Vec<StagedQuestion>> {
        let req = self.http.get(self.url(names::STAGING_ITEMS_PATH)).query(&[
            ("filter[status][_eq]", names::PENDING_STATUS),
            ("fields", names::STAGING_FIELDS),
        ]);
        let resp = self.authorize(req).send().await?;
        let envelope: DataEnvelope<Vec<StagedQuestion>> =
            Self::check(resp, "listing staged questions").await?.json().await?;

        tracing::debug!("{} questions pending review", envelope.data.len());
        Ok(envelope.data)
    }

    pub async fn accept_question(&self, question_id: i64, user: &str) -> Result<()> {
        let body = AcceptRequest {
            p_question_id: question_id,
            p_user: user,
        };
        let req = self.http.post(self.url(names::ACCEPT_RPC_PATH)).json(&body);
        let resp = self.authorize(req).send().await?;
        Self::check(resp, "accept_ai_question").await?;

        tracing::info!("question {question_id} accepted by {user}");
        Ok(())
    }

    pub async fn decline_question(&self, question_id: i64, user: &str, reason: &str) -> Result<()> {
        let body = DeclineRequest {
            p_question_id: question_id,
            p_user: user,
            p_reason: reason,
        };
        let req = self.http.post(self.url(names::DECLINE_RPC_PATH)).json(&body);
        let resp = self.authorize(req).send().await?;
        Self::check(resp, "decline_ai_question").await?;

        tracing::info!("question {question_id} declined by {user}");
        Ok(())
    }
}
