//! Blocking HTTP client for a running roster server.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use roster_core::Catalog;
use roster_server::api::{ErrorResponse, MessageResponse};
use url::Url;

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";

pub struct ApiClient {
    base: Url,
    agent: ureq::Agent,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid server URL '{base}'"))?;
        if base.cannot_be_a_base() {
            bail!("server URL '{base}' cannot carry a path");
        }
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Ok(Self { base, agent })
    }

    pub fn activities(&self) -> Result<Catalog> {
        let url = self.endpoint(&["activities"])?;
        let response = self.call("GET", &url)?;
        response
            .into_json::<Catalog>()
            .context("failed to decode activities response")
    }

    pub fn signup(&self, activity: &str, email: &str) -> Result<String> {
        self.membership("POST", activity, "signup", email)
    }

    pub fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        self.membership("DELETE", activity, "unregister", email)
    }

    fn membership(&self, method: &str, activity: &str, action: &str, email: &str) -> Result<String> {
        let mut url = self.endpoint(&["activities", activity, action])?;
        url.query_pairs_mut().append_pair("email", email);
        let response = self.call(method, &url)?;
        let body: MessageResponse = response
            .into_json()
            .with_context(|| format!("failed to decode {action} response"))?;
        Ok(body.message)
    }

    /// Base URL with `segments` appended; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("server URL '{}' cannot carry a path", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn call(&self, method: &str, url: &Url) -> Result<ureq::Response> {
        match self.agent.request_url(method, url).call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, response)) => {
                let detail = response
                    .into_json::<ErrorResponse>()
                    .map(|body| body.detail)
                    .unwrap_or_else(|_| "no error detail".to_string());
                bail!("{detail} (HTTP {status})")
            }
            Err(ureq::Error::Transport(err)) => {
                Err(anyhow!(err)).with_context(|| format!("failed to reach roster server at {}", self.base))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_percent_encodes_activity_names() {
        let client = ApiClient::new("http://127.0.0.1:8000").expect("client");
        let url = client
            .endpoint(&["activities", "Chess Club", "signup"])
            .expect("endpoint");
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/activities/Chess%20Club/signup");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = ApiClient::new("http://example.test/roster/").expect("client");
        let url = client.endpoint(&["activities"]).expect("endpoint");
        assert_eq!(url.path(), "/roster/activities");
    }

    #[test]
    fn slash_in_activity_name_stays_one_segment() {
        let client = ApiClient::new("http://example.test").expect("client");
        let url = client
            .endpoint(&["activities", "Arts/Crafts", "signup"])
            .expect("endpoint");
        assert_eq!(url.path(), "/activities/Arts%2FCrafts/signup");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(ApiClient::new("mailto:someone@mergington.edu").is_err());
        assert!(ApiClient::new("not a url").is_err());
    }
}
