//! Best-effort fun-fact fetch shown on the end screen.

use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

/// Literal string shown when the fetch fails for any reason.
pub const FALLBACK_FACT: &str = "Failed to load fun fact";

/// Default public endpoint serving random facts as JSON.
pub const DEFAULT_FACT_URL: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

/// Fetches a fun fact from a fixed endpoint, falling back to
/// [`FALLBACK_FACT`] on any transport, status, or parse failure. No retries.
#[derive(Debug, Clone)]
pub struct FactProvider {
    client: reqwest::Client,
    url: String,
}

impl FactProvider {
    /// Creates a provider for the given endpoint with a bounded request
    /// timeout, so a slow endpoint can never hold the end screen forever.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip(url), fields(url = %url))]
    pub fn new(url: String, timeout: Duration) -> anyhow::Result<Self> {
        info!(url = %url, timeout_ms = timeout.as_millis() as u64, "Creating FactProvider");
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// Fetches one fact, returning the fallback string on any failure.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> String {
        match self.try_fetch().await {
            Ok(fact) => {
                debug!(len = fact.len(), "Fun fact fetched");
                fact
            }
            Err(e) => {
                warn!(error = %e, "Fun fact fetch failed, using fallback");
                FALLBACK_FACT.to_string()
            }
        }
    }

    async fn try_fetch(&self) -> anyhow::Result<String> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        fact_from_json(&body).ok_or_else(|| anyhow::anyhow!("response has no 'text' field"))
    }

    /// Spawns the fetch as a background task and returns a receiver for the
    /// result, so the game loop never blocks on the network. The end screen
    /// shows a placeholder until the receiver resolves.
    #[instrument(skip(self))]
    pub fn spawn_fetch(&self) -> oneshot::Receiver<String> {
        let provider = self.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let fact = provider.fetch().await;
            // Receiver dropped means the player already left the end screen.
            let _ = tx.send(fact);
        });
        rx
    }
}

/// Extracts the `text` field from a fact-endpoint JSON body.
fn fact_from_json(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("text")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_field() {
        let body = r#"{"id":"abc","text":"Bananas are berries.","language":"en"}"#;
        assert_eq!(
            fact_from_json(body),
            Some("Bananas are berries.".to_string())
        );
    }

    #[test]
    fn rejects_missing_text_field() {
        assert_eq!(fact_from_json(r#"{"id":"abc"}"#), None);
    }

    #[test]
    fn rejects_malformed_body() {
        assert_eq!(fact_from_json("not json"), None);
        assert_eq!(fact_from_json(r#"{"text":42}"#), None);
    }
}
