//! Outbound reachability check for target URLs.

use std::time::Duration;

use ureq::Agent;

/// Default limit for one reachability request, redirects included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Issues a `GET` to a target and reports whether it answered `200 OK`.
///
/// Redirects are followed. Any transport error, non-200 status or
/// unparsable URL counts as unreachable.
#[derive(Clone)]
pub struct ReachabilityChecker {
    agent: Agent,
}

impl ReachabilityChecker {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self { agent }
    }

    /// Blocking check; call through [`ReachabilityChecker::is_reachable`] from async code.
    fn check_sync(agent: &Agent, url: &str) -> bool {
        match agent.get(url).call() {
            Ok(response) => response.status() == 200,
            Err(e) => {
                tracing::debug!(url, error = %e, "Target not reachable");
                false
            }
        }
    }

    /// Runs the check on the blocking pool.
    pub async fn is_reachable(&self, url: &str) -> bool {
        let agent = self.agent.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || Self::check_sync(&agent, &url))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Reachability task failed");
                false
            })
    }
}

impl Default for ReachabilityChecker {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_unreachable() {
        let checker = ReachabilityChecker::default();

        assert!(!checker.is_reachable("").await);
        assert!(!checker.is_reachable("not a url").await);
    }

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let checker = ReachabilityChecker::new(Duration::from_secs(2));
        assert!(!checker.is_reachable(&format!("http://{}/", addr)).await);
    }
}
