use crate::batch::ConjugationSource;
use anyhow::{Context, Result};
use conjugator_model::{LanguageCode, Verb};
use reqwest::Url;

/// Verbix conjugation API endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://api.verbix.com/conjugator/html";

/// Table template the API renders conjugations into.
pub const DEFAULT_TABLE_URL: &str = "http://tools.verbix.com/webverbix/personal/template.htm";

/// Citation required by the Verbix terms of use.
pub const CITATION: &str = "\
This tool uses the Verbix online conjugation API at http://www.verbix.com
The content extracted may be copied for non-commercial usage.
See http://www.verbix.com/webverbix/termsofuse.html";

/// HTTP client for the Verbix conjugation API.
pub struct VerbixClient {
    client: reqwest::Client,
    endpoint: String,
    table_url: String,
}

impl VerbixClient {
    pub fn new(endpoint: &str, table_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("conjugator/0.1 (verb conjugation word lists)")
            .build()?;
        Self::with_client(client, endpoint, table_url)
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, endpoint: &str, table_url: &str) -> Result<Self> {
        // Fail on a malformed endpoint now rather than once per verb.
        Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: {endpoint}"))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            table_url: table_url.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    /// `<endpoint>?language=<lang>&tableurl=<table>&verb=<verb>`, percent-encoded.
    pub fn conjugation_url(&self, language: &LanguageCode, verb: &Verb) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("language", language.as_str()),
                ("tableurl", self.table_url.as_str()),
                ("verb", verb.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Make sure Verbix is reachable before conjugating anything.
    ///
    /// Only a transport failure counts; any HTTP response means the host
    /// is up.
    pub async fn check_connection(&self) -> Result<()> {
        let response = self
            .client
            .get(&self.table_url)
            .send()
            .await
            .with_context(|| format!("Error connecting to Verbix API at {}", self.table_url))?;

        tracing::debug!(url = %self.table_url, status = %response.status(), "Verbix is reachable");
        Ok(())
    }

    /// Fetch the rendered conjugation table for one verb.
    pub async fn fetch_table(&self, language: &LanguageCode, verb: &Verb) -> Result<String> {
        let url = self.conjugation_url(language, verb)?;
        tracing::debug!(url = %url, "Fetching conjugation table");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .context("Failed to fetch conjugation table")?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;
        tracing::debug!(bytes = html.len(), "Received HTML");
        Ok(html)
    }
}

impl ConjugationSource for VerbixClient {
    async fn fetch(&self, language: &LanguageCode, verb: &Verb) -> Result<String> {
        self.fetch_table(language, verb).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn client() -> VerbixClient {
        VerbixClient::new(DEFAULT_ENDPOINT, DEFAULT_TABLE_URL).unwrap()
    }

    #[test]
    fn test_conjugation_url() {
        let url = client()
            .conjugation_url(&LanguageCode::from("fra"), &Verb::from_line("parler"))
            .unwrap();

        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("api.verbix.com"));
        assert_eq!(url.path(), "/conjugator/html");

        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            params,
            vec![
                ("language".to_string(), "fra".to_string()),
                ("tableurl".to_string(), DEFAULT_TABLE_URL.to_string()),
                ("verb".to_string(), "parler".to_string()),
            ]
        );
    }

    #[test]
    fn test_conjugation_url_encodes_verb() {
        let url = client()
            .conjugation_url(&LanguageCode::from("fra"), &Verb::from_line("créer & co"))
            .unwrap();

        assert!(!url.as_str().contains(' '));
        assert!(!url.as_str().contains("& co"));
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["verb"], "créer & co");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_rejects_malformed_endpoint() {
        assert!(VerbixClient::new("not a url", DEFAULT_TABLE_URL).is_err());
    }

    #[tokio::test]
    async fn test_check_connection_fails_when_unreachable() {
        // Bind then drop a listener to get a local port nobody is serving.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let table_url = format!("http://{addr}/template.htm");
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = VerbixClient::with_client(http, DEFAULT_ENDPOINT, &table_url).unwrap();
        let err = client.check_connection().await.unwrap_err();
        assert!(err.to_string().contains("Error connecting to Verbix API"));
    }
}
