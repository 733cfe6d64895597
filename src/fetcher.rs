use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect;
use tracing::debug;

use crate::error::ExtractError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Where product pages come from. The extractor only needs the body text.
pub trait PageSource {
    fn fetch_html(&self, url: &str) -> Result<String, ExtractError>;
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
    pub use_system_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
            use_system_proxy: true,
        }
    }
}

/// Blocking HTTP fetcher. One client is shared by every request of a run.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let max_redirects = config.max_redirects;
        let redirect_policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= max_redirects {
                attempt.error(format!("too many redirects (>{max_redirects})"))
            } else {
                attempt.follow()
            }
        });

        let mut builder = Client::builder()
            .redirect(redirect_policy)
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageSource for HttpFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, ExtractError> {
        let request_error = |source: reqwest::Error| ExtractError::Request {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url).send().map_err(request_error)?;
        let status = resp.status();
        debug!(url, status = status.as_u16(), "fetched product page");

        if !status.is_success() {
            return Err(ExtractError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(request_error)
    }
}
