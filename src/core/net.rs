// src/core/net.rs
//
// One blocking HTTP session: fixed User-Agent, per-request timeout, and the
// retry policy from `core::retry` wrapped around every GET.

use std::thread;

use log::{ debug, info, warn };
use reqwest::blocking::Client;

use crate::{
    config::options::FetchOptions,
    core::retry::{ is_retryable_network_error, RetryPolicy },
    error::FetchError,
    progress::Progress,
};

pub struct HttpSession {
    client: Client,
    retry: RetryPolicy,
}

impl HttpSession {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, retry: opts.retry.clone() })
    }

    /// GET `url` and return the decoded body of the first 2xx response.
    pub fn get_text(
        &self,
        url: &str,
        progress: &mut dyn Progress,
    ) -> Result<String, FetchError> {
        let max = self.retry.max_attempts();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            debug!("Fetch: attempt {attempt}/{max} → {url}");

            match self.client.get(url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    let code = status.as_u16();

                    if status.is_success() {
                        info!("Fetch: OK {code} after {attempt} attempt(s)");
                        return resp.text().map_err(|source| FetchError::Body {
                            url: s!(url),
                            source,
                        });
                    }

                    if !self.retry.is_retryable_status(code) {
                        warn!("Fetch: HTTP {code}, not retryable");
                        return Err(FetchError::Status { url: s!(url), status: code });
                    }
                    if attempt >= max {
                        warn!("Fetch: HTTP {code}, retries exhausted ({attempt} attempts)");
                        return Err(FetchError::RetriesExhausted {
                            url: s!(url),
                            status: code,
                            attempts: attempt,
                        });
                    }
                    self.pause(attempt, &format!("HTTP {code}"), progress);
                }
                Err(source) => {
                    if !is_retryable_network_error(&source) || attempt >= max {
                        warn!("Fetch: giving up after {attempt} attempt(s): {source}");
                        return Err(FetchError::Request {
                            url: s!(url),
                            attempts: attempt,
                            source,
                        });
                    }
                    self.pause(attempt, &source.to_string(), progress);
                }
            }
        }
    }

    /// Sleep before the next attempt; `failed` is the 1-based attempt that just failed.
    fn pause(&self, failed: u32, reason: &str, progress: &mut dyn Progress) {
        let delay = self.retry.delay_for_retry(failed);
        let msg = format!(
            "Attempt {}/{} failed ({reason}); retrying in {:.1}s",
            failed,
            self.retry.max_attempts(),
            delay.as_secs_f32()
        );
        warn!("Fetch: {msg}");
        progress.log(&msg);
        thread::sleep(delay);
    }
}
