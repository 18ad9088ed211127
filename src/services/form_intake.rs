use std::{future::Future, time::Duration};

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{
    features::contact::schemas::ContactSubmission,
    utilities::{config::Config, errors::AppError},
};

/// External endpoint that receives contact submissions.
pub trait FormIntake {
    /// `Ok(true)` when the endpoint reports success, `Ok(false)` when it
    /// answers with anything else, `Err` when it cannot be reached.
    fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<bool, AppError>> + Send;
}

#[derive(Serialize)]
struct Payload<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    submission: &'a ContactSubmission,
}

/// Web3Forms client: one JSON POST per submission, no retries.
#[derive(Clone, Debug)]
pub struct Web3FormsClient {
    endpoint: Url,
    access_key: String,
    client: Client,
}

impl Web3FormsClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::with_endpoint(
            config.form_intake_endpoint.clone(),
            config.form_intake_access_key.clone(),
            Duration::from_secs(config.form_intake_timeout_seconds),
        )
    }

    pub fn with_endpoint(
        endpoint: Url,
        access_key: String,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint,
            access_key,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl FormIntake for Web3FormsClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<bool, AppError> {
        let payload = Payload {
            access_key: &self.access_key,
            submission,
        };

        debug!("Posting contact submission to '{}'", self.endpoint);

        let res = self
            .client
            .post(self.endpoint.clone())
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        match serde_json::from_slice::<Value>(&body) {
            Ok(body) => {
                let success = body.get("success").is_some_and(is_truthy);
                if !success {
                    warn!("Form intake declined (status {status}): {body}");
                }
                Ok(success)
            }
            Err(e) => {
                warn!("Form intake answered with a non-JSON body (status {status}): {e}");
                Ok(false)
            }
        }
    }
}

/// JavaScript truthiness, which is how the intake service's flag is read.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
#[path = "tests/form_intake_tests.rs"]
mod tests;
