//! Wire bodies for the `jobs/run-now` endpoint

use serde::{Deserialize, Serialize};

use crate::domain::run::{RunId, RunRequest};

/// Request body for `POST /api/2.1/jobs/run-now`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunNowRequest {
    pub job_id: u64,
    pub python_named_params: NamedParams,
}

/// Named parameters handed to the remote job's entry point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedParams {
    pub date: String,
    pub region: String,
}

impl RunNowRequest {
    /// Build the wire body for one job id and validated run request
    pub fn new(job_id: u64, request: &RunRequest) -> Self {
        Self {
            job_id,
            python_named_params: NamedParams {
                date: request.date.format("%Y-%m-%d").to_string(),
                region: request.region.clone(),
            },
        }
    }
}

/// Success body of `run-now`
///
/// `run_id` is the only field this system depends on; anything else the
/// control plane returns is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RunNowResponse {
    #[serde(default)]
    pub run_id: Option<RunIdValue>,
}

/// Run identifier as it appears on the wire: integer or string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RunIdValue {
    Int(u64),
    Str(String),
}

impl From<RunIdValue> for RunId {
    fn from(value: RunIdValue) -> Self {
        match value {
            RunIdValue::Int(id) => RunId::new(id.to_string()),
            RunIdValue::Str(id) => RunId::new(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::RegionSet;

    #[test]
    fn test_run_now_request_wire_shape() {
        let request = RunRequest::parse("2024-11-05", "eu", &RegionSet::default()).unwrap();
        let body = RunNowRequest::new(860716632182514, &request);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "job_id": 860716632182514u64,
                "python_named_params": {
                    "date": "2024-11-05",
                    "region": "EU",
                }
            })
        );
    }

    #[test]
    fn test_response_accepts_integer_run_id() {
        let response: RunNowResponse = serde_json::from_str(r#"{"run_id": 12345}"#).unwrap();
        let run_id: RunId = response.run_id.unwrap().into();
        assert_eq!(run_id.as_str(), "12345");
    }

    #[test]
    fn test_response_accepts_string_run_id() {
        let response: RunNowResponse = serde_json::from_str(r#"{"run_id": "12345"}"#).unwrap();
        let run_id: RunId = response.run_id.unwrap().into();
        assert_eq!(run_id.as_str(), "12345");
    }

    #[test]
    fn test_response_without_run_id() {
        let response: RunNowResponse = serde_json::from_str("{}").unwrap();
        assert!(response.run_id.is_none());
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let response: RunNowResponse =
            serde_json::from_str(r#"{"run_id": 7, "number_in_job": 7}"#).unwrap();
        assert!(response.run_id.is_some());
    }
}
