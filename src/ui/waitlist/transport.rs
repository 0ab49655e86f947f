//! Browser fetch transport for waitlist submissions

use gloo_net::http::Request;
use wasm_bindgen::JsValue;

use crate::core::{
    EncodedSubmission, FormTransport, RequestBody, SubmissionError, TransportResponse,
};

/// Sends submissions with `fetch` through gloo-net
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    fn body(body: RequestBody) -> Result<JsValue, SubmissionError> {
        match body {
            RequestBody::Json(json) => Ok(JsValue::from(json)),
            RequestBody::Multipart(fields) => {
                let form = web_sys::FormData::new()
                    .map_err(|e| SubmissionError::Encode(format!("{:?}", e)))?;
                for (name, value) in &fields {
                    form.append_with_str(name, value)
                        .map_err(|e| SubmissionError::Encode(format!("{:?}", e)))?;
                }
                Ok(form.into())
            }
        }
    }
}

impl FormTransport for FetchTransport {
    async fn send(&self, request: EncodedSubmission) -> Result<TransportResponse, SubmissionError> {
        let EncodedSubmission {
            endpoint,
            headers,
            body,
        } = request;

        let builder = headers
            .iter()
            .fold(Request::post(&endpoint), |builder, (name, value)| {
                builder.header(name, value)
            });

        let response = builder
            .body(Self::body(body)?)
            .map_err(|e| SubmissionError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        // Error bodies are optional; an unreadable one is treated as empty
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse::new(status, body))
    }
}
