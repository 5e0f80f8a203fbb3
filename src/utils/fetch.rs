//! Browser transport for the request client.
//!
//! Executes a [`PreparedRequest`] through the Fetch API via `gloo-net` and
//! hands the raw status, content type and body text back to the core
//! request client, which owns all decoding and error rules.

use std::future::Future;

use gamedesk_core::error::TransportError;
use gamedesk_core::http::{Method, Multipart, Part, PreparedRequest, RawResponse, Transport, WireBody};
use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, FormData};

/// [`Transport`] backed by `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn send(
        &self,
        request: PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> {
        send(request)
    }
}

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
        Method::Patch => FetchMethod::PATCH,
        Method::Delete => FetchMethod::DELETE,
    }
}

/// Convert a multipart payload into a browser `FormData`.
fn form_data(form: &Multipart) -> Result<FormData, TransportError> {
    let build_err = |_| TransportError::Build("invalid form data".to_string());
    let data = FormData::new().map_err(build_err)?;

    for part in form.parts() {
        match part {
            Part::Text { name, value } => data.append_with_str(name, value).map_err(build_err)?,
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                let chunks = Array::of1(&Uint8Array::from(bytes.as_slice()));
                let options = BlobPropertyBag::new();
                options.set_type(content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                    .map_err(build_err)?;
                data.append_with_blob_and_filename(name, &blob, filename)
                    .map_err(build_err)?;
            }
        }
    }

    Ok(data)
}

async fn send(request: PreparedRequest) -> Result<RawResponse, TransportError> {
    let PreparedRequest {
        method,
        url,
        headers,
        body,
    } = request;

    let mut builder = RequestBuilder::new(&url).method(fetch_method(method));
    for (name, value) in &headers {
        builder = builder.header(name, value);
    }

    let request = match body {
        Some(WireBody::Text(text)) => builder.body(text),
        Some(WireBody::Multipart(form)) => builder.body(form_data(&form)?),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Build(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?;

    Ok(RawResponse {
        status,
        content_type,
        body,
    })
}
