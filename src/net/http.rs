//! Network adapter: every request the page makes goes through `request`.
//!
//! Failures are logged, toasted (unless `ErrorReport::Silent`), and returned.
//! Nothing is retried.

use gloo_net::http::Request;

use crate::dom::toast::Toaster;
use crate::net::types::{ErrorReport, FormFields, Method, NetworkError, RequestSpec, TextResponse};
use crate::state::toast::Toast;

/// Issue `spec`, check the status, and read the body as text.
///
/// # Errors
///
/// Returns `NetworkError` on transport failure, a non-2xx status, or an
/// unreadable body.
pub async fn request(spec: &RequestSpec, report: ErrorReport, toaster: &Toaster) -> Result<TextResponse, NetworkError> {
    match fetch(spec).await {
        Ok(resp) => Ok(resp),
        Err(e) => {
            log::error!("fetch error: {e}");
            if report == ErrorReport::Toast {
                toaster.show(&Toast::network_error());
            }
            Err(e)
        }
    }
}

async fn fetch(spec: &RequestSpec) -> Result<TextResponse, NetworkError> {
    let url = spec.url.as_str();
    let mut builder = match spec.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    for (name, value) in &spec.headers {
        builder = builder.header(name, value);
    }

    let request = match &spec.form {
        Some(fields) => builder.body(form_data(url, fields)?),
        None => builder.build(),
    }
    .map_err(|e| NetworkError::transport(url, e))?;

    let resp = request.send().await.map_err(|e| NetworkError::transport(url, e))?;
    NetworkError::check_status(url, resp.status(), &resp.status_text())?;

    let content_type = resp.headers().get("content-type");
    let body = resp.text().await.map_err(|e| NetworkError::transport(url, e))?;
    Ok(TextResponse { content_type, body })
}

fn form_data(url: &str, fields: &FormFields) -> Result<web_sys::FormData, NetworkError> {
    let data = web_sys::FormData::new().map_err(|e| NetworkError::transport(url, format!("{e:?}")))?;
    for (name, value) in fields {
        data.append_with_str(name, value)
            .map_err(|e| NetworkError::transport(url, format!("{e:?}")))?;
    }
    Ok(data)
}
