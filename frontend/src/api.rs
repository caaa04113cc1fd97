//! Fetch glue over the `/api/` endpoints.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (network failure).
    Request(String),
    /// Non-2xx response; the body is the server's error message.
    Status { code: u16, message: String },
    /// 2xx response, but the body did not match the expected shape.
    Decode(String),
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "request failed: {}", msg),
            Self::Status { message, .. } if !message.is_empty() => f.write_str(message),
            Self::Status { code, .. } => write!(f, "server responded with status {}", code),
            Self::Decode(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

/// GET `/api/{path}?{params}` and decode the JSON body.
pub async fn get_json<T>(path: &str, params: &[(&str, &str)]) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    let query = web_sys::UrlSearchParams::new()
        .map_err(|_| FetchError::Request("could not build query string".to_owned()))?;
    for (key, value) in params {
        query.append(key, value);
    }

    let url = format!("/api/{}?{}", path, String::from(query.to_string()));
    let res = reqwasm::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let code = res.status();
    if !(200..300).contains(&code) {
        let message = res.text().await.unwrap_or_default();
        return Err(FetchError::Status { code, message });
    }

    res.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
