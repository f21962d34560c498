use wasteless_chat::ChatEndpoint;

/// Resolve the backend address: explicit flag first, then the
/// `WASTELESS_API_URL` environment (a `.env` file is loaded at startup),
/// then the local default.
pub fn resolve_endpoint(api_url: Option<&str>) -> ChatEndpoint {
    match api_url {
        Some(url) => ChatEndpoint::new(url),
        None => ChatEndpoint::from_env(),
    }
}
