//! Base URL parsing and endpoint joining
//!
//! Resource paths (`api/v1/...`) are relative and are resolved against the
//! base URL. A base without a trailing slash would have its last segment
//! replaced during resolution, so one is appended when missing.

use url::Url;

use crate::ClientError;

/// Parses and normalises a PaperTrail base URL
///
/// # Errors
/// Returns [`ClientError::InvalidBaseUrl`] if `raw` is blank, is not an
/// absolute URL, or cannot carry a path (e.g. `mailto:`).
pub fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidBaseUrl(
            "Base URL is null or empty".to_string(),
        ));
    }

    let mut url = Url::parse(trimmed)
        .map_err(|e| ClientError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{trimmed}: not a hierarchical URL"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Resolves a relative collection path such as `api/v1/log/audit`
pub(crate) fn join_collection(base: &Url, collection: &str) -> Result<Url, ClientError> {
    base.join(collection)
        .map_err(|e| ClientError::InvalidBaseUrl(format!("cannot join '{collection}': {e}")))
}

/// Appends `id` as one percent-encoded path segment of `collection`
pub(crate) fn item_url(collection: &Url, id: &str) -> Result<Url, ClientError> {
    let mut url = collection.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidBaseUrl(format!("{collection}: not a hierarchical URL")))?
        .pop_if_empty()
        .push(id);
    Ok(url)
}
