use pinmap_shared::Marker;

/// Fetch the current marker snapshot from the backend.
pub async fn fetch_markers() -> Result<Vec<Marker>, String> {
    let resp = gloo_net::http::Request::get("/api/markers")
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<Marker>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}
