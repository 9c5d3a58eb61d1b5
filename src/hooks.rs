use std::future::Future;

use dioxus::prelude::*;

use crate::api::{ApiClient, ApiError};

/// Runs `fetch` against the shared [`ApiClient`] and logs failures under `label`.
pub fn use_api<T, F, Fut>(label: &'static str, fetch: F) -> Resource<Result<T, ApiError>>
where
    T: 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let api = use_context::<ApiClient>();
    use_resource(move || {
        let request = fetch(api.clone());
        async move {
            let result = request.await;
            if let Err(err) = &result {
                tracing::warn!(what = label, error = %err, "api.fetch_failed");
            }
            result
        }
    })
}
