use crate::registry::MediaEntry;
use crate::server::{AppContext, AppError};
use crate::streaming::serve_file;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, Uri},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use media_proxy_common::Error;
use serde::Serialize;

/// Wildcard GET routes under the base route. `{base}/list` is answered by the
/// same handler. The bare `{base}/` is routed too so it gets the JSON 404.
pub fn media_routes(base_route: &str) -> Router<AppContext> {
    // `get` would also answer HEAD; only GET is served.
    let handler: MethodRouter<AppContext> = get(media_request).head(head_not_served);

    Router::new()
        .route(&format!("{}/", base_route), handler.clone())
        .route(&format!("{}/*path", base_route), handler)
}

#[derive(Debug, Serialize)]
pub struct MediaListResponse {
    pub success: bool,
    pub data: Vec<MediaEntry>,
    pub count: usize,
}

async fn media_request(
    State(ctx): State<AppContext>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let route = match path {
        Ok(Path(path)) => format!("{}/{}", ctx.registry.base_route(), path),
        // Empty tail, or a tail that is not UTF-8 once decoded. No registered
        // route looks like either.
        Err(_) => return Err(Error::not_found(uri.path()).into()),
    };

    if route == ctx.registry.list_route() {
        return Ok(list_media(ctx).await?.into_response());
    }

    let file_path = ctx
        .registry
        .lookup(&route)
        .ok_or_else(|| Error::not_found(&route))?;

    let range = headers
        .get(header::RANGE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    Ok(serve_file(&route, file_path, range.as_deref()).await?)
}

async fn head_not_served(uri: Uri) -> AppError {
    Error::not_found(uri.path()).into()
}

async fn list_media(ctx: AppContext) -> Result<Json<MediaListResponse>, AppError> {
    let registry = ctx.registry.clone();
    let data = tokio::task::spawn_blocking(move || registry.list())
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))?;

    Ok(Json(MediaListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}
