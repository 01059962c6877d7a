use std::time::Duration;

use axum::{
    http::{uri::PathAndQuery, StatusCode, Uri},
    routing::get,
    Router,
};
use lambda_http::{request::RequestContext, RequestExt};
use tower::util::MapRequest;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{verify::verify, webhook::webhook},
    state::AppState,
};

/// Create the application router.
///
/// Both Dropbox endpoints live on `/`: verification on GET, notifications on POST.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(verify).post(webhook))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

/// The router as served by the Lambda runtime.
pub type LambdaApp = MapRequest<Router, fn(lambda_http::Request) -> lambda_http::Request>;

/// Wrap [`create_app`] for the Lambda runtime.
///
/// `lambda_http` prefixes API Gateway paths with the stage name (`/v1/`).
/// Routing happens inside the router, so the prefix is removed before it.
pub fn create_lambda_app(state: AppState, request_timeout: Duration) -> LambdaApp {
    MapRequest::new(create_app(state, request_timeout), strip_stage as fn(_) -> _)
}

fn strip_stage(mut request: lambda_http::Request) -> lambda_http::Request {
    let stage = match request.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(context)) => context.stage.clone(),
        Some(RequestContext::ApiGatewayV2(context)) => context.stage.clone(),
        _ => None,
    };

    if let Some(uri) = stage.and_then(|stage| uri_without_stage(request.uri(), &stage)) {
        *request.uri_mut() = uri;
    }
    request
}

/// `/{stage}/rest?query` -> `/rest?query`. `None` when the path is not under the stage.
fn uri_without_stage(uri: &Uri, stage: &str) -> Option<Uri> {
    let rest = uri.path().strip_prefix('/')?.strip_prefix(stage)?;
    let path = match rest {
        "" => "/",
        rest if rest.starts_with('/') => rest,
        _ => return None,
    };

    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}
