use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ProblemDetail;

/// Fills `instance` on problem responses with the request path.
///
/// Error responses carry their `ProblemDetail` in response extensions, so the
/// body is re-rendered from it rather than parsed back out.
pub async fn problem_instance_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let Some(problem) = response
        .extensions()
        .get::<ProblemDetail>()
        .filter(|problem| problem.instance.is_none())
        .cloned()
    else {
        return response;
    };

    let mut rendered = problem.with_instance(path).into_response();
    for (name, value) in response.headers() {
        if !rendered.headers().contains_key(name) {
            rendered.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rendered
}
