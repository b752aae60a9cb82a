use axum::http::Method;

use crate::models::Role;

/// Required roles per protected endpoint, keyed by method and matched route
/// template. Endpoints not listed here are open to any authenticated
/// caller.
pub fn required_roles(method: &Method, route: &str) -> &'static [Role] {
    match (method.as_str(), route) {
        ("POST", "/api/v1/users") => &[Role::Admin],
        ("PUT", "/api/v1/users/{id}/status") => &[Role::Admin],
        ("POST", "/api/v1/statuses") => &[Role::Admin],
        ("DELETE", "/api/v1/statuses/{id}") => &[Role::Admin],
        _ => &[],
    }
}
