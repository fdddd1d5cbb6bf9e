use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::handlers::{admin, query, Ctx};

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    // Public routes.
    let pub_routes = Router::new()
        .route("/api/stats", get(admin::get_stats))
        .route("/{prefix}", get(query::query));

    let mut router = Router::new().merge(pub_routes);

    // Admin (requires auth). Only mounted if a password is set.
    if ctx.consts.admin_password.is_empty() {
        log::info!("admin routes disabled (no admin_password set)");
    } else {
        let admin_routes = Router::new()
            .route("/api/reload", post(admin::reload))
            .route_layer(middleware::from_fn_with_state(ctx.clone(), auth_middleware));

        router = router.merge(admin_routes);
    }

    router.with_state(ctx)
}

/// BasicAuth middleware checks for admin username & password defined in ctx constants.
async fn auth_middleware(
    State(ctx): State<Arc<Ctx>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if validate_basic_auth(
        request.headers(),
        &ctx.consts.admin_username,
        &ctx.consts.admin_password,
    ) {
        return next.run(request).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"tailsearch\"")],
        "unauthorized",
    )
        .into_response()
}

/// Validate BasicAuth credentials from request headers.
fn validate_basic_auth(headers: &header::HeaderMap, username: &str, password: &str) -> bool {
    let check = || {
        let hdr = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let decoded = base64_decode(hdr.strip_prefix("Basic ")?).ok()?;
        let (user, pass) = decoded.split_once(':')?;
        Some(user == username && pass == password)
    };
    check().unwrap_or(false)
}

fn base64_decode(s: &str) -> Result<String, ()> {
    let bytes = STANDARD.decode(s).map_err(|_| ())?;
    String::from_utf8(bytes).map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(auth: &str) -> header::HeaderMap {
        let mut h = header::HeaderMap::new();
        h.insert(header::AUTHORIZATION, auth.parse().unwrap());
        h
    }

    #[test]
    fn test_validate_basic_auth() {
        let ok = format!("Basic {}", STANDARD.encode("admin:pw"));
        assert!(validate_basic_auth(&headers(&ok), "admin", "pw"));

        let wrong = format!("Basic {}", STANDARD.encode("admin:nope"));
        assert!(!validate_basic_auth(&headers(&wrong), "admin", "pw"));

        assert!(!validate_basic_auth(&headers("Bearer x"), "admin", "pw"));
        assert!(!validate_basic_auth(&headers("Basic !!!"), "admin", "pw"));
        assert!(!validate_basic_auth(&header::HeaderMap::new(), "admin", "pw"));
    }
}
