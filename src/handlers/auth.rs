use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::AppState;

const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Porovná `access_token` z query s nakonfigurovaným tokenem.
///
/// Chybějící parametr se bere jako prázdný string, takže prázdný
/// nakonfigurovaný token nechá projít všechny requesty.
pub fn token_matches(expected: &str, provided: Option<&str>) -> bool {
    provided.unwrap_or("") == expected
}

/// První výskyt parametru, další duplicity se ignorují
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

pub async fn require_access_token(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = first_param(&params, ACCESS_TOKEN_PARAM);

    if !token_matches(&state.access_token, provided) {
        tracing::warn!("Rejected request to {}: invalid access_token", request.uri().path());
        return (StatusCode::FORBIDDEN, "invalid access_token").into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matches_exactly() {
        assert!(token_matches("secret", Some("secret")));
        assert!(!token_matches("secret", Some("Secret")));
        assert!(!token_matches("secret", Some("secret ")));
        assert!(!token_matches("secret", None));
    }

    #[test]
    fn test_first_param_wins() {
        let params = vec![
            ("page".to_string(), "2".to_string()),
            ("access_token".to_string(), "first".to_string()),
            ("access_token".to_string(), "second".to_string()),
        ];
        assert_eq!(first_param(&params, "access_token"), Some("first"));
        assert_eq!(first_param(&params, "missing"), None);
    }

    #[test]
    fn test_empty_token_allows_missing_param() {
        assert!(token_matches("", None));
        assert!(token_matches("", Some("")));
        assert!(!token_matches("", Some("anything")));
    }
}
