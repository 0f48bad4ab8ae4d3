//! HTML documents served to the browser, rendered from `templates/`.
//!
//! Templates are `.html`, so every interpolated value is HTML-escaped.

use askama::Template;

use crate::auth::jwt::SignedToken;
use crate::error::AppError;

/// Landing page template.
#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate<'a> {
    login_path: &'a str,
}

/// Page carrying a freshly issued session token as literal text.
#[derive(Template)]
#[template(path = "token.html")]
struct TokenTemplate<'a> {
    token: &'a str,
}

fn render(template: &impl Template, name: &str) -> Result<String, AppError> {
    template.render().map_err(|e| {
        tracing::error!(template = name, "failed to render template: {e}");
        AppError::internal(format!("failed to render {name} template: {e}"))
    })
}

pub fn landing_page(login_path: &str) -> Result<String, AppError> {
    render(&LandingTemplate { login_path }, "landing")
}

pub fn token_page(token: &SignedToken) -> Result<String, AppError> {
    render(
        &TokenTemplate {
            token: token.as_str(),
        },
        "token",
    )
}
