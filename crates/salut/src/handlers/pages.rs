use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use fluent_bundle::FluentArgs;

use crate::{context::RequestContext, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Greeting page template. Every string arrives pre-translated; the
/// template itself stays language-agnostic.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    lang: String,
    title: String,
    header: String,
    greeting: String,
    time_line: String,
}

/// Handler for the greeting page (GET /).
pub async fn index(State(state): State<AppState>, ctx: RequestContext) -> impl IntoResponse {
    let locale = ctx.locale_code();

    let greeting = match &ctx.user {
        Some(user) => {
            let mut args = FluentArgs::new();
            args.set("username", user.name.as_str());
            state.catalog.translate(locale, "logged-in-as", Some(&args))
        }
        None => state.catalog.translate(locale, "not-logged-in", None),
    };

    let mut args = FluentArgs::new();
    args.set("time", ctx.current_time.as_str());
    let time_line = state.catalog.translate(locale, "current-time", Some(&args));

    tracing::debug!(request_id = %ctx.request_id, locale, "Rendering greeting page");

    HtmlTemplate(IndexTemplate {
        lang: locale.to_string(),
        title: state.catalog.translate(locale, "home-title", None),
        header: state.catalog.translate(locale, "home-header", None),
        greeting,
        time_line,
    })
}
