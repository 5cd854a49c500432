//! Axum extractor for RequestContext.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts, Query},
    http::{header, request::Parts, HeaderMap},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use salut_core::clock;
use salut_core::locale::{resolve_locale, LocaleInputs};
use salut_core::timezone::{resolve_timezone, TimezoneInputs};

use super::types::{RequestContext, RequestId};
use crate::state::AppState;

/// Query parameters the resolver consumes.
///
/// All fields are raw strings. Anything unparsable downgrades to
/// "absent" instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
struct ContextParams {
    login_as: Option<String>,
    locale: Option<String>,
    timezone: Option<String>,
}

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

impl<S> FromRequestParts<S> for RequestContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let request_id = extract_request_id(&parts.headers);

        let params = Query::<ContextParams>::try_from_uri(&parts.uri)
            .map(|query| query.0)
            .unwrap_or_default();

        // A bad or unknown id means "not logged in", never an error.
        let user = params
            .login_as
            .as_deref()
            .and_then(|raw| raw.parse::<u32>().ok())
            .and_then(|id| state.directory.lookup(id))
            .cloned();

        let accept_language = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        let locale = resolve_locale(
            LocaleInputs {
                query: params.locale.as_deref(),
                user: user.as_ref(),
                accept_language,
            },
            &state.settings,
        );

        let timezone = resolve_timezone(
            TimezoneInputs {
                query: params.timezone.as_deref(),
                user: user.as_ref(),
            },
            &state.settings,
        );

        if !locale.discarded.is_empty() || !timezone.discarded.is_empty() {
            tracing::debug!(
                %request_id,
                locale_discards = ?locale.discarded,
                timezone_discards = ?timezone.discarded,
                "Discarded unusable localization inputs"
            );
        }

        let current_time = clock::format_time(Utc::now(), timezone.tz, &locale.code);

        tracing::debug!(
            %request_id,
            user = user.as_ref().map(|u| u.name.as_str()),
            locale = %locale.code,
            locale_source = ?locale.source,
            timezone = %timezone.tz,
            timezone_source = ?timezone.source,
            "Resolved request context"
        );

        Ok(RequestContext {
            user,
            locale,
            timezone,
            current_time,
            request_id,
        })
    }
}
