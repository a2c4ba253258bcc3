// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::convert::Infallible;

/// The bearer token of the forwarded request, if it carried one.
///
/// The scheme must be spelled exactly `Bearer`; `bearer x` yields no token.
#[derive(Debug, Clone, Default)]
pub struct MaybeBearer(pub Option<String>);

impl<S> FromRequestParts<S> for MaybeBearer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);
        Ok(Self(token))
    }
}

/// JSON body extractor whose rejection renders like every other API error.
#[derive(Debug, Clone, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);
