//! Query string extraction with JSON error bodies.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, de, de::DeserializeOwned};
use std::{fmt, str::FromStr};

/// Query string extractor whose rejection is an [`AppError`].
///
/// Behaves like [`Query`], but a malformed query (`?limit=abc`, an unknown
/// enum value) answers with the shared error body and `INVALID_QUERY`
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(QueryParams(value))
    }
}

/// Treats an empty query value (`?tag=`) the same as an absent one.
///
/// Use together with `#[serde(default)]`:
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Filter {
///     #[serde(default, deserialize_with = "empty_string_as_none")]
///     tag: Option<String>,
/// }
/// ```
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}
