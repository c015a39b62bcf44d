//! Path and method resolution
//!
//! Routes, relative to the configured prefix:
//!
//! | Method | Path                                   | Route               |
//! |--------|----------------------------------------|---------------------|
//! | GET    | `/ping`                                | [`Route::Ping`]     |
//! | POST   | `/device-readings/create`              | [`Route::Create`]   |
//! | GET    | `/device-readings/{id}/latest-timestamp` | [`Route::LatestTimestamp`] |
//! | GET    | `/device-readings/{id}/cumulative-count` | [`Route::CumulativeCount`] |
//!
//! The `{id}` segment is passed through untouched; its validity is the
//! store's concern.

use crate::errors::ApiError;

const READINGS_SEGMENT: &str = "device-readings";

/// A resolved endpoint, borrowing the device id from the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `GET /ping`
    Ping,
    /// `POST /device-readings/create`
    Create,
    /// `GET /device-readings/{id}/latest-timestamp`
    LatestTimestamp(&'a str),
    /// `GET /device-readings/{id}/cumulative-count`
    CumulativeCount(&'a str),
}

impl<'a> Route<'a> {
    /// Match a request path against the routes mounted under `prefix`
    ///
    /// Any query string is ignored. Returns `None` when no route matches.
    pub fn resolve(prefix: &str, path: &'a str) -> Option<Self> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let rest = path.strip_prefix(prefix)?.strip_prefix('/')?;
        let segments: Vec<&'a str> = rest.split('/').collect();

        match segments.as_slice() {
            ["ping"] => Some(Self::Ping),
            [READINGS_SEGMENT, "create"] => Some(Self::Create),
            [READINGS_SEGMENT, id, "latest-timestamp"] if !id.is_empty() => {
                Some(Self::LatestTimestamp(*id))
            }
            [READINGS_SEGMENT, id, "cumulative-count"] if !id.is_empty() => {
                Some(Self::CumulativeCount(*id))
            }
            _ => None,
        }
    }

    /// The single method this route answers to
    pub fn method(&self) -> &'static str {
        match self {
            Self::Create => "POST",
            Self::Ping | Self::LatestTimestamp(_) | Self::CumulativeCount(_) => "GET",
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Create => "create",
            Self::LatestTimestamp(_) => "latest-timestamp",
            Self::CumulativeCount(_) => "cumulative-count",
        }
    }
}

/// Resolve a route and check the method
pub fn dispatch<'a>(prefix: &str, method: &str, path: &'a str) -> Result<Route<'a>, ApiError> {
    let route = Route::resolve(prefix, path).ok_or(ApiError::RouteNotFound)?;
    if route.method() != method {
        return Err(ApiError::MethodNotAllowed);
    }
    Ok(route)
}
