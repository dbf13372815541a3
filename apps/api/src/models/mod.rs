pub mod business;

use serde::Serialize;

/// Success envelope used by every fetch-oriented endpoint: `{ ok: true, data }`.
/// Errors go through `AppError` instead and carry an `error` object.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}
