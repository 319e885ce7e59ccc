//! Persisting decoded models without re-contacting the service.
//!
//! The encoding is keyed JSON; only per-field round-trip is guaranteed,
//! not a particular byte layout.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

pub trait Persist: Sized {
    fn to_bytes(&self) -> Result<Vec<u8>>;
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

impl<T> Persist for T
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
