use std::{fmt, rc::Rc, sync::Arc};

use serde_json::{Map, Value};
use tracing::debug;

/// Transport capability the resources dispatch through.
///
/// Implementations own connection handling, authentication and decoding.
/// Whatever they return, success or failure, is handed back to the caller
/// untouched.
pub trait HttpClient {
    type Response;
    type Error;

    fn get(&self, path: &str) -> Result<Self::Response, Self::Error>;
    fn post(&self, path: &str, body: &Value) -> Result<Self::Response, Self::Error>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    type Response = T::Response;
    type Error = T::Error;

    fn get(&self, path: &str) -> Result<Self::Response, Self::Error> {
        (**self).get(path)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Self::Response, Self::Error> {
        (**self).post(path, body)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    type Response = T::Response;
    type Error = T::Error;

    fn get(&self, path: &str) -> Result<Self::Response, Self::Error> {
        (**self).get(path)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Self::Response, Self::Error> {
        (**self).post(path, body)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Rc<T> {
    type Response = T::Response;
    type Error = T::Error;

    fn get(&self, path: &str) -> Result<Self::Response, Self::Error> {
        (**self).get(path)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Self::Response, Self::Error> {
        (**self).post(path, body)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    type Response = T::Response;
    type Error = T::Error;

    fn get(&self, path: &str) -> Result<Self::Response, Self::Error> {
        (**self).get(path)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Self::Response, Self::Error> {
        (**self).post(path, body)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A fully built API call: verb, path relative to the API root, and body.
///
/// GET requests have no body by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Get { path: String },
    Post { path: String, body: Value },
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Request::Get { path: path.into() }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Request::Post {
            path: path.into(),
            body,
        }
    }

    /// POST whose only content is the verb and path. Sends `{}`.
    pub fn post_empty(path: impl Into<String>) -> Self {
        Self::post(path, Value::Object(Map::new()))
    }

    pub fn method(&self) -> Method {
        match self {
            Request::Get { .. } => Method::Get,
            Request::Post { .. } => Method::Post,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Request::Get { path } | Request::Post { path, .. } => path,
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            Request::Get { .. } => None,
            Request::Post { body, .. } => Some(body),
        }
    }

    /// Hands the request to `client` exactly once and returns its result as is.
    pub fn send<C: HttpClient + ?Sized>(&self, client: &C) -> Result<C::Response, C::Error> {
        debug!(method = %self.method(), path = %self.path(), "dispatching request");
        match self {
            Request::Get { path } => client.get(path),
            Request::Post { path, body } => client.post(path, body),
        }
    }
}
