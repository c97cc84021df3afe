use anyhow::Context as _;
use axum::{http::request::Parts, response::Html};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Turns a template identifier plus a [`Context`] into an HTML page.
///
/// Handlers only ever talk to this trait; the concrete implementation is
/// injected through [`super::Ctx`].
pub trait Render: Send + Sync {
    fn render(
        &self,
        request: &Parts,
        template: &str,
        context: Context,
    ) -> Result<Html<String>, anyhow::Error>;
}

/// Named values made available to a template.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Context(Map<String, Value>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Deserialize the value stored under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, anyhow::Error> {
        let Some(value) = self.0.get(key) else {
            return Ok(None);
        };
        let out = serde_json::from_value(value.clone())
            .with_context(|| format!("invalid context value '{key}'"))?;
        Ok(Some(out))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
