#![allow(dead_code)]

use async_trait::async_trait;
use skill_tutor::ai::{LessonGenerator, UpstreamPayload, UpstreamResult};
use skill_tutor::core::config::AppConfig;
use std::sync::Mutex;

/// Generator that returns a canned result and records what it was asked.
pub struct StubGenerator {
    result: UpstreamResult,
    calls: Mutex<Vec<(String, UpstreamPayload)>>,
}

impl StubGenerator {
    pub fn new(result: UpstreamResult) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(UpstreamResult::Text(text.to_string()))
    }

    pub fn calls(&self) -> Vec<(String, UpstreamPayload)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LessonGenerator for StubGenerator {
    async fn generate(&self, api_key: &str, payload: &UpstreamPayload) -> UpstreamResult {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), payload.clone()));
        self.result.clone()
    }
}

/// Generator that panics, standing in for any unexpected runtime fault.
pub struct PanickingGenerator;

#[async_trait]
impl LessonGenerator for PanickingGenerator {
    async fn generate(&self, _api_key: &str, _payload: &UpstreamPayload) -> UpstreamResult {
        panic!("generator exploded");
    }
}

pub fn configured() -> AppConfig {
    AppConfig::default().with_api_key("test-key")
}
