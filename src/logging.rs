use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU8, Ordering as AtomicOrdering},
};

static LOG_THRESHOLD: AtomicU8 = AtomicU8::new(LogLevel::Info.rank());

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

pub fn set_threshold(level: LogLevel) {
    LOG_THRESHOLD.store(level.rank(), AtomicOrdering::Relaxed);
}

fn enabled(level: LogLevel) -> bool {
    level.rank() >= LOG_THRESHOLD.load(AtomicOrdering::Relaxed)
}

/// Builds the one-line JSON payload for an event. `fields` must be an object;
/// anything else is ignored.
pub fn event_payload(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), serde_json::Value::Number(serde_json::Number::from(ts)));
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if !enabled(level) {
        return;
    }

    emit(level, event_payload(now_unix_seconds(), level, event, fields));
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, payload: serde_json::Value) {
    println!("{payload}");
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, payload: serde_json::Value) {
    let line = wasm_bindgen::JsValue::from_str(&payload.to_string());
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::info_1(&line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_merges_fields_after_envelope() {
        let payload = event_payload(
            1_700_000_000,
            LogLevel::Info,
            "request_complete",
            serde_json::json!({ "status": 200, "path": "/" }),
        );

        assert_eq!(payload["ts"], 1_700_000_000u64);
        assert_eq!(payload["level"], "info");
        assert_eq!(payload["event"], "request_complete");
        assert_eq!(payload["status"], 200);
        assert_eq!(payload["path"], "/");
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = event_payload(1, LogLevel::Debug, "tick", serde_json::json!(["ignored"]));
        let object = payload.as_object().expect("payload is an object");
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info);
    }
}
