//! Test utilities for building path-actor documents

use crate::config::MinimapConfig;
use crate::walker::Minimap;
use serde_json::{Map, Value, json};
use std::sync::{Arc, Mutex};

/// Builder for one path-actor record in the game's export format.
#[derive(Debug, Clone)]
pub struct ActorSpec {
    pub x: f64,
    pub y: f64,
    pub hidden: bool,
    pub links: Vec<String>,
    pub fast_travel: Option<String>,
    pub unique_label: Option<String>,
}

/// Actor whose map position is `(x, y)`; the export stores them swapped.
pub fn actor(x: i64, y: i64) -> ActorSpec {
    ActorSpec {
        x: y as f64,
        y: x as f64,
        hidden: false,
        links: Vec::new(),
        fast_travel: None,
        unique_label: None,
    }
}

impl ActorSpec {
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn links(mut self, names: &[&str]) -> Self {
        self.links = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn warps_to(mut self, key: &str) -> Self {
        self.fast_travel = Some(key.to_string());
        self
    }

    pub fn arrival_of(mut self, key: &str) -> Self {
        self.unique_label = Some(key.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        let link = if self.links.is_empty() {
            json!("None")
        } else {
            json!(self.links)
        };
        json!({
            "X": self.x,
            "Y": self.y,
            "HiddenPath": self.hidden,
            "Link": link,
            "FastTravel": self.fast_travel.as_deref().unwrap_or("None"),
            "UniqueLabel": self.unique_label.as_deref().unwrap_or("None"),
        })
    }
}

/// Wrap records the way the game export does: an array holding one mapping.
pub fn document(actors: &[(&str, ActorSpec)]) -> String {
    let mut map = Map::new();
    for (name, spec) in actors {
        map.insert(name.to_string(), spec.to_json());
    }
    Value::Array(vec![Value::Object(map)]).to_string()
}

/// Small numbers that are easy to read in traces: no margin, 10px paths.
pub fn test_config() -> MinimapConfig {
    MinimapConfig {
        path_width: 10.0,
        margin: 0,
        ..MinimapConfig::default()
    }
}

pub fn minimap(actors: &[(&str, ActorSpec)]) -> Minimap {
    minimap_with(actors, test_config())
}

pub fn minimap_with(actors: &[(&str, ActorSpec)], config: MinimapConfig) -> Minimap {
    Minimap::from_json_str(&document(actors), config).unwrap()
}

/// In-memory sink for formatted log lines.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records everything logged on this thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_swaps_axes_in_export() {
        let value = actor(3, 7).to_json();
        assert_eq!(value["X"], json!(7.0));
        assert_eq!(value["Y"], json!(3.0));
        assert_eq!(value["Link"], json!("None"));
    }

    #[test]
    fn test_capture_logs_collects_events() {
        let (value, logs) = capture_logs(|| {
            tracing::info!("captured line");
            7
        });
        assert_eq!(value, 7);
        assert!(logs.contains("captured line"));
    }
}
