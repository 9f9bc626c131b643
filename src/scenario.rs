//! Scripted drawer sessions
//!
//! A scenario is a page fixture plus the events a user and the host page
//! would produce. Replaying it through `Runtime` gives the final snapshot.
//!
//! ```yaml
//! page:
//!   - tag: aside
//!     class: [q-drawer]
//!     width: 300
//!     children:
//!       - class: [nicegui-drawer]
//!   - class: [q-page-container]
//! events:
//!   - event: ready
//!   - event: press
//!     x: 50
//!   - event: move
//!     x: 80
//!   - event: release
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DrawerConfig;
use crate::dom::{Document, NodeSpec, Selector};
use crate::runtime::Runtime;

/// One scripted step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScenarioEvent {
    /// Page-ready signal
    Ready,
    /// Press the drag handle
    Press { x: i32 },
    /// Move the pointer anywhere on the page
    Move { x: i32 },
    /// Release the pointer anywhere on the page
    Release {
        #[serde(default)]
        x: i32,
    },
    /// Apply the latest coalesced move
    Frame,
    /// Host opens the panel (marker removed, transition finishes)
    Open,
    /// Host closes the panel (marker added, transition finishes)
    Close,
    /// A transition finished on the first element matching `target`
    /// (the panel when omitted)
    TransitionEnd {
        #[serde(default)]
        target: Option<String>,
    },
    /// Host layout reports a new width for the first element matching `target`
    Layout { target: String, width: f64 },
}

/// Page fixture plus event script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Overrides the loaded configuration when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<DrawerConfig>,
    pub page: Vec<NodeSpec>,
    pub events: Vec<ScenarioEvent>,
}

impl Scenario {
    /// Load a scenario, as JSON for `.json` files and YAML otherwise
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let scenario = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        scenario.map_err(|e| format!("Failed to parse scenario {}: {}", path.display(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let scenario: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        let scenario: Self = serde_json::from_str(content).map_err(|e| e.to_string())?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(config) = &self.config {
            config.validate()?;
        }
        for event in &self.events {
            let target = match event {
                ScenarioEvent::TransitionEnd {
                    target: Some(target),
                } => target,
                ScenarioEvent::Layout { target, .. } => target,
                _ => continue,
            };
            Selector::parse(target)?;
        }
        Ok(())
    }

    /// Replay the script, using the scenario's own config when it has one
    pub fn run(&self, config: DrawerConfig) -> Runtime {
        let config = self.config.clone().unwrap_or(config);
        let mut runtime = Runtime::new(Document::from_specs(&self.page), config);
        for event in &self.events {
            apply(&mut runtime, event);
        }
        runtime
    }
}

fn find(runtime: &Runtime, selector: &str) -> Option<crate::dom::NodeId> {
    let selector = Selector::parse(selector).ok()?;
    runtime.document().query_selector(&selector)
}

fn apply(runtime: &mut Runtime, event: &ScenarioEvent) {
    tracing::debug!(?event, "Scenario step");
    match event {
        ScenarioEvent::Ready => runtime.ready(),
        ScenarioEvent::Press { x } => {
            if !runtime.press_handle(*x) {
                tracing::debug!("No drag handle on page, press ignored");
            }
        }
        ScenarioEvent::Move { x } => runtime.pointer_move(*x),
        ScenarioEvent::Release { x } => runtime.pointer_release(*x),
        ScenarioEvent::Frame => runtime.animation_frame(),
        ScenarioEvent::Open => runtime.set_open(true),
        ScenarioEvent::Close => runtime.set_open(false),
        ScenarioEvent::TransitionEnd { target } => {
            let node = match target {
                Some(selector) => find(runtime, selector),
                None => runtime.panel_node(),
            };
            if let Some(node) = node {
                runtime.transition_end(node);
            }
        }
        ScenarioEvent::Layout { target, width } => {
            if let Some(node) = find(runtime, target) {
                if let Some(el) = runtime.document_mut().get_mut(node) {
                    el.layout_width = Some(*width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAG: &str = r#"
page:
  - tag: aside
    class: [q-drawer]
    width: 300
    children:
      - class: [nicegui-drawer]
  - class: [q-page-container]
events:
  - event: ready
  - event: press
    x: 50
  - event: move
    x: 80
  - event: release
  - event: move
    x: 500
"#;

    #[test]
    fn test_parse_yaml_events() {
        let scenario = Scenario::from_yaml(DRAG).unwrap();
        assert_eq!(scenario.page.len(), 2);
        assert_eq!(scenario.events[1], ScenarioEvent::Press { x: 50 });
        assert_eq!(scenario.events[3], ScenarioEvent::Release { x: 0 });
    }

    #[test]
    fn test_run_drag_scenario() {
        let runtime = Scenario::from_yaml(DRAG)
            .unwrap()
            .run(DrawerConfig::default());
        let snap = runtime.snapshot();
        assert_eq!(snap.panel_width.as_deref(), Some("330px"));
        assert_eq!(snap.stored_width.as_deref(), Some("330"));
        assert_eq!(snap.content_offset.as_deref(), Some("330px"));
        assert!(!snap.dragging);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "page": [{"tag": "aside", "class": ["q-drawer"], "width": 200}],
            "events": [{"event": "ready"}, {"event": "close"}]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.events, vec![ScenarioEvent::Ready, ScenarioEvent::Close]);
    }

    #[test]
    fn test_invalid_target_rejected() {
        let yaml = "events:\n  - event: layout\n    target: \"a > b\"\n    width: 10\n";
        assert!(Scenario::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_scenario_config_overrides() {
        let yaml = r#"
config:
  min_width: 100
page:
  - tag: aside
    class: [q-drawer]
    width: 300
    children:
      - class: [nicegui-drawer]
events:
  - event: ready
  - event: press
    x: 400
  - event: move
    x: 0
"#;
        let runtime = Scenario::from_yaml(yaml)
            .unwrap()
            .run(DrawerConfig::default());
        assert_eq!(runtime.snapshot().panel_width.as_deref(), Some("100px"));
    }
}
