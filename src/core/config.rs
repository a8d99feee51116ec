use serde::{Deserialize, Serialize};

// Element id of the inline JSON block in index.html
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub initial_columns: Vec<String>,
    /// CSS transition applied to every sortable item.
    pub column_transition: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Kanban Board".to_string(),
            initial_columns: Vec::new(),
            column_transition: "transform 200ms ease".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| format!("Invalid board config: {}", e))
    }
}

fn read_config_block() -> Result<Option<String>, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;
    Ok(document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content()))
}

// Load config from the page, falling back to defaults on any failure
pub fn load_board_config() -> BoardConfig {
    let parsed = read_config_block().and_then(|raw| match raw {
        Some(raw) => BoardConfig::from_json(&raw),
        None => Ok(BoardConfig::default()),
    });

    match parsed {
        Ok(config) => {
            web_sys::console::log_1(&format!("Loaded board config with {} initial columns", config.initial_columns.len()).into());
            config
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load board config: {}", e).into());
            BoardConfig::default()
        }
    }
}
