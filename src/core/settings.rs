use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_DATA_FILE: &str = "puppies.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub zoom: f32,
    /// Kennel file name, relative to the app data directory.
    pub data_file: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { dark_mode: true, zoom: 1.25, data_file: DEFAULT_DATA_FILE.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"dark_mode":false}"#).unwrap();
        assert!(!settings.dark_mode);
        assert_eq!(settings.data_file, DEFAULT_DATA_FILE);
        assert_eq!(settings.zoom, 1.25);
    }
}
