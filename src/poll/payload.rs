//! Wire types for the two backend endpoints.
//!
//! These match the JSON the metrics backend serves. They are the shared
//! format between the server and this dashboard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `/getstats/`: metric key to its reading for this tick.
pub type StatsResponse = BTreeMap<String, MetricReading>;

/// Response of `/getnetwork/`: metric key to a plain display string.
pub type NetworkResponse = BTreeMap<String, String>;

/// One metric's reading for one poll tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricReading {
    /// The numeric observation. Null when the server could not collect the
    /// metric this tick; the panel is hidden rather than treated as an
    /// error.
    #[serde(default)]
    pub value: Option<f64>,

    /// Preformatted display text (e.g. "42.5%", "0.8 MB/s").
    #[serde(default)]
    pub text: Option<String>,

    /// Panel background color token from the server palette.
    #[serde(default)]
    pub color: String,

    /// The value representing 100% bar height. Absent in older payload
    /// shapes; absence means the panel is text/color only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stats_response() {
        let json = r##"{
            "cpu": {
                "value": 12.5,
                "text": "12.5%",
                "color": "#4CAF50",
                "max": 100
            },
            "temperature": {
                "value": null,
                "text": "-",
                "color": "#E8E8E8",
                "max": 0
            }
        }"##;

        let stats: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.len(), 2);

        let cpu = stats.get("cpu").unwrap();
        assert_eq!(cpu.value, Some(12.5));
        assert_eq!(cpu.text.as_deref(), Some("12.5%"));
        assert_eq!(cpu.color, "#4CAF50");
        assert_eq!(cpu.max, Some(100.0));

        let temp = stats.get("temperature").unwrap();
        assert_eq!(temp.value, None);
        assert_eq!(temp.max, Some(0.0));
    }

    #[test]
    fn test_deserialize_reading_without_max() {
        // Older payload shape: no max field at all
        let json = r##"{"value": 3, "text": "3", "color": "#FFC107"}"##;
        let reading: MetricReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.value, Some(3.0));
        assert!(reading.max.is_none());
    }

    #[test]
    fn test_deserialize_reading_with_null_text() {
        // The backend can emit text: null alongside a live value
        let json = r##"{"value": 1.0, "text": null, "color": "#4CAF50", "max": 10}"##;
        let reading: MetricReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.value, Some(1.0));
        assert!(reading.text.is_none());
    }

    #[test]
    fn test_deserialize_network_response() {
        let json = r#"{"ip": "192.168.1.10", "hostname": "raspberrypi"}"#;
        let network: NetworkResponse = serde_json::from_str(json).unwrap();
        assert_eq!(network.get("ip").map(String::as_str), Some("192.168.1.10"));
        assert_eq!(
            network.get("hostname").map(String::as_str),
            Some("raspberrypi")
        );
    }
}
