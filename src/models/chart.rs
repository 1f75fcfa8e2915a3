use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while loading a merchant size chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid size chart JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Size chart must be an object of size entries")]
    NotAnObject,

    #[error("Size '{0}' must be an object of measurement values")]
    InvalidSize(String),

    #[error("Size chart has no sizes")]
    Empty,
}

/// One row of a size chart: a label and its measurement cells, in chart order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    pub label: String,
    /// (measurement name, cell text) pairs as authored by the merchant
    pub measurements: Vec<(String, String)>,
}

impl SizeEntry {
    /// Cell text for a measurement name (exact match)
    pub fn get(&self, measurement: &str) -> Option<&str> {
        self.measurements
            .iter()
            .find(|(name, _)| name == measurement)
            .map(|(_, value)| value.as_str())
    }
}

/// Merchant-authored size chart
///
/// Wire format is an object of objects:
/// `{"P": {"Busto": "84 - 88", "Cintura": "66 - 70"}, "M": {...}}`.
/// Key order is preserved on both levels so that ties and the comparison
/// table follow the order the merchant wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeChart {
    sizes: Vec<SizeEntry>,
}

impl SizeChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a size, keeping its position if it already exists
    pub fn with_size<L, I, K, V>(mut self, label: L, measurements: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entry = SizeEntry {
            label: label.into(),
            measurements: measurements
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        };

        match self.sizes.iter_mut().find(|s| s.label == entry.label) {
            Some(existing) => *existing = entry,
            None => self.sizes.push(entry),
        }
        self
    }

    /// Parse a chart from its JSON text
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a chart from an already deserialized JSON value
    ///
    /// Numeric cells are accepted and kept as their decimal text. Cells of any
    /// other type are skipped with a warning.
    pub fn from_value(value: Value) -> Result<Self, ChartError> {
        let Value::Object(root) = value else {
            return Err(ChartError::NotAnObject);
        };

        let mut sizes = Vec::with_capacity(root.len());
        for (label, entry) in root {
            let Value::Object(cells) = entry else {
                return Err(ChartError::InvalidSize(label));
            };
            let measurements = cells_to_pairs(&label, cells);
            sizes.push(SizeEntry { label, measurements });
        }

        if sizes.is_empty() {
            return Err(ChartError::Empty);
        }

        Ok(Self { sizes })
    }

    pub fn sizes(&self) -> &[SizeEntry] {
        &self.sizes
    }

    pub fn get(&self, label: &str) -> Option<&SizeEntry> {
        self.sizes.iter().find(|s| s.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sizes.iter().map(|s| s.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

fn cells_to_pairs(label: &str, cells: Map<String, Value>) -> Vec<(String, String)> {
    cells
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(text) => Some((name, text)),
            Value::Number(n) => Some((name, n.to_string())),
            other => {
                tracing::warn!(
                    "Skipping size '{}' measurement '{}': unsupported value {}",
                    label,
                    name,
                    other
                );
                None
            }
        })
        .collect()
}

impl Serialize for SizeChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sizes.len()))?;
        for entry in &self.sizes {
            let cells: Map<String, Value> = entry
                .measurements
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();
            map.serialize_entry(&entry.label, &cells)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SizeChart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART: &str = r#"{
        "P": {"Busto": "84 - 88", "Cintura": "66 - 70", "Quadril": "90 - 94"},
        "M": {"Busto": "92 - 96", "Cintura": "74 - 78", "Quadril": "102 - 106"},
        "G": {"Busto": "100 - 104", "Cintura": "82 - 86", "Quadril": "110 - 114"}
    }"#;

    #[test]
    fn test_from_json_preserves_order() {
        let chart = SizeChart::from_json(CHART).unwrap();

        assert_eq!(chart.labels().collect::<Vec<_>>(), vec!["P", "M", "G"]);
        let names: Vec<&str> = chart.sizes()[1]
            .measurements
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["Busto", "Cintura", "Quadril"]);
        assert_eq!(chart.get("M").unwrap().get("Cintura"), Some("74 - 78"));
    }

    #[test]
    fn test_numeric_order_labels_keep_authored_order() {
        let chart = SizeChart::from_json(r#"{"40": {"Busto": "90"}, "38": {"Busto": "86"}}"#).unwrap();
        assert_eq!(chart.labels().collect::<Vec<_>>(), vec!["40", "38"]);
    }

    #[test]
    fn test_numeric_cells_accepted() {
        let chart = SizeChart::from_json(r#"{"M": {"Busto": 92, "Cintura": 74.5}}"#).unwrap();
        let m = chart.get("M").unwrap();
        assert_eq!(m.get("Busto"), Some("92"));
        assert_eq!(m.get("Cintura"), Some("74.5"));
    }

    #[test]
    fn test_unsupported_cells_skipped() {
        let chart = SizeChart::from_json(r#"{"M": {"Busto": null, "Cintura": "74"}}"#).unwrap();
        assert_eq!(chart.get("M").unwrap().measurements.len(), 1);
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(SizeChart::from_json("[]"), Err(ChartError::NotAnObject)));
        assert!(matches!(SizeChart::from_json("{}"), Err(ChartError::Empty)));
        assert!(matches!(
            SizeChart::from_json(r#"{"M": "92"}"#),
            Err(ChartError::InvalidSize(label)) if label == "M"
        ));
        assert!(matches!(SizeChart::from_json("{"), Err(ChartError::Json(_))));
    }

    #[test]
    fn test_serde_wire_format() {
        let chart = SizeChart::new()
            .with_size("P", [("Busto", "84 - 88")])
            .with_size("M", [("Busto", "92 - 96")]);

        let json = serde_json::to_string(&chart).unwrap();
        assert_eq!(json, r#"{"P":{"Busto":"84 - 88"},"M":{"Busto":"92 - 96"}}"#);

        let parsed: SizeChart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, chart);
    }

    #[test]
    fn test_with_size_replaces_in_place() {
        let chart = SizeChart::new()
            .with_size("P", [("Busto", "84")])
            .with_size("M", [("Busto", "92")])
            .with_size("P", [("Busto", "86")]);

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.labels().collect::<Vec<_>>(), vec!["P", "M"]);
        assert_eq!(chart.get("P").unwrap().get("Busto"), Some("86"));
    }
}
