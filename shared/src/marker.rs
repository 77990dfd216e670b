use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A map marker as served by `GET /api/markers`.
///
/// Absent fields are filled with the backend's column defaults at the serde
/// layer, so a deserialized marker is always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(default)]
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub required_value: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_sufficient_color")]
    pub sufficient_color: String,
    #[serde(default = "default_insufficient_color")]
    pub insufficient_color: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// The backend serializes a marker without images as `"images": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let images = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(images.unwrap_or_default())
}

fn default_sufficient_color() -> String {
    "#409EFF".to_string()
}

fn default_insufficient_color() -> String {
    "#F56C6C".to_string()
}

impl Marker {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
