//! Per-item schema list (`GetSchema` style)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar::Scalar;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsSchema {
    pub items: Option<Vec<SchemaItem>>,
    #[serde(rename = "originNames")]
    pub origin_names: Option<Vec<OriginName>>,
}

impl ItemsSchema {
    /// Parse a schema document, bare or wrapped in `{"result": ...}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(json)?;
        if let Some(inner) = value.get_mut("result") {
            value = inner.take();
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn items(&self) -> Result<&[SchemaItem]> {
        self.items
            .as_deref()
            .ok_or_else(|| Error::missing_table("schema items"))
    }

    pub fn origin_names(&self) -> Result<&[OriginName]> {
        self.origin_names
            .as_deref()
            .ok_or_else(|| Error::missing_table("originNames"))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaItem {
    pub defindex: Option<Scalar>,
    /// Code reference for the item type label (`#CSGO_Type_Pistol`).
    pub item_type_name: Option<String>,
    pub image_url: Option<String>,
    pub image_url_large: Option<String>,
}

impl SchemaItem {
    /// `image_url`, or `image_url_large` when the former is absent or empty.
    pub fn image(&self) -> Option<&str> {
        [self.image_url.as_deref(), self.image_url_large.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OriginName {
    pub origin: Option<Scalar>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_api_shape() {
        let schema = ItemsSchema::from_json_str(
            r#"{"result": {"status": 1, "items": [{"defindex": 4001, "image_url": ""}],
                "originNames": [{"origin": 0, "name": "Timed Drop"}]}}"#,
        )
        .unwrap();

        assert_eq!(schema.items().unwrap().len(), 1);
        assert_eq!(schema.origin_names().unwrap()[0].name.as_deref(), Some("Timed Drop"));
    }

    #[test]
    fn test_image_falls_back_to_large() {
        let item = SchemaItem {
            image_url: Some(String::new()),
            image_url_large: Some("large.png".to_string()),
            ..Default::default()
        };
        assert_eq!(item.image(), Some("large.png"));
        assert_eq!(SchemaItem::default().image(), None);
    }
}
