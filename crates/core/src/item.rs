use serde::{Deserialize, Serialize};

/// Catalog entry as stored in the item database.
///
/// Serialized with the field names the item documents use, so the same
/// shape round-trips between the store, the index and the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier, also the catalog sort key
    #[serde(rename = "itemName")]
    pub item_name: String,
    /// One-line display name / blurb
    #[serde(rename = "shortdescription", default)]
    pub short_description: Option<String>,
    /// Long description text
    #[serde(default)]
    pub description: Option<String>,
    /// Icon asset reference
    #[serde(rename = "inventoryIcon", default)]
    pub inventory_icon: Option<String>,
    /// Item category
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    /// Rarity label (e.g. "Common", "Legendary")
    #[serde(default)]
    pub rarity: Option<String>,
}

impl Item {
    #[must_use]
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            short_description: None,
            description: None,
            inventory_icon: None,
            item_type: None,
            rarity: None,
        }
    }

    #[must_use]
    pub fn short_description(mut self, value: impl Into<String>) -> Self {
        self.short_description = Some(value.into());
        self
    }

    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    #[must_use]
    pub fn inventory_icon(mut self, value: impl Into<String>) -> Self {
        self.inventory_icon = Some(value.into());
        self
    }

    #[must_use]
    pub fn item_type(mut self, value: impl Into<String>) -> Self {
        self.item_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn rarity(mut self, value: impl Into<String>) -> Self {
        self.rarity = Some(value.into());
        self
    }
}

/// Search hit projected from an indexed item document.
///
/// Missing source fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "itemName", default)]
    pub item_name: Option<String>,
    #[serde(rename = "shortdescription", default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "inventoryIcon", default)]
    pub inventory_icon: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
}

impl From<Item> for SearchResult {
    fn from(item: Item) -> Self {
        Self {
            item_name: Some(item.item_name),
            short_description: item.short_description,
            description: item.description,
            inventory_icon: item.inventory_icon,
            item_type: item.item_type,
            rarity: item.rarity,
        }
    }
}
