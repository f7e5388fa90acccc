//! Flat label lists returned by the path resolver
//!
//! The three node kinds carry different field sets on the wire:
//!
//! | Kind      | `alias` | `value` | `isLeaf` |
//! |-----------|---------|---------|----------|
//! | Continent | code    | name    | `false`  |
//! | Country   | code    | name    | `false`  |
//! | City      | absent  | name    | absent   |

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One entry of a resolved label list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LabelNode {
    Continent { alias: String, value: String },
    Country { alias: String, value: String },
    City { value: String },
}

impl LabelNode {
    pub fn continent(alias: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Continent {
            alias: alias.into(),
            value: value.into(),
        }
    }

    pub fn country(alias: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Country {
            alias: alias.into(),
            value: value.into(),
        }
    }

    pub fn city(value: impl Into<String>) -> Self {
        Self::City {
            value: value.into(),
        }
    }

    /// Code of a continent or country node; cities have none.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::Continent { alias, .. } | Self::Country { alias, .. } => Some(alias.as_str()),
            Self::City { .. } => None,
        }
    }

    /// Human-readable name
    pub fn value(&self) -> &str {
        match self {
            Self::Continent { value, .. } | Self::Country { value, .. } | Self::City { value } => {
                value.as_str()
            }
        }
    }

    /// `Some(false)` for continent/country refs, `None` (field absent) for cities.
    pub fn is_leaf(&self) -> Option<bool> {
        match self {
            Self::Continent { .. } | Self::Country { .. } => Some(false),
            Self::City { .. } => None,
        }
    }
}

impl Serialize for LabelNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Continent { alias, value } | Self::Country { alias, value } => {
                let mut state = serializer.serialize_struct("LabelNode", 3)?;
                state.serialize_field("alias", alias)?;
                state.serialize_field("value", value)?;
                state.serialize_field("isLeaf", &false)?;
                state.end()
            }
            Self::City { value } => {
                let mut state = serializer.serialize_struct("LabelNode", 1)?;
                state.serialize_field("value", value)?;
                state.end()
            }
        }
    }
}

/// `{ "items": [...] }` envelope used by `/labels2`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LabelItems {
    pub items: Vec<LabelNode>,
}

impl From<Vec<LabelNode>> for LabelItems {
    fn from(items: Vec<LabelNode>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_ref_nodes_carry_is_leaf_false() {
        let continent = serde_json::to_value(LabelNode::continent("EU", "Europe")).unwrap();
        assert_eq!(
            continent,
            json!({ "alias": "EU", "value": "Europe", "isLeaf": false })
        );

        let country = serde_json::to_value(LabelNode::country("DE", "Germany")).unwrap();
        assert_eq!(
            country,
            json!({ "alias": "DE", "value": "Germany", "isLeaf": false })
        );
    }

    #[test]
    fn test_city_omits_alias_and_is_leaf() {
        let city = serde_json::to_value(LabelNode::city("Berlin")).unwrap();
        assert_eq!(city, json!({ "value": "Berlin" }));

        let obj = city.as_object().unwrap();
        assert!(!obj.contains_key("alias"));
        assert!(!obj.contains_key("isLeaf"));
    }

    #[test]
    fn test_items_envelope() {
        let items = LabelItems::from(vec![LabelNode::city("Berlin")]);
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, r#"{"items":[{"value":"Berlin"}]}"#);
    }

    #[test]
    fn test_accessors() {
        let node = LabelNode::country("FR", "France");
        assert_eq!(node.alias(), Some("FR"));
        assert_eq!(node.value(), "France");
        assert_eq!(node.is_leaf(), Some(false));

        let leaf = LabelNode::city("Paris");
        assert_eq!(leaf.alias(), None);
        assert_eq!(leaf.is_leaf(), None);
    }
}
