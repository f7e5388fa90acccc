//! Denormalized continent → country → city tree
//!
//! Unlike label lists, tree nodes never carry `isLeaf`; a city is a leaf
//! because it has no `children` field at all.

use serde::{Deserialize, Serialize};

/// Top-level artifact: `{ "items": [ContinentBranch] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTree {
    pub items: Vec<ContinentBranch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinentBranch {
    /// Continent code (e.g. "EU")
    pub alias: String,
    pub value: String,
    pub children: Vec<CountryBranch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryBranch {
    /// Country code (e.g. "DE")
    pub alias: String,
    pub value: String,
    pub children: Vec<CityLeaf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityLeaf {
    pub value: String,
}

impl FullTree {
    /// Total number of city leaves across all branches
    pub fn city_count(&self) -> usize {
        self.items
            .iter()
            .flat_map(|continent| &continent.children)
            .map(|country| country.children.len())
            .sum()
    }

    pub fn country_count(&self) -> usize {
        self.items.iter().map(|c| c.children.len()).sum()
    }
}

impl ContinentBranch {
    pub fn new(alias: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }
}

impl CountryBranch {
    pub fn new(alias: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }
}

impl CityLeaf {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> FullTree {
        let mut germany = CountryBranch::new("DE", "Germany");
        germany.children.push(CityLeaf::new("Berlin"));
        germany.children.push(CityLeaf::new("Munich"));
        let mut europe = ContinentBranch::new("EU", "Europe");
        europe.children.push(germany);
        FullTree {
            items: vec![europe],
        }
    }

    #[test]
    fn test_tree_wire_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            json!({
                "items": [{
                    "alias": "EU",
                    "value": "Europe",
                    "children": [{
                        "alias": "DE",
                        "value": "Germany",
                        "children": [{ "value": "Berlin" }, { "value": "Munich" }]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_tree_parses_artifact() {
        let artifact = r#"{"items":[{"alias":"EU","value":"Europe","children":[
            {"alias":"DE","value":"Germany","children":[{"value":"Berlin"},{"value":"Munich"}]}]}]}"#;
        let tree: FullTree = serde_json::from_str(artifact).unwrap();
        assert_eq!(tree, sample());
        assert_eq!(tree.city_count(), 2);
        assert_eq!(tree.country_count(), 1);
    }
}
