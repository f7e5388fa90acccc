//! Path-driven taxonomy resolution
//!
//! A path selects how deep into the continent → country → city hierarchy to
//! look, and the resolver returns the level one below the path's end:
//!
//! ```text
//! []                 -> every continent
//! [continent]        -> countries of that continent
//! [_, country]       -> cities of that country, deduplicated by name
//! ```
//!
//! Selectors match a code or a display name exactly (case-sensitive). The
//! first segment of a depth-2 path is not consulted: the country selector
//! alone decides the result, so `["AS", "DE"]` returns German cities.

use std::collections::HashSet;

use geo_taxonomy_types::LabelNode;

use crate::error::ResolveError;
use crate::tables::{Continent, ReferenceTables};

/// Deepest path the resolver interprets; extra segments are ignored
pub const MAX_PATH_DEPTH: usize = 2;

/// Read-only resolver over borrowed reference tables
#[derive(Debug, Clone, Copy)]
pub struct TaxonomyResolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> TaxonomyResolver<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Resolve `path` to the label list one level below its end.
    ///
    /// `raw_query` is only carried into [`ResolveError::NotFound`] so the
    /// caller can report what was asked for.
    pub fn resolve<S: AsRef<str>>(
        &self,
        path: &[S],
        raw_query: &str,
    ) -> Result<Vec<LabelNode>, ResolveError> {
        if path.len() > MAX_PATH_DEPTH {
            tracing::debug!(
                depth = path.len(),
                "Path deeper than {} segments, extra segments ignored",
                MAX_PATH_DEPTH
            );
        }

        match path {
            [] => Ok(self.continents()),
            [continent] => Ok(self.countries_of(continent.as_ref())),
            [_, country, ..] => self.cities_of(country.as_ref(), raw_query),
        }
    }

    /// Every continent in table order
    pub fn continents(&self) -> Vec<LabelNode> {
        self.tables
            .continents()
            .iter()
            .map(|c| LabelNode::continent(&c.code, &c.name))
            .collect()
    }

    /// Countries of the continent picked by code, or by name when no code matches.
    ///
    /// An unknown continent yields an empty list.
    pub fn countries_of(&self, selector: &str) -> Vec<LabelNode> {
        let Some(continent) = self.find_continent(selector) else {
            return Vec::new();
        };

        self.tables
            .countries()
            .iter()
            .filter(|country| country.continent_code == continent.code)
            .map(|country| LabelNode::country(&country.code, &country.name))
            .collect()
    }

    /// Cities of the first country (table order) whose code or name equals
    /// `selector`. Repeated city names keep only their first occurrence.
    pub fn cities_of(&self, selector: &str, raw_query: &str) -> Result<Vec<LabelNode>, ResolveError> {
        let country = self
            .tables
            .countries()
            .iter()
            .find(|country| country.is_selected_by(selector))
            .ok_or_else(|| ResolveError::NotFound {
                raw_query: raw_query.to_string(),
                attempted: selector.to_string(),
            })?;

        let mut seen = HashSet::new();
        Ok(self
            .tables
            .cities_in(&country.code)
            .filter(|city| seen.insert(city.name.as_str()))
            .map(|city| LabelNode::city(&city.name))
            .collect())
    }

    /// Every country in table order, regardless of continent
    pub fn all_countries(&self) -> Vec<LabelNode> {
        self.tables
            .countries()
            .iter()
            .map(|country| LabelNode::country(&country.code, &country.name))
            .collect()
    }

    fn find_continent(&self, selector: &str) -> Option<&'a Continent> {
        let continents = self.tables.continents();
        continents
            .iter()
            .find(|c| c.code == selector)
            .or_else(|| continents.iter().find(|c| c.name == selector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{City, Country};
    use pretty_assertions::assert_eq;

    fn tables() -> ReferenceTables {
        ReferenceTables::from_parts(
            vec![Continent::new("EU", "Europe"), Continent::new("AS", "Asia")],
            vec![
                Country::new("DE", "Germany", "EU"),
                Country::new("JP", "Japan", "AS"),
                Country::new("FR", "France", "EU"),
            ],
            vec![
                City::new("Berlin", "DE"),
                City::new("Osaka", "JP"),
                City::new("Munich", "DE"),
                City::new("Berlin", "DE"),
                City::new("Paris", "FR"),
            ],
        )
    }

    #[test]
    fn test_empty_path_lists_continents() {
        let t = tables();
        let labels = TaxonomyResolver::new(&t).resolve::<&str>(&[], "").unwrap();
        assert_eq!(
            labels,
            vec![
                LabelNode::continent("EU", "Europe"),
                LabelNode::continent("AS", "Asia"),
            ]
        );
    }

    #[test]
    fn test_continent_by_code_or_name() {
        let t = tables();
        let resolver = TaxonomyResolver::new(&t);
        let expected = vec![
            LabelNode::country("DE", "Germany"),
            LabelNode::country("FR", "France"),
        ];
        assert_eq!(resolver.resolve(&["EU"], "path=EU").unwrap(), expected);
        assert_eq!(resolver.resolve(&["Europe"], "path=Europe").unwrap(), expected);
    }

    #[test]
    fn test_unknown_continent_is_empty_not_error() {
        let t = tables();
        let labels = TaxonomyResolver::new(&t).resolve(&["eu"], "path=eu").unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn test_cities_deduplicated_first_wins() {
        let t = tables();
        let labels = TaxonomyResolver::new(&t)
            .resolve(&["EU", "DE"], "path=EU&path=DE")
            .unwrap();
        assert_eq!(
            labels,
            vec![LabelNode::city("Berlin"), LabelNode::city("Munich")]
        );
    }

    #[test]
    fn test_country_by_name_and_first_segment_ignored() {
        let t = tables();
        let resolver = TaxonomyResolver::new(&t);
        let by_name = resolver.resolve(&["Asia", "Germany"], "").unwrap();
        let by_code = resolver.resolve(&["EU", "DE"], "").unwrap();
        assert_eq!(by_name, by_code);
    }

    #[test]
    fn test_unknown_country_is_not_found() {
        let t = tables();
        let err = TaxonomyResolver::new(&t)
            .resolve(&["EU", "Atlantis"], "path=EU&path=Atlantis")
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                raw_query: "path=EU&path=Atlantis".to_string(),
                attempted: "Atlantis".to_string(),
            }
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let t = tables();
        let resolver = TaxonomyResolver::new(&t);
        assert!(resolver.resolve(&["EU", "germany"], "").is_err());
        assert!(resolver.resolve(&["EU", "de"], "").is_err());
    }

    #[test]
    fn test_deep_path_truncated_to_two_segments() {
        let t = tables();
        let resolver = TaxonomyResolver::new(&t);
        let deep = resolver.resolve(&["EU", "FR", "Paris", "extra"], "").unwrap();
        assert_eq!(deep, vec![LabelNode::city("Paris")]);
    }

    #[test]
    fn test_all_countries_in_table_order() {
        let t = tables();
        let codes: Vec<_> = TaxonomyResolver::new(&t)
            .all_countries()
            .iter()
            .filter_map(|n| n.alias().map(str::to_string))
            .collect();
        assert_eq!(codes, vec!["DE", "JP", "FR"]);
    }

    #[test]
    fn test_owned_string_paths() {
        let t = tables();
        let path = vec!["EU".to_string(), "FR".to_string()];
        let labels = TaxonomyResolver::new(&t).resolve(&path, "").unwrap();
        assert_eq!(labels, vec![LabelNode::city("Paris")]);
    }
}
