//! Property tests for resolution and tree generation over random tables.

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::json;

use geo_taxonomy::tables::{City, Continent, Country, ReferenceTables};
use geo_taxonomy::types::LabelNode;
use geo_taxonomy::{ResolveError, TaxonomyResolver, TreeGenerator};

// Small name pool so repeated cities are common.
const CITY_NAMES: &[&str] = &["Springfield", "Riverside", "Fairview", "Salem", "Madison"];

/// Consistent tables: unique codes, unique names, every reference resolves.
fn arb_tables() -> impl Strategy<Value = ReferenceTables> {
    (1usize..5)
        .prop_flat_map(|continents| {
            (
                Just(continents),
                prop::collection::vec(0..continents, 0..8),
            )
        })
        .prop_flat_map(|(continents, country_homes)| {
            let countries = country_homes.len();
            let cities = if countries == 0 {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec((0..countries, 0..CITY_NAMES.len()), 0..24).boxed()
            };
            (Just(continents), Just(country_homes), cities)
        })
        .prop_map(|(continents, country_homes, cities)| {
            ReferenceTables::from_parts(
                (0..continents)
                    .map(|i| Continent::new(format!("C{i}"), format!("Continent {i}")))
                    .collect(),
                country_homes
                    .iter()
                    .enumerate()
                    .map(|(i, home)| {
                        Country::new(format!("K{i}"), format!("Country {i}"), format!("C{home}"))
                    })
                    .collect(),
                cities
                    .iter()
                    .map(|(country, name)| City::new(CITY_NAMES[*name], format!("K{country}")))
                    .collect(),
            )
        })
}

proptest! {
    #[test]
    fn empty_path_lists_every_continent_once(tables in arb_tables()) {
        let labels = TaxonomyResolver::new(&tables).resolve::<&str>(&[], "").unwrap();

        prop_assert_eq!(labels.len(), tables.continents().len());
        for (label, continent) in labels.iter().zip(tables.continents()) {
            prop_assert_eq!(label.alias(), Some(continent.code.as_str()));
            prop_assert_eq!(label.value(), continent.name.as_str());
            prop_assert_eq!(label.is_leaf(), Some(false));
        }
    }

    #[test]
    fn code_and_name_select_the_same_labels(tables in arb_tables()) {
        let resolver = TaxonomyResolver::new(&tables);

        for continent in tables.continents() {
            prop_assert_eq!(
                resolver.resolve(&[&continent.code], "").unwrap(),
                resolver.resolve(&[&continent.name], "").unwrap()
            );
        }
        for country in tables.countries() {
            prop_assert_eq!(
                resolver.resolve(&["any", country.code.as_str()], "").unwrap(),
                resolver.resolve(&["any", country.name.as_str()], "").unwrap()
            );
        }
    }

    #[test]
    fn city_lists_are_distinct_and_complete(tables in arb_tables()) {
        let resolver = TaxonomyResolver::new(&tables);

        for country in tables.countries() {
            let labels = resolver.resolve(&[&country.continent_code, &country.code], "").unwrap();
            let names: Vec<&str> = labels.iter().map(LabelNode::value).collect();

            let distinct: HashSet<&str> = names.iter().copied().collect();
            prop_assert_eq!(distinct.len(), names.len());

            let expected: HashSet<&str> = tables
                .cities()
                .iter()
                .filter(|city| city.country_code == country.code)
                .map(|city| city.name.as_str())
                .collect();
            prop_assert_eq!(distinct, expected);
            prop_assert!(labels.iter().all(|l| l.alias().is_none() && l.is_leaf().is_none()));
        }
    }

    #[test]
    fn unknown_country_is_not_found(tables in arb_tables()) {
        let err = TaxonomyResolver::new(&tables)
            .resolve(&["C0", "Atlantis"], "path=C0&path=Atlantis")
            .unwrap_err();

        prop_assert_eq!(
            err,
            ResolveError::NotFound {
                raw_query: "path=C0&path=Atlantis".to_string(),
                attempted: "Atlantis".to_string(),
            }
        );
    }

    #[test]
    fn resolution_is_repeatable(tables in arb_tables()) {
        let resolver = TaxonomyResolver::new(&tables);
        let paths: Vec<Vec<String>> = std::iter::once(Vec::new())
            .chain(tables.continents().iter().map(|c| vec![c.code.clone()]))
            .chain(tables.countries().iter().map(|c| vec![c.continent_code.clone(), c.name.clone()]))
            .collect();

        for path in &paths {
            prop_assert_eq!(
                resolver.resolve(path.as_slice(), "").unwrap(),
                resolver.resolve(path.as_slice(), "").unwrap()
            );
        }
    }

    #[test]
    fn generator_keeps_every_city_in_first_seen_order(tables in arb_tables()) {
        let tree = TreeGenerator::new(&tables).generate().unwrap();

        prop_assert_eq!(tree.city_count(), tables.cities().len());

        let mut continent_order: Vec<String> = Vec::new();
        let mut country_order: Vec<String> = Vec::new();
        for city in tables.cities() {
            let country = tables.country_by_code(&city.country_code).unwrap();
            if !continent_order.contains(&country.continent_code) {
                continent_order.push(country.continent_code.clone());
            }
            if !country_order.contains(&country.code) {
                country_order.push(country.code.clone());
            }
        }

        let tree_continents: Vec<String> = tree.items.iter().map(|c| c.alias.clone()).collect();
        prop_assert_eq!(tree_continents, continent_order);

        for branch in &tree.items {
            let expected: Vec<&String> = country_order
                .iter()
                .filter(|code| {
                    tables.country_by_code(code).map(|c| c.continent_code.as_str())
                        == Some(branch.alias.as_str())
                })
                .collect();
            let actual: Vec<&String> = branch.children.iter().map(|c| &c.alias).collect();
            prop_assert_eq!(actual, expected);

            for country in &branch.children {
                let expected: Vec<&str> = tables
                    .cities_in(&country.alias)
                    .map(|city| city.name.as_str())
                    .collect();
                let actual: Vec<&str> = country.children.iter().map(|c| c.value.as_str()).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}

#[test]
fn berlin_munich_berlin_scenario() {
    let tables = ReferenceTables::from_json(
        r#"{"EU": "Europe"}"#,
        r#"{"DE": {"name": "Germany", "continent": "EU"}}"#,
        r#"[
            {"name": "Berlin", "country": "DE"},
            {"name": "Munich", "country": "DE"},
            {"name": "Berlin", "country": "DE"}
        ]"#,
    )
    .unwrap();
    let resolver = TaxonomyResolver::new(&tables);

    let to_json = |labels: Vec<LabelNode>| serde_json::to_value(labels).unwrap();

    assert_eq!(
        to_json(resolver.resolve::<&str>(&[], "").unwrap()),
        json!([{ "alias": "EU", "value": "Europe", "isLeaf": false }])
    );
    assert_eq!(
        to_json(resolver.resolve(&["EU"], "").unwrap()),
        json!([{ "alias": "DE", "value": "Germany", "isLeaf": false }])
    );
    assert_eq!(
        to_json(resolver.resolve(&["EU", "DE"], "").unwrap()),
        json!([{ "value": "Berlin" }, { "value": "Munich" }])
    );

    let tree = TreeGenerator::new(&tables).generate().unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "items": [{
                "alias": "EU",
                "value": "Europe",
                "children": [{
                    "alias": "DE",
                    "value": "Germany",
                    "children": [
                        { "value": "Berlin" },
                        { "value": "Munich" },
                        { "value": "Berlin" }
                    ]
                }]
            }]
        })
    );
}
