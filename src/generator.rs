//! Full-tree generation
//!
//! Flattens the three reference tables into one denormalized
//! continent → country → city tree, driven by the city list:
//!
//! ```text
//! cities ──► TreeGenerator ──► FullTree { items: [ContinentBranch] }
//!              │
//!              ├─ country_slots:   country code   -> (continent slot, country slot)
//!              └─ continent_slots: continent code -> continent slot
//! ```
//!
//! Continents and countries appear in the order they are first reached while
//! scanning cities. Every city row becomes a leaf; no name deduplication is
//! applied here, unlike the resolver's city listing.
//!
//! Generation is deterministic: the same tables always produce the same tree.

use std::collections::HashMap;

use geo_taxonomy_types::{CityLeaf, ContinentBranch, CountryBranch, FullTree};

use crate::error::ReferenceError;
use crate::tables::{City, ReferenceTables};

pub struct TreeGenerator<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> TreeGenerator<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Materialize the whole taxonomy.
    ///
    /// Fails on the first city whose country is missing from the country
    /// table, or whose country names a continent that does not exist.
    pub fn generate(&self) -> Result<FullTree, ReferenceError> {
        let mut items: Vec<ContinentBranch> = Vec::new();
        let mut continent_slots: HashMap<&'a str, usize> = HashMap::new();
        let mut country_slots: HashMap<&'a str, (usize, usize)> = HashMap::new();

        for city in self.tables.cities() {
            let (continent_slot, country_slot) = match country_slots.get(city.country_code.as_str()) {
                Some(&slots) => slots,
                None => {
                    let slots = self.open_country(city, &mut items, &mut continent_slots)?;
                    country_slots.insert(city.country_code.as_str(), slots);
                    slots
                }
            };

            items[continent_slot].children[country_slot]
                .children
                .push(CityLeaf::new(&city.name));
        }

        tracing::debug!(
            continents = items.len(),
            cities = self.tables.cities().len(),
            "Full tree generated"
        );

        Ok(FullTree { items })
    }

    /// Create the branch for a city's country, and its continent if unseen.
    fn open_country(
        &self,
        city: &'a City,
        items: &mut Vec<ContinentBranch>,
        continent_slots: &mut HashMap<&'a str, usize>,
    ) -> Result<(usize, usize), ReferenceError> {
        let tables: &'a ReferenceTables = self.tables;

        let country = tables
            .country_by_code(&city.country_code)
            .ok_or_else(|| ReferenceError::UnknownCountry {
                city: city.name.clone(),
                country_code: city.country_code.clone(),
            })?;

        let continent_slot = match continent_slots.get(country.continent_code.as_str()) {
            Some(&slot) => slot,
            None => {
                let continent = tables.continent_by_code(&country.continent_code).ok_or_else(|| {
                    ReferenceError::UnknownContinent {
                        country_code: country.code.clone(),
                        continent_code: country.continent_code.clone(),
                    }
                })?;
                items.push(ContinentBranch::new(&continent.code, &continent.name));
                let slot = items.len() - 1;
                continent_slots.insert(continent.code.as_str(), slot);
                slot
            }
        };

        let branch = &mut items[continent_slot];
        branch
            .children
            .push(CountryBranch::new(&country.code, &country.name));

        Ok((continent_slot, branch.children.len() - 1))
    }
}
