//! Reference Tables
//!
//! Three immutable tables loaded once at startup and shared by reference:
//!
//! ```text
//! continents.json   code -> name
//! countries.json    code -> { name, continent }
//! cities.json       [ { name, country } ]
//! ```
//!
//! Continents and countries keep the key order of their source file; that
//! order is the "natural enumeration order" every listing follows. Cities
//! keep their array order and are NOT unique: the same name can appear more
//! than once inside one country.

mod loader;

use std::collections::HashMap;

pub use loader::OrderedEntries;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continent {
    /// Short unique code (e.g. "EU")
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Unique code (e.g. "DE")
    pub code: String,
    pub name: String,
    pub continent_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub country_code: String,
}

impl Continent {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl Country {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        continent_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            continent_code: continent_code.into(),
        }
    }

    /// Exact, case-sensitive match on code or display name
    pub fn is_selected_by(&self, selector: &str) -> bool {
        self.code == selector || self.name == selector
    }
}

impl City {
    pub fn new(name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country_code: country_code.into(),
        }
    }
}

/// The three reference tables plus code indexes built at construction.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    continents: Vec<Continent>,
    countries: Vec<Country>,
    cities: Vec<City>,
    continent_index: HashMap<String, usize>,
    country_index: HashMap<String, usize>,
}

impl ReferenceTables {
    /// Build tables from in-memory rows. Row order is kept as given.
    ///
    /// If a code appears twice, the code index points at its first row.
    pub fn from_parts(continents: Vec<Continent>, countries: Vec<Country>, cities: Vec<City>) -> Self {
        let mut continent_index = HashMap::with_capacity(continents.len());
        for (i, continent) in continents.iter().enumerate() {
            continent_index.entry(continent.code.clone()).or_insert(i);
        }

        let mut country_index = HashMap::with_capacity(countries.len());
        for (i, country) in countries.iter().enumerate() {
            country_index.entry(country.code.clone()).or_insert(i);
        }

        Self {
            continents,
            countries,
            cities,
            continent_index,
            country_index,
        }
    }

    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn continent_by_code(&self, code: &str) -> Option<&Continent> {
        self.continent_index.get(code).map(|&i| &self.continents[i])
    }

    pub fn country_by_code(&self, code: &str) -> Option<&Country> {
        self.country_index.get(code).map(|&i| &self.countries[i])
    }

    /// Cities of one country in source order, duplicates included
    pub fn cities_in<'a>(&'a self, country_code: &'a str) -> impl Iterator<Item = &'a City> + 'a {
        self.cities
            .iter()
            .filter(move |city| city.country_code == country_code)
    }
}
