//! Dataset loading
//!
//! The keyed datasets are JSON objects whose key order is meaningful, so
//! they are read through [`OrderedEntries`] instead of a `HashMap`.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use super::{City, Continent, Country, ReferenceTables};
use crate::config::DataConfig;
use crate::error::LoadError;

/// JSON object read as `(key, value)` pairs in document order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedEntries<V>(pub Vec<(String, V)>);

impl<'de, V> Deserialize<'de> for OrderedEntries<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for EntriesVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedEntries<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Row of countries.json; the remaining fields (native, phone, capital...) are ignored
#[derive(Debug, serde::Deserialize)]
struct CountryRecord {
    name: String,
    continent: String,
}

/// Row of cities.json; lat/lng are ignored
#[derive(Debug, serde::Deserialize)]
struct CityRecord {
    name: String,
    country: String,
}

impl ReferenceTables {
    /// Read the three dataset files named by `config`.
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        let continents: OrderedEntries<String> = read_json(&config.continents_path())?;
        let countries: OrderedEntries<CountryRecord> = read_json(&config.countries_path())?;
        let cities: Vec<CityRecord> = read_json(&config.cities_path())?;

        let tables = Self::from_records(continents, countries, cities);

        tracing::info!(
            continents = tables.continents().len(),
            countries = tables.countries().len(),
            cities = tables.cities().len(),
            dir = %config.dir.display(),
            "Reference tables loaded"
        );

        Ok(tables)
    }

    /// Parse the three datasets from JSON text.
    pub fn from_json(continents: &str, countries: &str, cities: &str) -> serde_json::Result<Self> {
        Ok(Self::from_records(
            serde_json::from_str(continents)?,
            serde_json::from_str(countries)?,
            serde_json::from_str(cities)?,
        ))
    }

    fn from_records(
        continents: OrderedEntries<String>,
        countries: OrderedEntries<CountryRecord>,
        cities: Vec<CityRecord>,
    ) -> Self {
        Self::from_parts(
            continents
                .0
                .into_iter()
                .map(|(code, name)| Continent { code, name })
                .collect(),
            countries
                .0
                .into_iter()
                .map(|(code, record)| Country {
                    code,
                    name: record.name,
                    continent_code: record.continent,
                })
                .collect(),
            cities
                .into_iter()
                .map(|record| City {
                    name: record.name,
                    country_code: record.country,
                })
                .collect(),
        )
    }
}

fn read_json<T>(path: &Path) -> Result<T, LoadError>
where
    T: for<'de> Deserialize<'de>,
{
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
