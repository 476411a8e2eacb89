//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::state::App;
use crate::countries::{CallingCodes, Country, CountryName, CountrySource, FetchError, Flags};

/// A minimal record with the given common name and codes derived from it.
pub fn country(common: &str) -> Country {
    let code: String = common
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    Country {
        name: CountryName {
            common: common.to_string(),
            official: format!("Republic of {common}"),
            native_name: Default::default(),
        },
        cca2: code.chars().take(2).collect(),
        cca3: code.clone(),
        alt_spellings: vec![code.clone(), common.to_string()],
        idd: CallingCodes {
            root: Some("+5".to_string()),
            suffixes: vec!["9".to_string()],
        },
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{}.png", code.to_lowercase()),
        },
    }
}

/// Bolivia, Brazil, Chile in that order.
pub fn sample_countries() -> Vec<Country> {
    vec![country("Bolivia"), country("Brazil"), country("Chile")]
}

/// "Country 001" through "Country {n:03}".
pub fn numbered_countries(n: usize) -> Vec<Country> {
    (1..=n).map(|i| country(&format!("Country {i:03}"))).collect()
}

/// An `App` that has already received `countries` from the fetch.
pub fn loaded_app(countries: Vec<Country>) -> App {
    let mut app = App::new();
    update(&mut app, Action::CountriesLoaded(countries));
    app
}

/// A source that returns a canned result without touching the network.
pub struct FakeSource {
    pub result: Result<Vec<Country>, FetchError>,
}

#[async_trait]
impl CountrySource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        self.result.clone()
    }
}
