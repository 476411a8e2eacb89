pub mod client;
pub mod source;
pub mod types;

pub use client::{DEFAULT_API_URL, FIELDS, RestCountriesClient};
pub use source::{CountrySource, FetchError};
pub use types::{CallingCodes, Country, CountryName, Flags};
