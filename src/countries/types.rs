//! # Country Records
//!
//! Serde model for one element of the REST Countries response array.
//! Only the fields Atlas renders are modelled; everything else in the
//! payload is ignored during decoding.
//!
//! ```text
//! Country
//! ├── name
//! │   ├── common          "Bolivia"
//! │   ├── official        "Plurinational State of Bolivia"
//! │   └── nativeName      { "aym": { official, common }, ... }
//! ├── cca2                "BO"
//! ├── cca3                "BOL"
//! ├── altSpellings        ["BO", "Buliwya", ...]
//! ├── idd                 { root: "+5", suffixes: ["91"] }
//! └── flags.png           "https://flagcdn.com/w320/bo.png"
//! ```
//!
//! Missing or `null` fields decode to empty values. The upstream data omits
//! `nativeName` and `idd.root` for a handful of territories, and one odd
//! record shouldn't sink the whole list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treats an explicit `null` the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: CountryName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cca2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cca3: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt_spellings: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub idd: CallingCodes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Flags,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub common: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub official: String,
    /// Keyed by ISO 639-3 language code, in upstream order. Kept as raw
    /// JSON since it is only ever dumped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub native_name: Map<String, Value>,
}

/// International direct dialing prefix: `root` + each of `suffixes`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CallingCodes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub suffixes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Flags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub png: String,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn flag_image_url(&self) -> &str {
        &self.flags.png
    }

    /// Raw JSON dump of the native names, e.g. `{"spa":{"official":"...","common":"..."}}`.
    pub fn native_names_dump(&self) -> String {
        serde_json::to_string(&self.name.native_name).unwrap_or_else(|_| "{}".to_string())
    }

    /// Raw JSON dump of the calling codes, e.g. `{"root":"+5","suffixes":["91"]}`.
    pub fn calling_codes_dump(&self) -> String {
        serde_json::to_string(&self.idd).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn alt_spellings_joined(&self) -> String {
        self.alt_spellings.join(", ")
    }
}
