// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! JSON share documents.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every member other than `keys` is a share: the member name is the decimal `x`, and
//! `value` is `y` written in `base`. Numbers may be given as JSON numbers or as decimal
//! strings. Shares are kept in document order.

use crate::decoder::{decode, parse_base};
use crate::errors::{RecoveryError, RecoveryResult};
use crate::share::{Share, ShareSet};
use num_bigint::BigInt;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::trace;

const KEYS_FIELD: &str = "keys";

/// A number written either as a JSON number or as a decimal string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Textual {
    Number(u64),
    Text(String),
}

impl Textual {
    fn into_text(self) -> String {
        match self {
            Textual::Number(n) => n.to_string(),
            Textual::Text(s) => s,
        }
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Textual::deserialize(deserializer)?.into_text();
    text.trim()
        .parse::<usize>()
        .map_err(|_| de::Error::custom(format!("expected a non-negative integer, got {text:?}")))
}

fn deserialize_textual<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Textual::deserialize(deserializer)?.into_text())
}

/// Declared share count `n` and threshold `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    #[serde(deserialize_with = "deserialize_count")]
    pub n: usize,
    #[serde(deserialize_with = "deserialize_count")]
    pub k: usize,
}

/// One share as written in a document: `value` is a digit string in `base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedShare {
    #[serde(deserialize_with = "deserialize_textual")]
    pub base: String,
    pub value: String,
}

impl EncodedShare {
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        Self {
            base: base.to_string(),
            value: value.into(),
        }
    }

    /// Decodes `value` in `base`.
    pub fn decode(&self) -> RecoveryResult<BigInt> {
        decode(parse_base(&self.base)?, &self.value)
    }
}

/// A parsed share document, before any share is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    keys: Keys,
    shares: Vec<(String, EncodedShare)>,
}

impl ShareDocument {
    pub fn new(keys: Keys, shares: Vec<(String, EncodedShare)>) -> Self {
        Self { keys, shares }
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// `Json` for malformed JSON, `MissingKeys` if there is no `keys` member.
    pub fn from_json(json: &str) -> RecoveryResult<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn to_json_pretty(&self) -> RecoveryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn keys(&self) -> Keys {
        self.keys
    }

    /// Shares keyed by their textual `x`, in document order.
    pub fn shares(&self) -> &[(String, EncodedShare)] {
        &self.shares
    }

    /// Decodes every share and validates the result as a [`ShareSet`].
    ///
    /// Errors from a single share are wrapped in `RecoveryError::Share` naming its key.
    pub fn into_share_set(self) -> RecoveryResult<ShareSet> {
        let Keys { n, k } = self.keys;
        let shares = self
            .shares
            .into_iter()
            .map(|(key, encoded)| decode_share(&key, &encoded))
            .collect::<RecoveryResult<Vec<_>>>()?;

        ShareSet::new(n, k, shares)
    }
}

fn decode_share(key: &str, encoded: &EncodedShare) -> RecoveryResult<Share> {
    let x = key
        .trim()
        .parse::<BigInt>()
        .map_err(|_| RecoveryError::InvalidX {
            key: key.to_string(),
        })?;
    let y = encoded
        .decode()
        .map_err(|e| RecoveryError::in_share(key, e))?;

    trace!(
        "Decoded share x={} y={} (base {}: {})",
        x,
        y,
        encoded.base,
        encoded.value
    );

    Ok(Share { x, y })
}

impl Serialize for ShareDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shares.len() + 1))?;
        map.serialize_entry(KEYS_FIELD, &self.keys)?;
        for (key, share) in &self.shares {
            map.serialize_entry(key, share)?;
        }
        map.end()
    }
}

/// Wire form of a document; `keys` is checked after parsing so that its absence gets a
/// dedicated error.
struct RawDocument {
    keys: Option<Keys>,
    shares: Vec<(String, EncodedShare)>,
}

impl TryFrom<RawDocument> for ShareDocument {
    type Error = RecoveryError;

    fn try_from(raw: RawDocument) -> RecoveryResult<Self> {
        let keys = raw.keys.ok_or(RecoveryError::MissingKeys)?;
        Ok(ShareDocument::new(keys, raw.shares))
    }
}

struct RawDocumentVisitor;

impl<'de> Visitor<'de> for RawDocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with `keys` and one member per share")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys = None;
        let mut shares = Vec::new();

        while let Some(name) = map.next_key::<String>()? {
            if name == KEYS_FIELD {
                if keys.is_some() {
                    return Err(de::Error::duplicate_field(KEYS_FIELD));
                }
                keys = Some(map.next_value()?);
            } else {
                let share: EncodedShare = map.next_value()?;
                shares.push((name, share));
            }
        }

        Ok(RawDocument { keys, shares })
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawDocumentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKED_EXAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn test_parse_worked_example() {
        let doc = ShareDocument::from_json(WORKED_EXAMPLE).unwrap();
        assert_eq!(doc.keys(), Keys { n: 4, k: 3 });
        let xs: Vec<&str> = doc.shares().iter().map(|(x, _)| x.as_str()).collect();
        assert_eq!(xs, vec!["1", "2", "3", "6"]);

        let set = doc.into_share_set().unwrap();
        assert_eq!(
            set.shares(),
            &[
                Share::new(1, 4),
                Share::new(2, 7),
                Share::new(3, 12),
                Share::new(6, 39)
            ]
        );
    }

    #[test]
    fn test_document_order_is_kept() {
        let json = r#"{
            "10": { "base": "10", "value": "1" },
            "keys": { "n": 3, "k": 2 },
            "2": { "base": "10", "value": "2" },
            "1": { "base": "10", "value": "3" }
        }"#;
        let doc = ShareDocument::from_json(json).unwrap();
        let xs: Vec<&str> = doc.shares().iter().map(|(x, _)| x.as_str()).collect();
        assert_eq!(xs, vec!["10", "2", "1"]);
    }

    #[test]
    fn test_numbers_or_strings() {
        let json = r#"{
            "keys": { "n": "2", "k": 2 },
            "1": { "base": 16, "value": "ff" },
            "2": { "base": "16", "value": "FF" }
        }"#;
        let set = ShareDocument::from_json(json)
            .unwrap()
            .into_share_set()
            .unwrap();
        assert_eq!(set.n(), 2);
        assert_eq!(set.shares()[0].y, BigInt::from(255));
        assert_eq!(set.shares()[1].y, BigInt::from(255));
    }

    #[test]
    fn test_missing_keys() {
        let json = r#"{ "1": { "base": "10", "value": "4" } }"#;
        assert!(matches!(
            ShareDocument::from_json(json),
            Err(RecoveryError::MissingKeys)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ShareDocument::from_json("{ \"keys\": "),
            Err(RecoveryError::Json(_))
        ));
        assert!(matches!(
            ShareDocument::from_json(r#"{ "keys": { "n": -1, "k": 1 } }"#),
            Err(RecoveryError::Json(_))
        ));
        assert!(matches!(
            ShareDocument::from_json(r#"{ "keys": { "n": 1, "k": 1 }, "keys": { "n": 1, "k": 1 } }"#),
            Err(RecoveryError::Json(_))
        ));
    }

    #[test]
    fn test_invalid_x() {
        let json = r#"{
            "keys": { "n": 1, "k": 1 },
            "one": { "base": "10", "value": "4" }
        }"#;
        let err = ShareDocument::from_json(json)
            .unwrap()
            .into_share_set()
            .unwrap_err();
        assert!(matches!(err, RecoveryError::InvalidX { key } if key == "one"));
    }

    #[test]
    fn test_invalid_digit_names_share() {
        let json = r#"{
            "keys": { "n": 2, "k": 1 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "102" }
        }"#;
        let err = ShareDocument::from_json(json)
            .unwrap()
            .into_share_set()
            .unwrap_err();
        match &err {
            RecoveryError::Share { key, .. } => assert_eq!(key, "2"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(
            err.root(),
            RecoveryError::InvalidDigit {
                digit: '2',
                position: 2,
                base: 2
            }
        ));
    }

    #[test]
    fn test_invalid_base_names_share() {
        let json = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "1", "value": "0" }
        }"#;
        let err = ShareDocument::from_json(json)
            .unwrap()
            .into_share_set()
            .unwrap_err();
        assert!(matches!(err.root(), RecoveryError::InvalidBase { base } if base == "1"));
    }

    #[test]
    fn test_equivalent_keys_are_duplicates() {
        let json = r#"{
            "keys": { "n": 2, "k": 1 },
            "1": { "base": "10", "value": "4" },
            "01": { "base": "10", "value": "5" }
        }"#;
        let err = ShareDocument::from_json(json)
            .unwrap()
            .into_share_set()
            .unwrap_err();
        assert!(matches!(err, RecoveryError::DuplicateX { x } if x == BigInt::from(1)));
    }

    #[test]
    fn test_serialize_puts_keys_first() {
        let doc = ShareDocument::new(
            Keys { n: 2, k: 2 },
            vec![
                ("1".to_string(), EncodedShare::new(10, "4")),
                ("2".to_string(), EncodedShare::new(2, "111")),
            ],
        );
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            json,
            r#"{"keys":{"n":2,"k":2},"1":{"base":"10","value":"4"},"2":{"base":"2","value":"111"}}"#
        );
        assert_eq!(ShareDocument::from_json(&json).unwrap(), doc);
    }
}
