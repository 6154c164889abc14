use std::{fmt, str::FromStr};

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Stable external identifier of a catalog entity.
///
/// Internally a UUID; on the wire 26 characters of unpadded base32,
/// lowercase on output and case-insensitive on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityIdent(Uuid);

impl EntityIdent {
    pub fn random() -> Self {
        EntityIdent(Uuid::new_v4())
    }

    pub fn from_uuid(u: Uuid) -> Self {
        EntityIdent(u)
    }

    pub fn to_uuid(self) -> Uuid {
        self.0
    }
}

impl FromStr for EntityIdent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.len() != 26 {
            return Err(Error::InvalidEntityId(s.to_string()));
        }
        let mut raw = [0u8; 16];
        // ASCII-only uppercasing keeps the byte length at 26; non-ASCII
        // bytes then fail the decode below
        BASE32_NOPAD
            .decode_mut(s.to_ascii_uppercase().as_bytes(), &mut raw)
            .map_err(|_| Error::InvalidEntityId(s.to_string()))?;
        Ok(EntityIdent(Uuid::from_bytes(raw)))
    }
}

impl fmt::Display for EntityIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BASE32_NOPAD.encode(self.0.as_bytes()).to_lowercase())
    }
}

impl Serialize for EntityIdent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityIdent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::Arbitrary;
    use quickcheck_macros::quickcheck;

    use super::*;

    impl Arbitrary for EntityIdent {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let bytes: [u8; 16] = std::array::from_fn(|_| u8::arbitrary(g));
            EntityIdent(Uuid::from_bytes(bytes))
        }
    }

    #[quickcheck]
    fn test_ident_string_round_trip(ident: EntityIdent) {
        let parsed: EntityIdent = ident.to_string().parse().unwrap();
        assert_eq!(parsed, ident);
    }

    #[test]
    fn test_nil_uuid_encoding() {
        let ident = EntityIdent::from_uuid(Uuid::nil());
        assert_eq!(ident.to_string(), "aaaaaaaaaaaaaaaaaaaaaaaaaa");
        let parsed: EntityIdent = "aaaaaaaaaaaaaaaaaaaaaaaaaa".parse().unwrap();
        assert_eq!(parsed, ident);
    }

    #[test]
    fn test_input_is_case_insensitive() {
        let lower: EntityIdent = "aaaaaaaaaaaaaaaaaaaaaaaaaa".parse().unwrap();
        let upper: EntityIdent = "AAAAAAAAAAAAAAAAAAAAAAAAAA".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!("aaaa".parse::<EntityIdent>().is_err());
        assert!("".parse::<EntityIdent>().is_err());
    }

    #[test]
    fn test_rejects_invalid_characters() {
        // '!' and '1' are outside the base32 alphabet
        assert!("!aaaaaaaaaaaaaaaaaaaaaaaaa".parse::<EntityIdent>().is_err());
        assert!("1aaaaaaaaaaaaaaaaaaaaaaaaa".parse::<EntityIdent>().is_err());
    }

    #[test]
    fn test_rejects_non_ascii_input() {
        // 13 dotless-i characters are 26 bytes but shrink under Unicode
        // uppercasing; must error, not panic
        let dotless = "\u{131}".repeat(13);
        assert_eq!(dotless.len(), 26);
        assert!(dotless.parse::<EntityIdent>().is_err());

        let mixed = format!("\u{e9}{}", "a".repeat(24));
        assert_eq!(mixed.len(), 26);
        assert!(mixed.parse::<EntityIdent>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let ident = EntityIdent::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&ident).unwrap();
        assert_eq!(json, "\"aaaaaaaaaaaaaaaaaaaaaaaaaa\"");
        let back: EntityIdent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ident);
    }
}
