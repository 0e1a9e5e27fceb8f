//! JSON int64 lists that accept numbers or decimal strings.
//!
//! Protobuf JSON clients may quote 64-bit integers; both forms decode to
//! the same value. Output is always plain numbers.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Int64 {
    Number(i64),
    Text(String),
}

impl Int64 {
    fn value<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            Int64::Number(n) => Ok(n),
            Int64::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid int64 value: {s:?}"))),
        }
    }
}

pub fn serialize<S>(values: &[i64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    values.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Vec<Int64>>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    raw.into_iter()
        .map(|v| v.value::<D::Error>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Ids {
        #[serde(with = "super", default)]
        ids: Vec<i64>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let ids: Ids = serde_json::from_str(r#"{"ids":[1,"2"," 3","-9223372036854775808"]}"#).unwrap();
        assert_eq!(ids.ids, vec![1, 2, 3, i64::MIN]);
    }

    #[test]
    fn test_null_is_empty() {
        let ids: Ids = serde_json::from_str(r#"{"ids":null}"#).unwrap();
        assert!(ids.ids.is_empty());
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        assert!(serde_json::from_str::<Ids>(r#"{"ids":["four"]}"#).is_err());
    }

    #[test]
    fn test_serializes_as_numbers() {
        let json = serde_json::to_string(&Ids { ids: vec![4, 5] }).unwrap();
        assert_eq!(json, r#"{"ids":[4,5]}"#);
    }
}
