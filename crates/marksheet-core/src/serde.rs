//! Browser forms often submit numbers as strings (`"3"`, `"72.5"`). The
//! lenient helpers accept either a JSON number or a numeric string.
//!
//! Text fields are trimmed while deserializing, so length rules run on the
//! value that is stored.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

fn to_f64<E: Error>(raw: NumberOrString) -> Result<f64, E> {
    let value = match raw {
        NumberOrString::Int(i) => i as f64,
        NumberOrString::Float(f) => f,
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("`{}` is not a number", s)))?,
    };

    if !value.is_finite() {
        return Err(E::custom("number must be finite"));
    }
    Ok(value)
}

fn to_i32<E: Error>(raw: NumberOrString) -> Result<i32, E> {
    match raw {
        NumberOrString::Int(i) => i32::try_from(i).map_err(|_| E::custom("integer out of range")),
        NumberOrString::Float(_) => Err(E::custom("expected an integer")),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| E::custom(format!("`{}` is not an integer", s))),
    }
}

pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    to_f64(NumberOrString::deserialize(deserializer)?)
}

pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    to_i32(NumberOrString::deserialize(deserializer)?)
}

/// Use together with `#[serde(default)]`.
pub fn deserialize_optional_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(to_i32)
        .transpose()
}

pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Use together with `#[serde(default)]`.
pub fn deserialize_optional_trimmed_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Form {
        #[serde(deserialize_with = "deserialize_lenient_f64")]
        value: f64,
        #[serde(deserialize_with = "deserialize_lenient_i32")]
        credits: i32,
        #[serde(default, deserialize_with = "deserialize_optional_lenient_i32")]
        extra: Option<i32>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let form: Form = serde_json::from_str(r#"{"value": 72.5, "credits": 4}"#).unwrap();
        assert_eq!(form.value, 72.5);
        assert_eq!(form.credits, 4);
        assert_eq!(form.extra, None);

        let form: Form =
            serde_json::from_str(r#"{"value": "70", "credits": " 3 ", "extra": "9"}"#).unwrap();
        assert_eq!(form.value, 70.0);
        assert_eq!(form.credits, 3);
        assert_eq!(form.extra, Some(9));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_str::<Form>(r#"{"value": "lots", "credits": 3}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"value": 1, "credits": "three"}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"value": 1, "credits": 2.5}"#).is_err());
        assert!(serde_json::from_str::<Form>(r#"{"value": "NaN", "credits": 1}"#).is_err());
    }

    #[derive(Deserialize)]
    struct Named {
        #[serde(deserialize_with = "deserialize_trimmed_string")]
        name: String,
        #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
        code: Option<String>,
    }

    #[test]
    fn test_text_is_trimmed() {
        let named: Named = serde_json::from_str(r#"{"name": "  Ada \t", "code": " CS301 "}"#).unwrap();
        assert_eq!(named.name, "Ada");
        assert_eq!(named.code.as_deref(), Some("CS301"));

        let blank: Named = serde_json::from_str(r#"{"name": "   ", "code": "  "}"#).unwrap();
        assert_eq!(blank.name, "");
        assert_eq!(blank.code.as_deref(), Some(""));

        let absent: Named = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(absent.code.is_none());
    }
}
