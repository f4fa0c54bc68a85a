use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};
use serde_json::Value;

use super::errors::PuppyError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuppyId(String);

impl PuppyId {
    pub fn new(id: impl Into<String>) -> Self {
        PuppyId(id.into())
    }

    pub fn generate() -> Self {
        PuppyId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PuppyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ages arrive either as a JSON number (`3`, `0.5`) or as free text
/// ("8 weeks"). Both are shown exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Age {
    Number(serde_json::Number),
    Text(String),
}

impl Age {
    /// Reads an age typed by a user. Only text that prints back unchanged as
    /// a number becomes `Number`, so "03" or "1e3" stay as typed.
    pub fn parse(text: &str) -> Self {
        match text.parse::<serde_json::Number>() {
            Ok(number) if number.to_string() == text => Age::Number(number),
            _ => Age::Text(text.to_string()),
        }
    }
}

impl Default for Age {
    fn default() -> Self {
        Age::Text(String::new())
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Number(number) => write!(f, "{number}"),
            Age::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Age::Number(years.into())
    }
}

impl From<&str> for Age {
    fn from(text: &str) -> Self {
        Age::Text(text.to_string())
    }
}

// Null becomes blank; booleans, arrays and objects are kept as their JSON text.
impl<'de> Deserialize<'de> for Age {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => Age::Number(number),
            Value::String(text) => Age::Text(text),
            Value::Null => Age::default(),
            other => Age::Text(other.to_string()),
        })
    }
}

fn deserialize_text_or_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StoredPuppy")]
pub struct Puppy {
    pub id: PuppyId,
    pub name: String,
    pub breed: String,
    pub age: Age,
}

impl Puppy {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        age: impl Into<Age>,
    ) -> Self {
        Puppy { id: PuppyId::new(id), name: name.into(), breed: breed.into(), age: age.into() }
    }
}

/// On-disk shape of a puppy. Records written by the document store use `_id`;
/// when both keys are present, a non-empty `id` wins. Missing and null fields
/// come through as blanks for the card to show.
#[derive(Deserialize, Default)]
#[serde(default)]
struct StoredPuppy {
    #[serde(deserialize_with = "deserialize_text_or_blank")]
    id: String,
    #[serde(rename = "_id", deserialize_with = "deserialize_text_or_blank")]
    document_id: String,
    #[serde(deserialize_with = "deserialize_text_or_blank")]
    name: String,
    #[serde(deserialize_with = "deserialize_text_or_blank")]
    breed: String,
    age: Age,
}

impl From<StoredPuppy> for Puppy {
    fn from(stored: StoredPuppy) -> Self {
        let id = if stored.id.is_empty() { stored.document_id } else { stored.id };
        Puppy { id: PuppyId::new(id), name: stored.name, breed: stored.breed, age: stored.age }
    }
}

/// Form-side representation of a puppy: every field is raw text until
/// `validate` turns it into something the store accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PuppyDraft {
    pub name: String,
    pub breed: String,
    pub age: String,
}

impl PuppyDraft {
    pub fn from_puppy(puppy: &Puppy) -> Self {
        PuppyDraft {
            name: puppy.name.clone(),
            breed: puppy.breed.clone(),
            age: puppy.age.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ValidDraft, PuppyError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PuppyError::validation("name", "must not be empty"));
        }

        let breed = self.breed.trim();
        if breed.is_empty() {
            return Err(PuppyError::validation("breed", "must not be empty"));
        }

        let age = self.age.trim();
        if age.is_empty() {
            return Err(PuppyError::validation("age", "must not be empty"));
        }
        Ok(ValidDraft { name: name.to_string(), breed: breed.to_string(), age: Age::parse(age) })
    }
}

/// A draft that passed validation. Only the store turns it into a `Puppy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub breed: String,
    pub age: Age,
}

impl ValidDraft {
    pub fn into_puppy(self, id: PuppyId) -> Puppy {
        Puppy { id, name: self.name, breed: self.breed, age: self.age }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_age_displays_verbatim() {
        assert_eq!(Age::from(3u32).to_string(), "3");
        assert_eq!(Age::from("8 weeks").to_string(), "8 weeks");
        assert_eq!(Age::default().to_string(), "");
    }

    #[test]
    fn test_deserialize_document_store_shape() {
        let json = r#"{"_id":"p1","name":"Rex","breed":"Labrador","age":3}"#;
        let puppy: Puppy = serde_json::from_str(json).unwrap();
        assert_eq!(puppy, Puppy::new("p1", "Rex", "Labrador", 3u32));

        let json = r#"{"id":"p2","name":"Bo","breed":"Pug","age":"10 weeks"}"#;
        let puppy: Puppy = serde_json::from_str(json).unwrap();
        assert_eq!(puppy.age, Age::Text("10 weeks".to_string()));
    }

    #[test]
    fn test_missing_fields_degrade_to_empty() {
        let puppy: Puppy = serde_json::from_str(r#"{"_id":"p3"}"#).unwrap();
        assert_eq!(puppy.id.as_str(), "p3");
        assert_eq!(puppy.name, "");
        assert_eq!(puppy.breed, "");
        assert_eq!(puppy.age.to_string(), "");
    }

    #[test]
    fn test_serialize_uses_plain_id() {
        let json = serde_json::to_value(Puppy::new("p1", "Rex", "Labrador", 3u32)).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["age"], 3);
    }

    #[test]
    fn test_draft_validation() {
        let draft = PuppyDraft {
            name: "  Rex ".to_string(),
            breed: "Labrador".to_string(),
            age: " 3 ".to_string(),
        };
        let valid = draft.validate().unwrap();
        assert_eq!(valid.name, "Rex");
        assert_eq!(valid.age, Age::from(3u32));

        let draft = PuppyDraft { age: "ten weeks".to_string(), ..draft };
        assert_eq!(draft.validate().unwrap().age, Age::Text("ten weeks".to_string()));

        let draft = PuppyDraft { name: "   ".to_string(), ..draft };
        match draft.validate() {
            Err(PuppyError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected name validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_draft_round_trips_existing_puppy() {
        let puppy = Puppy::new("p1", "Rex", "Labrador", 3u32);
        let draft = PuppyDraft::from_puppy(&puppy);
        assert_eq!(draft.age, "3");
        assert_eq!(draft.validate().unwrap().into_puppy(puppy.id.clone()), puppy);
    }

    #[test]
    fn test_fractional_and_negative_ages_load() {
        let json = r#"[
            {"_id":"a","name":"Pip","breed":"Corgi","age":3},
            {"_id":"b","name":"Dot","breed":"Beagle","age":2.5},
            {"_id":"c","name":"Odd","breed":"Mutt","age":-1}
        ]"#;
        let puppies: Vec<Puppy> = serde_json::from_str(json).unwrap();
        let ages: Vec<String> = puppies.iter().map(|p| p.age.to_string()).collect();
        assert_eq!(ages, vec!["3", "2.5", "-1"]);
    }

    #[test]
    fn test_null_fields_show_as_blanks() {
        let json = r#"{"_id":"p","name":null,"breed":null,"age":null}"#;
        let puppy: Puppy = serde_json::from_str(json).unwrap();
        assert_eq!(puppy, Puppy::new("p", "", "", ""));
    }

    #[test]
    fn test_non_text_fields_keep_their_json_text() {
        let json = r#"{"_id":"p","name":7,"breed":"Pug","age":true}"#;
        let puppy: Puppy = serde_json::from_str(json).unwrap();
        assert_eq!(puppy.name, "7");
        assert_eq!(puppy.age, Age::Text("true".to_string()));
    }

    #[test]
    fn test_both_id_keys_prefer_plain_id() {
        let json = r#"{"id":"new","_id":"old","name":"Rex"}"#;
        let puppy: Puppy = serde_json::from_str(json).unwrap();
        assert_eq!(puppy.id.as_str(), "new");

        let json = r#"{"id":"","_id":"old","name":"Rex"}"#;
        let puppy: Puppy = serde_json::from_str(json).unwrap();
        assert_eq!(puppy.id.as_str(), "old");
    }

    #[test]
    fn test_age_parse_keeps_non_canonical_text() {
        assert_eq!(Age::parse("3"), Age::from(3u32));
        assert_eq!(Age::parse("2.5").to_string(), "2.5");
        assert!(matches!(Age::parse("2.5"), Age::Number(_)));
        assert_eq!(Age::parse("03"), Age::Text("03".to_string()));
        assert_eq!(Age::parse("1e3"), Age::Text("1e3".to_string()));
        assert_eq!(Age::parse("8 weeks"), Age::Text("8 weeks".to_string()));
    }
}
