//! Wire types for the characters endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a character
///
/// The API sends free text. `ALIVE` and `DEAD` are recognised, anything else
/// is kept verbatim in [`CharacterStatus::Other`]. Decoding never fails; a
/// missing or null status on a record becomes an empty `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Other(String),
}

impl CharacterStatus {
    /// The status text as sent by the API
    pub fn as_str(&self) -> &str {
        match self {
            CharacterStatus::Alive => "ALIVE",
            CharacterStatus::Dead => "DEAD",
            CharacterStatus::Other(raw) => raw,
        }
    }
}

impl Default for CharacterStatus {
    fn default() -> Self {
        CharacterStatus::Other(String::new())
    }
}

impl From<String> for CharacterStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ALIVE" => CharacterStatus::Alive,
            "DEAD" => CharacterStatus::Dead,
            _ => CharacterStatus::Other(raw),
        }
    }
}

impl From<&str> for CharacterStatus {
    fn from(raw: &str) -> Self {
        CharacterStatus::from(raw.to_string())
    }
}

impl From<CharacterStatus> for String {
    fn from(status: CharacterStatus) -> Self {
        match status {
            CharacterStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One character record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_unknown")]
    pub status: CharacterStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub species: String,
    /// Creation timestamp, kept as sent (usually RFC 3339)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    /// Image URL, possibly empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
}

/// One page of the characters collection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharactersPage {
    pub items: Vec<Character>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<CharacterStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CharacterStatus>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_text() {
        assert_eq!(CharacterStatus::from("ALIVE"), CharacterStatus::Alive);
        assert_eq!(CharacterStatus::from("DEAD"), CharacterStatus::Dead);
        assert_eq!(
            CharacterStatus::from("UNKNOWN"),
            CharacterStatus::Other("UNKNOWN".to_string())
        );
        // Matching is exact, like the API's own enum
        assert_eq!(
            CharacterStatus::from("alive"),
            CharacterStatus::Other("alive".to_string())
        );
    }

    #[test]
    fn test_status_keeps_raw_text() {
        assert_eq!(CharacterStatus::from("").as_str(), "");
        assert_eq!(CharacterStatus::from("UNKNOWN").to_string(), "UNKNOWN");
        assert_eq!(String::from(CharacterStatus::Dead), "DEAD");
    }

    #[test]
    fn test_character_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "Philip J. Fry",
            "gender": "MALE",
            "status": "ALIVE",
            "species": "HUMAN",
            "createdAt": "2023-12-31T14:01:17.617828Z",
            "image": "https://futuramaapi.com/static/img/human/philip-j-fry.webp"
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.name, "Philip J. Fry");
        assert_eq!(c.status, CharacterStatus::Alive);
        assert_eq!(c.created_at, "2023-12-31T14:01:17.617828Z");
    }

    #[test]
    fn test_character_null_and_missing_fields() {
        let json = r#"{"id": 7, "name": "Hypnotoad", "status": "UNKNOWN", "image": null}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.image, "");
        assert_eq!(c.gender, "");
        assert_eq!(c.species, "");
        assert_eq!(c.status, CharacterStatus::Other("UNKNOWN".to_string()));
    }

    #[test]
    fn test_null_or_missing_status_keeps_the_page() {
        let json = r#"{"items": [
            {"id": 1, "name": "Philip J. Fry", "status": "ALIVE"},
            {"id": 2, "name": "Nibbler", "status": null},
            {"id": 3, "name": "Scruffy"}
        ]}"#;
        let page: CharactersPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].status, CharacterStatus::Alive);
        assert_eq!(page.items[1].status, CharacterStatus::Other(String::new()));
        assert_eq!(page.items[2].status, CharacterStatus::default());
    }

    #[test]
    fn test_character_requires_name() {
        let json = r#"{"id": 7, "status": "ALIVE"}"#;
        assert!(serde_json::from_str::<Character>(json).is_err());
    }

    #[test]
    fn test_page_ignores_extra_fields() {
        let json = r#"{"items": [], "total": 0, "page": 1, "size": 50, "pages": 0, "links": {}}"#;
        let page: CharactersPage = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.size, Some(50));
    }
}
