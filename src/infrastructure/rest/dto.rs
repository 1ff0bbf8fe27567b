//! Wire structures for the remote user API.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{UserDraft, UserId, UserRecord};

/// User resource as returned by the API.
///
/// The demo API ships plenty of extra fields (address, company, ...);
/// everything beyond id, name, and email is ignored. The birth date only
/// appears on echoes of our own writes.
#[derive(Debug, Deserialize)]
pub struct UserDto {
    /// Server-assigned id.
    pub id: u64,
    /// User name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Birth date, only present on write echoes.
    #[serde(default, rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
}

impl From<UserDto> for UserRecord {
    fn from(dto: UserDto) -> Self {
        Self::new(
            dto.id,
            dto.name,
            dto.email,
            dto.date_of_birth.unwrap_or_default(),
        )
    }
}

/// Body for `POST /users`.
#[derive(Debug, Serialize)]
pub struct CreateUserBody<'a> {
    /// User name.
    pub name: &'a str,
    /// Email address.
    pub email: &'a str,
    /// Birth date.
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: &'a str,
}

impl<'a> CreateUserBody<'a> {
    /// Builds the body from a draft.
    #[must_use]
    pub fn from_draft(draft: &'a UserDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            date_of_birth: &draft.date_of_birth,
        }
    }
}

/// Body for `PUT /users/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateUserBody<'a> {
    /// Id of the record being updated.
    pub id: u64,
    /// User name.
    pub name: &'a str,
    /// Email address.
    pub email: &'a str,
    /// Birth date.
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: &'a str,
}

impl<'a> UpdateUserBody<'a> {
    /// Builds the body from an id and a draft.
    #[must_use]
    pub fn from_draft(id: UserId, draft: &'a UserDraft) -> Self {
        Self {
            id: id.as_u64(),
            name: &draft.name,
            email: &draft.email,
            date_of_birth: &draft.date_of_birth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"street": "Kulas Light", "city": "Gwenborough"},
            "phone": "1-770-736-8031",
            "company": {"name": "Romaguera-Crona"}
        }"#;

        let dto: UserDto = serde_json::from_str(json).unwrap();
        let record = UserRecord::from(dto);
        assert_eq!(record.id(), UserId(1));
        assert_eq!(record.name(), "Leanne Graham");
        assert_eq!(record.email(), "Sincere@april.biz");
        assert_eq!(record.date_of_birth(), "");
    }

    #[test]
    fn test_deserialize_write_echo() {
        let json = r#"{"id": 11, "name": "Ada", "email": "ada@example.com", "dateOfBirth": "1990-12-10"}"#;
        let record = UserRecord::from(serde_json::from_str::<UserDto>(json).unwrap());
        assert_eq!(record.id(), UserId(11));
        assert_eq!(record.date_of_birth(), "1990-12-10");
    }

    #[test]
    fn test_create_body_uses_camel_case() {
        let draft = UserDraft::new("Ada", "ada@example.com", "1990-12-10");
        let body = serde_json::to_value(CreateUserBody::from_draft(&draft)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "dateOfBirth": "1990-12-10"
            })
        );
    }

    #[test]
    fn test_update_body_carries_id() {
        let draft = UserDraft::new("Ada", "ada@example.com", "1990-12-10");
        let body = serde_json::to_value(UpdateUserBody::from_draft(UserId(5), &draft)).unwrap();
        assert_eq!(body["id"], 5);
        assert_eq!(body["dateOfBirth"], "1990-12-10");
    }
}
