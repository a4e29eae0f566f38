use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::DataSourceId;

/// Validated, normalized payload handed to the submission handler.
///
/// `password: None` means "keep the stored password" and is only produced in
/// edit mode. It is omitted from the serialized form rather than sent as an
/// empty string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedshiftDataSourceInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DataSourceId>,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub read_only: bool,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl RedshiftDataSourceInput {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn keeps_existing_password(&self) -> bool {
        self.password.is_none()
    }
}

impl fmt::Debug for RedshiftDataSourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedshiftDataSourceInput")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .field("read_only", &self.read_only)
            .field("notes", &self.notes)
            .field("additional_info", &self.additional_info)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_input(password: Option<&str>) -> RedshiftDataSourceInput {
        RedshiftDataSourceInput {
            id: None,
            name: "Prod".to_string(),
            host: "h".to_string(),
            port: 5439,
            database: "d".to_string(),
            username: "u".to_string(),
            password: password.map(str::to_string),
            read_only: true,
            notes: String::new(),
            additional_info: Some("ctx".to_string()),
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn create_payload_uses_camel_case_contract() {
            let json = serde_json::to_string_pretty(&make_input(Some("secret"))).unwrap();

            insta::assert_snapshot!(json, @r#"
            {
              "name": "Prod",
              "host": "h",
              "port": 5439,
              "database": "d",
              "username": "u",
              "password": "secret",
              "readOnly": true,
              "notes": "",
              "additionalInfo": "ctx"
            }
            "#);
        }

        #[test]
        fn kept_password_is_omitted_not_empty() {
            let mut input = make_input(None);
            input.id = Some(DataSourceId::from_string("ds-1"));

            let json = serde_json::to_string(&input).unwrap();

            assert!(!json.contains("password"));
            assert!(json.contains("\"id\":\"ds-1\""));
        }

        #[test]
        fn missing_password_deserializes_as_keep() {
            let json = r#"{"id":"ds-1","name":"n","host":"h","port":1,"database":"d",
                "username":"u","readOnly":false,"notes":""}"#;

            let input: RedshiftDataSourceInput = serde_json::from_str(json).unwrap();

            assert!(input.keeps_existing_password());
            assert!(input.is_edit());
        }
    }

    mod debug {
        use super::*;

        #[test]
        fn masks_password() {
            let rendered = format!("{:?}", make_input(Some("secret")));
            assert!(rendered.contains("****"));
            assert!(!rendered.contains("secret"));
        }
    }
}
