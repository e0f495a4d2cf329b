use serde::{Deserialize, Serialize};

/// A database user of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// The authentication database, usually `admin`
    pub database_name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_auth_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x509_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_iam_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<Scope>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

/// A role granted to a database user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

/// Restricts a database user to a cluster or data lake.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_user_serialize() {
        let user = DatabaseUser {
            username: "u".to_string(),
            database_name: "admin".to_string(),
            roles: vec![Role {
                role_name: "readWrite".to_string(),
                database_name: Some("app".to_string()),
                collection_name: None,
            }],
            scopes: vec![Scope {
                name: "Cluster0".to_string(),
                kind: "CLUSTER".to_string(),
            }],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({
                "databaseName": "admin",
                "username": "u",
                "roles": [{"roleName": "readWrite", "databaseName": "app"}],
                "scopes": [{"name": "Cluster0", "type": "CLUSTER"}]
            })
        );
    }
}
