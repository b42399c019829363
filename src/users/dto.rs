use serde::{Deserialize, Serialize};

use crate::users::repo_types::{PublicUser, User};

/// Request body for user creation. Fields must be present; their content is
/// stored without validation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response returned after a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub message: String,
    pub user_id: i64,
    pub status: String,
}

/// Message/status envelope used by the create and setup routes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

/// Email lookup result; `user` is present only when the record exists.
#[derive(Debug, Serialize)]
pub struct EmailLookupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub exist: bool,
}

/// Id lookup envelope.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// Failure envelope for the id and profile routes.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

/// Request body for setup completion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSetupRequest {
    pub user_id: i64,
    pub designation: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// Request body for a full profile update.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub designation: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// Response returned after a successful profile update, carrying the row the
/// update wrote.
#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_lookup_omits_user_when_absent() {
        let response = EmailLookupResponse {
            user: None,
            exist: false,
        };
        let json = serde_json::to_string(&response).expect("response should serialize");
        assert_eq!(json, r#"{"exist":false}"#);
    }

    #[test]
    fn create_response_uses_camel_case_user_id() {
        let response = CreateUserResponse {
            message: "User created successfully".into(),
            user_id: 7,
            status: "success".into(),
        };
        let value = serde_json::to_value(response).expect("response should serialize");
        assert_eq!(value["userId"], 7);
        assert_eq!(value["status"], "success");
    }

    #[test]
    fn update_setup_request_accepts_camel_case_user_id() {
        let request: UpdateSetupRequest = serde_json::from_value(json!({
            "userId": 3,
            "designation": "Engineer"
        }))
        .expect("request should deserialize");
        assert_eq!(request.user_id, 3);
        assert_eq!(request.designation.as_deref(), Some("Engineer"));
        assert!(request.company.is_none());
    }
}
