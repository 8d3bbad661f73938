use serde::{Deserialize, Serialize};

use crate::fakers::Faker;
use crate::models::User;

/// Body of `POST /api/v1/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone_number: String,
}

impl CreateUserRequest {
    /// A request filled entirely with generated data
    pub fn fake(faker: &dyn Faker) -> Self {
        Self {
            email: faker.email(),
            last_name: faker.last_name(),
            first_name: faker.first_name(),
            middle_name: faker.middle_name(),
            phone_number: faker.phone_number(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakers::RandomFaker;

    #[test]
    fn test_create_user_request_wire_names() {
        let request = CreateUserRequest::fake(&RandomFaker::seeded(1));
        let json = serde_json::to_value(&request).unwrap();

        for key in ["email", "lastName", "firstName", "middleName", "phoneNumber"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json.get("last_name").is_none());
    }
}
