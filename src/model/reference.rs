use serde::{Deserialize, Serialize};

/// A condition or advisory from the seeded reference tables.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReferenceItemDto {
    pub id: i32,
    pub category: String,
    pub text: String,
    pub is_default: bool,
}

impl From<&entity::condition::Model> for ReferenceItemDto {
    fn from(model: &entity::condition::Model) -> Self {
        Self {
            id: model.id,
            category: model.category.clone(),
            text: model.text.clone(),
            is_default: model.is_default,
        }
    }
}

impl From<&entity::advisory::Model> for ReferenceItemDto {
    fn from(model: &entity::advisory::Model) -> Self {
        Self {
            id: model.id,
            category: model.category.clone(),
            text: model.text.clone(),
            is_default: model.is_default,
        }
    }
}

/// One address returned by the postcode lookup collaborator.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FoundAddressDto {
    pub uprn: Option<i64>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_town: Option<String>,
    pub address_county: Option<String>,
    pub postcode: String,
}
