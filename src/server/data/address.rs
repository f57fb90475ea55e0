use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::application::AddressDto;

pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    /// Creates a new instance of [`AddressRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new address
    pub async fn create(&self, address: &AddressDto) -> Result<entity::address::Model, DbErr> {
        let model = entity::address::ActiveModel {
            uprn: ActiveValue::Set(address.uprn),
            address_line_1: ActiveValue::Set(address.address_line_1.clone()),
            address_line_2: ActiveValue::Set(address.address_line_2.clone()),
            address_town: ActiveValue::Set(address.address_town.clone()),
            address_county: ActiveValue::Set(address.address_county.clone()),
            postcode: ActiveValue::Set(address.postcode.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Gets a live address by id
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::address::Model>, DbErr> {
        entity::prelude::Address::find_by_id(id)
            .filter(entity::address::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::server::util::test::{setup_db, test_address};

    use super::AddressRepository;

    /// Expect success when creating a looked-up address
    #[tokio::test]
    async fn create_address_success() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let address_repository = AddressRepository::new(&db);

        let address = address_repository.create(&test_address("AB1 2CD")).await?;

        assert_eq!(address.postcode, "AB1 2CD");
        let found = address_repository.find_one(address.id).await?;
        assert!(found.is_some());

        Ok(())
    }
}
