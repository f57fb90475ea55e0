use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::application::ContactDto;

pub struct ContactRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContactRepository<'a, C> {
    /// Creates a new instance of [`ContactRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new contact
    pub async fn create(&self, contact: &ContactDto) -> Result<entity::contact::Model, DbErr> {
        let model = entity::contact::ActiveModel {
            name: ActiveValue::Set(contact.name.clone()),
            organisation: ActiveValue::Set(contact.organisation.clone()),
            email_address: ActiveValue::Set(contact.email_address.clone()),
            phone_number: ActiveValue::Set(contact.phone_number.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Gets a live contact by id
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::contact::Model>, DbErr> {
        entity::prelude::Contact::find_by_id(id)
            .filter(entity::contact::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Replaces a contact's details; returns None if the contact does not exist
    pub async fn update(
        &self,
        id: i32,
        contact: &ContactDto,
    ) -> Result<Option<entity::contact::Model>, DbErr> {
        let Some(existing) = self.find_one(id).await? else {
            return Ok(None);
        };

        let mut model: entity::contact::ActiveModel = existing.into();
        model.name = ActiveValue::Set(contact.name.clone());
        model.organisation = ActiveValue::Set(contact.organisation.clone());
        model.email_address = ActiveValue::Set(contact.email_address.clone());
        model.phone_number = ActiveValue::Set(contact.phone_number.clone());

        Ok(Some(model.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

    use crate::{
        model::application::ContactDto,
        server::util::test::{setup_db, test_contact},
    };

    use super::ContactRepository;

    /// Expect success when creating a new contact
    #[tokio::test]
    async fn create_contact_success() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let contact_repository = ContactRepository::new(&db);

        let contact = contact_repository.create(&test_contact("holder@example.com")).await?;

        assert_eq!(contact.email_address, "holder@example.com");

        Ok(())
    }

    /// Expect soft-deleted contacts to be hidden from find_one
    #[tokio::test]
    async fn find_one_skips_soft_deleted() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let contact_repository = ContactRepository::new(&db);

        let contact = contact_repository.create(&test_contact("holder@example.com")).await?;

        let mut model: entity::contact::ActiveModel = contact.clone().into();
        model.deleted_at = ActiveValue::Set(Some(chrono::Utc::now().naive_utc()));
        model.update(&db).await?;

        let found = contact_repository.find_one(contact.id).await?;

        assert!(found.is_none());

        Ok(())
    }

    /// Expect update to replace details in place
    #[tokio::test]
    async fn update_contact_success() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let contact_repository = ContactRepository::new(&db);

        let contact = contact_repository.create(&test_contact("old@example.com")).await?;

        let updated = contact_repository
            .update(
                contact.id,
                &ContactDto {
                    name: "New Name".to_string(),
                    organisation: None,
                    email_address: "new@example.com".to_string(),
                    phone_number: None,
                },
            )
            .await?
            .unwrap();

        assert_eq!(updated.id, contact.id);
        assert_eq!(updated.email_address, "new@example.com");

        Ok(())
    }
}
