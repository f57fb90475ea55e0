use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::application::AssessmentDto;

pub struct AssessmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssessmentRepository<'a, C> {
    /// Creates a new instance of [`AssessmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the 1:1 assessment record for an application
    pub async fn create(
        &self,
        application_id: i32,
        assessment: &AssessmentDto,
    ) -> Result<entity::assessment::Model, DbErr> {
        let model = entity::assessment::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            test_one_assessment: ActiveValue::Set(assessment.test_one_assessment.clone()),
            test_one_decision: ActiveValue::Set(assessment.test_one_decision),
            test_two_assessment: ActiveValue::Set(assessment.test_two_assessment.clone()),
            test_two_decision: ActiveValue::Set(assessment.test_two_decision),
            test_three_assessment: ActiveValue::Set(assessment.test_three_assessment.clone()),
            test_three_decision: ActiveValue::Set(assessment.test_three_decision),
            decision: ActiveValue::Set(assessment.decision),
            refusal_reason: ActiveValue::Set(assessment.refusal_reason.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            deleted_at: ActiveValue::Set(None),
        };

        model.insert(self.db).await
    }

    /// Updates an existing assessment in place; returns None if absent
    pub async fn update(
        &self,
        application_id: i32,
        assessment: &AssessmentDto,
    ) -> Result<Option<entity::assessment::Model>, DbErr> {
        let Some(existing) = self.find_one(application_id).await? else {
            return Ok(None);
        };

        let mut model: entity::assessment::ActiveModel = existing.into();
        model.test_one_assessment = ActiveValue::Set(assessment.test_one_assessment.clone());
        model.test_one_decision = ActiveValue::Set(assessment.test_one_decision);
        model.test_two_assessment = ActiveValue::Set(assessment.test_two_assessment.clone());
        model.test_two_decision = ActiveValue::Set(assessment.test_two_decision);
        model.test_three_assessment = ActiveValue::Set(assessment.test_three_assessment.clone());
        model.test_three_decision = ActiveValue::Set(assessment.test_three_decision);
        model.decision = ActiveValue::Set(assessment.decision);
        model.refusal_reason = ActiveValue::Set(assessment.refusal_reason.clone());

        Ok(Some(model.update(self.db).await?))
    }

    /// Gets an application's assessment
    pub async fn find_one(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::assessment::Model>, DbErr> {
        entity::prelude::Assessment::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// Checks whether the application has been assessed
    pub async fn exists(&self, application_id: i32) -> Result<bool, DbErr> {
        Ok(self.find_one(application_id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::{
        model::application::AssessmentDto,
        server::util::test::{insert_application, setup_db},
    };

    use super::AssessmentRepository;

    /// Expect create then update to keep the 1:1 keying intact
    #[tokio::test]
    async fn create_and_update_assessment() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let application = insert_application(&db, 222222, "holder@example.com").await?;
        let assessment_repository = AssessmentRepository::new(&db);

        let assessment = assessment_repository
            .create(
                application.id,
                &AssessmentDto {
                    test_one_assessment: Some("Public health risk evidenced".to_string()),
                    test_one_decision: Some(true),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(assessment.application_id, application.id);
        assert!(assessment.decision.is_none());

        let updated = assessment_repository
            .update(
                application.id,
                &AssessmentDto {
                    test_one_assessment: Some("Public health risk evidenced".to_string()),
                    test_one_decision: Some(true),
                    decision: Some(true),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();

        assert_eq!(updated.decision, Some(true));
        assert!(assessment_repository.exists(application.id).await?);

        Ok(())
    }
}
