use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::application::IssueDto;

pub struct IssueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IssueRepository<'a, C> {
    /// Creates a new instance of [`IssueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new issue record
    pub async fn create(&self, issue: &IssueDto) -> Result<entity::issue::Model, DbErr> {
        let model = entity::issue::ActiveModel {
            aggression: ActiveValue::Set(issue.aggression),
            dive_bombing: ActiveValue::Set(issue.dive_bombing),
            noise: ActiveValue::Set(issue.noise),
            droppings: ActiveValue::Set(issue.droppings),
            nesting_material: ActiveValue::Set(issue.nesting_material),
            at_height_aggression: ActiveValue::Set(issue.at_height_aggression),
            other: ActiveValue::Set(issue.other),
            issue_details: ActiveValue::Set(issue.issue_details.clone()),
            site_used_for: ActiveValue::Set(issue.site_used_for.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Gets an issue record by id
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::issue::Model>, DbErr> {
        entity::prelude::Issue::find_by_id(id).one(self.db).await
    }
}
