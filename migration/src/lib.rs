pub use sea_orm_migration::prelude::*;

mod m20260501_000001_condition;
mod m20260501_000002_advisory;
mod m20260501_000003_contact;
mod m20260501_000004_address;
mod m20260501_000005_activity;
mod m20260501_000006_species_set;
mod m20260501_000007_issue;
mod m20260501_000008_measure;
mod m20260501_000009_application;
mod m20260501_000010_assessment;
mod m20260501_000011_licence;
mod m20260501_000012_amendment;
mod m20260501_000013_returns;
mod m20260501_000014_case_records;
mod m20260501_000015_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260501_000001_condition::Migration),
            Box::new(m20260501_000002_advisory::Migration),
            Box::new(m20260501_000003_contact::Migration),
            Box::new(m20260501_000004_address::Migration),
            Box::new(m20260501_000005_activity::Migration),
            Box::new(m20260501_000006_species_set::Migration),
            Box::new(m20260501_000007_issue::Migration),
            Box::new(m20260501_000008_measure::Migration),
            Box::new(m20260501_000009_application::Migration),
            Box::new(m20260501_000010_assessment::Migration),
            Box::new(m20260501_000011_licence::Migration),
            Box::new(m20260501_000012_amendment::Migration),
            Box::new(m20260501_000013_returns::Migration),
            Box::new(m20260501_000014_case_records::Migration),
            Box::new(m20260501_000015_seed_reference_data::Migration),
        ]
    }
}
