use sea_orm_migration::prelude::*;

use crate::{m20260501_000001_condition::Condition, m20260501_000002_advisory::Advisory};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `(category, text, is_default, order_no)` rows for the condition table.
const CONDITIONS: &[(&str, &str, bool, i32)] = &[
    (
        "General",
        "The licence holder must comply with all conditions of this licence. Failure to do so may constitute an offence.",
        true,
        1,
    ),
    (
        "General",
        "This licence may only be used at the site specified on the licence.",
        true,
        2,
    ),
    (
        "Recording and reporting",
        "A record must be kept of all activities carried out under this licence, including dates and numbers of birds, nests and eggs affected.",
        true,
        3,
    ),
    (
        "Recording and reporting",
        "A return must be submitted to the licensing authority by the date specified on the licence, even if no action was taken.",
        true,
        4,
    ),
    (
        "Methods",
        "Only the species and activities specified on the licence are permitted.",
        true,
        5,
    ),
    (
        "Methods",
        "Any killing of birds must be carried out by a competent person using a humane method.",
        false,
        6,
    ),
    (
        "Methods",
        "Chicks taken to a rescue centre must be transported without avoidable delay and in a manner that avoids injury or distress.",
        false,
        7,
    ),
    (
        "Health and safety",
        "Work at height must only be undertaken with appropriate equipment and by persons trained to use it.",
        false,
        8,
    ),
];

/// `(category, text, is_default, order_no)` rows for the advisory table.
const ADVISORIES: &[(&str, &str, bool, i32)] = &[
    (
        "General",
        "Preventative measures such as proofing of buildings should be continued or put in place to reduce the need for future licences.",
        true,
        1,
    ),
    (
        "General",
        "This licence does not confer any right of entry onto land or structures.",
        true,
        2,
    ),
    (
        "Biosecurity",
        "Equipment should be cleaned and disinfected between sites to reduce the risk of spreading avian disease.",
        true,
        3,
    ),
    (
        "Biosecurity",
        "Carcasses and nest material should be disposed of in accordance with local authority guidance.",
        false,
        4,
    ),
    (
        "Welfare",
        "Where eggs are destroyed, doing so early in incubation is preferable on welfare grounds.",
        false,
        5,
    ),
    (
        "Welfare",
        "Relocation of chicks should be to a location within sight and sound of the original nest site wherever practical.",
        false,
        6,
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (category, text, is_default, order_no) in CONDITIONS {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Condition::Table)
                        .columns([
                            Condition::Category,
                            Condition::Text,
                            Condition::IsDefault,
                            Condition::OrderNo,
                            Condition::CreatedAt,
                        ])
                        .values_panic([
                            (*category).into(),
                            (*text).into(),
                            (*is_default).into(),
                            (*order_no).into(),
                            Expr::current_timestamp().into(),
                        ])
                        .to_owned(),
                )
                .await?;
        }

        for (category, text, is_default, order_no) in ADVISORIES {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Advisory::Table)
                        .columns([
                            Advisory::Category,
                            Advisory::Text,
                            Advisory::IsDefault,
                            Advisory::OrderNo,
                            Advisory::CreatedAt,
                        ])
                        .values_panic([
                            (*category).into(),
                            (*text).into(),
                            (*is_default).into(),
                            (*order_no).into(),
                            Expr::current_timestamp().into(),
                        ])
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Condition::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Advisory::Table).to_owned())
            .await?;

        Ok(())
    }
}
