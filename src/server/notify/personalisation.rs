//! Personalisation bundle builders.
//!
//! Pure functions over fetched rows; one builder per email template. Every
//! value is rendered to a plain string here so the notification boundary
//! stays a dumb key/value transport.

use crate::server::{
    data::{
        measure::{MEASURE_INTEND, MEASURE_NO, MEASURE_TRIED},
        species::SpeciesSetDetail,
    },
    notify::Personalisation,
    util::time::display_date,
};

/// The rows every bundle draws on.
pub struct CaseParties<'a> {
    pub application: &'a entity::application::Model,
    pub licence_holder: &'a entity::contact::Model,
    pub site_address: &'a entity::address::Model,
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn address_block(address: &entity::address::Model) -> String {
    let mut lines: Vec<&str> = Vec::new();
    if let Some(line) = address.address_line_1.as_deref() {
        lines.push(line);
    }
    if let Some(line) = address.address_line_2.as_deref() {
        lines.push(line);
    }
    if let Some(town) = address.address_town.as_deref() {
        lines.push(town);
    }
    if let Some(county) = address.address_county.as_deref() {
        lines.push(county);
    }
    lines.push(&address.postcode);

    lines.join("\n")
}

fn base(parties: &CaseParties) -> Personalisation {
    let mut map = Personalisation::new();
    map.insert("licenceNumber".to_string(), parties.application.id.to_string());
    map.insert(
        "licenceHolderName".to_string(),
        parties.licence_holder.name.clone(),
    );
    map.insert("siteAddress".to_string(), address_block(parties.site_address));

    map
}

fn quantity(value: Option<i32>) -> i32 {
    value.unwrap_or(0)
}

/// One forward-looking sentence per permitted activity, prefixed with the
/// species display name.
fn permitted_lines(name: &str, activity: &entity::activity::Model) -> Vec<String> {
    let mut lines = Vec::new();

    if activity.remove_nests {
        lines.push(format!(
            "{name}: To take and destroy up to {} nests and any eggs they contain.",
            quantity(activity.quantity_nests_to_remove)
        ));
    }
    if activity.egg_destruction {
        lines.push(format!(
            "{name}: To take and destroy the eggs from up to {} nests.",
            quantity(activity.quantity_nests_where_eggs_destroyed)
        ));
    }
    if activity.chicks_to_rescue_centre {
        lines.push(format!(
            "{name}: To take up to {} chicks to a wildlife rescue centre.",
            quantity(activity.quantity_chicks_to_rescue)
        ));
    }
    if activity.chicks_relocate_nearby {
        lines.push(format!(
            "{name}: To take up to {} chicks and relocate them nearby.",
            quantity(activity.quantity_chicks_to_relocate)
        ));
    }
    if activity.kill_chicks {
        lines.push(format!(
            "{name}: To kill up to {} chicks.",
            quantity(activity.quantity_chicks_to_kill)
        ));
    }
    if activity.kill_adults {
        lines.push(format!(
            "{name}: To kill up to {} adult birds.",
            quantity(activity.quantity_adults_to_kill)
        ));
    }

    lines
}

/// One past-tense sentence per reported activity, with the reported date
/// appended when the licensee gave one.
fn reported_lines(name: &str, activity: &entity::activity::Model) -> Vec<String> {
    let on = activity
        .carried_out_on
        .map(|date| format!(" on {}", display_date(date)))
        .unwrap_or_default();

    let mut lines = Vec::new();

    if activity.remove_nests {
        lines.push(format!(
            "{name}: Took and destroyed {} nests and any eggs they contained{on}.",
            quantity(activity.quantity_nests_to_remove)
        ));
    }
    if activity.egg_destruction {
        lines.push(format!(
            "{name}: Took and destroyed the eggs from {} nests{on}.",
            quantity(activity.quantity_nests_where_eggs_destroyed)
        ));
    }
    if activity.chicks_to_rescue_centre {
        lines.push(format!(
            "{name}: Took {} chicks to a wildlife rescue centre{on}.",
            quantity(activity.quantity_chicks_to_rescue)
        ));
    }
    if activity.chicks_relocate_nearby {
        lines.push(format!(
            "{name}: Took {} chicks and relocated them nearby{on}.",
            quantity(activity.quantity_chicks_to_relocate)
        ));
    }
    if activity.kill_chicks {
        lines.push(format!(
            "{name}: Killed {} chicks{on}.",
            quantity(activity.quantity_chicks_to_kill)
        ));
    }
    if activity.kill_adults {
        lines.push(format!(
            "{name}: Killed {} adult birds{on}.",
            quantity(activity.quantity_adults_to_kill)
        ));
    }

    lines
}

fn species_activity_list(
    species: &SpeciesSetDetail,
    to_lines: fn(&str, &entity::activity::Model) -> Vec<String>,
) -> String {
    species
        .species()
        .iter()
        .filter_map(|(name, activity)| activity.map(|a| to_lines(name, a)))
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}

fn identified_species_list(species: &SpeciesSetDetail) -> String {
    species
        .species()
        .iter()
        .filter(|(_, activity)| activity.is_some())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("\n")
}

const ISSUE_LABELS: &[(&str, fn(&entity::issue::Model) -> bool)] = &[
    ("Gulls acting aggressively", |i| i.aggression),
    ("Gulls dive bombing people", |i| i.dive_bombing),
    ("Noise caused by gulls", |i| i.noise),
    ("Droppings", |i| i.droppings),
    ("Nesting material blocking gutters or flues", |i| i.nesting_material),
    ("Gulls acting aggressively towards people working at height", |i| {
        i.at_height_aggression
    }),
    ("Other issues", |i| i.other),
];

fn issue_list(issue: &entity::issue::Model) -> String {
    ISSUE_LABELS
        .iter()
        .filter(|(_, flag)| flag(issue))
        .map(|(label, _)| format!("* {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

const MEASURE_LABELS: &[(&str, fn(&entity::measure::Model) -> &str)] = &[
    ("Physically preventing nesting", |m| &m.prevent_nesting),
    ("Removing old nests and eggs", |m| &m.remove_old_nests),
    ("Removing litter and food sources", |m| &m.remove_litter),
    ("Human disturbance", |m| &m.human_disturbance),
    ("Scaring devices", |m| &m.scaring_devices),
    ("Hawking by birds of prey", |m| &m.hawking),
    ("Disturbance by dogs", |m| &m.disturbance_by_dogs),
];

fn measure_list(measure: &entity::measure::Model, value: &str) -> String {
    MEASURE_LABELS
        .iter()
        .filter(|(_, read)| read(measure) == value)
        .map(|(label, _)| format!("* {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bulleted text grouped under category headings, preserving row order.
fn grouped_by_category<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;

    for (category, text) in items {
        if current != Some(category) {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(category);
            current = Some(category);
        }
        out.push_str("\n* ");
        out.push_str(text);
    }

    out
}

fn condition_list(conditions: &[entity::condition::Model]) -> String {
    grouped_by_category(conditions.iter().map(|c| (c.category.as_str(), c.text.as_str())))
}

fn advisory_list(advisories: &[entity::advisory::Model]) -> String {
    grouped_by_category(advisories.iter().map(|a| (a.category.as_str(), a.text.as_str())))
}

/// Bundle for the holder-direct application confirmation.
pub fn confirmation(
    parties: &CaseParties,
    species: &SpeciesSetDetail,
    issue: &entity::issue::Model,
    measure: &entity::measure::Model,
) -> Personalisation {
    let mut map = base(parties);
    map.insert(
        "identifiedSpeciesList".to_string(),
        identified_species_list(species),
    );
    map.insert("issueList".to_string(), issue_list(issue));
    map.insert(
        "siteUsedFor".to_string(),
        issue.site_used_for.clone().unwrap_or_default(),
    );
    map.insert(
        "measuresTriedList".to_string(),
        measure_list(measure, MEASURE_TRIED),
    );
    map.insert(
        "measuresIntendList".to_string(),
        measure_list(measure, MEASURE_INTEND),
    );
    map.insert("measuresNoList".to_string(), measure_list(measure, MEASURE_NO));

    map
}

/// Bundle for the licence issuance email.
#[allow(clippy::too_many_arguments)]
pub fn licence_issuance(
    parties: &CaseParties,
    licence: &entity::licence::Model,
    species: &SpeciesSetDetail,
    default_conditions: &[entity::condition::Model],
    optional_conditions: &[entity::condition::Model],
    default_advisories: &[entity::advisory::Model],
    optional_advisories: &[entity::advisory::Model],
) -> Personalisation {
    let mut map = base(parties);
    map.insert("periodFrom".to_string(), display_date(licence.period_from));
    map.insert("periodTo".to_string(), display_date(licence.period_to));
    map.insert(
        "permittedSpeciesActivitiesList".to_string(),
        species_activity_list(species, permitted_lines),
    );
    map.insert(
        "defaultConditionsList".to_string(),
        condition_list(default_conditions),
    );
    map.insert(
        "optionalConditionsList".to_string(),
        condition_list(optional_conditions),
    );
    map.insert(
        "defaultAdvisoriesList".to_string(),
        advisory_list(default_advisories),
    );
    map.insert(
        "optionalAdvisoriesList".to_string(),
        advisory_list(optional_advisories),
    );

    map
}

/// Bundle for the amendment email, scoped to the amended content. The
/// period falls back to the licence's own when the amendment left it alone.
pub fn amendment(
    parties: &CaseParties,
    amendment: &entity::amendment::Model,
    licence: &entity::licence::Model,
    species: &SpeciesSetDetail,
    optional_conditions: &[entity::condition::Model],
    optional_advisories: &[entity::advisory::Model],
) -> Personalisation {
    let period_from = amendment.period_from.unwrap_or(licence.period_from);
    let period_to = amendment.period_to.unwrap_or(licence.period_to);

    let mut map = base(parties);
    map.insert("periodFrom".to_string(), display_date(period_from));
    map.insert("periodTo".to_string(), display_date(period_to));
    map.insert(
        "amendedSpeciesActivitiesList".to_string(),
        species_activity_list(species, permitted_lines),
    );
    map.insert(
        "optionalConditionsList".to_string(),
        condition_list(optional_conditions),
    );
    map.insert(
        "optionalAdvisoriesList".to_string(),
        advisory_list(optional_advisories),
    );

    map
}

/// Bundle for a reporting return.
pub fn reporting_return(parties: &CaseParties, species: &SpeciesSetDetail) -> Personalisation {
    let mut map = base(parties);
    map.insert(
        "reportedSpeciesActivitiesList".to_string(),
        species_activity_list(species, reported_lines),
    );

    map
}

/// Bundle for a final return.
pub fn final_return(parties: &CaseParties, returned: &entity::returns::Model) -> Personalisation {
    let mut map = base(parties);
    map.insert(
        "hasTriedPreventativeMeasures".to_string(),
        yes_no(returned.has_tried_preventative_measures.unwrap_or(false)),
    );
    map.insert(
        "preventativeMeasuresDetails".to_string(),
        returned.preventative_measures_details.clone().unwrap_or_default(),
    );

    map
}

/// Bundle for a site visit return.
pub fn site_visit_return(
    parties: &CaseParties,
    returned: &entity::returns::Model,
) -> Personalisation {
    let mut map = base(parties);
    map.insert(
        "siteVisitDate".to_string(),
        returned.site_visit_date.map(display_date).unwrap_or_default(),
    );

    map
}
