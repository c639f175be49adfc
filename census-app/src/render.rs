//! Plain-text rendering of command results.

use census::{AgeReport, Bucket, Locale};

use crate::state::{AddedData, DemographicsData, HouseholdPage, PersonData};

struct Labels {
    details: &'static str,
    statistics: &'static str,
    house_no: &'static str,
    page: &'static str,
    households: &'static str,
    empty: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::Marathi => Labels {
            details: "सविस्तर माहिती",
            statistics: "आकडेवारी",
            house_no: "घर क्र.",
            page: "पान",
            households: "घरे",
            empty: "अद्याप कोणतेही घर नोंदवलेले नाही",
        },
        Locale::English => Labels {
            details: "Details",
            statistics: "Statistics",
            house_no: "House No.",
            page: "Page",
            households: "households",
            empty: "No households recorded yet",
        },
    }
}

pub fn added(data: &AddedData) -> String {
    format!(
        "{} (#{} household {}, person {})",
        data.message, data.house_number, data.household_id, data.person_id
    )
}

pub fn person(data: &PersonData) -> String {
    format!(
        "{} | {} | {} [id {}]",
        data.name, data.age, data.gender, data.id
    )
}

pub fn household_page(page: &HouseholdPage, locale: Locale) -> String {
    let labels = labels(locale);
    let mut lines = vec![format!("-- {} --", labels.details)];

    if page.households.is_empty() {
        lines.push(labels.empty.to_string());
    }
    for household in &page.households {
        lines.push(format!(
            "{} {}: {}",
            labels.house_no,
            household.house_number,
            person(&household.head)
        ));
        lines.extend(
            household
                .members
                .iter()
                .map(|member| format!("    - {}", person(member))),
        );
    }

    lines.push(format!(
        "{} {}/{} ({} {})",
        labels.page, page.page, page.total_pages, page.total_households, labels.households
    ));
    lines.join("\n")
}

/// Bucket headers with counts; `expand` also lists that bucket's people as
/// `name - age`.
pub fn demographics(data: &DemographicsData, expand: Option<Bucket>, locale: Locale) -> String {
    let labels = labels(locale);
    let mut lines = vec![format!("-- {} ({}) --", labels.statistics, data.date)];

    for bucket in &data.buckets {
        lines.push(format!("{}: {}", bucket.label, bucket.count));
        if expand == Some(bucket.bucket) {
            lines.extend(
                bucket
                    .people
                    .iter()
                    .map(|p| format!("    {} - {}", p.name, p.age)),
            );
        }
    }
    lines.join("\n")
}

pub fn age(report: &AgeReport) -> String {
    report.display.clone()
}

pub const HELP: &str = "\
Commands:
  head <gender> <YYYY-MM-DD> <name>                add a head of household
  member <household-id> <gender> <YYYY-MM-DD> <name>  add a member to a household
  list [page]                                      list households with their members
  stats [males|females|0-5|30+|total]              show demographic counts
  age <YYYY-MM-DD>                                 age as of today for a birth date
  show <person-id>                                 show one person
  config                                           show the active settings
  help                                             show this help
  quit                                             end the session";
