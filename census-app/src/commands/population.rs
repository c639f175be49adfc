use census::{compute_aggregates, Bucket};

use crate::commands::people::build_person_data;
use crate::state::{AppState, BucketData, DemographicsData};

/// Every bucket with its header label, count and people, derived fresh from
/// the registry as of today.
pub fn get_demographics(state: &AppState) -> DemographicsData {
    let today = state.today();
    let locale = state.locale();
    let aggregates = compute_aggregates(&state.registry, today);

    let buckets = Bucket::ALL
        .iter()
        .map(|&bucket| {
            let people = aggregates.bucket(bucket);
            BucketData {
                bucket,
                label: bucket.label(locale).to_string(),
                count: people.len(),
                people: people
                    .iter()
                    .map(|person| build_person_data(person, today, locale))
                    .collect(),
            }
        })
        .collect();

    DemographicsData {
        date: today,
        buckets,
    }
}
