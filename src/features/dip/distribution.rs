use std::collections::HashMap;

use serde_json::Value;

use crate::features::dip::dto::{PartyCountDto, PartyDistributionDto};

const UNKNOWN_PARTY: &str = "Unbekannt";

/// Tally party membership over a full member list.
///
/// Parties are sorted by count descending; ties keep first-seen input
/// order. Percentages are shares of the total, rounded to two decimals.
pub fn build_distribution(members: &[Value], wahlperiode: u32) -> PartyDistributionDto {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for member in members {
        let party = extract_party(member, wahlperiode);
        match counts.get_mut(&party) {
            Some(count) => *count += 1,
            None => {
                counts.insert(party.clone(), 1);
                first_seen.push(party);
            }
        }
    }

    let total_members = members.len() as u64;
    let mut parties: Vec<PartyCountDto> = first_seen
        .into_iter()
        .map(|fraktion| {
            let count = counts[&fraktion];
            PartyCountDto {
                fraktion,
                count,
                percentage: percentage_of(count, total_members),
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal counts stay in first-seen order.
    parties.sort_by(|a, b| b.count.cmp(&a.count));

    PartyDistributionDto {
        wahlperiode,
        total_members,
        parties,
    }
}

/// Resolve a member's party affiliation.
///
/// The `fraktion` field comes back as a list for most records and a bare
/// string for some older ones. Records without it carry the affiliation
/// inside `person_roles`, scoped per electoral period.
pub fn extract_party(member: &Value, wahlperiode: u32) -> String {
    if let Some(party) = direct_fraktion(member) {
        return party;
    }

    if let Some(party) = role_fraktion(member, wahlperiode) {
        return party;
    }

    UNKNOWN_PARTY.to_string()
}

// Empty strings and empty lists count as missing, so the record still
// gets a chance at the role fallback.
fn direct_fraktion(member: &Value) -> Option<String> {
    let party = match member.get("fraktion") {
        Some(Value::Array(entries)) => entries.first().and_then(|entry| entry.as_str()),
        Some(Value::String(party)) => Some(party.as_str()),
        _ => None,
    };

    party
        .filter(|party| !party.is_empty())
        .map(|party| party.to_string())
}

fn role_fraktion(member: &Value, wahlperiode: u32) -> Option<String> {
    let roles = member.get("person_roles")?.as_array()?;

    roles
        .iter()
        .filter(|role| {
            role.get("wahlperiode_nummer")
                .and_then(|periods| periods.as_array())
                .is_some_and(|periods| {
                    periods
                        .iter()
                        .any(|period| period.as_u64() == Some(u64::from(wahlperiode)))
                })
        })
        .find_map(|role| {
            role.get("fraktion")
                .and_then(|party| party.as_str())
                .filter(|party| !party.is_empty())
        })
        .map(|party| party.to_string())
}

fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_sum_to_total() {
        let members = vec![
            json!({"fraktion": ["SPD"]}),
            json!({"fraktion": ["CDU/CSU"]}),
            json!({"fraktion": ["SPD"]}),
            json!({"fraktion": "SPD"}),
        ];

        let distribution = build_distribution(&members, 20);

        assert_eq!(distribution.total_members, 4);
        let sum: u64 = distribution.parties.iter().map(|party| party.count).sum();
        assert_eq!(sum, distribution.total_members);
        assert_eq!(distribution.parties[0].fraktion, "SPD");
        assert_eq!(distribution.parties[0].count, 3);
        assert_eq!(distribution.parties[0].percentage, 75.0);
    }

    #[test]
    fn empty_member_list_yields_empty_distribution() {
        let distribution = build_distribution(&[], 21);

        assert_eq!(distribution.total_members, 0);
        assert!(distribution.parties.is_empty());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let members = vec![
            json!({"fraktion": ["GRÜNE"]}),
            json!({"fraktion": ["AfD"]}),
            json!({"fraktion": ["FDP"]}),
            json!({"fraktion": ["FDP"]}),
        ];

        let distribution = build_distribution(&members, 20);

        let names: Vec<&str> = distribution
            .parties
            .iter()
            .map(|party| party.fraktion.as_str())
            .collect();
        assert_eq!(names, vec!["FDP", "GRÜNE", "AfD"]);
    }

    #[test]
    fn falls_back_to_role_for_matching_period() {
        let member = json!({
            "person_roles": [
                {"fraktion": "DIE LINKE", "wahlperiode_nummer": [19]},
                {"fraktion": "BSW", "wahlperiode_nummer": [20, 21]}
            ]
        });

        assert_eq!(extract_party(&member, 21), "BSW");
        assert_eq!(extract_party(&member, 19), "DIE LINKE");
    }

    #[test]
    fn empty_fraktion_falls_back_to_roles() {
        let member = json!({
            "fraktion": "",
            "person_roles": [
                {"fraktion": "SPD", "wahlperiode_nummer": [20]}
            ]
        });
        assert_eq!(extract_party(&member, 20), "SPD");

        let member = json!({
            "fraktion": [],
            "person_roles": [
                {"fraktion": "", "wahlperiode_nummer": [20]},
                {"fraktion": "FDP", "wahlperiode_nummer": [20]}
            ]
        });
        assert_eq!(extract_party(&member, 20), "FDP");

        let member = json!({"fraktion": [""]});
        assert_eq!(extract_party(&member, 20), "Unbekannt");
    }

    #[test]
    fn members_without_affiliation_count_as_unknown() {
        let members = vec![json!({"vorname": "Max", "nachname": "Mustermann"})];

        let distribution = build_distribution(&members, 20);

        assert_eq!(distribution.parties.len(), 1);
        assert_eq!(distribution.parties[0].fraktion, "Unbekannt");
    }

    #[test]
    fn percentages_round_to_two_decimals() {
        let members = vec![
            json!({"fraktion": ["SPD"]}),
            json!({"fraktion": ["CDU/CSU"]}),
            json!({"fraktion": ["FDP"]}),
        ];

        let distribution = build_distribution(&members, 20);

        for party in &distribution.parties {
            assert_eq!(party.percentage, 33.33);
        }
    }
}
