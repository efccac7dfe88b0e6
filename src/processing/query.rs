//! Synthesis of a search query from a citizen profile.

use crate::DEFAULT_STATE;
use crate::domain::profile::Profile;

/// Intent phrase per occupation.
const OCCUPATION_INTENTS: &[(&str, &str)] = &[
    ("student", "free education scholarships for students"),
    ("farmer", "agriculture loans subsidies crop insurance for farmers"),
    ("employed", "skill development employment schemes for workers"),
];

/// Intent used when the occupation is unknown or missing.
const FALLBACK_INTENT: &str = "welfare schemes";

fn base_intent(occupation: &str) -> &'static str {
    let occupation = occupation.trim().to_lowercase();
    OCCUPATION_INTENTS
        .iter()
        .find(|(name, _)| *name == occupation)
        .map(|(_, intent)| *intent)
        .unwrap_or(FALLBACK_INTENT)
}

fn qualifiers(profile: &Profile) -> Vec<&'static str> {
    let mut qualifiers = Vec::new();
    let age_group = profile.age_group.trim().to_lowercase();
    if age_group == "student" || age_group == "young adult" {
        qualifiers.push("young");
    }
    if profile.gender.trim().eq_ignore_ascii_case("female") {
        qualifiers.push("women or girls");
    }
    if profile.income_level.trim().eq_ignore_ascii_case("low") {
        qualifiers.push("poor or low-income");
    }
    qualifiers
}

/// Builds `"{intent} for {qualifiers} in {state}"` for a profile.
///
/// With no qualifiers the middle segment stays empty, giving
/// `"... for  in ..."`; embeddings are insensitive to the doubled space.
pub fn compose(profile: &Profile) -> String {
    format!(
        "{} for {} in {}",
        base_intent(&profile.occupation),
        qualifiers(profile).join(", "),
        profile.effective_state().unwrap_or(DEFAULT_STATE)
    )
}

#[cfg(test)]
mod tests {
    use super::compose;
    use crate::domain::profile::Profile;

    #[test]
    fn farmer_profile_includes_every_qualifier_in_order() {
        let profile = Profile {
            occupation: "farmer".to_string(),
            age_group: "student".to_string(),
            gender: "female".to_string(),
            income_level: "low".to_string(),
            state: "Bihar".to_string(),
            ..Default::default()
        };

        assert_eq!(
            compose(&profile),
            "agriculture loans subsidies crop insurance for farmers for young, women or girls, poor or low-income in Bihar"
        );
    }

    #[test]
    fn occupation_lookup_is_case_insensitive() {
        let profile = Profile {
            occupation: "Student".to_string(),
            age_group: "Young Adult".to_string(),
            state: "Kerala".to_string(),
            ..Default::default()
        };

        assert_eq!(
            compose(&profile),
            "free education scholarships for students for young in Kerala"
        );
    }

    #[test]
    fn unknown_occupation_and_missing_state_use_defaults() {
        let profile = Profile {
            occupation: "astronaut".to_string(),
            ..Default::default()
        };

        assert_eq!(compose(&profile), "welfare schemes for  in india");
    }

    #[test]
    fn other_state_uses_custom_state() {
        let profile = Profile {
            occupation: "employed".to_string(),
            income_level: "low".to_string(),
            state: "Other".to_string(),
            custom_state: "Puducherry".to_string(),
            ..Default::default()
        };

        assert_eq!(
            compose(&profile),
            "skill development employment schemes for workers for poor or low-income in Puducherry"
        );
    }
}
