use serde::Deserialize;

/// Activity as served by `GET /activities`. The map key (activity name) lives
/// outside this struct; the server sends an object keyed by name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Roster in server order, conventionally email addresses.
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus roster size. Display-only: the server is the source of
    /// truth, so an oversubscribed roster yields a negative count and we show
    /// it rather than clamping.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, roster: &[&str]) -> Activity {
        Activity {
            description: "desc".to_string(),
            schedule: "Fridays, 3:30 PM".to_string(),
            max_participants: max,
            participants: roster.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_counts_down() {
        assert_eq!(activity(12, &["a@x.com", "b@x.com"]).spots_left(), 10);
    }

    #[test]
    fn spots_left_hits_zero_exactly() {
        assert_eq!(activity(2, &["a@x.com", "b@x.com"]).spots_left(), 0);
    }

    #[test]
    fn spots_left_goes_negative_when_oversubscribed() {
        assert_eq!(activity(1, &["a@x.com", "b@x.com", "c@x.com"]).spots_left(), -2);
    }

    #[test]
    fn deserializes_from_api_shape() {
        let json = r#"{
            "description": "Weekly chess matches",
            "schedule": "Mondays, 3:30 PM",
            "max_participants": 12,
            "participants": ["alice@example.com"]
        }"#;
        let parsed: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.max_participants, 12);
        assert_eq!(parsed.participants, vec!["alice@example.com"]);
        assert_eq!(parsed.spots_left(), 11);
    }
}
