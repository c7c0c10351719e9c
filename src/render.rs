//! What the list area shows, built fresh from each fetched catalog.

use crate::model::{Activity, ActivityCatalog};

pub const LOADING_NOTICE: &str = "Loading activities...";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    #[default]
    Loading,
    Ready(Vec<ActivityCard>),
    Failed,
}

impl ListView {
    pub fn from_catalog(catalog: &ActivityCatalog) -> Self {
        ListView::Ready(
            catalog
                .iter()
                .map(|(name, activity)| ActivityCard::new(name, activity))
                .collect(),
        )
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ListView::Ready(cards) => cards,
            _ => &[],
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ListView::Loading => Some(LOADING_NOTICE),
            ListView::Failed => Some(LOAD_FAILED_NOTICE),
            ListView::Ready(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsView,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantsView::Empty
        } else {
            ParticipantsView::List(
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        email: email.clone(),
                        activity: name.to_string(),
                    })
                    .collect(),
            )
        };

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantsView {
    /// Rendered as the "No participants yet" placeholder.
    Empty,
    List(Vec<ParticipantRow>),
}

/// One participant entry; carries what its remove control needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    pub activity: String,
}

impl ParticipantRow {
    pub fn confirm_prompt(&self) -> String {
        confirm_prompt(&self.email, &self.activity)
    }
}

pub fn confirm_prompt(email: &str, activity: &str) -> String {
    format!("Unregister {email} from {activity}?")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ActivityCatalog {
        ActivityCatalog::from_json(
            r#"{
                "Yoga": {"description": "Stretch", "schedule": "Mon 7am", "max_participants": 10,
                         "participants": ["a@x.edu", "b@x.edu", "c@x.edu"]},
                "Drama": {"description": "Stage", "schedule": "Thu 4pm", "max_participants": 20,
                          "participants": []}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn yoga_has_seven_spots_left() {
        let view = ListView::from_catalog(&catalog());
        let yoga = &view.cards()[0];
        assert_eq!(yoga.name, "Yoga");
        assert_eq!(yoga.spots_left, 7);
        assert_eq!(yoga.availability(), "7 spots left");
    }

    #[test]
    fn empty_activity_gets_placeholder() {
        let view = ListView::from_catalog(&catalog());
        assert_eq!(view.cards()[1].participants, ParticipantsView::Empty);
    }

    #[test]
    fn rows_know_their_activity() {
        let view = ListView::from_catalog(&catalog());
        let ParticipantsView::List(rows) = &view.cards()[0].participants else {
            panic!("expected participant rows");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].email, "b@x.edu");
        assert_eq!(rows[1].confirm_prompt(), "Unregister b@x.edu from Yoga?");
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let catalog = catalog();
        assert_eq!(ListView::from_catalog(&catalog), ListView::from_catalog(&catalog));
    }

    #[test]
    fn notices() {
        assert_eq!(ListView::Loading.notice(), Some(LOADING_NOTICE));
        assert_eq!(ListView::Failed.notice(), Some(LOAD_FAILED_NOTICE));
        assert_eq!(ListView::from_catalog(&catalog()).notice(), None);
        assert!(ListView::Failed.cards().is_empty());
    }
}
