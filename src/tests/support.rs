//! Shared fixtures: a recording mock of the Activities API and DOM helpers.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::components::board::ActivityBoard;
use crate::models::Activity;
use crate::network::{ActivitiesApi, ApiError};
use crate::ui;

pub struct MockState {
    pub activities: Vec<(String, Activity)>,
    pub list_error: Option<ApiError>,
    pub signup_result: Option<Result<String, ApiError>>,
    pub unregister_result: Option<Result<String, ApiError>>,
    pub list_calls: usize,
    pub signups: Vec<(String, String)>,
    pub unregisters: Vec<(String, String)>,
}

/// Recording mock of the Activities API. Unscripted mutation results mirror
/// the real server's confirmation messages.
#[derive(Clone)]
pub struct MockApi {
    pub state: Rc<RefCell<MockState>>,
}

impl MockApi {
    pub fn new(activities: Vec<(String, Activity)>) -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                activities,
                list_error: None,
                signup_result: None,
                unregister_result: None,
                list_calls: 0,
                signups: Vec::new(),
                unregisters: Vec::new(),
            })),
        }
    }

    pub fn with_list_error(self, error: ApiError) -> Self {
        self.state.borrow_mut().list_error = Some(error);
        self
    }

    pub fn with_signup_result(self, result: Result<String, ApiError>) -> Self {
        self.state.borrow_mut().signup_result = Some(result);
        self
    }

    pub fn with_unregister_result(self, result: Result<String, ApiError>) -> Self {
        self.state.borrow_mut().unregister_result = Some(result);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.state.borrow().list_calls
    }

    pub fn signups(&self) -> Vec<(String, String)> {
        self.state.borrow().signups.clone()
    }

    pub fn unregisters(&self) -> Vec<(String, String)> {
        self.state.borrow().unregisters.clone()
    }
}

impl ActivitiesApi for MockApi {
    async fn list_activities(&self) -> Result<Vec<(String, Activity)>, ApiError> {
        let mut state = self.state.borrow_mut();
        state.list_calls += 1;
        match &state.list_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.activities.clone()),
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let mut state = self.state.borrow_mut();
        state.signups.push((activity.to_string(), email.to_string()));
        match &state.signup_result {
            Some(result) => result.clone(),
            None => Ok(format!("Signed up {} for {}", email, activity)),
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let mut state = self.state.borrow_mut();
        state.unregisters.push((activity.to_string(), email.to_string()));
        match &state.unregister_result {
            Some(result) => result.clone(),
            None => Ok(format!("Unregistered {} from {}", email, activity)),
        }
    }
}

pub fn activity(description: &str, schedule: &str, max: u32, roster: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: roster.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn chess_club(roster: &[&str]) -> (String, Activity) {
    (
        "Chess Club".to_string(),
        activity("Weekly chess matches", "Mondays, 3:30 PM", 12, roster),
    )
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Build a fresh page skeleton (replacing any previous test's board) and
/// mount with short hide delays so tests don't wait out production timers.
pub const TEST_HIDE_MS: u32 = 30;

pub fn mount(api: MockApi) -> Rc<ActivityBoard<MockApi>> {
    let doc = document();
    ui::setup::create_base_ui(&doc).unwrap();
    ActivityBoard::mount_with_delays(&doc, api, TEST_HIDE_MS, TEST_HIDE_MS).unwrap()
}
