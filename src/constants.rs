// Element ids created by ui::setup and looked up by the board - these are the
// single source of truth for the page skeleton.
pub const ID_BOARD_ROOT: &str = "activity-board";
pub const ID_ACTIVITIES_LIST: &str = "activities-list";
pub const ID_ACTIVITY_SELECT: &str = "activity";
pub const ID_SIGNUP_FORM: &str = "signup-form";
pub const ID_EMAIL_INPUT: &str = "email";
pub const ID_MESSAGE: &str = "message";
pub const ID_BOARD_STYLES: &str = "activity-board-styles";

// CSS class names shared between the stylesheet and the renderers
pub const CSS_ACTIVITY_CARD: &str = "activity-card";
pub const CSS_PARTICIPANTS_SECTION: &str = "participants-section";
pub const CSS_PARTICIPANTS_LIST: &str = "participants-list";
pub const CSS_NO_PARTICIPANTS: &str = "no-participants";
pub const CSS_AVATAR: &str = "avatar";
pub const CSS_PARTICIPANT_NAME: &str = "participant-name";
pub const CSS_PARTICIPANT_REMOVE: &str = "participant-remove";
pub const CSS_SUCCESS: &str = "success";
pub const CSS_ERROR: &str = "error";
pub const CSS_HIDDEN: &str = "hidden";

// Message auto-hide delays
pub const SIGNUP_MESSAGE_HIDE_MS: u32 = 5_000;
pub const UNREGISTER_MESSAGE_HIDE_MS: u32 = 4_000;

// User-facing copy
pub const PLACEHOLDER_OPTION_TEXT: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_ERROR: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK_ERROR: &str = "Failed to unregister";
pub const UNREGISTER_TRANSPORT_ERROR: &str = "Failed to unregister. Please try again.";

// Empty base means same-origin relative requests, matching the page that
// serves the wasm bundle.
pub const DEFAULT_API_BASE_URL: &str = "";
