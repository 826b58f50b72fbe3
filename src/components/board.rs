//! The activity board view-controller.
//!
//! Owns explicit handles to the DOM it drives (no global state): the card
//! list, the signup form and its select, and the message area. Every render
//! pass throws the previous cards away and rebuilds from the latest fetch;
//! the server stays the source of truth.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::constants::{
    CSS_ACTIVITY_CARD, CSS_AVATAR, CSS_NO_PARTICIPANTS, CSS_PARTICIPANTS_LIST,
    CSS_PARTICIPANTS_SECTION, CSS_PARTICIPANT_NAME, CSS_PARTICIPANT_REMOVE, ID_ACTIVITIES_LIST,
    ID_ACTIVITY_SELECT, ID_BOARD_ROOT, ID_EMAIL_INPUT, ID_MESSAGE, ID_SIGNUP_FORM,
    LOAD_FAILURE_TEXT, NO_PARTICIPANTS_TEXT, PLACEHOLDER_OPTION_TEXT, SIGNUP_FALLBACK_ERROR,
    SIGNUP_MESSAGE_HIDE_MS, SIGNUP_TRANSPORT_ERROR, UNREGISTER_FALLBACK_ERROR,
    UNREGISTER_MESSAGE_HIDE_MS, UNREGISTER_TRANSPORT_ERROR,
};
use crate::dom_utils;
use crate::models::Activity;
use crate::network::{ActivitiesApi, ApiError};
use crate::participants;

use super::message_area::MessageArea;

/// Handles to the fixed page skeleton built by `ui::setup`. Constructed once
/// at mount; rendered cards hang off `activities_list`.
pub struct BoardContext {
    document: Document,
    root: Element,
    activities_list: Element,
    activity_select: HtmlSelectElement,
    signup_form: HtmlElement,
    email_input: HtmlInputElement,
    message: MessageArea,
}

impl BoardContext {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            root: dom_utils::require_element(document, ID_BOARD_ROOT)?,
            activities_list: dom_utils::require_element(document, ID_ACTIVITIES_LIST)?,
            activity_select: dom_utils::require_typed(document, ID_ACTIVITY_SELECT)?,
            signup_form: dom_utils::require_typed(document, ID_SIGNUP_FORM)?,
            email_input: dom_utils::require_typed(document, ID_EMAIL_INPUT)?,
            message: MessageArea::new(dom_utils::require_element(document, ID_MESSAGE)?),
        })
    }
}

pub struct ActivityBoard<A: ActivitiesApi + 'static> {
    api: A,
    ctx: BoardContext,
    signup_hide_ms: u32,
    unregister_hide_ms: u32,
}

impl<A: ActivitiesApi + 'static> ActivityBoard<A> {
    /// Attach to the page skeleton and wire the signup form.
    pub fn mount(document: &Document, api: A) -> Result<Rc<Self>, JsValue> {
        Self::mount_with_delays(document, api, SIGNUP_MESSAGE_HIDE_MS, UNREGISTER_MESSAGE_HIDE_MS)
    }

    /// Same as [`mount`](Self::mount) with injectable hide delays so tests
    /// don't wait out the production timers.
    pub fn mount_with_delays(
        document: &Document,
        api: A,
        signup_hide_ms: u32,
        unregister_hide_ms: u32,
    ) -> Result<Rc<Self>, JsValue> {
        let board = Rc::new(Self {
            api,
            ctx: BoardContext::attach(document)?,
            signup_hide_ms,
            unregister_hide_ms,
        });
        board.wire_signup_form()?;
        Ok(board)
    }

    /// Remove the board's subtree from the document. Event closures were
    /// `forget()`-leaked at wiring time, but they target nodes that are gone
    /// after this.
    pub fn unmount(&self) {
        self.ctx.root.remove();
    }

    pub fn message_area(&self) -> &MessageArea {
        &self.ctx.message
    }

    fn wire_signup_form(self: &Rc<Self>) -> Result<(), JsValue> {
        let board = Rc::clone(self);
        let on_submit = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let board = Rc::clone(&board);
            spawn_local(async move {
                board.submit_signup().await;
            });
        }) as Box<dyn FnMut(_)>);
        self.ctx
            .signup_form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Loading & rendering
    // -----------------------------------------------------------------------

    /// Fetch the activity map and rebuild the card list and the signup
    /// select. On failure the list area becomes a static failure message
    /// until the next triggering event; no retry.
    pub async fn load_activities(self: &Rc<Self>) {
        match self.api.list_activities().await {
            Ok(activities) => {
                if let Err(e) = self.render_activities(&activities) {
                    console::error_1(&format!("Error rendering activities: {:?}", e).into());
                }
            }
            Err(err) => {
                self.ctx
                    .activities_list
                    .set_inner_html(&format!("<p>{}</p>", LOAD_FAILURE_TEXT));
                console::error_1(&format!("Error fetching activities: {}", err).into());
            }
        }
    }

    fn render_activities(self: &Rc<Self>, activities: &[(String, Activity)]) -> Result<(), JsValue> {
        self.ctx.activities_list.set_inner_html("");

        // Rebuild the select from scratch so refetches don't stack duplicate
        // options; the placeholder stays at index 0.
        self.ctx.activity_select.set_inner_html("");
        let placeholder = self.ctx.document.create_element("option")?;
        placeholder.set_attribute("value", "")?;
        placeholder.set_text_content(Some(PLACEHOLDER_OPTION_TEXT));
        self.ctx.activity_select.append_child(&placeholder)?;

        for (name, activity) in activities {
            let card = self.render_activity(name, activity)?;
            self.ctx.activities_list.append_child(&card)?;

            let option = self.ctx.document.create_element("option")?;
            option.set_attribute("value", name)?;
            option.set_text_content(Some(name));
            self.ctx.activity_select.append_child(&option)?;
        }
        Ok(())
    }

    /// Build one activity card: heading, description, schedule, spots left,
    /// and the participants section.
    fn render_activity(self: &Rc<Self>, name: &str, activity: &Activity) -> Result<Element, JsValue> {
        let document = &self.ctx.document;

        let card = document.create_element("div")?;
        card.set_class_name(CSS_ACTIVITY_CARD);

        let heading = document.create_element("h4")?;
        heading.set_text_content(Some(name));
        card.append_child(&heading)?;

        let description = document.create_element("p")?;
        description.set_text_content(Some(&activity.description));
        card.append_child(&description)?;

        let schedule = document.create_element("p")?;
        schedule.set_inner_html(&format!("<strong>Schedule:</strong> {}", activity.schedule));
        card.append_child(&schedule)?;

        let availability = document.create_element("p")?;
        availability.set_inner_html(&format!(
            "<strong>Availability:</strong> {} spots left",
            activity.spots_left()
        ));
        card.append_child(&availability)?;

        let section = document.create_element("div")?;
        section.set_class_name(CSS_PARTICIPANTS_SECTION);

        let title = document.create_element("strong")?;
        title.set_text_content(Some("Participants"));
        section.append_child(&title)?;

        let list = document.create_element("ul")?;
        list.set_class_name(CSS_PARTICIPANTS_LIST);

        if activity.participants.is_empty() {
            let row = document.create_element("li")?;
            row.set_class_name(CSS_NO_PARTICIPANTS);
            row.set_text_content(Some(NO_PARTICIPANTS_TEXT));
            list.append_child(&row)?;
        } else {
            for participant in &activity.participants {
                let row = self.render_participant_row(name, participant)?;
                list.append_child(&row)?;
            }
        }

        section.append_child(&list)?;
        card.append_child(&section)?;
        Ok(card)
    }

    /// One roster row: avatar initials, display name, and a remove button
    /// labeled with the raw identifier for accessibility.
    fn render_participant_row(self: &Rc<Self>, activity_name: &str, participant: &str) -> Result<Element, JsValue> {
        let document = &self.ctx.document;

        let row = document.create_element("li")?;

        let avatar = document.create_element("span")?;
        avatar.set_class_name(CSS_AVATAR);
        avatar.set_text_content(Some(&participants::initials(participant)));
        row.append_child(&avatar)?;

        let name_span = document.create_element("span")?;
        name_span.set_class_name(CSS_PARTICIPANT_NAME);
        name_span.set_text_content(Some(&participants::display_name(participant)));
        row.append_child(&name_span)?;

        let remove_btn: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
        remove_btn.set_class_name(CSS_PARTICIPANT_REMOVE);
        let label = format!("Unregister {}", participant);
        remove_btn.set_title(&label);
        remove_btn.set_attribute("aria-label", &label)?;
        remove_btn.set_inner_html("&times;");

        let board = Rc::clone(self);
        let button = remove_btn.clone();
        let activity = activity_name.to_string();
        let id = participant.to_string();
        let on_click = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.stop_propagation();
            let board = Rc::clone(&board);
            let button = button.clone();
            let activity = activity.clone();
            let id = id.clone();
            spawn_local(async move {
                board.remove_participant(&activity, &id, &button).await;
            });
        }) as Box<dyn FnMut(_)>);
        remove_btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        row.append_child(&remove_btn)?;
        Ok(row)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Handle a signup form submission. The email is sent as typed; the
    /// server validates. Every outcome shows a message that auto-hides.
    pub async fn submit_signup(self: &Rc<Self>) {
        let email = self.ctx.email_input.value();
        let activity = self.ctx.activity_select.value();

        match self.api.signup(&activity, &email).await {
            Ok(message) => {
                self.ctx.message.show_success(&message, self.signup_hide_ms);
                // Clear the form and resync rosters and counts.
                self.ctx.email_input.set_value("");
                self.ctx.activity_select.set_value("");
                self.load_activities().await;
            }
            Err(ApiError::Api { detail, .. }) => {
                let text = detail.unwrap_or_else(|| SIGNUP_FALLBACK_ERROR.to_string());
                self.ctx.message.show_error(&text, self.signup_hide_ms);
            }
            Err(err @ ApiError::Transport(_)) => {
                console::error_1(&format!("Error signing up: {}", err).into());
                self.ctx.message.show_error(SIGNUP_TRANSPORT_ERROR, self.signup_hide_ms);
            }
        }
    }

    /// Unregister one participant. The triggering button is disabled for the
    /// duration so a double click can't fire twice, and re-enabled on every
    /// path; only a successful call refetches the activity list.
    pub async fn remove_participant(self: &Rc<Self>, activity: &str, participant: &str, button: &HtmlButtonElement) {
        button.set_disabled(true);

        match self.api.unregister(activity, participant).await {
            Ok(message) => {
                self.ctx.message.show_success(&message, self.unregister_hide_ms);
                self.load_activities().await;
            }
            Err(ApiError::Api { detail, .. }) => {
                let text = detail.unwrap_or_else(|| UNREGISTER_FALLBACK_ERROR.to_string());
                self.ctx.message.show_error(&text, self.unregister_hide_ms);
            }
            Err(err @ ApiError::Transport(_)) => {
                console::error_1(&format!("Error unregistering: {}", err).into());
                self.ctx
                    .message
                    .show_error(UNREGISTER_TRANSPORT_ERROR, self.unregister_hide_ms);
            }
        }

        button.set_disabled(false);
    }
}
