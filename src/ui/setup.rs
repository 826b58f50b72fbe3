//! Builds the static page skeleton the board attaches to.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{
    CSS_HIDDEN, ID_ACTIVITIES_LIST, ID_ACTIVITY_SELECT, ID_BOARD_ROOT, ID_BOARD_STYLES,
    ID_EMAIL_INPUT, ID_MESSAGE, ID_SIGNUP_FORM, LOADING_TEXT, PLACEHOLDER_OPTION_TEXT,
};

/// Create the board skeleton under `<body>`: header, activities container,
/// signup form, and the (hidden) message area. Replaces any previous board
/// subtree, so remounting is safe.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    if let Some(stale) = document.get_element_by_id(ID_BOARD_ROOT) {
        stale.remove();
    }

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let root = document.create_element("div")?;
    root.set_id(ID_BOARD_ROOT);

    let header = document.create_element("header")?;
    let title = document.create_element("h1")?;
    title.set_text_content(Some("Activity Board"));
    header.append_child(&title)?;
    root.append_child(&header)?;

    // Activities column
    let activities_section = document.create_element("section")?;
    let activities_title = document.create_element("h3")?;
    activities_title.set_text_content(Some("Available Activities"));
    activities_section.append_child(&activities_title)?;

    let activities_list = document.create_element("div")?;
    activities_list.set_id(ID_ACTIVITIES_LIST);
    let loading = document.create_element("p")?;
    loading.set_text_content(Some(LOADING_TEXT));
    activities_list.append_child(&loading)?;
    activities_section.append_child(&activities_list)?;
    root.append_child(&activities_section)?;

    // Signup column
    let signup_section = document.create_element("section")?;
    let signup_title = document.create_element("h3")?;
    signup_title.set_text_content(Some("Sign Up for an Activity"));
    signup_section.append_child(&signup_title)?;

    let form = document.create_element("form")?;
    form.set_id(ID_SIGNUP_FORM);

    let email_label = document.create_element("label")?;
    email_label.set_attribute("for", ID_EMAIL_INPUT)?;
    email_label.set_text_content(Some("Email:"));
    form.append_child(&email_label)?;

    let email_input = document.create_element("input")?;
    email_input.set_id(ID_EMAIL_INPUT);
    email_input.set_attribute("type", "email")?;
    email_input.set_attribute("required", "")?;
    form.append_child(&email_input)?;

    let select_label = document.create_element("label")?;
    select_label.set_attribute("for", ID_ACTIVITY_SELECT)?;
    select_label.set_text_content(Some("Activity:"));
    form.append_child(&select_label)?;

    let select = document.create_element("select")?;
    select.set_id(ID_ACTIVITY_SELECT);
    let placeholder = document.create_element("option")?;
    placeholder.set_attribute("value", "")?;
    placeholder.set_text_content(Some(PLACEHOLDER_OPTION_TEXT));
    select.append_child(&placeholder)?;
    form.append_child(&select)?;

    let submit = document.create_element("button")?;
    submit.set_attribute("type", "submit")?;
    submit.set_text_content(Some("Sign Up"));
    form.append_child(&submit)?;

    signup_section.append_child(&form)?;

    let message = document.create_element("div")?;
    message.set_id(ID_MESSAGE);
    message.set_class_name(CSS_HIDDEN);
    signup_section.append_child(&message)?;

    root.append_child(&signup_section)?;
    body.append_child(&root)?;

    ensure_styles(document)?;
    Ok(())
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ID_BOARD_STYLES).is_some() {
        return Ok(());
    }

    let css = "
#activity-board{font-family:Arial,Helvetica,sans-serif;max-width:960px;margin:0 auto;padding:16px}
.activity-card{border:1px solid #ddd;border-radius:6px;padding:12px 16px;margin-bottom:12px;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.participants-section{margin-top:8px}
.participants-list{list-style:none;padding-left:0;margin:6px 0 0}
.participants-list li{display:flex;align-items:center;gap:8px;padding:2px 0}
.no-participants{color:#777;font-style:italic}
.avatar{display:inline-flex;align-items:center;justify-content:center;width:26px;height:26px;border-radius:50%;background:#2563eb;color:#fff;font-size:11px}
.participant-remove{margin-left:auto;border:none;background:none;color:#dc2626;cursor:pointer;font-size:16px}
.participant-remove:disabled{color:#aaa;cursor:default}
#message{margin-top:12px;padding:8px 12px;border-radius:4px}
#message.success{background:#dcfce7;color:#166534}
#message.error{background:#fee2e2;color:#991b1b}
.hidden{display:none}
";

    let style = document.create_element("style")?;
    style.set_id(ID_BOARD_STYLES);
    style.set_text_content(Some(css));
    if let Some(head) = document.query_selector("head")? {
        head.append_child(&style)?;
    } else {
        append_to_body(document, &style)?;
    }
    Ok(())
}

fn append_to_body(document: &Document, el: &Element) -> Result<(), JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(el)?;
    Ok(())
}
