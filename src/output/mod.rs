mod format;
mod history;
mod json;
mod panel;
mod setup;

pub(crate) use history::{EMPTY_HISTORY, render_history_table};
pub(crate) use json::{output_history_json, output_submit_json, output_validation_json};
pub(crate) use panel::{
    FORM_TITLE, render_contact_line, render_error, render_form_prompt, render_success,
    render_unconfigured_banner, render_validation,
};
pub(crate) use setup::{render_setup_panel, render_webhook_script};
