// Ids and selectors are the contract with the server-rendered page markup.
pub(crate) const MESSAGE_ID: &str = "message";
pub(crate) const RESULTS_ID: &str = "results";
pub(crate) const RESULTS_CONTROL_ID: &str = "results-control";
pub(crate) const ERROR_ID: &str = "error";
pub(crate) const URL_INPUT_ID: &str = "url";
pub(crate) const SELECTOR_INPUT_ID: &str = "selector";
pub(crate) const ALERT_BOX_SELECTOR: &str = ".alert-box";
pub(crate) const ALERT_DISMISS_SELECTOR: &str = "a.close";
pub(crate) const TITLE_HEADING_SELECTOR: &str = "h2.title";
pub(crate) const SUBMIT_FORM_SELECTOR: &str = "form";
pub(crate) const SUCCESS_ROW_SELECTOR: &str = "tr.success";
pub(crate) const RESULT_ROWS_SELECTOR: &str = "tbody";
pub(crate) const RESULT_LINK_CLASS: &str = "url";

pub(crate) const RESULTS_EVENT: &str = "results";
pub(crate) const END_MESSAGE_EVENT: &str = "end-message";

pub(crate) const EVENT_SOURCE_UNSUPPORTED_NOTICE: &str = "Your browser doesn't support HTML5 server-sent events and will not work properly here. For browsers to use, see http://caniuse.com/#feat=eventsource";
pub(crate) const HISTORY_UNSUPPORTED_NOTICE: &str = "Your browser doesn't support HTML5 history and may not work properly here. For browsers to use, see http://caniuse.com/#feat=history";
