use crate::session::PageSession;
use crate::view::LinksView;

/// Markup the message region shows while a fetch is in flight.
pub const LOADING_MARKUP: &str = "Fetching links... <img src='/images/spinner.gif' />";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("url must not be empty")]
    EmptyUrl,
}

/// A single outbound fetch submission. Exists only for the duration of the
/// POST; the selector is absent, not empty, when the user left it blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    token: String,
    url: String,
    selector: Option<String>,
}

impl FetchRequest {
    /// Builds a request from the raw input-field values. An empty selector
    /// normalizes to absent.
    pub fn new(session: &PageSession, url: &str, selector: &str) -> Result<Self, SubmitError> {
        if url.is_empty() {
            return Err(SubmitError::EmptyUrl);
        }
        Ok(Self {
            token: session.token().as_str().to_string(),
            url: url.to_string(),
            selector: normalize_selector(selector),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Title installed on both the document and the page heading.
    pub fn page_title(&self) -> String {
        match &self.selector {
            Some(selector) => format!("Links for {} with selector {selector}", self.url),
            None => format!("Links for {}", self.url),
        }
    }

    /// `application/x-www-form-urlencoded` body for the POST. The selector
    /// field is omitted entirely when absent.
    pub fn form_body(&self) -> String {
        let mut body = format!(
            "id={}&url={}",
            urlencoding::encode(&self.token),
            urlencoding::encode(&self.url)
        );
        if let Some(selector) = &self.selector {
            body.push_str("&selector=");
            body.push_str(&urlencoding::encode(selector));
        }
        body
    }
}

fn normalize_selector(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Resets the page into its loading state for a just-submitted request:
/// results revealed, toggle hidden, loading indicator up, inputs and old
/// rows cleared, titles set to the new query.
pub fn begin_fetch(view: &dyn LinksView, request: &FetchRequest) {
    view.show_results();
    view.hide_results_toggle();
    view.show_message();
    view.set_message(LOADING_MARKUP);
    view.clear_inputs();
    view.clear_result_rows();
    let title = request.page_title();
    view.set_document_title(&title);
    view.set_heading(&title);
}
