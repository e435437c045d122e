use super::*;

/// The page's display regions, resolved once at boot. All UI updates go
/// through the `LinksView` impl below; nothing else queries the document
/// for these elements.
pub(super) struct DomView {
    document: Document,
    message: HtmlElement,
    results: HtmlElement,
    results_control: HtmlElement,
    error: HtmlElement,
    alert_box: HtmlElement,
    heading: HtmlElement,
    url_input: HtmlInputElement,
    selector_input: HtmlInputElement,
}

impl DomView {
    pub(super) fn resolve(document: &Document) -> Result<Self, String> {
        Ok(Self {
            document: document.clone(),
            message: element_by_id(document, MESSAGE_ID)?,
            results: element_by_id(document, RESULTS_ID)?,
            results_control: element_by_id(document, RESULTS_CONTROL_ID)?,
            error: element_by_id(document, ERROR_ID)?,
            alert_box: element_by_selector(document, ALERT_BOX_SELECTOR)?,
            heading: element_by_selector(document, TITLE_HEADING_SELECTOR)?,
            url_input: input_by_id(document, URL_INPUT_ID)?,
            selector_input: input_by_id(document, SELECTOR_INPUT_ID)?,
        })
    }

    pub(super) fn url_value(&self) -> String {
        self.url_input.value()
    }

    pub(super) fn selector_value(&self) -> String {
        self.selector_input.value()
    }

    pub(super) fn results_control(&self) -> &HtmlElement {
        &self.results_control
    }

    fn for_each_success_row(&self, apply: impl Fn(&HtmlElement)) {
        let Ok(rows) = self.document.query_selector_all(SUCCESS_ROW_SELECTOR) else {
            return;
        };
        for index in 0..rows.length() {
            let Some(node) = rows.get(index) else {
                continue;
            };
            if let Ok(row) = node.dyn_into::<HtmlElement>() {
                apply(&row);
            }
        }
    }
}

impl LinksView for DomView {
    fn message_markup(&self) -> String {
        self.message.inner_html()
    }

    fn results_markup(&self) -> String {
        self.results.inner_html()
    }

    fn heading_text(&self) -> String {
        self.heading.inner_html()
    }

    fn set_message(&self, markup: &str) {
        self.message.set_inner_html(markup);
    }

    fn set_results(&self, markup: &str) {
        self.results.set_inner_html(markup);
    }

    fn append_result(&self, text: &str) {
        let _ = self.results.insert_adjacent_html("beforeend", text);
    }

    fn set_heading(&self, title: &str) {
        self.heading.set_inner_html(title);
    }

    fn set_document_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn show_message(&self) {
        show_element(&self.message);
    }

    fn hide_message(&self) {
        hide_element(&self.message);
    }

    fn show_results(&self) {
        show_element(&self.results);
    }

    fn show_results_toggle(&self) {
        show_element(&self.results_control);
    }

    fn hide_results_toggle(&self) {
        hide_element(&self.results_control);
    }

    fn clear_result_rows(&self) {
        let Ok(bodies) = self.document.query_selector_all(RESULT_ROWS_SELECTOR) else {
            return;
        };
        for index in 0..bodies.length() {
            let Some(node) = bodies.get(index) else {
                continue;
            };
            if let Ok(body) = node.dyn_into::<Element>() {
                body.set_inner_html("");
            }
        }
    }

    fn clear_inputs(&self) {
        self.url_input.set_value("");
        self.selector_input.set_value("");
    }

    fn hide_success_rows(&self) {
        self.for_each_success_row(|row| hide_element(row));
    }

    fn toggle_success_rows(&self) {
        self.for_each_success_row(|row| {
            let display = row
                .style()
                .get_property_value("display")
                .unwrap_or_default();
            if display == "none" {
                show_element(row);
            } else {
                hide_element(row);
            }
        });
    }

    fn show_error(&self, markup: &str) {
        show_element(&self.alert_box);
        self.error.set_inner_html(markup);
    }
}

// Visibility is driven through the inline style only, so showing an
// element is always "remove what we set" and stylesheet defaults win.
pub(super) fn show_element(element: &HtmlElement) {
    let _ = element.style().remove_property("display");
}

pub(super) fn hide_element(element: &HtmlElement) {
    let _ = element.style().set_property("display", "none");
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("page region #{id} is unavailable"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("page region #{id} is not an HtmlElement"))
}

fn element_by_selector(document: &Document, selector: &str) -> Result<HtmlElement, String> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| format!("page region {selector} is unavailable"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("page region {selector} is not an HtmlElement"))
}

fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("input #{id} is unavailable"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("input #{id} is not an HtmlInputElement"))
}
