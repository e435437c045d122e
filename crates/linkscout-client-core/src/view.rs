/// Named update operations over the page's display regions.
///
/// The wasm shell implements this once over resolved DOM elements; tests
/// implement it with a recording fake so controller and stream logic run
/// without a document.
pub trait LinksView {
    fn message_markup(&self) -> String;
    fn results_markup(&self) -> String;
    fn heading_text(&self) -> String;

    fn set_message(&self, markup: &str);
    fn set_results(&self, markup: &str);
    fn append_result(&self, text: &str);
    fn set_heading(&self, title: &str);
    fn set_document_title(&self, title: &str);

    fn show_message(&self);
    fn hide_message(&self);
    fn show_results(&self);
    fn show_results_toggle(&self);
    fn hide_results_toggle(&self);
    fn clear_result_rows(&self);
    fn clear_inputs(&self);

    /// Rows flagged successful in the rendered results.
    fn hide_success_rows(&self);
    fn toggle_success_rows(&self);

    /// Reveals the alert banner with the given payload.
    fn show_error(&self, markup: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::LinksView;
    use std::cell::RefCell;

    /// In-memory view that mirrors the page regions and records every
    /// operation, in call order, for assertions.
    #[derive(Debug, Default)]
    pub(crate) struct FakeView {
        pub(crate) message: RefCell<String>,
        pub(crate) results: RefCell<String>,
        pub(crate) heading: RefCell<String>,
        pub(crate) document_title: RefCell<String>,
        pub(crate) error: RefCell<String>,
        pub(crate) message_visible: RefCell<bool>,
        pub(crate) results_visible: RefCell<bool>,
        pub(crate) toggle_visible: RefCell<bool>,
        pub(crate) success_rows_hidden: RefCell<bool>,
        pub(crate) alert_visible: RefCell<bool>,
        pub(crate) operations: RefCell<Vec<String>>,
    }

    impl FakeView {
        pub(crate) fn with_heading(title: &str) -> Self {
            let view = Self::default();
            *view.heading.borrow_mut() = title.to_string();
            view
        }

        pub(crate) fn operations(&self) -> Vec<String> {
            self.operations.borrow().clone()
        }

        fn record(&self, operation: impl Into<String>) {
            self.operations.borrow_mut().push(operation.into());
        }
    }

    impl LinksView for FakeView {
        fn message_markup(&self) -> String {
            self.message.borrow().clone()
        }

        fn results_markup(&self) -> String {
            self.results.borrow().clone()
        }

        fn heading_text(&self) -> String {
            self.heading.borrow().clone()
        }

        fn set_message(&self, markup: &str) {
            *self.message.borrow_mut() = markup.to_string();
            self.record(format!("set_message:{markup}"));
        }

        fn set_results(&self, markup: &str) {
            *self.results.borrow_mut() = markup.to_string();
            self.record(format!("set_results:{markup}"));
        }

        fn append_result(&self, text: &str) {
            self.results.borrow_mut().push_str(text);
            self.record(format!("append_result:{text}"));
        }

        fn set_heading(&self, title: &str) {
            *self.heading.borrow_mut() = title.to_string();
            self.record(format!("set_heading:{title}"));
        }

        fn set_document_title(&self, title: &str) {
            *self.document_title.borrow_mut() = title.to_string();
            self.record(format!("set_document_title:{title}"));
        }

        fn show_message(&self) {
            *self.message_visible.borrow_mut() = true;
            self.record("show_message");
        }

        fn hide_message(&self) {
            *self.message_visible.borrow_mut() = false;
            self.record("hide_message");
        }

        fn show_results(&self) {
            *self.results_visible.borrow_mut() = true;
            self.record("show_results");
        }

        fn show_results_toggle(&self) {
            *self.toggle_visible.borrow_mut() = true;
            self.record("show_results_toggle");
        }

        fn hide_results_toggle(&self) {
            *self.toggle_visible.borrow_mut() = false;
            self.record("hide_results_toggle");
        }

        fn clear_result_rows(&self) {
            self.record("clear_result_rows");
        }

        fn clear_inputs(&self) {
            self.record("clear_inputs");
        }

        fn hide_success_rows(&self) {
            *self.success_rows_hidden.borrow_mut() = true;
            self.record("hide_success_rows");
        }

        fn toggle_success_rows(&self) {
            let hidden = *self.success_rows_hidden.borrow();
            *self.success_rows_hidden.borrow_mut() = !hidden;
            self.record("toggle_success_rows");
        }

        fn show_error(&self, markup: &str) {
            *self.alert_visible.borrow_mut() = true;
            *self.error.borrow_mut() = markup.to_string();
            self.record(format!("show_error:{markup}"));
        }
    }
}
