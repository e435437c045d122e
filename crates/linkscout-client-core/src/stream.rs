use crate::history::NavigationState;
use crate::view::LinksView;

/// One event received over the session's server-push channel.
///
/// `Results` and `EndMessage` arrive as named channel events, `Message` as
/// the unnamed default event; `StreamError` is the transport-level error
/// condition. Payloads are trusted as-is from the server counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// One incrementally discovered result line.
    Results(String),
    /// The fetch finished; the payload is the address to install for the
    /// completed query.
    EndMessage(String),
    /// Progress text for the message region.
    Message(String),
    /// The channel failed. Terminal for this page load: there is no
    /// reconnect, the error surface stays up until the user reloads.
    StreamError(String),
}

/// A fetch that ran to completion: the snapshot to put on the navigation
/// stack and the address the server assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedFetch {
    pub address: String,
    pub snapshot: NavigationState,
}

/// Applies one channel event to the page. Returns the completed-fetch
/// record when the event ends a fetch, so the caller can push it onto the
/// navigation stack; the snapshot is taken before the success rows are
/// folded away.
pub fn apply_stream_event(view: &dyn LinksView, event: StreamEvent) -> Option<CompletedFetch> {
    match event {
        StreamEvent::Results(text) => {
            view.append_result(&format!("{text}\n"));
            None
        }
        StreamEvent::Message(text) => {
            view.set_message(&format!("{text}\n"));
            None
        }
        StreamEvent::EndMessage(address) => {
            let snapshot = NavigationState::capture(view);
            view.show_results_toggle();
            view.hide_success_rows();
            Some(CompletedFetch { address, snapshot })
        }
        StreamEvent::StreamError(text) => {
            view.show_error(&text);
            view.hide_message();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::FakeView;

    #[test]
    fn results_accumulate_in_arrival_order() {
        let view = FakeView::default();
        assert!(apply_stream_event(&view, StreamEvent::Results("first".to_string())).is_none());
        assert!(apply_stream_event(&view, StreamEvent::Results("second".to_string())).is_none());
        assert!(apply_stream_event(&view, StreamEvent::Results("third".to_string())).is_none());

        assert_eq!(*view.results.borrow(), "first\nsecond\nthird\n");
    }

    #[test]
    fn default_message_replaces_rather_than_appends() {
        let view = FakeView::default();
        apply_stream_event(&view, StreamEvent::Message("Fetched 1 of 3".to_string()));
        apply_stream_event(&view, StreamEvent::Message("Fetched 2 of 3".to_string()));

        assert_eq!(*view.message.borrow(), "Fetched 2 of 3\n");
    }

    #[test]
    fn end_message_snapshots_once_after_the_last_result() {
        let view = FakeView::with_heading("Links for example.com");
        apply_stream_event(&view, StreamEvent::Results("a".to_string()));
        apply_stream_event(&view, StreamEvent::Results("b".to_string()));
        let completed = apply_stream_event(
            &view,
            StreamEvent::EndMessage("/links?url=example.com".to_string()),
        )
        .expect("end-message completes the fetch");

        assert_eq!(completed.address, "/links?url=example.com");
        assert_eq!(completed.snapshot.results, "a\nb\n");
        assert_eq!(completed.snapshot.title, "Links for example.com");
    }

    #[test]
    fn end_message_reveals_the_toggle_and_hides_success_rows() {
        let view = FakeView::default();
        apply_stream_event(&view, StreamEvent::EndMessage("/x".to_string()));

        assert!(*view.toggle_visible.borrow());
        assert!(*view.success_rows_hidden.borrow());
        // The snapshot is captured before the rows fold away.
        let operations = view.operations();
        let toggle_at = operations
            .iter()
            .position(|op| op == "show_results_toggle")
            .expect("toggle shown");
        assert_eq!(operations[toggle_at + 1], "hide_success_rows");
    }

    #[test]
    fn toggle_control_flips_success_row_visibility() {
        let view = FakeView::default();
        apply_stream_event(&view, StreamEvent::EndMessage("/x".to_string()));
        assert!(*view.success_rows_hidden.borrow());

        view.toggle_success_rows();
        assert!(!*view.success_rows_hidden.borrow());
        view.toggle_success_rows();
        assert!(*view.success_rows_hidden.borrow());
    }

    #[test]
    fn stream_error_raises_the_alert_and_hides_the_message_region() {
        let view = FakeView::default();
        view.show_message();
        apply_stream_event(&view, StreamEvent::StreamError("connection lost".to_string()));

        assert!(*view.alert_visible.borrow());
        assert_eq!(*view.error.borrow(), "connection lost");
        assert!(!*view.message_visible.borrow());
    }
}
