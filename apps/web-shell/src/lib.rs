#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::time::Duration;

    use gloo_net::http::Request;
    use gloo_timers::future::sleep;
    use linkscout_client_core::controller::{FetchRequest, begin_fetch};
    use linkscout_client_core::history::NavigationState;
    use linkscout_client_core::query::{STARTUP_FETCH_DELAY_MS, parse_search};
    use linkscout_client_core::session::{ClientToken, LINKS_ENDPOINT, PageSession};
    use linkscout_client_core::stream::{CompletedFetch, StreamEvent, apply_stream_event};
    use linkscout_client_core::view::LinksView;
    use serde::Serialize;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{
        Document, Element, EventSource, HtmlAnchorElement, HtmlElement, HtmlInputElement,
        MessageEvent, PopStateEvent,
    };

    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod network;
    mod routing;
    mod stream;

    use dom::DomView;
    use lifecycle::*;
    use network::*;
    use routing::*;

    thread_local! {
        static SESSION: RefCell<Option<PageSession>> = const { RefCell::new(None) };
        static DOM_VIEW: RefCell<Option<DomView>> = const { RefCell::new(None) };
        static LINK_STREAM: RefCell<Option<EventSource>> = const { RefCell::new(None) };
        static DIAGNOSTICS: RefCell<BootDiagnostics> = RefCell::new(BootDiagnostics::default());
        static STREAM_RESULTS_HANDLER: RefCell<Option<Closure<dyn FnMut(MessageEvent)>>> = const { RefCell::new(None) };
        static STREAM_END_MESSAGE_HANDLER: RefCell<Option<Closure<dyn FnMut(MessageEvent)>>> = const { RefCell::new(None) };
        static STREAM_MESSAGE_HANDLER: RefCell<Option<Closure<dyn FnMut(MessageEvent)>>> = const { RefCell::new(None) };
        static STREAM_ERROR_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static POPSTATE_HANDLER: RefCell<Option<Closure<dyn FnMut(PopStateEvent)>>> = const { RefCell::new(None) };
        static FORM_SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static RESULT_LINK_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static RESULTS_TOGGLE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static ALERT_DISMISS_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[derive(Debug, Clone, Serialize)]
    struct BootDiagnostics {
        phase: String,
        detail: String,
        results_received: u64,
        fetches_submitted: u64,
        snapshots_pushed: u64,
        last_error: Option<String>,
    }

    impl Default for BootDiagnostics {
        fn default() -> Self {
            Self {
                phase: "idle".to_string(),
                detail: "web shell not started".to_string(),
                results_received: 0,
                fetches_submitted: 0,
                snapshots_pushed: 0,
                last_error: None,
            }
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        set_boot_phase("booting", "initializing linkscout web shell");
        if let Err(error) = boot() {
            set_boot_error(&error);
        }
    }

    #[wasm_bindgen]
    pub fn boot_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| {
                "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
            })
        })
    }

    #[wasm_bindgen]
    pub fn session_token() -> String {
        SESSION.with(|slot| {
            slot.borrow()
                .as_ref()
                .map(|session| session.token().as_str().to_string())
                .unwrap_or_default()
        })
    }

    fn boot() -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;

        let view = DomView::resolve(&document)?;
        DOM_VIEW.with(|slot| *slot.borrow_mut() = Some(view));

        let session = PageSession::new(ClientToken::generate(random_quantum));
        SESSION.with(|slot| *slot.borrow_mut() = Some(session.clone()));

        if stream::event_source_supported(&window) {
            let link_stream = stream::open_link_stream(&session)?;
            LINK_STREAM.with(|slot| *slot.borrow_mut() = Some(link_stream));
        } else {
            platform_notice(&window, EVENT_SOURCE_UNSUPPORTED_NOTICE);
        }

        install_page_handlers(&document)?;

        if routing::history_supported(&window) {
            routing::install_popstate_handler(&window);
            run_startup_navigation(&window);
        } else {
            platform_notice(&window, HISTORY_UNSUPPORTED_NOTICE);
        }

        set_boot_phase("ready", "link stream subscribed and page handlers installed");
        Ok(())
    }

    fn with_view<R>(apply: impl FnOnce(&DomView) -> R) -> Option<R> {
        DOM_VIEW.with(|slot| slot.borrow().as_ref().map(apply))
    }

    /// Shared entry point for all three submission paths: the form, result
    /// links, and the startup auto-fetch.
    fn submit_fetch(url: &str, selector: &str) {
        let request = SESSION.with(|slot| {
            slot.borrow()
                .as_ref()
                .map(|session| FetchRequest::new(session, url, selector))
        });
        match request {
            Some(Ok(request)) => {
                post_fetch_request(&request);
                let _ = with_view(|view| begin_fetch(view, &request));
                DIAGNOSTICS.with(|state| {
                    let mut state = state.borrow_mut();
                    state.fetches_submitted = state.fetches_submitted.saturating_add(1);
                });
            }
            Some(Err(error)) => record_shell_error(&format!("fetch submission rejected: {error}")),
            None => record_shell_error("fetch submitted before the page session was created"),
        }
    }

    fn handle_stream_event(event: StreamEvent) {
        match &event {
            StreamEvent::Results(_) => DIAGNOSTICS.with(|state| {
                let mut state = state.borrow_mut();
                state.results_received = state.results_received.saturating_add(1);
            }),
            StreamEvent::StreamError(message) => {
                record_shell_error(&format!("link stream error: {message}"));
            }
            StreamEvent::EndMessage(_) | StreamEvent::Message(_) => {}
        }

        let completed = with_view(|view| apply_stream_event(view, event)).flatten();
        if let Some(completed) = completed {
            push_completed_fetch(&completed);
            DIAGNOSTICS.with(|state| {
                let mut state = state.borrow_mut();
                state.snapshots_pushed = state.snapshots_pushed.saturating_add(1);
            });
        }
    }

    /// 16-bit quantum from the platform random source; feeds the session
    /// token generator.
    fn random_quantum() -> u16 {
        (js_sys::Math::random() * 65536.0) as u16
    }
}
