use super::*;

pub(super) fn set_boot_phase(phase: &str, detail: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = phase.to_string();
        state.detail = detail.to_string();
        if phase != "error" {
            state.last_error = None;
        }
    });
}

pub(super) fn set_boot_error(message: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = "error".to_string();
        state.detail = "startup failed".to_string();
        state.last_error = Some(message.to_string());
    });
}

pub(super) fn record_shell_error(message: &str) {
    DIAGNOSTICS.with(|state| {
        state.borrow_mut().last_error = Some(message.to_string());
    });
}

/// Blocking notice for a missing platform primitive. The caller skips the
/// setup that depends on it; everything else keeps running.
pub(super) fn platform_notice(window: &web_sys::Window, message: &str) {
    let _ = window.alert_with_message(message);
    record_shell_error(message);
}

/// Wires the form, the delegated result-link clicks, the success-row
/// toggle, and the alert dismiss control. Each closure lives in its
/// thread-local slot for the lifetime of the page.
pub(super) fn install_page_handlers(document: &Document) -> Result<(), String> {
    let form = document
        .query_selector(SUBMIT_FORM_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| "submission form is unavailable".to_string())?;

    FORM_SUBMIT_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event| {
            event.prevent_default();
            let inputs = with_view(|view| (view.url_value(), view.selector_value()));
            if let Some((url, selector)) = inputs {
                submit_fetch(&url, &selector);
            }
        }));
        let _ = form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    // Result links arrive over the stream after load (and reappear via
    // history restores), so the click handler is delegated at the document.
    RESULT_LINK_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event| {
            intercept_result_link_click(event);
        }));
        let _ = document.add_event_listener_with_callback_and_bool(
            "click",
            callback.as_ref().unchecked_ref(),
            true,
        );
        *slot.borrow_mut() = Some(callback);
    });

    let results_control = with_view(|view| view.results_control().clone())
        .ok_or_else(|| "results toggle control is unavailable".to_string())?;
    RESULTS_TOGGLE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            let _ = with_view(|view| view.toggle_success_rows());
        }));
        let _ = results_control
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    if let Ok(Some(dismiss)) = document.query_selector(ALERT_DISMISS_SELECTOR) {
        ALERT_DISMISS_HANDLER.with(|slot| {
            if slot.borrow().is_some() {
                return;
            }
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event| {
                dismiss_alert(&event);
            }));
            let _ =
                dismiss.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            *slot.borrow_mut() = Some(callback);
        });
    }

    Ok(())
}

fn intercept_result_link_click(event: web_sys::Event) {
    let Some(anchor) = result_link_from_event(&event) else {
        return;
    };
    event.prevent_default();
    let url = anchor.text_content().unwrap_or_default();
    submit_fetch(&url, "");
}

fn result_link_from_event(event: &web_sys::Event) -> Option<HtmlAnchorElement> {
    let composed_path = event.composed_path();
    for index in 0..composed_path.length() {
        let value = composed_path.get(index);
        if let Ok(anchor) = value.dyn_into::<HtmlAnchorElement>() {
            if anchor.class_list().contains(RESULT_LINK_CLASS) {
                return Some(anchor);
            }
        }
    }
    None
}

fn dismiss_alert(event: &web_sys::Event) {
    let Some(target) = event.target() else {
        return;
    };
    let Ok(element) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    let Some(parent) = element.parent_element() else {
        return;
    };
    if let Ok(parent) = parent.dyn_into::<HtmlElement>() {
        dom::hide_element(&parent);
    }
}

/// Startup navigation: a `url=` query parameter schedules one auto-fetch
/// after the fixed delay; otherwise the current (empty) page state becomes
/// the base entry of the navigation stack.
pub(super) fn run_startup_navigation(window: &web_sys::Window) {
    let search = window.location().search().unwrap_or_default();
    if let Some(auto) = parse_search(&search) {
        spawn_local(async move {
            // Allow time for the stream subscription to register.
            sleep(Duration::from_millis(STARTUP_FETCH_DELAY_MS)).await;
            submit_fetch(&auto.url, auto.selector.as_deref().unwrap_or_default());
        });
    } else if let Some(snapshot) = with_view(|view| NavigationState::capture(view)) {
        push_navigation_state(&snapshot, None);
    }
}
