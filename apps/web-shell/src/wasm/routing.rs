use super::*;

pub(super) fn history_supported(window: &web_sys::Window) -> bool {
    let Ok(history) = window.history() else {
        return false;
    };
    js_sys::Reflect::has(&history, &JsValue::from_str("pushState")).unwrap_or(false)
}

pub(super) fn install_popstate_handler(window: &web_sys::Window) {
    POPSTATE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(PopStateEvent)>::wrap(Box::new(
            move |event: PopStateEvent| {
                // Some browsers fire a synthetic popstate on first load with
                // no state attached; that traversal is a no-op.
                let Some(raw) = event.state().as_string() else {
                    return;
                };
                match NavigationState::from_json(&raw) {
                    Ok(snapshot) => {
                        let _ = with_view(|view| snapshot.restore(view));
                    }
                    Err(error) => {
                        record_shell_error(&format!("history state decode failed: {error}"));
                    }
                }
            },
        ));
        let _ =
            window.add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

/// Installs a completed fetch on the navigation stack under the address the
/// server assigned to it.
pub(super) fn push_completed_fetch(completed: &CompletedFetch) {
    push_navigation_state(&completed.snapshot, Some(&completed.address));
}

pub(super) fn push_navigation_state(snapshot: &NavigationState, address: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let raw = match snapshot.to_json() {
        Ok(raw) => raw,
        Err(error) => {
            record_shell_error(&format!("history state encode failed: {error}"));
            return;
        }
    };
    let _ = history.push_state_with_url(&JsValue::from_str(&raw), "", address);
}
