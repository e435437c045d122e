use super::*;

pub(super) fn event_source_supported(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("EventSource")).unwrap_or(false)
}

/// Opens the session's server-push channel and wires its named events into
/// the stream dispatcher. The returned handle is parked in `LINK_STREAM`
/// so the connection lives until the page unloads; there is no reconnect
/// path, a transport error leaves the error surface up for good.
pub(super) fn open_link_stream(session: &PageSession) -> Result<EventSource, String> {
    let link_stream = EventSource::new(&session.stream_url())
        .map_err(|_| "failed to open the link event stream".to_string())?;

    let results = Closure::<dyn FnMut(MessageEvent)>::wrap(Box::new(
        move |event: MessageEvent| {
            handle_stream_event(StreamEvent::Results(message_text(&event)));
        },
    ));
    link_stream
        .add_event_listener_with_callback(RESULTS_EVENT, results.as_ref().unchecked_ref())
        .map_err(|_| "failed to subscribe to results events".to_string())?;
    STREAM_RESULTS_HANDLER.with(|slot| *slot.borrow_mut() = Some(results));

    let end_message = Closure::<dyn FnMut(MessageEvent)>::wrap(Box::new(
        move |event: MessageEvent| {
            handle_stream_event(StreamEvent::EndMessage(message_text(&event)));
        },
    ));
    link_stream
        .add_event_listener_with_callback(END_MESSAGE_EVENT, end_message.as_ref().unchecked_ref())
        .map_err(|_| "failed to subscribe to end-message events".to_string())?;
    STREAM_END_MESSAGE_HANDLER.with(|slot| *slot.borrow_mut() = Some(end_message));

    let message = Closure::<dyn FnMut(MessageEvent)>::wrap(Box::new(
        move |event: MessageEvent| {
            handle_stream_event(StreamEvent::Message(message_text(&event)));
        },
    ));
    link_stream.set_onmessage(Some(message.as_ref().unchecked_ref()));
    STREAM_MESSAGE_HANDLER.with(|slot| *slot.borrow_mut() = Some(message));

    let error = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
        move |event: web_sys::Event| {
            handle_stream_event(StreamEvent::StreamError(error_text(&event)));
        },
    ));
    link_stream.set_onerror(Some(error.as_ref().unchecked_ref()));
    STREAM_ERROR_HANDLER.with(|slot| *slot.borrow_mut() = Some(error));

    Ok(link_stream)
}

fn message_text(event: &MessageEvent) -> String {
    event.data().as_string().unwrap_or_default()
}

// Error events usually carry no payload; surface whatever text is there.
fn error_text(event: &web_sys::Event) -> String {
    event
        .dyn_ref::<MessageEvent>()
        .and_then(|message| message.data().as_string())
        .unwrap_or_default()
}
