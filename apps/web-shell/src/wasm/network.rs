use super::*;

/// Submits the fetch request to the server. Fire-and-forget: the results
/// come back over the event stream, not this response, so a transport
/// failure only lands in the diagnostics record.
pub(super) fn post_fetch_request(request: &FetchRequest) {
    let body = request.form_body();
    spawn_local(async move {
        match Request::post(LINKS_ENDPOINT)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body)
        {
            Ok(outbound) => {
                if let Err(error) = outbound.send().await {
                    record_shell_error(&format!("link fetch submission failed: {error}"));
                }
            }
            Err(error) => {
                record_shell_error(&format!("failed to build link fetch submission: {error}"));
            }
        }
    });
}
