//! Fetch dispatch and response handling

use crate::model::{FetchRequest, FetchResponse};
use super::AppController;

impl AppController {
    /// Start every section's loads.
    pub fn start(&mut self) {
        let requests = self.model.start_all();
        tracing::info!(requests = requests.len(), "Starting section loads");
        for (section, request) in requests {
            self.dispatch(section, request);
        }
    }

    /// Re-issue the focused section's loads, the only retry path after a failure.
    pub fn reload_focused(&mut self) {
        let index = self.model.focused_index();
        let requests = match self.model.focused_mut() {
            Some(section) => section.reload(),
            None => return,
        };
        for request in requests {
            self.dispatch(index, request);
        }
    }

    pub fn set_items_endpoint(&mut self, section: usize, endpoint: &str) {
        let request = self
            .model
            .section_mut(section)
            .and_then(|s| s.set_items_endpoint(endpoint));
        if let Some(request) = request {
            self.dispatch(section, request);
        }
    }

    pub fn set_taxonomy_endpoint(&mut self, section: usize, endpoint: Option<&str>) {
        let request = self
            .model
            .section_mut(section)
            .and_then(|s| s.set_taxonomy_endpoint(endpoint));
        if let Some(request) = request {
            self.dispatch(section, request);
        }
    }

    /// Run one request on its own task. The section state is never touched
    /// here; the result comes back through the response channel.
    pub(crate) fn dispatch(&self, section: usize, request: FetchRequest) {
        let source = self.source.clone();
        let tx = self.responses_tx.clone();
        tracing::debug!(
            section,
            kind = ?request.kind,
            token = request.token.value(),
            endpoint = %request.endpoint,
            "Dispatching fetch"
        );

        tokio::spawn(async move {
            let result = source.fetch_json(&request.endpoint).await;
            let response = FetchResponse {
                section,
                kind: request.kind,
                token: request.token,
                result,
            };
            // A closed channel means the UI loop has exited
            let _ = tx.send(response);
        });
    }

    /// Apply every response that has arrived. Returns `true` if any did.
    pub fn drain_responses(&mut self) -> bool {
        let mut received = false;
        while let Ok(response) = self.responses_rx.try_recv() {
            self.apply_response(response);
            received = true;
        }
        received
    }

    /// Wait for the next response and apply it.
    pub async fn process_next_response(&mut self) -> Option<bool> {
        let response = self.responses_rx.recv().await?;
        Some(self.apply_response(response))
    }

    fn apply_response(&mut self, response: FetchResponse) -> bool {
        let section = response.section;
        let kind = response.kind;
        let applied = self.model.apply(response);
        if !applied {
            tracing::debug!(section, ?kind, "Ignored stale fetch response");
        }
        applied
    }
}
