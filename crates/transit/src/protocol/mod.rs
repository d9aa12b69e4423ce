//! Request/response protocol over the document format.
//!
//! A run is two passes: every base request is applied to a fresh
//! [`TransportCatalogue`], then every stat request is answered in input
//! order. Unknown buses and stops are ordinary `"not found"` answers; a
//! malformed document or request aborts the run.

pub mod request;
pub mod response;
pub mod schema;

pub use request::{BaseRequest, EntityKind, RequestBatch, StatRequest};
pub use response::{responses_to_value, Response, ResponseBody};

use tracing::debug;

use crate::models::{traits::TransitProvider, types::*};
use crate::provider::TransportCatalogue;

/// Apply one base request
pub fn apply(catalogue: &mut TransportCatalogue, request: BaseRequest) {
    match request {
        BaseRequest::Bus(bus) => {
            debug!(bus = %bus.id, stops = bus.stop_count(), "adding bus");
            catalogue.add_bus(bus);
        }
        BaseRequest::Stop(stop) => {
            debug!(stop = %stop.id, "adding stop");
            catalogue.add_stop(stop);
        }
    }
}

/// Answer one stat request
pub fn answer(provider: &dyn TransitProvider, request: &StatRequest) -> Result<Response> {
    let body = match request.kind {
        EntityKind::Bus => provider.bus_stat(&request.name).map(ResponseBody::Bus),
        EntityKind::Stop => provider.stop_stat(&request.name).map(ResponseBody::Stop),
    };

    let body = match body {
        Ok(body) => body,
        Err(e) if e.is_not_found() => {
            debug!(id = request.id, "{}", e);
            ResponseBody::NotFound {
                kind: request.kind,
                name: request.name.clone(),
            }
        }
        Err(e) => return Err(e),
    };

    Ok(Response {
        request_id: request.id,
        body,
    })
}

/// Apply base requests in order to a fresh catalogue
pub fn build_catalogue(requests: impl IntoIterator<Item = BaseRequest>) -> TransportCatalogue {
    let mut catalogue = TransportCatalogue::new();
    for request in requests {
        apply(&mut catalogue, request);
    }
    catalogue
}

/// Answer stat requests in order. Stops at the first fatal error.
pub fn answer_all(provider: &dyn TransitProvider, requests: &[StatRequest]) -> Result<Vec<Response>> {
    debug!(count = requests.len(), "answering stat requests");
    requests
        .iter()
        .map(|request| answer(provider, request))
        .collect()
}

impl RequestBatch {
    /// Ingest every base request, then answer every stat request
    pub fn execute(self) -> Result<Vec<Response>> {
        debug!(count = self.base.len(), "applying base requests");
        let catalogue = build_catalogue(self.base);
        answer_all(&catalogue, &self.stat)
    }
}

/// Run a whole input document and return the serialized response document
pub fn process_document(input: &str) -> Result<String> {
    let responses = RequestBatch::parse(input)?.execute()?;
    Ok(responses_to_value(&responses)?.to_string())
}
