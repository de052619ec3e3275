use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use super::request::ConsultationRequest;

/// Delay the simulated backend waits before accepting a booking.
pub const SIMULATED_LATENCY_MS: u32 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("could not encode booking: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected booking with status {status}")]
    Rejected { status: u16 },
}

/// Where a validated booking goes once the form hands it off.
pub trait SubmitTransport {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), TransportError>>;
}

/// Shared handle so transports can travel through component properties.
#[derive(Clone)]
pub struct Transport(pub Rc<dyn SubmitTransport>);

impl PartialEq for Transport {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Transport {
    pub fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), TransportError>> {
        self.0.submit(request)
    }
}

/// Stands in for a backend: waits, logs the booking, always accepts.
pub struct SimulatedTransport {
    pub latency_ms: u32,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self { latency_ms: SIMULATED_LATENCY_MS }
    }
}

impl SubmitTransport for SimulatedTransport {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), TransportError>> {
        let latency_ms = self.latency_ms;
        async move {
            gloo_timers::future::TimeoutFuture::new(latency_ms).await;
            let payload = serde_json::to_string(&request).map_err(|e| TransportError::Encode(e.to_string()))?;
            gloo_console::log!("Consultation booking data:", payload);
            Ok::<(), TransportError>(())
        }
        .boxed_local()
    }
}

/// Posts the booking as JSON.
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl SubmitTransport for HttpTransport {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), TransportError>> {
        let endpoint = self.endpoint.clone();
        async move {
            let response = Request::post(&endpoint)
                .json(&request)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            if response.ok() {
                info!("Consultation booking accepted by {}", endpoint);
                Ok(())
            } else {
                Err(TransportError::Rejected { status: response.status() })
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records every request and answers with a fixed result.
    pub struct StubTransport {
        pub result: Result<(), TransportError>,
        pub seen: RefCell<Vec<ConsultationRequest>>,
    }

    impl StubTransport {
        pub fn answering(result: Result<(), TransportError>) -> Self {
            Self { result, seen: RefCell::new(Vec::new()) }
        }
    }

    impl SubmitTransport for StubTransport {
        fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), TransportError>> {
            self.seen.borrow_mut().push(request);
            futures::future::ready(self.result.clone()).boxed_local()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StubTransport;
    use super::*;

    #[test]
    fn handles_compare_by_identity() {
        let stub: Rc<dyn SubmitTransport> = Rc::new(StubTransport::answering(Ok(())));
        let a = Transport(stub.clone());
        let b = Transport(stub);
        let c = Transport(Rc::new(StubTransport::answering(Ok(()))));
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn rejected_status_is_reported() {
        assert_eq!(
            TransportError::Rejected { status: 503 }.to_string(),
            "server rejected booking with status 503"
        );
    }
}
