//! Prometheus-backed metrics and HTTP exporter.
//!
//! This module defines a [`MetricsRegistry`] that owns a Prometheus
//! registry and the invocation metrics, and an async HTTP exporter that
//! serves `/metrics` using `hyper`.

use std::{convert::Infallible, net::SocketAddr, sync::Arc};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{
    Method, Request, Response, StatusCode, body::Incoming, header, server::conn::http1,
    service::service_fn,
};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use prometheus::{
    self, Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

/// Invocation-related Prometheus metrics.
#[derive(Clone)]
pub struct InvocationMetrics {
    /// Invocations dispatched to the handler, labelled by entry route.
    pub invocations_total: IntCounterVec,
    /// Time spent inside the handler per invocation, in seconds.
    pub invocation_seconds: Histogram,
    /// Requests refused before reaching the handler (e.g. malformed events).
    pub rejected_total: IntCounter,
}

impl InvocationMetrics {
    /// Registers invocation metrics into the given `Registry`.
    pub fn register(registry: &Registry) -> Result<Self, prometheus::Error> {
        let invocations_total = IntCounterVec::new(
            Opts::new(
                "invocations_total",
                "Total number of invocations dispatched to the handler",
            ),
            &["route"],
        )?;
        registry.register(Box::new(invocations_total.clone()))?;

        // Handler work is an in-memory serialization; buckets stay sub-millisecond heavy.
        let invocation_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "invocation_seconds",
                "Time spent in the handler per invocation in seconds",
            )
            .buckets(vec![
                0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1,
            ]),
        )?;
        registry.register(Box::new(invocation_seconds.clone()))?;

        let rejected_total = IntCounter::with_opts(Opts::new(
            "rejected_total",
            "Total number of requests rejected before reaching the handler",
        ))?;
        registry.register(Box::new(rejected_total.clone()))?;

        Ok(Self {
            invocations_total,
            invocation_seconds,
            rejected_total,
        })
    }

    /// Records one completed invocation on `route` that took `elapsed_secs`.
    pub fn record(&self, route: &str, elapsed_secs: f64) {
        self.invocations_total.with_label_values(&[route]).inc();
        self.invocation_seconds.observe(elapsed_secs);
    }
}

/// Wrapper around a Prometheus registry and the invocation metrics.
///
/// This is the handle passed around in a host. It can be wrapped in an
/// [`Arc`] and shared across tasks.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
    pub invocations: InvocationMetrics,
}

impl MetricsRegistry {
    /// Creates a new `MetricsRegistry` with a fresh underlying `Registry`
    /// and registers the invocation metrics.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("baseline".to_string()), None)?;
        let invocations = InvocationMetrics::register(&registry)?;
        Ok(Self {
            registry,
            invocations,
        })
    }

    /// Encodes all metrics in this registry into the Prometheus text format.
    pub fn gather_text(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::warn!("failed to encode Prometheus metrics: {e}");
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

/// Runs an HTTP server that exposes Prometheus metrics.
///
/// The server listens on `addr` and serves `GET /metrics` with the
/// Prometheus text exposition format. All other paths return 404.
pub async fn run_prometheus_http_server(
    metrics: Arc<MetricsRegistry>,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(addr).await?;

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let metrics = metrics.clone();

        tokio::spawn(async move {
            let svc = service_fn(move |req| {
                let metrics = metrics.clone();
                handle_request(req, metrics)
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, svc).await {
                tracing::warn!("prometheus HTTP server error: {err}");
            }
        });
    }
}

async fn handle_request(
    req: Request<Incoming>,
    metrics: Arc<MetricsRegistry>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(route(req.method(), req.uri().path(), &metrics))
}

fn route(method: &Method, path: &str, metrics: &MetricsRegistry) -> Response<Full<Bytes>> {
    match (method, path) {
        (&Method::GET, "/metrics") => {
            let mut resp = Response::new(Full::new(Bytes::from(metrics.gather_text())));
            resp.headers_mut().insert(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("text/plain; version=0.0.4"),
            );
            resp
        }
        _ => {
            let mut resp = Response::new(Full::new(Bytes::from_static(b"not found")));
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        }
    }
}
