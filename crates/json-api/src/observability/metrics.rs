//! Prometheus metrics: HTTP traffic plus stock movement outcomes.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

use garage_app::domain::products::{ProductsServiceError, data::MovementDirection};

const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

#[derive(Debug)]
struct GarageMetrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_latency: HistogramVec,
    http_in_flight: IntGauge,
    stock_movements: IntCounterVec,
}

static METRICS: OnceLock<Option<GarageMetrics>> = OnceLock::new();

fn metrics() -> Option<&'static GarageMetrics> {
    METRICS
        .get_or_init(|| match GarageMetrics::new() {
            Ok(metrics) => Some(metrics),
            Err(source) => {
                error!("metrics disabled, registration failed: {source}");
                None
            }
        })
        .as_ref()
}

fn register<C>(registry: &Registry, collector: C) -> prometheus::Result<C>
where
    C: Collector + Clone + 'static,
{
    registry.register(Box::new(collector.clone()))?;

    Ok(collector)
}

impl GarageMetrics {
    fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("garage".to_owned()), None)?;

        let http_requests = register(
            &registry,
            IntCounterVec::new(
                Opts::new("http_requests_total", "HTTP requests by route and status."),
                &["method", "route", "status_class", "status_code"],
            )?,
        )?;

        let http_latency = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new("http_request_duration_seconds", "HTTP latency by route.")
                    .buckets(LATENCY_BUCKETS.to_vec()),
                &["method", "route"],
            )?,
        )?;

        let http_in_flight = register(
            &registry,
            IntGauge::new("http_requests_in_flight", "HTTP requests being served.")?,
        )?;

        let stock_movements = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "stock_movements_total",
                    "Stock movement requests by direction and outcome.",
                ),
                &["direction", "outcome"],
            )?,
        )?;

        Ok(Self {
            registry,
            http_requests,
            http_latency,
            http_in_flight,
            stock_movements,
        })
    }
}

/// Keeps `http_requests_in_flight` raised while alive.
#[derive(Debug)]
pub(super) struct InFlight(Option<&'static IntGauge>);

impl InFlight {
    pub(super) fn enter() -> Self {
        let gauge = metrics().map(|metrics| &metrics.http_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: StatusCode, seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .http_requests
        .with_label_values(&[method, route, status_class(status), status.as_str()])
        .inc();

    metrics
        .http_latency
        .with_label_values(&[method, route])
        .observe(seconds);
}

/// Count one movement request by how the service answered it.
pub(crate) fn observe_stock_movement<T>(
    direction: MovementDirection,
    result: &Result<T, ProductsServiceError>,
) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .stock_movements
        .with_label_values(&[direction_label(direction), movement_outcome(result)])
        .inc();
}

fn direction_label(direction: MovementDirection) -> &'static str {
    match direction {
        MovementDirection::Increase => "increase",
        MovementDirection::Decrease => "decrease",
    }
}

fn movement_outcome<T>(result: &Result<T, ProductsServiceError>) -> &'static str {
    match result {
        Ok(_) => "applied",
        Err(ProductsServiceError::InsufficientStock { .. }) => "insufficient_stock",
        Err(ProductsServiceError::NotFound) => "not_found",
        Err(ProductsServiceError::Invalid(_)) => "invalid",
        Err(_) => "error",
    }
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);
        return;
    };

    let encoder = TextEncoder::new();
    let mut body = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut body) {
        error!("failed to encode metrics: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    res.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4"),
    );
    res.render(String::from_utf8_lossy(&body).into_owned());
}
