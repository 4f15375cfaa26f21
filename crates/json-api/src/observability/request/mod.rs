//! Per-request span, request id, metrics and completion logging.

mod parent_context;
mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, debug, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Polled paths whose successful completions are logged at debug.
const QUIET_PATHS: &[&str] = &["/healthcheck"];

/// What a finished request is reported with.
#[derive(Debug)]
struct Exchange {
    request_id: String,
    method: String,
    path: String,
    route: String,
}

impl Exchange {
    fn span(&self, span_name: &str, remote_addr: &str) -> Span {
        tracing::info_span!(
            parent: None,
            "http.request",
            otel.name = %span_name,
            otel.kind = "server",
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            remote_addr = %remote_addr,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        )
    }

    fn finish(&self, span: &Span, status: StatusCode, elapsed: Duration) {
        let duration_ms = elapsed.as_millis();
        let threshold_ms = u128::from(settings::slow_request_threshold_ms());

        metrics::observe_request(&self.method, &self.route, status, elapsed.as_secs_f64());

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        let _entered = span.enter();

        if QUIET_PATHS.contains(&self.path.as_str()) && status.is_success() {
            debug!(status = status.as_u16(), duration_ms, "request.completed");
            return;
        }

        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                route = %self.route,
                request_id = %self.request_id,
                "server error response"
            );
        } else if status == StatusCode::CONFLICT {
            // Duplicate keys and refused decreases both land here.
            info!(route = %self.route, request_id = %self.request_id, "request conflicted");
        } else if status.is_client_error() {
            warn!(
                status = status.as_u16(),
                route = %self.route,
                request_id = %self.request_id,
                "client error response"
            );
        }

        if duration_ms > threshold_ms {
            warn!(
                route = %self.route,
                request_id = %self.request_id,
                duration_ms,
                threshold_ms,
                "slow request"
            );
        }
    }
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();
    let _in_flight = metrics::InFlight::enter();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let names = spans::request_span_name(&method, &path);

    let exchange = Exchange {
        request_id,
        method,
        path,
        route: names.otel_path,
    };

    let span = exchange.span(&names.otel_span_name, &req.remote_addr().to_string());

    if settings::otel_parent_propagation_enabled()
        && let Some(parent) = parent_context::extract_parent_context(req.headers())
        && let Err(source) = span.set_parent(parent)
    {
        warn!("failed to attach upstream trace context: {source}");
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    exchange.finish(
        &span,
        request_ids::response_status_or_ok(res.status_code),
        started.elapsed(),
    );
}
