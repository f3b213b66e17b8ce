//! # PIX Relay Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize tracing (optionally exporting spans over OTLP)
//! - Build the GhostsPays provider and the relay service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_hex::{RelayService, inbound::HttpServer};
use relay_provider::GhostsPaysProvider;

use config::{Config, LogFormat};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing; endpoint comes from OTEL_EXPORTER_OTLP_ENDPOINT
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("pix-relay"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    let otel = if config.otlp {
        Some(init_tracer()?)
    } else {
        None
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    let (json_logs, text_logs) = match config.log_format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Text => (None, Some(tracing_subscriber::fmt::layer())),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,relay_app=debug,relay_hex=debug,relay_provider=debug".into()
            }),
        )
        .with(json_logs)
        .with(text_logs)
        .with(telemetry)
        .init();

    tracing::info!("Starting PIX relay on port {}", config.port);
    tracing::info!(
        base_url = config.credentials.base_url(),
        company_id = config.credentials.company_id(),
        otlp = config.otlp,
        "Using GhostsPays provider"
    );

    let provider = GhostsPaysProvider::new(config.credentials);
    let service = RelayService::new(provider);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
