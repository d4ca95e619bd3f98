#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    PromptAdded,
    PromptUpdated,
    PromptDeleted,
    PromptCopied,
    PromptEnhanced,
    Search { term: String },
    CategoryFilter { category: String },
}

impl TelemetryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TelemetryEvent::PromptAdded => "prompt_added",
            TelemetryEvent::PromptUpdated => "prompt_updated",
            TelemetryEvent::PromptDeleted => "prompt_deleted",
            TelemetryEvent::PromptCopied => "prompt_copied",
            TelemetryEvent::PromptEnhanced => "prompt_enhanced",
            TelemetryEvent::Search { .. } => "search",
            TelemetryEvent::CategoryFilter { .. } => "category_filter",
        }
    }
}

/// Receives user interaction events. Must never fail the caller.
pub trait TelemetrySink {
    fn record(&self, event: TelemetryEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn record(&self, event: TelemetryEvent) {
        tracing::debug!(event = event.name(), detail = ?event, "telemetry");
    }
}
