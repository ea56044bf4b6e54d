use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("fy_property_statds")
        .with_description("FY'S PROPERTY bot statistics")
        .with_unit("event")
        .build()
});

fn incr_statds(metric: &'static str, value: &'static str) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

pub fn incr_menu_option_statds(option: &'static str) {
    incr_statds("menu_option", option)
}

pub fn incr_dispatch_statds(outcome: &'static str) {
    incr_statds("dispatch", outcome)
}

pub fn incr_startup_notice_statds(outcome: &'static str) {
    incr_statds("startup_notice", outcome)
}
