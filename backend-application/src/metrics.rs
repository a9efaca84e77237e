use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_created: AtomicU64,
    events_deleted: AtomicU64,
    estimate_requests: AtomicU64,
    estimate_errors: AtomicU64,
}

impl Metrics {
    pub fn record_created(&self) {
        self.events_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deleted(&self, count: usize) {
        self.events_deleted.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_estimate_request(&self) {
        self.estimate_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_estimate_error(&self) {
        self.estimate_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let created = self.events_created.load(Ordering::Relaxed);
        let deleted = self.events_deleted.load(Ordering::Relaxed);
        let requests = self.estimate_requests.load(Ordering::Relaxed);
        let errors = self.estimate_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE carbon_events_created_total counter\n\
carbon_events_created_total {}\n\
# TYPE carbon_events_deleted_total counter\n\
carbon_events_deleted_total {}\n\
# TYPE carbon_estimate_requests_total counter\n\
carbon_estimate_requests_total {}\n\
# TYPE carbon_estimate_errors_total counter\n\
carbon_estimate_errors_total {}\n",
            created, deleted, requests, errors
        )
    }
}
