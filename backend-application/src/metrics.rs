use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_created: AtomicU64,
    events_rejected: AtomicU64,
    asset_reader_updates: AtomicU64,
}

impl Metrics {
    pub fn record_event_created(&self, reader_changed: bool) {
        self.events_created.fetch_add(1, Ordering::Relaxed);
        if reader_changed {
            self.asset_reader_updates.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_event_rejected(&self) {
        self.events_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let created = self.events_created.load(Ordering::Relaxed);
        let rejected = self.events_rejected.load(Ordering::Relaxed);
        let updates = self.asset_reader_updates.load(Ordering::Relaxed);

        format!(
            "# TYPE tagtrail_events_created_total counter\n\
tagtrail_events_created_total {}\n\
# TYPE tagtrail_events_rejected_total counter\n\
tagtrail_events_rejected_total {}\n\
# TYPE tagtrail_asset_reader_updates_total counter\n\
tagtrail_asset_reader_updates_total {}\n",
            created, rejected, updates
        )
    }
}
