use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::{Explanation, ExplanationKind, ExplanationService};

/// Sequence number handed out when a request is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter shared by clones.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    last_issued: Arc<AtomicU64>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.last_issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    #[must_use]
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.last_issued.load(Ordering::Acquire) == ticket.0
    }
}

/// An explanation that made it to the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationEntry {
    pub ticket: RequestTicket,
    pub kind: ExplanationKind,
    pub topic: String,
    pub explanation: Explanation,
}

/// Latest-issued-wins front for `ExplanationService`.
///
/// Requests are not cancelled once sent. When an older request finishes
/// after a newer one was issued, its response is dropped. Holding on to the
/// accepted entry is the caller's job.
#[derive(Clone)]
pub struct ExplanationFeed {
    service: Arc<ExplanationService>,
    sequencer: RequestSequencer,
}

impl ExplanationFeed {
    #[must_use]
    pub fn new(service: Arc<ExplanationService>) -> Self {
        Self {
            service,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Issue a request now and return the future that completes it.
    ///
    /// The ticket is taken before this returns, so issue order is call
    /// order regardless of when the futures are polled. The future resolves
    /// to `Some(entry)` only if no newer request was issued meanwhile.
    pub fn request(
        &self,
        kind: ExplanationKind,
        topic: &str,
        context: &str,
    ) -> impl Future<Output = Option<ExplanationEntry>> + Send + 'static {
        let ticket = self.sequencer.issue();
        let service = Arc::clone(&self.service);
        let sequencer = self.sequencer.clone();
        let topic = topic.to_owned();
        let context = context.to_owned();

        async move {
            let explanation = service.request(kind, &topic, &context).await;
            if !sequencer.is_latest(ticket) {
                debug!(ticket = ticket.value(), topic = %topic, "dropping stale explanation");
                return None;
            }
            Some(ExplanationEntry {
                ticket,
                kind,
                topic,
                explanation,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert!(!seq.is_latest(a));
        assert!(seq.is_latest(b));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = RequestSequencer::new();
        let other = seq.clone();
        let a = seq.issue();
        let b = other.issue();
        assert_eq!(b.value(), a.value() + 1);
        assert!(seq.is_latest(b));
    }
}
