/// Stock event handlers registered by the composition root
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::event_dispatcher::EventHandler;
use crate::shared::domain::DomainEvent;

/// Writes one notification line per event
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventHandler;

#[async_trait]
impl EventHandler for LoggingEventHandler {
    fn name(&self) -> &str {
        "logging"
    }

    async fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        info!(
            event_id = %event.event_id(),
            occurred_at = %event.occurred_at(),
            "Event '{}': {}",
            event.event_type(),
            event.payload()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub event_id: Uuid,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

/// Bounded in-memory record of delivered events, oldest dropped first
#[derive(Debug, Clone)]
pub struct AuditTrail {
    entries: Arc<RwLock<VecDeque<AuditEntry>>>,
    capacity: usize,
}

impl AuditTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity.min(1024)))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub async fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().await.iter().cloned().collect()
    }

    pub async fn entries_named(&self, name: &str) -> Vec<AuditEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.name == name)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait]
impl EventHandler for AuditTrail {
    fn name(&self) -> &str {
        "audit-trail"
    }

    async fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        if self.capacity == 0 {
            return Ok(());
        }

        let entry = AuditEntry {
            event_id: event.event_id(),
            name: event.event_type().to_string(),
            occurred_at: event.occurred_at(),
            payload: event.payload(),
        };

        let mut entries = self.entries.write().await;
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug)]
    struct Tick(u32);

    impl DomainEvent for Tick {
        fn occurred_at(&self) -> DateTime<Utc> {
            Utc::now()
        }
        fn event_id(&self) -> Uuid {
            Uuid::new_v4()
        }
        fn event_type(&self) -> &'static str {
            "tick"
        }
        fn payload(&self) -> serde_json::Value {
            serde_json::json!({ "n": self.0 })
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[tokio::test]
    async fn audit_trail_drops_oldest_beyond_capacity() {
        let trail = AuditTrail::new(2);

        for n in 1..=3 {
            trail.handle(&Tick(n)).await.unwrap();
        }

        let entries = trail.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].payload["n"], 2);
        assert_eq!(entries[1].payload["n"], 3);
        assert_eq!(entries[1].name, "tick");
    }

    #[tokio::test]
    async fn zero_capacity_records_nothing() {
        let trail = AuditTrail::new(0);
        trail.handle(&Tick(1)).await.unwrap();
        assert!(trail.is_empty().await);
    }

    #[tokio::test]
    async fn logging_handler_never_fails() {
        assert!(LoggingEventHandler.handle(&Tick(7)).await.is_ok());
    }
}
