use async_trait::async_trait;
use dashmap::DashMap;
use domains::KeyValueSlot;

/// In-process `KeyValueSlot` for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    slots: DashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates `key`, e.g. to simulate a snapshot left by a previous run.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots.get(key).map(|v| v.value().clone())
    }
}

#[async_trait]
impl KeyValueSlot for MemorySlot {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot() {
        let slot = MemorySlot::new().with_value("a", "1");
        tokio_test::block_on(async {
            assert_eq!(slot.get("a").await.unwrap().as_deref(), Some("1"));
            assert_eq!(slot.get("b").await.unwrap(), None);
            slot.set("b", "2").await.unwrap();
        });
        assert_eq!(slot.peek("b").as_deref(), Some("2"));
    }
}
