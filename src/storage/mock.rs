//! テスト用モックストア

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// メモリ上のストア
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値を持つストアを作成
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// 現在の値を直接参照
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// すべての操作が失敗するストア
#[derive(Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(AilpError::Storage("read failed".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(AilpError::Storage("write failed".to_string()))
    }
}
