#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use pantry_recipes::catalog::{CatalogError, RecipeCatalog};
use pantry_recipes::inventory::{CalendarShelfLife, InventoryItem, ItemStatus};
use pantry_recipes::types::RecipeRecord;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn shelf_life() -> CalendarShelfLife {
    CalendarShelfLife::on(today())
}

/// Item expiring `days` from the fixed test day.
pub fn item(name: &str, days: i64) -> InventoryItem {
    InventoryItem::new(name, today() + Duration::days(days))
}

pub fn item_with_status(name: &str, days: i64, status: ItemStatus) -> InventoryItem {
    item(name, days).with_status(status)
}

pub fn recipe(id: &str, name: &str) -> RecipeRecord {
    RecipeRecord::new(id, name, format!("https://img.example/{id}.jpg"))
}

/// Answers from a fixed table keyed by the comma-joined keywords and
/// records every call. Unknown filters answer with no records.
#[derive(Default)]
pub struct ScriptedCatalog {
    responses: HashMap<String, Result<Vec<RecipeRecord>, CatalogError>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, filter: &str, records: Vec<RecipeRecord>) -> Self {
        self.responses.insert(filter.to_string(), Ok(records));
        self
    }

    pub fn fail(mut self, filter: &str, error: CatalogError) -> Self {
        self.responses.insert(filter.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_filters(&self) -> Vec<String> {
        self.calls().iter().map(|k| k.join(",")).collect()
    }
}

#[async_trait]
impl RecipeCatalog for ScriptedCatalog {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn query_by_ingredients(
        &self,
        keywords: &[String],
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        assert!(!keywords.is_empty(), "catalog must never be queried without keywords");
        self.calls.lock().unwrap().push(keywords.to_vec());

        self.responses
            .get(&keywords.join(","))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Answers the first call with nothing and every later call with
/// `records`, whatever the filter. Separates tiers that send the same
/// filter, like combined and pairwise with two keywords.
pub struct FirstCallEmpty {
    pub inner: ScriptedCatalog,
    pub records: Vec<RecipeRecord>,
}

impl FirstCallEmpty {
    pub fn new(records: Vec<RecipeRecord>) -> Self {
        Self {
            inner: ScriptedCatalog::new(),
            records,
        }
    }
}

#[async_trait]
impl RecipeCatalog for FirstCallEmpty {
    fn name(&self) -> &str {
        "first-call-empty"
    }

    async fn query_by_ingredients(
        &self,
        keywords: &[String],
    ) -> Result<Vec<RecipeRecord>, CatalogError> {
        let first = self.inner.calls().is_empty();
        self.inner.query_by_ingredients(keywords).await?;
        if first {
            Ok(Vec::new())
        } else {
            Ok(self.records.clone())
        }
    }
}
