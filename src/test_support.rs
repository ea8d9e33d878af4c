//! Shared test support utilities
//!
//! In-memory `RecordSource` and `Predictor` implementations for unit tests.

use crate::domain::PredictionResult;
use crate::error::AppError;
use crate::port::{Predictor, RecordSource};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Record files held in memory: file name -> examples.
pub struct MemoryRecords {
    files: BTreeMap<String, Vec<Vec<u8>>>,
}

impl MemoryRecords {
    pub fn new(files: impl IntoIterator<Item = (&'static str, Vec<Vec<u8>>)>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(name, examples)| (name.to_string(), examples))
                .collect(),
        }
    }
}

impl RecordSource for MemoryRecords {
    fn list_records(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, AppError>> + Send + '_>> {
        let names = self.files.keys().cloned().collect();
        Box::pin(async move { Ok(names) })
    }

    fn read_examples(
        &self,
        record: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Vec<u8>>, AppError>> + Send + '_>> {
        let examples = self
            .files
            .get(record)
            .cloned()
            .ok_or_else(|| AppError::NotFound(record.to_string()));
        Box::pin(async move { examples })
    }
}

/// Predictor returning a fixed result and recording the examples it saw.
pub struct MockPredictor {
    result: PredictionResult,
    seen: Mutex<Vec<Vec<u8>>>,
    should_fail: AtomicBool,
}

impl MockPredictor {
    pub fn new(result: PredictionResult) -> Self {
        Self {
            result,
            seen: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn seen(&self) -> Vec<Vec<u8>> {
        self.seen.lock().unwrap().clone()
    }
}

impl Predictor for MockPredictor {
    fn predict(
        &self,
        example: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, AppError>> + Send + '_>> {
        Box::pin(async move {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(AppError::Prediction("Mock prediction failure".to_string()));
            }
            self.seen.lock().unwrap().push(example);
            Ok(self.result.clone())
        })
    }
}
