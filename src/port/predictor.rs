use crate::domain::PredictionResult;
use crate::error::AppError;
use std::future::Future;
use std::pin::Pin;

/// Remote model that scores one serialized example.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
pub trait Predictor: Send + Sync {
    fn predict(
        &self,
        example: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, AppError>> + Send + '_>>;
}
