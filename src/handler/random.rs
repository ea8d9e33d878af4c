use crate::app::AppState;
use crate::chart::BarChart;
use crate::domain::{NameTable, TopKSelection, rank};
use crate::error::AppError;
use crate::port::{Predictor, RecordSource};
use crate::selector::pick;
use crate::view;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, info};

/// Everything the random page shows.
#[derive(Debug, Clone)]
pub struct RandomPrediction {
    pub record: String,
    pub video_id: String,
    pub class_count: usize,
    pub top: TopKSelection,
}

impl RandomPrediction {
    pub fn chart_title(&self) -> String {
        format!("ID {} Top K Probabilities", self.video_id)
    }
}

/// Pick a random example from a random record file, score it and rank the result.
pub async fn predict_random(
    records: &dyn RecordSource,
    predictor: &dyn Predictor,
    names: &NameTable,
    top_k: usize,
) -> Result<RandomPrediction, AppError> {
    // ThreadRng is not Send; keep it out of scope across awaits.
    let files = records.list_records().await?;
    let record = {
        let mut rng = rand::rng();
        pick(&files, &mut rng)?.clone()
    };

    let examples = records.read_examples(&record).await?;
    let example = {
        let mut rng = rand::rng();
        pick(&examples, &mut rng)?.clone()
    };

    let result = predictor.predict(example).await?;
    let top = rank(&result, names, top_k)?;

    Ok(RandomPrediction {
        record,
        video_id: result.subject_id,
        class_count: result.entries.len(),
        top,
    })
}

/// Handler for GET /random/
pub async fn random_handler(State(state): State<AppState>) -> Response {
    match predict_random(
        state.records.as_ref(),
        state.predictor.as_ref(),
        &state.names,
        state.top_k,
    )
    .await
    {
        Ok(prediction) => {
            info!(
                record = %prediction.record,
                video_id = %prediction.video_id,
                classes = prediction.class_count,
                "Rendered random prediction"
            );
            let chart = BarChart::new(prediction.chart_title(), &prediction.top);
            Html(view::prediction(
                &chart,
                prediction.class_count,
                &prediction.video_id,
            ))
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "An error occurred during a request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(view::internal_error(&e.to_string())),
            )
                .into_response()
        }
    }
}
