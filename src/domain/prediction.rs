use crate::domain::ClassId;
use crate::error::AppError;
use serde::Deserialize;

/// One class label paired with the score the model gave it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScore {
    pub label: ClassId,
    pub score: f32,
}

/// Decoded output of one prediction call.
///
/// Scores and labels arrive as two parallel arrays; they are zipped into
/// `entries` at decode time so they cannot drift apart afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub subject_id: String,
    pub entries: Vec<LabelScore>,
}

/// Wire shape of one element of the `predictions` array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPrediction {
    pub video_id: String,
    pub predictions: Vec<f32>,
    pub class_indexes: Vec<ClassId>,
}

impl PredictionResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a single prediction object.
    ///
    /// # Errors
    /// `Format` if required fields are missing or mistyped, the arrays differ
    /// in length, or a score is outside `[0, 1]`.
    pub fn from_json(value: serde_json::Value) -> Result<Self, AppError> {
        let raw: RawPrediction = serde_json::from_value(value)
            .map_err(|e| AppError::Format(format!("prediction payload: {e}")))?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawPrediction> for PredictionResult {
    type Error = AppError;

    fn try_from(raw: RawPrediction) -> Result<Self, Self::Error> {
        if raw.predictions.len() != raw.class_indexes.len() {
            return Err(AppError::Format(format!(
                "{} scores but {} class indexes",
                raw.predictions.len(),
                raw.class_indexes.len()
            )));
        }

        let entries = raw
            .class_indexes
            .into_iter()
            .zip(raw.predictions)
            .map(|(label, score)| {
                if (0.0..=1.0).contains(&score) {
                    Ok(LabelScore { label, score })
                } else {
                    Err(AppError::Format(format!(
                        "score {score} for class {label} is outside [0, 1]"
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            subject_id: raw.video_id,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_pairs_arrays_positionally() {
        let result = PredictionResult::from_json(json!({
            "video_id": "abcd",
            "predictions": [0.75, 0.5],
            "class_indexes": [3, 9]
        }))
        .unwrap();

        assert_eq!(result.subject_id, "abcd");
        assert_eq!(
            result.entries,
            vec![
                LabelScore { label: 3, score: 0.75 },
                LabelScore { label: 9, score: 0.5 },
            ]
        );
    }

    #[test]
    fn test_length_mismatch_is_format_error() {
        let err = PredictionResult::from_json(json!({
            "video_id": "abcd",
            "predictions": [0.75, 0.5],
            "class_indexes": [3]
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn test_out_of_range_score_is_format_error() {
        let err = PredictionResult::from_json(json!({
            "video_id": "abcd",
            "predictions": [1.5],
            "class_indexes": [3]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn test_missing_field_is_format_error() {
        let err = PredictionResult::from_json(json!({
            "predictions": [0.1],
            "class_indexes": [3]
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn test_negative_label_decodes() {
        let result = PredictionResult::from_json(json!({
            "video_id": "abcd",
            "predictions": [0.1],
            "class_indexes": [-1]
        }))
        .unwrap();
        assert_eq!(result.entries[0].label, -1);
    }

    #[test]
    fn test_fractional_label_is_format_error() {
        let err = PredictionResult::from_json(json!({
            "video_id": "abcd",
            "predictions": [0.1],
            "class_indexes": [1.5]
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Format(_)));
    }

    #[test]
    fn test_empty_arrays_decode_to_empty_result() {
        let result = PredictionResult::from_json(json!({
            "video_id": "abcd",
            "predictions": [],
            "class_indexes": []
        }))
        .unwrap();
        assert!(result.is_empty());
    }
}
