//! Request and response bodies

use serde::{Deserialize, Deserializer, Serialize};

use crate::sort::{Batch, Sequence, SortOutcome};

/// Body of `POST /process-single` and `POST /process-concurrent`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRequest {
    /// Sequences to sort; absent or `null` means an empty batch, and a
    /// `null` sequence is an empty sequence
    #[serde(default, deserialize_with = "nullable_batch")]
    pub to_sort: Option<Batch>,
}

fn nullable_batch<'de, D>(deserializer: D) -> Result<Option<Batch>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<Sequence>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|batch| batch.into_iter().map(Option::unwrap_or_default).collect()))
}

impl SortRequest {
    /// Create a request for the given batch
    pub fn new(batch: Batch) -> Self {
        Self {
            to_sort: Some(batch),
        }
    }

    /// The batch to sort
    pub fn batch(&self) -> &[Sequence] {
        self.to_sort.as_deref().unwrap_or(&[])
    }
}

/// Response body carrying a strategy's outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResponse {
    /// Sorted sequences in input order
    pub sorted_arrays: Batch,
    /// Wall-clock cost of the strategy in nanoseconds
    pub time_ns: u64,
}

impl From<SortOutcome> for SortResponse {
    fn from(outcome: SortOutcome) -> Self {
        Self {
            sorted_arrays: outcome.sorted,
            time_ns: outcome.elapsed_ns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_missing_or_null_batch_is_empty() {
        let missing: SortRequest = serde_json::from_value(json!({})).unwrap();
        let null: SortRequest = serde_json::from_value(json!({ "to_sort": null })).unwrap();

        assert!(missing.batch().is_empty());
        assert!(null.batch().is_empty());
    }

    #[test]
    fn test_request_null_sequence_is_empty() {
        let request: SortRequest =
            serde_json::from_value(json!({ "to_sort": [[2, 1], null] })).unwrap();
        assert_eq!(request.batch(), &[vec![2, 1], vec![]]);
    }

    #[test]
    fn test_request_null_element_is_rejected() {
        let result = serde_json::from_value::<SortRequest>(json!({ "to_sort": [[1, null]] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_batch() {
        let request: SortRequest =
            serde_json::from_value(json!({ "to_sort": [[3, 1, 2], []] })).unwrap();
        assert_eq!(request.batch(), &[vec![3, 1, 2], vec![]]);
    }

    #[test]
    fn test_response_field_names() {
        let response = SortResponse::from(SortOutcome {
            sorted: vec![vec![1, 2, 3]],
            elapsed_ns: 42,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, json!({ "sorted_arrays": [[1, 2, 3]], "time_ns": 42 }));
    }
}
