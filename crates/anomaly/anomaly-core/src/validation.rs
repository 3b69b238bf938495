//! Feature-row validation.

use anomaly_spi::{AnomalyError, Result};

/// Check that rows are non-empty, rectangular and finite.
///
/// Returns the feature count.
pub fn validate_rows(rows: &[Vec<f64>]) -> Result<usize> {
    let width = match rows.first() {
        Some(first) => first.len(),
        None => {
            return Err(AnomalyError::InsufficientData {
                required: 1,
                got: 0,
            })
        }
    };
    if width == 0 {
        return Err(AnomalyError::InvalidInput {
            row: 0,
            reason: "row has no features".to_string(),
        });
    }

    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(AnomalyError::InvalidInput {
                row,
                reason: format!("expected {} features, got {}", width, values.len()),
            });
        }
        if let Some(feature) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnomalyError::InvalidInput {
                row,
                reason: format!("feature {} is not finite", feature),
            });
        }
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(validate_rows(&rows).unwrap(), 2);
    }

    #[test]
    fn test_empty_rows() {
        assert!(matches!(
            validate_rows(&[]),
            Err(AnomalyError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            validate_rows(&rows),
            Err(AnomalyError::InvalidInput { row: 1, .. })
        ));
    }

    #[test]
    fn test_nan_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![f64::NAN, 1.0]];
        assert!(matches!(
            validate_rows(&rows),
            Err(AnomalyError::InvalidInput { row: 2, .. })
        ));
    }
}
