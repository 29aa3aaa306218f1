//! Line-level parsing for the adjacency-matrix text format.
use arbor_core::Weight;

use crate::errors::MatrixProviderError;

pub(crate) fn parse_header(line: &str) -> Result<Vec<String>, MatrixProviderError> {
    let labels: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    if labels.is_empty() {
        return Err(MatrixProviderError::EmptyHeader);
    }
    Ok(labels)
}

pub(crate) fn parse_row(
    line: &str,
    row: usize,
    expected: usize,
) -> Result<Vec<Weight>, MatrixProviderError> {
    let values = line
        .split_whitespace()
        .enumerate()
        .map(|(column, token)| {
            token
                .parse::<Weight>()
                .map_err(|_| MatrixProviderError::InvalidValue {
                    row,
                    column,
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != expected {
        return Err(MatrixProviderError::InvalidRowLength {
            row,
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}
