//! Line codec for the external evaluation protocol.
//!
//! A request is one line of whitespace-separated real variable values. A
//! response is one line holding the objectives followed by the constraints.

use crate::error::{MoeaError, ProtocolErrorKind, Result};
use crate::solution::Solution;

/// Serializes the variables of `solution` as a request line (no terminator).
///
/// Values are written in Rust's shortest round-trip representation, so the
/// receiver parses back the exact same `f64`.
///
/// # Errors
///
/// Returns a configuration error if any variable is not real.
pub fn encode_request(solution: &Solution) -> Result<String> {
    let mut line = String::new();
    for (i, variable) in solution.variables().iter().enumerate() {
        let value = variable.as_real().ok_or_else(|| {
            MoeaError::config(format!(
                "variable {i} is {}; only real variables can be sent to an external evaluator",
                variable.kind()
            ))
        })?;
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&value.to_string());
    }
    Ok(line)
}

/// Parses a response line into `(objectives, constraints)`.
///
/// Tokens are separated by runs of whitespace; a trailing `\r` or `\n` is
/// ignored. `inf` is accepted, `NaN` is not.
pub fn decode_response(
    line: &str,
    num_objectives: usize,
    num_constraints: usize,
) -> std::result::Result<(Vec<f64>, Vec<f64>), ProtocolErrorKind> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let expected = num_objectives + num_constraints;
    if tokens.len() != expected {
        return Err(ProtocolErrorKind::TokenCount {
            expected,
            found: tokens.len(),
        });
    }

    let mut values = Vec::with_capacity(expected);
    for token in tokens {
        let value = token
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .ok_or_else(|| ProtocolErrorKind::InvalidNumber {
                token: token.to_string(),
            })?;
        values.push(value);
    }

    let constraints = values.split_off(num_objectives);
    Ok((values, constraints))
}
