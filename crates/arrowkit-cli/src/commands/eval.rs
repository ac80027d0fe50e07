//! Direct evaluation of single utilities from the command line.
//!
//! Failures carry the error kind and the offending inputs.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use arrowkit::{UtilError, divide, frequency_count, map_filter_reduce, pipeline, unique};
use clap::ValueEnum;

/// A pipeline transform step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Step {
    Double,
    Increment,
}

fn failure(err: &UtilError, inputs: &str) -> anyhow::Error {
    anyhow!("{}: {err} (inputs: {inputs})", err.kind())
}

pub fn divide_cmd(a: f64, b: f64) -> Result<()> {
    let quotient = divide(a, b).map_err(|e| failure(&e, &format!("a = {a}, b = {b}")))?;
    println!("{quotient}");
    Ok(())
}

pub fn unique_cmd(values: &[String]) -> Result<()> {
    println!("{}", unique(values).join(" "));
    Ok(())
}

/// Prints `word: count` lines sorted by word.
pub fn freq_cmd(words: &[String]) -> Result<()> {
    let sorted: BTreeMap<_, _> = frequency_count(words).into_iter().collect();
    for (word, count) in sorted {
        println!("{word}: {count}");
    }
    Ok(())
}

pub fn chain_cmd(values: &[i64], above: i64, factor: i64, seed: Option<i64>) -> Result<()> {
    let total = checked_chain(values, above, factor, seed).map_err(|e| {
        failure(
            &e,
            &format!("values = {values:?}, above = {above}, factor = {factor}"),
        )
    })?;
    println!("{total}");
    Ok(())
}

/// Filter `> above`, scale by `factor`, then sum, failing on the first overflow.
fn checked_chain(
    values: &[i64],
    above: i64,
    factor: i64,
    seed: Option<i64>,
) -> Result<i64, UtilError> {
    map_filter_reduce(
        values,
        |x| *x > above,
        |x| {
            x.checked_mul(factor).ok_or(UtilError::Overflow {
                operation: "multiply",
                input: i128::from(*x),
            })
        },
        |acc: Result<i64, UtilError>, next: Result<i64, UtilError>| {
            let (acc, next) = (acc?, next?);
            acc.checked_add(next).ok_or(UtilError::Overflow {
                operation: "add",
                input: i128::from(acc),
            })
        },
        seed.map(Ok),
    )?
}

pub fn pipeline_cmd(value: i64, steps: &[Step]) -> Result<()> {
    let result = steps
        .iter()
        .try_fold(pipeline(value), |stage, step| match step {
            Step::Double => stage.checked_double(),
            Step::Increment => stage.checked_increment(),
        })
        .map_err(|e| failure(&e, &format!("value = {value}, steps = {steps:?}")))?
        .get();
    println!("{result}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_names_kind_and_inputs() {
        let err = failure(&UtilError::EmptyReduce, "values = []");
        let message = err.to_string();
        assert!(message.starts_with("empty-reduce:"));
        assert!(message.contains("values = []"));
    }

    #[test]
    fn divide_by_zero_fails() {
        let err = divide_cmd(8.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("division-by-zero"));
    }

    #[test]
    fn chain_overflow_is_an_error() {
        assert_eq!(checked_chain(&[1, 2, 3, 4, 5], 2, 2, Some(0)), Ok(24));
        assert!(matches!(
            checked_chain(&[i64::MAX], 0, 2, Some(0)),
            Err(UtilError::Overflow { operation: "multiply", .. })
        ));
        assert!(matches!(
            checked_chain(&[i64::MAX, 1], 0, 1, None),
            Err(UtilError::Overflow { operation: "add", .. })
        ));
        let err = chain_cmd(&[i64::MAX], 0, 2, Some(0)).unwrap_err();
        assert!(err.to_string().starts_with("overflow:"));
    }

    #[test]
    fn pipeline_overflow_is_an_error() {
        assert!(pipeline_cmd(5, &[Step::Double, Step::Increment]).is_ok());
        let err = pipeline_cmd(i64::MAX, &[Step::Double]).unwrap_err();
        assert!(err.to_string().starts_with("overflow:"));
        assert!(err.to_string().contains("value = 9223372036854775807"));
    }

    #[test]
    fn seedless_chain_over_nothing_fails() {
        assert!(chain_cmd(&[1, 2], 5, 2, None).is_err());
        assert!(chain_cmd(&[1, 2], 5, 2, Some(0)).is_ok());
    }
}
