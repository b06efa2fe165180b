use rand::Rng;
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub(crate) struct RandomDraw {
    pub(crate) min: i64,
    pub(crate) max: i64,
    pub(crate) numbers: Vec<i64>,
}

/// Uniform draws from the inclusive range `min..=max`; requires `min < max`
pub(crate) fn draw<R: Rng + ?Sized>(
    min: i64,
    max: i64,
    count: usize,
    rng: &mut R,
) -> Result<RandomDraw, AppError> {
    if min >= max {
        return Err(AppError::InvalidRange);
    }
    let numbers = (0..count.max(1)).map(|_| rng.gen_range(min..=max)).collect();
    Ok(RandomDraw { min, max, numbers })
}

pub(crate) fn parse_bound(field: &'static str, input: &str) -> Result<i64, AppError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}
