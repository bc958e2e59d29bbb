use std::str::FromStr;

use crate::prelude::*;

pub fn non_zero_usize(value: &str) -> Result<usize> {
    match FromStr::from_str(value)? {
        value if value >= 1 => Ok(value),
        _ => Err(anyhow!("expected a positive number")),
    }
}

pub fn sample_rate(value: &str) -> Result<f32> {
    match f32::from_str(value)? {
        value if (0.0..=1.0).contains(&value) => Ok(value),
        value => Err(anyhow!("{} is not within [0, 1]", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_usize_ok() -> Result {
        assert_eq!(non_zero_usize("20")?, 20);
        assert!(non_zero_usize("0").is_err());
        assert!(non_zero_usize("-1").is_err());
        Ok(())
    }

    #[test]
    fn sample_rate_ok() -> Result {
        assert_eq!(sample_rate("0.25")?, 0.25);
        assert!(sample_rate("1.5").is_err());
        assert!(sample_rate("abc").is_err());
        Ok(())
    }
}
