use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum CommonPrefixError {
    #[error("Length mismatch")]
    LengthMismatch,
}

/// Count the leading positions at which both inputs hold equal elements,
/// scanning from index 0 and stopping at the first mismatch.
/// Returns CommonPrefixError::LengthMismatch if both inputs don't have the
/// same length.
pub fn common_prefix_length<T>(lhs: &[T], rhs: &[T]) -> Result<usize, CommonPrefixError>
where
    T: PartialEq,
{
    if lhs.len() != rhs.len() {
        return Err(CommonPrefixError::LengthMismatch);
    }

    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .take_while(|(x, y)| x == y)
        .count())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn common_prefix_length_ok() {
        let lhs = [0, 0, 0, 0, 1, 2, 3, 4, 5];
        let rhs = [0, 0, 0, 1, 2, 3, 4, 5, 6];

        assert_eq!(common_prefix_length(&lhs, &rhs).unwrap(), 3)
    }

    #[test]
    fn common_prefix_length_identical_ok() {
        let seq = [7u8, 8, 9, 10];
        assert_eq!(common_prefix_length(&seq, &seq).unwrap(), 4)
    }

    #[test]
    fn common_prefix_length_mismatch_at_first_ok() {
        assert_eq!(common_prefix_length(&[1, 2, 3], &[9, 2, 3]).unwrap(), 0)
    }

    #[test]
    fn common_prefix_length_empty_ok() {
        assert_eq!(common_prefix_length(&[] as &[u8], &[]).unwrap(), 0)
    }

    #[test]
    fn common_prefix_length_unequal_lengths_err() {
        assert_eq!(
            common_prefix_length(&[1, 2], &[1, 2, 3]),
            Err(CommonPrefixError::LengthMismatch)
        )
    }
}
