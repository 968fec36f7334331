use std::ops::BitXor;

use super::{common_prefix_length, pad_left};

/// XOR the message with the key, element-wise.
///
/// The two inputs may have different lengths: the shorter one is left-padded
/// with zeros before combining, so the key may be bigger than the message or
/// vice-versa. Any common prefix of the padded inputs is then stripped from
/// the result, which removes the leading zeros introduced by the padding.
///
/// Note that the trim fires on *any* leading agreement between the padded
/// inputs, not just on the padding zeros, so the result can be shorter than
/// `max(message.len(), key.len())` even for equal-length inputs.
pub fn xor_combine<T>(message: &[T], key: &[T]) -> Vec<T>
where
    T: Copy + Default + PartialEq + BitXor<Output = T>,
{
    // Pad the smaller input if needed
    let target_len = message.len().max(key.len());
    let padded_message = pad_left(message, target_len);
    let padded_key = pad_left(key, target_len);

    // Unwrap since both sides were just padded to the same length
    let prefix_len = common_prefix_length(&padded_message, &padded_key).unwrap();

    padded_message
        .iter()
        .zip(padded_key.iter())
        .skip(prefix_len)
        .map(|(&m, &k)| m ^ k)
        .collect()
}
