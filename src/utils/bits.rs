use crate::utils::prng::MODULUS;

pub const LOW_MASK: u64 = 0xffff;

pub fn low_16(value: u64) -> u16 {
    (value & LOW_MASK) as u16
}

/// Sixteen binary digits, most significant first.
pub fn render_binary(value: u16) -> String {
    format!("{:016b}", value)
}

/// Width of the widest value a generator can produce, in decimal digits.
pub fn decimal_width() -> usize {
    (MODULUS - 1).to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_16_masks() {
        assert_eq!(low_16(1092455), 0b1010101101100111);
        assert_eq!(low_16(430625591), 0b1101001100110111);
        assert_eq!(low_16(245556042), low_16(1431495498));
        assert_eq!(low_16(0x1_0000), 0);
    }

    #[test]
    fn render_binary_pads() {
        assert_eq!(render_binary(0), "0000000000000000");
        assert_eq!(render_binary(0xe3ca), "1110001111001010");
        assert_eq!(render_binary(0xffff), "1111111111111111");
    }

    #[test]
    fn widest_value_fits_ten_columns() {
        assert_eq!(decimal_width(), 10);
    }
}
