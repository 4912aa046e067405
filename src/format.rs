use std::fmt;

use crate::limb::{Limb, MachineWord};
use crate::DoubleWidth;

impl<H: Limb> fmt::Debug for DoubleWidth<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(0x", Self::describe())?;
        format_hex(self, f, hex_simd::AsciiCase::Lower)?;
        f.write_str(")")
    }
}

impl<H: Limb> fmt::LowerHex for DoubleWidth<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Lower)
    }
}

impl<H: Limb> fmt::UpperHex for DoubleWidth<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Upper)
    }
}

/// Two's-complement bits as hex without leading zeros ("0" for zero),
/// encoded one word at a time from the most significant end.
fn format_hex<H: Limb>(
    src: &DoubleWidth<H>,
    f: &mut fmt::Formatter,
    case: hex_simd::AsciiCase,
) -> fmt::Result {
    let digits = DoubleWidth::<H>::BITS as usize / 4;
    let mut zero_digits = std::cmp::min(src.leading_zeros() as usize / 4, digits - 1);

    let word_bytes = <H::Word as Limb>::BITS as usize / 8;
    let mut buf = [0_u8; 16];

    for index in (0..DoubleWidth::<H>::WORDS).rev() {
        let bytes = src.word(index).to_u64().to_be_bytes();

        let out = hex_simd::Out::from_slice(&mut buf[..2 * word_bytes]);
        let encoded = hex_simd::encode(&bytes[8 - word_bytes..], out, case);

        let skip = std::cmp::min(zero_digits, encoded.len());
        zero_digits -= skip;

        if skip < encoded.len() {
            let encoded = std::str::from_utf8(&encoded[skip..]).map_err(|_| fmt::Error)?;
            f.write_str(encoded)?;
        }
    }

    Ok(())
}
