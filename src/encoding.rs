//! IDNA encoding seam
//!
//! The enumerator only needs a deterministic, side-effect free
//! `Unicode -> ASCII` function. `PunycodeEncoder` is the production
//! implementation; tests plug in their own.

use crate::error::{PunygenError, Result};

/// Longest DNS label, in bytes
const MAX_LABEL_LEN: usize = 63;

/// Longest DNS name, in bytes
const MAX_DOMAIN_LEN: usize = 253;

const ACE_PREFIX: &str = "xn--";

/// Trait for IDNA ToASCII encoders
pub trait IdnaEncoder {
    /// Encode `input` to its ASCII-compatible form.
    ///
    /// Returns an `Encoding` error for anything that is not a valid label,
    /// including the empty string.
    fn to_ascii(&self, input: &str) -> Result<String>;
}

impl<E: IdnaEncoder + ?Sized> IdnaEncoder for &E {
    fn to_ascii(&self, input: &str) -> Result<String> {
        (**self).to_ascii(input)
    }
}

/// ToASCII without mapping.
///
/// Input must pass UTS #46 validity with STD3 rules, but the mapped form is
/// only used to reject candidates. Every label is encoded exactly as given:
/// ASCII labels pass through, anything else becomes `xn--` plus its Punycode.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunycodeEncoder;

impl PunycodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl IdnaEncoder for PunycodeEncoder {
    fn to_ascii(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Err(PunygenError::encoding(input, "empty label"));
        }

        idna::domain_to_ascii_strict(input)
            .map_err(|e| PunygenError::encoding(input, format!("{:?}", e)))?;

        let labels = input
            .split('.')
            .map(|label| encode_label(input, label))
            .collect::<Result<Vec<_>>>()?;
        let ascii = labels.join(".");

        if ascii.len() > MAX_DOMAIN_LEN {
            return Err(PunygenError::encoding(
                input,
                format!("name exceeds {} bytes", MAX_DOMAIN_LEN),
            ));
        }

        Ok(ascii)
    }
}

fn encode_label(input: &str, label: &str) -> Result<String> {
    if label.is_empty() {
        return Err(PunygenError::encoding(input, "empty label"));
    }

    let encoded = if label.is_ascii() {
        label.to_string()
    } else {
        let punycode = idna::punycode::encode_str(label)
            .ok_or_else(|| PunygenError::encoding(input, "punycode overflow"))?;
        format!("{}{}", ACE_PREFIX, punycode)
    };

    if encoded.len() > MAX_LABEL_LEN {
        return Err(PunygenError::encoding(
            input,
            format!("label exceeds {} bytes", MAX_LABEL_LEN),
        ));
    }

    Ok(encoded)
}
