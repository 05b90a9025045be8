use crate::generator::binary_string;

pub const PLACEHOLDER: &str = "Explanation will appear here.";

/// Plain-language description of the frame sent for one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    binary: String,
    hex: String,
}

impl Explanation {
    pub fn new(byte: u8) -> Self {
        Self {
            binary: binary_string(byte),
            hex: format!("{byte:#x}"),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn text(&self) -> String {
        format!(
            "Explanation:\n\
             Start Bit: The signal goes LOW to begin transmission.\n\
             Data Bits: Represent the binary value of the data ({}) -> {}.\n\
             Stop Bit: The signal returns to HIGH (Idle).",
            self.hex, self.binary
        )
    }
}

#[cfg(test)]
mod test {
    use super::Explanation;

    #[test]
    fn test_explanation_0x41() {
        let explanation = Explanation::new(0x41);
        assert_eq!(explanation.binary(), "01000001");
        assert_eq!(explanation.hex(), "0x41");

        let text = explanation.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Explanation:");
        assert_eq!(
            lines[1],
            "Start Bit: The signal goes LOW to begin transmission."
        );
        assert_eq!(
            lines[2],
            "Data Bits: Represent the binary value of the data (0x41) -> 01000001."
        );
        assert_eq!(lines[3], "Stop Bit: The signal returns to HIGH (Idle).");
    }

    #[test]
    fn test_hex_is_not_padded() {
        assert_eq!(Explanation::new(5).hex(), "0x5");
        assert_eq!(Explanation::new(0).hex(), "0x0");
        assert_eq!(Explanation::new(0xff).hex(), "0xff");
        assert_eq!(Explanation::new(5).binary(), "00000101");
    }
}
