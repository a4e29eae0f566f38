const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Cycles through frames every 300ms.
pub fn spinner_char(time_ms: u128) -> &'static str {
    SPINNER_FRAMES[(time_ms / 300) as usize % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_every_300ms_and_wraps() {
        assert_eq!(spinner_char(0), "◐");
        assert_eq!(spinner_char(299), "◐");
        assert_eq!(spinner_char(300), "◓");
        assert_eq!(spinner_char(1200), "◐");
    }
}
