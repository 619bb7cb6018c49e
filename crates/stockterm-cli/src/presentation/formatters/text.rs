pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Truncate, then left-align into exactly `width` columns.
pub fn fit(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width), width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Bank Central Asia", 20), "Bank Central Asia");
        assert_eq!(truncate("Bank Central Asia", 10), "Bank Ce...");
        assert_eq!(truncate("Bank", 3), "Ban");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ÉNERGIE ÉLECTRIQUE", 8), "ÉNERG...");
    }

    #[test]
    fn test_fit_pads() {
        assert_eq!(fit("BBCA", 6), "BBCA  ");
        assert_eq!(fit("Consumer Cyclicals", 8), "Consu...");
    }
}
