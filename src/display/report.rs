//! Report formatting utilities for terminal output
//!
//! Small text helpers shared by the summary report and table views.

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to at most `max_chars` characters, ending in an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        "...".chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(75.0), "75%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(25.0, 100.0, 8);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 2);
        assert_eq!(bar.chars().count(), 8);
        assert_eq!(format_bar(0.0, 100.0, 3), "   ");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Groceries and more", 8), "Groce...");
        assert_eq!(truncate("Café", 4), "Café");
        assert_eq!(truncate("Crème brûlée", 6), "Crè...");
        assert_eq!(truncate("abc", 2), "..");
    }
}
