/// Pad or truncate `text` to an exact cell width, marking truncation with `…`.
pub fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    let count = text.chars().count();
    if count <= width {
        let mut out = String::with_capacity(width);
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(width - count));
        out
    } else if width <= 1 {
        text.chars().take(width).collect()
    } else {
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("Ada", 6), "Ada   ");
    }

    #[test]
    fn test_fit_truncates_long_text() {
        assert_eq!(fit("Website Relaunch", 8), "Website…");
    }

    #[test]
    fn test_fit_exact_width() {
        assert_eq!(fit("Hours", 5), "Hours");
    }

    #[test]
    fn test_fit_counts_chars_not_bytes() {
        assert_eq!(fit("Norén", 6), "Norén ");
    }
}
