use once_cell::sync::Lazy;
use regex::Regex;

/// One line-level removal rule. A page line matching any rule is dropped.
pub struct LineRule {
    pub name: &'static str,
    pattern: Regex,
}

impl LineRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("invalid noise rule"),
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Ordered rule list, checked per physical line.
pub static NOISE_RULES: Lazy<Vec<LineRule>> = Lazy::new(|| {
    vec![
        // A bare page index, optionally wrapped in light decoration ("- 42 -").
        LineRule::new("page-number", r"^\s*[-–—]?\s*\d{1,4}\s*[-–—]?\s*$"),
        // A caption marker token followed by a numeral ("Figure 3: ...").
        LineRule::new("caption", r"(?i)^\s*(?:figure|fig\.?|table)\s*\d+"),
    ]
});

pub fn is_noise_line(line: &str) -> bool {
    NOISE_RULES.iter().any(|rule| rule.matches(line))
}

/// Removes noise lines from one page of raw text. Surviving lines are kept
/// verbatim, in their original order. An empty page yields an empty string.
pub fn clean_page(page: &str) -> String {
    page.lines()
        .filter(|line| !is_noise_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
