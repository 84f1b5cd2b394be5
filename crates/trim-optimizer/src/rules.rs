use regex::{Captures, Regex, RegexBuilder};

/// One ordered rewrite step: every match of `pattern` becomes `replacement`
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: String,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Compile a rule. `replacement` may reference capture groups as `${1}`.
    pub fn new(
        name: &str,
        pattern: &str,
        replacement: &str,
        case_insensitive: bool,
    ) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()?;

        Ok(Self {
            name: name.to_string(),
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply the rule, returning the new text and how many matches actually
    /// changed. A match that expands to itself is not counted.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut changed = 0;
        let rewritten = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let mut expanded = String::new();
            caps.expand(&self.replacement, &mut expanded);
            if expanded != caps[0] {
                changed += 1;
            }
            expanded
        });

        (rewritten.into_owned(), changed)
    }
}

/// Unit, vocabulary and cleanup rules, in execution order
pub fn default_rules() -> Vec<RewriteRule> {
    // (name, pattern, replacement, case-insensitive)
    const RULES: &[(&str, &str, &str, bool)] = &[
        // Units
        ("days", r"\b(\d+)\s+Days\b", "${1}D", true),
        ("gigabytes", r"\b(\d+(?:\.\d+)?)\s+GB\b", "${1}GB", true),
        ("megabytes", r"\b(\d+)\s+MB\b", "${1}MB", true),
        // Vocabulary
        ("internet", r"\bInternet\b", "Net", true),
        ("nasional", r"\bNasional\b", "Nas", true),
        // Cleanup
        ("whitespace", r"\s+", " ", false),
        ("repeated_commas", r",(?:\s*,)+", ",", false),
        ("leading_comma", r"^\s*,\s*", "", false),
        ("trailing_comma", r"\s*,\s*$", "", false),
    ];

    RULES
        .iter()
        .map(|(name, pattern, replacement, case_insensitive)| {
            RewriteRule::new(name, pattern, replacement, *case_insensitive)
                .expect("built-in rewrite rule must compile")
        })
        .collect()
}
