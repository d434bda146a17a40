use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

pub const EMPTY_PLACEHOLDER: &str = "<p>No content available</p>";

enum Matcher {
    Pattern(Regex, &'static str),
    Literal {
        needle: &'static str,
        replacement: &'static str,
        first_only: bool,
    },
}

/// One substitution step of the renderer.
pub struct Rule {
    pub name: &'static str,
    matcher: Matcher,
}

impl Rule {
    fn pattern(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            matcher: Matcher::Pattern(
                Regex::new(pattern).expect("valid markdown rule regex"),
                replacement,
            ),
        }
    }

    fn literal(name: &'static str, needle: &'static str, replacement: &'static str) -> Self {
        Self {
            name,
            matcher: Matcher::Literal {
                needle,
                replacement,
                first_only: false,
            },
        }
    }

    fn literal_first(name: &'static str, needle: &'static str, replacement: &'static str) -> Self {
        Self {
            name,
            matcher: Matcher::Literal {
                needle,
                replacement,
                first_only: true,
            },
        }
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.matcher {
            Matcher::Pattern(re, replacement) => re.replace_all(text, *replacement),
            Matcher::Literal { needle, .. } if !text.contains(needle) => Cow::Borrowed(text),
            Matcher::Literal {
                needle,
                replacement,
                first_only: true,
            } => Cow::Owned(text.replacen(needle, replacement, 1)),
            Matcher::Literal {
                needle,
                replacement,
                first_only: false,
            } => Cow::Owned(text.replace(needle, replacement)),
        }
    }
}

/// The substitution table, applied top to bottom.
///
/// Inline rules run before headings, and `###` runs before `##` before `#` so
/// a shorter marker never eats the tail of a longer one. Heading markers are
/// not anchored to line starts and need a trailing newline.
pub fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            Rule::pattern("bold", r"\*\*(.*?)\*\*", "<strong>${1}</strong>"),
            Rule::pattern("italic", r"\*(.*?)\*", "<em>${1}</em>"),
            Rule::pattern("code", r"`(.*?)`", "<code>${1}</code>"),
            Rule::pattern("h3", r"### ([^\n]*)\n", "<h3>${1}</h3>\n"),
            Rule::pattern("h2", r"## ([^\n]*)\n", "<h2>${1}</h2>\n"),
            Rule::pattern("h1", r"# ([^\n]*)\n", "<h1>${1}</h1>\n"),
            Rule::literal("paragraph", "\n\n", "</p><p>"),
            Rule::literal("line-break", "\n", "<br>"),
            Rule::literal_first("open-paragraph", "</p><p>", "<p>"),
        ]
    })
}

pub fn render_markdown(content: &str) -> String {
    if content.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut html = content.to_string();
    for rule in rules() {
        html = rule.apply(&html).into_owned();
    }
    html.push_str("</p>");
    html
}
