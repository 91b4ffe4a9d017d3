//! Element addressing for browser-driven tests.

/// How a test finds an element on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Plain CSS selector, e.g. `#recaptcha-anchor`.
    Css(String),
    /// CSS selector narrowed to elements whose text contains `text`.
    CssWithText { css: String, text: String },
}

impl Selector {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Narrow to elements containing `text`, like `Selector('a').withText(..)`.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        let css = match self {
            Self::Css(css) | Self::CssWithText { css, .. } => css,
        };
        Self::CssWithText {
            css,
            text: text.into(),
        }
    }

    /// The underlying CSS part.
    pub fn css_part(&self) -> &str {
        match self {
            Self::Css(css) | Self::CssWithText { css, .. } => css,
        }
    }

    /// JavaScript expression evaluating to the first match or `undefined`.
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(css) => format!("document.querySelector({css:?})"),
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))"
            ),
        }
    }

    /// JavaScript expression evaluating to the number of matches.
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(css) => format!("document.querySelectorAll({css:?}).length"),
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length"
            ),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(css) => write!(f, "{css}"),
            Self::CssWithText { css, text } => write!(f, "{css} with text {text:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_query() {
        let selector = Selector::css("#recaptcha-anchor");
        assert_eq!(selector.to_query(), r##"document.querySelector("#recaptcha-anchor")"##);
        assert_eq!(
            selector.to_count_query(),
            r##"document.querySelectorAll("#recaptcha-anchor").length"##
        );
    }

    #[test]
    fn test_with_text_query() {
        let selector = Selector::css("a").with_text("Log in");
        assert_eq!(
            selector,
            Selector::CssWithText {
                css: "a".to_string(),
                text: "Log in".to_string()
            }
        );
        assert_eq!(
            selector.to_query(),
            r#"Array.from(document.querySelectorAll("a")).find(el => el.textContent.includes("Log in"))"#
        );
    }

    #[test]
    fn test_with_text_replaces_previous_text() {
        let selector = Selector::css("a").with_text("Register").with_text("Log in");
        assert_eq!(selector.css_part(), "a");
        assert_eq!(selector.to_string(), r#"a with text "Log in""#);
    }

    #[test]
    fn test_quotes_are_escaped_in_queries() {
        let selector = Selector::css(r#"[data-s3-direct-upload-field="presign"]"#);
        assert_eq!(
            selector.to_query(),
            r#"document.querySelector("[data-s3-direct-upload-field=\"presign\"]")"#
        );
    }
}
