use anyhow::{ensure, Result};
use progblur::css::css_number;
use progblur::LayerStack;

use crate::args::Format;

/// `-?[A-Za-z_][A-Za-z0-9_-]*`, enough to keep generated selectors valid.
fn is_css_ident(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let mut chars = body.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub fn render(stack: &LayerStack, format: Format, class: &str) -> Result<String> {
    if matches!(format, Format::Css | Format::Html) {
        ensure!(is_css_ident(class), "'{class}' is not a valid CSS class name");
    }

    Ok(match format {
        Format::Css => stack.to_stylesheet(class),
        Format::Html => stack.to_html(class),
        Format::Json => serde_json::to_string_pretty(stack)? + "\n",
        Format::Radii => stack.blur_radii().map(|r| css_number(r) + "\n").collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use progblur::{compose, BlurConfig};

    #[test]
    fn radii_one_per_line() {
        let stack = compose(&BlurConfig::new().steps(3).strength(2.0));
        let out = render(&stack, Format::Radii, "x").unwrap();
        assert_eq!(out, "2\n1\n0.5\n");
    }

    #[test]
    fn json_has_layers_and_tint() {
        let stack = compose(&BlurConfig::new().steps(2));
        let out = render(&stack, Format::Json, "unused").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["layers"].as_array().unwrap().len(), 2);
        assert_eq!(value["layers"][1]["z"], 2);
        assert_eq!(value["tint"]["z"], 0);
        assert_eq!(value["direction"]["linear"], "top");
    }

    #[test]
    fn rejects_bad_class_names() {
        let stack = compose(&BlurConfig::new());
        assert!(render(&stack, Format::Css, "1abc").is_err());
        assert!(render(&stack, Format::Html, "a b").is_err());
        assert!(render(&stack, Format::Css, "-header_blur-2").is_ok());
        // Class is irrelevant for JSON.
        assert!(render(&stack, Format::Json, "a b").is_ok());
    }
}
