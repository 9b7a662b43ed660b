//! CSS rendering of a [`LayerStack`].
//!
//! Each blur layer becomes an absolutely positioned element covering its
//! parent, with a gradient `mask` and a `backdrop-filter: blur()`. The tint
//! layer is the relatively positioned parent carrying the tint gradient as
//! its background; the outer container only disables pointer events.
//!
//! ```text
//! .c                  pointer-events: none
//! └── .c-tint         z-index 0, tint background
//!     ├── .c-layer-0  z-index 1, most blurred
//!     └── .c-layer-N  z-index N+1, least blurred
//! ```

use crate::mask::Mask;
use crate::paint::{Color, Gradient, GradientShape};
use crate::stack::{Layer, LayerStack};

/// A `property: value` pair.
pub type Declaration = (&'static str, String);

/// Formats a CSS number: at most four decimals, trailing zeros trimmed.
pub fn css_number(v: f32) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn css_color(c: Color) -> String {
    let [r, g, b, _] = c.to_rgba8();
    format!("rgba({r}, {g}, {b}, {})", css_number(c.a))
}

fn gradient_prefix(shape: GradientShape) -> String {
    match shape {
        GradientShape::Linear { to } => format!("linear-gradient(to {to}"),
        GradientShape::RadialClosestSide => "radial-gradient(closest-side".to_owned(),
    }
}

/// `linear-gradient(...)` / `radial-gradient(...)` for a color gradient.
pub fn gradient_css(gradient: &Gradient) -> String {
    let mut out = gradient_prefix(gradient.shape);
    for stop in &gradient.stops {
        out.push_str(&format!(", {} {}%", css_color(stop.color), css_number(stop.offset)));
    }
    out.push(')');
    out
}

/// Mask gradient: black stops at opacity 0 or 1.
pub fn mask_css(mask: &Mask) -> String {
    let mut out = gradient_prefix(mask.shape);
    for stop in &mask.stops {
        out.push_str(&format!(
            ", rgba(0, 0, 0, {}) {}%",
            css_number(stop.opacity),
            css_number(stop.offset)
        ));
    }
    out.push(')');
    out
}

impl Layer {
    /// Inline declarations of this blur layer.
    pub fn css_declarations(&self) -> Vec<Declaration> {
        let filter = format!("blur({}px)", css_number(self.blur_radius));
        vec![
            ("position", "absolute".to_owned()),
            ("z-index", self.z.0.to_string()),
            ("inset", "0".to_owned()),
            ("mask", mask_css(&self.mask)),
            ("backdrop-filter", filter.clone()),
            ("-webkit-backdrop-filter", filter),
        ]
    }
}

impl LayerStack {
    /// Declarations of the outer container.
    pub fn container_declarations(&self) -> Vec<Declaration> {
        let mut decls = vec![("pointer-events", "none".to_owned())];
        if let Some(side) = self.direction.side() {
            decls.push(("transform-origin", side.as_str().to_owned()));
        }
        decls
    }

    /// Declarations of the tint layer (parent of the blur layers).
    pub fn tint_declarations(&self) -> Vec<Declaration> {
        vec![
            ("position", "relative".to_owned()),
            ("z-index", self.tint.z.0.to_string()),
            ("width", "100%".to_owned()),
            ("height", "100%".to_owned()),
            ("background", gradient_css(&self.tint.gradient)),
        ]
    }

    /// Class-scoped stylesheet: `.{class}`, `.{class}-tint` and one
    /// `.{class}-layer-{i}` rule per blur layer.
    pub fn to_stylesheet(&self, class: &str) -> String {
        let mut out = String::new();
        write_rule(&mut out, &format!(".{class}"), &self.container_declarations());
        write_rule(&mut out, &format!(".{class}-tint"), &self.tint_declarations());
        for layer in &self.layers {
            let selector = format!(".{class}-layer-{}", layer.index);
            write_rule(&mut out, &selector, &layer.css_declarations());
        }
        out
    }

    /// Nested `div` markup with inline styles, using the same class names as
    /// [`to_stylesheet`](Self::to_stylesheet).
    pub fn to_html(&self, class: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div class=\"{class}\" style=\"{}\">\n",
            inline_style(&self.container_declarations())
        ));
        out.push_str(&format!(
            "  <div class=\"{class}-tint\" style=\"{}\">\n",
            inline_style(&self.tint_declarations())
        ));
        for layer in &self.layers {
            out.push_str(&format!(
                "    <div class=\"{class}-layer-{}\" style=\"{}\"></div>\n",
                layer.index,
                inline_style(&layer.css_declarations())
            ));
        }
        out.push_str("  </div>\n</div>\n");
        out
    }
}

fn inline_style(decls: &[Declaration]) -> String {
    decls
        .iter()
        .map(|(prop, value)| format!("{prop}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn write_rule(out: &mut String, selector: &str, decls: &[Declaration]) {
    out.push_str(&format!("{selector} {{\n"));
    for (prop, value) in decls {
        out.push_str(&format!("  {prop}: {value};\n"));
    }
    out.push_str("}\n");
}
