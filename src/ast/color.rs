//! Color function value holders.
//!
//! [`Rgb`], [`Rgba`], [`Hsl`] and [`Hsla`] are simple value objects holding
//! component strings (`"255"`, `"100%"`, `"0.5"`). They exist for callers
//! assembling declarations programmatically: each renders through a fixed
//! `name(a,b,c)` template and can be turned into an expression term. The
//! parser never produces them; parsed color functions stay function terms.
//!
//! Components are validated non-empty at construction. `rgb()` is valid from
//! CSS 2.1; `rgba()`, `hsl()` and `hsla()` require CSS 3.0.

use super::expression::SimpleTerm;
use crate::error::AstError;
use crate::grammar::CssVersion;

fn component(name: &'static str, value: impl Into<String>) -> Result<String, AstError> {
    let value = value.into();
    if value.is_empty() {
        return Err(AstError::EmptyColorComponent { component: name });
    }
    Ok(value)
}

fn render(prefix: &str, components: &[&str]) -> String {
    let mut out = String::from(prefix);
    out.push('(');
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(c);
    }
    out.push(')');
    out
}

/// `rgb(red,green,blue)`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: String,
    pub green: String,
    pub blue: String,
}

impl Rgb {
    pub fn new(
        red: impl Into<String>,
        green: impl Into<String>,
        blue: impl Into<String>,
    ) -> Result<Self, AstError> {
        Ok(Self {
            red: component("red", red)?,
            green: component("green", green)?,
            blue: component("blue", blue)?,
        })
    }

    pub fn as_css_string(&self) -> String {
        render("rgb", &[&self.red, &self.green, &self.blue])
    }

    /// The color as a simple term, for use inside an [`Expression`](super::Expression).
    pub fn to_term(&self) -> SimpleTerm {
        SimpleTerm::new(self.as_css_string())
    }

    pub fn minimum_version(&self) -> CssVersion {
        CssVersion::Css21
    }
}

/// `rgba(red,green,blue,opacity)` (CSS 3.0)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub opacity: String,
}

impl Rgba {
    pub fn new(
        red: impl Into<String>,
        green: impl Into<String>,
        blue: impl Into<String>,
        opacity: impl Into<String>,
    ) -> Result<Self, AstError> {
        Ok(Self {
            red: component("red", red)?,
            green: component("green", green)?,
            blue: component("blue", blue)?,
            opacity: component("opacity", opacity)?,
        })
    }

    pub fn as_css_string(&self) -> String {
        render("rgba", &[&self.red, &self.green, &self.blue, &self.opacity])
    }

    pub fn to_term(&self) -> SimpleTerm {
        SimpleTerm::new(self.as_css_string())
    }

    pub fn minimum_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

/// `hsl(hue,saturation,lightness)` (CSS 3.0)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: String,
    pub saturation: String,
    pub lightness: String,
}

impl Hsl {
    pub fn new(
        hue: impl Into<String>,
        saturation: impl Into<String>,
        lightness: impl Into<String>,
    ) -> Result<Self, AstError> {
        Ok(Self {
            hue: component("hue", hue)?,
            saturation: component("saturation", saturation)?,
            lightness: component("lightness", lightness)?,
        })
    }

    pub fn as_css_string(&self) -> String {
        render("hsl", &[&self.hue, &self.saturation, &self.lightness])
    }

    pub fn to_term(&self) -> SimpleTerm {
        SimpleTerm::new(self.as_css_string())
    }

    pub fn minimum_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

/// `hsla(hue,saturation,lightness,opacity)` (CSS 3.0)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hsla {
    pub hue: String,
    pub saturation: String,
    pub lightness: String,
    pub opacity: String,
}

impl Hsla {
    pub fn new(
        hue: impl Into<String>,
        saturation: impl Into<String>,
        lightness: impl Into<String>,
        opacity: impl Into<String>,
    ) -> Result<Self, AstError> {
        Ok(Self {
            hue: component("hue", hue)?,
            saturation: component("saturation", saturation)?,
            lightness: component("lightness", lightness)?,
            opacity: component("opacity", opacity)?,
        })
    }

    pub fn as_css_string(&self) -> String {
        render(
            "hsla",
            &[&self.hue, &self.saturation, &self.lightness, &self.opacity],
        )
    }

    pub fn to_term(&self) -> SimpleTerm {
        SimpleTerm::new(self.as_css_string())
    }

    pub fn minimum_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_templates() {
        let rgb = Rgb::new("255", "0", "0").unwrap();
        assert_eq!(rgb.as_css_string(), "rgb(255,0,0)");
        let hsla = Hsla::new("120", "50%", "50%", "0.3").unwrap();
        assert_eq!(hsla.as_css_string(), "hsla(120,50%,50%,0.3)");
    }

    #[test]
    fn empty_components_rejected() {
        assert!(Rgb::new("", "0", "0").is_err());
        assert!(Hsl::new("120", "", "50%").is_err());
    }

    #[test]
    fn colors_convert_to_terms() {
        let rgb = Rgb::new("255", "0", "0").unwrap();
        assert_eq!(rgb.to_term(), SimpleTerm::new("rgb(255,0,0)"));
    }
}
