use clap::ValueEnum;
use std::fmt;
use structa_providers::TemplateHint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProviderName {
    Gemini,
    Groq,
}

impl ProviderName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Gemini => "gemini",
            ProviderName::Groq => "groq",
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TemplateName {
    Auto,
    Plan,
    Analysis,
    Brainstorm,
    Schedule,
}

impl TemplateName {
    pub fn hint(&self) -> TemplateHint {
        match self {
            TemplateName::Auto => TemplateHint::Auto,
            TemplateName::Plan => TemplateHint::Plan,
            TemplateName::Analysis => TemplateHint::Analysis,
            TemplateName::Brainstorm => TemplateHint::Brainstorm,
            TemplateName::Schedule => TemplateHint::Schedule,
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hint())
    }
}
