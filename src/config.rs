//! The structures and functions for configuration. Must be accessible to main.

use crate::extraction::Extraction;

/// The overall options.
pub struct BlueciteConfig<'a> {
    pub command: BlueciteCommand<'a>,
    pub output: Output<'a>,
    pub format: Format,
    pub emphasis: Emphasis,
    pub court_map: Option<&'a str>,
}

impl BlueciteConfig<'_> {
    pub fn new<'a>(
        command: BlueciteCommand<'a>,
        output: Output<'a>,
        format: Format,
        emphasis: Emphasis,
        court_map: Option<&'a str>,
    ) -> BlueciteConfig<'a> {
        BlueciteConfig {
            command,
            output,
            format,
            emphasis,
            court_map,
        }
    }
}

/// The types of commands.
pub enum BlueciteCommand<'a> {
    /// Build a citation from an extraction file.
    ExtractionFile(&'a str),
    /// Build a citation from fields given on the command line.
    ExtractionFields(Extraction),
    /// Render a previously built (and possibly edited) record file.
    Record(&'a str),
    NewCourtMapFile,
}

/// Where the output goes.
#[derive(PartialEq, Eq, Debug)]
pub enum Output<'a> {
    StandardOut,
    File(&'a str),
}

/// The output formats.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    Text,
    Json,
    Yaml,
}

impl Format {
    /// The format named on the command line. Anything unknown is text.
    pub fn from_name(name: &str) -> Format {
        match name {
            "json" => Format::Json,
            "yaml" => Format::Yaml,
            _ => Format::Text,
        }
    }
}

/// How case names are emphasized.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Emphasis {
    #[default]
    Markdown,
    Html,
    Plain,
}

impl Emphasis {
    /// The emphasis named on the command line. Anything unknown is Markdown.
    pub fn from_name(name: &str) -> Emphasis {
        match name {
            "html" => Emphasis::Html,
            "plain" => Emphasis::Plain,
            _ => Emphasis::Markdown,
        }
    }
}
