use crate::{
    error::{Result, StudioError},
    models::{ArtStyle, AspectRatio},
};
use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  prompt <text>   set the description (or edit instructions)
  style <name>    pick an art style (see `styles`)
  ratio <r>       pick an aspect ratio: 1:1, 16:9, 9:16, 4:3, 3:4
  image <path>    load a source image to edit
  clear           remove the source image
  generate        submit the request
  save            save the result as nanobanana-<millis>.png
  styles          list art styles
  help            show this help
  quit            exit";

/// A line typed into the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Prompt(String),
    Style(ArtStyle),
    Ratio(AspectRatio),
    Image(PathBuf),
    ClearImage,
    Generate,
    Save,
    Styles,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            // The prompt may legitimately be set back to empty.
            "prompt" | "p" => Command::Prompt(rest.to_string()),
            "style" | "s" => Command::Style(require(name, rest)?.parse()?),
            "ratio" | "r" => Command::Ratio(require(name, rest)?.parse()?),
            "image" | "i" => Command::Image(PathBuf::from(require(name, rest)?)),
            "clear" => Command::ClearImage,
            "generate" | "g" => Command::Generate,
            "save" => Command::Save,
            "styles" => Command::Styles,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(StudioError::ConfigError(format!(
                    "Unknown command '{}' (type `help`)",
                    other
                )))
            }
        };
        Ok(Some(command))
    }
}

fn require<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        Err(StudioError::ConfigError(format!("`{}` needs an argument", name)))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("prompt  A cat on a skateboard ").unwrap(),
            Some(Command::Prompt("A cat on a skateboard".into()))
        );
        assert_eq!(
            Command::parse("style oil painting").unwrap(),
            Some(Command::Style(ArtStyle::OilPainting))
        );
        assert_eq!(
            Command::parse("ratio 4:3").unwrap(),
            Some(Command::Ratio(AspectRatio::StandardLandscape))
        );
        assert_eq!(
            Command::parse("image ./cat.png").unwrap(),
            Some(Command::Image(PathBuf::from("./cat.png")))
        );
        assert_eq!(Command::parse("G").unwrap(), Some(Command::Generate));
        assert_eq!(Command::parse("prompt").unwrap(), Some(Command::Prompt(String::new())));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("style").is_err());
        assert!(Command::parse("ratio 2:1").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
