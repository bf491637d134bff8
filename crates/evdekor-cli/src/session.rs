//! Line commands of the interactive session.

use std::path::PathBuf;

use evdekor_core::params::{SelectMedia, SetField};

pub const HELP: &str = "\
## Komutlar

- `set <alan> <değer>` alanı doldurur
- `next` sonraki adıma geçer
- `back` önceki adıma döner
- `media <dosya>...` görselleri seçer (boş bırakılırsa seçimi temizler)
- `submit` özet adımında rezervasyonu gönderir
- `show` mevcut adımı gösterir
- `catalog` seçenekleri listeler
- `clear` taslağı siler ve baştan başlar
- `quit` oturumu kapatır
";

/// One parsed input line.
#[derive(Debug, PartialEq)]
pub enum SessionCommand {
    Set(SetField),
    Next,
    Back,
    Media(SelectMedia),
    Submit,
    Show,
    Catalog,
    Clear,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line. `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb.to_lowercase().as_str() {
            "" => return Ok(None),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(field, value)| (field, value.trim()));
                if field.is_empty() {
                    return Err("usage: set <field> <value>".to_string());
                }
                SessionCommand::Set(SetField {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "next" | "ileri" => SessionCommand::Next,
            "back" | "geri" => SessionCommand::Back,
            "media" => SessionCommand::Media(SelectMedia {
                paths: rest.split_whitespace().map(PathBuf::from).collect(),
            }),
            "submit" | "gonder" | "gönder" => SessionCommand::Submit,
            "show" => SessionCommand::Show,
            "catalog" => SessionCommand::Catalog,
            "clear" | "reset" => SessionCommand::Clear,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => return Err(format!("unknown command '{other}', type 'help'")),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_spaces_in_value() {
        let command = SessionCommand::parse("set description  Mutfak ve banyo  ").unwrap();
        match command {
            Some(SessionCommand::Set(params)) => {
                assert_eq!(params.field, "description");
                assert_eq!(params.value, "Mutfak ve banyo");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_set_without_value_clears_field() {
        match SessionCommand::parse("set districtOther").unwrap() {
            Some(SessionCommand::Set(params)) => assert!(params.value.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_media_splits_paths() {
        match SessionCommand::parse("media a.jpg b.png").unwrap() {
            Some(SessionCommand::Media(params)) => assert_eq!(params.paths.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_simple_verbs_and_aliases() {
        assert_eq!(SessionCommand::parse("NEXT").unwrap(), Some(SessionCommand::Next));
        assert_eq!(SessionCommand::parse("geri").unwrap(), Some(SessionCommand::Back));
        assert_eq!(SessionCommand::parse("exit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_unknown_and_incomplete_commands() {
        assert!(SessionCommand::parse("dance").is_err());
        assert!(SessionCommand::parse("set").is_err());
    }
}
