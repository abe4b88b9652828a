use std::str::FromStr;

use crate::{
    error::{AppError, AppResult},
    models::ProductId,
};

pub const HELP: &str = "\
commands:
  catalog                   show the catalog with viewed markers
  filtered                  show products matching your preferences
  view <id>                 open a product (adds it to history)
  history                   show browsing history
  clear                     clear browsing history
  prefs                     show the preference form
  price <bucket>            all | 0-50 | 50-100 | 100-200 | 200-
  category <name> on|off    include or exclude a category
  brand <name> on|off       include or exclude a brand
  recs                      show recommendations
  recs <file.json>          load a recommendation backend response, then show it
  request                   print the request sent to the recommendation engine
  help                      show this text
  quit                      exit";

/// One line of host input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Catalog,
    Filtered,
    View(ProductId),
    History,
    Clear,
    Prefs,
    Price(String),
    Category { name: String, included: bool },
    Brand { name: String, included: bool },
    Recs,
    LoadRecs(String),
    Request,
    Help,
    Quit,
}

fn parse_toggle(rest: &[&str], usage: &str) -> AppResult<(String, bool)> {
    let (flag, name) = rest
        .split_last()
        .ok_or_else(|| AppError::InvalidInput(format!("usage: {}", usage)))?;
    let included = match *flag {
        "on" => true,
        "off" => false,
        other => {
            return Err(AppError::InvalidInput(format!(
                "expected on|off, got '{}'",
                other
            )))
        }
    };
    if name.is_empty() {
        return Err(AppError::InvalidInput(format!("usage: {}", usage)));
    }
    Ok((name.join(" "), included))
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, rest)) = words.split_first() else {
            return Err(AppError::InvalidInput("empty command".to_string()));
        };

        let command = match (*keyword, rest) {
            ("catalog", []) => Command::Catalog,
            ("filtered", []) => Command::Filtered,
            ("view", [id]) => Command::View(ProductId::from(*id)),
            ("history", []) => Command::History,
            ("clear", []) => Command::Clear,
            ("prefs", []) => Command::Prefs,
            ("price", [bucket]) => Command::Price(bucket.to_string()),
            ("category", rest) => {
                let (name, included) = parse_toggle(rest, "category <name> on|off")?;
                Command::Category { name, included }
            }
            ("brand", rest) => {
                let (name, included) = parse_toggle(rest, "brand <name> on|off")?;
                Command::Brand { name, included }
            }
            ("recs", []) => Command::Recs,
            ("recs", [path]) => Command::LoadRecs(path.to_string()),
            ("request", []) => Command::Request,
            ("help", []) => Command::Help,
            ("quit", []) | ("exit", []) => Command::Quit,
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "unrecognized command '{}'",
                    line.trim()
                )))
            }
        };
        Ok(command)
    }
}
