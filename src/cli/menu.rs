//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use crate::history::HistoryStore;
use crate::lookup::CreatureLookup;
use crate::notify::Notifier;
use crate::pokedex::Pokedex;

const MENU: &str = "\nMini Pokedex CLI
1. Search pokemon by name.
2. Search pokemon by ID.
3. Retrieve last five searches.
4. Exit
5. List pokemon by type.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    SearchByName,
    SearchById,
    ShowHistory,
    Exit,
    ListByType,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::SearchByName,
            "2" => Self::SearchById,
            "3" => Self::ShowHistory,
            "4" => Self::Exit,
            "5" => Self::ListByType,
            other => Self::Invalid(other.to_string()),
        }
    }
}

/// Run the menu until the user exits or input ends
pub fn run_menu<L, H, N, R, W>(
    pokedex: &mut Pokedex<L, H, N>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    L: CreatureLookup,
    H: HistoryStore,
    N: Notifier,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Enter an option: ")? else {
            writeln!(out)?;
            return Ok(());
        };

        match MenuChoice::parse(&choice) {
            MenuChoice::SearchByName => {
                let Some(name) = prompt(input, out, "Enter Pokémon name: ")? else {
                    return Ok(());
                };
                if name.is_empty() {
                    writeln!(out, "Name cannot be empty.")?;
                } else {
                    pokedex.search(&name, out)?;
                }
            }
            MenuChoice::SearchById => {
                let Some(raw) = prompt(input, out, "Enter Pokémon ID: ")? else {
                    return Ok(());
                };
                // Numeric check only; the id is searched and recorded as typed
                match raw.parse::<u32>() {
                    Ok(id) if id > 0 => {
                        pokedex.search(&raw, out)?;
                    }
                    _ => writeln!(out, "Invalid ID: {raw}")?,
                }
            }
            MenuChoice::ShowHistory => pokedex.show_history(out)?,
            MenuChoice::ListByType => {
                let Some(type_name) = prompt(input, out, "Enter type: ")? else {
                    return Ok(());
                };
                if type_name.is_empty() {
                    writeln!(out, "Type cannot be empty.")?;
                } else {
                    pokedex.list_by_type(&type_name, out)?;
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            MenuChoice::Invalid(_) => writeln!(out, "Invalid option. Try again.")?,
        }
    }
}

/// Print `message`, read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
