//! Line-oriented user commands.

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the command reference.
    Help,
    /// List the columns with their indices and visibility.
    Columns,
    /// Sort by a column (toggles direction on the active criterion).
    Sort(usize),
    /// Apply a free-text filter.
    Search(String),
    /// Clear the active filter.
    Clear,
    /// Jump to a page.
    Page(usize),
    /// Hide a column.
    Hide(usize),
    /// Show a hidden column again.
    Show(usize),
    /// Start editing a cell: row id, column index.
    Edit(usize, usize),
    /// Exit.
    Quit,
}

pub const HELP: &str = "\
commands:
  sort <col>        sort by column index (again to flip direction)
  search <text>     keep only rows containing the text (any column)
  clear             remove the filter
  page <n>          jump to page n
  hide <col>        hide a column
  show <col>        restore a hidden column
  edit <row> <col>  edit one cell (row ids are shown in the first column)
  columns           list column indices
  help              show this reference
  quit              exit";

/// Parses one input line into a command.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Err("empty command, try `help`".to_string());
    };

    match keyword {
        "help" => Ok(Command::Help),
        "columns" => Ok(Command::Columns),
        "clear" => Ok(Command::Clear),
        "quit" | "exit" => Ok(Command::Quit),
        "sort" => Ok(Command::Sort(index_arg(parts.next(), "sort <col>")?)),
        "page" => Ok(Command::Page(index_arg(parts.next(), "page <n>")?)),
        "hide" => Ok(Command::Hide(index_arg(parts.next(), "hide <col>")?)),
        "show" => Ok(Command::Show(index_arg(parts.next(), "show <col>")?)),
        "edit" => {
            let row = index_arg(parts.next(), "edit <row> <col>")?;
            let column = index_arg(parts.next(), "edit <row> <col>")?;
            Ok(Command::Edit(row, column))
        }
        "search" => {
            let term = line.trim_start().strip_prefix("search").unwrap_or("").trim();
            Ok(Command::Search(term.to_string()))
        }
        other => Err(format!("unknown command '{other}', try `help`")),
    }
}

fn index_arg(part: Option<&str>, usage: &str) -> Result<usize, String> {
    let Some(part) = part else {
        return Err(format!("usage: {usage}"));
    };
    part.parse::<usize>()
        .map_err(|_| format!("'{part}' is not a number; usage: {usage}"))
}
