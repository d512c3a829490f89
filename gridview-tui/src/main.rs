mod commands;
mod render;

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use gridview_lib::DataClient;
use gridview_lib::TableConfig;
use gridview_lib::TableSession;
use gridview_lib::TableView;
use gridview_lib::model::Value;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::Command;

const DEFAULT_URL: &str = "http://localhost:3000/data";

#[tokio::main]
async fn main() {
    let log_file = File::create("gridview-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let client = DataClient::builder()
        .url(&url)
        .timeout(Duration::from_secs(10))
        .build();

    println!("Loading data from {url} ...");
    let records = client.fetch_rows().await?;
    log::info!("loaded {} records", records.len());

    // The render callback draws each computed view and keeps the latest
    // snapshot around so `edit` can resolve row ids from what's on screen.
    let last_view: Rc<RefCell<Option<TableView>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&last_view);
    let mut session = TableSession::new(
        records,
        TableConfig::default(),
        Box::new(move |view| {
            render::draw(view);
            *sink.borrow_mut() = Some(view.clone());
        }),
    )?;

    println!("{}", commands::HELP);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    prompt(&session);

    while let Some(line) = lines.next_line().await? {
        // While a cell is being edited the whole line is the new value;
        // committing the shown original is the only way out unchanged.
        if session.editing().is_some() {
            session.commit_edit(Value::from(line.trim_end()))?;
            prompt(&session);
            continue;
        }

        match commands::parse(&line) {
            Ok(Command::Help) => println!("{}", commands::HELP),
            Ok(Command::Columns) => render::draw_columns(&session.view()),
            Ok(Command::Sort(column)) => session.sort_by_column(column),
            Ok(Command::Search(term)) => session.submit_search(&term),
            Ok(Command::Clear) => session.clear_search(),
            Ok(Command::Page(number)) => session.change_page(number),
            Ok(Command::Hide(column)) => session.hide_column(column),
            Ok(Command::Show(column)) => session.unhide_column(column),
            Ok(Command::Edit(row, column)) => start_edit(&mut session, &last_view, row, column),
            Ok(Command::Quit) => break,
            Err(message) => println!("{message}"),
        }
        prompt(&session);
    }

    Ok(())
}

/// Resolves the row id against the rows on screen and opens the edit
/// session, mirroring a click on a rendered cell.
fn start_edit(
    session: &mut TableSession,
    last_view: &Rc<RefCell<Option<TableView>>>,
    row: usize,
    column: usize,
) {
    let target = last_view
        .borrow()
        .as_ref()
        .and_then(|view| view.rows.iter().find(|r| r.id.index() == row).map(|r| r.id));
    let Some(target) = target else {
        println!("row {row} is not on the current page");
        return;
    };

    match session.begin_edit(target, column) {
        Ok(()) => {
            if let Some(open) = session.editing() {
                println!(
                    "editing row {}, column {} (current value: \"{}\"); enter the new value:",
                    open.row(),
                    open.column(),
                    open.original_value()
                );
            }
        }
        Err(error) => println!("{error}"),
    }
}

fn prompt(session: &TableSession) {
    if session.editing().is_some() {
        print!("new value> ");
    } else {
        print!("> ");
    }
    use std::io::Write;
    let _ = std::io::stdout().flush();
}
