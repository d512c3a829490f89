//! Plain-text rendering of computed table views.

use gridview_lib::TableView;
use gridview_lib::table::ColumnView;
use gridview_lib::table::SortIndicator;

/// Draws one view snapshot to stdout.
///
/// This is the render-callback side of the engine: it consumes whatever the
/// session computed and holds no table state of its own.
pub fn draw(view: &TableView) {
    println!();
    if let Some(term) = &view.filter {
        println!("filter: \"{term}\"  (remove with `clear`)");
    }

    let visible: Vec<&ColumnView> = view.columns.iter().filter(|c| c.visible).collect();
    let widths = column_widths(view, &visible);
    let id_width = view
        .rows
        .iter()
        .map(|row| row.id.to_string().len())
        .max()
        .unwrap_or(1)
        .max(2);

    // Header row
    let mut header = format!("{:>id_width$}  ", "id");
    for (column, &width) in visible.iter().zip(&widths) {
        header.push_str(&format!("{:<width$}  ", header_text(column)));
    }
    println!("{}", header.trim_end());

    if view.no_results {
        println!("No results found. Please try again");
    } else {
        for row in &view.rows {
            let mut line = format!("{:>id_width$}  ", row.id.to_string());
            for (column, &width) in visible.iter().zip(&widths) {
                line.push_str(&format!("{:<width$}  ", row.cells[column.index].to_string()));
            }
            println!("{}", line.trim_end());
        }
    }

    if !view.pages.is_empty() {
        let mut line = String::from("pages:");
        for button in &view.pages {
            if button.current {
                line.push_str(&format!(" [{}]", button.number));
            } else {
                line.push_str(&format!(" {}", button.number));
            }
        }
        println!("{line}");
    }

    if !view.hidden_labels.is_empty() {
        println!(
            "hidden columns: {}  (restore with `show <col>`)",
            view.hidden_labels.join(", ")
        );
    }
}

/// Lists all columns with their indices, for the `columns` command.
pub fn draw_columns(view: &TableView) {
    for column in &view.columns {
        let marker = match column.sort {
            SortIndicator::Ascending => " ^",
            SortIndicator::Descending => " v",
            SortIndicator::None => "",
        };
        let visibility = if column.visible { "" } else { " (hidden)" };
        println!(
            "  [{}] {} ({}){}{}",
            column.index, column.label, column.key, marker, visibility
        );
    }
}

fn header_text(column: &ColumnView) -> String {
    let glyph = match column.sort {
        SortIndicator::Ascending => " ^",
        SortIndicator::Descending => " v",
        SortIndicator::None => "",
    };
    format!("{}{}", column.label, glyph)
}

/// Computes one display width per visible column: the widest of the header
/// text and every cell on the current page.
fn column_widths(view: &TableView, visible: &[&ColumnView]) -> Vec<usize> {
    visible
        .iter()
        .map(|column| {
            let header = header_text(column).len();
            view.rows
                .iter()
                .map(|row| row.cells[column.index].to_string().len())
                .max()
                .unwrap_or(0)
                .max(header)
        })
        .collect()
}
