use scraper::{ElementRef, Html, Node, Selector};

/// Text content of one `<table>`, with spans expanded into a rectangular grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column labels taken from the last header row. Empty when the table has no header.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug)]
struct Cell {
    text: String,
    rowspan: usize,
    colspan: usize,
}

#[derive(Debug)]
struct Row {
    cells: Vec<Cell>,
    header: bool,
}

#[derive(Debug)]
struct Span {
    remaining: usize,
    text: String,
}

/// Every displayed `<table>` in the document, in document order.
///
/// Tables that are hidden, carry no visible text or yield no rows are skipped and
/// do not take up a position in the result.
pub fn parse_tables(html: &str) -> Vec<RawTable> {
    let document = Html::parse_document(html);
    let Ok(table_selector) = Selector::parse("table") else {
        return Vec::new();
    };
    document
        .select(&table_selector)
        .filter(|table| is_displayed(*table) && has_visible_text(*table))
        .map(read_table)
        .filter(|table| !table.headers.is_empty() || !table.rows.is_empty())
        .collect()
}

fn is_displayed(table: ElementRef<'_>) -> bool {
    !is_hidden(table.value())
        && !table
            .ancestors()
            .filter_map(|node| node.value().as_element())
            .any(is_hidden)
}

fn has_visible_text(table: ElementRef<'_>) -> bool {
    let mut text = String::new();
    collect_text(table, &mut text);
    !text.trim().is_empty()
}

fn read_table(table: ElementRef<'_>) -> RawTable {
    let rows = table_rows(table);

    let header_count = rows.iter().take_while(|row| row.header).count();
    let mut grid = expand_spans(&rows);
    let body = grid.split_off(header_count);
    let headers = grid.pop().unwrap_or_default();

    let mut table = RawTable {
        headers,
        rows: body,
    };
    let width = table.width();
    for row in &mut table.rows {
        row.resize(width, String::new());
    }
    table
}

/// Rows that belong to this table only; rows of nested tables are left to their own table.
fn table_rows(table: ElementRef<'_>) -> Vec<Row> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(read_row(child, false)),
            section @ ("thead" | "tbody" | "tfoot") => {
                for tr in child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr")
                {
                    rows.push(read_row(tr, section == "thead"));
                }
            }
            _ => {}
        }
    }
    rows
}

fn read_row(tr: ElementRef<'_>, in_thead: bool) -> Row {
    let mut all_th = true;
    let mut cells = Vec::new();
    for cell in tr.children().filter_map(ElementRef::wrap) {
        let name = cell.value().name();
        if name != "td" && name != "th" {
            continue;
        }
        all_th &= name == "th";
        cells.push(Cell {
            text: cell_text(cell),
            rowspan: span_attr(cell, "rowspan"),
            colspan: span_attr(cell, "colspan"),
        });
    }
    let header = in_thead || (all_th && !cells.is_empty());
    Row { cells, header }
}

fn span_attr(cell: ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(cell, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if el.name() == "br" {
                    out.push(' ');
                    continue;
                }
                if is_hidden(el) {
                    continue;
                }
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Footnote markers and hidden sort keys are not part of the visible cell value.
fn is_hidden(el: &scraper::node::Element) -> bool {
    if el.name() == "sup" && el.classes().any(|class| class == "reference") {
        return true;
    }
    if matches!(el.name(), "style" | "script") {
        return true;
    }
    el.attr("style")
        .map(|style| style.replace(' ', "").to_ascii_lowercase().contains("display:none"))
        .unwrap_or(false)
}

fn expand_spans(rows: &[Row]) -> Vec<Vec<String>> {
    let mut carried: Vec<Option<Span>> = Vec::new();
    let mut grid = Vec::with_capacity(rows.len());

    for row in rows {
        let mut line = Vec::with_capacity(carried.len().max(row.cells.len()));
        let mut cells = row.cells.iter();
        let mut col = 0;
        loop {
            if let Some(slot) = carried.get_mut(col) {
                if let Some(span) = slot.take() {
                    line.push(span.text.clone());
                    if span.remaining > 1 {
                        *slot = Some(Span {
                            remaining: span.remaining - 1,
                            text: span.text,
                        });
                    }
                    col += 1;
                    continue;
                }
            }

            let Some(cell) = cells.next() else {
                // a gap before a span that is still running further right
                let pending = carried
                    .get(col..)
                    .is_some_and(|rest| rest.iter().any(Option::is_some));
                if pending {
                    line.push(String::new());
                    col += 1;
                    continue;
                }
                break;
            };

            for _ in 0..cell.colspan {
                if carried.len() <= col {
                    carried.resize_with(col + 1, || None);
                }
                if cell.rowspan > 1 {
                    carried[col] = Some(Span {
                        remaining: cell.rowspan - 1,
                        text: cell.text.clone(),
                    });
                }
                line.push(cell.text.clone());
                col += 1;
            }
        }
        grid.push(line);
    }

    grid
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
