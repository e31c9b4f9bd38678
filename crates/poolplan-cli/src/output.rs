use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Round-dollar display used throughout the tables.
pub fn dollars(amount: f64) -> String {
    format!("${:.0}", amount)
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Table column: a title plus how its cells line up.
#[derive(Clone, Copy)]
pub struct Column {
    title: &'static str,
    align: Align,
}

/// Left-aligned text column.
pub fn col(title: &'static str) -> Column {
    Column { title, align: Align::Left }
}

/// Right-aligned column for dollar amounts and other figures.
pub fn amount(title: &'static str) -> Column {
    Column { title, align: Align::Right }
}

pub fn print_table(columns: &[Column], rows: Vec<Vec<String>>) {
    print!("{}", render_table(columns, &rows));
}

fn render_table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.title.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let mut out = String::new();
    let titles: Vec<String> = columns.iter().map(|c| c.title.to_string()).collect();
    push_row(&mut out, columns, &widths, &titles);

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, columns, &widths, &rule);

    for row in rows {
        push_row(&mut out, columns, &widths, row);
    }
    out
}

fn push_row(out: &mut String, columns: &[Column], widths: &[usize], cells: &[String]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let width = widths.get(i).copied().unwrap_or(0);
        let align = columns.get(i).map(|c| c.align).unwrap_or(Align::Left);
        match align {
            Align::Left => line.push_str(&format!("{cell:<width$}")),
            Align::Right => line.push_str(&format!("{cell:>width$}")),
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_columns_right_align() {
        let table = render_table(
            &[col("CATEGORY"), amount("COST")],
            &[
                vec!["Labor & Installation".to_string(), dollars(12_600.0).to_string()],
                vec!["Excavation".to_string(), dollars(5_000.0).to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "Labor & Installation  $12600");
        // Shorter amounts line up on the right edge of the column.
        assert!(lines[3].ends_with(" $5000"));
        assert_eq!(lines[2].len(), lines[3].len());
    }

    #[test]
    fn columns_widen_to_longest_cell() {
        let table = render_table(
            &[col("A"), col("B")],
            &[vec!["wide cell".to_string(), "x".to_string()]],
        );
        assert!(table.starts_with("A          B\n"));
    }

    #[test]
    fn rows_have_no_trailing_whitespace() {
        let table = render_table(
            &[col("FIELD"), col("VALUE")],
            &[vec!["size".to_string(), "Medium".to_string()]],
        );
        for line in table.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
