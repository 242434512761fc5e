//! Terminal rendering of the salary treemap.
//!
//! The squarified layout is computed in a space [`COLS`] wide and
//! `ROWS * CELL_ASPECT` tall so that tiles look roughly square once mapped
//! onto character cells, which are about twice as tall as they are wide.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::statistics::EmployeeStatistics;
use crate::domain::error::StatsError;
use crate::domain::treemap::{self, Rect, Tile};
use crate::error::Result;
use crate::port::outbound::source::RecordSource;

/// Chart width in character cells.
pub const COLS: usize = 72;
/// Chart height in character cells.
pub const ROWS: usize = 20;
/// Height of a character cell relative to its width.
const CELL_ASPECT: f64 = 2.0;

#[derive(Tabled)]
struct LegendRow {
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Print the treemap of salary/age pairs followed by its legend.
pub fn print_treemap<S: RecordSource>(stats: &EmployeeStatistics<S>) -> Result<()> {
    let pairs = stats.salary_age_pairs()?;
    if pairs.is_empty() {
        return Err(StatsError::EmptyInput.into());
    }

    let bounds = Rect::new(0.0, 0.0, COLS as f64, ROWS as f64 * CELL_ASPECT);
    let tiles = treemap::squarify(&pairs, bounds);
    let total: f64 = pairs.iter().map(|p| p.salary).filter(|s| *s > 0.0).sum();

    if output::is_json() {
        let tiles: Vec<_> = tiles
            .iter()
            .map(|t| {
                json!({
                    "salary": t.pair.salary,
                    "age": t.pair.age,
                    "x": t.rect.x,
                    "y": t.rect.y,
                    "width": t.rect.width,
                    "height": t.rect.height,
                })
            })
            .collect();
        output::json_output(
            "treemap",
            json!({
                "bounds": [bounds.width, bounds.height],
                "tiles": tiles,
            }),
        );
        return Ok(());
    }

    output::section("Salaries by age");
    output::lines("treemap", &render(&tiles, COLS, ROWS));

    let legend: Vec<LegendRow> = tiles
        .iter()
        .map(|t| LegendRow {
            salary: output::number(t.pair.salary),
            age: format!("{:.0}", t.pair.age),
            share: format!("{:.1}%", share(t.pair.salary, total)),
        })
        .collect();
    let table = Table::new(legend).to_string();
    output::lines("legend", &table.lines().map(str::to_string).collect::<Vec<_>>());
    Ok(())
}

fn share(salary: f64, total: f64) -> f64 {
    if total > 0.0 && salary > 0.0 {
        salary / total * 100.0
    } else {
        0.0
    }
}

/// Draw tiles laid out in `cols` x `rows * CELL_ASPECT` space onto a
/// character grid with shared borders, each labeled with its age.
#[must_use]
pub fn render(tiles: &[Tile], cols: usize, rows: usize) -> Vec<String> {
    let mut grid = vec![vec![' '; cols + 1]; rows + 1];

    for tile in tiles {
        let Some((x0, y0, x1, y1)) = cells(&tile.rect, cols, rows) else {
            continue;
        };

        for x in x0..=x1 {
            stroke(&mut grid, y0, x, '-');
            stroke(&mut grid, y1, x, '-');
        }
        for y in y0..=y1 {
            stroke(&mut grid, y, x0, '|');
            stroke(&mut grid, y, x1, '|');
        }
        for (y, x) in [(y0, x0), (y0, x1), (y1, x0), (y1, x1)] {
            grid[y][x] = '+';
        }

        let label = format!("{:.0}", tile.pair.age);
        let inner = x1 - x0 - 1;
        if y1 - y0 >= 2 && label.len() <= inner {
            let row = (y0 + y1) / 2;
            let start = x0 + 1 + (inner - label.len()) / 2;
            for (i, ch) in label.chars().enumerate() {
                grid[row][start + i] = ch;
            }
        }
    }

    grid.into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Grid cells of a rectangle's corners, or `None` when it collapses.
fn cells(rect: &Rect, cols: usize, rows: usize) -> Option<(usize, usize, usize, usize)> {
    let col = |x: f64| (x.round().max(0.0) as usize).min(cols);
    let row = |y: f64| ((y / CELL_ASPECT).round().max(0.0) as usize).min(rows);

    let (x0, x1) = (col(rect.x), col(rect.x + rect.width));
    let (y0, y1) = (row(rect.y), row(rect.y + rect.height));
    (x1 > x0 && y1 > y0).then_some((x0, y0, x1, y1))
}

/// Draw an edge character, turning crossings into `+`.
fn stroke(grid: &mut [Vec<char>], y: usize, x: usize, ch: char) {
    let cell = &mut grid[y][x];
    *cell = match *cell {
        ' ' => ch,
        existing if existing == ch => ch,
        _ => '+',
    };
}
