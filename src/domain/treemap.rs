//! Squarified treemap layout.
//!
//! Lays out salary/age pairs as rectangles whose areas are proportional to
//! salary, using the squarified algorithm of Bruls, Huizing and van Wijk
//! (2000): tiles are placed largest first, and a row keeps growing while the
//! worst aspect ratio in it improves.
//!
//! The layout is pure geometry in an abstract coordinate space; turning it
//! into terminal output is left to the CLI.

use super::employee::SalaryAgePair;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// One placed tile: the pair it represents and where it landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub pair: SalaryAgePair,
    pub rect: Rect,
}

/// Lay out `pairs` inside `bounds`.
///
/// Returns one tile per pair, in input order. Non-positive salaries get a
/// zero-area tile at the origin of `bounds`.
#[must_use]
pub fn squarify(pairs: &[SalaryAgePair], bounds: Rect) -> Vec<Tile> {
    let rects = layout(&pairs.iter().map(|p| p.salary).collect::<Vec<_>>(), bounds);
    pairs
        .iter()
        .zip(rects)
        .map(|(&pair, rect)| Tile { pair, rect })
        .collect()
}

/// Squarified layout of raw magnitudes; output order matches input order.
#[must_use]
pub fn layout(values: &[f64], bounds: Rect) -> Vec<Rect> {
    let empty = Rect::new(bounds.x, bounds.y, 0.0, 0.0);
    let mut rects = vec![empty; values.len()];

    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 || bounds.area() <= 0.0 {
        return rects;
    }

    // Largest first; ties keep input order.
    let mut order: Vec<usize> = (0..values.len()).filter(|&i| values[i] > 0.0).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let scale = bounds.area() / total;
    let mut free = bounds;
    let mut row: Vec<(usize, f64)> = Vec::new();

    for index in order {
        let area = values[index] * scale;
        let side = free.short_side();
        if row.is_empty() || worst_with(&row, area, side) <= worst(&row, side) {
            row.push((index, area));
            continue;
        }
        free = place_row(&row, free, &mut rects);
        row.clear();
        row.push((index, area));
    }
    if !row.is_empty() {
        place_row(&row, free, &mut rects);
    }

    rects
}

/// Worst aspect ratio of a row laid along a side of length `side`.
fn worst(row: &[(usize, f64)], side: f64) -> f64 {
    let (sum, min, max) = row.iter().fold(
        (0.0_f64, f64::INFINITY, 0.0_f64),
        |(sum, min, max), &(_, a)| (sum + a, min.min(a), max.max(a)),
    );
    aspect(sum, min, max, side)
}

fn worst_with(row: &[(usize, f64)], extra: f64, side: f64) -> f64 {
    let (sum, min, max) = row.iter().fold(
        (extra, extra, extra),
        |(sum, min, max), &(_, a)| (sum + a, min.min(a), max.max(a)),
    );
    aspect(sum, min, max, side)
}

fn aspect(sum: f64, min: f64, max: f64, side: f64) -> f64 {
    let side2 = side * side;
    let sum2 = sum * sum;
    (side2 * max / sum2).max(sum2 / (side2 * min))
}

/// Place a finished row against the short side of `free` and return the
/// space that is left.
fn place_row(row: &[(usize, f64)], free: Rect, rects: &mut [Rect]) -> Rect {
    let sum: f64 = row.iter().map(|&(_, a)| a).sum();

    if free.width >= free.height {
        // Column along the left edge.
        let column = sum / free.height;
        let mut y = free.y;
        for &(index, area) in row {
            let height = area / column;
            rects[index] = Rect::new(free.x, y, column, height);
            y += height;
        }
        Rect::new(free.x + column, free.y, free.width - column, free.height)
    } else {
        // Row along the top edge.
        let band = sum / free.width;
        let mut x = free.x;
        for &(index, area) in row {
            let width = area / band;
            rects[index] = Rect::new(x, free.y, width, band);
            x += width;
        }
        Rect::new(free.x, free.y + band, free.width, free.height - band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn pair(salary: f64, age: f64) -> SalaryAgePair {
        SalaryAgePair { salary, age }
    }

    fn inside(rect: &Rect, bounds: &Rect) -> bool {
        rect.x >= bounds.x - EPS
            && rect.y >= bounds.y - EPS
            && rect.x + rect.width <= bounds.x + bounds.width + EPS
            && rect.y + rect.height <= bounds.y + bounds.height + EPS
    }

    #[test]
    fn areas_are_proportional_to_salary() {
        let pairs = [
            pair(86_000.0, 22.0),
            pair(162_700.0, 33.0),
            pair(170_750.0, 63.0),
            pair(320_800.0, 61.0),
            pair(433_060.0, 22.0),
        ];
        let bounds = Rect::new(0.0, 0.0, 60.0, 40.0);
        let tiles = squarify(&pairs, bounds);
        let total: f64 = pairs.iter().map(|p| p.salary).sum();

        assert_eq!(tiles.len(), pairs.len());
        for tile in &tiles {
            let expected = tile.pair.salary / total * bounds.area();
            assert!((tile.rect.area() - expected).abs() < EPS);
            assert!(inside(&tile.rect, &bounds));
        }
        let covered: f64 = tiles.iter().map(|t| t.rect.area()).sum();
        assert!((covered - bounds.area()).abs() < EPS);
    }

    #[test]
    fn tiles_keep_input_order() {
        let pairs = [pair(1.0, 10.0), pair(3.0, 30.0), pair(2.0, 20.0)];
        let tiles = squarify(&pairs, Rect::new(0.0, 0.0, 6.0, 1.0));
        let ages: Vec<f64> = tiles.iter().map(|t| t.pair.age).collect();
        assert_eq!(ages, vec![10.0, 30.0, 20.0]);
    }

    #[test]
    fn equal_values_in_a_square_form_a_grid() {
        let rects = layout(&[1.0, 1.0, 1.0, 1.0], Rect::new(0.0, 0.0, 2.0, 2.0));
        for rect in &rects {
            assert!((rect.width - 1.0).abs() < EPS);
            assert!((rect.height - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn tiles_do_not_overlap() {
        let rects = layout(&[6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0], Rect::new(0.0, 0.0, 6.0, 4.0));
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                let overlap_x = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
                let overlap_y = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
                assert!(overlap_x <= EPS || overlap_y <= EPS, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn non_positive_values_get_empty_tiles() {
        let rects = layout(&[0.0, 5.0, -1.0], Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(rects[0].area(), 0.0);
        assert_eq!(rects[2].area(), 0.0);
        assert!((rects[1].area() - 16.0).abs() < EPS);
    }

    #[test]
    fn empty_input_yields_no_tiles() {
        assert!(squarify(&[], Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }
}
