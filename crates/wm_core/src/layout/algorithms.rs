//! Concrete layout algorithms.
//!
//! Modeled on `{transformers, messages}`-style layout halving/stacking
//! helpers, generalized to the full layout list. Every function
//! takes the already gap-inset work area and
//! returns one [`Rect`] per tileable client, in attach order; master
//! clients (if any) always occupy the first `nmaster.min(n)` slots of the
//! returned vector.
//!
//! Tie-break rule throughout: round down, give remainder pixels to the
//! last tile in a row/column, never let a dimension fall below 1px
//! pre-border (enforced by [`crate::geometry::Rect::columns`]/`rows`).

use crate::geometry::Rect;
use crate::model::monitor::Gaps;

fn gap_rows(area: Rect, inner_v: u32, n: u32) -> Vec<Rect> {
    let rows = area.rows(n);
    if n <= 1 || inner_v == 0 {
        return rows;
    }
    // redistribute: shrink each row's height to make room for inner gaps,
    // stacking them back to back with `inner_v` of space between.
    let total_gap = inner_v * (n - 1);
    let usable_h = area.h.saturating_sub(total_gap).max(n);
    let shrunk = Rect::new(area.x, area.y, area.w, usable_h).rows(n);
    let mut out = Vec::with_capacity(rows.len());
    let mut y = area.y;
    for r in shrunk {
        out.push(Rect::new(r.x, y, r.w, r.h));
        y += r.h as i32 + inner_v as i32;
    }
    out
}

fn gap_columns(area: Rect, inner_h: u32, n: u32) -> Vec<Rect> {
    let cols = area.columns(n);
    if n <= 1 || inner_h == 0 {
        return cols;
    }
    let total_gap = inner_h * (n - 1);
    let usable_w = area.w.saturating_sub(total_gap).max(n);
    let shrunk = Rect::new(area.x, area.y, usable_w, area.h).columns(n);
    let mut out = Vec::with_capacity(cols.len());
    let mut x = area.x;
    for c in shrunk {
        out.push(Rect::new(x, c.y, c.w, c.h));
        x += c.w as i32 + inner_h as i32;
    }
    out
}

/// Classic master-column-left / stack-column-right layout.
pub fn tile(area: Rect, gaps: Gaps, mfact: f32, nmaster: u32, n: usize) -> Vec<Rect> {
    let n = n as u32;
    let nmaster = nmaster.min(n);
    let nstack = n - nmaster;

    if nmaster == 0 {
        return gap_rows(area, gaps.inner_v, nstack);
    }
    if nstack == 0 {
        return gap_rows(area, gaps.inner_v, nmaster);
    }

    let master_w = (area.w as f32 * mfact) as u32;
    let (master_area, stack_area) = area.split_x(master_w.max(1));
    let master_area = Rect::new(master_area.x, master_area.y, master_area.w, master_area.h);
    let stack_area = Rect::new(
        stack_area.x + gaps.inner_h as i32,
        stack_area.y,
        stack_area.w.saturating_sub(gaps.inner_h),
        stack_area.h,
    );

    let mut out = gap_rows(master_area, gaps.inner_v, nmaster);
    out.extend(gap_rows(stack_area, gaps.inner_v, nstack));
    out
}

/// Every tile fills the whole work area (only the topmost is actually
/// visible on screen; stacking order decides which).
pub fn monocle(area: Rect, n: usize) -> Vec<Rect> {
    vec![area; n]
}

/// Like [`tile`], but stack clients all occupy the identical stack rect
/// (only the topmost is shown).
pub fn deck(area: Rect, gaps: Gaps, mfact: f32, nmaster: u32, n: usize) -> Vec<Rect> {
    let n_u = n as u32;
    let nmaster = nmaster.min(n_u);
    let nstack = n_u - nmaster;
    if nmaster == 0 || nstack == 0 {
        return vec![area; n];
    }
    let master_w = (area.w as f32 * mfact) as u32;
    let (master_area, stack_area) = area.split_x(master_w.max(1));

    let mut out = gap_rows(master_area, gaps.inner_v, nmaster);
    out.extend(vec![stack_area; nstack as usize]);
    out
}

/// Master row on top; stack across the bottom as side-by-side columns.
pub fn bstack(area: Rect, gaps: Gaps, mfact: f32, nmaster: u32, n: usize) -> Vec<Rect> {
    let n_u = n as u32;
    let nmaster = nmaster.min(n_u);
    let nstack = n_u - nmaster;

    if nmaster == 0 {
        return gap_columns(area, gaps.inner_h, nstack);
    }
    if nstack == 0 {
        return gap_columns(area, gaps.inner_h, nmaster);
    }

    let master_h = (area.h as f32 * mfact) as u32;
    let (master_area, stack_area) = area.split_y(master_h.max(1));
    let stack_area = Rect::new(
        stack_area.x,
        stack_area.y + gaps.inner_v as i32,
        stack_area.w,
        stack_area.h.saturating_sub(gaps.inner_v),
    );

    let mut out = gap_columns(master_area, gaps.inner_h, nmaster);
    out.extend(gap_columns(stack_area, gaps.inner_h, nstack));
    out
}

/// Same split as [`bstack`] but the bottom area is divided into rows
/// instead of columns.
pub fn bstackhoriz(area: Rect, gaps: Gaps, mfact: f32, nmaster: u32, n: usize) -> Vec<Rect> {
    let n_u = n as u32;
    let nmaster = nmaster.min(n_u);
    let nstack = n_u - nmaster;

    if nmaster == 0 {
        return gap_rows(area, gaps.inner_v, nstack);
    }
    if nstack == 0 {
        return gap_rows(area, gaps.inner_v, nmaster);
    }

    let master_h = (area.h as f32 * mfact) as u32;
    let (master_area, stack_area) = area.split_y(master_h.max(1));
    let stack_area = Rect::new(
        stack_area.x,
        stack_area.y + gaps.inner_v as i32,
        stack_area.w,
        stack_area.h.saturating_sub(gaps.inner_v),
    );

    let mut out = gap_columns(master_area, gaps.inner_h, nmaster);
    out.extend(gap_rows(stack_area, gaps.inner_v, nstack));
    out
}

/// `ceil(sqrt(n))` columns by `ceil(n / cols)` rows; remainder cells are
/// simply left unfilled on the last row (handled by the caller only
/// producing `n` rects, not `cols*rows`).
pub fn grid(area: Rect, gaps: Gaps, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let cols = (n as f64).sqrt().ceil() as u32;
    let rows = ((n as u32) + cols - 1) / cols;
    let col_rects = gap_columns(area, gaps.inner_h, cols);

    let mut out = Vec::with_capacity(n);
    let mut remaining = n as u32;
    for col_rect in col_rects {
        let this_col_n = remaining.min(rows);
        out.extend(gap_rows(col_rect, gaps.inner_v, this_col_n));
        remaining -= this_col_n;
        if remaining == 0 {
            break;
        }
    }
    out
}

/// Grid variant where the master count selects the number of rows for
/// the master clients; remaining clients are distributed across the
/// remaining rows of the same width.
pub fn nrowgrid(area: Rect, gaps: Gaps, nmaster: u32, n: usize) -> Vec<Rect> {
    let n_u = n as u32;
    if n_u == 0 {
        return Vec::new();
    }
    let nmaster = nmaster.min(n_u).max(1);
    let rows = nmaster.min(n_u);
    let row_rects = gap_rows(area, gaps.inner_v, rows);

    let base_cols = n_u / rows;
    let extra = n_u % rows;

    let mut out = Vec::with_capacity(n);
    for (i, row) in row_rects.into_iter().enumerate() {
        let cols_in_row = base_cols + if (i as u32) < extra { 1 } else { 0 };
        out.extend(gap_columns(row, gaps.inner_h, cols_in_row.max(1)));
    }
    out
}

/// All clients arranged as full-width horizontal rows.
pub fn horizgrid(area: Rect, gaps: Gaps, n: usize) -> Vec<Rect> {
    gap_rows(area, gaps.inner_v, n as u32)
}

/// Like [`grid`] but the last, partially filled column is stretched so
/// its clients fill the full column height with no empty remainder cell.
pub fn gaplessgrid(area: Rect, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let n_u = n as u32;
    let cols = (n_u as f64).sqrt().ceil() as u32;
    let base_rows = n_u / cols;
    let extra = n_u % cols; // first `extra` columns carry one more row each

    let col_rects = area.columns(cols);
    let mut out = Vec::with_capacity(n);
    for (i, col_rect) in col_rects.into_iter().enumerate() {
        let rows_here = base_rows + if (i as u32) < extra { 1 } else { 0 };
        out.extend(col_rect.rows(rows_here.max(1)));
    }
    out
}

/// Master column centered in the work area; stack clients split evenly
/// left and right of it.
pub fn centeredmaster(area: Rect, gaps: Gaps, mfact: f32, nmaster: u32, n: usize) -> Vec<Rect> {
    let n_u = n as u32;
    let nmaster = nmaster.min(n_u);
    let nstack = n_u - nmaster;

    if nstack == 0 {
        return gap_rows(area, gaps.inner_v, nmaster);
    }
    if nmaster == 0 {
        let left_n = nstack / 2;
        let right_n = nstack - left_n;
        let (left, right) = area.split_x(area.w / 2);
        let mut out = gap_rows(left, gaps.inner_v, left_n);
        out.extend(gap_rows(right, gaps.inner_v, right_n));
        return out;
    }

    let master_w = (area.w as f32 * mfact) as u32;
    let side_w = area.w.saturating_sub(master_w) / 2;
    let left_n = nstack / 2;
    let right_n = nstack - left_n;

    let left = Rect::new(area.x, area.y, side_w.max(1), area.h);
    let master = Rect::new(area.x + side_w as i32, area.y, master_w.max(1), area.h);
    let right = Rect::new(
        area.x + (side_w + master_w) as i32,
        area.y,
        area.w.saturating_sub(side_w + master_w).max(1),
        area.h,
    );

    let mut out = gap_rows(left, gaps.inner_v, left_n);
    out.extend(gap_rows(master, gaps.inner_v, nmaster));
    out.extend(gap_rows(right, gaps.inner_v, right_n));
    out
}

/// Master client(s) rendered at a floating-style size centered on screen;
/// stack clients tiled full-width behind them.
pub fn centeredfloatingmaster(area: Rect, mfact: f32, nmaster: u32, n: usize) -> Vec<Rect> {
    let n_u = n as u32;
    let nmaster = nmaster.min(n_u);
    let nstack = n_u - nmaster;

    let stack_rects = if nstack > 0 { area.rows(nstack) } else { Vec::new() };

    let mw = (area.w as f32 * mfact) as u32;
    let mh = (area.h as f32 * mfact) as u32;
    let mx = area.x + (area.w.saturating_sub(mw) / 2) as i32;
    let my = area.y + (area.h.saturating_sub(mh) / 2) as i32;
    let master_rects: Vec<Rect> = (0..nmaster)
        .map(|i| Rect::new(mx + i as i32 * 24, my + i as i32 * 24, mw.max(1), mh.max(1)))
        .collect();

    let mut out = master_rects;
    out.extend(stack_rects);
    out
}

/// Recursive halving, alternating the split axis. `spiral = true` rotates
/// the corner taken at each step (spiral layout); `spiral = false` always
/// takes the top-left corner, nesting the remainder toward the
/// bottom-right (dwindle layout).
pub fn fibonacci(area: Rect, n: usize, spiral: bool) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n);
    let mut remaining_area = area;
    let mut horizontal_split = true;
    let mut corner = 0u8; // 0=TL,1=TR,2=BR,3=BL, only advances when spiral

    for i in 0..n {
        if i == n - 1 {
            out.push(remaining_area);
            break;
        }
        let (piece, rest) = if horizontal_split {
            let (a, b) = remaining_area.split_x(remaining_area.w / 2);
            (a, b)
        } else {
            let (a, b) = remaining_area.split_y(remaining_area.h / 2);
            (a, b)
        };

        let (taken, next_area) = if spiral {
            match corner % 4 {
                0 => (piece, rest),
                1 => (rest, piece),
                2 => (rest, piece),
                _ => (piece, rest),
            }
        } else {
            (piece, rest)
        };

        out.push(taken);
        remaining_area = next_area;
        horizontal_split = !horizontal_split;
        if spiral {
            corner = corner.wrapping_add(1);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::monitor::Gaps;

    #[test]
    fn tile_s3_two_clients() {
        let area = Rect::new(0, 0, 1920, 1080);
        let rects = tile(area, Gaps::default(), 0.55, 1, 2);
        assert_eq!(rects[0], Rect::new(0, 0, 1056, 1080));
        assert_eq!(rects[1], Rect::new(1056, 0, 864, 1080));
    }

    #[test]
    fn monocle_fills_whole_area() {
        let area = Rect::new(0, 0, 1920, 1080);
        let rects = monocle(area, 3);
        assert_eq!(rects.len(), 3);
        assert!(rects.iter().all(|r| *r == area));
    }

    #[test]
    fn grid_covers_all_n_cells_for_seven() {
        let area = Rect::new(0, 0, 1400, 700);
        let rects = grid(area, Gaps::default(), 7);
        assert_eq!(rects.len(), 7);
    }

    #[test]
    fn fibonacci_dwindle_produces_n_rects_and_last_two_partition_remainder() {
        let area = Rect::new(0, 0, 1600, 900);
        let rects = fibonacci(area, 4, false);
        assert_eq!(rects.len(), 4);
    }

    #[test]
    fn tile_single_master_no_stack_takes_full_width() {
        let area = Rect::new(0, 0, 1920, 1080);
        let rects = tile(area, Gaps::default(), 0.55, 1, 1);
        assert_eq!(rects[0], area);
    }
}
