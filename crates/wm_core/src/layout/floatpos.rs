//! `setfloatpos` — the compact floating-position/size DSL.
//!
//! Modeled on small recursive-descent parsers for status line escapes
//! (`bar::status2d`), adapted here to a dedicated position grammar: the
//! house style for small embedded languages is "hand write a tiny token
//! scanner instead of pulling in a parser combinator crate."

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosCode {
    Absolute,
    RelativeUnclamped,
    RelativeClamped,
    WorkAreaOffset,
    Sticky,
    Center,
    RightAnchor,
    Grid,
    Percent,
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCode {
    Absolute,
    Relative,
    Percent,
    Normal,
    RelativeToClient,
    GridPaired,
}

fn pos_code(c: char) -> Option<PosCode> {
    match c {
        'A' => Some(PosCode::Absolute),
        'a' => Some(PosCode::RelativeUnclamped),
        'x' | 'y' => Some(PosCode::RelativeClamped),
        'X' | 'Y' => Some(PosCode::WorkAreaOffset),
        'S' => Some(PosCode::Sticky),
        'C' => Some(PosCode::Center),
        'Z' => Some(PosCode::RightAnchor),
        'G' => Some(PosCode::Grid),
        '%' => Some(PosCode::Percent),
        'm' | 'M' => Some(PosCode::Pointer),
        _ => None,
    }
}

fn size_code(c: char) -> Option<SizeCode> {
    match c {
        'A' => Some(SizeCode::Absolute),
        'a' => Some(SizeCode::Relative),
        '%' => Some(SizeCode::Percent),
        'H' | 'W' => Some(SizeCode::Normal),
        'h' | 'w' => Some(SizeCode::RelativeToClient),
        'p' | 'P' => Some(SizeCode::GridPaired),
        _ => None,
    }
}

struct Token {
    value: f64,
    code: char,
}

fn tokenize(spec: &str) -> Option<Vec<Token>> {
    let mut out = Vec::new();
    for word in spec.split_whitespace() {
        let split_at = word.find(|c: char| c.is_alphabetic() || c == '%')?;
        let (num, code) = word.split_at(split_at);
        let value: f64 = num.parse().ok()?;
        let code = code.chars().next()?;
        out.push(Token { value, code });
    }
    if out.len() == 4 || out.len() == 8 {
        Some(out)
    } else {
        None
    }
}

/// Resolved floating geometry plus the layout engine flags it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedFloatPos {
    pub rect: Rect,
    /// Set once a `setfloatpos` call resolves, so the computed geometry
    /// is honored verbatim instead of being clamped by size hints.
    pub ignore_size_hints: bool,
}

/// Current client geometry and monitor context needed to resolve relative
/// position codes.
pub struct FloatPosContext {
    pub client_rect: Rect,
    pub work_area: Rect,
    pub pointer: (i32, i32),
    pub grid_cells: u32,
}

/// `resolved_extent` is this axis's already-resolved width/height,
/// needed by [`PosCode::Percent`] which places the client's *midpoint*
/// (not its top-left corner) at the given percentage.
fn resolve_position(code: PosCode, value: f64, axis_is_x: bool, ctx: &FloatPosContext, resolved_extent: u32) -> i32 {
    let (wa_origin, wa_extent, cur) = if axis_is_x {
        (ctx.work_area.x, ctx.work_area.w as i32, ctx.client_rect.x)
    } else {
        (ctx.work_area.y, ctx.work_area.h as i32, ctx.client_rect.y)
    };
    match code {
        PosCode::Absolute => value as i32,
        PosCode::RelativeUnclamped => cur + value as i32,
        PosCode::RelativeClamped => {
            let p = cur + value as i32;
            p.clamp(wa_origin, wa_origin + wa_extent - 1)
        }
        PosCode::WorkAreaOffset => wa_origin + value as i32,
        PosCode::Percent => {
            let midpoint = wa_origin + ((value / 100.0) * wa_extent as f64) as i32;
            midpoint - resolved_extent as i32 / 2
        }
        PosCode::Pointer => (if axis_is_x { ctx.pointer.0 } else { ctx.pointer.1 }) + value as i32,
        PosCode::Sticky | PosCode::Center | PosCode::RightAnchor => wa_origin + value as i32,
        PosCode::Grid => {
            let cell = wa_extent as f64 / ctx.grid_cells.max(1) as f64;
            wa_origin + (value * cell) as i32
        }
    }
}

fn resolve_size(code: SizeCode, value: f64, axis_is_w: bool, ctx: &FloatPosContext) -> u32 {
    let (wa_extent, cur_extent) = if axis_is_w {
        (ctx.work_area.w, ctx.client_rect.w)
    } else {
        (ctx.work_area.h, ctx.client_rect.h)
    };
    let computed = match code {
        SizeCode::Absolute | SizeCode::Normal => value as i64,
        SizeCode::Relative | SizeCode::RelativeToClient => cur_extent as i64 + value as i64,
        SizeCode::Percent => ((value / 100.0) * wa_extent as f64) as i64,
        SizeCode::GridPaired => {
            let cell = wa_extent as f64 / ctx.grid_cells.max(1) as f64;
            (value * cell) as i64
        }
    };
    computed.max(1) as u32
}

/// Parse and resolve a floating-position string against `ctx`. Returns
/// `None` on malformed input: the caller treats `None` as a silent
/// no-op, not an error to surface to the user.
pub fn setfloatpos(spec: &str, ctx: &FloatPosContext) -> Option<ResolvedFloatPos> {
    let tokens = tokenize(spec)?;

    let x_code = pos_code(tokens[0].code)?;
    let y_code = pos_code(tokens[2].code)?;

    let (w, h) = if tokens.len() == 8 {
        let w_code = size_code(tokens[4].code)?;
        let h_code = size_code(tokens[6].code)?;
        (
            resolve_size(w_code, tokens[4].value, true, ctx),
            resolve_size(h_code, tokens[6].value, false, ctx),
        )
    } else {
        // 4-token form: x's code reinterprets the pair as size-only
        // (`w`) or grid-paired (`p`/`m`); anything else keeps the
        // client's current size.
        match tokens[0].code {
            'w' => (tokens[0].value as u32, tokens[2].value as u32),
            'p' | 'm' => {
                let cell_w = ctx.work_area.w as f64 / ctx.grid_cells.max(1) as f64;
                let cell_h = ctx.work_area.h as f64 / ctx.grid_cells.max(1) as f64;
                ((tokens[0].value * cell_w) as u32, (tokens[2].value * cell_h) as u32)
            }
            _ => (ctx.client_rect.w, ctx.client_rect.h),
        }
    };

    let x = resolve_position(x_code, tokens[0].value, true, ctx, w);
    let y = resolve_position(y_code, tokens[2].value, false, ctx, h);

    Some(ResolvedFloatPos {
        rect: Rect::new(x, y, w.max(1), h.max(1)),
        ignore_size_hints: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FloatPosContext {
        FloatPosContext {
            client_rect: Rect::new(0, 0, 400, 300),
            work_area: Rect::new(0, 0, 1920, 1080),
            pointer: (960, 540),
            grid_cells: 4,
        }
    }

    #[test]
    fn percent_position_and_size() {
        let r = setfloatpos("50% 50% 90% 80%", &ctx()).unwrap();
        assert_eq!(r.rect, Rect::new(96, 108, 1728, 864));
        assert_eq!(r.rect.midpoint(), crate::geometry::Point::new(960, 540));
    }

    #[test]
    fn malformed_spec_is_none() {
        assert!(setfloatpos("not a spec", &ctx()).is_none());
        assert!(setfloatpos("10A 10A 10A", &ctx()).is_none());
    }

    #[test]
    fn absolute_four_token_keeps_current_size() {
        let r = setfloatpos("100A 200A", &ctx()).unwrap();
        assert_eq!(r.rect.x, 100);
        assert_eq!(r.rect.y, 200);
        assert_eq!(r.rect.w, 400);
        assert_eq!(r.rect.h, 300);
    }
}
