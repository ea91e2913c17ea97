//! The drawable surface: one Xlib/Xft connection shared by every bar
//! window, plus a `Context` bound to a particular window's pixmap.
//!
//! `Draw` owns the display/font-registry/flush surface, `DrawContext` is
//! a per-surface cursor with `translate`/`set_x_offset`/`rectangle`/`text`,
//! concretized against the `x11` crate's xlib/xft bindings — see
//! `DESIGN.md` for the grounding.
//!
//! Double-buffered like dwm's `drw`: every redraw paints into an
//! off-screen pixmap sized to the window, then `XCopyArea`s it across in
//! one call, rather than drawing glyph-by-glyph straight to the window.

use std::os::raw::{c_int, c_uint};

use x11::xft::XftDrawCreate;
use x11::xlib::{
    self, CapButt, Colormap, Display, Drawable, GCCapStyle, GCJoinStyle, JoinMiter, Visual, Window, XCopyArea, XCreateGC,
    XCreatePixmap, XDefaultColormap, XDefaultDepth, XDefaultScreen, XDefaultVisual, XFillRectangle, XFreePixmap, XGCValues,
    XOpenDisplay, XRootWindow, XSetLineAttributes, GC,
};

use crate::color::{AllocatedColor, ColorRole, Palette, Rgb};
use crate::error::{Error, Result};
use crate::fontset::Fontset;

pub struct Draw {
    dpy: *mut Display,
    screen: c_int,
    root: Window,
    visual: *mut Visual,
    cmap: Colormap,
    depth: c_int,
    pub fonts: Fontset,
    pub palette: Palette,
}

impl Draw {
    /// Open a fresh connection to the same display the core's [`wm_core::x::XConn`]
    /// backend is already talking to. Kept as a second connection rather
    /// than threaded through `XConn` because Xft operates on a raw
    /// `Display*`, and `XConn` is deliberately transport-agnostic — it must not grow an Xlib-shaped method just for
    /// font metrics.
    pub fn open(font_names: &[&str], colors: &wm_core::config::ColorScheme) -> Result<Self> {
        // SAFETY: passing null requests $DISPLAY, matching XConn's own
        // connection setup.
        let dpy = unsafe { XOpenDisplay(std::ptr::null()) };
        if dpy.is_null() {
            return Err(Error::CannotOpenDisplay);
        }
        let screen = unsafe { XDefaultScreen(dpy) };
        let root = unsafe { XRootWindow(dpy, screen) };
        let visual = unsafe { XDefaultVisual(dpy, screen) };
        let cmap = unsafe { XDefaultColormap(dpy, screen) };
        let depth = unsafe { XDefaultDepth(dpy, screen) };
        let fonts = Fontset::load(dpy, screen, font_names)?;
        let palette = Palette::alloc(dpy, visual, cmap, colors)?;
        Ok(Self { dpy, screen, root, visual, cmap, depth, fonts, palette })
    }

    pub fn root(&self) -> Window {
        self.root
    }

    pub fn bar_height(&self) -> u32 {
        self.fonts.height() + 4
    }

    /// Bind a drawing context to `win`, sized `w`x`h`. One `Context` is
    /// built per bar redraw rather than kept open across frames, mirroring dwm's
    /// `drw_resize` + redraw-per-expose cadence.
    pub fn context_for(&mut self, win: Window, w: u32, h: u32) -> Result<Context<'_>> {
        // SAFETY: dpy/root/depth are valid for the lifetime of self; w/h
        // are non-zero bar dimensions.
        let pixmap = unsafe { XCreatePixmap(self.dpy, self.root, w.max(1), h.max(1), self.depth as c_uint) };
        let mut gcv: XGCValues = unsafe { std::mem::zeroed() };
        gcv.cap_style = CapButt;
        gcv.join_style = JoinMiter;
        // SAFETY: pixmap just created above, valuemask matches gcv fields set.
        let gc = unsafe { XCreateGC(self.dpy, pixmap, (GCCapStyle | GCJoinStyle) as u64, &mut gcv) };
        unsafe { XSetLineAttributes(self.dpy, gc, 1, xlib::LineSolid, xlib::CapButt, xlib::JoinMiter) };
        // SAFETY: pixmap/visual/cmap all belong to the same screen.
        let xft_draw = unsafe { XftDrawCreate(self.dpy, pixmap, self.visual, self.cmap) };
        Ok(Context { draw: self, win, pixmap, gc, xft_draw, w, h, x_offset: 0, ad_hoc: Vec::new() })
    }
}

impl Drop for Draw {
    fn drop(&mut self) {
        // SAFETY: dpy was opened by this Draw and outlives every Font/
        // Palette entry dropped before this runs (Fontset/Palette fields
        // are dropped first per declaration order).
        unsafe { xlib::XCloseDisplay(self.dpy) };
    }
}

/// A bound drawing surface: an off-screen pixmap plus the fill/text
/// primitives the bar composer calls, and a running horizontal cursor
/// (`x_offset`) so successive modules draw left-to-right without each one
/// recomputing absolute coordinates — the same role a
/// `set_x_offset` plays.
pub struct Context<'d> {
    draw: &'d mut Draw,
    win: Window,
    pixmap: Drawable,
    gc: GC,
    xft_draw: *mut x11::xft::XftDraw,
    w: u32,
    h: u32,
    x_offset: i32,
    /// Colors allocated for this frame only (status2d inline hex escapes),
    /// indexed by [`ColorRole::AdHoc`]. Freed when the `Context` drops.
    ad_hoc: Vec<AllocatedColor>,
}

impl<'d> Context<'d> {
    pub fn set_x_offset(&mut self, x: i32) {
        self.x_offset = x;
    }

    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    /// Allocate a one-frame color for a status2d inline `^fg(#rrggbb)^`
    /// escape, returning the role to draw with. Falls back to
    /// [`ColorRole::Fg`] if the allocation fails (an exhausted colormap
    /// shouldn't blank the bar).
    pub fn alloc_ad_hoc(&mut self, rgb: Rgb) -> ColorRole {
        match AllocatedColor::alloc(self.draw.dpy, self.draw.visual, self.draw.cmap, rgb) {
            Ok(c) => {
                self.ad_hoc.push(c);
                ColorRole::AdHoc(self.ad_hoc.len() - 1)
            }
            Err(_) => ColorRole::Fg,
        }
    }

    fn resolve(&self, role: ColorRole) -> (*const x11::xft::XftColor, u64) {
        if let ColorRole::AdHoc(i) = role {
            if let Some(c) = self.ad_hoc.get(i) {
                return (c.as_ptr(), c.pixel());
            }
        }
        match self.draw.palette.get(role).or_else(|| self.draw.palette.get(ColorRole::Fg)) {
            Some(c) => (c.as_ptr(), c.pixel()),
            None => (std::ptr::null(), 0),
        }
    }

    /// Fill the whole surface with the scheme's background — the first
    /// call of every redraw.
    pub fn clear(&mut self) {
        let (_, pixel) = self.resolve(ColorRole::Bg);
        self.fill_rect(0, 0, self.w, self.h, pixel);
    }

    pub fn rectangle(&mut self, x: i32, y: i32, w: u32, h: u32, role: ColorRole) {
        let (_, pixel) = self.resolve(role);
        self.fill_rect(x, y, w, h, pixel);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, pixel: u64) {
        // SAFETY: gc/pixmap are valid for the lifetime of this Context.
        unsafe {
            XSetLineAttributes(self.draw.dpy, self.gc, 1, xlib::LineSolid, xlib::CapButt, xlib::JoinMiter);
            xlib::XSetForeground(self.draw.dpy, self.gc, pixel);
            XFillRectangle(self.draw.dpy, self.pixmap, self.gc, x, y, w, h);
        }
    }

    /// Draw `text` left-padded by `lpad`, vertically centered, returning
    /// the pixel width consumed (caller advances `x_offset` by this).
    pub fn text(&mut self, lpad: i32, text: &str, role: ColorRole) -> u32 {
        let (color_ptr, _) = self.resolve(role);
        let (tw, _) = self.draw.fonts.text_extent(text);
        let y = (self.h as i32 + self.draw.fonts.height() as i32) / 2 - 2;
        let x = self.x_offset + lpad;
        let mut pen_x = x;
        for c in text.chars() {
            let mut buf = [0u8; 4];
            let encoded = c.encode_utf8(&mut buf);
            let font = self.draw.fonts.font_for(c);
            // SAFETY: xft_draw/font.handle/color_ptr are all valid for
            // this call; color_ptr comes from either the frame-long
            // Palette or this Context's own ad_hoc store.
            unsafe {
                x11::xft::XftDrawStringUtf8(
                    self.xft_draw,
                    color_ptr,
                    font.handle,
                    pen_x,
                    y,
                    encoded.as_ptr(),
                    encoded.len() as c_int,
                );
            }
            let (w, _) = self.draw.fonts.text_extent(encoded);
            pen_x += w as i32;
        }
        (lpad as u32) + tw
    }

    pub fn text_extent(&mut self, text: &str) -> (u32, u32) {
        self.draw.fonts.text_extent(text)
    }

    /// Copy the off-screen pixmap onto the real window and flush.
    pub fn present(&mut self) {
        // SAFETY: pixmap/win/gc belong to the same display and depth.
        unsafe {
            XCopyArea(self.draw.dpy, self.pixmap, self.win, self.gc, 0, 0, self.w, self.h, 0, 0);
            xlib::XFlush(self.draw.dpy);
        }
    }
}

impl<'d> Drop for Context<'d> {
    fn drop(&mut self) {
        // SAFETY: xft_draw/gc/pixmap were all created from self.draw.dpy
        // in `context_for`, and are torn down once each, here.
        unsafe {
            x11::xft::XftDrawDestroy(self.xft_draw);
            xlib::XFreeGC(self.draw.dpy, self.gc);
            XFreePixmap(self.draw.dpy, self.pixmap);
        }
    }
}
