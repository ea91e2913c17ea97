//! Color handling: 24-bit RGB values from [`wm_core::config::ColorScheme`]
//! turned into allocated [`x11::xft::XftColor`] handles.
//!
//! The palette arrives as packed `0xRRGGBB` `u32`s ([`wm_core::config::ColorScheme`]),
//! so [`Rgb::from_packed`] unpacks channels directly rather than round-tripping
//! through a hex string, and storage uses the `XRenderColor` 16-bit channels
//! Xft actually wants instead of normalized floats.

use std::ffi::CString;

use x11::xft::{XftColor, XftColorAllocValue, XftColorFree};
use x11::xlib::{Colormap, Display, Visual};
use x11::xrender::XRenderColor;

use crate::error::{Error, Result};

/// An unpacked 0-255 RGBA color, always fully opaque unless constructed
/// otherwise — the core's palette carries no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    pub const fn from_packed(v: u32) -> Self {
        Self { r: ((v >> 16) & 0xff) as u8, g: ((v >> 8) & 0xff) as u8, b: (v & 0xff) as u8, a: 0xff }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string, as accepted by
    /// `status2d` escape codes embedded in the status text.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let parse = |slice: &str| u8::from_str_radix(slice, 16).map_err(|_| Error::InvalidHexColor(s.to_string()));
        match s.len() {
            6 => Ok(Self { r: parse(&s[0..2])?, g: parse(&s[2..4])?, b: parse(&s[4..6])?, a: 0xff }),
            8 => Ok(Self { r: parse(&s[0..2])?, g: parse(&s[2..4])?, b: parse(&s[4..6])?, a: parse(&s[6..8])? }),
            _ => Err(Error::InvalidHexColor(s.to_string())),
        }
    }

    fn to_render_color(self) -> XRenderColor {
        // Xft wants premultiplied 16-bit channels; dwm-family drawers use
        // the straightforward "repeat the byte" expansion rather than a
        // true premultiply since the bar is drawn fully opaque.
        let expand = |c: u8| (c as u16) * 0x101;
        XRenderColor { red: expand(self.r), green: expand(self.g), blue: expand(self.b), alpha: expand(self.a) }
    }
}

/// An Xft color allocated against one `(Display, Visual, Colormap)` triple.
/// Freed on drop, following RAII color-handle conventions.
pub struct AllocatedColor {
    dpy: *mut Display,
    visual: *mut Visual,
    cmap: Colormap,
    pub(crate) handle: XftColor,
}

impl AllocatedColor {
    pub(crate) fn alloc(dpy: *mut Display, visual: *mut Visual, cmap: Colormap, rgb: Rgb) -> Result<Self> {
        let render_color = rgb.to_render_color();
        let mut handle: XftColor = unsafe { std::mem::zeroed() };
        // SAFETY: dpy/visual/cmap are valid for the Draw that owns this
        // allocation's lifetime; handle is zero-initialized out-parameter.
        let ok = unsafe { XftColorAllocValue(dpy, visual, cmap, &render_color, &mut handle) };
        if ok == 0 {
            return Err(Error::InvalidHexColor(format!("{:?}", rgb)));
        }
        Ok(Self { dpy, visual, cmap, handle })
    }

    pub(crate) fn as_ptr(&self) -> *const XftColor {
        &self.handle
    }

    pub fn pixel(&self) -> u64 {
        self.handle.pixel
    }
}

impl Drop for AllocatedColor {
    fn drop(&mut self) {
        // SAFETY: freed at most once, against the same triple it was
        // allocated with.
        unsafe { XftColorFree(self.dpy, self.visual, self.cmap, &mut self.handle) };
    }
}

/// The five allocated colors a bar [`crate::draw::Context`] draws a run of
/// text or a rectangle with, mirroring [`wm_core::config::ColorScheme`]'s
/// fields one for one plus the 16-entry `status2d` palette.
pub struct Palette {
    pub foreground: AllocatedColor,
    pub background: AllocatedColor,
    pub accent: AllocatedColor,
    pub secondary: AllocatedColor,
    pub border: AllocatedColor,
    pub swatches: Vec<AllocatedColor>,
}

impl Palette {
    pub(crate) fn alloc(dpy: *mut Display, visual: *mut Visual, cmap: Colormap, scheme: &wm_core::config::ColorScheme) -> Result<Self> {
        let swatches = scheme
            .palette
            .iter()
            .map(|&v| AllocatedColor::alloc(dpy, visual, cmap, Rgb::from_packed(v)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            foreground: AllocatedColor::alloc(dpy, visual, cmap, Rgb::from_packed(scheme.foreground))?,
            background: AllocatedColor::alloc(dpy, visual, cmap, Rgb::from_packed(scheme.background))?,
            accent: AllocatedColor::alloc(dpy, visual, cmap, Rgb::from_packed(scheme.accent))?,
            secondary: AllocatedColor::alloc(dpy, visual, cmap, Rgb::from_packed(scheme.secondary))?,
            border: AllocatedColor::alloc(dpy, visual, cmap, Rgb::from_packed(scheme.border))?,
            swatches,
        })
    }

    pub(crate) fn get(&self, role: ColorRole) -> Option<&AllocatedColor> {
        match role {
            ColorRole::Fg => Some(&self.foreground),
            ColorRole::Bg => Some(&self.background),
            ColorRole::Accent => Some(&self.accent),
            ColorRole::Secondary => Some(&self.secondary),
            ColorRole::Border => Some(&self.border),
            ColorRole::Swatch(i) => self.swatches.get(i),
            ColorRole::AdHoc(_) => None,
        }
    }
}

/// Which allocated color a draw call should use. `AdHoc` indexes into the
/// requesting [`crate::draw::Context`]'s per-frame scratch allocations
/// (status2d inline `^fg(#rrggbb)^` colors aren't part of the fixed
/// scheme, so they're allocated for the frame and freed when the context
/// drops rather than living in `Palette`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Fg,
    Bg,
    Accent,
    Secondary,
    Border,
    Swatch(usize),
    AdHoc(usize),
}

/// Build a `CString` for a font/color name, surfacing a clear error instead
/// of panicking on an embedded NUL.
pub(crate) fn cstr(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| Error::InvalidHexColor(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbb() {
        let c = Rgb::from_packed(0x88c0d0);
        assert_eq!((c.r, c.g, c.b, c.a), (0x88, 0xc0, 0xd0, 0xff));
    }

    #[test]
    fn parses_hex_with_and_without_alpha() {
        assert_eq!(Rgb::from_hex("#bf616a").unwrap(), Rgb { r: 0xbf, g: 0x61, b: 0x6a, a: 0xff });
        assert_eq!(Rgb::from_hex("bf616a80").unwrap(), Rgb { r: 0xbf, g: 0x61, b: 0x6a, a: 0x80 });
        assert!(Rgb::from_hex("nope").is_err());
    }
}
