//! Font loading with fontconfig fallback.
//!
//! Modeled on a `TextStyle`/font registration flow
//! (`Draw::register_font`), reimplemented against raw Xft/fontconfig since
//! a concrete backend wasn't present in the retrieved
//! slice — only its trait-level `draw::mod` file was. `fontconfig-sys` is
//! carried for exactly this: resolving a fallback face for a codepoint the
//! configured font list can't cover, not for parsing font names.

use std::os::raw::c_int;
use std::ptr;

use fontconfig_sys::{FcChar8, FcCharSetHasChar, FcPatternGetCharSet, FcResultMatch};
use x11::xft::{XftCharExists, XftFont, XftFontClose, XftFontMatch, XftFontOpenName, XftTextExtentsUtf8};
use x11::xlib::Display;
use x11::xrender::XGlyphInfo;

use crate::color::cstr;
use crate::error::{Error, Result};

/// One loaded face. Height is cached since every bar redraw needs it to
/// compute the bar's own height at startup.
pub struct Font {
    pub(crate) handle: *mut XftFont,
    pub height: u32,
}

impl Font {
    fn open(dpy: *mut Display, screen: c_int, name: &str) -> Result<Self> {
        let c_name = cstr(name)?;
        // SAFETY: dpy is open for the lifetime of the owning Fontset; c_name
        // is a valid NUL-terminated string for the duration of the call.
        let handle = unsafe { XftFontOpenName(dpy, screen, c_name.as_ptr()) };
        if handle.is_null() {
            return Err(Error::NoUsableFont(vec![name.to_string()]));
        }
        let height = unsafe { (*handle).ascent + (*handle).descent } as u32;
        Ok(Self { handle, height })
    }

    fn has_glyph(&self, dpy: *mut Display, c: char) -> bool {
        // SAFETY: handle is non-null for the lifetime of this Font.
        unsafe { XftCharExists(dpy, self.handle, c as u32) != 0 }
    }

    /// Fallback face fontconfig matches for a codepoint this font can't
    /// render, cached by the caller per session (dwm's `xfont_create`
    /// fallback path, generalized from "next configured font" to "ask
    /// fontconfig" once the configured list is exhausted).
    fn fallback_for(dpy: *mut Display, screen: c_int, pattern_name: &str, missing: char) -> Option<Self> {
        let c_pattern = cstr(pattern_name).ok()?;
        // SAFETY: c_pattern lives through the call; FcNameParse returns an
        // owned FcPattern* the caller must eventually hand off or free —
        // XftFontOpenPattern below takes that ownership.
        let parsed = unsafe { fontconfig_sys::FcNameParse(c_pattern.as_ptr() as *const FcChar8) };
        if parsed.is_null() {
            return None;
        }
        unsafe {
            fontconfig_sys::FcConfigSubstitute(std::ptr::null_mut(), parsed, fontconfig_sys::FcMatchPattern);
            fontconfig_sys::FcDefaultSubstitute(parsed);
        }
        // SAFETY: dpy/screen valid, parsed is a substituted FcPattern*,
        // result_mask receives FcResultMatch/NoMatch/OutOfMemory.
        let mut result_mask = FcResultMatch;
        let matched = unsafe { XftFontMatch(dpy, screen, parsed, &mut result_mask) };
        unsafe { fontconfig_sys::FcPatternDestroy(parsed) };
        if matched.is_null() {
            return None;
        }
        let mut charset = ptr::null_mut();
        // SAFETY: matched is a valid FcPattern* from XftFontMatch above.
        let has_charset = unsafe { FcPatternGetCharSet(matched as *mut _, b"charset\0".as_ptr() as *const _, 0, &mut charset) };
        if has_charset != FcResultMatch || charset.is_null() {
            return None;
        }
        // SAFETY: charset was populated by the call above.
        if unsafe { FcCharSetHasChar(charset, missing as u32) } == 0 {
            return None;
        }
        // SAFETY: dpy/screen valid; matched owned by the pattern cache,
        // XftFontOpenPattern takes ownership per Xft convention.
        let handle = unsafe { x11::xft::XftFontOpenPattern(dpy, matched as *mut _) };
        if handle.is_null() {
            return None;
        }
        let height = unsafe { (*handle).ascent + (*handle).descent } as u32;
        Some(Self { handle, height })
    }
}

/// An ordered list of fonts to try, plus fontconfig-derived fallbacks
/// discovered lazily per missing glyph.
pub struct Fontset {
    dpy: *mut Display,
    screen: c_int,
    primary: Vec<Font>,
    fallbacks: Vec<Font>,
}

impl Fontset {
    pub fn load(dpy: *mut Display, screen: c_int, names: &[&str]) -> Result<Self> {
        let mut primary = Vec::with_capacity(names.len());
        for &name in names {
            match Font::open(dpy, screen, name) {
                Ok(f) => primary.push(f),
                Err(_) => continue,
            }
        }
        if primary.is_empty() {
            return Err(Error::NoUsableFont(names.iter().map(|s| s.to_string()).collect()));
        }
        Ok(Self { dpy, screen, primary, fallbacks: Vec::new() })
    }

    pub fn height(&self) -> u32 {
        self.primary.iter().map(|f| f.height).max().unwrap_or(0)
    }

    /// Find (loading and caching if needed) the font that can render `c`,
    /// trying the configured list in order before falling back to
    /// fontconfig's closest match.
    pub(crate) fn font_for(&mut self, c: char) -> &Font {
        if let Some(i) = self.primary.iter().position(|f| f.has_glyph(self.dpy, c)) {
            return &self.primary[i];
        }
        if let Some(i) = self.fallbacks.iter().position(|f| f.has_glyph(self.dpy, c)) {
            return &self.fallbacks[i];
        }
        let pattern = "monospace";
        if let Some(f) = Font::fallback_for(self.dpy, self.screen, pattern, c) {
            self.fallbacks.push(f);
            return self.fallbacks.last().unwrap();
        }
        &self.primary[0]
    }

    pub fn text_extent(&mut self, text: &str) -> (u32, u32) {
        let mut total_w = 0u32;
        let mut max_h = 0u32;
        for c in text.chars() {
            let font = self.font_for(c);
            let mut buf = [0u8; 4];
            let encoded = c.encode_utf8(&mut buf);
            let mut extents: XGlyphInfo = unsafe { std::mem::zeroed() };
            // SAFETY: font.handle non-null, encoded is valid UTF-8 of
            // known length.
            unsafe {
                XftTextExtentsUtf8(self.dpy, font.handle, encoded.as_ptr(), encoded.len() as c_int, &mut extents);
            }
            total_w += extents.xOff as u32;
            max_h = max_h.max(font.height);
        }
        (total_w, max_h.max(self.height()))
    }
}

impl Drop for Fontset {
    fn drop(&mut self) {
        for f in self.primary.iter().chain(self.fallbacks.iter()) {
            // SAFETY: each handle was opened against `self.dpy`, which
            // outlives every Font stored here.
            unsafe { XftFontClose(self.dpy, f.handle) };
        }
    }
}
