// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path data.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{Bezier, Path, PathSeg, Point, Real};

impl<S: Real + fmt::Display> Path<S> {
    /// Convert the path to SVG path data.
    ///
    /// Lines are written as `L`, quadratic curves as `Q` and cubic curves as
    /// `C`. Arcs and curves of higher degree are approximated by cubics.
    /// The output favors exactness over brevity: absolute coordinates at full
    /// precision.
    ///
    /// ```
    /// use planar::{Path, Point};
    ///
    /// let path = Path::polyline(&[Point::new(0.0, 0.0), Point::new(1.5, 2.0)]).unwrap();
    /// assert_eq!(path.to_svg(), "M0 0 L1.5 2");
    /// ```
    pub fn to_svg(&self) -> String {
        SvgData(self).to_string()
    }

    /// Write the path as SVG path data into `w`.
    ///
    /// # Errors
    ///
    /// Passes on any error from the writer.
    pub fn write_svg<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let mut sep = "";
        for subpath in self.subpaths() {
            let p = subpath.start;
            write!(w, "{sep}M{} {}", p.x, p.y)?;
            sep = " ";
            for seg in &subpath.segments {
                match seg {
                    PathSeg::Line(line) => write!(w, " L{} {}", line.end.x, line.end.y)?,
                    PathSeg::Bezier(bez) => write_bezier(w, bez)?,
                    PathSeg::Arc(arc) => {
                        for bez in arc.to_beziers() {
                            write_bezier(w, &bez)?;
                        }
                    }
                }
            }
            if subpath.closed {
                write!(w, " Z")?;
            }
        }
        Ok(())
    }
}

struct SvgData<'a, S>(&'a Path<S>);

impl<S: Real + fmt::Display> fmt::Display for SvgData<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_svg(f)
    }
}

fn write_bezier<S, W>(w: &mut W, bez: &Bezier<S>) -> fmt::Result
where
    S: Real + fmt::Display,
    W: fmt::Write,
{
    match bez.points() {
        [p] | [_, p] => write!(w, " L{} {}", p.x, p.y),
        [_, p1, p2] => write!(w, " Q{} {} {} {}", p1.x, p1.y, p2.x, p2.y),
        [_, p1, p2, p3] => write_cubic(w, *p1, *p2, *p3),
        _ => {
            // One cubic per degree, matching value and tangent at each
            // piece's ends.
            let n = bez.degree();
            let step = S::one() / S::from_usize(n);
            let third = step / S::cast(3.0);
            let hodograph = bez.derivative();
            let mut t0 = S::zero();
            let mut p0 = bez.start();
            for i in 1..=n {
                let t1 = if i == n { S::one() } else { step * S::from_usize(i) };
                let p3 = bez.point(t1);
                let p1 = p0 + hodograph.point(t0).to_vec2() * third;
                let p2 = p3 - hodograph.point(t1).to_vec2() * third;
                write_cubic(w, p1, p2, p3)?;
                t0 = t1;
                p0 = p3;
            }
            Ok(())
        }
    }
}

fn write_cubic<S: fmt::Display, W: fmt::Write>(
    w: &mut W,
    p1: Point<S>,
    p2: Point<S>,
    p3: Point<S>,
) -> fmt::Result {
    write!(
        w,
        " C{} {} {} {} {} {}",
        p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
    )
}

impl<S: Real> Path<S> {
    /// Parse SVG path data.
    ///
    /// Supports the `M`, `L`, `H`, `V`, `Q`, `C` and `Z` commands in absolute
    /// and relative (lowercase) form, with implicit repetition of the previous
    /// command. Numbers are read as `f64` and then converted.
    ///
    /// # Errors
    ///
    /// Returns an [`SvgParseError`] on malformed numbers, truncated input,
    /// unsupported commands, or drawing before the first move.
    ///
    /// ```
    /// use planar::Path;
    ///
    /// let path = Path::<f64>::from_svg("m10 10 100 0 0 100 -100 0z").unwrap();
    /// assert_eq!(path.segment_count(), 3);
    /// assert_eq!(path.length(), 400.0);
    /// ```
    pub fn from_svg(data: &str) -> Result<Self, SvgParseError> {
        parse(data).map_err(|e| {
            log::debug!("rejecting SVG path data: {e}");
            e
        })
    }
}

fn parse<S: Real>(data: &str) -> Result<Path<S>, SvgParseError> {
    let mut lexer = SvgLexer::new(data);
    let mut path = Path::new();
    let mut last_cmd = 0;
    let mut subpath_start = Point::new(0.0, 0.0);
    while let Some(c) = lexer.get_cmd(last_cmd)? {
        if !matches!(c, b'M' | b'm') && path.subpaths().is_empty() {
            return Err(SvgParseError::MissingMoveTo);
        }
        match c {
            b'M' | b'm' => {
                let pt = lexer.get_maybe_relative(c)?;
                path.move_to(pt.map(S::cast));
                lexer.last_pt = pt;
                subpath_start = pt;
                // Further coordinate pairs are implicit line commands.
                last_cmd = c - (b'M' - b'L');
            }
            b'L' | b'l' => {
                let pt = lexer.get_maybe_relative(c)?;
                path.line_to(pt.map(S::cast));
                lexer.last_pt = pt;
                last_cmd = c;
            }
            b'H' | b'h' => {
                let mut x = lexer.get_number()?;
                if c == b'h' {
                    x += lexer.last_pt.x;
                }
                let pt = Point::new(x, lexer.last_pt.y);
                path.line_to(pt.map(S::cast));
                lexer.last_pt = pt;
                last_cmd = c;
            }
            b'V' | b'v' => {
                let mut y = lexer.get_number()?;
                if c == b'v' {
                    y += lexer.last_pt.y;
                }
                let pt = Point::new(lexer.last_pt.x, y);
                path.line_to(pt.map(S::cast));
                lexer.last_pt = pt;
                last_cmd = c;
            }
            b'Q' | b'q' => {
                let p1 = lexer.get_maybe_relative(c)?;
                let p2 = lexer.get_maybe_relative(c)?;
                path.quad_to(p1.map(S::cast), p2.map(S::cast));
                lexer.last_pt = p2;
                last_cmd = c;
            }
            b'C' | b'c' => {
                let p1 = lexer.get_maybe_relative(c)?;
                let p2 = lexer.get_maybe_relative(c)?;
                let p3 = lexer.get_maybe_relative(c)?;
                path.curve_to(p1.map(S::cast), p2.map(S::cast), p3.map(S::cast));
                lexer.last_pt = p3;
                last_cmd = c;
            }
            b'Z' | b'z' => {
                path.close();
                lexer.last_pt = subpath_start;
                last_cmd = 0;
            }
            _ => return Err(SvgParseError::UnknownCommand(char::from(c))),
        }
    }
    Ok(path)
}

/// An error which can be returned when parsing SVG path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SvgParseError {
    /// A number was expected.
    Wrong,
    /// The input string ended while still expecting input.
    UnexpectedEof,
    /// Encountered an unknown command letter.
    UnknownCommand(char),
    /// A drawing command came before any `M` or `m`.
    MissingMoveTo,
}

impl fmt::Display for SvgParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgParseError::Wrong => write!(f, "Unable to parse a number"),
            SvgParseError::UnexpectedEof => write!(f, "Unexpected EOF"),
            SvgParseError::UnknownCommand(letter) => write!(f, "Unknown command, \"{letter}\""),
            SvgParseError::MissingMoveTo => write!(f, "Path data must begin with a move command"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SvgParseError {}

struct SvgLexer<'a> {
    data: &'a str,
    ix: usize,
    last_pt: Point<f64>,
}

impl<'a> SvgLexer<'a> {
    fn new(data: &'a str) -> Self {
        SvgLexer {
            data,
            ix: 0,
            last_pt: Point::new(0.0, 0.0),
        }
    }

    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.as_bytes().get(self.ix) {
            if !(c == b' ' || c == b'\t' || c == b'\n' || c == 12 || c == b'\r') {
                break;
            }
            self.ix += 1;
        }
    }

    /// The next command letter, or `last_cmd` again when a number follows.
    fn get_cmd(&mut self, last_cmd: u8) -> Result<Option<u8>, SvgParseError> {
        self.skip_ws();
        let Some(c) = self.get_byte() else {
            return Ok(None);
        };
        if c.is_ascii_alphabetic() {
            return Ok(Some(c));
        }
        self.unget();
        if matches!(c, b'-' | b'+' | b'.') || c.is_ascii_digit() {
            if last_cmd != 0 {
                return Ok(Some(last_cmd));
            }
            return Err(SvgParseError::MissingMoveTo);
        }
        Err(SvgParseError::Wrong)
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.as_bytes().get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    fn get_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(c) = self.get_byte() {
            if !c.is_ascii_digit() {
                self.unget();
                break;
            }
            count += 1;
        }
        count
    }

    fn opt_sign(&mut self) {
        if let Some(c) = self.get_byte() {
            if c != b'-' && c != b'+' {
                self.unget();
            }
        }
    }

    fn get_number(&mut self) -> Result<f64, SvgParseError> {
        self.skip_ws();
        let start = self.ix;
        if self.ix >= self.data.len() {
            return Err(SvgParseError::UnexpectedEof);
        }
        self.opt_sign();
        let mut digit_count = self.get_digits();
        if self.data.as_bytes().get(self.ix) == Some(&b'.') {
            self.ix += 1;
            digit_count += self.get_digits();
        }
        if digit_count == 0 {
            return Err(SvgParseError::Wrong);
        }
        if matches!(self.data.as_bytes().get(self.ix), Some(b'e' | b'E')) {
            let mantissa_end = self.ix;
            self.ix += 1;
            self.opt_sign();
            if self.get_digits() == 0 {
                // Not an exponent after all, leave the letter for the lexer.
                self.ix = mantissa_end;
            }
        }
        self.data[start..self.ix]
            .parse()
            .map_err(|_| SvgParseError::Wrong)
    }

    fn get_number_pair(&mut self) -> Result<Point<f64>, SvgParseError> {
        let x = self.get_number()?;
        self.opt_comma();
        let y = self.get_number()?;
        self.opt_comma();
        Ok(Point::new(x, y))
    }

    fn get_maybe_relative(&mut self, cmd: u8) -> Result<Point<f64>, SvgParseError> {
        let pt = self.get_number_pair()?;
        if cmd.is_ascii_lowercase() {
            Ok(pt + self.last_pt.to_vec2())
        } else {
            Ok(pt)
        }
    }

    fn opt_comma(&mut self) {
        self.skip_ws();
        if let Some(c) = self.get_byte() {
            if c != b',' {
                self.unget();
            }
        }
    }
}
