// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic 2D analytic geometry.
//!
//! The planar library contains value types for points, vectors and shapes
//! (lines, rays, segments, circles, ellipses, polygons, Bézier curves and
//! circular arcs), all generic over their scalar type, together with the
//! algorithms that relate them: intersection, containment, projection,
//! distance and measurement. A [`Path`] strings segments, curves and arcs
//! into open or closed outlines and composes their bounding boxes and
//! lengths.
//!
//! # Examples
//!
//! Intersecting primitives:
//! ```
//! use planar::{Circle, Intersection, Line, Point, Ray, Segment, Vec2};
//!
//! let a = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
//! let b = Segment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
//! assert_eq!(a.intersection(&b), Some(Point::new(1.0, 1.0)));
//!
//! let ray = Ray::new(Point::new(0.0, 0.0), Vec2::new(1.0, 0.0));
//! let circle = Circle::new(Point::new(0.0, 0.0), 5.0);
//! let hits = ray.intersection(&circle);
//! assert_eq!(hits.as_slice(), &[Point::new(5.0, 0.0)]);
//!
//! let parallel = Line::new(Point::new(0.0, 1.0), Vec2::new(1.0, 1.0));
//! assert_eq!(parallel.intersection(&a), None);
//! ```
//!
//! Building a path and measuring it:
//! ```
//! use planar::{Path, Point};
//!
//! let square = Path::polygon(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ])
//! .unwrap();
//! assert_eq!(square.length(), 40.0);
//! let bbox = square.bounding_box().unwrap();
//! assert_eq!((bbox.width(), bbox.height()), (10.0, 10.0));
//! ```
//!
//! # Scalars
//!
//! Every type is generic over its scalar `S`. Operations only ask for the
//! capability they use: translating a [`Point`] needs addition, a dot product
//! needs [`num_traits::Num`], and anything involving square roots or
//! trigonometry needs [`Real`], which is implemented for `f32` and `f64`.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate (through
//! `num-traits`) for math functionality. The `std` feature is enabled by
//! default, but can be disabled, as long as the `libm` feature is enabled.
//! This is useful for `no_std` environments. This crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("planar requires either the `std` or `libm` feature");

extern crate alloc;

mod affine;
mod arc;
mod bezier;
mod circle;
mod common;
mod ellipse;
mod intersect;
mod line;
mod ngon;
mod path;
mod point;
mod ray;
mod rect;
mod scalar;
mod segment;
mod shape;
mod size;
mod svg;
mod vec2;

pub use crate::affine::*;
pub use crate::arc::*;
pub use crate::bezier::*;
pub use crate::circle::*;
pub use crate::ellipse::*;
pub use crate::intersect::*;
pub use crate::line::*;
pub use crate::ngon::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::ray::*;
pub use crate::rect::*;
pub use crate::scalar::*;
pub use crate::segment::*;
pub use crate::shape::*;
pub use crate::size::*;
pub use crate::svg::*;
pub use crate::vec2::*;
