/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # tr-models
//!
//! Data models for the token report service.
//!
//! The raw [`TokenReport`] is the untrusted document returned by the service:
//! every field is optional and anything of the wrong JSON type is discarded at
//! the boundary instead of failing the whole document. The view-models in
//! [`view`] are what the rendering side consumes; none of them can carry a raw
//! absent value.
//!
//! ## Usage
//!
//! ```ignore
//! use tr_models::TokenReport;
//!
//! let report = TokenReport::from_json_str(&body)?;
//! println!("{:?}", report.tokenomics_info.circulating_supply);
//! ```

#![warn(clippy::all)]

pub mod lenient;
pub mod report;
pub mod view;

// Re-export all model types
pub use report::*;
pub use view::*;
