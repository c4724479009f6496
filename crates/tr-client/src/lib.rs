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

//! # tr-client
//!
//! Client for the token report service: one call, "fetch token report by
//! name", returning the raw [`TokenReport`] together with how long the request
//! took.
//!
//! ## Error Handling
//!
//! A non-success HTTP status comes back as [`Error::Status`] carrying the
//! code, and the report is never handed to the normalizer in that case. A body
//! that is JSON but has an unexpected shape is *not* an error; the
//! [`TokenReport`] boundary absorbs it.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod transport;

pub use client::{FetchedReport, ReportSource, TokenReportClient};
pub use tr_core::{Config, Error, Result};
pub use tr_models::TokenReport;
