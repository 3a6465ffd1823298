#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate to help with re-encoding data.
//!
//! There's two independent toolkits in here:
//!
//! * [`utf8`] converts between UTF-8 bytes and wide (32-bit) characters. It
//!   speaks the obsolete "extended" scheme that runs up to 6 bytes per code
//!   point, it works on plain slices, and it doesn't need an allocator.
//! * [`png`] moves whole images into and out of Portable Network Graphics
//!   data streams. All compression work is delegated to the
//!   [`png`](https://docs.rs/png) crate, so this module is just a simpler
//!   surface over it.
//!
//! ## Crate Features
//!
//! * `alloc`: adds conversions that allocate their own output.
//! * `std`: enables `alloc`, and lets errors capture IO failures.
//! * `png`: enables `std` and the PNG support module.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod utf8;

#[cfg(feature = "png")]
#[cfg_attr(docs_rs, doc(cfg(feature = "png")))]
pub mod png;
