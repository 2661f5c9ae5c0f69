//! Conversion engine for keyconv.
//!
//! Given raw input bytes declared as one artifact kind, the engine validates
//! them, walks the derivation chain forward
//!
//! ```text
//! private-key-wif <-> private-key -> public-key -> public-key-sha256
//!     -> public-key-ripemd160 -> address
//! ```
//!
//! and renders the requested artifacts in the requested formats.
//!
//! # Example
//!
//! ```
//! use keyconv_chain::{ConversionRequest, ConvertConfig, Converter};
//! use keyconv_types::{ArtifactKind, DataFormat};
//!
//! let converter = Converter::new(ConvertConfig::default());
//! let request = ConversionRequest::new(
//!     ArtifactKind::PrivateKeyWif,
//!     DataFormat::Base58Check,
//!     "5J2YUwNA5hmZFW33nbUCp5TmvszYXxVYthqDv7axSisBjFJMqaT",
//!     ArtifactKind::Address,
//! )
//! .with_output_format(DataFormat::Base58Check);
//!
//! let output = converter.run(&request).unwrap();
//! assert_eq!(output.single().unwrap().as_text(), Some("12345KDCsXMG9t85Aa1BZYwvJFfr1jXfDF"));
//! ```

pub mod artifact;
pub mod chain;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod request;

pub use artifact::{Artifact, ArtifactSet};
pub use config::ConvertConfig;
pub use engine::ConversionEngine;
pub use error::{ConvertError, ConvertResult};
pub use request::{ConversionOutput, ConversionRequest, Converter, Rendered};
