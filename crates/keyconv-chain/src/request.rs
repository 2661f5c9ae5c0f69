use keyconv_codec::{decode_input, encode_output};
use keyconv_types::{ArtifactKind, Compression, DataFormat, OutputSelection};

use crate::artifact::ArtifactSet;
use crate::config::ConvertConfig;
use crate::engine::ConversionEngine;
use crate::error::{ConvertError, ConvertResult};
use crate::ingest::ingest;

// ---------------------------------------------------------------------------
// ConversionRequest
// ---------------------------------------------------------------------------

/// Everything needed to run one conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Declared kind of the input.
    pub input_kind: ArtifactKind,
    /// Serialization of the input bytes.
    pub input_format: DataFormat,
    /// The input exactly as supplied (text or raw bytes).
    pub input: Vec<u8>,
    /// What to produce.
    pub output: OutputSelection,
    /// Output serialization. Required for a single output; for `all` it
    /// defaults to every text format.
    pub output_format: Option<DataFormat>,
    /// Explicit public-key compression override.
    pub compression: Option<Compression>,
}

impl ConversionRequest {
    pub fn new(
        input_kind: ArtifactKind,
        input_format: DataFormat,
        input: impl Into<Vec<u8>>,
        output: impl Into<OutputSelection>,
    ) -> Self {
        Self {
            input_kind,
            input_format,
            input: input.into(),
            output: output.into(),
            output_format: None,
            compression: None,
        }
    }

    pub fn with_output_format(mut self, format: DataFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }
}

// ---------------------------------------------------------------------------
// Rendered / ConversionOutput
// ---------------------------------------------------------------------------

/// One artifact encoded in one format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub kind: ArtifactKind,
    pub format: DataFormat,
    pub data: Vec<u8>,
}

impl Rendered {
    /// `<kind>.<format>`, the key used when listing several outputs.
    pub fn label(&self) -> String {
        format!("{}.{}", self.kind, self.format)
    }

    /// The encoded text, or `None` for raw output.
    pub fn as_text(&self) -> Option<&str> {
        if !self.format.is_text() {
            return None;
        }
        std::str::from_utf8(&self.data).ok()
    }
}

/// Result of [`Converter::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionOutput {
    /// The one requested artifact.
    Single(Rendered),
    /// Every reachable artifact, in chain order, each in one or more formats.
    All(Vec<Rendered>),
}

impl ConversionOutput {
    pub fn single(&self) -> Option<&Rendered> {
        match self {
            Self::Single(rendered) => Some(rendered),
            Self::All(_) => None,
        }
    }

    /// Every rendered entry.
    pub fn entries(&self) -> &[Rendered] {
        match self {
            Self::Single(rendered) => std::slice::from_ref(rendered),
            Self::All(entries) => entries,
        }
    }

    /// The entry for `kind` in `format`, if present.
    pub fn find(&self, kind: ArtifactKind, format: DataFormat) -> Option<&Rendered> {
        self.entries()
            .iter()
            .find(|r| r.kind == kind && r.format == format)
    }
}

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

/// Decode, ingest, derive and render in one call.
pub struct Converter {
    engine: ConversionEngine,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            engine: ConversionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ConvertConfig {
        self.engine.config()
    }

    /// Decode the input, validate it, derive the requested artifacts and
    /// render them.
    pub fn run(&self, request: &ConversionRequest) -> ConvertResult<ConversionOutput> {
        let config = self.engine.config();
        let formats = match (request.output, request.output_format) {
            (_, Some(format)) => vec![format],
            (OutputSelection::All, None) => DataFormat::TEXT.to_vec(),
            (OutputSelection::One(kind), None) => {
                return Err(ConvertError::MissingOutputFormat(kind))
            }
        };

        if request.input_format == DataFormat::Base58Check && request.compression.is_some() {
            tracing::warn!(
                "overriding the compression recovered from base58check input is unusual"
            );
        }

        let input = if request.input_format.is_text() && config.trim_text_input {
            request.input.trim_ascii()
        } else {
            request.input.as_slice()
        };
        let raw = decode_input(request.input_format, input, config.limits)?;
        let artifact = ingest(request.input_kind, &raw, config)?;
        let set = self.engine.derive(artifact, request.output, request.compression)?;
        let rendered = self.render(&set, &formats)?;

        Ok(match request.output {
            OutputSelection::One(kind) => {
                let single = rendered
                    .into_iter()
                    .next()
                    .ok_or(ConvertError::ImpossibleConversion { from: request.input_kind, to: kind })?;
                ConversionOutput::Single(single)
            }
            OutputSelection::All => ConversionOutput::All(rendered),
        })
    }

    fn render(&self, set: &ArtifactSet, formats: &[DataFormat]) -> ConvertResult<Vec<Rendered>> {
        let limits = self.engine.config().limits;
        let mut out = Vec::with_capacity(set.len() * formats.len());
        for artifact in set.iter() {
            let bytes = artifact.to_bytes()?;
            for &format in formats {
                let data = encode_output(format, &bytes, limits)?;
                tracing::debug!(kind = %artifact.kind(), format = %format, len = data.len(), "rendered");
                out.push(Rendered {
                    kind: artifact.kind(),
                    format,
                    data,
                });
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyconv_types::ErrorKind;

    const WIF: &str = "5J2YUwNA5hmZFW33nbUCp5TmvszYXxVYthqDv7axSisBjFJMqaT";

    fn converter() -> Converter {
        Converter::new(ConvertConfig::default())
    }

    #[test]
    fn wif_to_address() {
        let request = ConversionRequest::new(
            ArtifactKind::PrivateKeyWif,
            DataFormat::Base58Check,
            WIF,
            ArtifactKind::Address,
        )
        .with_output_format(DataFormat::Base58Check);
        let output = converter().run(&request).unwrap();
        let single = output.single().unwrap();
        assert_eq!(single.label(), "address.base58check");
        assert_eq!(single.as_text(), Some("12345KDCsXMG9t85Aa1BZYwvJFfr1jXfDF"));
    }

    #[test]
    fn trailing_newline_is_trimmed() {
        let request = ConversionRequest::new(
            ArtifactKind::PrivateKeyWif,
            DataFormat::Base58Check,
            format!("  {WIF}\n"),
            ArtifactKind::PrivateKey,
        )
        .with_output_format(DataFormat::Hex);
        let output = converter().run(&request).unwrap();
        assert_eq!(
            output.single().unwrap().as_text(),
            Some("1bd4b0b9d0b23acff9f9de17466bd0893bc24c369522b5191d42af15766a2dfa")
        );
    }

    #[test]
    fn untrimmed_input_is_invalid() {
        let converter = Converter::new(ConvertConfig { trim_text_input: false, ..Default::default() });
        let request = ConversionRequest::new(
            ArtifactKind::PrivateKeyWif,
            DataFormat::Base58Check,
            format!("{WIF}\n"),
            ArtifactKind::PrivateKey,
        )
        .with_output_format(DataFormat::Hex);
        let err = converter.run(&request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn single_output_needs_a_format() {
        let request = ConversionRequest::new(
            ArtifactKind::PrivateKeyWif,
            DataFormat::Base58Check,
            WIF,
            ArtifactKind::Address,
        );
        let err = converter().run(&request).unwrap_err();
        assert_eq!(err, ConvertError::MissingOutputFormat(ArtifactKind::Address));
    }

    #[test]
    fn all_without_format_lists_every_text_format() {
        let request = ConversionRequest::new(
            ArtifactKind::PrivateKeyWif,
            DataFormat::Base58Check,
            WIF,
            OutputSelection::All,
        );
        let output = converter().run(&request).unwrap();
        assert_eq!(output.entries().len(), ArtifactKind::ALL.len() * 3);
        let first = &output.entries()[0];
        assert_eq!(first.label(), "private-key-wif.hex");
        assert_eq!(
            output
                .find(ArtifactKind::PrivateKeyWif, DataFormat::Base58Check)
                .and_then(Rendered::as_text),
            Some(WIF)
        );
        assert_eq!(
            output.find(ArtifactKind::Address, DataFormat::Base58).and_then(Rendered::as_text),
            Some("1ABHS5hLZBVfBv6jnsu9mmt2Yr5H")
        );
    }

    #[test]
    fn raw_output_is_bytes() {
        let request = ConversionRequest::new(
            ArtifactKind::PrivateKeyWif,
            DataFormat::Base58Check,
            WIF,
            ArtifactKind::PublicKeyRipemd160,
        )
        .with_output_format(DataFormat::Raw);
        let output = converter().run(&request).unwrap();
        let single = output.single().unwrap();
        assert_eq!(single.as_text(), None);
        assert_eq!(hex::encode(&single.data), "0b5b86296c6b1ef45afe895c71eaeb20880beca4");
    }

    #[test]
    fn raw_input_is_not_trimmed() {
        // a 32-byte scalar ending in a space must stay 32 bytes
        let mut scalar = [0x11u8; 32];
        scalar[31] = b' ';
        let request = ConversionRequest::new(
            ArtifactKind::PrivateKey,
            DataFormat::Raw,
            scalar.to_vec(),
            ArtifactKind::PrivateKey,
        )
        .with_output_format(DataFormat::Raw);
        let output = converter().run(&request).unwrap();
        assert_eq!(output.single().unwrap().data, scalar.to_vec());
    }
}
