//! hash_generator: MD5, SHA1, SHA256, and SHA512 digests

use super::{parse_args, ToolOutput};
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use md5::Md5;
use serde::Deserialize;
use serde_json::Value;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum Algorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha512,
}

impl Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha512 => "SHA512",
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum Encoding {
    #[default]
    Hex,
    Base64,
}

#[derive(Debug, Deserialize)]
struct HashArgs {
    input: String,
    #[serde(default)]
    algorithm: Algorithm,
    #[serde(default)]
    encoding: Encoding,
}

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: HashArgs = parse_args(args)?;

    let digest = match args.algorithm {
        Algorithm::Md5 => Md5::digest(args.input.as_bytes()).to_vec(),
        Algorithm::Sha1 => Sha1::digest(args.input.as_bytes()).to_vec(),
        Algorithm::Sha256 => Sha256::digest(args.input.as_bytes()).to_vec(),
        Algorithm::Sha512 => Sha512::digest(args.input.as_bytes()).to_vec(),
    };

    let encoded = match args.encoding {
        Encoding::Hex => hex::encode(&digest),
        Encoding::Base64 => STANDARD.encode(&digest),
    };

    let preview: String = args.input.chars().take(50).collect();
    let ellipsis = if args.input.chars().count() > 50 { "..." } else { "" };

    Ok(ToolOutput::success(format!(
        "✅ Hash Generated\n\n\
         **Algorithm:** {}\n\
         **Encoding:** {}\n\
         **Input:** {preview}{ellipsis}\n\
         **Input Length:** {} chars\n\n\
         ```\n{encoded}\n```",
        args.algorithm.name(),
        match args.encoding {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
        },
        args.input.chars().count(),
    )))
}
