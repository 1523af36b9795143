//! Command-line front end: image files in, base64 hashes out, and back

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::{Parser, Subcommand};
use thumbhash::{
    average_rgba, decode_header, size_for, DecoderOptions, EncoderOptions, HashDecoder,
    HashEncoder, RgbaImage,
};

#[derive(Parser, Debug)]
#[command(
    name = "thumbhash",
    version,
    about = "Utilities for the ThumbHash image placeholder library"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an image to a raw RGBA8 data file
    ImageToRawData {
        /// Image to read
        path: PathBuf,
        /// Where to write the data; defaults to the input with a .data extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the hash of an image file
    EncodeImage {
        /// Image to hash
        path: PathBuf,
        /// Downscale the image so its larger side fits before hashing
        #[arg(long, default_value_t = thumbhash::consts::DEFAULT_MAX_SIDE)]
        max_side: u32,
        /// Hash every source pixel instead of downscaling first
        #[arg(long, conflicts_with = "max_side")]
        full_resolution: bool,
    },
    /// Decode a hash into a PNG placeholder
    DecodeImage {
        /// PNG file to write
        path: PathBuf,
        /// Base64-encoded hash
        hash: String,
        /// Larger side of the output image
        #[arg(short, long, default_value_t = thumbhash::consts::DEFAULT_BASE_SIZE)]
        size: u32,
        /// Chroma saturation boost
        #[arg(long, default_value_t = thumbhash::consts::DEFAULT_SATURATION_BOOST)]
        saturation: f64,
    },
    /// Print the fields of a hash
    Inspect {
        /// Base64-encoded hash
        hash: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::ImageToRawData { path, output } => image_to_raw_data(&path, output),
        Command::EncodeImage {
            path,
            max_side,
            full_resolution,
        } => encode_image(&path, (!full_resolution).then_some(max_side)),
        Command::DecodeImage {
            path,
            hash,
            size,
            saturation,
        } => decode_image(&path, &hash, size, saturation),
        Command::Inspect { hash } => inspect(&hash),
    }
}

fn image_to_raw_data(path: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| path.with_extension("data"));
    let image = read_image(path)?;

    std::fs::write(&output, image.as_raw())
        .with_context(|| format!("cannot write {}", output.display()))?;

    log::info!(
        "wrote {}x{} RGBA data to {}",
        image.width(),
        image.height(),
        output.display()
    );
    Ok(())
}

fn encode_image(path: &Path, max_side: Option<u32>) -> Result<()> {
    let image = read_image(path)?;

    let mut options = EncoderOptions::new();
    if let Some(max_side) = max_side {
        options = options.max_side(max_side);
    }
    let hash = HashEncoder::new(options)
        .encode(&image)
        .context("cannot hash image")?;

    println!("{}", STANDARD.encode(hash));
    Ok(())
}

fn decode_image(path: &Path, hash: &str, size: u32, saturation: f64) -> Result<()> {
    let bytes = parse_hash(hash)?;
    let options = DecoderOptions::new()
        .base_size(size)
        .saturation_boost(saturation);

    let placeholder = HashDecoder::new(options)
        .decode(&bytes)
        .context("cannot decode image")?;

    let (width, height) = (placeholder.width(), placeholder.height());
    let png = image::RgbaImage::from_raw(width, height, unpremultiply(placeholder.into_raw()))
        .ok_or_else(|| anyhow!("decoded buffer does not match {}x{}", width, height))?;
    png.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("cannot write {}", path.display()))?;

    log::info!("wrote {}x{} placeholder to {}", width, height, path.display());
    Ok(())
}

fn inspect(hash: &str) -> Result<()> {
    let bytes = parse_hash(hash)?;
    let header = decode_header(&bytes).context("cannot parse hash")?;
    let (lx, ly) = header.luminance_extent();
    let size = size_for(&header, thumbhash::consts::DEFAULT_BASE_SIZE);
    let [r, g, b, a] = average_rgba(&bytes)?;

    println!("bytes:       {} ({} header)", bytes.len(), header.byte_len());
    println!("alpha:       {}", header.has_alpha());
    println!("landscape:   {}", header.is_landscape);
    println!("luminance:   {}x{} grid, dc {}, scale {}", lx, ly, header.l_dc, header.l_scale);
    println!("p:           dc {}, scale {}", header.p_dc, header.p_scale);
    println!("q:           dc {}, scale {}", header.q_dc, header.q_scale);
    if let Some(alpha) = header.alpha {
        println!("a:           dc {}, scale {}", alpha.dc, alpha.scale);
    }
    println!("ac terms:    {}", header.ac_count());
    println!("aspect:      {:.3}", header.aspect_ratio());
    println!("output size: {}x{}", size.width, size.height);
    println!("average:     {:.3} {:.3} {:.3} {:.3}", r, g, b, a);
    Ok(())
}

fn parse_hash(hash: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(hash.trim())
        .context("cannot decode base64-encoded hash")
}

fn read_image(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path)
        .with_context(|| format!("cannot read image from {}", path.display()))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();

    log::debug!("read {}x{} image from {}", width, height, path.display());

    RgbaImage::from_raw(width, height, decoded.into_raw())
        .with_context(|| format!("{} has no pixels", path.display()))
}

/// Placeholders carry color scaled by alpha; PNG stores it straight
fn unpremultiply(mut data: Vec<u8>) -> Vec<u8> {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
        }
    }
    data
}
