use argh::FromArgs;
use byteorder::{BigEndian, LittleEndian};
use image::{ImageFormat, RgbImage};
use raw565::{decode, encode, Rgb888Image};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Raw RGB565 cli converter.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Encode(Encode),
    Decode(Decode),
}

#[derive(Debug, Clone, Copy)]
enum Endian {
    Little,
    Big,
}

impl Endian {
    fn as_str(self) -> &'static str {
        match self {
            Endian::Little => "little",
            Endian::Big => "big",
        }
    }
}

impl FromStr for Endian {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[rustfmt::skip]
        let Some(endian) = s.eq_ignore_ascii_case("little").then_some(Endian::Little)
               .or_else(|| s.eq_ignore_ascii_case("big").then_some(Endian::Big))
        else { return Err("invalid string"); };

        Ok(endian)
    }
}

#[derive(Debug)]
enum Format {
    Png,
    Jpg,
    Bmp,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[rustfmt::skip]
        let Some(format) = s.eq_ignore_ascii_case("png").then_some(Format::Png)
               .or_else(|| s.eq_ignore_ascii_case("jpg").then_some(Format::Jpg))
               .or_else(|| s.eq_ignore_ascii_case("bmp").then_some(Format::Bmp))
        else { return Err("invalid string"); };

        Ok(format)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = argh::from_env();

    match command {
        Command::Encode(options) => encode_command(options),
        Command::Decode(options) => decode_command(options),
    }
}

/// Converts an image (PNG, JPG, BMP, TIFF) to a raw RGB565 dump.
#[derive(FromArgs)]
#[argh(subcommand, name = "encode")]
struct Encode {
    /// byte order of the output file (little, big; default little)
    #[argh(option, default = "Endian::Little")]
    endian: Endian,

    /// decode the written file again and save a PNG preview next to it
    #[argh(switch)]
    preview: bool,

    /// the input image file
    #[argh(positional)]
    input: String,

    /// the output file; defaults to the input path with a `_rgb565.bin` suffix
    #[argh(positional)]
    output: Option<String>,
}

fn encode_command(options: Encode) -> Result<(), Box<dyn std::error::Error>> {
    let Encode {
        endian,
        preview,
        input,
        output,
    } = options;

    let image = image::io::Reader::open(&input)?
        .with_guessed_format()?
        .decode()?;

    let width = image.width();
    let height = image.height();

    println!("Encoding {width}x{height} image, {} endian", endian.as_str());

    let pixels = image.into_rgb8().pixels().map(|p| p.0).collect::<Vec<_>>();
    let raster = Rgb888Image::from_raw(width as usize, height as usize, pixels)
        .ok_or("failed to create raster")?;

    let mut blob = Vec::new();
    match endian {
        Endian::Little => encode::encode_to_vec::<LittleEndian>(&raster, &mut blob)?,
        Endian::Big => encode::encode_to_vec::<BigEndian>(&raster, &mut blob)?,
    }

    let output = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(Path::new(&input)));
    std::fs::write(&output, &blob)?;
    println!("Written {} bytes to `{}`", blob.len(), output.display());

    if preview {
        let preview_path = output.with_extension("preview.png");
        let decoded = match endian {
            Endian::Little => decode::decode::<LittleEndian>(&blob)?,
            Endian::Big => decode::decode::<BigEndian>(&blob)?,
        };
        save_raster(decoded, &preview_path, ImageFormat::Png)?;
        println!("Written preview to `{}`", preview_path.display());
    }

    Ok(())
}

/// Converts a raw RGB565 dump back into a viewable image.
#[derive(FromArgs)]
#[argh(subcommand, name = "decode")]
struct Decode {
    /// byte order of the input file (little, big; default little)
    #[argh(option, default = "Endian::Little")]
    endian: Endian,

    /// output format (png, jpg, bmp)
    #[argh(option)]
    format: Format,

    /// the input dump file
    #[argh(positional)]
    input: String,

    /// the output file
    #[argh(positional)]
    output: String,
}

fn decode_command(options: Decode) -> Result<(), Box<dyn std::error::Error>> {
    let Decode {
        endian,
        format,
        input,
        output,
    } = options;

    let data = std::fs::read(&input)?;

    println!("Decoding `{input}`, {} endian", endian.as_str());

    let raster = match endian {
        Endian::Little => decode::decode::<LittleEndian>(&data)?,
        Endian::Big => decode::decode::<BigEndian>(&data)?,
    };

    let width = raster.width();
    let height = raster.height();

    save_raster(
        raster,
        Path::new(&output),
        match format {
            Format::Png => ImageFormat::Png,
            Format::Jpg => ImageFormat::Jpeg,
            Format::Bmp => ImageFormat::Bmp,
        },
    )?;
    println!("Written {width}x{height} image to `{output}`");

    Ok(())
}

/// Default output path: the input's file stem with `_rgb565.bin` appended,
/// in the input's directory.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    input.with_file_name(format!("{stem}_rgb565.bin"))
}

fn save_raster(
    raster: Rgb888Image,
    path: &Path,
    format: ImageFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = (raster.width() as u32, raster.height() as u32);

    let mut rgb888_raw = Vec::with_capacity(raster.width() * raster.height() * 3);
    for pixel in raster.into_raw() {
        rgb888_raw.extend_from_slice(&pixel);
    }

    RgbImage::from_vec(width, height, rgb888_raw)
        .ok_or("failed to create image")?
        .save_with_format(path, format)?;

    Ok(())
}
