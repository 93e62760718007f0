use std::path::PathBuf;

use alpha_sdf::prelude::*;
use anyhow::Context;
use clap::{ arg, value_parser, ArgAction, ArgMatches, Command };


fn command() -> Command {
    clap::command!()
        .about("Create a signed distance field from the alpha channel of an image.")
        // `-h` is the output height
        .disable_help_flag(true)
        .arg(arg!(--help "Print help").action(ArgAction::Help))
        .arg(arg!(--"dist-color" "Output the distance into rgb instead of alpha"))
        .arg(arg!(--luminance "Copy the red channel of the input into rgb"))
        .arg(
            arg!(-r --radius <RADIUS> "Sampling radius")
                .value_parser(value_parser!(u16))
                .default_value("8"),
        )
        .arg(
            arg!(--threshold <ALPHA> "Alpha difference that separates inside from outside")
                .value_parser(value_parser!(u8))
                .default_value("128"),
        )
        .arg(arg!(-w --width <WIDTH> "Output image width").value_parser(value_parser!(u32)))
        .arg(arg!(-h --height <HEIGHT> "Output image height").value_parser(value_parser!(u32)))
        .arg(
            arg!(--half "Output the image at half its size")
                .conflicts_with_all(["width", "height"]),
        )
        .arg(
            arg!(--filter <FILTER> "Resampling filter: nearest, triangle, catmull-rom, gaussian or lanczos3")
                .value_parser(value_parser!(ResampleFilter))
                .default_value("triangle"),
        )
        .arg(arg!(<input> "Input image").value_parser(value_parser!(PathBuf)))
        .arg(arg!(<output> "Output image").value_parser(value_parser!(PathBuf)))
}

fn sdf_config(matches: &ArgMatches) -> SdfConfig {
    let output_mode = if matches.get_flag("dist-color") { OutputMode::DistanceColor } else { OutputMode::AlphaSdf };
    let rgb_copy_mode = if matches.get_flag("luminance") { RgbCopyMode::LuminanceBroadcast } else { RgbCopyMode::Passthrough };

    SdfConfig::default()
        .with_radius(*matches.get_one::<u16>("radius").unwrap_or(&alpha_sdf::config::DEFAULT_RADIUS))
        .with_alpha_threshold(*matches.get_one::<u8>("threshold").unwrap_or(&alpha_sdf::config::DEFAULT_ALPHA_THRESHOLD))
        .with_output_mode(output_mode)
        .with_rgb_copy_mode(rgb_copy_mode)
}

fn target_dimensions(matches: &ArgMatches) -> Option<TargetDimensions> {
    let width = matches.get_one::<u32>("width").copied();
    let height = matches.get_one::<u32>("height").copied();

    if matches.get_flag("half") {
        Some(TargetDimensions::half())
    }
    else if width.is_some() || height.is_some() {
        Some(TargetDimensions::Exact { width, height })
    }
    else {
        None
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command().get_matches();

    let input = matches.get_one::<PathBuf>("input").context("missing input path")?;
    let output = matches.get_one::<PathBuf>("output").context("missing output path")?;
    let filter = matches.get_one::<ResampleFilter>("filter").copied().unwrap_or_default();
    let config = sdf_config(&matches);

    let source = load_rgba(input)
        .with_context(|| format!("failed to read image {}", input.display()))?;

    log::info!("read {}x{} image from {}", source.width(), source.height(), input.display());

    let mut sdf = compute_sdf_image(&source, &config);
    drop(source);

    if let Some(target) = target_dimensions(&matches) {
        sdf = resample(sdf, target, filter)
            .context("failed to resize the distance field")?;
    }

    log::info!("writing {}x{} image to {}", sdf.width(), sdf.height(), output.display());

    save_image(output, sdf)
        .with_context(|| format!("failed to write image {}", output.display()))?;

    Ok(())
}
