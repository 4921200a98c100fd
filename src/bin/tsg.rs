use anstream::println;
use anyhow::Context;
use clap::{arg, command, value_parser};
use owo_colors::OwoColorize;
use tintshade::{Blend, ColorType, Format, Generator, Options};

pub fn main() -> std::process::ExitCode {
    let matches = command!()
        .arg(arg!(-f --format <FORMAT> "Color format: hex or rgba").default_value("hex"))
        .arg(
            arg!(-t --"type" <TYPE> "Variants to output: solo, tint, shade, soloTint, soloShade, tintShade or all")
                .default_value("solo"),
        )
        .arg(
            arg!(-a --opacity <ALPHA> "Alpha for the rgba format")
                .default_value("1")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--tint <FRACTION> "How far the tint moves toward white")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--shade <FRACTION> "How much of the color the shade keeps")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(-n --count <N> "Number of colors to generate")
                .default_value("1")
                .value_parser(value_parser!(u32)),
        )
        .arg(arg!(-q --quiet "Quiet, only show the colors").visible_alias("only-values"))
        .arg(arg!(--strict "Fail on unknown formats and types instead of using the defaults"))
        .arg(arg!(--seed <SEED> "Seed the pseudorandom generator").value_parser(value_parser!(u64)))
        .arg(
            arg!(--color <WHEN> "Controls when to use color")
                .default_value("auto")
                .value_parser(clap::builder::EnumValueParser::<clap::ColorChoice>::new()),
        )
        .get_matches();

    let color = match matches
        .get_one::<clap::ColorChoice>("color")
        .expect("default color value")
    {
        clap::ColorChoice::Auto => anstream::ColorChoice::Auto,
        clap::ColorChoice::Always => anstream::ColorChoice::Always,
        clap::ColorChoice::Never => anstream::ColorChoice::Never,
    };
    color.write_global();

    match run(&matches) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            println!("{}: {err:#}", "error".red());
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let format = matches
        .get_one::<String>("format")
        .expect("default format value");
    let color_type = matches
        .get_one::<String>("type")
        .expect("default type value");
    let strict = matches.get_flag("strict");

    let (format, color_type) = if strict {
        (
            format.parse::<Format>()?,
            color_type.parse::<ColorType>()?,
        )
    } else {
        (
            Format::from_name_lossy(format),
            ColorType::from_name_lossy(color_type),
        )
    };

    let default_blend = Blend::default();
    let blend = Blend::new(
        matches
            .get_one::<f64>("tint")
            .copied()
            .unwrap_or(default_blend.tint()),
        matches
            .get_one::<f64>("shade")
            .copied()
            .unwrap_or(default_blend.shade()),
    )
    .context("bad blend fractions")?;

    let opacity = *matches.get_one::<f64>("opacity").expect("default opacity");
    let count = *matches.get_one::<u32>("count").expect("default count");
    let quiet = matches.get_flag("quiet");

    let options = Options::new()
        .format(format)
        .color_type(color_type)
        .opacity(opacity)
        .blend(blend);

    let mut generator = match matches.get_one::<u64>("seed") {
        Some(&seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };

    for _ in 0..count {
        let result = generator.generate(&options);
        if quiet {
            println!("{result:#}");
        } else {
            println!("{result}");
        }
    }

    Ok(())
}
