use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use sbnb::config::SbnbConfig;
use sbnb::io::cli::Cli;
use sbnb::io::output::SPOutput;
use sbnb::io::read_instance;
use sbnb::{EPOCH, io};
use strip_bnb::bnb::{BnbOutcome, BnbSolver};
use strip_bnb::io::export::export;
use strip_bnb::io::ext_repr::ExtSPInstance;
use strip_bnb::io::import::import;
use strip_bnb::io::svg::solution_to_svg;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SbnbConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed SbnbConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = read_instance(args.input_file.as_path())?;
    main_spp(ext_instance, config, &input_file_stem, args.solution_folder)
}

fn main_spp(
    ext_instance: ExtSPInstance,
    config: SbnbConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    let instance = import(&ext_instance)?;
    let outcome = BnbSolver::new(instance, config.bnb_config).solve()?;

    report(&outcome);

    {
        let output = SPOutput {
            instance: ext_instance,
            solution: export(&outcome, *EPOCH),
            config,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = solution_to_svg(&outcome.solution, config.svg_draw_options, input_stem);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}

fn report(outcome: &BnbOutcome) {
    let solution = &outcome.solution;
    info!(
        "[MAIN] execution time: {:.3}s, nodes explored: {}",
        outcome.stats.elapsed.as_secs_f64(),
        outcome.stats.nodes_explored.separate_with_commas()
    );
    info!("[MAIN] strip width: {}", solution.strip_width);
    match outcome.is_optimal() {
        true => info!("[MAIN] optimal height: {}", solution.height),
        false => warn!("[MAIN] best height found (not proven optimal): {}", solution.height),
    }
    for (i, pi) in solution.placed_items.iter().enumerate() {
        info!(
            "[MAIN] {}. rectangle of size ({}, {}) is packed at position ({}, {})",
            i + 1,
            pi.rect.width(),
            pi.rect.height(),
            pi.rect.x(),
            pi.rect.y()
        );
    }
}
