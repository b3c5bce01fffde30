// main.rs - CLI entry point

use snakefront::prelude::*;

fn main() {
    match run_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("❌ ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_main() -> Result<i32, String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("💡 Save this content to a .yaml file and use --configfile /path/to/config.yaml");
        return Ok(0);
    }

    // Load configuration file if specified
    if let Some(config_path) = args.configfile.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let resolved = resolve_args(&args)?;

    println!("🚀 snakefront v{}", env!("CARGO_PKG_VERSION"));

    let command = SnakemakeCommand::build(&resolved);
    println!("▶️  {}", command);

    // The workflow's own exit status becomes ours.
    dispatch(&command)
}
