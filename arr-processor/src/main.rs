// reset; cargo run -- --input-dir "./Complete Received Files"
// reset; cargo run -- --input-dir ./received --output-file 2020_ARR_Summary.xlsx --log-file 2020_ErrorLog.txt

use clap::Parser;
use review_lib::{DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FILE, Reporter, ReviewConfig, VendorRegistry};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "arr-processor")]
#[command(about = "Validate vendor account-review workbooks and build the consolidated summary")]
#[command(version)]
struct Args {
    /// Directory holding the received review workbooks (.xlsx). The summary and log are written here too.
    #[arg(short, long, default_value = ".")]
    input_dir: PathBuf,

    /// File name of the consolidated summary workbook
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output_file: String,

    /// File name of the run log
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Optional JSON file with vendor templates: [{"name": "...", "headers": ["...", ...]}].
    /// Replaces the built-in Signant, ERT and EPX layouts.
    #[arg(short, long)]
    templates: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<ReviewConfig, anyhow::Error> {
        let mut config = ReviewConfig::new(self.input_dir)
            .with_output_file(&self.output_file)
            .with_log_file(&self.log_file);

        if let Some(templates) = self.templates {
            config = config.with_registry(VendorRegistry::from_json_file(&templates)?);
        }

        return Ok(config);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let log_path = config.log_path();
    match Reporter::new(config).run() {
        Ok(summary) => {
            for count in &summary.sheet_counts {
                println!("  {:<24} {:>6} row(s)", count.sheet_name, count.rows);
            }
            println!(
                "✅ Processed {} file(s), skipped {}, {} row(s) written.",
                summary.files_processed, summary.files_skipped, summary.rows_written
            );
            println!("✅ Summary workbook: {}", summary.output_path.display());
            if summary.files_skipped > 0 {
                eprintln!("❌ Check {} for skipped files.", summary.log_path.display());
            } else {
                println!("✅ Run log: {}", summary.log_path.display());
            }
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("❌ Run aborted with error: {e:#}");
            eprintln!("❌ Check {} for details.", log_path.display());
            std::process::exit(1);
        }
    }
}
