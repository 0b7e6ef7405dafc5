use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments for the stacked ancestry bar chart.
pub fn parse_cli() -> (PathBuf, PathBuf) {
    let arg_datain = Arg::with_name("data_file")
        .help("whitespace-delimited table with a header row, first column names the samples")
        .index(1)
        .required(true);
    let arg_pdfout = Arg::with_name("pdf_file")
        .help("path for the output pdf")
        .index(2)
        .required(true);
    let cli_args = App::new("admix_bars")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to plot per-sample ancestry fractions as stacked bars")
        .arg(arg_datain)
        .arg(arg_pdfout)
        .get_matches();
    let datain = PathBuf::from(cli_args.value_of("data_file").unwrap_or_default());
    let pdfout = PathBuf::from(cli_args.value_of("pdf_file").unwrap_or_default());
    return (datain, pdfout);
}
