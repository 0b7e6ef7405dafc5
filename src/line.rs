use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments for the xy line chart.
pub fn parse_cli() -> (PathBuf, PathBuf, String, String) {
    let arg_datain = Arg::with_name("data_file")
        .help("whitespace-delimited table with a header row and two numeric columns")
        .index(1)
        .required(true);
    let arg_pdfout = Arg::with_name("pdf_file")
        .help("path for the output pdf")
        .index(2)
        .required(true);
    let arg_xlabel = Arg::with_name("x_label")
        .help("text for the x axis title")
        .index(3)
        .required(true);
    let arg_ylabel = Arg::with_name("y_label")
        .help("text for the y axis title")
        .index(4)
        .required(true);
    let cli_args = App::new("admix_line")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to plot a two-column table as points connected by a line")
        .arg(arg_datain)
        .arg(arg_pdfout)
        .arg(arg_xlabel)
        .arg(arg_ylabel)
        .get_matches();
    let datain = PathBuf::from(cli_args.value_of("data_file").unwrap_or_default());
    let pdfout = PathBuf::from(cli_args.value_of("pdf_file").unwrap_or_default());
    let x_label = cli_args.value_of("x_label").unwrap_or_default().to_string();
    let y_label = cli_args.value_of("y_label").unwrap_or_default().to_string();
    return (datain, pdfout, x_label, y_label);
}
