use admix_plot::bars::parse_cli;
use admix_plot::{plot_stacked_bars, ChartSpec, PlotError, Table};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlotError> {
    let (datain, pdfout) = parse_cli();
    println!(
        "read table from {} and plot ancestry bars to {}",
        datain.display(),
        pdfout.display()
    );
    let table = Table::from_path(&datain)?;
    let records = table.to_long()?;
    plot_stacked_bars(&records, &ChartSpec::stacked_bars(pdfout))?;
    Ok(())
}
