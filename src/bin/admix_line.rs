use admix_plot::line::parse_cli;
use admix_plot::{plot_xy_line, ChartSpec, PlotError, Table};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlotError> {
    let (datain, pdfout, x_label, y_label) = parse_cli();
    println!(
        "read table from {} and plot {} against {} to {}",
        datain.display(),
        y_label,
        x_label,
        pdfout.display()
    );
    let table = Table::from_path(&datain)?;
    let points = table.to_points()?;
    plot_xy_line(&points, &ChartSpec::xy_line(pdfout, x_label, y_label))?;
    Ok(())
}
