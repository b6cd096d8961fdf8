use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ecoinsight::forms::WasteEntryForm;
use ecoinsight::models::{Page, Recyclable, StatCard};
use ecoinsight::store::DashboardStore;
use ecoinsight::{render, report};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "ecoinsight",
    version,
    about = "Render, refresh & export the EcoInsight sustainability dashboard"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render dashboard pages to SVG/HTML fragment files.
    Render(RenderArgs),
    /// Export the recent-activity report as CSV.
    Export(ExportArgs),
    /// Print the statistic cards of every page.
    Summary(SummaryArgs),
    /// Append a waste entry and re-render the analytics page.
    AddWaste(AddWasteArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Page to render (dashboard, resources, analytics, goals). All pages if omitted.
    #[arg(short, long)]
    page: Option<String>,
    /// Output directory for the rendered fragments.
    #[arg(long, default_value = "dashboard")]
    out: PathBuf,
    /// Container width in pixels; falls back to 300 if omitted.
    #[arg(long)]
    width: Option<f64>,
    /// Locale tag for axis labels (e.g., "en" or "de").
    #[arg(long, default_value = "en")]
    locale: String,
    /// Reporting date (YYYY-MM-DD). Selecting one jitters the headline stats
    /// before rendering, like the dashboard's date picker.
    #[arg(short = 'd', long)]
    date: Option<String>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Destination CSV path.
    #[arg(long, default_value = "recent_activity_report.csv")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Emit JSON instead of plain text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RecyclableArg {
    Yes,
    No,
}

impl From<RecyclableArg> for Recyclable {
    fn from(v: RecyclableArg) -> Self {
        match v {
            RecyclableArg::Yes => Recyclable::Yes,
            RecyclableArg::No => Recyclable::No,
        }
    }
}

#[derive(Args, Debug)]
struct AddWasteArgs {
    /// Process name (e.g., "Packaging").
    #[arg(long)]
    process: String,
    /// Waste type (e.g., "Plastic").
    #[arg(long)]
    waste_type: String,
    /// Amount in kilograms.
    #[arg(long)]
    amount: f64,
    /// Recycling method.
    #[arg(long)]
    method: String,
    #[arg(long, value_enum)]
    recyclable: RecyclableArg,
    /// Output directory for the re-rendered analytics page.
    #[arg(long, default_value = "dashboard")]
    out: PathBuf,
    /// Container width in pixels; falls back to 300 if omitted.
    #[arg(long)]
    width: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Export(args) => cmd_export(args),
        Command::Summary(args) => cmd_summary(args),
        Command::AddWaste(args) => cmd_add_waste(args),
    }
}

fn parse_page(s: &str) -> Result<Page> {
    Page::from_str(s).map_err(|e| anyhow::anyhow!(e))
}

fn write_fragments(
    page: Page,
    store: &DashboardStore,
    out: &Path,
    width: Option<f64>,
    locale: &str,
) -> Result<usize> {
    let fragments = render::render_page(page, store, width, locale)?;
    fs::create_dir_all(out)?;
    for f in &fragments {
        fs::write(out.join(&f.file_name), &f.markup)?;
    }
    Ok(fragments.len())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut store = DashboardStore::sample();
    if let Some(s) = &args.date {
        let date: NaiveDate = s
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --date, expected YYYY-MM-DD"))?;
        log::info!("refreshing stats for {date}");
        store.randomize_stats(&mut rand::thread_rng());
    }

    let pages: Vec<Page> = match &args.page {
        Some(s) => vec![parse_page(s)?],
        None => Page::ALL.to_vec(),
    };
    for page in pages {
        let n = write_fragments(page, &store, &args.out, args.width, &args.locale)?;
        eprintln!("Saved {} {} fragments to {}", n, page.slug(), args.out.display());
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<()> {
    let store = DashboardStore::sample();
    report::save_activity_csv(&store.recent_activity, &args.out)?;
    eprintln!(
        "Saved {} activity rows to {}",
        store.recent_activity.len(),
        args.out.display()
    );
    Ok(())
}

#[derive(Serialize)]
struct SummaryOut<'a> {
    dashboard: &'a [StatCard],
    resources: &'a [StatCard],
    analytics: &'a [StatCard],
    goals: &'a [StatCard],
}

fn fmt_trend(card: &StatCard) -> String {
    match card.trend {
        Some(t) => format!("  {t:+}% vs. last period"),
        None => String::new(),
    }
}

fn cmd_summary(args: SummaryArgs) -> Result<()> {
    let store = DashboardStore::sample();
    if args.json {
        let out = SummaryOut {
            dashboard: &store.dashboard_stats,
            resources: &store.resource_stats,
            analytics: &store.analytics_stats,
            goals: &store.goals_summary,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let groups = [
        (Page::Dashboard, &store.dashboard_stats),
        (Page::Resources, &store.resource_stats),
        (Page::Analytics, &store.analytics_stats),
        (Page::Goals, &store.goals_summary),
    ];
    for (page, cards) in groups {
        println!("{}", page.title());
        for card in cards {
            println!("  {}: {} {}{}", card.label, card.value, card.unit, fmt_trend(card));
        }
    }
    Ok(())
}

fn cmd_add_waste(args: AddWasteArgs) -> Result<()> {
    let mut store = DashboardStore::sample();
    let form = WasteEntryForm {
        process_name: args.process,
        waste_type: args.waste_type,
        amount_kg: Some(args.amount),
        recycling_method: args.method,
        recyclable: Some(args.recyclable.into()),
    };
    let entry = form.validate()?;
    store.append_waste_entry(entry);
    log::info!("new waste data submitted");

    // The new row is visible to the next render call.
    let n = write_fragments(Page::Analytics, &store, &args.out, args.width, "en")?;
    eprintln!("Saved {} analytics fragments to {}", n, args.out.display());
    Ok(())
}
