use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dealstore::models::{
    DailyReport, ExportJob, StoreRecord, Warranty, WarrantyInput, seed_daily_reports, seed_export_jobs, seed_stores,
    seed_warranties, warranty_export_spec,
};
use dealstore::{Config, FileBacking, MockGateway, Pager, Query, Record, Store, export_csv, report};
use eyre::{Result, eyre};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "dealstore")]
#[command(about = "Back-office record store: warranties, daily reports, stores, export log")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "dealstore.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List warranty records, optionally filtered and paged
    Warranties {
        /// Exact store name ("all" for no constraint)
        #[arg(long)]
        store: Option<String>,
        /// Substring match on owner/company name
        #[arg(long)]
        keyword: Option<String>,
        /// Creation date lower bound (YYYY-MM-DD, inclusive)
        #[arg(long)]
        start: Option<String>,
        /// Creation date upper bound (YYYY-MM-DD, inclusive)
        #[arg(long)]
        end: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Add a warranty record
    AddWarranty {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "")]
        store: String,
        #[arg(long, default_value = "")]
        payment: String,
    },

    /// Delete warranty records by id
    Delete {
        ids: Vec<String>,
    },

    /// Export selected warranty records to CSV
    Export {
        ids: Vec<String>,
        /// Directory the file is written into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// List daily reports
    Reports,

    /// Print the clipboard report block for a daily report id
    Report {
        id: String,
    },

    /// List the store directory
    Stores,

    /// List the export log
    ExportLog,
}

fn parse_day(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| eyre!("invalid date (expected YYYY-MM-DD): {}", s)),
    }
}

fn status_cell(status: &str) -> String {
    match status {
        "停用" => status.red().to_string(),
        _ => status.green().to_string(),
    }
}

fn open_store<T: Record>(config: &Config, seed: Vec<T>) -> Result<Store<T>> {
    let backing = FileBacking::open(&config.data_dir)?;
    let gateway = MockGateway::with_delay(Duration::from_millis(config.gateway_delay_ms));
    Ok(Store::open(Box::new(backing), Box::new(gateway), seed))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Warranties {
            store,
            keyword,
            start,
            end,
            page,
        } => {
            let warranties: Store<Warranty> = open_store(&config, seed_warranties())?;

            let mut query = Query::new();
            if let Some(store) = &store {
                query = query.equals("store", store);
            }
            if let Some(keyword) = &keyword {
                query = query.contains("company", keyword);
            }
            query = query.date_range("createdAt", parse_day(start.as_deref())?, parse_day(end.as_deref())?);

            let view = query.apply(warranties.list());
            let mut pager = Pager::new(config.page_size);
            pager.set_len(view.len());
            pager.goto(page);

            for w in pager.slice(&view) {
                println!(
                    "{}  {}  {}  {}  {}  {}",
                    w.id,
                    w.company,
                    w.phone,
                    w.store,
                    status_cell(&w.status),
                    w.created_at
                );
            }
            println!(
                "共 {} 条, 第 {}/{} 页",
                view.len(),
                pager.current(),
                pager.total_pages()
            );
        }

        Commands::AddWarranty {
            name,
            phone,
            store,
            payment,
        } => {
            let mut warranties: Store<Warranty> = open_store(&config, seed_warranties())?;
            let input = WarrantyInput {
                customer_name: name,
                customer_phone: phone,
                store,
                payment,
                ..Default::default()
            };
            let created = warranties.create(input)?;
            println!("{} {}", "已下单".green(), created.id);
        }

        Commands::Delete { ids } => {
            let mut warranties: Store<Warranty> = open_store(&config, seed_warranties())?;
            let removed = warranties.remove(&ids)?;
            println!("已删除 {} 条记录", removed);
        }

        Commands::Export { ids, out } => {
            let warranties: Store<Warranty> = open_store(&config, seed_warranties())?;
            let selected: HashSet<String> = ids.into_iter().collect();
            let file = export_csv(warranties.list(), &selected, &warranty_export_spec())?;
            let path = file.write_to(&out)?;
            println!("{} {}", "导出完成".green(), path.display());
        }

        Commands::Reports => {
            let reports: Store<DailyReport> = open_store(&config, seed_daily_reports())?;
            for r in reports.list() {
                println!(
                    "{}  {}  {}  {}  {}",
                    r.id,
                    r.name,
                    r.store,
                    r.date,
                    status_cell(&r.status)
                );
            }
        }

        Commands::Report { id } => {
            let reports: Store<DailyReport> = open_store(&config, seed_daily_reports())?;
            let record = reports.get(&id).ok_or_else(|| eyre!("record not found: {}", id))?;
            println!("{}", report::render_report(record));
        }

        Commands::Stores => {
            let stores: Store<StoreRecord> = open_store(&config, seed_stores())?;
            for s in stores.list() {
                println!(
                    "{}  {}  {}  {}  {}  {}",
                    s.code,
                    s.name,
                    s.product,
                    s.brand,
                    status_cell(&s.status),
                    s.created_at
                );
            }
        }

        Commands::ExportLog => {
            let jobs: Store<ExportJob> = open_store(&config, seed_export_jobs())?;
            for j in jobs.list() {
                println!(
                    "{}  {}  {}  {}  {}  {}",
                    j.id,
                    j.batch_id,
                    j.file_name,
                    j.creator,
                    status_cell(&j.status),
                    j.created_at
                );
            }
        }
    }

    Ok(())
}
