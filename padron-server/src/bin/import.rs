//! Bulk roll import
//!
//! Loads a headerless CSV (`member_number,full_name,national_id`) into the
//! affiliate table. Rows whose keys are already present are skipped, not
//! overwritten, so re-runs are idempotent. This is an operator bootstrap
//! tool: imported rows land without audit entries.

use clap::Parser;
use padron_server::Config;
use padron_server::db::DbService;

#[derive(Parser)]
#[command(name = "padron-import")]
#[command(version, about = "Import affiliates from a headerless CSV roll")]
struct Cli {
    /// CSV file with member_number,full_name,national_id rows
    #[arg(short, long, default_value = "afiliados.csv")]
    file: String,

    /// SQLite database path (defaults to the configured work dir)
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    padron_server::init_logger();

    let cli = Cli::parse();

    let db_path = match cli.database {
        Some(path) => path,
        None => {
            let config = Config::from_env();
            config.ensure_work_dir_structure()?;
            config.database_path().to_string_lossy().into_owned()
        }
    };

    let content = std::fs::read_to_string(&cli.file)?;
    let service = DbService::new(&db_path).await?;

    let mut parsed = 0usize;
    let mut inserted = 0usize;
    let mut skipped = 0usize;

    let now = shared::util::now_millis();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        parsed += 1;

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [member_number, full_name, national_id] = fields[..] else {
            tracing::warn!(
                "Line {}: expected 3 columns, got {}",
                line_no + 1,
                fields.len()
            );
            skipped += 1;
            continue;
        };
        if member_number.is_empty() || full_name.is_empty() || national_id.is_empty() {
            skipped += 1;
            continue;
        }

        // Duplicate keys are skipped, not overwritten
        let result = sqlx::query(
            "INSERT OR IGNORE INTO affiliate (national_id, member_number, full_name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
        )
        .bind(national_id)
        .bind(member_number)
        .bind(full_name)
        .bind(now)
        .execute(&service.pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
        } else {
            skipped += 1;
        }
    }

    tracing::info!(
        "✅ Import finished: {} rows parsed, {} inserted, {} skipped",
        parsed,
        inserted,
        skipped
    );

    Ok(())
}
