//! `modboard stats`

use tabled::Tabled;

use modboard_core::effects;
use modboard_core::{AdminRepository, AdminStats};

use super::Backend;
use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Total")]
    total: u64,
}

fn rows(stats: &AdminStats) -> [StatRow; 3] {
    [
        StatRow {
            metric: "Total Users",
            total: stats.users,
        },
        StatRow {
            metric: "Total Posts",
            total: stats.posts,
        },
        StatRow {
            metric: "Total Comments",
            total: stats.comments,
        },
    ]
}

pub async fn handle<R: AdminRepository>(
    backend: &Backend<R>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    backend.require_admin().await?;
    let stats = effects::fetch_stats(&backend.repo, &backend.store)
        .await
        .map_err(|e| backend.fail(e))?;

    let out = output::render_single(
        &global.output,
        &stats,
        |s| output::render_table(&rows(s)),
        |s| format!("users\t{}\nposts\t{}\ncomments\t{}", s.users, s.posts, s.comments),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
